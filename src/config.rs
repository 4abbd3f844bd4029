//! Pipeline tuning knobs.
//!
//! A [`PipelineConfig`] is attached to a [`Pipeline`](crate::Pipeline) at construction and
//! read when operations are registered. It can be built in code with struct update syntax
//! or parsed from JSON:
//!
//! ```
//! use opchain::{DistinctMode, PipelineConfig};
//!
//! let cfg = PipelineConfig {
//!     distinct_mode: DistinctMode::Window(64),
//!     ..Default::default()
//! };
//! assert_eq!(cfg.insertion_threshold, 10);
//!
//! let parsed = PipelineConfig::from_json_str(r#"{ "insertion_threshold": 16 }"#).unwrap();
//! assert_eq!(parsed.insertion_threshold, 16);
//! assert_eq!(parsed.distinct_mode, DistinctMode::FullScan);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default length at or below which quicksort switches to insertion sort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 10;

/// How [`distinct`](crate::Pipeline::distinct) compares a candidate against the elements
/// it has already accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistinctMode {
    /// Compare against every accepted element. Reference semantics.
    #[default]
    FullScan,
    /// Compare only against the last `n` accepted elements.
    ///
    /// With a non-transitive equality relation, or duplicates more than `n` accepted
    /// elements apart, this admits elements that [`DistinctMode::FullScan`] rejects.
    /// A window of 0 behaves as a window of 1.
    Window(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Quicksort ranges of this length or shorter are finished with insertion sort.
    /// Values below 2 are raised to 2.
    pub insertion_threshold: usize,
    /// Mode used by [`Pipeline::distinct`](crate::Pipeline::distinct).
    pub distinct_mode: DistinctMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
            distinct_mode: DistinctMode::FullScan,
        }
    }
}

impl PipelineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`PipelineError::Config`](crate::PipelineError::Config) if `json` is malformed
    /// or has fields of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
