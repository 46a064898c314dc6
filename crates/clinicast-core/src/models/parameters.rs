use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Level (`alpha`) and trend (`beta`) decay constants for exponential
/// smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SmoothingParameters {
    pub alpha: f64,
    pub beta: f64,
}

impl SmoothingParameters {
    pub const DEFAULT: SmoothingParameters = SmoothingParameters {
        alpha: 0.3,
        beta: 0.1,
    };
}

impl Default for SmoothingParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where a forecast should take its smoothing parameters from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParameterSource {
    /// Built-in defaults for the chosen method.
    #[default]
    Defaults,
    /// Whatever the optimizer last cached for this subject and signal,
    /// falling back to defaults when nothing is cached.
    Cached,
    /// Caller-supplied values.
    Explicit(SmoothingParameters),
}
