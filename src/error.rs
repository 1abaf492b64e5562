//! Error types for phase and metric analysis

use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

/// Errors surfaced at analysis call boundaries.
///
/// All errors are detected up front and returned immediately; there is no
/// retry or partial-result path. Masked phase bins are data (NaN sentinel),
/// never errors.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Malformed numeric input: non-positive duration or sample rate, empty
    /// waveform, negative mask threshold, or an invalid smoothing window.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Metric name outside the fixed closed set known to the interpreter.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
}
