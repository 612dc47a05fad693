//! Module containing the universal error type
use thiserror::Error;

/// Universal error type for `intervalmath`
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum Error {
    /// Interval start is greater than its end
    #[error("start ({start}) > end ({end})")]
    InvalidRange {
        /// Requested lower bound
        start: f64,
        /// Requested upper bound
        end: f64,
    },

    /// One of the interval bounds is `NaN`
    #[error("interval bounds must not be NaN")]
    NanBound,
}
