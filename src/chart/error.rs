use thiserror::Error;

/// Errors raised while building chart inputs from bindings.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// The used/total pair cannot produce a meaningful percentage.
    #[error("invalid utilization {used}/{total}: {reason}")]
    InvalidInput { used: f64, total: f64, reason: &'static str },

    /// A threshold that is not a finite percentage.
    #[error("invalid {name} threshold {value}: expected a percentage between 0 and 100")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A numeric binding supplied as a string that does not parse.
    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("unknown label format {0:?} (expected 'actual' or 'percent')")]
    UnknownLabelFormat(String),

    #[error("unknown layout {0:?} (expected 'regular' or 'inline')")]
    UnknownLayout(String),

    #[error("unknown boundary policy {0:?} (expected 'strict' or 'inclusive')")]
    UnknownBoundaryPolicy(String),
}
