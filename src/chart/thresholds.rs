use super::datum::LooseNumber;
use super::error::ChartError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Warning and error percentage boundaries.
///
/// Values are percentages (0-100). `warning < error` is expected but not
/// required; callers that load thresholds from config log when it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    pub warning: f64,
    pub error: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawThresholds {
    pub warning: LooseNumber,
    pub error: LooseNumber,
}

impl Thresholds {
    pub const fn new(warning: f64, error: f64) -> Self {
        Self { warning, error }
    }

    /// Build thresholds, rejecting values that are not percentages in 0..=100.
    pub fn try_new(warning: f64, error: f64) -> Result<Self, ChartError> {
        for (name, value) in [("warning", warning), ("error", error)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ChartError::InvalidThreshold { name, value });
            }
        }
        Ok(Self::new(warning, error))
    }

    pub fn is_ordered(&self) -> bool {
        self.warning < self.error
    }
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = ChartError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::try_new(raw.warning.try_into()?, raw.error.try_into()?)
    }
}

/// How a percentage that lands exactly on a threshold is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Strict inequalities on both sides. A percentage equal to either
    /// threshold sets no flag at all.
    #[default]
    Strict,
    /// Reaching a threshold counts as crossing it, so every percentage
    /// gets exactly one flag when thresholds are ordered.
    Inclusive,
}

impl FromStr for BoundaryPolicy {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "inclusive" => Ok(Self::Inclusive),
            _ => Err(ChartError::UnknownBoundaryPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Inclusive => write!(f, "inclusive"),
        }
    }
}
