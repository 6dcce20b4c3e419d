use super::error::ChartError;
use serde::{Deserialize, Serialize};

/// A numeric binding as embedders supply it: either a JSON number or a
/// numeric string such as `"24"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl TryFrom<LooseNumber> for f64 {
    type Error = ChartError;

    fn try_from(value: LooseNumber) -> Result<Self, Self::Error> {
        match value {
            LooseNumber::Number(n) => Ok(n),
            LooseNumber::Text(s) => {
                s.trim().parse::<Self>().map_err(|_| ChartError::InvalidNumber(s))
            }
        }
    }
}

/// The `chartData` binding before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDatum {
    pub used: LooseNumber,
    pub total: LooseNumber,
}

/// A validated used/total pair.
///
/// `total` is always positive and finite, `used` is non-negative and finite.
/// `used` may exceed `total`, which produces a percentage above 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDatum")]
pub struct UtilizationDatum {
    used: f64,
    total: f64,
}

impl UtilizationDatum {
    pub fn new(used: f64, total: f64) -> Result<Self, ChartError> {
        let invalid = |reason| ChartError::InvalidInput { used, total, reason };

        if !used.is_finite() || !total.is_finite() {
            return Err(invalid("values must be finite"));
        }
        if total <= 0.0 {
            return Err(invalid("total must be greater than zero"));
        }
        if used < 0.0 {
            return Err(invalid("used must not be negative"));
        }

        let datum = Self { used, total };
        let percent = datum.ratio_percent().round();
        if !percent.is_finite() || percent > f64::from(u32::MAX) {
            return Err(invalid("percentage used is out of range"));
        }

        Ok(datum)
    }

    pub const fn used(&self) -> f64 {
        self.used
    }

    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Unrounded ratio of used to total, times 100.
    pub fn ratio_percent(&self) -> f64 {
        100.0 * (self.used / self.total)
    }
}

impl TryFrom<RawDatum> for UtilizationDatum {
    type Error = ChartError;

    fn try_from(raw: RawDatum) -> Result<Self, Self::Error> {
        Self::new(raw.used.try_into()?, raw.total.try_into()?)
    }
}
