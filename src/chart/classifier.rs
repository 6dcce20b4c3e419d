use super::datum::UtilizationDatum;
use super::thresholds::{BoundaryPolicy, Thresholds};
use serde::Serialize;

/// Summary severity used to pick the bar's fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// No thresholds, or the percentage sits exactly on a strict boundary.
    None,
    Ok,
    Warn,
    Error,
}

/// Fields derived from a datum and optional thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub percentage_used: u32,
    pub is_ok: bool,
    pub is_warn: bool,
    pub is_error: bool,
}

impl Classification {
    /// The most severe flag that is set.
    ///
    /// With inverted thresholds (`warning > error`) more than one flag can be
    /// set at once; error wins over warn, warn over ok.
    pub const fn severity(&self) -> Severity {
        if self.is_error {
            Severity::Error
        } else if self.is_warn {
            Severity::Warn
        } else if self.is_ok {
            Severity::Ok
        } else {
            Severity::None
        }
    }
}

/// Round `100 * used / total` half away from zero.
pub fn percentage_used(datum: &UtilizationDatum) -> u32 {
    // Datum validation guarantees a finite, non-negative ratio.
    datum.ratio_percent().round() as u32
}

/// Classify with the legacy strict boundaries.
pub fn classify(datum: &UtilizationDatum, thresholds: Option<&Thresholds>) -> Classification {
    classify_with(datum, thresholds, BoundaryPolicy::Strict)
}

pub fn classify_with(
    datum: &UtilizationDatum,
    thresholds: Option<&Thresholds>,
    policy: BoundaryPolicy,
) -> Classification {
    let percentage_used = percentage_used(datum);

    let Some(t) = thresholds else {
        return Classification { percentage_used, is_ok: false, is_warn: false, is_error: false };
    };

    let p = f64::from(percentage_used);
    let (is_ok, is_warn, is_error) = match policy {
        BoundaryPolicy::Strict => (p < t.warning, p > t.warning && p < t.error, p > t.error),
        BoundaryPolicy::Inclusive => (p < t.warning, p >= t.warning && p < t.error, p >= t.error),
    };

    Classification { percentage_used, is_ok, is_warn, is_error }
}
