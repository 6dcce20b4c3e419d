use super::classifier::Classification;
use super::datum::UtilizationDatum;
use super::error::ChartError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Text shown at the end of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// `"{used} of {total} {units} Used"`
    #[default]
    Actual,
    /// `"{percentage}% Used"`
    Percent,
}

impl FromStr for LabelFormat {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "actual" => Ok(Self::Actual),
            "percent" => Ok(Self::Percent),
            _ => Err(ChartError::UnknownLabelFormat(s.to_string())),
        }
    }
}

pub fn format_label(
    format: LabelFormat,
    datum: &UtilizationDatum,
    classification: &Classification,
    units: &str,
) -> String {
    match format {
        LabelFormat::Actual => {
            let units = units.trim();
            if units.is_empty() {
                format!("{} of {} Used", datum.used(), datum.total())
            } else {
                format!("{} of {} {units} Used", datum.used(), datum.total())
            }
        }
        LabelFormat::Percent => format!("{}% Used", classification.percentage_used),
    }
}
