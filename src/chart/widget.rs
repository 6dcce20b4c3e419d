use super::animation::AnimationTrigger;
use super::classifier::{classify_with, Classification, Severity};
use super::datum::{RawDatum, UtilizationDatum};
use super::error::ChartError;
use super::label::{format_label, LabelFormat};
use super::thresholds::{BoundaryPolicy, Thresholds};
use crate::events::{Event, EventHub};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Alternative arrangements of description, bar and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Description above the bar.
    #[default]
    Regular,
    /// Description, bar and label on a single line.
    Inline,
}

impl FromStr for Layout {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "inline" => Ok(Self::Inline),
            _ => Err(ChartError::UnknownLayout(s.to_string())),
        }
    }
}

/// Fill color of the used portion of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillClass {
    /// Blue: no thresholds, or no threshold flag set.
    Default,
    /// Green: below the warning threshold.
    Success,
    /// Orange: past warning, below error.
    Warning,
    /// Red: past the error threshold.
    Danger,
}

impl FillClass {
    pub const fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::None => Self::Default,
            Severity::Ok => Self::Success,
            Severity::Warn => Self::Warning,
            Severity::Error => Self::Danger,
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Success => "progress-bar-success",
            Self::Warning => "progress-bar-warning",
            Self::Danger => "progress-bar-danger",
        }
    }
}

/// Everything a view layer needs to draw one bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarView {
    pub description: String,
    pub layout: Layout,
    pub percentage_used: u32,
    /// Percentage clamped to 0..=100 for the fill width.
    pub bar_width: u32,
    pub fill: FillClass,
    pub label: String,
    pub animate: bool,
}

/// One chart entry as written in the bindings file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBindings {
    pub id: String,
    pub chart_data: Option<RawDatum>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub units: String,
    pub thresholds: Option<Thresholds>,
    pub label_format: Option<LabelFormat>,
    pub layout: Option<Layout>,
}

/// Values used for bindings that leave them out.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartDefaults {
    pub thresholds: Option<Thresholds>,
    pub label_format: LabelFormat,
    pub layout: Layout,
    pub policy: BoundaryPolicy,
}

/// Resolved presentation options of a single chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOptions {
    pub description: String,
    pub units: String,
    pub thresholds: Option<Thresholds>,
    pub label_format: LabelFormat,
    pub layout: Layout,
    pub policy: BoundaryPolicy,
}

/// A utilization bar chart instance.
///
/// Owns its datum, derived fields and animation flag. Every new datum is
/// reclassified and restarts the load-in animation.
#[derive(Debug)]
pub struct UtilizationBarChart {
    id: String,
    options: ChartOptions,
    chart_data: Option<UtilizationDatum>,
    classification: Option<Classification>,
    animation: AnimationTrigger,
    event_hub: EventHub,
}

impl UtilizationBarChart {
    pub fn new(id: impl Into<String>, options: ChartOptions, event_hub: EventHub) -> Self {
        let id = id.into();
        Self {
            animation: AnimationTrigger::new(id.clone(), event_hub.clone()),
            id,
            options,
            chart_data: None,
            classification: None,
            event_hub,
        }
    }

    /// Build a chart from file bindings, filling gaps from `defaults`.
    pub fn from_bindings(
        bindings: ChartBindings,
        defaults: &ChartDefaults,
        event_hub: EventHub,
    ) -> Result<Self, ChartError> {
        let datum = bindings.chart_data.map(UtilizationDatum::try_from).transpose()?;

        let options = ChartOptions {
            description: bindings.description,
            units: bindings.units,
            thresholds: bindings.thresholds.or(defaults.thresholds),
            label_format: bindings.label_format.unwrap_or(defaults.label_format),
            layout: bindings.layout.unwrap_or(defaults.layout),
            policy: defaults.policy,
        };

        let mut chart = Self::new(bindings.id, options, event_hub);
        if let Some(datum) = datum {
            chart.set_chart_data(datum);
        }
        Ok(chart)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn chart_data(&self) -> Option<&UtilizationDatum> {
        self.chart_data.as_ref()
    }

    pub const fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Replace the datum, reclassify and restart the load-in animation.
    pub fn set_chart_data(&mut self, datum: UtilizationDatum) {
        self.chart_data = Some(datum);
        let classification = self.reclassify();
        self.animation.trigger();

        if let Some(c) = classification {
            debug!(chart = %self.id, percentage = c.percentage_used, "chart data updated");
            let _ = self.event_hub.publish(Event::ChartUpdated {
                chart: self.id.clone(),
                percentage_used: c.percentage_used,
                severity: c.severity(),
            });
        }
    }

    /// Replace thresholds. Derived fields follow, the animation does not restart.
    pub fn set_thresholds(&mut self, thresholds: Option<Thresholds>) {
        self.options.thresholds = thresholds;
        self.reclassify();
    }

    fn reclassify(&mut self) -> Option<Classification> {
        self.classification = self.chart_data.as_ref().map(|datum| {
            classify_with(datum, self.options.thresholds.as_ref(), self.options.policy)
        });
        self.classification
    }

    /// Wait until the pending animation reset has fired.
    pub async fn settle(&self) {
        self.animation.settle().await;
    }

    /// Render model for the current state. `None` until data arrives.
    pub fn view(&self) -> Option<BarView> {
        let datum = self.chart_data.as_ref()?;
        let classification = self.classification.as_ref()?;

        Some(BarView {
            description: self.options.description.clone(),
            layout: self.options.layout,
            percentage_used: classification.percentage_used,
            bar_width: classification.percentage_used.min(100),
            fill: FillClass::from_severity(classification.severity()),
            label: format_label(
                self.options.label_format,
                datum,
                classification,
                &self.options.units,
            ),
            animate: self.is_animating(),
        })
    }
}
