mod animation;
mod classifier;
mod datum;
mod error;
mod label;
mod thresholds;
mod widget;

pub use animation::AnimationTrigger;
pub use classifier::{classify, classify_with, percentage_used, Classification, Severity};
pub use datum::{LooseNumber, RawDatum, UtilizationDatum};
pub use error::ChartError;
pub use label::{format_label, LabelFormat};
pub use thresholds::{BoundaryPolicy, RawThresholds, Thresholds};
pub use widget::{
    BarView, ChartBindings, ChartDefaults, ChartOptions, FillClass, Layout, UtilizationBarChart,
};
