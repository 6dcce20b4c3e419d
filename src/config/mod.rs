mod charts;
mod defaults;
mod parser;
mod settings;
mod validation;

pub use charts::{load_chart_bindings, parse_chart_bindings};
pub use defaults::EVENT_CHANNEL_CAPACITY;
pub use settings::AppConfig;
