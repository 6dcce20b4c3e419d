use super::defaults::MAX_BAR_WIDTH;
use super::settings::AppConfig;
use anyhow::Result;
use tracing::warn;

fn check_threshold(name: &str, value: Option<f64>) -> Result<()> {
    if let Some(v) = value {
        anyhow::ensure!(
            v.is_finite() && (0.0..=100.0).contains(&v),
            "{name} must be a percentage between 0 and 100, got {v}"
        );
    }
    Ok(())
}

impl AppConfig {
    /// Validate configuration values are sane.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.bar_width >= 1 && self.bar_width <= MAX_BAR_WIDTH,
            "bar_width must be between 1 and {MAX_BAR_WIDTH}"
        );
        anyhow::ensure!(!self.charts_path.trim().is_empty(), "charts_path must not be empty");
        check_threshold("warning_threshold", self.warning_threshold)?;
        check_threshold("error_threshold", self.error_threshold)?;

        if let Some(t) = self.default_thresholds() {
            if !t.is_ordered() {
                warn!(
                    "warning_threshold ({}) is not below error_threshold ({}); \
                     charts may report overlapping severities",
                    t.warning, t.error
                );
            }
        }
        Ok(())
    }
}
