use super::defaults::{DEFAULT_BAR_WIDTH, DEFAULT_CHARTS_PATH, DEFAULT_CONFIG_PATH};
use crate::chart::{BoundaryPolicy, ChartDefaults, LabelFormat, Layout, Thresholds};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub config_path: String,
    /// JSON file holding the chart bindings to render.
    pub charts_path: String,
    /// Gauge width in terminal cells.
    pub bar_width: usize,
    /// Default warning threshold (percent) for charts without their own.
    pub warning_threshold: Option<f64>,
    /// Default error threshold (percent) for charts without their own.
    pub error_threshold: Option<f64>,
    pub boundary_policy: BoundaryPolicy,
    pub color: bool,
    pub label_format: LabelFormat,
    pub layout: Layout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            charts_path: DEFAULT_CHARTS_PATH.to_string(),
            bar_width: DEFAULT_BAR_WIDTH,
            warning_threshold: None,
            error_threshold: None,
            boundary_policy: BoundaryPolicy::default(),
            color: true,
            label_format: LabelFormat::default(),
            layout: Layout::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then env overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("UB_CONFIG_PATH") {
            config.config_path = path;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `UB_*` overrides using `lookup` to read variables.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(path) = lookup("UB_CHARTS_PATH") {
            self.charts_path = path;
        }
        if let Some(width) = lookup("UB_BAR_WIDTH") {
            self.bar_width =
                width.trim().parse().context("UB_BAR_WIDTH must be a positive integer")?;
        }
        if lookup("UB_NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        Ok(())
    }

    /// Thresholds applied to charts that do not bring their own.
    ///
    /// Both values must be configured; a lone warning or error is ignored.
    pub fn default_thresholds(&self) -> Option<Thresholds> {
        match (self.warning_threshold, self.error_threshold) {
            (Some(warning), Some(error)) => Some(Thresholds::new(warning, error)),
            _ => None,
        }
    }

    pub fn chart_defaults(&self) -> ChartDefaults {
        ChartDefaults {
            thresholds: self.default_thresholds(),
            label_format: self.label_format,
            layout: self.layout,
            policy: self.boundary_policy,
        }
    }
}
