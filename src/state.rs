use crate::chart::{ChartBindings, UtilizationBarChart};
use crate::config::{AppConfig, EVENT_CHANNEL_CAPACITY};
use crate::events::EventHub;
use crate::render;
use std::io::{self, Write};
use tracing::{info, warn};

/// The set of charts owned by the embedder, plus their shared event hub.
#[derive(Debug)]
pub struct Dashboard {
    pub config: AppConfig,
    pub event_hub: EventHub,
    charts: Vec<UtilizationBarChart>,
}

impl Dashboard {
    pub fn new(config: AppConfig) -> Self {
        Self { config, event_hub: EventHub::new(EVENT_CHANNEL_CAPACITY), charts: Vec::new() }
    }

    /// Build a widget for each binding.
    ///
    /// Entries with invalid data are skipped so one bad chart does not hide
    /// the rest. Returns how many charts were added.
    pub fn add_charts(&mut self, bindings: Vec<ChartBindings>) -> usize {
        let defaults = self.config.chart_defaults();
        let before = self.charts.len();

        for binding in bindings {
            let id = binding.id.clone();
            match UtilizationBarChart::from_bindings(binding, &defaults, self.event_hub.clone()) {
                Ok(chart) => self.charts.push(chart),
                Err(e) => warn!("Skipping chart {id}: {e}"),
            }
        }

        let added = self.charts.len() - before;
        info!("Loaded {added} charts");
        added
    }

    pub fn charts(&self) -> &[UtilizationBarChart] {
        &self.charts
    }

    /// Wait until every chart's load-in animation has settled.
    pub async fn settle(&self) {
        for chart in &self.charts {
            chart.settle().await;
        }
    }

    /// Write every chart that has data to `out`, separated by blank lines.
    pub fn render_to(&self, out: &mut impl Write) -> io::Result<()> {
        let mut first = true;
        for view in self.charts.iter().filter_map(UtilizationBarChart::view) {
            if !first {
                writeln!(out)?;
            }
            first = false;
            for line in render::render_bar(&view, self.config.bar_width, self.config.color) {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}
