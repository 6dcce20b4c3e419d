//! Utilization bar chart: "used vs. total" classified against warning/error
//! thresholds, with a one-shot load-in animation flag and a terminal renderer.

pub mod chart;
pub mod config;
pub mod events;
pub mod render;
pub mod state;

pub use state::Dashboard;

#[cfg(test)]
mod tests;
