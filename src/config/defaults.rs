/// Default path of the INI config file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "/etc/utilization-bar/utilization-bar.cfg";

/// Default path of the JSON chart bindings file.
pub(super) const DEFAULT_CHARTS_PATH: &str = "charts.json";

/// Default gauge width in terminal cells.
pub(super) const DEFAULT_BAR_WIDTH: usize = 30;

/// Widest gauge the renderer accepts.
pub(super) const MAX_BAR_WIDTH: usize = 200;

/// Capacity of the chart event broadcast channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;
