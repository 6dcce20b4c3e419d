use super::settings::AppConfig;
use tracing::warn;

fn parse_flag(value: &str) -> bool {
    value == "yes" || value == "true" || value == "1"
}

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format.
    ///
    /// Unknown keys are ignored. Values that fail to parse keep the previous
    /// setting and are logged.
    pub fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            let ok = match key {
                "CHARTS_PATH" => {
                    self.charts_path = value.to_string();
                    true
                }
                "BAR_WIDTH" => value.parse().map(|v| self.bar_width = v).is_ok(),
                "WARNING_THRESHOLD" => {
                    value.parse().map(|v| self.warning_threshold = Some(v)).is_ok()
                }
                "ERROR_THRESHOLD" => value.parse().map(|v| self.error_threshold = Some(v)).is_ok(),
                "BOUNDARY_POLICY" => value.parse().map(|v| self.boundary_policy = v).is_ok(),
                "LABEL_FORMAT" => value.parse().map(|v| self.label_format = v).is_ok(),
                "LAYOUT" => value.parse().map(|v| self.layout = v).is_ok(),
                "COLOR" => {
                    self.color = parse_flag(value);
                    true
                }
                _ => true, // Ignore unknown keys
            };

            if !ok {
                warn!("Ignoring invalid config value {key}={value:?}");
            }
        }
    }
}
