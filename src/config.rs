use serde_json::Value;

pub const DEFAULT_CHANNEL: u8 = 0;
pub const DEFAULT_PORT: u16 = 5555;

/// Fallback device name when the configuration leaves `name` empty.
pub const DEFAULT_NAME: &str = "FreePIE";

/// Per-device configuration, built once from host-provided parameters and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Channel tag this device listens to (0-15). Frames on other channels
    /// are discarded.
    pub channel: u8,
    /// Local UDP port to bind. Port 0 delegates the choice to the OS.
    pub port: u16,
    /// Device name reported downstream; empty means use [`DEFAULT_NAME`].
    pub name: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            channel: DEFAULT_CHANNEL,
            port: DEFAULT_PORT,
            name: String::new(),
        }
    }
}

impl DeviceConfig {
    /// Build a config from a host-provided JSON parameter object.
    ///
    /// Recognized keys: `channel` (0-15), `port` (0-65535), `name` (string).
    /// Out-of-range or wrongly typed values are reported via `log::warn!`
    /// and replaced by the defaults; unknown keys are ignored. This never
    /// fails, so device construction can always proceed.
    pub fn from_json(params: &Value) -> DeviceConfig {
        let mut cfg = DeviceConfig::default();

        if let Some(v) = params.get("channel") {
            match v.as_i64() {
                Some(i) if (0..=15).contains(&i) => cfg.channel = i as u8,
                _ => log::warn!(
                    "invalid channel {} (valid range is 0-15), using {}",
                    v,
                    cfg.channel
                ),
            }
        }

        if let Some(v) = params.get("port") {
            match v.as_i64() {
                Some(i) if (0..=65535).contains(&i) => cfg.port = i as u16,
                _ => log::warn!(
                    "invalid port {} (valid range is 0-65535), using {}",
                    v,
                    cfg.port
                ),
            }
        }

        if let Some(v) = params.get("name") {
            match v.as_str() {
                Some(s) => cfg.name = s.to_string(),
                None => log::warn!("invalid name {}, using default", v),
            }
        }

        cfg
    }

    /// Parse a raw JSON parameter string. Malformed input is reported and
    /// yields the full defaults.
    pub fn from_json_str(params: &str) -> DeviceConfig {
        match serde_json::from_str::<Value>(params) {
            Ok(root) => DeviceConfig::from_json(&root),
            Err(e) => {
                log::warn!("could not parse device parameters: {}", e);
                DeviceConfig::default()
            }
        }
    }

    /// Configured name, falling back to [`DEFAULT_NAME`] when empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_NAME
        } else {
            &self.name
        }
    }
}
