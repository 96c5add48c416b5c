use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::Theme;

pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Startup settings for a [`crate::wheel::YearWheel`].
///
/// ```toml
/// year = 2024
/// timezone = "Europe/Paris"
/// theme = "dark"
/// animation_ms = 600
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// `None` shows the clock's current year.
    pub year: Option<i32>,
    pub timezone: String,
    pub theme: Theme,
    pub animation_ms: u64,
    pub today_zoom: f64,
    pub week_zoom: f64,
    pub month_zoom: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            year: None,
            timezone: DEFAULT_TIMEZONE.to_string(),
            theme: Theme::Light,
            animation_ms: 800,
            today_zoom: 4.0,
            week_zoom: 6.0,
            month_zoom: 2.5,
        }
    }
}

impl WheelConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: WheelConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.animation_ms == 0 {
            return Err(ConfigError::ZeroAnimationDuration);
        }
        for (name, value) in [
            ("today_zoom", self.today_zoom),
            ("week_zoom", self.week_zoom),
            ("month_zoom", self.month_zoom),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidZoomLevel { name, value });
            }
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}
