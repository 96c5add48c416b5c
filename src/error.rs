use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid zoom level for {name}: {value} (must be finite and > 0)")]
    InvalidZoomLevel { name: &'static str, value: f64 },

    #[error("animation duration must be greater than zero")]
    ZeroAnimationDuration,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
