//! # Application Configuration
//!
//! Everything the engine needs before the first frame: window size and title,
//! the target frame rate and the log filter. All types are serde structs so
//! an [`ApplicationConfig`] can be loaded from TOML or RON via [`Config`].

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
}

impl WindowConfig {
    /// Create a window configuration
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Invalid("Window title cannot be empty".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Vex", 800, 600)
    }
}

/// # Frame Configuration
///
/// Pacing for the frame driver. Update and render run once each time the
/// accumulated real time crosses `1 / target_fps` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Target frames per second
    pub target_fps: f64,
}

impl FrameConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "Target FPS must be positive, got {}",
                self.target_fps
            )));
        }
        Ok(())
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { target_fps: 60.0 }
    }
}

/// # Logging Configuration
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "vex_engine=debug"). When unset, `RUST_LOG` is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive
    pub filter: Option<String>,
}

/// # Complete Application Configuration
///
/// Top-level configuration applications pass to [`crate::Engine::new`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Frame pacing configuration
    #[serde(default)]
    pub frame: FrameConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ApplicationConfig {
    /// Create a configuration with the given window title and defaults elsewhere
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            window: WindowConfig {
                title: title.into(),
                ..WindowConfig::default()
            },
            ..Self::default()
        }
    }

    /// Set the window size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the target frame rate
    pub fn with_target_fps(mut self, fps: f64) -> Self {
        self.frame.target_fps = fps;
        self
    }

    /// Set the log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = Some(filter.into());
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.frame.validate()
    }
}

impl Config for ApplicationConfig {}
