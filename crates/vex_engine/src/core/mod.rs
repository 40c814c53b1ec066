//! # Core Engine Module
//!
//! Shared configuration types used by the window, the frame driver and the
//! logging setup.

pub mod config;

pub use config::{
    ApplicationConfig,
    WindowConfig,
    FrameConfig,
    LoggingConfig,
};
pub use crate::config::{Config, ConfigError, ConfigFormat};
