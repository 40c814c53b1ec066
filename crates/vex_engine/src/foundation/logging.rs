//! Logging utilities and structured logging support

use crate::core::config::LoggingConfig;

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// The filter comes from the config if set, then `RUST_LOG`, then defaults to
/// `info`. Calling this more than once is harmless; later calls are ignored.
pub fn init(config: &LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = &config.filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    if builder.try_init().is_ok() {
        log::debug!("logging initialized");
    }
}
