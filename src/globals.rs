use once_cell::sync::Lazy;
use tracing::warn;

use crate::config::Config;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e:#}");
        Config::default()
    })
});
