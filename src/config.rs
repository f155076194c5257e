//! App Configuration
//!
//! Built once in `main` and provided to components via context.

use leptos::prelude::*;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the activity array
    pub storage_key: &'static str,
    /// Prefix shown before prices
    pub currency_prefix: &'static str,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos",
            currency_prefix: "RM",
            log_level: LevelFilter::Info,
        }
    }
}

/// Get the app config from context, falling back to defaults
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
