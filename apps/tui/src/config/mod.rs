mod config;

pub use config::{debug_enabled, init_app_config, load_country_table, ConfigError};
