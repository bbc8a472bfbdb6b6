pub mod app_config;

pub use app_config::{demo_network, AppConfig, ConfigError, LogConfig};
