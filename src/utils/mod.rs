//! Helper functions and configuration

pub mod config;

pub use config::{ensure_config_exists, Config, ModelConfig};
