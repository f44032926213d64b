//! Configuration management
//!
//! Provides unified configuration for the DCGAN networks.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{DiscriminatorConfig, GeneratorConfig};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Model configuration
    pub model: ModelConfig,
    /// Device: "cpu" or "cuda"
    pub device: String,
}

/// Model-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Latent dimension size
    pub latent_dim: i64,
    /// Base filters for both networks
    pub conv_dim: i64,
    /// Image side length (square images)
    pub image_size: i64,
    /// Number of image channels (3 for RGB)
    pub channels: i64,
    /// Dropout rate for discriminator
    pub dropout: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                latent_dim: 128,
                conv_dim: 32,
                image_size: 32,
                channels: 3,
                dropout: 0.3,
            },
            device: "cpu".to_string(),
        }
    }
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_toml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_toml(&self, path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn save_json(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build a generator configuration from this config
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            latent_dim: self.model.latent_dim,
            conv_dim: self.model.conv_dim,
            image_size: self.model.image_size,
            channels: self.model.channels,
        }
    }

    /// Build a discriminator configuration from this config
    pub fn discriminator_config(&self) -> DiscriminatorConfig {
        DiscriminatorConfig {
            conv_dim: self.model.conv_dim,
            image_size: self.model.image_size,
            channels: self.model.channels,
            dropout: self.model.dropout,
        }
    }

    /// Get device from configuration
    pub fn get_device(&self) -> tch::Device {
        match self.device.to_lowercase().as_str() {
            "cuda" | "gpu" => {
                if tch::Cuda::is_available() {
                    tch::Device::Cuda(0)
                } else {
                    tracing::warn!("CUDA requested but not available, falling back to CPU");
                    tch::Device::Cpu
                }
            }
            _ => tch::Device::Cpu,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.model.latent_dim <= 0 {
            anyhow::bail!("Latent dimension must be > 0");
        }
        if self.model.conv_dim <= 0 {
            anyhow::bail!("Base filter count must be > 0");
        }
        if self.model.channels <= 0 {
            anyhow::bail!("Channel count must be > 0");
        }
        // Three stride-2 stages need the side length divisible by 8
        if self.model.image_size <= 0 || self.model.image_size % 8 != 0 {
            anyhow::bail!("Image size must be a positive multiple of 8");
        }
        if !(0.0..1.0).contains(&self.model.dropout) {
            anyhow::bail!("Dropout must be in [0, 1)");
        }
        Ok(())
    }
}

/// Create default configuration file if it doesn't exist
pub fn ensure_config_exists(path: &str) -> anyhow::Result<Config> {
    if Path::new(path).exists() {
        if path.ends_with(".toml") {
            Config::from_toml(path)
        } else {
            Config::from_json(path)
        }
    } else {
        let config = Config::default();
        if path.ends_with(".toml") {
            config.save_toml(path)?;
        } else {
            config.save_json(path)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.model.latent_dim, 128);
        assert_eq!(config.model.conv_dim, 32);
        assert_eq!(config.model.image_size, 32);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let loaded: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(config.model.latent_dim, loaded.model.latent_dim);
        assert_eq!(config.device, loaded.device);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        let config = Config::default();
        config.save_toml(path).unwrap();
        let loaded = Config::from_toml(path).unwrap();

        assert_eq!(config.model.conv_dim, loaded.model.conv_dim);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.model.latent_dim = 0;
        assert!(config.validate().is_err());

        config.model.latent_dim = 128;
        config.model.image_size = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ensure_config_exists_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let path = path.to_str().unwrap();

        let config = ensure_config_exists(path).unwrap();
        assert_eq!(config.model.latent_dim, 128);
        assert!(Path::new(path).exists());
    }
}
