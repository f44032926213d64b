//! # DCGAN for 32x32 Color Images
//!
//! This crate provides a modular implementation of the Deep Convolutional
//! Generative Adversarial Network (DCGAN) architecture for 32x32 RGB images:
//! a transpose-convolutional generator and a convolutional discriminator.
//!
//! ## Modules
//!
//! - `model`: DCGAN architecture (Generator and Discriminator)
//! - `checks`: shape and value-range checks for both networks
//! - `utils`: helper functions and configuration

pub mod checks;
pub mod model;
pub mod utils;

pub use checks::{check_discriminator, check_generator};
pub use model::{Discriminator, DiscriminatorConfig, Generator, GeneratorConfig, DCGAN};
pub use utils::{ensure_config_exists, Config, ModelConfig};
