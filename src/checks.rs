//! Shape and range checks for the DCGAN networks
//!
//! In-process check harness: construct a dummy batch, run the forward pass,
//! and verify the output tensor shape and value range. These are the
//! properties the networks must uphold regardless of their weights.

use anyhow::{bail, Result};
use tch::Tensor;

use crate::model::{Discriminator, Generator};

/// Verify the discriminator contract for a given batch size
///
/// Builds a dummy batch of shape (batch_size, channels, image_size,
/// image_size), runs the forward pass, and fails unless the output has
/// shape (batch_size, 1) with every value in [0, 1].
pub fn check_discriminator(disc: &Discriminator, batch_size: i64) -> Result<()> {
    let config = disc.config();
    let input = Tensor::randn(
        [batch_size, config.channels, config.image_size, config.image_size],
        (tch::Kind::Float, disc.device()),
    );

    let output = disc.forward_t(&input, false);

    let expected = vec![batch_size, 1];
    if output.size() != expected {
        bail!(
            "discriminator output shape mismatch: expected {:?}, got {:?}",
            expected,
            output.size()
        );
    }

    let min_val: f64 = output.min().double_value(&[]);
    let max_val: f64 = output.max().double_value(&[]);
    if min_val < 0.0 || max_val > 1.0 {
        bail!(
            "discriminator output out of [0, 1]: min {:.6}, max {:.6}",
            min_val,
            max_val
        );
    }

    tracing::info!(
        "discriminator check passed: ({}, {}, {}, {}) -> {:?}",
        batch_size,
        config.channels,
        config.image_size,
        config.image_size,
        output.size()
    );
    Ok(())
}

/// Verify the generator contract for a given batch size
///
/// Builds a dummy standard-normal batch of shape (batch_size, latent_dim),
/// runs the forward pass, and fails unless the output has shape
/// (batch_size, channels, image_size, image_size) with every value in
/// [-1, 1].
pub fn check_generator(gen: &Generator, batch_size: i64) -> Result<()> {
    let config = gen.config();
    let noise = Tensor::randn(
        [batch_size, config.latent_dim],
        (tch::Kind::Float, gen.device()),
    );

    let output = gen.forward_t(&noise, false);

    let expected = vec![
        batch_size,
        config.channels,
        config.image_size,
        config.image_size,
    ];
    if output.size() != expected {
        bail!(
            "generator output shape mismatch: expected {:?}, got {:?}",
            expected,
            output.size()
        );
    }

    let min_val: f64 = output.min().double_value(&[]);
    let max_val: f64 = output.max().double_value(&[]);
    if min_val < -1.0 || max_val > 1.0 {
        bail!(
            "generator output out of [-1, 1]: min {:.6}, max {:.6}",
            min_val,
            max_val
        );
    }

    tracing::info!(
        "generator check passed: ({}, {}) -> {:?}",
        batch_size,
        config.latent_dim,
        output.size()
    );
    Ok(())
}
