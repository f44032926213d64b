//! DCGAN for 32x32 Color Images
//!
//! Main entry point providing CLI interface for:
//! - Running shape/range checks on both networks
//! - Printing per-layer shape traces
//! - Generating sample batches

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rust_dcgan_images::{
    checks::{check_discriminator, check_generator},
    model::DCGAN,
    utils::Config,
};

/// DCGAN generator and discriminator for 32x32 color images
#[derive(Parser)]
#[command(name = "dcgan_images")]
#[command(version = "0.1.0")]
#[command(about = "DCGAN architecture checks and sampling for 32x32 RGB images")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run shape and range checks on both networks
    Check {
        /// Batch size for the dummy batches
        #[arg(short, long, default_value = "16")]
        batch_size: i64,
    },

    /// Print per-layer output shapes for both networks
    Trace {
        /// Batch size for the dummy batches
        #[arg(short, long, default_value = "2")]
        batch_size: i64,
    },

    /// Generate a batch of images from random noise and report statistics
    Sample {
        /// Number of images to generate
        #[arg(short, long, default_value = "16")]
        num_samples: i64,
    },

    /// Initialize default configuration file
    Init {
        /// Output configuration file path
        #[arg(short, long, default_value = "config.json")]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbosity.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Check { batch_size } => {
            run_checks(&cli.config, batch_size)?;
        }
        Commands::Trace { batch_size } => {
            trace_shapes(&cli.config, batch_size)?;
        }
        Commands::Sample { num_samples } => {
            sample(&cli.config, num_samples)?;
        }
        Commands::Init { output } => {
            init_config(&output)?;
        }
    }

    Ok(())
}

/// Load config from file, falling back to defaults
fn load_config(config_path: &str) -> Result<Config> {
    let config = if std::path::Path::new(config_path).exists() {
        if config_path.ends_with(".toml") {
            Config::from_toml(config_path)?
        } else {
            Config::from_json(config_path)?
        }
    } else {
        info!("Config file not found, using defaults");
        Config::default()
    };
    config.validate()?;
    Ok(config)
}

/// Run shape and range checks on both networks
fn run_checks(config_path: &str, batch_size: i64) -> Result<()> {
    let config = load_config(config_path)?;
    let device = config.get_device();
    info!("Using device: {:?}", device);

    let model = DCGAN::new(
        config.generator_config(),
        config.discriminator_config(),
        device,
    );

    check_discriminator(&model.discriminator, batch_size)?;
    check_generator(&model.generator, batch_size)?;

    info!("All checks passed (batch size {})", batch_size);
    Ok(())
}

/// Print per-layer output shapes for both networks
fn trace_shapes(config_path: &str, batch_size: i64) -> Result<()> {
    let config = load_config(config_path)?;
    let device = config.get_device();

    let model = DCGAN::new(
        config.generator_config(),
        config.discriminator_config(),
        device,
    );

    info!("Discriminator layer shapes:");
    for (name, size) in model.discriminator.layer_shapes(batch_size) {
        info!("  {:>8}: {:?}", name, size);
    }

    info!("Generator layer shapes:");
    for (name, size) in model.generator.layer_shapes(batch_size) {
        info!("  {:>8}: {:?}", name, size);
    }

    Ok(())
}

/// Generate a batch of images and report value statistics
fn sample(config_path: &str, num_samples: i64) -> Result<()> {
    let config = load_config(config_path)?;
    let device = config.get_device();

    let model = DCGAN::new(
        config.generator_config(),
        config.discriminator_config(),
        device,
    );

    info!("Generating {} images", num_samples);
    let images = model.generate(num_samples);

    let min_val: f64 = images.min().double_value(&[]);
    let max_val: f64 = images.max().double_value(&[]);
    let mean_val: f64 = images.mean(tch::Kind::Float).double_value(&[]);

    info!("Generated batch shape: {:?}", images.size());
    info!(
        "Pixel range: [{:.4}, {:.4}], mean {:.4}",
        min_val, max_val, mean_val
    );

    let probs = model.discriminate(&images);
    let mean_prob: f64 = probs.mean(tch::Kind::Float).double_value(&[]);
    info!("Mean discriminator probability on samples: {:.4}", mean_prob);

    Ok(())
}

/// Initialize default configuration file
fn init_config(output_path: &str) -> Result<()> {
    let config = Config::default();

    if output_path.ends_with(".toml") {
        config.save_toml(output_path)?;
    } else {
        config.save_json(output_path)?;
    }

    info!("Created default configuration at {}", output_path);
    Ok(())
}
