//! DCGAN wrapper combining Generator and Discriminator
//!
//! Provides convenient methods for sampling and discrimination.

use tch::{nn::VarStore, Device, Tensor};

use super::discriminator::{Discriminator, DiscriminatorConfig};
use super::generator::{Generator, GeneratorConfig};

/// Complete DCGAN model
pub struct DCGAN {
    /// Generator network
    pub generator: Generator,
    /// Discriminator network
    pub discriminator: Discriminator,
    /// Variable store for generator
    pub gen_vs: VarStore,
    /// Variable store for discriminator
    pub disc_vs: VarStore,
    /// Device (CPU/GPU)
    pub device: Device,
}

impl DCGAN {
    /// Create a new DCGAN model
    ///
    /// # Arguments
    ///
    /// * `gen_config` - Generator configuration
    /// * `disc_config` - Discriminator configuration
    /// * `device` - Device to create model on
    pub fn new(
        gen_config: GeneratorConfig,
        disc_config: DiscriminatorConfig,
        device: Device,
    ) -> Self {
        let gen_vs = VarStore::new(device);
        let disc_vs = VarStore::new(device);

        let generator = Generator::new(&gen_vs.root(), gen_config);
        let discriminator = Discriminator::new(&disc_vs.root(), disc_config);

        Self {
            generator,
            discriminator,
            gen_vs,
            disc_vs,
            device,
        }
    }

    /// Create DCGAN with default 32x32 RGB configuration
    ///
    /// # Arguments
    ///
    /// * `latent_dim` - Size of latent noise vector
    /// * `conv_dim` - Base number of filters for both networks
    /// * `device` - Device to create model on
    pub fn with_defaults(latent_dim: i64, conv_dim: i64, device: Device) -> Self {
        let gen_config = GeneratorConfig {
            latent_dim,
            conv_dim,
            ..Default::default()
        };

        let disc_config = DiscriminatorConfig {
            conv_dim,
            ..Default::default()
        };

        Self::new(gen_config, disc_config, device)
    }

    /// Generate synthetic images
    ///
    /// # Arguments
    ///
    /// * `num_samples` - Number of images to generate
    ///
    /// # Returns
    ///
    /// Tensor of shape (num_samples, channels, image_size, image_size)
    pub fn generate(&self, num_samples: i64) -> Tensor {
        self.generator.generate_random(num_samples, self.device)
    }

    /// Generate images from specific noise vectors
    pub fn generate_from_noise(&self, noise: &Tensor) -> Tensor {
        self.generator.generate(noise)
    }

    /// Discriminate images (get probability of being real)
    pub fn discriminate(&self, images: &Tensor) -> Tensor {
        self.discriminator.classify(images)
    }

    /// Get latent dimension
    pub fn latent_dim(&self) -> i64 {
        self.generator.config().latent_dim
    }

    /// Get image side length
    pub fn image_size(&self) -> i64 {
        self.generator.config().image_size
    }

    /// Get number of image channels
    pub fn channels(&self) -> i64 {
        self.generator.config().channels
    }

    /// Interpolate between two points in latent space
    ///
    /// Useful for visualizing smooth transitions between generated images
    ///
    /// # Arguments
    ///
    /// * `z1` - First latent vector, shape (latent_dim,)
    /// * `z2` - Second latent vector, shape (latent_dim,)
    /// * `steps` - Number of interpolation steps; values below 1 are
    ///   treated as 1 (a single sample at `z1`)
    ///
    /// # Returns
    ///
    /// Tensor of shape (steps, channels, image_size, image_size)
    pub fn interpolate(&self, z1: &Tensor, z2: &Tensor, steps: i64) -> Tensor {
        let steps = steps.max(1);
        // With a single step the endpoint difference is undefined; pin
        // alpha at 0 instead of dividing by zero.
        let denom = (steps - 1).max(1) as f64;
        let mut samples = Vec::new();

        for i in 0..steps {
            let alpha = i as f64 / denom;
            let z = z1 * (1.0 - alpha) + z2 * alpha;
            let sample = self.generator.generate(&z.unsqueeze(0));
            samples.push(sample.squeeze_dim(0));
        }

        Tensor::stack(&samples, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dcgan_creation() {
        let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

        assert_eq!(dcgan.latent_dim(), 128);
        assert_eq!(dcgan.image_size(), 32);
        assert_eq!(dcgan.channels(), 3);
    }

    #[test]
    fn test_dcgan_generate() {
        let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

        let images = dcgan.generate(4);
        assert_eq!(images.size(), vec![4, 3, 32, 32]);
    }

    #[test]
    fn test_dcgan_discriminate() {
        let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

        let images = Tensor::randn([4, 3, 32, 32], (tch::Kind::Float, Device::Cpu));
        let probs = dcgan.discriminate(&images);

        assert_eq!(probs.size(), vec![4, 1]);
    }

    #[test]
    fn test_dcgan_generate_then_discriminate() {
        let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

        let images = dcgan.generate(2);
        let probs = dcgan.discriminate(&images);

        assert_eq!(probs.size(), vec![2, 1]);
        let min_val: f64 = probs.min().double_value(&[]);
        let max_val: f64 = probs.max().double_value(&[]);
        assert!(min_val >= 0.0 && max_val <= 1.0);
    }

    #[test]
    fn test_dcgan_interpolate() {
        let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

        let z1 = Tensor::randn([128], (tch::Kind::Float, Device::Cpu));
        let z2 = Tensor::randn([128], (tch::Kind::Float, Device::Cpu));

        let interpolated = dcgan.interpolate(&z1, &z2, 10);
        assert_eq!(interpolated.size(), vec![10, 3, 32, 32]);
    }

    #[test]
    fn test_dcgan_interpolate_single_step() {
        let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

        let z1 = Tensor::randn([128], (tch::Kind::Float, Device::Cpu));
        let z2 = Tensor::randn([128], (tch::Kind::Float, Device::Cpu));

        // A single step must yield the z1 sample, not NaN images
        let interpolated = dcgan.interpolate(&z1, &z2, 1);
        assert_eq!(interpolated.size(), vec![1, 3, 32, 32]);

        let min_val: f64 = interpolated.min().double_value(&[]);
        let max_val: f64 = interpolated.max().double_value(&[]);
        assert!(min_val >= -1.0 && max_val <= 1.0);

        let expected = dcgan.generate_from_noise(&z1.unsqueeze(0));
        let diff: f64 = (&interpolated - &expected)
            .abs()
            .max()
            .double_value(&[]);
        assert!(diff < 1e-6);
    }

    #[test]
    fn test_dcgan_interpolate_zero_steps_clamped() {
        let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

        let z1 = Tensor::randn([128], (tch::Kind::Float, Device::Cpu));
        let z2 = Tensor::randn([128], (tch::Kind::Float, Device::Cpu));

        let interpolated = dcgan.interpolate(&z1, &z2, 0);
        assert_eq!(interpolated.size(), vec![1, 3, 32, 32]);
    }
}
