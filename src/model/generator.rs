//! Generator network for DCGAN
//!
//! The Generator transforms random noise vectors into synthetic 32x32 color
//! images. Architecture uses transposed 2D convolutions to upsample from
//! latent space.

use tch::{nn, nn::Module, nn::ModuleT, Device, Tensor};

/// Generator network configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Size of the latent noise vector
    pub latent_dim: i64,
    /// Base number of filters
    pub conv_dim: i64,
    /// Output image side length (square images)
    pub image_size: i64,
    /// Number of output channels (3 for RGB)
    pub channels: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            latent_dim: 128,
            conv_dim: 32,
            image_size: 32,
            channels: 3,
        }
    }
}

/// Generator network
///
/// Architecture:
/// 1. Dense layer from latent space to initial 4x4 feature map
/// 2. ConvTranspose2d layers with BatchNorm and ReLU
/// 3. Final ConvTranspose2d with Tanh activation
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    /// Initial dense projection
    fc: nn::Linear,
    /// Transposed convolution layers
    deconv1: nn::ConvTranspose2D,
    bn1: nn::BatchNorm,
    deconv2: nn::ConvTranspose2D,
    bn2: nn::BatchNorm,
    deconv3: nn::ConvTranspose2D,
}

impl Generator {
    /// Create a new Generator network
    pub fn new(vs: &nn::Path, config: GeneratorConfig) -> Self {
        let base = config.conv_dim;

        // Project to (4 * conv_dim, init_size, init_size), then upsample
        // through three stride-2 stages back to image_size.
        let init_size = config.image_size / 8;
        let flat_size = base * 4 * init_size * init_size;

        let fc = nn::linear(vs / "fc", config.latent_dim, flat_size, Default::default());

        // Kernel 4, stride 2, padding 1 doubles the spatial size exactly.
        let deconv_config = nn::ConvTransposeConfig {
            stride: 2,
            padding: 1,
            ws_init: nn::Init::Randn {
                mean: 0.0,
                stdev: 0.02,
            },
            ..Default::default()
        };

        // 4x4 -> 8x8 -> 16x16 -> 32x32
        let deconv1 = nn::conv_transpose2d(vs / "deconv1", base * 4, base * 2, 4, deconv_config);
        let bn1 = nn::batch_norm2d(vs / "bn1", base * 2, Default::default());

        let deconv2 = nn::conv_transpose2d(vs / "deconv2", base * 2, base, 4, deconv_config);
        let bn2 = nn::batch_norm2d(vs / "bn2", base, Default::default());

        // Final layer: no batch norm, tanh activation
        let deconv3 = nn::conv_transpose2d(vs / "deconv3", base, config.channels, 4, deconv_config);

        Self {
            config,
            fc,
            deconv1,
            bn1,
            deconv2,
            bn2,
            deconv3,
        }
    }

    /// Generate synthetic images from noise
    ///
    /// # Arguments
    ///
    /// * `noise` - Tensor of shape (batch_size, latent_dim); a
    ///   (batch_size, latent_dim, 1, 1) tensor is also accepted and
    ///   flattened before the dense projection
    /// * `train` - Whether in training mode (affects batch norm)
    ///
    /// # Returns
    ///
    /// Tensor of shape (batch_size, channels, image_size, image_size),
    /// values in [-1, 1]
    pub fn forward_t(&self, noise: &Tensor, train: bool) -> Tensor {
        let batch_size = noise.size()[0];
        let base = self.config.conv_dim;
        let init_size = self.config.image_size / 8;

        // Accept the (batch, latent, 1, 1) convention as well as flat
        // noise; any other shape must fail in the dense projection rather
        // than be silently reinterpreted.
        let noise = if noise.size() == [batch_size, self.config.latent_dim, 1, 1] {
            noise.view([batch_size, self.config.latent_dim])
        } else {
            noise.shallow_clone()
        };

        // Project and reshape: (batch, latent) -> (batch, channels, h, w)
        let x = self.fc.forward(&noise);
        let x = x.view([batch_size, base * 4, init_size, init_size]);

        // Upsample through transposed convolutions
        let x = self.deconv1.forward(&x);
        let x = self.bn1.forward_t(&x, train);
        let x = x.relu();

        let x = self.deconv2.forward(&x);
        let x = self.bn2.forward_t(&x, train);
        let x = x.relu();

        let x = self.deconv3.forward(&x);
        x.tanh()
    }

    /// Generate images (inference mode)
    pub fn generate(&self, noise: &Tensor) -> Tensor {
        self.forward_t(noise, false)
    }

    /// Generate images from fresh random noise
    ///
    /// # Arguments
    ///
    /// * `num_samples` - Number of images to generate
    /// * `device` - Device to create tensors on
    pub fn generate_random(&self, num_samples: i64, device: Device) -> Tensor {
        let noise = Tensor::randn(
            [num_samples, self.config.latent_dim],
            (tch::Kind::Float, device),
        );
        self.generate(&noise)
    }

    /// Per-layer output shapes for a dummy batch of the given size
    pub fn layer_shapes(&self, batch_size: i64) -> Vec<(String, Vec<i64>)> {
        let base = self.config.conv_dim;
        let init_size = self.config.image_size / 8;
        let noise = Tensor::randn(
            [batch_size, self.config.latent_dim],
            (tch::Kind::Float, self.device()),
        );
        let mut shapes = vec![("noise".to_string(), noise.size())];

        let x = self
            .fc
            .forward(&noise)
            .view([batch_size, base * 4, init_size, init_size]);
        shapes.push(("fc".to_string(), x.size()));

        let x = self
            .bn1
            .forward_t(&self.deconv1.forward(&x), false)
            .relu();
        shapes.push(("deconv1".to_string(), x.size()));

        let x = self
            .bn2
            .forward_t(&self.deconv2.forward(&x), false)
            .relu();
        shapes.push(("deconv2".to_string(), x.size()));

        let x = self.deconv3.forward(&x).tanh();
        shapes.push(("deconv3".to_string(), x.size()));

        shapes
    }

    /// Device the network weights live on
    pub fn device(&self) -> Device {
        self.fc.ws.device()
    }

    /// Get configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl ModuleT for Generator {
    fn forward_t(&self, xs: &Tensor, train: bool) -> Tensor {
        Generator::forward_t(self, xs, train)
    }
}
