//! Discriminator network for DCGAN
//!
//! The Discriminator classifies 32x32 color images as real or fake.
//! Architecture uses strided 2D convolutions to downsample and extract features.

use tch::{nn, nn::Module, nn::ModuleT, Tensor};

/// Discriminator network configuration
#[derive(Debug, Clone)]
pub struct DiscriminatorConfig {
    /// Base number of convolutional filters
    pub conv_dim: i64,
    /// Input image side length (square images)
    pub image_size: i64,
    /// Number of input channels (3 for RGB)
    pub channels: i64,
    /// Dropout rate
    pub dropout: f64,
}

impl Default for DiscriminatorConfig {
    fn default() -> Self {
        Self {
            conv_dim: 32,
            image_size: 32,
            channels: 3,
            dropout: 0.3,
        }
    }
}

/// Discriminator network
///
/// Architecture:
/// 1. Strided Conv2d layers with LeakyReLU (BatchNorm on all but the first)
/// 2. Flatten and Dense layer with sigmoid output
#[derive(Debug)]
pub struct Discriminator {
    config: DiscriminatorConfig,
    /// Convolution layers
    conv1: nn::Conv2D,
    conv2: nn::Conv2D,
    bn2: nn::BatchNorm,
    conv3: nn::Conv2D,
    bn3: nn::BatchNorm,
    /// Final classification layer
    fc: nn::Linear,
}

impl Discriminator {
    /// Create a new Discriminator network
    pub fn new(vs: &nn::Path, config: DiscriminatorConfig) -> Self {
        let base = config.conv_dim;

        // Kernel 4, stride 2, padding 1 halves the spatial size at each stage.
        let conv_config = nn::ConvConfig {
            stride: 2,
            padding: 1,
            ws_init: nn::Init::Randn {
                mean: 0.0,
                stdev: 0.02,
            },
            ..Default::default()
        };

        // 32x32 -> 16x16 -> 8x8 -> 4x4
        let conv1 = nn::conv2d(vs / "conv1", config.channels, base, 4, conv_config);
        let conv2 = nn::conv2d(vs / "conv2", base, base * 2, 4, conv_config);
        let bn2 = nn::batch_norm2d(vs / "bn2", base * 2, Default::default());
        let conv3 = nn::conv2d(vs / "conv3", base * 2, base * 4, 4, conv_config);
        let bn3 = nn::batch_norm2d(vs / "bn3", base * 4, Default::default());

        // Three stride-2 stages shrink the image by a factor of 8
        let final_size = config.image_size / 8;
        let flat_size = base * 4 * final_size * final_size;

        let fc = nn::linear(vs / "fc", flat_size, 1, Default::default());

        Self {
            config,
            conv1,
            conv2,
            bn2,
            conv3,
            bn3,
            fc,
        }
    }

    /// Forward pass
    ///
    /// # Arguments
    ///
    /// * `input` - Tensor of shape (batch_size, channels, image_size, image_size)
    /// * `train` - Whether in training mode (affects batch norm and dropout)
    ///
    /// # Returns
    ///
    /// Tensor of shape (batch_size, 1) with probabilities in [0, 1]
    pub fn forward_t(&self, input: &Tensor, train: bool) -> Tensor {
        let x = self.conv1.forward(input);
        let x = x.leaky_relu();
        let x = x.dropout(self.config.dropout, train);

        let x = self.conv2.forward(&x);
        let x = self.bn2.forward_t(&x, train);
        let x = x.leaky_relu();
        let x = x.dropout(self.config.dropout, train);

        let x = self.conv3.forward(&x);
        let x = self.bn3.forward_t(&x, train);
        let x = x.leaky_relu();
        let x = x.dropout(self.config.dropout, train);

        // Flatten and classify
        let batch_size = x.size()[0];
        let x = x.view([batch_size, -1]);

        self.fc.forward(&x).sigmoid()
    }

    /// Classify images (inference mode)
    ///
    /// Returns probability of being real
    pub fn classify(&self, input: &Tensor) -> Tensor {
        self.forward_t(input, false)
    }

    /// Per-layer output shapes for a dummy batch of the given size
    pub fn layer_shapes(&self, batch_size: i64) -> Vec<(String, Vec<i64>)> {
        let input = Tensor::randn(
            [
                batch_size,
                self.config.channels,
                self.config.image_size,
                self.config.image_size,
            ],
            (tch::Kind::Float, self.device()),
        );
        let mut shapes = vec![("input".to_string(), input.size())];

        let x = self.conv1.forward(&input).leaky_relu();
        shapes.push(("conv1".to_string(), x.size()));

        let x = self
            .bn2
            .forward_t(&self.conv2.forward(&x), false)
            .leaky_relu();
        shapes.push(("conv2".to_string(), x.size()));

        let x = self
            .bn3
            .forward_t(&self.conv3.forward(&x), false)
            .leaky_relu();
        shapes.push(("conv3".to_string(), x.size()));

        let x = self.fc.forward(&x.view([batch_size, -1])).sigmoid();
        shapes.push(("fc".to_string(), x.size()));

        shapes
    }

    /// Device the network weights live on
    pub fn device(&self) -> tch::Device {
        self.conv1.ws.device()
    }

    /// Get configuration
    pub fn config(&self) -> &DiscriminatorConfig {
        &self.config
    }
}

impl ModuleT for Discriminator {
    fn forward_t(&self, xs: &Tensor, train: bool) -> Tensor {
        Discriminator::forward_t(self, xs, train)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tch::{nn::VarStore, Device};

    #[test]
    fn test_discriminator_output_shape() {
        let vs = VarStore::new(Device::Cpu);
        let config = DiscriminatorConfig::default();
        let disc = Discriminator::new(&vs.root(), config);

        let input = Tensor::randn([4, 3, 32, 32], (tch::Kind::Float, Device::Cpu));
        let output = disc.forward_t(&input, false);

        assert_eq!(output.size(), vec![4, 1]);
    }

    #[test]
    fn test_discriminator_output_range() {
        let vs = VarStore::new(Device::Cpu);
        let disc = Discriminator::new(&vs.root(), DiscriminatorConfig::default());

        // Large input magnitudes should still map into [0, 1]
        let input = Tensor::randn([2, 3, 32, 32], (tch::Kind::Float, Device::Cpu)) * 100.0;
        let probs = disc.classify(&input);

        let min_val: f64 = probs.min().double_value(&[]);
        let max_val: f64 = probs.max().double_value(&[]);
        assert!(min_val >= 0.0 && max_val <= 1.0);
    }

    #[test]
    fn test_discriminator_wider() {
        let vs = VarStore::new(Device::Cpu);
        let config = DiscriminatorConfig {
            conv_dim: 64,
            ..Default::default()
        };
        let disc = Discriminator::new(&vs.root(), config);

        let input = Tensor::randn([1, 3, 32, 32], (tch::Kind::Float, Device::Cpu));
        let output = disc.forward_t(&input, false);

        assert_eq!(output.size(), vec![1, 1]);
    }

    #[test]
    fn test_discriminator_layer_shapes() {
        let vs = VarStore::new(Device::Cpu);
        let disc = Discriminator::new(&vs.root(), DiscriminatorConfig::default());

        let shapes = disc.layer_shapes(2);
        assert_eq!(shapes[0].1, vec![2, 3, 32, 32]);
        assert_eq!(shapes[1].1, vec![2, 32, 16, 16]);
        assert_eq!(shapes[2].1, vec![2, 64, 8, 8]);
        assert_eq!(shapes[3].1, vec![2, 128, 4, 4]);
        assert_eq!(shapes[4].1, vec![2, 1]);
    }
}
