//! DCGAN model architecture
//!
//! Contains the Generator and Discriminator networks and the DCGAN wrapper.

pub mod dcgan;
pub mod discriminator;
pub mod generator;

pub use dcgan::DCGAN;
pub use discriminator::{Discriminator, DiscriminatorConfig};
pub use generator::{Generator, GeneratorConfig};
