//! Integration tests for the shape/range check harness

use tch::{nn::VarStore, Device, Tensor};

use rust_dcgan_images::{
    check_discriminator, check_generator, Discriminator, DiscriminatorConfig, Generator,
    GeneratorConfig, DCGAN,
};

#[test]
fn discriminator_contract_holds_across_batch_sizes() {
    let vs = VarStore::new(Device::Cpu);
    let disc = Discriminator::new(&vs.root(), DiscriminatorConfig::default());

    for batch_size in [1, 4, 16] {
        check_discriminator(&disc, batch_size).unwrap();
    }
}

#[test]
fn generator_contract_holds_across_batch_sizes() {
    let vs = VarStore::new(Device::Cpu);
    let gen = Generator::new(&vs.root(), GeneratorConfig::default());

    for batch_size in [1, 4, 16] {
        check_generator(&gen, batch_size).unwrap();
    }
}

#[test]
fn generated_images_fool_check_pipeline() {
    // Generator output must be a valid discriminator input
    let dcgan = DCGAN::with_defaults(128, 32, Device::Cpu);

    let images = dcgan.generate(8);
    assert_eq!(images.size(), vec![8, 3, 32, 32]);

    let probs = dcgan.discriminate(&images);
    assert_eq!(probs.size(), vec![8, 1]);

    let min_val: f64 = probs.min().double_value(&[]);
    let max_val: f64 = probs.max().double_value(&[]);
    assert!(min_val >= 0.0 && max_val <= 1.0);
}

#[test]
fn four_dimensional_noise_convention_accepted() {
    let vs = VarStore::new(Device::Cpu);
    let gen = Generator::new(&vs.root(), GeneratorConfig::default());

    let noise = Tensor::randn([4, 128, 1, 1], (tch::Kind::Float, Device::Cpu));
    let output = gen.generate(&noise);

    assert_eq!(output.size(), vec![4, 3, 32, 32]);
}
