//! Numeric learning engine validation
//!
//! Checks one backpropagation step against a hand-computed two-layer update
//! and confirms that a single small step lowers the squared error.

mod common;

use common::{random_board_target, random_input};
use hexapawn::nn::{Activation, Layer, Network, NetworkConfig, squared_error};
use ndarray::array;
use rand::{Rng, SeedableRng, rngs::StdRng};

mod backprop {
    use super::*;

    fn sigmoid(z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }

    /// 1-1-1 sigmoid network with unit weights, zero biases and learning
    /// rate 1, stepped once on input 1 towards target 0.
    fn stepped_chain() -> Network {
        let hidden = Layer::from_parts(array![[1.0]], array![0.0]).unwrap();
        let output = Layer::from_parts(array![[1.0]], array![0.0]).unwrap();
        let mut network =
            Network::from_layers(vec![hidden, output], Activation::Sigmoid, 1.0).unwrap();
        let trace = network.classify(&[1.0]).unwrap();
        network.update_weights(trace, &[0.0]).unwrap();
        network
    }

    #[test]
    fn test_output_layer_steps_first() {
        let network = stepped_chain();
        let h = sigmoid(1.0);
        let y = sigmoid(h);
        let output_delta = y * y * (1.0 - y);

        let output = &network.layers()[1];
        assert!((output.weights()[(0, 0)] - (1.0 - h * output_delta)).abs() < 1e-12);
        assert!((output.biases()[0] + output_delta).abs() < 1e-12);
        assert!((output.weights()[(0, 0)] - 0.891747).abs() < 1e-6);
    }

    /// The hidden delta flows back through the output weight after that
    /// weight has already moved.
    #[test]
    fn test_hidden_delta_uses_updated_output_weight() {
        let network = stepped_chain();
        let h = sigmoid(1.0);
        let y = sigmoid(h);
        let output_delta = y * y * (1.0 - y);
        let updated_output_weight = 1.0 - h * output_delta;
        let hidden_delta = updated_output_weight * output_delta * h * (1.0 - h);

        let hidden = &network.layers()[0];
        let weight = hidden.weights()[(0, 0)];
        assert!((weight - (1.0 - hidden_delta)).abs() < 1e-12);
        assert!((hidden.biases()[0] + hidden_delta).abs() < 1e-12);
        assert!((weight - 0.974038).abs() < 1e-6, "hidden weight {weight}");

        // Propagating through the unmoved weight would land elsewhere.
        let stale = 1.0 - output_delta * h * (1.0 - h);
        assert!((weight - stale).abs() > 1e-3);
    }
}

mod descent {
    use super::*;

    fn random_config(
        rng: &mut StdRng,
        activation: Activation,
        learning_rate: f64,
    ) -> NetworkConfig {
        NetworkConfig::default()
            .with_hidden_layers(rng.random_range(0..=3))
            .with_neurons_per_layer(rng.random_range(1..=12))
            .with_activation(activation)
            .with_learning_rate(learning_rate)
    }

    #[test]
    fn test_sigmoid_step_strictly_lowers_error() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let config = random_config(&mut rng, Activation::Sigmoid, 0.01);
            let mut network = Network::new(9, 9, &config, &mut rng).unwrap();
            let input = random_input(&mut rng, 9);
            let target = random_board_target(&mut rng);

            let trace = network.classify(&input).unwrap();
            let before = squared_error(trace.output(), &target);
            network.update_weights(trace, &target).unwrap();
            let after = squared_error(&network.predict(&input).unwrap(), &target);

            assert!(after < before, "seed {seed}: {before} -> {after}");
        }
    }

    /// A ReLU output that is zero carries no gradient, so only live,
    /// mismatched outputs guarantee progress. The tiny step keeps
    /// pre-activations from crossing zero.
    #[test]
    fn test_relu_step_never_raises_error() {
        let mut progressed = 0;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let config = random_config(&mut rng, Activation::Relu, 1e-7);
            let mut network = Network::new(9, 9, &config, &mut rng).unwrap();
            let input = random_input(&mut rng, 9);
            let target = random_board_target(&mut rng);

            let trace = network.classify(&input).unwrap();
            let live = trace
                .output()
                .iter()
                .zip(&target)
                .any(|(y, t)| *y > 0.0 && y != t);
            let before = squared_error(trace.output(), &target);
            network.update_weights(trace, &target).unwrap();
            let after = squared_error(&network.predict(&input).unwrap(), &target);

            if live {
                assert!(after < before, "seed {seed}: {before} -> {after}");
                progressed += 1;
            } else {
                assert!(after <= before + 1e-12, "seed {seed}: {before} -> {after}");
            }
        }
        assert!(progressed > 0);
    }

    #[test]
    fn test_classify_does_not_touch_weights() {
        let mut rng = StdRng::seed_from_u64(5);
        let network = Network::new(9, 9, &NetworkConfig::default(), &mut rng).unwrap();
        let before = network.layers().to_vec();
        for _ in 0..10 {
            let input = random_input(&mut rng, 9);
            network.classify(&input).unwrap();
        }
        assert_eq!(network.layers(), before.as_slice());
    }
}
