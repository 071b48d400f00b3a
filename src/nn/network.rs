//! Layered network, forward pass and backpropagation

use ndarray::Array1;
use rand::Rng;

use super::{
    activation::Activation,
    config::{NetworkConfig, check_learning_rate},
    layer::Layer,
};
use crate::{Error, Result};

/// Outputs retained from one forward pass.
///
/// Entry 0 is the raw input (the input layer has no weights and passes its
/// input through); entry `i` is the output of weighted layer `i - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTrace {
    outputs: Vec<Array1<f64>>,
}

impl ForwardTrace {
    pub fn input(&self) -> &Array1<f64> {
        &self.outputs[0]
    }

    /// Output of the final layer
    pub fn output(&self) -> &Array1<f64> {
        // Never empty: the input is always recorded.
        &self.outputs[self.outputs.len() - 1]
    }

    pub fn layer_outputs(&self) -> &[Array1<f64>] {
        &self.outputs
    }

    pub fn into_output(mut self) -> Array1<f64> {
        self.outputs.pop().unwrap_or_default()
    }
}

/// Feed-forward network: input layer, `N` hidden layers and an output layer,
/// one activation for every weighted layer, and a fixed learning rate.
///
/// Invariant: each layer's input width equals the previous layer's neuron
/// count, and the first weighted layer takes `num_inputs` values.
#[derive(Debug, Clone)]
pub struct Network {
    num_inputs: usize,
    layers: Vec<Layer>,
    activation: Activation,
    learning_rate: f64,
}

impl Network {
    /// Build a randomly initialised network.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for zero-width inputs or
    /// outputs and for configurations rejected by
    /// [`NetworkConfig::validate`].
    pub fn new<R: Rng + ?Sized>(
        num_inputs: usize,
        num_outputs: usize,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        if num_inputs == 0 || num_outputs == 0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "network needs at least one input and one output, got {num_inputs} inputs and {num_outputs} outputs"
                ),
            });
        }

        let mut layers = Vec::with_capacity(config.hidden_layers + 1);
        let mut previous = num_inputs;
        for _ in 0..config.hidden_layers {
            layers.push(Layer::random(previous, config.neurons_per_layer, rng));
            previous = config.neurons_per_layer;
        }
        layers.push(Layer::random(previous, num_outputs, rng));

        Ok(Self {
            num_inputs,
            layers,
            activation: config.activation,
            learning_rate: config.learning_rate,
        })
    }

    /// Assemble a network from explicit layers (hidden layers first, output
    /// layer last).
    pub fn from_layers(
        layers: Vec<Layer>,
        activation: Activation,
        learning_rate: f64,
    ) -> Result<Self> {
        let Some(first) = layers.first() else {
            return Err(Error::InvalidConfiguration {
                message: "network needs at least an output layer".to_string(),
            });
        };
        for pair in layers.windows(2) {
            if pair[1].num_inputs() != pair[0].num_neurons() {
                return Err(Error::DimensionMismatch {
                    expected: pair[0].num_neurons(),
                    got: pair[1].num_inputs(),
                    context: "layer input width".to_string(),
                });
            }
        }
        let num_inputs = first.num_inputs();
        check_learning_rate(learning_rate)?;

        Ok(Self {
            num_inputs,
            layers,
            activation,
            learning_rate,
        })
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.layers
            .last()
            .map(Layer::num_neurons)
            .unwrap_or_default()
    }

    /// Weighted layers, output layer last
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Forward pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `inputs` does not have
    /// [`num_inputs`](Self::num_inputs) values.
    pub fn classify(&self, inputs: &[f64]) -> Result<ForwardTrace> {
        if inputs.len() != self.num_inputs {
            return Err(Error::DimensionMismatch {
                expected: self.num_inputs,
                got: inputs.len(),
                context: "network input".to_string(),
            });
        }

        let mut outputs = Vec::with_capacity(self.layers.len() + 1);
        outputs.push(Array1::from(inputs.to_vec()));
        for layer in &self.layers {
            let next = layer.forward(&outputs[outputs.len() - 1], self.activation);
            outputs.push(next);
        }
        Ok(ForwardTrace { outputs })
    }

    /// Forward pass returning only the final output
    pub fn predict(&self, inputs: &[f64]) -> Result<Array1<f64>> {
        Ok(self.classify(inputs)?.into_output())
    }

    /// One online gradient step against `expected`, using the outputs
    /// recorded in `trace`.
    ///
    /// Layers are visited from the output back. The output delta is
    /// `(y - expected) ⊙ f'(y)`. Each layer first descends by `learning_rate`
    /// along `outer(input, delta)`, and the delta for the layer below is then
    /// `(W · delta) ⊙ f'(y_hidden)` with that layer's already updated `W`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `expected` has the wrong
    /// width or the trace was not produced by a network of this shape.
    pub fn update_weights(&mut self, trace: ForwardTrace, expected: &[f64]) -> Result<()> {
        self.check_trace(&trace)?;
        if expected.len() != self.num_outputs() {
            return Err(Error::DimensionMismatch {
                expected: self.num_outputs(),
                got: expected.len(),
                context: "expected output".to_string(),
            });
        }

        let activation = self.activation;
        let outputs = trace.outputs;
        let expected = Array1::from(expected.to_vec());
        let derivative = |values: &Array1<f64>| values.mapv(|y| activation.derivative(y));

        let output = &outputs[outputs.len() - 1];
        let mut delta = (output - &expected) * derivative(output);

        for i in (0..self.layers.len()).rev() {
            self.layers[i].descend(&outputs[i], &delta, self.learning_rate);
            if i > 0 {
                delta = self.layers[i].weights().dot(&delta) * derivative(&outputs[i]);
            }
        }

        Ok(())
    }

    fn check_trace(&self, trace: &ForwardTrace) -> Result<()> {
        if trace.outputs.len() != self.layers.len() + 1 {
            return Err(Error::DimensionMismatch {
                expected: self.layers.len() + 1,
                got: trace.outputs.len(),
                context: "forward trace depth".to_string(),
            });
        }
        let widths = std::iter::once(self.num_inputs)
            .chain(self.layers.iter().map(Layer::num_neurons));
        for (output, width) in trace.outputs.iter().zip(widths) {
            if output.len() != width {
                return Err(Error::DimensionMismatch {
                    expected: width,
                    got: output.len(),
                    context: "forward trace layer output".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Sum of squared differences between an output and its target
pub fn squared_error(output: &Array1<f64>, expected: &[f64]) -> f64 {
    output
        .iter()
        .zip(expected)
        .map(|(y, t)| (y - t).powi(2))
        .sum()
}
