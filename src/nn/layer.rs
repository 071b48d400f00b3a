//! Weighted layer

use ndarray::{Array1, Array2, Axis};
use rand::Rng;

use super::activation::Activation;

/// A fully connected layer: `inputs × neurons` weights plus one bias per
/// neuron.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    weights: Array2<f64>,
    biases: Array1<f64>,
}

impl Layer {
    /// Weights and biases drawn independently and uniformly from [-1, 1].
    pub fn random<R: Rng + ?Sized>(num_inputs: usize, neurons: usize, rng: &mut R) -> Self {
        let weights =
            Array2::from_shape_fn((num_inputs, neurons), |_| rng.random_range(-1.0..=1.0));
        let biases = Array1::from_shape_fn(neurons, |_| rng.random_range(-1.0..=1.0));
        Self { weights, biases }
    }

    /// Build a layer from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if there is not exactly one
    /// bias per weight column.
    pub fn from_parts(weights: Array2<f64>, biases: Array1<f64>) -> crate::Result<Self> {
        if weights.ncols() != biases.len() {
            return Err(crate::Error::DimensionMismatch {
                expected: weights.ncols(),
                got: biases.len(),
                context: "layer biases".to_string(),
            });
        }
        Ok(Self { weights, biases })
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.nrows()
    }

    pub fn num_neurons(&self) -> usize {
        self.weights.ncols()
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn biases(&self) -> &Array1<f64> {
        &self.biases
    }

    /// `activation(inputs · W + b)`; the caller checks the input width.
    pub(crate) fn forward(&self, inputs: &Array1<f64>, activation: Activation) -> Array1<f64> {
        (inputs.dot(&self.weights) + &self.biases).mapv(|x| activation.apply(x))
    }

    /// Step against the gradient `outer(inputs, delta)` for the weights and
    /// `delta` for the biases.
    pub(crate) fn descend(
        &mut self,
        inputs: &Array1<f64>,
        delta: &Array1<f64>,
        learning_rate: f64,
    ) {
        let gradient = inputs
            .view()
            .insert_axis(Axis(1))
            .dot(&delta.view().insert_axis(Axis(0)));
        self.weights.scaled_add(-learning_rate, &gradient);
        self.biases.scaled_add(-learning_rate, delta);
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn random_parameters_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let layer = Layer::random(9, 15, &mut rng);
        assert_eq!(layer.weights().dim(), (9, 15));
        assert_eq!(layer.biases().len(), 15);
        assert!(layer.weights().iter().all(|w| (-1.0..=1.0).contains(w)));
        assert!(layer.biases().iter().all(|b| (-1.0..=1.0).contains(b)));
    }

    #[test]
    fn from_parts_checks_bias_width() {
        let err = Layer::from_parts(Array2::zeros((2, 3)), Array1::zeros(2)).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::DimensionMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn forward_computes_affine_then_activation() {
        let layer =
            Layer::from_parts(array![[1.0, -1.0], [2.0, 0.5]], array![0.5, -4.0]).unwrap();
        let out = layer.forward(&array![1.0, 1.0], Activation::Relu);
        assert_eq!(out, array![3.5, 0.0]);
    }

    #[test]
    fn descend_applies_outer_product() {
        let mut layer = Layer::from_parts(Array2::zeros((2, 2)), Array1::zeros(2)).unwrap();
        layer.descend(&array![1.0, 2.0], &array![0.5, -1.0], 0.1);
        assert_eq!(layer.weights(), &array![[-0.05, 0.1], [-0.1, 0.2]]);
        assert_eq!(layer.biases(), &array![-0.05, 0.1]);
    }
}
