//! Network configuration.

use serde::{Deserialize, Serialize};

use super::activation::Activation;

/// Shape and optimiser settings for a [`Network`](super::Network).
///
/// # Examples
///
/// ```
/// use hexapawn::nn::{Activation, NetworkConfig};
///
/// let config = NetworkConfig::default()
///     .with_hidden_layers(1)
///     .with_neurons_per_layer(32)
///     .with_activation(Activation::Relu)
///     .with_learning_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of hidden layers
    pub hidden_layers: usize,
    /// Width of every hidden layer
    pub neurons_per_layer: usize,
    /// Activation applied after every layer, output included
    pub activation: Activation,
    /// Step size for gradient descent
    pub learning_rate: f64,
}

impl NetworkConfig {
    pub fn with_hidden_layers(mut self, hidden_layers: usize) -> Self {
        self.hidden_layers = hidden_layers;
        self
    }

    pub fn with_neurons_per_layer(mut self, neurons: usize) -> Self {
        self.neurons_per_layer = neurons;
        self
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Reject configurations that cannot produce a trainable network.
    pub fn validate(&self) -> crate::Result<()> {
        if self.hidden_layers > 0 && self.neurons_per_layer == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "hidden layers must have at least one neuron".to_string(),
            });
        }
        check_learning_rate(self.learning_rate)
    }
}

pub(crate) fn check_learning_rate(learning_rate: f64) -> crate::Result<()> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(crate::Error::InvalidConfiguration {
            message: format!("learning rate must be positive and finite, got {learning_rate}"),
        });
    }
    Ok(())
}

impl Default for NetworkConfig {
    /// Two hidden layers of 15 sigmoid neurons with a 0.1 step size.
    fn default() -> Self {
        Self {
            hidden_layers: 2,
            neurons_per_layer: 15,
            activation: Activation::Sigmoid,
            learning_rate: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_hidden_layers() {
        let config = NetworkConfig::default().with_neurons_per_layer(0);
        assert!(config.validate().is_err());

        let no_hidden = config.with_hidden_layers(0);
        assert!(no_hidden.validate().is_ok());
    }

    #[test]
    fn rejects_bad_learning_rates() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let config = NetworkConfig::default().with_learning_rate(lr);
            assert!(config.validate().is_err(), "accepted learning rate {lr}");
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: NetworkConfig =
            serde_json::from_str(r#"{ "activation": "relu", "hidden_layers": 3 }"#).unwrap();
        assert_eq!(config.activation, Activation::Relu);
        assert_eq!(config.hidden_layers, 3);
        assert_eq!(config.neurons_per_layer, 15);
    }
}
