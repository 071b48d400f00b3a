//! Activation functions

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Elementwise activation, selectable by name at construction.
///
/// Derivatives are expressed in terms of the activated output `y`, not the
/// pre-activation input, because the forward trace only retains outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Activation {
    #[default]
    Sigmoid,
    Relu,
}

impl Activation {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Relu => x.max(0.0),
        }
    }

    /// Derivative at an already-activated output `y`
    pub fn derivative(self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Relu => {
                if y > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Activation::Sigmoid => "sigmoid",
            Activation::Relu => "relu",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activation {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sigmoid" => Ok(Activation::Sigmoid),
            "relu" => Ok(Activation::Relu),
            _ => Err(crate::Error::UnsupportedActivation {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Activation {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Activation> for String {
    fn from(activation: Activation) -> Self {
        activation.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_values() {
        let sigmoid = Activation::Sigmoid;
        assert!((sigmoid.apply(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid.apply(10.0) > 0.99);
        assert!(sigmoid.apply(-10.0) < 0.01);
        assert!((sigmoid.derivative(0.5) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn relu_derivative_uses_output() {
        let relu = Activation::Relu;
        assert_eq!(relu.apply(-3.0), 0.0);
        assert_eq!(relu.apply(2.5), 2.5);
        assert_eq!(relu.derivative(0.0), 0.0);
        assert_eq!(relu.derivative(2.5), 1.0);
    }

    #[test]
    fn parses_names() {
        assert_eq!("ReLU".parse::<Activation>().unwrap(), Activation::Relu);
        assert_eq!(
            " sigmoid ".parse::<Activation>().unwrap(),
            Activation::Sigmoid
        );
        let err = "tanh".parse::<Activation>().unwrap_err();
        assert!(matches!(err, crate::Error::UnsupportedActivation { .. }));
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&Activation::Relu).unwrap();
        assert_eq!(json, "\"relu\"");
        let parsed: Activation = serde_json::from_str("\"sigmoid\"").unwrap();
        assert_eq!(parsed, Activation::Sigmoid);
        assert!(serde_json::from_str::<Activation>("\"softmax\"").is_err());
    }
}
