//! Feed-forward network with manual backpropagation
//!
//! Training is a two-phase protocol: [`Network::classify`] runs the forward
//! pass and returns a [`ForwardTrace`] holding every layer's output, and
//! [`Network::update_weights`] consumes that trace to take one gradient
//! step. An update cannot be issued without the forward pass it belongs to.

pub mod activation;
pub mod config;
pub mod layer;
pub mod network;

pub use activation::Activation;
pub use config::NetworkConfig;
pub use layer::Layer;
pub use network::{ForwardTrace, Network, squared_error};
