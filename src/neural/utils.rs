use crate::prelude::*;

use super::NeuralNet;

/// The two trainable matrices of a layer, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Param {
    Weights,
    Biases,
}

impl Param {
    pub(crate) const ALL: [Param; 2] = [Param::Weights, Param::Biases];
}

/// True when both networks have the same layer count and parameter shapes.
pub(crate) fn same_shape(a: &NeuralNet, b: &NeuralNet) -> bool {
    a.layers.len() == b.layers.len()
        && a.layers.iter().zip(&b.layers).all(|(x, y)| {
            x.weights.dim() == y.weights.dim() && x.biases.dim() == y.biases.dim()
        })
}

/// Finite-difference step: strictly positive and finite.
pub(crate) fn check_eps(eps: f64) -> Result<()> {
    if eps > 0.0 && eps.is_finite() {
        Ok(())
    } else {
        Err(Error::HyperparamErr(format!("eps must be positive, got {eps}")))
    }
}

pub(crate) fn check_rate(rate: f64) -> Result<()> {
    if rate.is_finite() {
        Ok(())
    } else {
        Err(Error::HyperparamErr(format!("rate must be finite, got {rate}")))
    }
}
