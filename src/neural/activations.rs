use crate::matrix::ops::sigmoid;

pub trait Activation {
    /// Returns activation function at x
    fn call(&self, x: f64) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activations {
    Identity,
    #[default]
    Sigmoid,
    Arctan,
    ReLU,
}

impl Activation for Activations {
    fn call(&self, x: f64) -> f64 {
        use Activations::*;
        match self {
            Identity => x,
            Sigmoid => sigmoid(x),
            Arctan => x.atan(),
            ReLU => x.max(0.0),
        }
    }
}
