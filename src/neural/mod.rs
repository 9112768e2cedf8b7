pub mod activations;
pub mod config;
pub mod dataset;
pub mod optimizer;
mod utils;

use crate::prelude::*;
use std::fmt;

use crate::matrix::{Matrix2, MatrixViewMut};
use log::trace;
use rand::Rng;

use self::activations::{Activation, Activations};
use self::utils::{check_eps, check_rate, Param};

#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: Matrix2<f64>,
    biases: Matrix2<f64>,
    activation: Activations,
}

/// Feed-forward network with preallocated activation rows.
///
/// `activations[0]` is the input slot and `activations[depth]` the output slot.
/// Layer `i` maps `activations[i]` to `activations[i + 1]` through a
/// `(cols(a_i), cols(a_i+1))` weight matrix and a single-row bias.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNet {
    layers: Vec<DenseLayer>,
    activations: Vec<Matrix2<f64>>,
}

impl DenseLayer {
    /// Initializes a zeroed layer given the number of inputs and neurons.
    /// Activation function is initially the sigmoid.
    pub fn new(n_inputs: usize, n_neurons: usize) -> Result<Self> {
        Ok(Self {
            weights: Matrix2::new(n_inputs, n_neurons)?,
            biases: Matrix2::new(1, n_neurons)?,
            activation: Activations::Sigmoid,
        })
    }

    /// `out = act(input * weights + biases)`
    pub fn forward(&self, input: &Matrix2<f64>, out: &mut Matrix2<f64>) -> Result<()> {
        out.dot_into(input, &self.weights)?;
        out.add_from(&self.biases)?;
        match self.activation {
            Activations::Sigmoid => out.apply_sigmoid(),
            act => out.apply(|x| act.call(x)),
        }
        Ok(())
    }

    pub fn weights(&self) -> &Matrix2<f64> {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix2<f64> {
        &self.biases
    }

    pub fn activation(&self) -> Activations {
        self.activation
    }

    /// Returns the amount of inputs this layer accepts
    pub fn input_amount(&self) -> usize {
        self.weights.rows()
    }

    /// Returns the amount of neurons in the layer
    pub fn neuron_amount(&self) -> usize {
        self.weights.cols()
    }

    pub(crate) fn param(&self, p: Param) -> &Matrix2<f64> {
        match p {
            Param::Weights => &self.weights,
            Param::Biases => &self.biases,
        }
    }

    pub(crate) fn param_mut(&mut self, p: Param) -> &mut Matrix2<f64> {
        match p {
            Param::Weights => &mut self.weights,
            Param::Biases => &mut self.biases,
        }
    }
}

impl NeuralNet {
    /// Allocates a zeroed network for an architecture `[n0, n1, ..., nk]`.
    /// Needs at least an input and an output width, all non-zero.
    pub fn new(arch: &[usize]) -> Result<Self> {
        if arch.len() < 2 || arch.contains(&0) {
            return Err(Error::ArchitectureErr);
        }

        let mut layers = Vec::with_capacity(arch.len() - 1);
        let mut activations = Vec::with_capacity(arch.len());

        // input data
        activations.push(Matrix2::new(1, arch[0])?);
        for pair in arch.windows(2) {
            layers.push(DenseLayer::new(pair[0], pair[1])?);
            activations.push(Matrix2::new(1, pair[1])?);
        }

        Ok(Self {
            layers,
            activations,
        })
    }

    /// Zeroed twin with identical shapes, used to hold gradient estimates.
    pub fn zeros_like(&self) -> Self {
        let mut mirror = self.clone();
        for layer in &mut mirror.layers {
            layer.weights.zero();
            layer.biases.zero();
        }
        for act in &mut mirror.activations {
            act.zero();
        }
        mirror
    }

    /// Reset parameters to uniformly random values in `[low, high)` using the thread RNG.
    pub fn randomize(&mut self, low: f64, high: f64) -> Result<()> {
        self.randomize_with(&mut rand::thread_rng(), low, high)
    }

    /// Reset every weight and bias to a uniform draw from `[low, high)`.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        low: f64,
        high: f64,
    ) -> Result<()> {
        for layer in self.layers.iter_mut() {
            layer.weights.randomize(rng, low, high)?;
            layer.biases.randomize(rng, low, high)?;
        }
        Ok(())
    }

    /// Sets the nonlinearity of layer `layer`.
    pub fn set_activation(&mut self, layer: usize, activation: Activations) -> Result<()> {
        let layer = self.layers.get_mut(layer).ok_or(Error::DimensionErr)?;
        layer.activation = activation;
        Ok(())
    }

    /// Number of trainable layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Layer widths from input to output.
    pub fn architecture(&self) -> Vec<usize> {
        self.activations.iter().map(|a| a.cols()).collect()
    }

    /// Number of trainable scalars.
    pub fn param_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.weights.as_slice().len() + l.biases.as_slice().len())
            .sum()
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    pub fn weights(&self, layer: usize) -> Option<&Matrix2<f64>> {
        self.layers.get(layer).map(|l| &l.weights)
    }

    /// Cell access to layer `layer`'s weights; the shape stays fixed.
    pub fn weights_mut(&mut self, layer: usize) -> Option<MatrixViewMut<'_, f64>> {
        self.layers.get_mut(layer).map(|l| l.weights.view_mut())
    }

    pub fn biases(&self, layer: usize) -> Option<&Matrix2<f64>> {
        self.layers.get(layer).map(|l| &l.biases)
    }

    pub fn biases_mut(&mut self, layer: usize) -> Option<MatrixViewMut<'_, f64>> {
        self.layers.get_mut(layer).map(|l| l.biases.view_mut())
    }

    /// The activation row of layer `i` (0 is the input slot).
    pub fn activation(&self, i: usize) -> Option<&Matrix2<f64>> {
        self.activations.get(i)
    }

    pub fn input(&self) -> &Matrix2<f64> {
        &self.activations[0]
    }

    pub fn input_mut(&mut self) -> MatrixViewMut<'_, f64> {
        self.activations[0].view_mut()
    }

    pub fn output(&self) -> &Matrix2<f64> {
        &self.activations[self.layers.len()]
    }

    /// Propagates the row currently held in the input slot through every layer, in order.
    pub fn forward(&mut self) -> Result<()> {
        for (i, layer) in self.layers.iter().enumerate() {
            let (prev, next) = self.activations.split_at_mut(i + 1);
            layer.forward(&prev[i], &mut next[0])?;
        }
        Ok(())
    }

    /// Loads `input` into the input slot, runs [`NeuralNet::forward`] and returns the output row.
    pub fn predict<M: MatrixRef<f64> + ?Sized>(&mut self, input: &M) -> Result<&Matrix2<f64>> {
        self.activations[0].copy_from(input)?;
        self.forward()?;
        Ok(self.output())
    }

    /// Mean over samples of the squared error summed across output columns.
    ///
    /// The activation rows hold the last sample's state afterwards.
    pub fn cost(&mut self, inputs: &Matrix2<f64>, targets: &Matrix2<f64>) -> Result<f64> {
        if inputs.rows() != targets.rows()
            || inputs.cols() != self.input().cols()
            || targets.cols() != self.output().cols()
        {
            return Err(Error::DimensionErr);
        }

        let mut c = 0.0;
        for row in 0..inputs.rows() {
            self.predict(&inputs.row(row)?)?;
            let target = targets.row(row)?;
            for (y_hat, y) in self.output().as_slice().iter().zip(target.as_slice()) {
                let d = y_hat - y;
                c += d * d;
            }
        }
        Ok(c / inputs.rows() as f64)
    }

    /// Estimates the cost gradient by one-sided finite differences and writes it into `grad`.
    ///
    /// Every weight then bias of each layer (row-major) is bumped by `eps`, the
    /// cost re-evaluated and the parameter restored, so the network leaves this
    /// call with the parameters it entered with. `grad` must share this
    /// network's shapes.
    pub fn estimate_gradient(
        &mut self,
        grad: &mut NeuralNet,
        eps: f64,
        inputs: &Matrix2<f64>,
        targets: &Matrix2<f64>,
    ) -> Result<()> {
        check_eps(eps)?;
        if !utils::same_shape(self, grad) {
            return Err(Error::DimensionErr);
        }

        let base = self.cost(inputs, targets)?;
        trace!("finite diff baseline cost: {base}");

        for i in 0..self.layers.len() {
            for p in Param::ALL {
                for k in 0..self.layers[i].param(p).as_slice().len() {
                    let saved = self.layers[i].param(p).as_slice()[k];
                    self.layers[i].param_mut(p).as_mut_slice()[k] += eps;
                    let cost = self.cost(inputs, targets);
                    self.layers[i].param_mut(p).as_mut_slice()[k] = saved;

                    grad.layers[i].param_mut(p).as_mut_slice()[k] = (cost? - base) / eps;
                }
            }
        }
        Ok(())
    }

    /// Gradient descent step: `p -= rate * grad[p]` for every trainable scalar.
    pub fn apply_gradient(&mut self, grad: &NeuralNet, rate: f64) -> Result<()> {
        check_rate(rate)?;
        if !utils::same_shape(self, grad) {
            return Err(Error::DimensionErr);
        }

        for (layer, g) in self.layers.iter_mut().zip(&grad.layers) {
            for p in Param::ALL {
                let params = layer.param_mut(p).as_mut_slice();
                for (x, dx) in params.iter_mut().zip(g.param(p).as_slice()) {
                    *x -= rate * dx;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for NeuralNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nn = {{")?;
        for (i, layer) in self.layers.iter().enumerate() {
            layer.weights.fmt_named(f, &format!("ws{i}"), 2)?;
            layer.biases.fmt_named(f, &format!("bs{i}"), 2)?;
        }
        writeln!(f, "}}")
    }
}
