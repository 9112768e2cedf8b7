use log::{debug, info};

use crate::{
    neural::{dataset::Dataset, utils::check_eps, NeuralNet},
    prelude::*,
};

/// Plain gradient descent driven by finite-difference gradient estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimizer {
    epochs: usize,
    rate: f64,
    /// Perturbation used for approximating derivatives
    eps: f64,
    epochs_per_log: Option<usize>,
}

/// Costs observed around a [`Optimizer::train`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    pub initial_cost: f64,
    pub final_cost: f64,
    pub epochs: usize,
}

impl Optimizer {
    pub fn new(epochs: usize, rate: f64, eps: f64) -> Self {
        Self {
            epochs,
            rate,
            eps,
            epochs_per_log: None,
        }
    }

    /// Log the cost every `epochs_per_log` epochs.
    pub fn with_log(mut self, epochs_per_log: Option<usize>) -> Self {
        self.epochs_per_log = epochs_per_log;
        self
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    pub fn set_epochs(&mut self, epochs: usize) {
        self.epochs = epochs;
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// One epoch: estimate the gradient over the whole dataset into `grad`, then descend.
    pub fn step(&self, net: &mut NeuralNet, grad: &mut NeuralNet, data: &Dataset) -> Result<()> {
        net.estimate_gradient(grad, self.eps, data.inputs(), data.targets())?;
        net.apply_gradient(grad, self.rate)
    }

    /// Runs exactly `epochs` steps. There is no early stopping.
    pub fn train(&self, net: &mut NeuralNet, data: &Dataset) -> Result<TrainReport> {
        check_eps(self.eps)?;
        let mut grad = net.zeros_like();

        let initial_cost = net.cost(data.inputs(), data.targets())?;
        info!("initial cost: {initial_cost}");
        debug!(
            "training {:?} for {} epochs, rate {}, eps {}",
            net.architecture(),
            self.epochs,
            self.rate,
            self.eps
        );

        for i in 0..self.epochs {
            self.step(net, &mut grad, data)?;

            if self.epochs_per_log.is_some_and(|n| n > 0 && (i + 1) % n == 0) {
                let cost = net.cost(data.inputs(), data.targets())?;
                info!("epoch {} cost: {cost}", i + 1);
            }
        }

        let final_cost = net.cost(data.inputs(), data.targets())?;
        info!("final cost: {final_cost}");

        Ok(TrainReport {
            initial_cost,
            final_cost,
            epochs: self.epochs,
        })
    }
}
