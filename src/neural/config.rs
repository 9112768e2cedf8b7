use std::{fs, path::Path};

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    neural::{
        optimizer::Optimizer,
        utils::{check_eps, check_rate},
        NeuralNet,
    },
    prelude::*,
};

/// Everything a training run needs besides the data.
///
/// Missing JSON fields fall back to [`TrainConfig::default`], which is the
/// `[2, 2, 1]` XOR run: 10k epochs, rate `0.1`, eps `1e-3`, init in `[0, 2)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    pub architecture: Vec<usize>,
    pub epochs: usize,
    pub rate: f64,
    pub eps: f64,
    pub init_low: f64,
    pub init_high: f64,
    /// `None` seeds from OS entropy, so runs are not reproducible.
    pub seed: Option<u64>,
    pub log_every: Option<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            architecture: vec![2, 2, 1],
            epochs: 10_000,
            rate: 1e-1,
            eps: 1e-3,
            init_low: 0.0,
            init_high: 2.0,
            seed: None,
            log_every: None,
        }
    }
}

impl TrainConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::ConfigErr(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| Error::ConfigErr(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.architecture.len() < 2 || self.architecture.contains(&0) {
            return Err(Error::ArchitectureErr);
        }
        check_eps(self.eps)?;
        check_rate(self.rate)?;

        let (low, high) = (self.init_low, self.init_high);
        if !(low.is_finite() && high.is_finite() && (high - low).is_finite()) || low > high {
            return Err(Error::RangeErr);
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn optimizer(&self) -> Optimizer {
        Optimizer::new(self.epochs, self.rate, self.eps).with_log(self.log_every)
    }

    /// Allocates the configured architecture and fills it from `rng`.
    pub fn build_net<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NeuralNet> {
        let mut net = NeuralNet::new(&self.architecture)?;
        net.randomize_with(rng, self.init_low, self.init_high)?;
        Ok(net)
    }
}
