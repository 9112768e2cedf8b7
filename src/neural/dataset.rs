use crate::matrix::Matrix2;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Row-aligned training samples: `inputs` row `r` maps to `targets` row `r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset", into = "RawDataset")]
pub struct Dataset {
    inputs: Matrix2<f64>,
    targets: Matrix2<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawDataset {
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(inputs: Matrix2<f64>, targets: Matrix2<f64>) -> Result<Self> {
        if inputs.rows() != targets.rows() {
            return Err(Error::DimensionErr);
        }
        Ok(Self { inputs, targets })
    }

    pub fn from_rows(inputs: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Self> {
        if inputs.is_empty() || targets.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Self::new(Matrix2::from_vec(inputs)?, Matrix2::from_vec(targets)?)
    }

    /// Two-input truth table in `(0,0), (1,0), (0,1), (1,1)` order.
    fn gate(outputs: [i32; 4]) -> Self {
        let [a, b, c, d] = outputs;
        Self {
            inputs: Matrix2::from_array([[0, 0], [1, 0], [0, 1], [1, 1]]).into(),
            targets: Matrix2::from_array([[a], [b], [c], [d]]).into(),
        }
    }

    pub fn or_gate() -> Self {
        Self::gate([0, 1, 1, 1])
    }

    pub fn and_gate() -> Self {
        Self::gate([0, 0, 0, 1])
    }

    pub fn nand_gate() -> Self {
        Self::gate([1, 1, 1, 0])
    }

    pub fn xor_gate() -> Self {
        Self::gate([0, 1, 1, 0])
    }

    pub fn inputs(&self) -> &Matrix2<f64> {
        &self.inputs
    }

    pub fn targets(&self) -> &Matrix2<f64> {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.inputs.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<RawDataset> for Dataset {
    type Error = Error;
    fn try_from(raw: RawDataset) -> Result<Self> {
        Self::from_rows(raw.inputs, raw.targets)
    }
}

impl From<Dataset> for RawDataset {
    fn from(value: Dataset) -> Self {
        Self {
            inputs: value.inputs.to_vec(),
            targets: value.targets.to_vec(),
        }
    }
}
