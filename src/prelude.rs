pub use crate::matrix::{MatrixMut, MatrixRef};

/// Error type for TinyNN
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix operation.
    #[error("matrix dimensions are incompatible")]
    DimensionErr,
    /// The buffer backing a Matrix could not be allocated.
    #[error("failed to allocate matrix buffer")]
    AllocErr,
    /// Architectures need an input and an output width, none of them zero.
    #[error("architecture needs at least 2 non-zero layer widths")]
    ArchitectureErr,
    /// Random fill with `low > high` or non-finite bounds.
    #[error("invalid random range")]
    RangeErr,
    #[error("invalid hyperparameter: {0}")]
    HyperparamErr(String),
    #[error("dataset has no samples")]
    EmptyDataset,
    #[error("invalid config: {0}")]
    ConfigErr(String),
}

pub type Result<T> = std::result::Result<T, Error>;
