use thiserror::Error;

/// Structural input errors. Numeric degeneracy (singular systems) is not an
/// error and is reported as `None` by the solving operations instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("row {row} has {len} entries, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("augmentation has {len} entries, expected {size}")]
    AugmentationLength { len: usize, size: usize },
    #[error("non-finite matrix entry at ({row}, {col})")]
    NonFiniteEntry { row: usize, col: usize },
    #[error("non-finite augmentation entry at {row}")]
    NonFiniteAugmentation { row: usize },
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}
