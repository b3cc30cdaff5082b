use thiserror::Error;

/// Top-level error type for the quadsect crate.
#[derive(Debug, Error)]
pub enum QuadsectError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid range [{left}, {right}] over a sequence of {len} points")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`QuadsectError`].
pub type Result<T> = std::result::Result<T, QuadsectError>;
