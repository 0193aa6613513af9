use thiserror::Error;

/// Top-level error type for the pointloc kernel.
#[derive(Debug, Error)]
pub enum PointlocError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to polygon construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate polygon: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors related to queries and transforms.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PointlocError`].
pub type Result<T> = std::result::Result<T, PointlocError>;
