use thiserror::Error;

/// Top-level error type for the bezgeo geometry kernel.
#[derive(Debug, Error)]
pub enum BezgeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("a Bézier curve takes 2 to 4 control points, got {actual}")]
    InvalidControlPoints { actual: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to offset and outline operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`BezgeoError`].
pub type Result<T> = std::result::Result<T, BezgeoError>;
