use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Step optimization did not settle inside the iteration guard.
    #[error("exceeded maximum number of iterations ({iterations}) while optimizing scale step")]
    IterationLimitExceeded { iterations: usize },

    #[error("invalid axis geometry: axis length must be finite and > 0, got {axis_length}")]
    InvalidGeometry { axis_length: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
