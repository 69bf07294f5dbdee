use crate::clipper::error::EngineError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// Geometry that is not a sequence of `[x, y]` number pairs.
    #[error("{0}")]
    InputShape(String),

    #[error("unrecognized {kind} '{token}', expected one of: {expected}")]
    UnrecognizedOption {
        kind: &'static str,
        token: String,
        expected: &'static str,
    },

    #[error("scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("clipping operation failed: {0}")]
    OperationFailed(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, ClipError>;
