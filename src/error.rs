//! Error types
//!
//! Nothing here is fatal to the host: engine errors describe calls that were
//! ignored, layout errors describe bad geometry passed by the caller.

use thiserror::Error;

/// Placement generation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("pizza radius must be positive and finite, got {radius}")]
    DegenerateLayoutRequest { radius: f32 },
}

/// Failures loading or validating tuning data
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {reason}")]
    Invalid { reason: String },
}

/// Rejected engine inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("unknown topping '{0}'")]
    InvalidToppingReference(String),

    #[error("unknown pizza '{0}'")]
    UnknownPizza(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
