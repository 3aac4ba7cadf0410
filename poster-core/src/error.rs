//! Error types for poster operations.
//!
//! The element-list operations themselves never fail; these errors come from
//! the boundaries where strings and JSON from the editor are turned into
//! typed values.

use thiserror::Error;

/// Result type for poster operations.
pub type PosterResult<T> = Result<T, PosterError>;

/// Errors that can occur at the poster API boundary.
#[derive(Debug, Error)]
pub enum PosterError {
    /// An element identifier could not be parsed.
    #[error("Invalid element id: {0}")]
    InvalidElementId(String),

    /// A toolbar action tag is not one of the known element actions.
    #[error("Unknown element action: {0}")]
    UnknownAction(String),

    /// Canvas dimensions must be finite and positive.
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },

    /// An element list holds more than one background.
    #[error("Element list has {0} backgrounds; at most one is allowed")]
    DuplicateBackground(usize),

    /// Element list serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
