//! Error types for tween construction and configuration loading.
//!
//! Ticking and cancelling never fail; only building an instance or
//! decoding a `TweenSpec` can.

use thiserror::Error;

/// Errors surfaced to the caller at construction time.
#[derive(Error, Debug)]
pub enum TweenError {
    /// The easing identifier is not known to the registry.
    #[error("unknown easing curve '{name}'")]
    UnknownEasing { name: String },

    /// A tween spec could not be decoded.
    #[error("invalid tween spec: {0}")]
    InvalidSpec(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TweenError>;
