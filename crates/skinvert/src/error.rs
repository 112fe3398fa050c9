//! Error types for asset conversion.

use skinvert_encode::EncodeError;
use thiserror::Error;

/// Errors raised while loading, converting or saving a mesh asset.
#[derive(Debug, Error)]
pub enum Error {
    /// The mesh carries no bone weights.
    #[error("The given mesh ({name}) is not skinned.")]
    NotSkinned { name: String },

    /// The mesh has no index list to convert.
    #[error("The given mesh ({name}) has no submesh.")]
    NoSubmesh { name: String },

    /// The vertex buffers are not attribute-aligned.
    #[error("malformed mesh buffers: {0}")]
    Encode(#[from] EncodeError),

    /// Reading or writing an asset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An asset file is not a valid mesh document.
    #[error("mesh document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
