//! Error types for mesh buffer validation.

use thiserror::Error;

/// Errors reported when source buffers are not attribute-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A per-vertex attribute buffer does not match the position count.
    #[error("{attribute} has {actual} entries, expected {expected}")]
    MismatchedAttribute {
        attribute: Attribute,
        expected: usize,
        actual: usize,
    },

    /// The triangle index list does not describe whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotMultipleOfThree(usize),

    /// A triangle refers to a vertex past the end of the buffers.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Per-vertex attribute named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Normals,
    Tangents,
    BoneWeights,
    Uv0,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Normals => "normals",
            Self::Tangents => "tangents",
            Self::BoneWeights => "bone weights",
            Self::Uv0 => "uv0",
        })
    }
}

/// Convenience alias for `Result<T, EncodeError>`.
pub type EncodeResult<T> = Result<T, EncodeError>;
