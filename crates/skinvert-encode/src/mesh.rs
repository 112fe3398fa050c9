//! Source and exploded mesh buffers.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::{Attribute, EncodeError, EncodeResult};

/// Skinning influences for a single vertex (up to four bones).
///
/// Opaque to the transform: weights are copied verbatim, never renormalized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoneWeight {
    pub indices: [u32; 4],
    pub weights: [f32; 4],
}

impl BoneWeight {
    /// A vertex fully bound to one bone.
    #[must_use]
    pub const fn single(bone: u32) -> Self {
        Self {
            indices: [bone, 0, 0, 0],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Number of influences with a positive weight.
    #[must_use]
    pub fn influence_count(&self) -> usize {
        self.weights.iter().filter(|w| **w > 0.0).count()
    }
}

/// Borrowed view over a caller-owned, attribute-aligned submesh.
///
/// All per-vertex slices share one indexing scheme; `indices` holds one
/// triangle per consecutive triple.
#[derive(Debug, Clone, Copy)]
pub struct SourceMesh<'a> {
    pub vertices: &'a [Vec3],
    pub normals: &'a [Vec3],
    /// Tangent direction in `xyz`, handedness sign in `w`.
    pub tangents: &'a [Vec4],
    pub bone_weights: &'a [BoneWeight],
    pub uv0: &'a [Vec2],
    pub bindposes: &'a [Mat4],
    pub indices: &'a [u32],
}

impl SourceMesh<'_> {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// A mesh without bone weights is not skinned and must not be converted.
    #[must_use]
    pub fn is_skinned(&self) -> bool {
        !self.bone_weights.is_empty()
    }

    /// Check that the buffers are attribute-aligned and every index is in range.
    ///
    /// Does not check for skinning; see [`SourceMesh::is_skinned`].
    pub fn validate(&self) -> EncodeResult<()> {
        let expected = self.vertices.len();
        let lengths = [
            (Attribute::Normals, self.normals.len()),
            (Attribute::Tangents, self.tangents.len()),
            (Attribute::BoneWeights, self.bone_weights.len()),
            (Attribute::Uv0, self.uv0.len()),
        ];
        for (attribute, actual) in lengths {
            if actual != expected {
                return Err(EncodeError::MismatchedAttribute {
                    attribute,
                    expected,
                    actual,
                });
            }
        }

        if self.indices.len() % 3 != 0 {
            return Err(EncodeError::IndexCountNotMultipleOfThree(
                self.indices.len(),
            ));
        }

        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, i)| **i as usize >= expected)
        {
            return Err(EncodeError::IndexOutOfRange {
                position,
                index,
                vertex_count: expected,
            });
        }

        Ok(())
    }
}

/// Unindexed output mesh: three fresh vertices per source triangle.
///
/// Entries `3k`, `3k + 1` and `3k + 2` of every per-vertex buffer belong to
/// the corners of source triangle `k` in their original winding order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplodedMesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub tangents: Vec<Vec4>,
    pub bone_weights: Vec<BoneWeight>,
    pub uv0: Vec<Vec2>,
    /// Centroid offset in each corner's tangent frame.
    pub uv1: Vec<Vec2>,
    /// Offsets to the next and following corner in each corner's tangent frame.
    pub uv2: Vec<Vec4>,
    /// Always `0..3T`.
    pub indices: Vec<u32>,
    pub bindposes: Vec<Mat4>,
}

impl ExplodedMesh {
    pub(crate) fn with_capacity(corners: usize, bindposes: &[Mat4]) -> Self {
        Self {
            vertices: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
            tangents: Vec::with_capacity(corners),
            bone_weights: Vec::with_capacity(corners),
            uv0: Vec::with_capacity(corners),
            uv1: Vec::with_capacity(corners),
            uv2: Vec::with_capacity(corners),
            indices: Vec::with_capacity(corners),
            bindposes: bindposes.to_vec(),
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
