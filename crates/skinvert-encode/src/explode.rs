//! Per-triangle explosion and tangent-space offset encoding.

use glam::{Vec2, Vec3, Vec4};

use crate::error::EncodeResult;
use crate::frame::TangentFrame;
use crate::mesh::{BoneWeight, ExplodedMesh, SourceMesh};

/// Everything written for one output vertex.
#[derive(Debug, Clone, Copy)]
struct Corner {
    position: Vec3,
    normal: Vec3,
    tangent: Vec4,
    bone_weight: BoneWeight,
    uv0: Vec2,
    uv1: Vec2,
    uv2: Vec4,
}

/// Arithmetic mean of a triangle's three positions.
#[must_use]
pub fn centroid(positions: [Vec3; 3]) -> Vec3 {
    (positions[0] + positions[1] + positions[2]) / 3.0
}

/// Offset from each corner to the triangle centroid, in that corner's frame.
#[must_use]
pub fn centroid_offsets(positions: [Vec3; 3], frames: [TangentFrame; 3]) -> [Vec2; 3] {
    let center = centroid(positions);
    std::array::from_fn(|c| frames[c].project(center - positions[c]))
}

/// Offsets from each corner to its two triangle-mates, in that corner's frame.
///
/// Corner `c` stores the next corner in winding order in `xy` and the one
/// after that in `zw`.
#[must_use]
pub fn neighbor_offsets(positions: [Vec3; 3], frames: [TangentFrame; 3]) -> [Vec4; 3] {
    std::array::from_fn(|c| {
        let origin = positions[c];
        let next = frames[c].project(positions[(c + 1) % 3] - origin);
        let after = frames[c].project(positions[(c + 2) % 3] - origin);
        Vec4::new(next.x, next.y, after.x, after.y)
    })
}

fn encode_triangle(source: &SourceMesh<'_>, triangle: &[u32]) -> [Corner; 3] {
    let ids: [usize; 3] = std::array::from_fn(|c| triangle[c] as usize);

    let positions = ids.map(|i| source.vertices[i]);
    let normals = ids.map(|i| source.normals[i]);
    let tangents = ids.map(|i| source.tangents[i]);
    let frames: [TangentFrame; 3] =
        std::array::from_fn(|c| TangentFrame::from_normal_tangent(normals[c], tangents[c]));

    let uv1 = centroid_offsets(positions, frames);
    let uv2 = neighbor_offsets(positions, frames);

    std::array::from_fn(|c| Corner {
        position: positions[c],
        normal: normals[c],
        tangent: tangents[c],
        bone_weight: source.bone_weights[ids[c]],
        uv0: source.uv0[ids[c]],
        uv1: uv1[c],
        uv2: uv2[c],
    })
}

#[allow(clippy::cast_possible_truncation)]
fn assemble(
    source: &SourceMesh<'_>,
    triangles: impl IntoIterator<Item = [Corner; 3]>,
) -> ExplodedMesh {
    let corners = source.triangle_count() * 3;
    let mut out = ExplodedMesh::with_capacity(corners, source.bindposes);

    for corner in triangles.into_iter().flatten() {
        out.vertices.push(corner.position);
        out.normals.push(corner.normal);
        out.tangents.push(corner.tangent);
        out.bone_weights.push(corner.bone_weight);
        out.uv0.push(corner.uv0);
        out.uv1.push(corner.uv1);
        out.uv2.push(corner.uv2);
    }

    // Source meshes address vertices with u32, so 3T fits as well.
    out.indices.extend(0..out.vertices.len() as u32);
    out
}

/// Give every triangle its own three vertices and encode its local shape.
///
/// The source buffers must be attribute-aligned with every index in range;
/// out-of-range indices panic. Use [`try_explode`] for unchecked input.
/// Trailing indices that do not form a whole triangle are ignored.
#[must_use]
pub fn explode(source: &SourceMesh<'_>) -> ExplodedMesh {
    let triangles = source
        .indices
        .chunks_exact(3)
        .map(|triangle| encode_triangle(source, triangle));
    assemble(source, triangles)
}

/// [`explode`] after [`SourceMesh::validate`].
pub fn try_explode(source: &SourceMesh<'_>) -> EncodeResult<ExplodedMesh> {
    source.validate()?;
    Ok(explode(source))
}

/// [`explode`] with triangles encoded on the rayon thread pool.
///
/// Output is identical to the sequential version.
#[cfg(feature = "parallel")]
#[must_use]
pub fn explode_par(source: &SourceMesh<'_>) -> ExplodedMesh {
    use rayon::prelude::*;

    let triangles: Vec<[Corner; 3]> = source
        .indices
        .par_chunks_exact(3)
        .map(|triangle| encode_triangle(source, triangle))
        .collect();
    assemble(source, triangles)
}
