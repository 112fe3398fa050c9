//! Per-corner tangent frames.

use glam::{Vec2, Vec3, Vec4, Vec4Swizzles};

/// Tangent and binormal of one corner, spanning its tangent plane.
///
/// Neither axis is normalized: their magnitudes scale the projected offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentFrame {
    pub tangent: Vec3,
    pub binormal: Vec3,
}

impl TangentFrame {
    /// Rebuild the frame from a normal and a tangent whose `w` holds the
    /// handedness sign (`+1` or `-1`).
    #[must_use]
    pub fn from_normal_tangent(normal: Vec3, tangent: Vec4) -> Self {
        let tangent_xyz = tangent.xyz();
        Self {
            tangent: tangent_xyz,
            binormal: normal.cross(tangent_xyz) * tangent.w,
        }
    }

    /// Express `offset` as `(offset · tangent, offset · binormal)`.
    #[must_use]
    pub fn project(&self, offset: Vec3) -> Vec2 {
        Vec2::new(offset.dot(self.tangent), offset.dot(self.binormal))
    }
}
