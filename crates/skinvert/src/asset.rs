//! JSON mesh documents standing in for host mesh assets.
//!
//! A document holds the per-vertex channels of one mesh plus one index list
//! per submesh. Vectors are stored as plain float arrays; optional channels
//! are omitted when empty.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use skinvert_encode::{BoneWeight, ExplodedMesh, SourceMesh};

use crate::error::{Error, Result};

/// Suffix the host appends to duplicated objects.
const CLONE_SUFFIX: &str = "(Clone)";

/// A mesh asset as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshAsset {
    pub name: String,
    pub vertices: Vec<Vec3>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normals: Vec<Vec3>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tangents: Vec<Vec4>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bone_weights: Vec<BoneWeight>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<Vec4>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uv0: Vec<Vec2>,
    /// Centroid offsets on converted meshes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uv1: Vec<Vec2>,
    /// Neighbor offsets on converted meshes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uv2: Vec<Vec4>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uv3: Vec<Vec4>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindposes: Vec<Mat4>,
    /// Triangle index lists, one per submesh.
    pub submeshes: Vec<Vec<u32>>,
}

impl MeshAsset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn save(&self, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        Ok(())
    }

    #[must_use]
    pub fn is_skinned(&self) -> bool {
        !self.bone_weights.is_empty()
    }

    /// Borrow submesh 0 and the vertex channels as transform input.
    pub fn source_view(&self) -> Result<SourceMesh<'_>> {
        let indices = self.submeshes.first().ok_or_else(|| Error::NoSubmesh {
            name: self.name.clone(),
        })?;

        Ok(SourceMesh {
            vertices: &self.vertices,
            normals: &self.normals,
            tangents: &self.tangents,
            bone_weights: &self.bone_weights,
            uv0: &self.uv0,
            bindposes: &self.bindposes,
            indices,
        })
    }

    /// Build a new asset from transform output.
    ///
    /// The result has a single submesh and no vertex colors or `uv3`.
    #[must_use]
    pub fn from_exploded(name: impl Into<String>, mesh: ExplodedMesh) -> Self {
        Self {
            name: name.into(),
            vertices: mesh.vertices,
            normals: mesh.normals,
            tangents: mesh.tangents,
            bone_weights: mesh.bone_weights,
            colors: Vec::new(),
            uv0: mesh.uv0,
            uv1: mesh.uv1,
            uv2: mesh.uv2,
            uv3: Vec::new(),
            bindposes: mesh.bindposes,
            submeshes: vec![mesh.indices],
        }
    }

    #[must_use]
    pub fn summary(&self) -> MeshSummary<'_> {
        MeshSummary { asset: self }
    }
}

/// Name for a converted copy of the mesh called `source`.
#[must_use]
pub fn converted_name(source: &str) -> String {
    source
        .strip_suffix(CLONE_SUFFIX)
        .map_or(source, str::trim_end)
        .to_string()
}

/// Human-readable overview of an asset, as printed by `skinvert inspect`.
pub struct MeshSummary<'a> {
    asset: &'a MeshAsset,
}

impl fmt::Display for MeshSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let asset = self.asset;
        let triangles: usize = asset.submeshes.iter().map(|s| s.len() / 3).sum();

        writeln!(f, "name:      {}", asset.name)?;
        writeln!(f, "vertices:  {}", asset.vertices.len())?;
        writeln!(f, "triangles: {triangles}")?;
        writeln!(f, "submeshes: {}", asset.submeshes.len())?;
        writeln!(f, "skinned:   {}", asset.is_skinned())?;
        writeln!(f, "bindposes: {}", asset.bindposes.len())?;

        let channels = [
            ("normals", asset.normals.is_empty()),
            ("tangents", asset.tangents.is_empty()),
            ("colors", asset.colors.is_empty()),
            ("uv0", asset.uv0.is_empty()),
            ("uv1", asset.uv1.is_empty()),
            ("uv2", asset.uv2.is_empty()),
            ("uv3", asset.uv3.is_empty()),
        ];
        let present: Vec<&str> = channels
            .iter()
            .filter(|(_, empty)| !empty)
            .map(|(name, _)| *name)
            .collect();
        write!(f, "channels:  {}", present.join(", "))
    }
}
