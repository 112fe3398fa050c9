//! Batch conversion of mesh asset files.
//!
//! Each input is checked, converted and written next to its source under a
//! fresh name. A failing input is reported and skipped; the rest of the batch
//! still runs.

use std::path::{Path, PathBuf};

use crate::asset::{MeshAsset, converted_name};
use crate::error::{Error, Result};

/// File stem used for converted assets unless overridden.
pub const DEFAULT_FILE_STEM: &str = "Converted Model";

/// Extension of mesh documents.
pub const ASSET_EXTENSION: &str = "json";

/// Settings for a conversion batch.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory for converted assets. `None` writes next to each source.
    pub output_dir: Option<PathBuf>,
    /// Stem of the converted file name, before any uniqueness counter.
    pub file_stem: String,
    /// Write indented JSON.
    pub pretty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_stem: DEFAULT_FILE_STEM.to_string(),
            pretty: true,
        }
    }
}

/// An input that could not be converted.
#[derive(Debug)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of [`convert_paths`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Written assets, in input order.
    pub converted: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reject meshes without bone weights.
pub fn check_skinned(asset: &MeshAsset) -> Result<()> {
    if asset.is_skinned() {
        Ok(())
    } else {
        Err(Error::NotSkinned {
            name: asset.name.clone(),
        })
    }
}

/// Explode a skinned asset into a new, unsaved asset.
pub fn convert_asset(asset: &MeshAsset) -> Result<MeshAsset> {
    check_skinned(asset)?;

    let source = asset.source_view()?;
    source.validate()?;

    #[cfg(feature = "parallel")]
    let exploded = skinvert_encode::explode_par(&source);
    #[cfg(not(feature = "parallel"))]
    let exploded = skinvert_encode::explode(&source);

    tracing::debug!(
        "{}: {} vertices, {} triangles -> {} vertices",
        asset.name,
        source.vertex_count(),
        source.triangle_count(),
        exploded.vertex_count()
    );

    Ok(MeshAsset::from_exploded(
        converted_name(&asset.name),
        exploded,
    ))
}

/// First path in `dir` named `<stem>.<ext>` or `<stem> <n>.<ext>` that does
/// not exist yet.
#[must_use]
pub fn unique_destination(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    let candidate = dir.join(format!("{stem}.{extension}"));
    if !candidate.exists() {
        return candidate;
    }

    (1u64..)
        .map(|n| dir.join(format!("{stem} {n}.{extension}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

fn destination_dir(source: &Path, options: &ConvertOptions) -> PathBuf {
    if let Some(dir) = &options.output_dir {
        return dir.clone();
    }
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Load, convert and save a single asset file, returning the written path.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<PathBuf> {
    let source = MeshAsset::load(path)?;
    let converted = convert_asset(&source)?;

    let dir = destination_dir(path, options);
    let destination = unique_destination(&dir, &options.file_stem, ASSET_EXTENSION);
    converted.save(&destination, options.pretty)?;

    Ok(destination)
}

/// Convert every file in `paths`, continuing past failures.
pub fn convert_paths<P: AsRef<Path>>(paths: &[P], options: &ConvertOptions) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        match convert_file(path, options) {
            Ok(destination) => {
                tracing::info!(
                    "Converted {} -> {}",
                    path.display(),
                    destination.display()
                );
                report.converted.push(destination);
            }
            Err(error) => {
                tracing::error!("{}: {}", path.display(), error);
                report.failures.push(BatchFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        "Batch complete: {} converted, {} failed",
        report.converted.len(),
        report.failures.len()
    );
    report
}
