//! Subcommand implementations.

use std::path::{Path, PathBuf};

use skinvert::{ConvertOptions, MeshAsset, convert_paths};

pub fn convert(
    paths: &[PathBuf],
    output_dir: Option<PathBuf>,
    name: String,
    compact: bool,
) -> Result<(), String> {
    let options = ConvertOptions {
        output_dir,
        file_stem: name,
        pretty: !compact,
    };

    let report = convert_paths(paths, &options);
    for path in &report.converted {
        println!("{}", path.display());
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} meshes failed to convert",
            report.failures.len(),
            paths.len()
        ))
    }
}

pub fn inspect(path: &Path) -> Result<(), String> {
    let asset =
        MeshAsset::load(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    println!("{}", asset.summary());
    Ok(())
}
