//! End-to-end batch conversion through the file system.

use std::path::{Path, PathBuf};

use glam::{Mat4, Vec2, Vec3, Vec4};
use skinvert::skinvert_encode::BoneWeight;
use skinvert::{ConvertOptions, Error, MeshAsset, convert_paths};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("skinvert_batch_test_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Two triangles sharing an edge.
fn quad(name: &str) -> MeshAsset {
    MeshAsset {
        name: name.to_string(),
        vertices: vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
        normals: vec![Vec3::Z; 4],
        tangents: vec![Vec4::new(1.0, 0.0, 0.0, 1.0); 4],
        bone_weights: vec![BoneWeight::single(0); 4],
        colors: vec![Vec4::ONE; 4],
        uv0: vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
        uv3: vec![Vec4::ZERO; 4],
        bindposes: vec![Mat4::IDENTITY],
        submeshes: vec![vec![0, 1, 2, 0, 2, 3]],
        ..MeshAsset::default()
    }
}

fn write(dir: &Path, file: &str, asset: &MeshAsset) -> PathBuf {
    let path = dir.join(file);
    asset.save(&path, true).unwrap();
    path
}

#[test]
fn converts_skinned_assets_and_skips_the_rest() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let dir = temp_dir("mixed");

    let body = write(&dir, "body.json", &quad("Body"));
    let mut rock_asset = quad("Rock");
    rock_asset.bone_weights.clear();
    let rock = write(&dir, "rock.json", &rock_asset);
    let missing = dir.join("missing.json");
    let arm = write(&dir, "arm.json", &quad("Arm(Clone)"));

    let report = convert_paths(&[&body, &rock, &missing, &arm], &ConvertOptions::default());

    assert!(!report.is_success());
    assert_eq!(
        report.converted,
        vec![
            dir.join("Converted Model.json"),
            dir.join("Converted Model 1.json")
        ]
    );
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].path, rock);
    assert!(matches!(
        &report.failures[0].error,
        Error::NotSkinned { name } if name == "Rock"
    ));
    assert_eq!(report.failures[1].path, missing);
    assert!(matches!(report.failures[1].error, Error::Io(_)));

    let converted = MeshAsset::load(&report.converted[1]).unwrap();
    assert_eq!(converted.name, "Arm");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn converted_asset_is_exploded() {
    let dir = temp_dir("exploded");
    let source = quad("Body");
    let path = write(&dir, "body.json", &source);

    let report = convert_paths(&[&path], &ConvertOptions::default());
    assert!(report.is_success());

    let converted = MeshAsset::load(&report.converted[0]).unwrap();
    assert_eq!(converted.vertices.len(), 6);
    assert_eq!(converted.submeshes, vec![vec![0, 1, 2, 3, 4, 5]]);
    assert_eq!(converted.uv1.len(), 6);
    assert_eq!(converted.uv2.len(), 6);
    assert!(converted.colors.is_empty());
    assert!(converted.uv3.is_empty());
    assert_eq!(converted.bindposes, source.bindposes);

    // Corner 0 of both triangles is source vertex 0.
    assert_eq!(converted.vertices[0], Vec3::ZERO);
    assert_eq!(converted.vertices[3], Vec3::ZERO);
    assert_eq!(converted.vertices[5], Vec3::Y);

    // The source file is left as it was.
    assert_eq!(MeshAsset::load(&path).unwrap(), source);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn output_dir_and_stem_are_configurable() {
    let dir = temp_dir("options");
    let out = dir.join("out");
    std::fs::create_dir_all(&out).unwrap();
    let path = write(&dir, "body.json", &quad("Body"));

    let options = ConvertOptions {
        output_dir: Some(out.clone()),
        file_stem: "Exploded".to_string(),
        pretty: false,
    };
    let report = convert_paths(&[&path, &path], &options);

    assert_eq!(
        report.converted,
        vec![out.join("Exploded.json"), out.join("Exploded 1.json")]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_selection_does_nothing() {
    let report = convert_paths::<PathBuf>(&[], &ConvertOptions::default());
    assert!(report.is_success());
    assert!(report.converted.is_empty());
}
