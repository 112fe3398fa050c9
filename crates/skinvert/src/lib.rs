//! Convert skinned mesh assets into exploded, offset-encoded meshes.
//!
//! This crate wraps [`skinvert_encode`] with everything around the transform:
//! JSON mesh documents, the skinned-mesh precondition and a batch driver that
//! writes converted assets under unique names.
//!
//! # Example
//!
//! ```no_run
//! use skinvert::{ConvertOptions, convert_paths};
//!
//! let report = convert_paths(&["assets/Body.json"], &ConvertOptions::default());
//! for failure in &report.failures {
//!     eprintln!("{}: {}", failure.path.display(), failure.error);
//! }
//! ```

mod error;

pub mod asset;
pub mod convert;

pub use asset::{MeshAsset, MeshSummary, converted_name};
pub use convert::{
    ASSET_EXTENSION, BatchFailure, BatchReport, ConvertOptions, DEFAULT_FILE_STEM, check_skinned,
    convert_asset, convert_file, convert_paths, unique_destination,
};
pub use error::{Error, Result};

// Re-export the transform crate for callers that work on raw buffers.
pub use skinvert_encode;
