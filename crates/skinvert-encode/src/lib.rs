//! Explode skinned triangle meshes into per-triangle vertices.
//!
//! Every source triangle gets three vertices of its own, and each vertex is
//! augmented with two extra texture channels describing the triangle's shape
//! in that vertex's tangent frame:
//!
//! - `uv1`: offset to the triangle centroid
//! - `uv2`: offsets to the next and following corner in winding order
//!
//! # Design principles
//!
//! - **Pure**: no I/O, no logging, the source buffers are never mutated
//! - **Borrowed input**: callers keep ownership of their mesh data
//! - **User-controlled parallelism**: [`explode`] is single-threaded; the
//!   `parallel` feature adds `explode_par` on the rayon pool
//!
//! # Key functions
//!
//! - [`explode`]: the transform itself
//! - [`try_explode`]: validate buffer alignment first
//! - [`centroid_offsets`] / [`neighbor_offsets`]: per-triangle encoding

mod error;

pub mod explode;
pub mod frame;
pub mod mesh;

pub use error::{Attribute, EncodeError, EncodeResult};
#[cfg(feature = "parallel")]
pub use explode::explode_par;
pub use explode::{centroid, centroid_offsets, explode, neighbor_offsets, try_explode};
pub use frame::TangentFrame;
pub use mesh::{BoneWeight, ExplodedMesh, SourceMesh};
