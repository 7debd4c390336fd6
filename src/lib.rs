//! # gltf-scene
//!
//! CPU-side decoding of glTF scene documents into flat, index-referencing
//! lists of meshes, nodes, and materials.
//!
//! The crate consumes a parsed metadata [`Document`](gltf::schema::Document)
//! plus the already-loaded binary buffer, and produces a
//! [`ParsedScene`](gltf::ParsedScene). Fetching the document, resolving URIs,
//! and uploading the result to a GPU are the caller's business.

pub mod gltf;
pub mod material;
pub mod sampler;
pub mod scene;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
