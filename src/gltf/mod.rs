//! Scene document decoder.
//!
//! Decodes a parsed metadata [`Document`](schema::Document) plus its
//! companion binary buffer into a flat [`ParsedScene`]: one list each of
//! meshes, nodes, and materials, with every cross-reference left as a raw
//! index for the consumer to resolve.
//!
//! # Index graph, not a tree
//!
//! The document is a set of parallel arrays where entities reference each
//! other by index. The decoder keeps that shape rather than building an
//! owned node tree, because the source format permits shared references (one
//! mesh used by many nodes) and pathological child cycles. Index lookups the
//! decoder itself performs are bounds-checked and fail with
//! [`GltfError::DanglingReference`]; indices it merely carries through (a
//! primitive's material index) are passed along unvalidated.
//!
//! # Example
//!
//! ```
//! use gltf_scene::gltf::{decode_scene, schema::Document};
//!
//! let document = Document::default();
//! let scene = decode_scene(Some(&document), Some(&[])).unwrap();
//! assert!(scene.meshes.is_empty());
//! ```

pub mod accessor;
mod error;
mod material;
mod mesh;
mod node;
pub mod schema;
#[cfg(test)]
mod tests;
pub mod types;

pub use accessor::{read_accessor, AccessorData, ComponentType, ElementType};
pub use error::GltfError;
pub use types::{
    ParsedMaterial, ParsedMesh, ParsedNode, ParsedScene, TextureSlot, TextureSlots,
};

/// Decode one document and its binary buffer into a [`ParsedScene`].
///
/// Both inputs are required even when the document carries no geometry; a
/// caller with no binary payload passes an explicit empty buffer. The decode
/// is a single synchronous pass with no I/O and no retained references into
/// the inputs.
///
/// # Errors
///
/// [`GltfError::MissingDocument`] when `document` is `None` (checked before
/// the buffer), [`GltfError::MissingBinaryBuffer`] when `buffer` is `None`,
/// and any extraction error from the individual extractors. All errors abort
/// the whole decode; there is no partial result.
pub fn decode_scene(
    document: Option<&schema::Document>,
    buffer: Option<&[u8]>,
) -> Result<ParsedScene, GltfError> {
    let document = document.ok_or(GltfError::MissingDocument)?;
    let buffer = buffer.ok_or(GltfError::MissingBinaryBuffer)?;

    // The extractors are independent; any order works.
    let materials = material::extract_materials(document)?;
    let meshes = mesh::extract_meshes(document, buffer)?;
    let nodes = node::extract_nodes(document)?;

    log::debug!(
        "decoded scene: {} nodes, {} meshes, {} materials",
        nodes.len(),
        meshes.len(),
        materials.len()
    );

    Ok(ParsedScene {
        nodes,
        meshes,
        materials,
    })
}
