//! Mesh extraction: flattening document meshes into per-primitive records.

use super::accessor::read_accessor;
use super::error::GltfError;
use super::schema::Document;
use super::types::ParsedMesh;

/// Fallback name for meshes without one.
const UNNAMED_MESH: &str = "Unnamed Mesh";

/// Extract every primitive of every mesh as a flat [`ParsedMesh`] list.
///
/// POSITION is the one required attribute; NORMAL, TEXCOORD_0, and the index
/// accessor are resolved only when the primitive declares them. Unindexed
/// primitives are valid and yield `indices: None`.
pub(super) fn extract_meshes(
    document: &Document,
    buffer: &[u8],
) -> Result<Vec<ParsedMesh>, GltfError> {
    let mut parsed = Vec::new();

    for (mesh_index, mesh) in document.meshes.iter().enumerate() {
        for (primitive_index, primitive) in mesh.primitives.iter().enumerate() {
            let position =
                primitive
                    .attributes
                    .position
                    .ok_or(GltfError::MissingRequiredAttribute {
                        mesh: mesh_index,
                        primitive: primitive_index,
                    })?;

            let positions = read_accessor(document, position, buffer)?;
            let normals = primitive
                .attributes
                .normal
                .map(|index| read_accessor(document, index, buffer))
                .transpose()?;
            let uvs = primitive
                .attributes
                .tex_coord_0
                .map(|index| read_accessor(document, index, buffer))
                .transpose()?;
            let indices = primitive
                .indices
                .map(|index| read_accessor(document, index, buffer))
                .transpose()?;

            parsed.push(ParsedMesh {
                // Primitives of one mesh share the mesh-level name.
                name: mesh
                    .name
                    .clone()
                    .unwrap_or_else(|| UNNAMED_MESH.to_string()),
                positions,
                normals,
                uvs,
                indices,
                // Carried through unvalidated; catching dangling material
                // indices is the consumer's responsibility.
                material: primitive.material,
            });
        }
    }

    Ok(parsed)
}
