//! Node extraction: normalizing document nodes 1:1 by index.

use crate::scene::NodeTransform;

use super::error::GltfError;
use super::schema::Document;
use super::types::ParsedNode;

/// Extract the node list, positionally matching the document's node array.
///
/// The 1:1 index correspondence is an invariant consumers rely on when
/// resolving `children` references, so nodes are never filtered or
/// reordered. Transforms must be TRS; matrix-form nodes are rejected rather
/// than silently mishandled.
pub(super) fn extract_nodes(document: &Document) -> Result<Vec<ParsedNode>, GltfError> {
    document
        .nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            if node.matrix.is_some() {
                return Err(GltfError::UnsupportedNodeTransform { node: index });
            }

            let identity = NodeTransform::IDENTITY;
            Ok(ParsedNode {
                name: node
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Node_{index}")),
                mesh: node.mesh,
                transform: NodeTransform {
                    // Present fields are copied verbatim; quaternions are
                    // not renormalized.
                    translation: node.translation.unwrap_or(identity.translation),
                    rotation: node.rotation.unwrap_or(identity.rotation),
                    scale: node.scale.unwrap_or(identity.scale),
                },
                children: node.children.clone(),
            })
        })
        .collect()
}
