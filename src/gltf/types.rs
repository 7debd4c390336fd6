//! Parsed output types produced by scene decoding.

use crate::material::AlphaMode;
use crate::sampler::SamplerDesc;
use crate::scene::NodeTransform;

use super::accessor::AccessorData;

/// The complete result of decoding one document.
///
/// All cross-references between the three lists are raw indices for the
/// consumer to resolve: a [`ParsedMesh::material`] indexes into `materials`,
/// [`ParsedNode::children`] index back into `nodes`, and
/// [`ParsedNode::mesh`] refers to the source document's mesh array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedScene {
    /// Normalized nodes, positionally matching the document's node array.
    pub nodes: Vec<ParsedNode>,
    /// Flattened meshes, one record per primitive.
    pub meshes: Vec<ParsedMesh>,
    /// Normalized materials, positionally matching the document's material
    /// array.
    pub materials: Vec<ParsedMaterial>,
}

/// One decoded drawable: a single primitive's attribute data.
///
/// A multi-primitive mesh decodes to multiple records sharing one name; the
/// primitive dimension is deliberately flattened away.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMesh {
    /// Source mesh name, `"Unnamed Mesh"` when absent.
    pub name: String,
    /// Vertex positions.
    pub positions: AccessorData,
    /// Vertex normals, if the primitive declares them.
    pub normals: Option<AccessorData>,
    /// First UV set, if the primitive declares one.
    pub uvs: Option<AccessorData>,
    /// Index data. `None` for unindexed primitives.
    pub indices: Option<AccessorData>,
    /// Material index, carried through unvalidated — a dangling index is the
    /// consumer's responsibility to catch.
    pub material: Option<usize>,
}

impl ParsedMesh {
    /// Number of vertices, assuming 3-component float positions.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Positions reinterpreted as `[x, y, z]` triples.
    ///
    /// `None` when positions are not f32 data or their component count is
    /// not a multiple of three.
    pub fn positions_vec3(&self) -> Option<&[[f32; 3]]> {
        bytemuck::try_cast_slice(self.positions.as_f32()?).ok()
    }
}

/// One decoded transform node.
///
/// Output index *i* always corresponds to document node index *i*, which is
/// what makes the raw `children` indices resolvable.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNode {
    /// Node name, `Node_<index>` when absent.
    pub name: String,
    /// Index into the *document's* mesh array, unresolved. Because
    /// [`ParsedScene::meshes`] is flattened per primitive, multi-primitive
    /// documents need the consumer to map this index onto the flat list.
    pub mesh: Option<usize>,
    /// Local TRS transform, identity-defaulted.
    pub transform: NodeTransform,
    /// Child node indices, unresolved. The node graph may share children or
    /// even contain cycles; walking it is left to the consumer.
    pub children: Option<Vec<usize>>,
}

/// One decoded PBR material.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMaterial {
    /// Material name, `Unnamed Material<index>` when absent.
    pub name: String,
    /// Base color factor (linear RGBA), opaque white when absent.
    pub base_color: [f32; 4],
    /// Emissive factor (linear RGB), black when absent.
    pub emissive: [f32; 3],
    /// Metallic factor, 1.0 when absent.
    pub metallic: f32,
    /// Roughness factor, 1.0 when absent.
    pub roughness: f32,
    /// Alpha rendering mode, opaque when absent.
    pub alpha_mode: AlphaMode,
    /// Resolved texture slots.
    pub textures: TextureSlots,
}

/// The five optional texture slots of a PBR material.
///
/// A `None` slot means the material does not reference that texture at all —
/// distinct from a present slot whose sampler is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureSlots {
    /// Base color texture.
    pub base_color: Option<TextureSlot>,
    /// Normal map texture.
    pub normal: Option<TextureSlot>,
    /// Metallic-roughness texture.
    pub metallic_roughness: Option<TextureSlot>,
    /// Emissive texture.
    pub emissive: Option<TextureSlot>,
    /// Occlusion texture.
    pub occlusion: Option<TextureSlot>,
}

impl TextureSlots {
    /// Whether no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.base_color.is_none()
            && self.normal.is_none()
            && self.metallic_roughness.is_none()
            && self.emissive.is_none()
            && self.occlusion.is_none()
    }
}

/// One resolved texture slot: the image URI plus sampler configuration.
///
/// No image bytes are loaded; fetching the URI is the caller's business.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureSlot {
    /// Image URI, if the texture's image declares one.
    pub uri: Option<String>,
    /// Sampler configuration, if the texture declares a sampler.
    pub sampler: Option<SamplerDesc>,
}
