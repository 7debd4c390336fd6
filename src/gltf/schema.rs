//! Raw scene document schema.
//!
//! A faithful mirror of the metadata document as the external loader hands
//! it over: parallel entity arrays where every cross-reference is a
//! zero-based index into one of the other arrays. Nothing here is validated
//! beyond what `serde` needs to deserialize it — the decoder owns validation
//! so that malformed values surface as [`GltfError`](super::GltfError)
//! kinds rather than deserialization failures. In particular the accessor
//! keeps its *raw* shape identifier string and component type code.

use serde::Deserialize;

/// A complete metadata document.
///
/// All arrays default to empty so sparse documents deserialize cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document-level metadata.
    #[serde(default)]
    pub asset: Option<Asset>,
    /// Buffer declarations. The decoder itself never reads these: the caller
    /// resolves them into the single binary blob up front.
    #[serde(default)]
    pub buffers: Vec<Buffer>,
    /// Byte sub-ranges of the binary blob.
    #[serde(default)]
    pub buffer_views: Vec<BufferView>,
    /// Typed array slice descriptions over buffer views.
    #[serde(default)]
    pub accessors: Vec<Accessor>,
    /// Meshes, each a list of drawable primitives.
    #[serde(default)]
    pub meshes: Vec<Mesh>,
    /// Transform nodes.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// PBR materials.
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Textures pairing an image with an optional sampler.
    #[serde(default)]
    pub textures: Vec<Texture>,
    /// Image references (URIs — no pixel data).
    #[serde(default)]
    pub images: Vec<Image>,
    /// Sampler configurations with raw GL codes.
    #[serde(default)]
    pub samplers: Vec<Sampler>,
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Format version.
    pub version: String,
    /// Tool that produced the document.
    #[serde(default)]
    pub generator: Option<String>,
}

/// A buffer declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    /// Where the buffer's bytes live. Resolved externally.
    #[serde(default)]
    pub uri: Option<String>,
    /// Total byte length.
    pub byte_length: usize,
}

/// A byte sub-range of the binary blob.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    /// Index into [`Document::buffers`].
    pub buffer: usize,
    /// Byte offset of this view within the buffer.
    #[serde(default)]
    pub byte_offset: usize,
    /// Byte length of this view.
    pub byte_length: usize,
    /// GL binding target hint, unused by the decoder.
    #[serde(default)]
    pub target: Option<u32>,
}

/// Describes one logical typed array slice over a buffer view.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// Index into [`Document::buffer_views`].
    pub buffer_view: usize,
    /// Additional byte offset within the view.
    #[serde(default)]
    pub byte_offset: usize,
    /// Raw numeric component type code (e.g. 5126 for f32).
    pub component_type: u32,
    /// Number of logical elements.
    pub count: usize,
    /// Raw element shape identifier (`"SCALAR"` … `"MAT4"`).
    #[serde(rename = "type")]
    pub element_type: String,
}

/// The named attribute set of a primitive.
///
/// Values are accessor indices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attributes {
    /// Vertex positions. Required for decoding, but optional here so its
    /// absence surfaces as a decode error rather than a parse error.
    #[serde(rename = "POSITION")]
    pub position: Option<usize>,
    /// Vertex normals.
    #[serde(rename = "NORMAL")]
    pub normal: Option<usize>,
    /// First UV set.
    #[serde(rename = "TEXCOORD_0")]
    pub tex_coord_0: Option<usize>,
    /// First vertex color set. Carried for schema fidelity, not extracted.
    #[serde(rename = "COLOR_0")]
    pub color_0: Option<usize>,
}

/// One drawable sub-piece of a mesh.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Primitive {
    /// Attribute accessors.
    #[serde(default)]
    pub attributes: Attributes,
    /// Index accessor, if the primitive is indexed.
    #[serde(default)]
    pub indices: Option<usize>,
    /// Index into [`Document::materials`].
    #[serde(default)]
    pub material: Option<usize>,
}

/// A mesh: a named list of primitives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Mesh {
    /// Mesh name.
    #[serde(default)]
    pub name: Option<String>,
    /// Drawable primitives.
    #[serde(default)]
    pub primitives: Vec<Primitive>,
}

/// A transform node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    /// Node name.
    #[serde(default)]
    pub name: Option<String>,
    /// Index into [`Document::meshes`].
    #[serde(default)]
    pub mesh: Option<usize>,
    /// Translation [x, y, z].
    #[serde(default)]
    pub translation: Option<[f32; 3]>,
    /// Rotation quaternion [x, y, z, w].
    #[serde(default)]
    pub rotation: Option<[f32; 4]>,
    /// Scale [x, y, z].
    #[serde(default)]
    pub scale: Option<[f32; 3]>,
    /// Child node indices.
    #[serde(default)]
    pub children: Option<Vec<usize>>,
    /// Column-major 4x4 matrix transform. Not supported by the decoder;
    /// carried so matrix-form nodes can be rejected explicitly.
    #[serde(default)]
    pub matrix: Option<[f32; 16]>,
}

/// Reference from a material slot to a texture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureRef {
    /// Index into [`Document::textures`].
    pub index: usize,
    /// UV set index.
    #[serde(default)]
    pub tex_coord: u32,
}

/// PBR metallic-roughness sub-object of a material.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    /// Base color factor (linear RGBA).
    #[serde(default)]
    pub base_color_factor: Option<[f32; 4]>,
    /// Base color texture.
    #[serde(default)]
    pub base_color_texture: Option<TextureRef>,
    /// Metallic factor.
    #[serde(default)]
    pub metallic_factor: Option<f32>,
    /// Roughness factor.
    #[serde(default)]
    pub roughness_factor: Option<f32>,
    /// Metallic-roughness texture (B=metallic, G=roughness).
    #[serde(default)]
    pub metallic_roughness_texture: Option<TextureRef>,
}

/// A material.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Material name.
    #[serde(default)]
    pub name: Option<String>,
    /// PBR metallic-roughness properties.
    #[serde(default)]
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
    /// Normal map texture.
    #[serde(default)]
    pub normal_texture: Option<TextureRef>,
    /// Occlusion texture.
    #[serde(default)]
    pub occlusion_texture: Option<TextureRef>,
    /// Emissive texture.
    #[serde(default)]
    pub emissive_texture: Option<TextureRef>,
    /// Emissive factor (linear RGB).
    #[serde(default)]
    pub emissive_factor: Option<[f32; 3]>,
    /// Alpha mode identifier (`"OPAQUE"`, `"MASK"`, `"BLEND"`).
    #[serde(default)]
    pub alpha_mode: Option<String>,
}

/// A texture: an image paired with an optional sampler.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Texture {
    /// Index into [`Document::images`].
    #[serde(default)]
    pub source: Option<usize>,
    /// Index into [`Document::samplers`].
    #[serde(default)]
    pub sampler: Option<usize>,
}

/// An image reference. Pixel data is never loaded here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image URI, relative to the document. Resolved externally.
    #[serde(default)]
    pub uri: Option<String>,
    /// MIME type hint.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Image name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A sampler configuration with raw GL codes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sampler {
    /// Magnification filter code.
    #[serde(default)]
    pub mag_filter: Option<u32>,
    /// Minification filter code.
    #[serde(default)]
    pub min_filter: Option<u32>,
    /// Wrap mode code for U.
    #[serde(default)]
    pub wrap_s: Option<u32>,
    /// Wrap mode code for V.
    #[serde(default)]
    pub wrap_t: Option<u32>,
}
