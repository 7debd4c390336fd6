//! Error types for scene decoding.

/// Errors that can occur while decoding a scene document.
///
/// All variants are fail-fast: any of them aborts the whole decode, there is
/// no partial-result mode.
#[derive(Debug)]
pub enum GltfError {
    /// No metadata document was supplied.
    MissingDocument,
    /// No binary buffer was supplied.
    MissingBinaryBuffer,
    /// An accessor declares an unknown element shape identifier.
    InvalidShapeIdentifier(String),
    /// An accessor declares a component type code outside the supported set.
    UnsupportedComponentType(u32),
    /// An accessor's byte range extends past the end of the binary buffer.
    BufferOverrun {
        /// Absolute byte offset of the range.
        offset: usize,
        /// Byte length of the range.
        len: usize,
        /// Total length of the binary buffer.
        buffer_len: usize,
    },
    /// A primitive has no POSITION attribute.
    MissingRequiredAttribute {
        /// Mesh index in the document.
        mesh: usize,
        /// Primitive index within the mesh.
        primitive: usize,
    },
    /// A node stores its transform as a 4x4 matrix instead of TRS.
    UnsupportedNodeTransform {
        /// Node index in the document.
        node: usize,
    },
    /// An index reference points past the end of its target array.
    DanglingReference {
        /// Which document array the reference targets.
        kind: &'static str,
        /// The out-of-range index.
        index: usize,
        /// Length of the target array.
        len: usize,
    },
}

impl std::fmt::Display for GltfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDocument => write!(f, "no metadata document supplied"),
            Self::MissingBinaryBuffer => write!(f, "no binary buffer supplied"),
            Self::InvalidShapeIdentifier(identifier) => {
                write!(f, "invalid element shape identifier: {identifier:?}")
            }
            Self::UnsupportedComponentType(code) => {
                write!(f, "unsupported component type code: {code}")
            }
            Self::BufferOverrun {
                offset,
                len,
                buffer_len,
            } => {
                write!(
                    f,
                    "accessor range {offset}..{} overruns buffer of {buffer_len} bytes",
                    offset.saturating_add(*len)
                )
            }
            Self::MissingRequiredAttribute { mesh, primitive } => {
                write!(
                    f,
                    "mesh {mesh} primitive {primitive} has no POSITION attribute"
                )
            }
            Self::UnsupportedNodeTransform { node } => {
                write!(f, "node {node} uses a matrix transform, expected TRS")
            }
            Self::DanglingReference { kind, index, len } => {
                write!(f, "{kind} index {index} out of range (array has {len})")
            }
        }
    }
}

impl std::error::Error for GltfError {}
