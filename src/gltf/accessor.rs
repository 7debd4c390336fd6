//! Typed accessor resolution over the shared binary buffer.
//!
//! An accessor names a buffer view, an element shape, a component type, and
//! a count; resolving it means computing the exact byte range those imply
//! and decoding that range into a typed array. All byte math is checked
//! before any read so a malformed document cannot cause an out-of-bounds
//! access.

use super::error::GltfError;
use super::schema::Document;

/// Element shape of an accessor.
///
/// Each shape implies a fixed number of components per logical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Single component.
    Scalar,
    /// 2-component vector.
    Vec2,
    /// 3-component vector.
    Vec3,
    /// 4-component vector.
    Vec4,
    /// 2x2 matrix.
    Mat2,
    /// 3x3 matrix.
    Mat3,
    /// 4x4 matrix.
    Mat4,
}

impl ElementType {
    /// Parse a shape identifier string as it appears in the document.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "SCALAR" => Some(Self::Scalar),
            "VEC2" => Some(Self::Vec2),
            "VEC3" => Some(Self::Vec3),
            "VEC4" => Some(Self::Vec4),
            "MAT2" => Some(Self::Mat2),
            "MAT3" => Some(Self::Mat3),
            "MAT4" => Some(Self::Mat4),
            _ => None,
        }
    }

    /// Number of components per logical element.
    pub fn multiplier(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
            Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }
}

/// Numeric component kind of an accessor.
///
/// The closed set of kinds the format supports; anything else fails with
/// [`GltfError::UnsupportedComponentType`] at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// 32-bit float.
    F32,
}

impl ComponentType {
    /// Parse a raw component type code from the document.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            5120 => Some(Self::I8),
            5121 => Some(Self::U8),
            5122 => Some(Self::I16),
            5123 => Some(Self::U16),
            5125 => Some(Self::U32),
            5126 => Some(Self::F32),
            _ => None,
        }
    }

    /// The document code for this kind.
    pub fn code(self) -> u32 {
        match self {
            Self::I8 => 5120,
            Self::U8 => 5121,
            Self::I16 => 5122,
            Self::U16 => 5123,
            Self::U32 => 5125,
            Self::F32 => 5126,
        }
    }

    /// Byte width of one component.
    pub fn size(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::U32 | Self::F32 => 4,
        }
    }
}

/// Decoded accessor contents, one variant per supported component kind.
///
/// Components are decoded from the buffer's little-endian layout into owned
/// arrays, so the data is alignment- and endianness-safe to hand to any
/// consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessorData {
    /// Signed 8-bit components.
    I8(Vec<i8>),
    /// Unsigned 8-bit components.
    U8(Vec<u8>),
    /// Signed 16-bit components.
    I16(Vec<i16>),
    /// Unsigned 16-bit components.
    U16(Vec<u16>),
    /// Unsigned 32-bit components.
    U32(Vec<u32>),
    /// 32-bit float components.
    F32(Vec<f32>),
}

impl AccessorData {
    /// Number of components (count × shape multiplier).
    pub fn len(&self) -> usize {
        match self {
            Self::I8(v) => v.len(),
            Self::U8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
            Self::F32(v) => v.len(),
        }
    }

    /// Whether the accessor decoded to zero components.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The component kind this data was decoded as.
    pub fn component_type(&self) -> ComponentType {
        match self {
            Self::I8(_) => ComponentType::I8,
            Self::U8(_) => ComponentType::U8,
            Self::I16(_) => ComponentType::I16,
            Self::U16(_) => ComponentType::U16,
            Self::U32(_) => ComponentType::U32,
            Self::F32(_) => ComponentType::F32,
        }
    }

    /// Borrow as f32 components, if that is what was decoded.
    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::F32(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as u16 components, if that is what was decoded.
    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            Self::U16(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as u32 components, if that is what was decoded.
    pub fn as_u32(&self) -> Option<&[u32]> {
        match self {
            Self::U32(v) => Some(v),
            _ => None,
        }
    }
}

/// Resolve one accessor into typed data.
///
/// Pure function of its inputs: looks up the accessor and its buffer view
/// (both bounds-checked), computes the absolute byte range, verifies it fits
/// in `buffer`, and decodes the components.
///
/// # Errors
///
/// - [`GltfError::DanglingReference`] — accessor or buffer-view index out of
///   range.
/// - [`GltfError::InvalidShapeIdentifier`] — unknown element shape.
/// - [`GltfError::UnsupportedComponentType`] — unknown component code.
/// - [`GltfError::BufferOverrun`] — the byte range does not fit in `buffer`.
///   A range ending exactly at `buffer.len()` succeeds.
pub fn read_accessor(
    document: &Document,
    accessor_index: usize,
    buffer: &[u8],
) -> Result<AccessorData, GltfError> {
    let accessor =
        document
            .accessors
            .get(accessor_index)
            .ok_or(GltfError::DanglingReference {
                kind: "accessor",
                index: accessor_index,
                len: document.accessors.len(),
            })?;
    let view =
        document
            .buffer_views
            .get(accessor.buffer_view)
            .ok_or(GltfError::DanglingReference {
                kind: "buffer view",
                index: accessor.buffer_view,
                len: document.buffer_views.len(),
            })?;

    let element_type = ElementType::from_identifier(&accessor.element_type)
        .ok_or_else(|| GltfError::InvalidShapeIdentifier(accessor.element_type.clone()))?;
    let component = ComponentType::from_code(accessor.component_type)
        .ok_or(GltfError::UnsupportedComponentType(accessor.component_type))?;

    // Saturating math keeps pathological offsets and counts in the error
    // path instead of wrapping around.
    let offset = view.byte_offset.saturating_add(accessor.byte_offset);
    let component_count = accessor.count.saturating_mul(element_type.multiplier());
    let byte_len = component_count.saturating_mul(component.size());
    let end = offset.saturating_add(byte_len);
    if end > buffer.len() {
        return Err(GltfError::BufferOverrun {
            offset,
            len: byte_len,
            buffer_len: buffer.len(),
        });
    }

    Ok(decode_components(&buffer[offset..end], component))
}

/// Decode a byte range (already length-validated) as little-endian components.
fn decode_components(bytes: &[u8], component: ComponentType) -> AccessorData {
    match component {
        ComponentType::I8 => AccessorData::I8(bytes.iter().map(|&b| b as i8).collect()),
        ComponentType::U8 => AccessorData::U8(bytes.to_vec()),
        ComponentType::I16 => AccessorData::I16(
            bytes
                .chunks_exact(2)
                .map(|c| i16::from_le_bytes([c[0], c[1]]))
                .collect(),
        ),
        ComponentType::U16 => AccessorData::U16(
            bytes
                .chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect(),
        ),
        ComponentType::U32 => AccessorData::U32(
            bytes
                .chunks_exact(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        ComponentType::F32 => AccessorData::F32(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
    }
}
