//! Material data types.

/// Alpha rendering mode.
///
/// Affects pipeline state (blend configuration), not shader bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlphaMode {
    /// Fully opaque (alpha ignored).
    #[default]
    Opaque,
    /// Alpha masking with a cutoff threshold.
    Mask,
    /// Full alpha blending.
    Blend,
}

impl AlphaMode {
    /// Parse an alpha mode identifier as it appears in scene documents.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "OPAQUE" => Some(Self::Opaque),
            "MASK" => Some(Self::Mask),
            "BLEND" => Some(Self::Blend),
            _ => None,
        }
    }

    /// The document identifier for this mode.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Opaque => "OPAQUE",
            Self::Mask => "MASK",
            Self::Blend => "BLEND",
        }
    }
}
