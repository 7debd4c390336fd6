//! Sampler descriptor types and filter/address mode definitions.

/// Texture filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Nearest neighbor filtering.
    #[default]
    Nearest,
    /// Linear filtering.
    Linear,
}

/// Texture address mode (wrapping behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Clamp to edge.
    #[default]
    ClampToEdge,
    /// Repeat.
    Repeat,
    /// Mirrored repeat.
    MirrorRepeat,
}

/// Sampler configuration resolved from a scene document.
///
/// Describes how a texture is sampled: filtering and per-axis address modes.
/// This is a format-agnostic descriptor separate from any GPU resource.
/// Filters are `None` when the document leaves them unspecified, letting the
/// consumer pick its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerDesc {
    /// Magnification filter.
    pub mag_filter: Option<FilterMode>,
    /// Minification filter.
    pub min_filter: Option<FilterMode>,
    /// Address mode for the U coordinate.
    pub wrap_s: AddressMode,
    /// Address mode for the V coordinate.
    pub wrap_t: AddressMode,
}

impl Default for SamplerDesc {
    fn default() -> Self {
        Self {
            mag_filter: None,
            min_filter: None,
            // Documents default wrapping to repeat, not clamp.
            wrap_s: AddressMode::Repeat,
            wrap_t: AddressMode::Repeat,
        }
    }
}

impl SamplerDesc {
    /// Create a linear filtering descriptor.
    pub fn linear() -> Self {
        Self {
            mag_filter: Some(FilterMode::Linear),
            min_filter: Some(FilterMode::Linear),
            ..Default::default()
        }
    }

    /// Create a nearest neighbor filtering descriptor.
    pub fn nearest() -> Self {
        Self {
            mag_filter: Some(FilterMode::Nearest),
            min_filter: Some(FilterMode::Nearest),
            ..Default::default()
        }
    }

    /// Set the address mode for both coordinates.
    #[must_use]
    pub fn with_wrap(mut self, mode: AddressMode) -> Self {
        self.wrap_s = mode;
        self.wrap_t = mode;
        self
    }
}
