//! Material extraction and texture/sampler reference resolution.

use crate::material::AlphaMode;
use crate::sampler::{AddressMode, FilterMode, SamplerDesc};

use super::error::GltfError;
use super::schema::{self, Document};
use super::types::{ParsedMaterial, TextureSlot, TextureSlots};

// PBR factor defaults applied when the owning field or sub-object is absent.
const DEFAULT_BASE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const DEFAULT_EMISSIVE: [f32; 3] = [0.0, 0.0, 0.0];
const DEFAULT_METALLIC: f32 = 1.0;
const DEFAULT_ROUGHNESS: f32 = 1.0;

// GL filter and wrap codes as they appear in documents.
const GL_NEAREST: u32 = 9728;
const GL_LINEAR: u32 = 9729;
const GL_NEAREST_MIPMAP_NEAREST: u32 = 9984;
const GL_LINEAR_MIPMAP_NEAREST: u32 = 9985;
const GL_NEAREST_MIPMAP_LINEAR: u32 = 9986;
const GL_LINEAR_MIPMAP_LINEAR: u32 = 9987;
const GL_CLAMP_TO_EDGE: u32 = 33071;
const GL_REPEAT: u32 = 10497;
const GL_MIRRORED_REPEAT: u32 = 33648;

/// Extract the material list, positionally matching the document's material
/// array.
pub(super) fn extract_materials(document: &Document) -> Result<Vec<ParsedMaterial>, GltfError> {
    document
        .materials
        .iter()
        .enumerate()
        .map(|(index, material)| {
            let pbr = material.pbr_metallic_roughness.as_ref();

            let textures = TextureSlots {
                base_color: resolve_slot(document, pbr.and_then(|p| p.base_color_texture.as_ref()))?,
                normal: resolve_slot(document, material.normal_texture.as_ref())?,
                metallic_roughness: resolve_slot(
                    document,
                    pbr.and_then(|p| p.metallic_roughness_texture.as_ref()),
                )?,
                emissive: resolve_slot(document, material.emissive_texture.as_ref())?,
                occlusion: resolve_slot(document, material.occlusion_texture.as_ref())?,
            };

            Ok(ParsedMaterial {
                name: material
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Unnamed Material{index}")),
                base_color: pbr
                    .and_then(|p| p.base_color_factor)
                    .unwrap_or(DEFAULT_BASE_COLOR),
                emissive: material.emissive_factor.unwrap_or(DEFAULT_EMISSIVE),
                metallic: pbr.and_then(|p| p.metallic_factor).unwrap_or(DEFAULT_METALLIC),
                roughness: pbr
                    .and_then(|p| p.roughness_factor)
                    .unwrap_or(DEFAULT_ROUGHNESS),
                alpha_mode: parse_alpha_mode(material.alpha_mode.as_deref()),
                textures,
            })
        })
        .collect()
}

/// Parse the alpha mode identifier, defaulting to opaque.
fn parse_alpha_mode(identifier: Option<&str>) -> AlphaMode {
    let Some(identifier) = identifier else {
        return AlphaMode::Opaque;
    };
    match AlphaMode::from_identifier(identifier) {
        Some(mode) => mode,
        None => {
            log::warn!("unknown alpha mode {identifier:?}, treating as OPAQUE");
            AlphaMode::Opaque
        }
    }
}

/// Resolve one optional texture slot.
///
/// Follows texture → image → uri and texture → sampler → descriptor. An
/// absent reference yields `None` for the whole slot; a texture without a
/// sampler yields a slot whose `sampler` is `None` — the two are distinct.
fn resolve_slot(
    document: &Document,
    reference: Option<&schema::TextureRef>,
) -> Result<Option<TextureSlot>, GltfError> {
    let Some(reference) = reference else {
        return Ok(None);
    };

    let texture = document
        .textures
        .get(reference.index)
        .ok_or(GltfError::DanglingReference {
            kind: "texture",
            index: reference.index,
            len: document.textures.len(),
        })?;

    let uri = match texture.source {
        Some(source) => document
            .images
            .get(source)
            .ok_or(GltfError::DanglingReference {
                kind: "image",
                index: source,
                len: document.images.len(),
            })?
            .uri
            .clone(),
        None => None,
    };

    let sampler = match texture.sampler {
        Some(index) => {
            let raw = document
                .samplers
                .get(index)
                .ok_or(GltfError::DanglingReference {
                    kind: "sampler",
                    index,
                    len: document.samplers.len(),
                })?;
            Some(map_sampler(raw))
        }
        None => None,
    };

    Ok(Some(TextureSlot { uri, sampler }))
}

/// Normalize a raw document sampler into a [`SamplerDesc`].
fn map_sampler(sampler: &schema::Sampler) -> SamplerDesc {
    SamplerDesc {
        mag_filter: sampler.mag_filter.and_then(map_filter),
        min_filter: sampler.min_filter.and_then(map_filter),
        wrap_s: sampler.wrap_s.map_or(AddressMode::Repeat, map_wrap),
        wrap_t: sampler.wrap_t.map_or(AddressMode::Repeat, map_wrap),
    }
}

/// Map a GL filter code, collapsing mipmap variants to their base filter.
fn map_filter(code: u32) -> Option<FilterMode> {
    match code {
        GL_NEAREST | GL_NEAREST_MIPMAP_NEAREST | GL_NEAREST_MIPMAP_LINEAR => {
            Some(FilterMode::Nearest)
        }
        GL_LINEAR | GL_LINEAR_MIPMAP_NEAREST | GL_LINEAR_MIPMAP_LINEAR => Some(FilterMode::Linear),
        other => {
            log::warn!("unknown filter code {other}, leaving filter unset");
            None
        }
    }
}

/// Map a GL wrap code.
fn map_wrap(code: u32) -> AddressMode {
    match code {
        GL_CLAMP_TO_EDGE => AddressMode::ClampToEdge,
        GL_REPEAT => AddressMode::Repeat,
        GL_MIRRORED_REPEAT => AddressMode::MirrorRepeat,
        other => {
            log::warn!("unknown wrap code {other}, treating as REPEAT");
            AddressMode::Repeat
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_codes_collapse_mipmap_variants() {
        for code in [GL_NEAREST, GL_NEAREST_MIPMAP_NEAREST, GL_NEAREST_MIPMAP_LINEAR] {
            assert_eq!(map_filter(code), Some(FilterMode::Nearest));
        }
        for code in [GL_LINEAR, GL_LINEAR_MIPMAP_NEAREST, GL_LINEAR_MIPMAP_LINEAR] {
            assert_eq!(map_filter(code), Some(FilterMode::Linear));
        }
        assert_eq!(map_filter(0), None);
    }

    #[test]
    fn wrap_codes() {
        assert_eq!(map_wrap(GL_CLAMP_TO_EDGE), AddressMode::ClampToEdge);
        assert_eq!(map_wrap(GL_REPEAT), AddressMode::Repeat);
        assert_eq!(map_wrap(GL_MIRRORED_REPEAT), AddressMode::MirrorRepeat);
        assert_eq!(map_wrap(12345), AddressMode::Repeat);
    }

    #[test]
    fn unspecified_wrap_defaults_to_repeat() {
        let desc = map_sampler(&schema::Sampler {
            mag_filter: Some(GL_LINEAR),
            min_filter: None,
            wrap_s: None,
            wrap_t: Some(GL_CLAMP_TO_EDGE),
        });
        assert_eq!(desc.mag_filter, Some(FilterMode::Linear));
        assert_eq!(desc.min_filter, None);
        assert_eq!(desc.wrap_s, AddressMode::Repeat);
        assert_eq!(desc.wrap_t, AddressMode::ClampToEdge);
    }
}
