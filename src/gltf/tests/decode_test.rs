//! End-to-end decoding of synthetic documents.

use serde_json::json;

use crate::gltf::{decode_scene, schema::Document, GltfError};
use crate::material::AlphaMode;
use crate::sampler::{AddressMode, FilterMode};

use super::{document, f32_buffer, u16_buffer};

#[test]
fn missing_document_is_checked_first() {
    // Both inputs absent: the document guard must win.
    let err = decode_scene(None, None).unwrap_err();
    assert!(matches!(err, GltfError::MissingDocument));
}

#[test]
fn missing_buffer_fails() {
    let doc = Document::default();
    let err = decode_scene(Some(&doc), None).unwrap_err();
    assert!(matches!(err, GltfError::MissingBinaryBuffer));
}

#[test]
fn empty_document_decodes_to_empty_scene() {
    // Geometry-free documents still require an explicit (empty) buffer.
    let doc = Document::default();
    let scene = decode_scene(Some(&doc), Some(&[])).unwrap();
    assert!(scene.nodes.is_empty());
    assert!(scene.meshes.is_empty());
    assert!(scene.materials.is_empty());
}

/// A document with one triangle mesh: positions, normals, UVs, u16 indices.
fn triangle_document() -> Document {
    document(json!({
        "asset": { "version": "2.0", "generator": "test" },
        "buffers": [{ "byteLength": 102 }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0,  "byteLength": 36 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 36 },
            { "buffer": 0, "byteOffset": 72, "byteLength": 24 },
            { "buffer": 0, "byteOffset": 96, "byteLength": 6 },
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3" },
            { "bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC3" },
            { "bufferView": 2, "componentType": 5126, "count": 3, "type": "VEC2" },
            { "bufferView": 3, "componentType": 5123, "count": 3, "type": "SCALAR" },
        ],
        "meshes": [{
            "name": "Triangle",
            "primitives": [{
                "attributes": { "POSITION": 0, "NORMAL": 1, "TEXCOORD_0": 2 },
                "indices": 3,
                "material": 0,
            }],
        }],
        "materials": [{ "name": "Red" }],
    }))
}

fn triangle_buffer() -> Vec<u8> {
    let mut buffer = f32_buffer(&[
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, // positions
        0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, // normals
        0.0, 0.0, 1.0, 0.0, 0.0, 1.0, // uvs
    ]);
    buffer.extend(u16_buffer(&[0, 1, 2]));
    buffer
}

#[test]
fn triangle_decodes() {
    let doc = triangle_document();
    let buffer = triangle_buffer();

    let scene = decode_scene(Some(&doc), Some(&buffer)).unwrap();
    assert_eq!(scene.meshes.len(), 1);

    let mesh = &scene.meshes[0];
    assert_eq!(mesh.name, "Triangle");
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(
        mesh.positions_vec3().unwrap(),
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
    );
    assert_eq!(mesh.normals.as_ref().unwrap().len(), 9);
    assert_eq!(mesh.uvs.as_ref().unwrap().len(), 6);
    assert_eq!(mesh.indices.as_ref().unwrap().as_u16().unwrap(), &[0, 1, 2]);
    assert_eq!(mesh.material, Some(0));
}

#[test]
fn two_primitives_flatten_into_two_records() {
    let doc = document(json!({
        "buffers": [{ "byteLength": 72 }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0,  "byteLength": 36 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 36 },
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3" },
            { "bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC3" },
        ],
        "meshes": [{
            "name": "TwoParts",
            "primitives": [
                { "attributes": { "POSITION": 0 } },
                { "attributes": { "POSITION": 1 } },
            ],
        }],
    }));
    let buffer = f32_buffer(&[0.25; 18]);

    let scene = decode_scene(Some(&doc), Some(&buffer)).unwrap();
    assert_eq!(scene.meshes.len(), 2);
    assert_eq!(scene.meshes[0].name, "TwoParts");
    assert_eq!(scene.meshes[1].name, "TwoParts");
}

#[test]
fn unindexed_primitive_has_no_indices() {
    let doc = document(json!({
        "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3" },
        ],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
    }));
    let buffer = f32_buffer(&[0.0; 9]);

    let scene = decode_scene(Some(&doc), Some(&buffer)).unwrap();
    let mesh = &scene.meshes[0];
    assert_eq!(mesh.name, "Unnamed Mesh");
    assert!(mesh.indices.is_none());
    assert!(mesh.normals.is_none());
    assert!(mesh.uvs.is_none());
    assert!(mesh.material.is_none());
}

#[test]
fn missing_position_fails() {
    let doc = document(json!({
        "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3" },
        ],
        "meshes": [
            { "primitives": [{ "attributes": { "POSITION": 0 } }] },
            { "primitives": [
                { "attributes": { "POSITION": 0 } },
                { "attributes": { "NORMAL": 0 } },
            ] },
        ],
    }));
    let buffer = f32_buffer(&[0.0; 9]);

    let err = decode_scene(Some(&doc), Some(&buffer)).unwrap_err();
    match err {
        GltfError::MissingRequiredAttribute { mesh, primitive } => {
            assert_eq!(mesh, 1);
            assert_eq!(primitive, 1);
        }
        other => panic!("expected MissingRequiredAttribute, got {other:?}"),
    }
}

#[test]
fn dangling_material_index_passes_through() {
    // Primitive material indices are deliberately not validated.
    let doc = document(json!({
        "bufferViews": [{ "buffer": 0, "byteLength": 36 }],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3" },
        ],
        "meshes": [{
            "primitives": [{ "attributes": { "POSITION": 0 }, "material": 12 }],
        }],
    }));
    let buffer = f32_buffer(&[0.0; 9]);

    let scene = decode_scene(Some(&doc), Some(&buffer)).unwrap();
    assert_eq!(scene.meshes[0].material, Some(12));
    assert!(scene.materials.is_empty());
}

#[test]
fn empty_node_gets_all_defaults() {
    let doc = document(json!({ "nodes": [{}, {}] }));

    let scene = decode_scene(Some(&doc), Some(&[])).unwrap();
    assert_eq!(scene.nodes.len(), 2);

    let node = &scene.nodes[1];
    assert_eq!(node.name, "Node_1");
    assert_eq!(node.transform.translation, [0.0, 0.0, 0.0]);
    assert_eq!(node.transform.rotation, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(node.transform.scale, [1.0, 1.0, 1.0]);
    assert!(node.mesh.is_none());
    assert!(node.children.is_none());
}

#[test]
fn node_fields_copied_verbatim() {
    let doc = document(json!({
        "nodes": [{
            "name": "Pivot",
            "mesh": 4,
            "translation": [1.0, 2.0, 3.0],
            // Deliberately unnormalized; the decoder must not touch it.
            "rotation": [0.0, 2.0, 0.0, 2.0],
            "scale": [2.0, 2.0, 2.0],
            "children": [5, 6],
        }],
    }));

    let scene = decode_scene(Some(&doc), Some(&[])).unwrap();
    let node = &scene.nodes[0];
    assert_eq!(node.name, "Pivot");
    assert_eq!(node.mesh, Some(4));
    assert_eq!(node.transform.translation, [1.0, 2.0, 3.0]);
    assert_eq!(node.transform.rotation, [0.0, 2.0, 0.0, 2.0]);
    assert_eq!(node.transform.scale, [2.0, 2.0, 2.0]);
    assert_eq!(node.children.as_deref(), Some(&[5, 6][..]));
}

#[test]
fn matrix_node_is_rejected() {
    let doc = document(json!({
        "nodes": [
            {},
            { "matrix": [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ] },
        ],
    }));

    let err = decode_scene(Some(&doc), Some(&[])).unwrap_err();
    match err {
        GltfError::UnsupportedNodeTransform { node } => assert_eq!(node, 1),
        other => panic!("expected UnsupportedNodeTransform, got {other:?}"),
    }
}

#[test]
fn empty_material_gets_all_defaults() {
    let doc = document(json!({ "materials": [{}] }));

    let scene = decode_scene(Some(&doc), Some(&[])).unwrap();
    let material = &scene.materials[0];
    assert_eq!(material.name, "Unnamed Material0");
    assert_eq!(material.base_color, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(material.emissive, [0.0, 0.0, 0.0]);
    assert_eq!(material.metallic, 1.0);
    assert_eq!(material.roughness, 1.0);
    assert_eq!(material.alpha_mode, AlphaMode::Opaque);
    assert!(material.textures.is_empty());
}

#[test]
fn material_factors_and_alpha_mode() {
    let doc = document(json!({
        "materials": [{
            "name": "Glass",
            "alphaMode": "BLEND",
            "emissiveFactor": [0.1, 0.2, 0.3],
            "pbrMetallicRoughness": {
                "baseColorFactor": [0.5, 0.6, 0.7, 0.5],
                "metallicFactor": 0.0,
                "roughnessFactor": 0.25,
            },
        }],
    }));

    let scene = decode_scene(Some(&doc), Some(&[])).unwrap();
    let material = &scene.materials[0];
    assert_eq!(material.name, "Glass");
    assert_eq!(material.base_color, [0.5, 0.6, 0.7, 0.5]);
    assert_eq!(material.emissive, [0.1, 0.2, 0.3]);
    assert_eq!(material.metallic, 0.0);
    assert_eq!(material.roughness, 0.25);
    assert_eq!(material.alpha_mode, AlphaMode::Blend);
}

#[test]
fn texture_slots_preserve_three_valued_distinction() {
    let doc = document(json!({
        "materials": [{
            "pbrMetallicRoughness": {
                // Slot present, texture has a sampler.
                "baseColorTexture": { "index": 0 },
            },
            // Slot present, texture has no sampler.
            "normalTexture": { "index": 1 },
            // Emissive/occlusion/metallic-roughness slots absent entirely.
        }],
        "textures": [
            { "source": 0, "sampler": 0 },
            { "source": 1 },
        ],
        "images": [
            { "uri": "albedo.png" },
            { "uri": "normals.png" },
        ],
        "samplers": [{ "magFilter": 9729, "minFilter": 9987, "wrapS": 33071 }],
    }));

    let scene = decode_scene(Some(&doc), Some(&[])).unwrap();
    let textures = &scene.materials[0].textures;

    let base_color = textures.base_color.as_ref().unwrap();
    assert_eq!(base_color.uri.as_deref(), Some("albedo.png"));
    let sampler = base_color.sampler.as_ref().unwrap();
    assert_eq!(sampler.mag_filter, Some(FilterMode::Linear));
    assert_eq!(sampler.min_filter, Some(FilterMode::Linear));
    assert_eq!(sampler.wrap_s, AddressMode::ClampToEdge);
    assert_eq!(sampler.wrap_t, AddressMode::Repeat);

    let normal = textures.normal.as_ref().unwrap();
    assert_eq!(normal.uri.as_deref(), Some("normals.png"));
    assert!(normal.sampler.is_none());

    assert!(textures.metallic_roughness.is_none());
    assert!(textures.emissive.is_none());
    assert!(textures.occlusion.is_none());
}

#[test]
fn texture_without_source_has_no_uri() {
    let doc = document(json!({
        "materials": [{ "emissiveTexture": { "index": 0 } }],
        "textures": [{}],
    }));

    let scene = decode_scene(Some(&doc), Some(&[])).unwrap();
    let slot = scene.materials[0].textures.emissive.as_ref().unwrap();
    assert!(slot.uri.is_none());
    assert!(slot.sampler.is_none());
}

#[test]
fn dangling_texture_reference_fails() {
    let doc = document(json!({
        "materials": [{ "occlusionTexture": { "index": 2 } }],
        "textures": [{}],
    }));

    let err = decode_scene(Some(&doc), Some(&[])).unwrap_err();
    match err {
        GltfError::DanglingReference { kind, index, len } => {
            assert_eq!(kind, "texture");
            assert_eq!(index, 2);
            assert_eq!(len, 1);
        }
        other => panic!("expected DanglingReference, got {other:?}"),
    }
}

#[test]
fn dangling_image_reference_fails() {
    let doc = document(json!({
        "materials": [{ "normalTexture": { "index": 0 } }],
        "textures": [{ "source": 3 }],
        "images": [{ "uri": "a.png" }],
    }));

    let err = decode_scene(Some(&doc), Some(&[])).unwrap_err();
    match err {
        GltfError::DanglingReference { kind, index, .. } => {
            assert_eq!(kind, "image");
            assert_eq!(index, 3);
        }
        other => panic!("expected DanglingReference, got {other:?}"),
    }
}

#[test]
fn dangling_sampler_reference_fails() {
    let doc = document(json!({
        "materials": [{ "normalTexture": { "index": 0 } }],
        "textures": [{ "source": 0, "sampler": 1 }],
        "images": [{ "uri": "a.png" }],
        "samplers": [],
    }));

    let err = decode_scene(Some(&doc), Some(&[])).unwrap_err();
    match err {
        GltfError::DanglingReference { kind, index, len } => {
            assert_eq!(kind, "sampler");
            assert_eq!(index, 1);
            assert_eq!(len, 0);
        }
        other => panic!("expected DanglingReference, got {other:?}"),
    }
}

#[test]
fn nodes_meshes_materials_combine() {
    let mut doc = triangle_document();
    doc.nodes = document(json!({
        "nodes": [
            { "name": "Root", "children": [1] },
            { "mesh": 0 },
        ],
    }))
    .nodes;
    let buffer = triangle_buffer();

    let scene = decode_scene(Some(&doc), Some(&buffer)).unwrap();
    assert_eq!(scene.nodes.len(), 2);
    assert_eq!(scene.meshes.len(), 1);
    assert_eq!(scene.materials.len(), 1);

    assert_eq!(scene.nodes[0].children.as_deref(), Some(&[1][..]));
    assert_eq!(scene.nodes[1].name, "Node_1");
    assert_eq!(scene.nodes[1].mesh, Some(0));
    assert_eq!(scene.meshes[0].material, Some(0));
    assert_eq!(scene.materials[0].name, "Red");
}
