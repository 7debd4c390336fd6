use serde_json::Value;

use crate::gltf::schema::Document;

mod decode_test;

/// Build a [`Document`] from inline JSON.
fn document(value: Value) -> Document {
    serde_json::from_value(value).expect("test document should deserialize")
}

/// Little-endian byte buffer from f32 values.
fn f32_buffer(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Little-endian byte buffer from u16 values.
fn u16_buffer(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
