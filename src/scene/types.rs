//! Scene graph data types.
//!
//! All types use plain arrays (`[f32; 3]`, `[f32; 4]`) instead of math
//! library types to keep this crate free of a linear-algebra dependency.

/// Node transform decomposed into translation, rotation, and scale.
///
/// Uses plain arrays for portability. Convert to `glam`/`nalgebra` types as
/// needed: `Vec3::from(t.translation)`, `Quat::from_array(t.rotation)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// Translation [x, y, z].
    pub translation: [f32; 3],
    /// Rotation quaternion [x, y, z, w].
    pub rotation: [f32; 4],
    /// Scale [x, y, z].
    pub scale: [f32; 3],
}

impl NodeTransform {
    /// Identity transform: no translation, identity rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
