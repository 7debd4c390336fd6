//! Scene graph types shared by loaders and consumers.
//!
//! These types are format-agnostic: any loader can produce them and they
//! carry no reference back to a source document.

mod types;

pub use types::NodeTransform;
