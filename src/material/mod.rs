//! Format-agnostic material types shared by loaders and consumers.

mod types;

pub use types::AlphaMode;
