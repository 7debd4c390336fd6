//! CPU-side sampler descriptors.
//!
//! Provides [`SamplerDesc`] for describing texture sampling parameters,
//! along with the [`FilterMode`] and [`AddressMode`] enums.

mod types;

pub use types::{AddressMode, FilterMode, SamplerDesc};
