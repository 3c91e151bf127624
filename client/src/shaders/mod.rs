//! Custom materials and their embedded WGSL.
//!
//! ## Ocean
//! `ocean_water.wgsl` extends the standard PBR fragment stage: a tiling
//! normal map sampled at four scrolling offsets roughens the surface, and a
//! sharp specular term adds the sun glint.

mod water;

pub use water::*;
