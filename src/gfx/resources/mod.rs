//! Scene resources
//!
//! Materials shared between mesh objects.

pub mod material;

// Re-export main types
pub use material::{Material, MaterialId, MaterialManager, MaterialUniform};
