//! # Scene Management Module
//!
//! A small retained scene graph: transform anchors, mesh objects with
//! upload-ready vertex data, and materials. It is the surface the space box
//! drives (create, move, re-material and dispose meshes) and the data a
//! renderer reads every frame.
//!
//! ## Key Components
//!
//! - [`Scene`] - Owns anchors, meshes and materials
//! - [`Object`] - A mesh placed under an anchor with a material
//! - [`Vertex3D`] - 3D vertex data structure with position and normal
//!
//! ## Usage
//!
//! ```
//! use spacebox::gfx::scene::Scene;
//!
//! let mut scene = Scene::new();
//! let root = scene.create_node("root", None);
//! let sphere = scene.create_sphere("handle", 10.0, Some(root));
//! assert!(scene.is_live(sphere));
//! ```

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{Mesh, Object};
pub use scene::{MeshId, NodeId, Scene, SceneError, SceneStatistics, TransformNode};
pub use vertex::Vertex3D;
