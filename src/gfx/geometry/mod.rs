//! # Procedural Geometry Generation
//!
//! This module generates the meshes the space box is made of without any
//! external model files.
//!
//! ## Building Blocks
//!
//! - **Primitives** ([`primitives`]): boxes for item footprints, spheres for the resize handle
//! - **Outlines** ([`outline`]): closed bevelled-rectangle outlines in the XZ plane
//! - **Extrusion** ([`extrude`]): turns an outline plus holes into a solid with caps and side walls
//!
//! ## Usage
//!
//! ```rust
//! use spacebox::gfx::geometry::{extrude_polygon, make_bevelled_rectangle};
//!
//! let shape = make_bevelled_rectangle(100.0, 50.0, 2.0, 36);
//! let hole = make_bevelled_rectangle(98.0, 48.0, 2.0, 36).translated(1.0, -1.0);
//! let wall = extrude_polygon(&shape, &[hole], 3.0).unwrap();
//! assert!(wall.triangle_count() > 0);
//! ```

pub mod extrude;
pub mod outline;
pub mod primitives;

pub use extrude::extrude_polygon;
pub use outline::{make_bevelled_rectangle, Outline};
pub use primitives::*;

/// Errors raised while turning outlines into meshes
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("outline needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("polygon triangulation failed: {0}")]
    Triangulation(String),
}

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Scales every vertex position independently per axis.
    ///
    /// Normals are left untouched, which is only correct for uniform scales or
    /// axis-aligned faces; both hold for the primitives generated here.
    pub fn scaled(mut self, sx: f32, sy: f32, sz: f32) -> Self {
        for vertex in &mut self.vertices {
            vertex[0] *= sx;
            vertex[1] *= sy;
            vertex[2] *= sz;
        }
        self
    }

    /// Appends a vertex and returns its index
    pub(crate) fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        self.tex_coords.push(uv);
        index
    }

    /// Convert to the vertex format used by the scene graph
    pub fn to_scene_format(&self) -> (Vec<crate::gfx::scene::vertex::Vertex3D>, Vec<u32>) {
        use crate::gfx::scene::vertex::Vertex3D;

        let vertices: Vec<Vertex3D> = (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
