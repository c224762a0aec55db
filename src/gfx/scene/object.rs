use cgmath::{Matrix4, Vector3, Zero};

use super::{scene::NodeId, vertex::Vertex3D};
use crate::gfx::{geometry::GeometryData, picking::AABB, resources::material::MaterialId};

/// Vertex and index data for one mesh, laid out for direct buffer upload
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    index_count: u32,
    bounds: AABB,
}

impl Mesh {
    pub fn from_geometry(data: &GeometryData) -> Self {
        let (vertices, indices) = data.to_scene_format();
        let index_count = indices.len() as u32;
        let bounds = AABB::from_vertices(&data.vertices);

        Self {
            vertices,
            indices,
            index_count,
            bounds,
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Bounding box in mesh-local space
    pub fn local_bounds(&self) -> AABB {
        self.bounds
    }

    /// Raw vertex bytes as a renderer would upload them
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes as a renderer would upload them
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// A mesh placed in the scene: geometry, parent anchor, local offset and material
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub mesh: Mesh,
    pub parent: Option<NodeId>,
    /// Translation relative to `parent` (or the world origin)
    pub position: Vector3<f32>,
    pub material: Option<MaterialId>,
    pub visible: bool,
}

impl Object {
    /// Create a new object at its parent's origin with no material
    pub fn new(name: &str, mesh: Mesh) -> Self {
        Self {
            name: name.to_string(),
            mesh,
            parent: None,
            position: Vector3::zero(),
            material: None,
            visible: true,
        }
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.position = translation;
    }

    /// Local transform matrix (scene anchors only translate)
    pub fn local_transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;

    #[test]
    fn test_mesh_from_geometry() {
        let mesh = Mesh::from_geometry(&generate_cube());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.vertex_bytes().len(), 24 * Vertex3D::STRIDE);
        assert_eq!(mesh.index_bytes().len(), 36 * 4);
        assert_eq!(mesh.local_bounds().min, Vector3::new(-0.5, -0.5, -0.5));
        assert_eq!(mesh.local_bounds().max, Vector3::new(0.5, 0.5, 0.5));
    }
}
