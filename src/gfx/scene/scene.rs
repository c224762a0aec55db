use std::collections::BTreeMap;

use cgmath::{Matrix4, Vector3, Zero};

use crate::gfx::{
    geometry::{extrude_polygon, generate_box, generate_sphere, GeometryData, GeometryError, Outline},
    resources::material::{Material, MaterialId, MaterialManager},
};

use super::object::{Mesh, Object};

const SPHERE_LONGITUDE_SEGMENTS: u32 = 24;
const SPHERE_LATITUDE_SEGMENTS: u32 = 16;

/// Handle to a transform anchor. Anchors are never removed from their scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Handle to a mesh object. Invalid once the mesh has been disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(u64);

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("mesh {0:?} does not exist or was disposed")]
    UnknownMesh(MeshId),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A named transform anchor that meshes and other anchors can be parented to
#[derive(Debug, Clone)]
pub struct TransformNode {
    pub name: String,
    /// Translation relative to `parent` (or the world origin)
    pub position: Vector3<f32>,
    pub parent: Option<NodeId>,
}

/// Retained scene graph: anchors, mesh objects and materials
///
/// All mutation goes through `&mut Scene`, so a single owner (the host's event
/// loop) serializes every change.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<TransformNode>,
    objects: BTreeMap<MeshId, Object>,
    next_mesh_id: u64,
    material_manager: MaterialManager,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    // Anchors

    /// Creates a transform anchor at the parent's origin
    pub fn create_node(&mut self, name: &str, parent: Option<NodeId>) -> NodeId {
        self.nodes.push(TransformNode {
            name: name.to_string(),
            position: Vector3::zero(),
            parent,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &TransformNode {
        &self.nodes[id.0]
    }

    pub fn node_position(&self, id: NodeId) -> Vector3<f32> {
        self.nodes[id.0].position
    }

    pub fn set_node_position(&mut self, id: NodeId, position: Vector3<f32>) {
        self.nodes[id.0].position = position;
    }

    pub fn set_node_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.nodes[id.0].parent = parent;
    }

    /// Position of an anchor after applying every ancestor's translation
    pub fn world_position(&self, id: NodeId) -> Vector3<f32> {
        let mut position = Vector3::zero();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            position += node.position;
            current = node.parent;
        }
        position
    }

    // Meshes

    /// Registers a mesh built from `data` under `parent`
    pub fn add_mesh(&mut self, name: &str, data: &GeometryData, parent: Option<NodeId>) -> MeshId {
        let id = MeshId(self.next_mesh_id);
        self.next_mesh_id += 1;

        let mut object = Object::new(name, Mesh::from_geometry(data));
        object.parent = parent;
        self.objects.insert(id, object);
        id
    }

    /// Axis-aligned box centered on its anchor
    pub fn create_box(
        &mut self,
        name: &str,
        width: f32,
        height: f32,
        depth: f32,
        parent: Option<NodeId>,
    ) -> MeshId {
        self.add_mesh(name, &generate_box(width, height, depth), parent)
    }

    /// Sphere centered on its anchor
    pub fn create_sphere(&mut self, name: &str, diameter: f32, parent: Option<NodeId>) -> MeshId {
        let radius = diameter * 0.5;
        let data = generate_sphere(SPHERE_LONGITUDE_SEGMENTS, SPHERE_LATITUDE_SEGMENTS)
            .scaled(radius, radius, radius);
        self.add_mesh(name, &data, parent)
    }

    /// Extrudes `shape` minus `holes` downward by `depth` and registers the result
    pub fn extrude_polygon(
        &mut self,
        name: &str,
        shape: &Outline,
        holes: &[Outline],
        depth: f32,
        parent: Option<NodeId>,
    ) -> Result<MeshId, SceneError> {
        let data = extrude_polygon(shape, holes, depth)?;
        Ok(self.add_mesh(name, &data, parent))
    }

    /// Releases a mesh. The handle is invalid afterwards.
    pub fn dispose_mesh(&mut self, id: MeshId) -> Result<(), SceneError> {
        self.objects
            .remove(&id)
            .map(|_| ())
            .ok_or(SceneError::UnknownMesh(id))
    }

    pub fn is_live(&self, id: MeshId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn mesh(&self, id: MeshId) -> Result<&Object, SceneError> {
        self.objects.get(&id).ok_or(SceneError::UnknownMesh(id))
    }

    pub fn mesh_mut(&mut self, id: MeshId) -> Result<&mut Object, SceneError> {
        self.objects.get_mut(&id).ok_or(SceneError::UnknownMesh(id))
    }

    pub fn set_mesh_position(&mut self, id: MeshId, position: Vector3<f32>) -> Result<(), SceneError> {
        self.mesh_mut(id)?.set_translation(position);
        Ok(())
    }

    pub fn set_mesh_material(&mut self, id: MeshId, material: MaterialId) -> Result<(), SceneError> {
        self.mesh_mut(id)?.material = Some(material);
        Ok(())
    }

    /// World transform of a mesh, including every ancestor anchor
    pub fn mesh_world_transform(&self, id: MeshId) -> Result<Matrix4<f32>, SceneError> {
        let object = self.mesh(id)?;
        let parent_offset = object
            .parent
            .map(|parent| self.world_position(parent))
            .unwrap_or_else(Vector3::zero);
        Ok(Matrix4::from_translation(parent_offset) * object.local_transform())
    }

    /// Live mesh objects in creation order
    pub fn objects(&self) -> impl Iterator<Item = (MeshId, &Object)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    pub fn mesh_count(&self) -> usize {
        self.objects.len()
    }

    // Materials

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.material_manager.add_material(material)
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        self.material_manager.get_material(id)
    }

    pub fn material_mut(&mut self, id: MaterialId) -> &mut Material {
        self.material_manager.get_material_mut(id)
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let total_triangles: u32 = self
            .objects
            .values()
            .map(|obj| obj.mesh.index_count() / 3)
            .sum();

        let total_vertices: u32 = self
            .objects
            .values()
            .map(|obj| obj.mesh.vertex_count())
            .sum();

        SceneStatistics {
            node_count: self.nodes.len(),
            object_count: self.objects.len(),
            material_count: self.material_manager.len(),
            total_triangles,
            total_vertices,
        }
    }
}

/// Scene statistics for debugging and logging
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub object_count: usize,
    pub material_count: usize,
    pub total_triangles: u32,
    pub total_vertices: u32,
}
