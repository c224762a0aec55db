//! # Picking
//!
//! Ray casting against scene content. Used for pointer hover over meshes and
//! for driving plane-constrained drags.
//!
//! ## How it works
//!
//! 1. **Screen to Ray**: Unproject a pointer position through an inverse view-projection matrix
//! 2. **Ray-Shape Intersection**: Test the ray against mesh bounding boxes or planes
//! 3. **Selection**: Keep the closest hit
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Vector3;
//! use spacebox::gfx::picking::Ray;
//!
//! let ray = Ray::new(Vector3::new(0.0, 10.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
//! assert_eq!(ray.intersect_plane(Vector3::new(0.0, 0.0, 0.0), Vector3::unit_y()), Some(10.0));
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::scene::{MeshId, Scene};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Convert screen coordinates to a world-space ray
    ///
    /// Returns `None` when `view_proj` cannot be inverted.
    pub fn from_screen(
        screen_pos: (f32, f32),
        screen_size: (f32, f32),
        view_proj: Matrix4<f32>,
    ) -> Option<Self> {
        let (mouse_x, mouse_y) = screen_pos;
        let (screen_width, screen_height) = screen_size;

        let ndc_x = (2.0 * mouse_x) / screen_width - 1.0;
        let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height; // Flip Y axis

        let inv_view_proj = view_proj.invert()?;

        let world_near = inv_view_proj * Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
        let world_far = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near_3d = world_near.truncate() / world_near.w;
        let far_3d = world_far.truncate() / world_far.w;

        Some(Ray::new(near_3d, far_3d - near_3d))
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// Distance to a plane given by a point and normal, if hit ahead of the origin
    pub fn intersect_plane(&self, point: Vector3<f32>, normal: Vector3<f32>) -> Option<f32> {
        let denom = normal.dot(self.direction);
        if denom.abs() < 1e-6 {
            return None;
        }

        let t = (point - self.origin).dot(normal) / denom;
        (t >= 0.0).then_some(t)
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::from(vertices[0]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Apply a transformation matrix to the AABB
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let transformed: Vec<[f32; 3]> = corners
            .iter()
            .map(|corner| {
                let p = matrix * corner.extend(1.0);
                [p.x / p.w, p.y / p.w, p.z / p.w]
            })
            .collect();

        Self::from_vertices(&transformed)
    }
}

/// Result of a mesh picking operation
#[derive(Debug, Clone)]
pub struct PickResult {
    /// The picked mesh
    pub mesh: MeshId,
    /// Distance from the ray origin to the intersection point
    pub distance: f32,
    /// World space intersection point
    pub intersection_point: Vector3<f32>,
}

/// Tests `ray` against the world-space bounding box of a single mesh.
///
/// Hidden and disposed meshes are never hit.
pub fn intersect_mesh(scene: &Scene, ray: &Ray, mesh: MeshId) -> Option<PickResult> {
    let object = scene.mesh(mesh).ok()?;
    if !object.visible {
        return None;
    }
    let world = scene.mesh_world_transform(mesh).ok()?;
    let distance = object.mesh.local_bounds().transform(&world).intersect_ray(ray)?;

    Some(PickResult {
        mesh,
        distance,
        intersection_point: ray.point_at(distance),
    })
}

/// Pick the closest visible mesh hit by `ray`
pub fn pick_mesh(scene: &Scene, ray: &Ray) -> Option<PickResult> {
    scene
        .objects()
        .filter_map(|(id, _)| intersect_mesh(scene, ray, id))
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
