//! # Gizmo System
//!
//! Interactive handles placed in 3D space. The space box uses a single kind:
//! a [`PlaneDragGizmo`] that drags the container's resize handle across the
//! ground plane.
//!
//! ## Usage
//!
//! ```
//! use cgmath::Vector3;
//! use spacebox::gfx::gizmos::{DragEvent, PlaneDragGizmo};
//! use spacebox::gfx::picking::Ray;
//! use spacebox::gfx::scene::Scene;
//!
//! let mut scene = Scene::new();
//! let handle = scene.create_node("handle", None);
//! let sphere = scene.create_sphere("handle", 10.0, Some(handle));
//! let mut gizmo = PlaneDragGizmo::new(Vector3::unit_y());
//! gizmo.attach(handle, sphere);
//!
//! let ray = Ray::new(Vector3::new(0.0, 50.0, 0.0), -Vector3::unit_y());
//! assert_eq!(gizmo.pointer_down(&ray, &scene), Some(DragEvent::DragStart));
//! ```

pub mod plane_drag;

pub use plane_drag::{DragEvent, PlaneDragGizmo};
