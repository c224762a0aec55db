//! # Graphics Module
//!
//! The scene-side half of the crate: everything a renderer would consume and
//! everything pointer input is routed through.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Outlines, primitives and polygon extrusion
//! - **Scene Management** ([`scene`]) - Anchors, mesh objects and materials
//! - **Picking** ([`picking`]) - Rays, bounding boxes and mesh hit tests
//! - **Gizmos** ([`gizmos`]) - Plane-constrained drag handles
//! - **Resources** ([`resources`]) - Material definitions
//!
//! ## Usage
//!
//! ```
//! use spacebox::gfx::{geometry::make_bevelled_rectangle, scene::Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.create_node("root", None);
//! let shape = make_bevelled_rectangle(40.0, 20.0, 2.0, 8);
//! let wall = scene.extrude_polygon("wall", &shape, &[], 3.0, Some(root)).unwrap();
//! assert!(scene.is_live(wall));
//! ```

pub mod geometry;
pub mod gizmos;
pub mod picking;
pub mod resources;
pub mod scene;
