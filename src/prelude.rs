//! # Spacebox Prelude
//!
//! Commonly used types in one import.
//!
//! ```
//! use spacebox::prelude::*;
//!
//! let mut scene = Scene::new();
//! let mut overlay = LabelOverlay::fullscreen("UI");
//! let container = Container::new(&mut scene, &mut overlay, ContainerSettings::default());
//! assert!(container.is_ok());
//! ```

// Scene and geometry
pub use crate::gfx::geometry::{make_bevelled_rectangle, GeometryData, Outline};
pub use crate::gfx::gizmos::{DragEvent, PlaneDragGizmo};
pub use crate::gfx::picking::Ray;
pub use crate::gfx::resources::material::Material;
pub use crate::gfx::scene::{MeshId, NodeId, Scene};

// Domain
pub use crate::space::{
    arrange, Container, ContainerError, ContainerSettings, Item, ItemSettings, Size,
};

// Labels
pub use crate::ui::{LabelOverlay, LabelStyle};
