//! Spacebox
//!
//! A resizable 3D container that lays out a collection of items in a grid.
//! The container's bevelled walls are generated procedurally, a handle at its
//! corner can be dragged to resize it, and text labels follow items and the
//! container across the screen.
//!
//! The crate keeps a small retained scene ([`gfx::scene::Scene`]) that a
//! renderer reads each frame, and a label layer ([`ui::LabelOverlay`]) that a
//! UI toolkit draws on top.

pub mod gfx;
pub mod prelude;
pub mod space;
pub mod ui;

// Re-export main types for convenience
pub use space::{Container, ContainerError, ContainerSettings, Item, ItemSettings};
