//! # User Interface Module
//!
//! The 2D layer drawn over the 3D scene. It holds text labels that are
//! anchored to scene nodes and can be edited in place.
//!
//! ## Key Components
//!
//! - [`LabelOverlay`] - The full-screen layer; created once and passed around explicitly
//! - [`Label`] - One editable caption linked to an anchor
//! - [`ScreenLabel`] - A label resolved to pixel coordinates for a renderer
//!
//! ## Usage
//!
//! ```
//! use spacebox::gfx::scene::Scene;
//! use spacebox::ui::LabelOverlay;
//!
//! let mut scene = Scene::new();
//! let mut overlay = LabelOverlay::fullscreen("UI");
//!
//! let anchor = scene.create_node("labelSlot", None);
//! let label = overlay.add_label("Container");
//! overlay.link_with_node(label, anchor);
//! ```

pub mod label;

// Re-export main types
pub use label::{Label, LabelId, LabelOverlay, LabelStyle, ScreenLabel};
