//! # Space Box
//!
//! The domain layer: items, the resizable container that holds them and the
//! grid layout that places them.
//!
//! ## Usage
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use spacebox::gfx::scene::Scene;
//! use spacebox::space::{Container, ContainerSettings, Item, ItemSettings};
//! use spacebox::ui::LabelOverlay;
//!
//! let mut scene = Scene::new();
//! let mut overlay = LabelOverlay::fullscreen("UI");
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let item_settings = ItemSettings::default();
//! let items: Vec<Item> = (0..50)
//!     .map(|_| Item::new(&mut scene, &mut overlay, &item_settings, &mut rng))
//!     .collect();
//!
//! let mut container = Container::new(&mut scene, &mut overlay, ContainerSettings::default())?;
//! container.set_items(&mut scene, &mut overlay, items)?;
//! assert_eq!(container.size().width, 154.0);
//! # Ok::<(), spacebox::space::ContainerError>(())
//! ```

pub mod container;
pub mod item;
pub mod layout;
pub mod settings;

pub use container::{Container, ContainerError};
pub use item::Item;
pub use layout::{arrange, Arrangement, GridShape, LayoutParams, Size, Slot};
pub use settings::{ContainerSettings, ItemSettings, SettingsError};
