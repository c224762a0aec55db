//! # Grid Layout
//!
//! Places a run of equally sized items inside a container's interior. Items
//! fill a row-major grid whose cells are spread evenly over the whole
//! interior; whatever does not fit is stacked at the first cell, each extra
//! item higher and fainter than the last.
//!
//! The layout is a pure function of the interior size and the item count, so
//! the container can re-run it after every resize.

use cgmath::Vector3;
use log::warn;

use super::settings::ContainerSettings;

// Tolerates rounding when an interior is an exact multiple of the footprint.
const FIT_EPSILON: f32 = 1e-4;

/// Width and height of a rectangular footprint on the ground plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shrinks both axes by `amount` on each side
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(self.width - 2.0 * amount, self.height - 2.0 * amount)
    }
}

/// Constants the layout needs from the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub thickness: f32,
    pub overflow_lift_divisor: f32,
    pub overflow_fade: f32,
}

impl From<&ContainerSettings> for LayoutParams {
    fn from(settings: &ContainerSettings) -> Self {
        Self {
            thickness: settings.thickness,
            overflow_lift_divisor: settings.overflow_lift_divisor,
            overflow_fade: settings.overflow_fade,
        }
    }
}

/// Dimensions of the grid chosen for a layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
    pub column_spacing: f32,
    pub row_spacing: f32,
}

impl GridShape {
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

/// Where one item goes and how opaque it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub position: Vector3<f32>,
    pub alpha: f32,
    /// `(column, row)` for grid items, `None` for the overflow stack
    pub cell: Option<(usize, usize)>,
}

impl Slot {
    pub fn is_overflow(&self) -> bool {
        self.cell.is_none()
    }
}

/// Result of a layout pass, one slot per item in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    pub grid: Option<GridShape>,
    pub slots: Vec<Slot>,
}

impl Arrangement {
    pub fn overflow_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_overflow()).count()
    }
}

fn fit_count(extent: f32, item_size: f32) -> usize {
    if extent <= 0.0 {
        return 0;
    }
    (extent / item_size + FIT_EPSILON).floor() as usize
}

/// Chooses the grid for `item_count` items of edge `item_size` in `interior`.
///
/// Returns `None` when not even one cell fits.
pub fn grid_shape(interior: Size, item_size: f32, item_count: usize) -> Option<GridShape> {
    if item_count == 0 || item_size <= 0.0 {
        return None;
    }

    let columns = fit_count(interior.width, item_size).min(item_count);
    if columns == 0 {
        return None;
    }
    let rows = fit_count(interior.height, item_size).min(item_count.div_ceil(columns));
    if rows == 0 {
        return None;
    }

    Some(GridShape {
        columns,
        rows,
        column_spacing: interior.width / columns as f32,
        row_spacing: interior.height / rows as f32,
    })
}

/// Lays out `item_count` items inside `interior`.
///
/// Positions are relative to the container root, whose origin is the outer
/// wall corner; the interior starts `thickness` in from it.
pub fn arrange(interior: Size, item_size: f32, item_count: usize, params: &LayoutParams) -> Arrangement {
    if item_count == 0 {
        return Arrangement {
            grid: None,
            slots: Vec::new(),
        };
    }

    let start_x = item_size / 2.0 + params.thickness;
    let start_z = -start_x;

    let grid = grid_shape(interior, item_size, item_count);
    if grid.is_none() {
        warn!(
            "interior {}x{} has no room for a {} unit item, stacking all {} items",
            interior.width, interior.height, item_size, item_count
        );
    }
    let capacity = grid.map_or(0, |shape| shape.capacity());

    let slots = (0..item_count)
        .map(|index| match grid {
            Some(shape) if index < capacity => {
                let column = index % shape.columns;
                let row = index / shape.columns;
                Slot {
                    position: Vector3::new(
                        column as f32 * shape.column_spacing + start_x,
                        0.0,
                        -(row as f32) * shape.row_spacing + start_z,
                    ),
                    alpha: 1.0,
                    cell: Some((column, row)),
                }
            }
            _ => {
                let stack_index = (index - capacity + 1) as f32;
                Slot {
                    position: Vector3::new(
                        start_x,
                        item_size / params.overflow_lift_divisor * stack_index,
                        start_z,
                    ),
                    alpha: params.overflow_fade / stack_index,
                    cell: None,
                }
            }
        })
        .collect();

    Arrangement { grid, slots }
}
