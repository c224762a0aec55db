//! Tunable constants for containers and items.
//!
//! Defaults reproduce the stock space box: a 100 × 50 tray with 2-unit walls
//! and a handle sphere of radius 5, holding 10-unit cubes on 15-unit
//! footprints.

use cgmath::Vector3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },
    #[error("corner size {corner_size} is too large for the {edge}-unit wall cutout at minimum size")]
    CornerTooLarge { corner_size: f32, edge: f32 },
    #[error("initial size {width}x{height} is below the minimum size {minimum}")]
    InitialSizeTooSmall { width: f32, height: f32, minimum: f32 },
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NonPositive { field, value })
    }
}

/// Container geometry, handle, label and layout settings
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSettings {
    /// Wall thickness subtracted from each side to get the interior
    pub thickness: f32,
    /// Radius of the rounded wall corners
    pub corner_size: f32,
    /// Segments per quarter-circle corner
    pub corner_segments: u32,
    /// Wall height
    pub depth: f32,
    pub handle_radius: f32,
    /// Gap between the wall corner and the handle sphere (negative overlaps)
    pub handle_padding: f32,
    pub handle_alpha: f32,
    pub handle_color: [f32; 3],
    pub handle_specular: [f32; 3],
    pub handle_resting_emissive: [f32; 3],
    pub handle_clicked_emissive: [f32; 3],
    pub wall_color: [f32; 3],
    pub wall_specular: [f32; 3],
    pub wall_emissive: [f32; 3],
    /// Distance of the caption beyond the far wall
    pub label_padding: f32,
    pub caption: String,
    /// Minimum size used while no items are assigned, and the floor otherwise
    pub default_min_size: f32,
    pub initial_width: f32,
    pub initial_height: f32,
    /// Column count targeted when sizing the container for a new item set
    pub grid_columns: usize,
    /// Overflow items rise by `item_size / overflow_lift_divisor` per stack step
    pub overflow_lift_divisor: f32,
    /// Overflow item `k` (1-based) gets alpha `overflow_fade / k`
    pub overflow_fade: f32,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            thickness: 2.0,
            corner_size: 2.0,
            corner_segments: 36,
            depth: 3.0,
            handle_radius: 5.0,
            handle_padding: -1.0,
            handle_alpha: 0.6,
            handle_color: [0.0, 1.0, 1.0],
            handle_specular: [0.5, 0.6, 0.1],
            handle_resting_emissive: [0.1, 0.1, 0.25],
            handle_clicked_emissive: [0.1, 0.1, 0.5],
            wall_color: [0.0, 1.0, 1.0],
            wall_specular: [0.5, 0.6, 0.1],
            wall_emissive: [0.1, 0.1, 0.25],
            label_padding: 10.0,
            caption: "Container".to_string(),
            default_min_size: 10.0,
            initial_width: 100.0,
            initial_height: 50.0,
            grid_columns: 10,
            overflow_lift_divisor: 1.5,
            overflow_fade: 2.0,
        }
    }
}

impl ContainerSettings {
    /// Builder pattern: Set wall thickness
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Builder pattern: Set corner radius and arc resolution
    pub fn with_corners(mut self, corner_size: f32, corner_segments: u32) -> Self {
        self.corner_size = corner_size;
        self.corner_segments = corner_segments;
        self
    }

    /// Builder pattern: Set wall height
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder pattern: Set handle radius and corner padding
    pub fn with_handle(mut self, radius: f32, padding: f32) -> Self {
        self.handle_radius = radius;
        self.handle_padding = padding;
        self
    }

    /// Builder pattern: Set the size used before any items are assigned
    pub fn with_initial_size(mut self, width: f32, height: f32) -> Self {
        self.initial_width = width;
        self.initial_height = height;
        self
    }

    /// Builder pattern: Set the default minimum size
    pub fn with_default_min_size(mut self, size: f32) -> Self {
        self.default_min_size = size;
        self
    }

    /// Builder pattern: Set the target column count for new item sets
    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns;
        self
    }

    /// Builder pattern: Set the caption shown beyond the far wall
    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = caption.to_string();
        self
    }

    /// Offset from the outer wall corner to the handle center on each axis
    pub fn handle_offset(&self) -> f32 {
        self.handle_padding + self.handle_radius
    }

    /// Checks every invariant the container's geometry relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("thickness", self.thickness)?;
        positive("corner_size", self.corner_size)?;
        positive("depth", self.depth)?;
        positive("handle_radius", self.handle_radius)?;
        positive("default_min_size", self.default_min_size)?;
        positive("overflow_lift_divisor", self.overflow_lift_divisor)?;

        if self.corner_segments == 0 {
            return Err(SettingsError::Zero {
                field: "corner_segments",
            });
        }
        if self.grid_columns == 0 {
            return Err(SettingsError::Zero {
                field: "grid_columns",
            });
        }

        // The cutout is the smallest outline; its straight runs must stay positive.
        let edge = self.default_min_size - self.thickness;
        if 2.0 * self.corner_size >= edge {
            return Err(SettingsError::CornerTooLarge {
                corner_size: self.corner_size,
                edge,
            });
        }

        if self.initial_width < self.default_min_size || self.initial_height < self.default_min_size {
            return Err(SettingsError::InitialSizeTooSmall {
                width: self.initial_width,
                height: self.initial_height,
                minimum: self.default_min_size,
            });
        }

        Ok(())
    }
}

/// Item footprint, look and label settings
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSettings {
    /// Edge length of the item cube
    pub mesh_size: f32,
    /// Extra spacing added to the cube to form the footprint
    pub padding: f32,
    pub color: [f32; 3],
    pub specular: [f32; 3],
    pub emissive: [f32; 3],
    pub ambient: [f32; 3],
    /// Whether items get a caption label
    pub labelled: bool,
    /// Label anchor relative to the item root
    pub label_offset: Vector3<f32>,
}

impl Default for ItemSettings {
    fn default() -> Self {
        let mesh_size = 10.0;
        Self {
            mesh_size,
            padding: mesh_size / 2.0,
            color: [1.0, 0.0, 1.0],
            specular: [0.5, 0.6, 0.87],
            emissive: [0.1, 0.1, 0.1],
            ambient: [0.23, 0.98, 0.53],
            labelled: true,
            label_offset: Vector3::new(0.0, mesh_size, -mesh_size / 2.0),
        }
    }
}

impl ItemSettings {
    /// Builder pattern: Set cube size and footprint padding
    pub fn with_size(mut self, mesh_size: f32, padding: f32) -> Self {
        self.mesh_size = mesh_size;
        self.padding = padding;
        self
    }

    /// Builder pattern: Enable or disable captions
    pub fn with_label(mut self, labelled: bool) -> Self {
        self.labelled = labelled;
        self
    }

    /// Edge length an item occupies in the layout grid
    pub fn footprint(&self) -> f32 {
        self.mesh_size + self.padding
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("mesh_size", self.mesh_size)?;
        if self.padding < 0.0 || !self.padding.is_finite() {
            return Err(SettingsError::Negative {
                field: "padding",
                value: self.padding,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ContainerSettings::default().validate(), Ok(()));
        assert_eq!(ItemSettings::default().validate(), Ok(()));
        assert_eq!(ItemSettings::default().footprint(), 15.0);
        assert_eq!(ContainerSettings::default().handle_offset(), 4.0);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let settings = ContainerSettings::default().with_thickness(0.0);
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NonPositive {
                field: "thickness",
                value: 0.0
            })
        );

        let settings = ContainerSettings::default().with_corners(2.0, 0);
        assert_eq!(
            settings.validate(),
            Err(SettingsError::Zero {
                field: "corner_segments"
            })
        );

        let item = ItemSettings::default().with_size(10.0, -1.0);
        assert!(matches!(item.validate(), Err(SettingsError::Negative { field: "padding", .. })));
    }

    #[test]
    fn test_rejects_corners_that_break_the_cutout() {
        let settings = ContainerSettings::default().with_corners(4.0, 36);
        assert_eq!(
            settings.validate(),
            Err(SettingsError::CornerTooLarge {
                corner_size: 4.0,
                edge: 8.0
            })
        );
    }

    #[test]
    fn test_rejects_small_initial_size() {
        let settings = ContainerSettings::default().with_initial_size(5.0, 50.0);
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InitialSizeTooSmall { .. })
        ));
    }
}
