//! Material system
//!
//! Provides material definitions and centralized storage. Materials are owned
//! by the [`MaterialManager`] and referenced from mesh objects by [`MaterialId`].

/// Handle to a material stored in a [`MaterialManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub specular: [f32; 4],
    pub emissive: [f32; 4],
    pub ambient: [f32; 4],
}

/// Surface description with diffuse, specular, emissive and ambient colors
///
/// Alpha lives in the fourth component of `base_color`. It is stored raw, so
/// fade factors above 1.0 survive until a renderer saturates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub specular: [f32; 3],
    pub emissive: [f32; 3],
    pub ambient: [f32; 3],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            specular: [1.0, 1.0, 1.0],
            emissive: [0.0, 0.0, 0.0],
            ambient: [0.0, 0.0, 0.0],
        }
    }
}

impl Material {
    /// Creates a new opaque material with the given diffuse color
    ///
    /// # Arguments
    /// * `name` - Display name, not required to be unique
    /// * `r`, `g`, `b` - Diffuse color components (0.0-1.0)
    pub fn new(name: &str, r: f32, g: f32, b: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color: [r, g, b, 1.0],
            ..Default::default()
        }
    }

    /// Builder pattern: Set alpha transparency
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.base_color[3] = alpha;
        self
    }

    /// Builder pattern: Set specular color
    pub fn with_specular(mut self, r: f32, g: f32, b: f32) -> Self {
        self.specular = [r, g, b];
        self
    }

    /// Builder pattern: Set emissive color
    pub fn with_emissive(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emissive = [r, g, b];
        self
    }

    /// Builder pattern: Set ambient color
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32) -> Self {
        self.ambient = [r, g, b];
        self
    }

    pub fn alpha(&self) -> f32 {
        self.base_color[3]
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.base_color[3] = alpha;
    }

    pub fn set_emissive(&mut self, emissive: [f32; 3]) {
        self.emissive = emissive;
    }

    /// Packs the material for a uniform buffer, saturating alpha to 0.0-1.0
    pub fn to_uniform(&self) -> MaterialUniform {
        let [r, g, b, a] = self.base_color;
        let pad = |c: [f32; 3]| [c[0], c[1], c[2], 0.0];
        MaterialUniform {
            base_color: [r, g, b, a.clamp(0.0, 1.0)],
            specular: pad(self.specular),
            emissive: pad(self.emissive),
            ambient: pad(self.ambient),
        }
    }
}

/// Centralized material storage
///
/// Materials are never removed, so every [`MaterialId`] handed out stays valid
/// for the lifetime of the manager.
#[derive(Debug, Default)]
pub struct MaterialManager {
    materials: Vec<Material>,
}

impl MaterialManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn get_material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn get_material_mut(&mut self, id: MaterialId) -> &mut Material {
        &mut self.materials[id.0]
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_alpha() {
        let material = Material::new("handle", 0.0, 1.0, 1.0)
            .with_specular(0.5, 0.6, 0.1)
            .with_emissive(0.1, 0.1, 0.25)
            .with_alpha(0.6);

        assert_eq!(material.base_color, [0.0, 1.0, 1.0, 0.6]);
        assert_eq!(material.emissive, [0.1, 0.1, 0.25]);
        assert_eq!(material.alpha(), 0.6);
    }

    #[test]
    fn test_uniform_saturates_alpha() {
        let mut material = Material::default();
        material.set_alpha(2.0);
        assert_eq!(material.alpha(), 2.0);
        assert_eq!(material.to_uniform().base_color[3], 1.0);
        assert_eq!(bytemuck::bytes_of(&material.to_uniform()).len(), 64);
    }

    #[test]
    fn test_manager_ids_are_stable() {
        let mut manager = MaterialManager::new();
        let a = manager.add_material(Material::new("itemMat", 1.0, 0.0, 1.0));
        let b = manager.add_material(Material::new("itemMat", 1.0, 0.0, 1.0));
        assert_ne!(a, b);

        manager.get_material_mut(b).set_alpha(0.25);
        assert_eq!(manager.get_material(a).alpha(), 1.0);
        assert_eq!(manager.get_material(b).alpha(), 0.25);
        assert_eq!(manager.len(), 2);
    }
}
