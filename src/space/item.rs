//! # Items
//!
//! A placeable unit: a cube on a square footprint with an optional caption.
//!
//! [`Item`] is a cheap handle. Its position lives on its root anchor and its
//! opacity on its material and label, so clones handed to a container refer
//! to the same scene state as the item they were cloned from.

use cgmath::Vector3;
use rand::Rng;

use crate::{
    gfx::{
        resources::material::{Material, MaterialId},
        scene::{MeshId, NodeId, Scene},
    },
    ui::{LabelId, LabelOverlay},
};

use super::settings::ItemSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    size: f32,
    root: NodeId,
    footprint: MeshId,
    material: MaterialId,
    label: Option<LabelId>,
}

impl Item {
    /// Builds the item's anchor, cube, material and (optionally) its caption.
    ///
    /// The caption is a random placeholder the user can edit later.
    pub fn new<R: Rng>(
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
        settings: &ItemSettings,
        rng: &mut R,
    ) -> Self {
        let mesh_size = settings.mesh_size;
        let root = scene.create_node("item", None);

        let footprint = scene.create_box("item", mesh_size, mesh_size, mesh_size, Some(root));
        let [r, g, b] = settings.color;
        let [sr, sg, sb] = settings.specular;
        let [er, eg, eb] = settings.emissive;
        let [ar, ag, ab] = settings.ambient;
        let material = scene.add_material(
            Material::new("itemMat", r, g, b)
                .with_specular(sr, sg, sb)
                .with_emissive(er, eg, eb)
                .with_ambient(ar, ag, ab),
        );

        // Freshly created meshes are always live.
        if let Ok(object) = scene.mesh_mut(footprint) {
            object.set_translation(Vector3::new(0.0, mesh_size / 2.0, 0.0));
            object.material = Some(material);
        }

        let label = settings.labelled.then(|| {
            let anchor = scene.create_node("itemLabel", Some(root));
            scene.set_node_position(anchor, settings.label_offset);

            let caption = format!("Item {:04}", rng.random_range(0..10_000));
            let label = overlay.add_label(&caption);
            overlay.link_with_node(label, anchor);
            label
        });

        Self {
            size: settings.footprint(),
            root,
            footprint,
            material,
            label,
        }
    }

    /// Footprint edge length (cube plus padding)
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn footprint(&self) -> MeshId {
        self.footprint
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }

    pub fn label(&self) -> Option<LabelId> {
        self.label
    }

    pub fn position(&self, scene: &Scene) -> Vector3<f32> {
        scene.node_position(self.root)
    }

    pub fn set_position(&self, scene: &mut Scene, position: Vector3<f32>) {
        scene.set_node_position(self.root, position);
    }

    pub fn alpha(&self, scene: &Scene) -> f32 {
        scene.material(self.material).alpha()
    }

    /// Sets the opacity of the cube and its caption together
    pub fn set_alpha(&self, scene: &mut Scene, overlay: &mut LabelOverlay, alpha: f32) {
        scene.material_mut(self.material).set_alpha(alpha);
        if let Some(label) = self.label {
            overlay.set_alpha(label, alpha);
        }
    }
}
