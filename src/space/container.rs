//! # Resizable Container
//!
//! A bevelled tray that holds a set of [`Item`]s in a grid. A sphere handle at
//! the outer corner can be dragged across the ground plane to resize it. Each
//! resize clamps the size to the minimum, repositions every item and rebuilds
//! the wall mesh.
//!
//! ## Coordinates
//!
//! The container's root sits at the outer near-left corner. The tray extends
//! along +X for its width and along -Z for its height; the handle sits beyond
//! the opposite corner at `(width + offset, depth / 2, -height - offset)`
//! where `offset = handle_padding + handle_radius`.

use cgmath::Vector3;
use log::{debug, info, trace};

use crate::{
    gfx::{
        geometry::make_bevelled_rectangle,
        gizmos::{DragEvent, PlaneDragGizmo},
        picking::Ray,
        resources::material::{Material, MaterialId},
        scene::{MeshId, NodeId, Scene, SceneError},
    },
    ui::{LabelId, LabelOverlay},
};

use super::{
    item::Item,
    layout::{arrange, LayoutParams, Size},
    settings::{ContainerSettings, SettingsError},
};

#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("invalid container settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("failed to build wall: {0}")]
    Scene(#[from] SceneError),
}

#[derive(Debug)]
pub struct Container {
    settings: ContainerSettings,
    layout: LayoutParams,

    size: Size,
    minimum_size: f32,
    items: Vec<Item>,
    // Largest footprint among `items`, used as the grid cell edge.
    item_size: f32,

    root: NodeId,
    handle: NodeId,
    handle_mesh: MeshId,
    handle_material: MaterialId,
    gizmo: PlaneDragGizmo,

    wall: Option<MeshId>,
    wall_material: MaterialId,

    label_slot: NodeId,
    label: LabelId,
}

impl Container {
    /// Creates the container at its initial size with an empty item set
    pub fn new(
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
        settings: ContainerSettings,
    ) -> Result<Self, ContainerError> {
        settings.validate()?;

        let root = scene.create_node("container", None);

        let handle = scene.create_node("containerHandle", Some(root));
        let handle_mesh = scene.create_sphere("containerHandle", settings.handle_radius * 2.0, Some(handle));
        let [r, g, b] = settings.handle_color;
        let [sr, sg, sb] = settings.handle_specular;
        let [er, eg, eb] = settings.handle_resting_emissive;
        let handle_material = scene.add_material(
            Material::new("handle material", r, g, b)
                .with_specular(sr, sg, sb)
                .with_emissive(er, eg, eb)
                .with_alpha(settings.handle_alpha),
        );
        scene.set_mesh_material(handle_mesh, handle_material)?;

        // X/Z only: the handle never leaves the ground plane.
        let mut gizmo = PlaneDragGizmo::new(Vector3::unit_y());
        gizmo.attach(handle, handle_mesh);

        let label_slot = scene.create_node("labelSlot", Some(root));
        let label = overlay.add_label(&settings.caption);
        overlay.link_with_node(label, label_slot);

        let [r, g, b] = settings.wall_color;
        let [sr, sg, sb] = settings.wall_specular;
        let [er, eg, eb] = settings.wall_emissive;
        let wall_material = scene.add_material(
            Material::new("wall material", r, g, b)
                .with_specular(sr, sg, sb)
                .with_emissive(er, eg, eb),
        );

        let mut container = Self {
            layout: LayoutParams::from(&settings),
            size: Size::new(settings.initial_width, settings.initial_height),
            minimum_size: settings.default_min_size,
            items: Vec::new(),
            item_size: 0.0,
            root,
            handle,
            handle_mesh,
            handle_material,
            gizmo,
            wall: None,
            wall_material,
            label_slot,
            label,
            settings,
        };

        container.fit_handle_to_size(scene);
        container.scale_by_handle(scene, overlay)?;

        info!(
            "created container {}x{} (minimum {})",
            container.size.width, container.size.height, container.minimum_size
        );
        Ok(container)
    }

    /// Resizes the container to match the handle's current position.
    ///
    /// If the handle implies a side shorter than the minimum, the side is
    /// clamped and the handle is moved back to where that size puts it.
    pub fn scale_by_handle(
        &mut self,
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
    ) -> Result<MeshId, ContainerError> {
        let offset = self.settings.handle_offset();
        let mut position = scene.node_position(self.handle);

        let target_width = position.x - offset;
        let target_height = -position.z - offset;

        let width = target_width.max(self.minimum_size);
        let height = target_height.max(self.minimum_size);

        if width != target_width || height != target_height {
            position.x += width - target_width;
            position.z += target_height - height;
            scene.set_node_position(self.handle, position);
            debug!(
                "handle clamped from {}x{} to {}x{}",
                target_width, target_height, width, height
            );
        }

        self.set_size(scene, overlay, width, height)
    }

    /// Sets the exterior size, lays the items out again and rebuilds the wall.
    ///
    /// Sizes below the minimum are raised to it. Returns the new wall; the
    /// previous wall handle is disposed.
    pub fn set_size(
        &mut self,
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
        width: f32,
        height: f32,
    ) -> Result<MeshId, ContainerError> {
        let width = width.max(self.minimum_size);
        let height = height.max(self.minimum_size);
        self.size = Size::new(width, height);

        self.position_items(scene, overlay);

        let thickness = self.settings.thickness;
        let corner_size = self.settings.corner_size;
        let segments = self.settings.corner_segments;
        let depth = self.settings.depth;

        let shape = make_bevelled_rectangle(width, height, corner_size, segments);
        let hole = make_bevelled_rectangle(width - thickness, height - thickness, corner_size, segments)
            .translated(thickness / 2.0, -thickness / 2.0);
        let wall = scene.extrude_polygon("wall", &shape, &[hole], depth, Some(self.root))?;
        if let Some(previous) = self.wall.replace(wall) {
            scene.dispose_mesh(previous)?;
        }
        scene.set_mesh_position(wall, Vector3::new(0.0, depth, 0.0))?;
        scene.set_mesh_material(wall, self.wall_material)?;

        scene.set_node_position(
            self.label_slot,
            Vector3::new(width / 2.0, depth / 2.0, -height - self.settings.label_padding),
        );

        debug!("container resized to {}x{}", width, height);
        Ok(wall)
    }

    /// Moves the handle to the outer corner implied by the current size
    pub fn fit_handle_to_size(&self, scene: &mut Scene) {
        let offset = self.settings.handle_offset();
        scene.set_node_position(
            self.handle,
            Vector3::new(
                self.size.width + offset,
                self.settings.depth / 2.0,
                -self.size.height - offset,
            ),
        );
    }

    /// Replaces the item set and sizes the container to hold it.
    ///
    /// A non-empty set gets a grid of up to `grid_columns` columns and as many
    /// rows as needed. An empty set only resets the minimum size.
    pub fn set_items(
        &mut self,
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
        items: Vec<Item>,
    ) -> Result<(), ContainerError> {
        for previous in &self.items {
            scene.set_node_parent(previous.root(), None);
        }
        for item in &items {
            scene.set_node_parent(item.root(), Some(self.root));
        }

        self.items = items;
        self.item_size = self.items.iter().map(Item::size).fold(0.0, f32::max);

        if self.items.is_empty() {
            self.minimum_size = self.settings.default_min_size;
            debug!("container emptied, minimum size reset to {}", self.minimum_size);
            return Ok(());
        }

        let thickness = self.settings.thickness;
        self.minimum_size = (self.item_size + 2.0 * thickness).max(self.settings.default_min_size);

        let count = self.items.len();
        let columns = count.min(self.settings.grid_columns);
        let rows = count.div_ceil(self.settings.grid_columns);
        info!(
            "container holding {} items in {}x{} grid of {} unit cells",
            count, columns, rows, self.item_size
        );

        self.set_size(
            scene,
            overlay,
            columns as f32 * self.item_size + 2.0 * thickness,
            rows as f32 * self.item_size + 2.0 * thickness,
        )?;
        self.fit_handle_to_size(scene);
        Ok(())
    }

    fn position_items(&self, scene: &mut Scene, overlay: &mut LabelOverlay) {
        if self.items.is_empty() {
            return;
        }

        let interior = self.size.inset(self.settings.thickness);
        let arrangement = arrange(interior, self.item_size, self.items.len(), &self.layout);
        for (item, slot) in self.items.iter().zip(&arrangement.slots) {
            item.set_position(scene, slot.position);
            item.set_alpha(scene, overlay, slot.alpha);
        }

        debug!(
            "laid out {} items in {:?}, {} overflowing",
            self.items.len(),
            arrangement.grid,
            arrangement.overflow_count()
        );
    }

    /// Reacts to a drag on the handle
    pub fn handle_drag(
        &mut self,
        event: DragEvent,
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
    ) -> Result<(), ContainerError> {
        trace!("container handle event {:?}", event);
        match event {
            DragEvent::DragStart => {
                let clicked = self.settings.handle_clicked_emissive;
                let material = scene.material_mut(self.handle_material);
                material.set_alpha(1.0);
                material.set_emissive(clicked);
            }
            DragEvent::Drag { .. } => {
                self.scale_by_handle(scene, overlay)?;
            }
            DragEvent::DragEnd => {
                let resting = self.settings.handle_resting_emissive;
                let material = scene.material_mut(self.handle_material);
                material.set_alpha(self.settings.handle_alpha);
                material.set_emissive(resting);
            }
            DragEvent::Hover(hovered) => {
                if !self.gizmo.is_dragging() {
                    let alpha = if hovered { 1.0 } else { self.settings.handle_alpha };
                    scene.material_mut(self.handle_material).set_alpha(alpha);
                }
            }
        }
        Ok(())
    }

    /// Pointer pressed along `ray`
    pub fn pointer_down(
        &mut self,
        ray: &Ray,
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
    ) -> Result<bool, ContainerError> {
        match self.gizmo.pointer_down(ray, scene) {
            Some(event) => {
                self.handle_drag(event, scene, overlay)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Pointer moved to `ray`
    pub fn pointer_move(
        &mut self,
        ray: &Ray,
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
    ) -> Result<(), ContainerError> {
        if let Some(event) = self.gizmo.pointer_move(ray, scene) {
            self.handle_drag(event, scene, overlay)?;
        }
        Ok(())
    }

    /// Pointer released
    pub fn pointer_up(&mut self, scene: &mut Scene, overlay: &mut LabelOverlay) -> Result<(), ContainerError> {
        if let Some(event) = self.gizmo.pointer_up() {
            self.handle_drag(event, scene, overlay)?;
        }
        Ok(())
    }

    /// Moves the handle by `delta` within the ground plane, as a drag would
    pub fn drag_handle_by(
        &mut self,
        delta: Vector3<f32>,
        scene: &mut Scene,
        overlay: &mut LabelOverlay,
    ) -> Result<(), ContainerError> {
        if let Some(event) = self.gizmo.drag_by(delta, scene) {
            self.handle_drag(event, scene, overlay)?;
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn minimum_size(&self) -> f32 {
        self.minimum_size
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn settings(&self) -> &ContainerSettings {
        &self.settings
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The live wall mesh
    pub fn wall(&self) -> Option<MeshId> {
        self.wall
    }

    pub fn handle_node(&self) -> NodeId {
        self.handle
    }

    pub fn handle_mesh(&self) -> MeshId {
        self.handle_mesh
    }

    pub fn handle_material(&self) -> MaterialId {
        self.handle_material
    }

    pub fn is_dragging(&self) -> bool {
        self.gizmo.is_dragging()
    }

    pub fn label_slot(&self) -> NodeId {
        self.label_slot
    }

    pub fn label(&self) -> LabelId {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gfx::picking::AABB, space::settings::ItemSettings};
    use rand::{rngs::StdRng, SeedableRng};

    const EPSILON: f32 = 1e-4;

    fn setup() -> (Scene, LabelOverlay, Container) {
        let mut scene = Scene::new();
        let mut overlay = LabelOverlay::fullscreen("UI");
        let container = Container::new(&mut scene, &mut overlay, ContainerSettings::default()).unwrap();
        (scene, overlay, container)
    }

    fn make_items(scene: &mut Scene, overlay: &mut LabelOverlay, count: usize) -> Vec<Item> {
        let mut rng = StdRng::seed_from_u64(42);
        let settings = ItemSettings::default();
        (0..count)
            .map(|_| Item::new(scene, overlay, &settings, &mut rng))
            .collect()
    }

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray::new(Vector3::new(x, 100.0, z), Vector3::new(0.0, -1.0, 0.0))
    }

    fn wall_bounds(scene: &Scene, container: &Container) -> AABB {
        let wall = container.wall().unwrap();
        let transform = scene.mesh_world_transform(wall).unwrap();
        scene.mesh(wall).unwrap().mesh.local_bounds().transform(&transform)
    }

    #[test]
    fn test_new_container_defaults() {
        let (scene, overlay, container) = setup();

        assert_eq!(container.size(), Size::new(100.0, 50.0));
        assert_eq!(container.minimum_size(), 10.0);
        assert_eq!(scene.node_position(container.handle_node()), Vector3::new(104.0, 1.5, -54.0));
        assert_eq!(scene.node_position(container.label_slot()), Vector3::new(50.0, 1.5, -60.0));
        assert_eq!(overlay.label(container.label()).text(), "Container");
        assert_eq!(overlay.label(container.label()).linked_node(), Some(container.label_slot()));
        assert_eq!(scene.material(container.handle_material()).alpha(), 0.6);

        let wall = container.wall().unwrap();
        assert!(scene.is_live(wall));
        assert_eq!(scene.mesh(wall).unwrap().parent, Some(container.root()));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut scene = Scene::new();
        let mut overlay = LabelOverlay::fullscreen("UI");
        let result = Container::new(
            &mut scene,
            &mut overlay,
            ContainerSettings::default().with_depth(0.0),
        );
        assert!(matches!(result, Err(ContainerError::Settings(_))));
    }

    #[test]
    fn test_fifty_items_fill_ten_by_five() {
        let (mut scene, mut overlay, mut container) = setup();
        let items = make_items(&mut scene, &mut overlay, 50);
        container.set_items(&mut scene, &mut overlay, items).unwrap();

        assert_eq!(container.minimum_size(), 19.0);
        assert_eq!(container.size(), Size::new(154.0, 79.0));
        assert_eq!(scene.node_position(container.handle_node()), Vector3::new(158.0, 1.5, -83.0));

        for item in container.items() {
            assert_eq!(item.alpha(&scene), 1.0);
            assert_eq!(item.position(&scene).y, 0.0);
        }
        assert_eq!(container.items()[0].position(&scene), Vector3::new(9.5, 0.0, -9.5));
        assert_eq!(container.items()[49].position(&scene), Vector3::new(144.5, 0.0, -69.5));
    }

    #[test]
    fn test_items_fit_inside_wall() {
        let (mut scene, mut overlay, mut container) = setup();
        let items = make_items(&mut scene, &mut overlay, 7);
        container.set_items(&mut scene, &mut overlay, items).unwrap();

        let size = container.size();
        for item in container.items() {
            let position = scene.world_position(item.root());
            let half = item.size() / 2.0;
            assert!(position.x - half >= container.settings().thickness - EPSILON);
            assert!(position.x + half <= size.width - container.settings().thickness + EPSILON);
            assert!(-position.z + half <= size.height - container.settings().thickness + EPSILON);
        }
    }

    #[test]
    fn test_set_items_empty_keeps_size() {
        let (mut scene, mut overlay, mut container) = setup();
        let items = make_items(&mut scene, &mut overlay, 12);
        container.set_items(&mut scene, &mut overlay, items).unwrap();
        let size = container.size();
        let wall = container.wall();

        container.set_items(&mut scene, &mut overlay, Vec::new()).unwrap();
        assert_eq!(container.minimum_size(), 10.0);
        assert_eq!(container.size(), size);
        assert_eq!(container.wall(), wall);
        assert!(container.items().is_empty());
    }

    #[test]
    fn test_overflow_when_shrunk() {
        let (mut scene, mut overlay, mut container) = setup();
        let items = make_items(&mut scene, &mut overlay, 20);
        container.set_items(&mut scene, &mut overlay, items).unwrap();

        // 3 columns by 2 rows of 15 unit cells.
        container.set_size(&mut scene, &mut overlay, 49.0, 34.0).unwrap();

        let items = container.items();
        assert!(items[..6].iter().all(|item| item.alpha(&scene) == 1.0));
        assert!(items[..6].iter().all(|item| item.position(&scene).y == 0.0));

        let overflow: Vec<_> = items[6..].iter().map(|item| item.alpha(&scene)).collect();
        assert_eq!(overflow[0], 2.0);
        for pair in overflow.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert_eq!(items[6].position(&scene), Vector3::new(9.5, 10.0, -9.5));
    }

    #[test]
    fn test_set_size_is_idempotent() {
        let (mut scene, mut overlay, mut container) = setup();
        let items = make_items(&mut scene, &mut overlay, 9);
        container.set_items(&mut scene, &mut overlay, items).unwrap();

        container.set_size(&mut scene, &mut overlay, 80.0, 60.0).unwrap();
        let first_bounds = wall_bounds(&scene, &container);
        let first_positions: Vec<_> = container.items().iter().map(|i| i.position(&scene)).collect();
        let first_triangles = scene.get_statistics().total_triangles;

        container.set_size(&mut scene, &mut overlay, 80.0, 60.0).unwrap();
        let second_positions: Vec<_> = container.items().iter().map(|i| i.position(&scene)).collect();
        assert_eq!(first_positions, second_positions);
        assert_eq!(first_bounds, wall_bounds(&scene, &container));
        assert_eq!(first_triangles, scene.get_statistics().total_triangles);
    }

    #[test]
    fn test_set_size_replaces_wall() {
        let (mut scene, mut overlay, mut container) = setup();
        let meshes = scene.mesh_count();
        let first = container.wall().unwrap();

        let second = container.set_size(&mut scene, &mut overlay, 60.0, 40.0).unwrap();
        assert_ne!(first, second);
        assert!(!scene.is_live(first));
        assert!(scene.is_live(second));
        assert_eq!(scene.mesh_count(), meshes);

        let bounds = wall_bounds(&scene, &container);
        assert!((bounds.min.x - 0.0).abs() < EPSILON);
        assert!((bounds.max.x - 60.0).abs() < EPSILON);
        assert!((bounds.min.z + 40.0).abs() < EPSILON);
        assert!((bounds.max.z - 0.0).abs() < EPSILON);
        assert!((bounds.min.y - 0.0).abs() < EPSILON);
        assert!((bounds.max.y - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_size_raises_to_minimum() {
        let (mut scene, mut overlay, mut container) = setup();
        container.set_size(&mut scene, &mut overlay, 4.0, 30.0).unwrap();
        assert_eq!(container.size(), Size::new(10.0, 30.0));
    }

    #[test]
    fn test_scale_by_handle_clamps_and_snaps() {
        let (mut scene, mut overlay, mut container) = setup();
        let items = make_items(&mut scene, &mut overlay, 1);
        container.set_items(&mut scene, &mut overlay, items).unwrap();
        assert_eq!(container.minimum_size(), 19.0);

        scene.set_node_position(container.handle_node(), Vector3::new(9.0, 1.5, -60.0));
        container.scale_by_handle(&mut scene, &mut overlay).unwrap();

        assert_eq!(container.size(), Size::new(19.0, 56.0));
        assert_eq!(scene.node_position(container.handle_node()), Vector3::new(23.0, 1.5, -60.0));
    }

    #[test]
    fn test_small_items_keep_default_minimum() {
        let (mut scene, mut overlay, mut container) = setup();
        let mut rng = StdRng::seed_from_u64(3);
        let item = Item::new(&mut scene, &mut overlay, &ItemSettings::default().with_size(2.0, 1.0), &mut rng);
        assert_eq!(item.size(), 3.0);

        container.set_items(&mut scene, &mut overlay, vec![item]).unwrap();
        assert_eq!(container.minimum_size(), 10.0);
        assert_eq!(container.size(), Size::new(10.0, 10.0));
        assert_eq!(scene.node_position(container.handle_node()), Vector3::new(14.0, 1.5, -14.0));
    }

    #[test]
    fn test_drag_below_minimum_clamps_to_22() {
        let settings = ContainerSettings::default();
        let mut scene = Scene::new();
        let mut overlay = LabelOverlay::fullscreen("UI");
        let mut container = Container::new(&mut scene, &mut overlay, settings).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let item = Item::new(&mut scene, &mut overlay, &ItemSettings::default().with_size(12.0, 6.0), &mut rng);
        container.set_items(&mut scene, &mut overlay, vec![item]).unwrap();
        assert_eq!(container.minimum_size(), 22.0);

        let handle = scene.world_position(container.handle_node());
        let target_handle_x = 5.0 + container.settings().handle_offset();
        container
            .drag_handle_by(Vector3::new(target_handle_x - handle.x, 0.0, 0.0), &mut scene, &mut overlay)
            .unwrap();

        assert_eq!(container.size().width, 22.0);
        assert_eq!(scene.node_position(container.handle_node()).x, 26.0);
    }

    #[test]
    fn test_pointer_drag_resizes_and_highlights() {
        let (mut scene, mut overlay, mut container) = setup();
        let handle = scene.world_position(container.handle_node());

        assert!(container
            .pointer_down(&down_ray(handle.x, handle.z), &mut scene, &mut overlay)
            .unwrap());
        assert!(container.is_dragging());
        let material = scene.material(container.handle_material());
        assert_eq!(material.alpha(), 1.0);
        assert_eq!(material.emissive, [0.1, 0.1, 0.5]);

        container
            .pointer_move(&down_ray(handle.x + 20.0, handle.z - 10.0), &mut scene, &mut overlay)
            .unwrap();
        assert_eq!(container.size(), Size::new(120.0, 60.0));

        container.pointer_up(&mut scene, &mut overlay).unwrap();
        assert!(!container.is_dragging());
        let material = scene.material(container.handle_material());
        assert_eq!(material.alpha(), 0.6);
        assert_eq!(material.emissive, [0.1, 0.1, 0.25]);
    }

    #[test]
    fn test_pointer_miss_is_ignored() {
        let (mut scene, mut overlay, mut container) = setup();
        assert!(!container
            .pointer_down(&down_ray(0.0, 0.0), &mut scene, &mut overlay)
            .unwrap());
        assert_eq!(container.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_hover_highlights_handle() {
        let (mut scene, mut overlay, mut container) = setup();
        let handle = scene.world_position(container.handle_node());

        container
            .pointer_move(&down_ray(handle.x, handle.z), &mut scene, &mut overlay)
            .unwrap();
        assert_eq!(scene.material(container.handle_material()).alpha(), 1.0);

        container
            .pointer_move(&down_ray(0.0, 0.0), &mut scene, &mut overlay)
            .unwrap();
        assert_eq!(scene.material(container.handle_material()).alpha(), 0.6);
    }

    #[test]
    fn test_hover_restored_after_release() {
        let (mut scene, mut overlay, mut container) = setup();
        let handle = scene.world_position(container.handle_node());

        container
            .pointer_move(&down_ray(handle.x, handle.z), &mut scene, &mut overlay)
            .unwrap();
        container
            .pointer_down(&down_ray(handle.x, handle.z), &mut scene, &mut overlay)
            .unwrap();
        container
            .pointer_move(&down_ray(handle.x + 10.0, handle.z), &mut scene, &mut overlay)
            .unwrap();
        container.pointer_up(&mut scene, &mut overlay).unwrap();
        assert_eq!(scene.material(container.handle_material()).alpha(), 0.6);

        let handle = scene.world_position(container.handle_node());
        assert_eq!(handle, Vector3::new(114.0, 1.5, -54.0));
        container
            .pointer_move(&down_ray(handle.x + 0.5, handle.z), &mut scene, &mut overlay)
            .unwrap();
        assert_eq!(scene.material(container.handle_material()).alpha(), 1.0);
    }

    #[test]
    fn test_hover_ignored_while_dragging() {
        let (mut scene, mut overlay, mut container) = setup();
        container
            .handle_drag(DragEvent::DragStart, &mut scene, &mut overlay)
            .unwrap();
        // The gizmo is idle, so hover is honored.
        container
            .handle_drag(DragEvent::Hover(false), &mut scene, &mut overlay)
            .unwrap();
        assert_eq!(scene.material(container.handle_material()).alpha(), 0.6);

        let handle = scene.world_position(container.handle_node());
        container
            .pointer_down(&down_ray(handle.x, handle.z), &mut scene, &mut overlay)
            .unwrap();
        container
            .handle_drag(DragEvent::Hover(false), &mut scene, &mut overlay)
            .unwrap();
        assert_eq!(scene.material(container.handle_material()).alpha(), 1.0);
    }
}
