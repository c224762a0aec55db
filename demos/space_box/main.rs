//! # Space Box Demo
//!
//! Headless walkthrough of the space box: fifty items are handed to a
//! container, then the container's handle is dragged with simulated pointer
//! input, first to shrink the tray until items overflow and then past its
//! minimum size.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example space_box
//! ```

use anyhow::{Context, Result};
use cgmath::{Deg, Matrix4, Point3, Vector3, Vector4};
use log::info;
use spacebox::gfx::picking::pick_mesh;
use spacebox::prelude::*;

const VIEWPORT: (f32, f32) = (1280.0, 720.0);
const ITEM_COUNT: usize = 50;

/// Camera looking down at the container from the near side
fn camera() -> Matrix4<f32> {
    let view = Matrix4::look_at_rh(
        Point3::new(77.0, 160.0, 90.0),
        Point3::new(77.0, 0.0, -40.0),
        Vector3::unit_y(),
    );
    let projection = cgmath::perspective(Deg(45.0), VIEWPORT.0 / VIEWPORT.1, 0.1, 1000.0);
    projection * view
}

/// Pixel position of a world point, as a pointer would report it
fn project(point: Vector3<f32>, view_proj: Matrix4<f32>) -> Option<(f32, f32)> {
    let clip: Vector4<f32> = view_proj * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let (width, height) = VIEWPORT;
    Some((
        (clip.x / clip.w + 1.0) * 0.5 * width,
        (1.0 - clip.y / clip.w) * 0.5 * height,
    ))
}

fn pointer_ray(point: Vector3<f32>, view_proj: Matrix4<f32>) -> Result<Ray> {
    let screen = project(point, view_proj).context("point is behind the camera")?;
    Ray::from_screen(screen, VIEWPORT, view_proj).context("camera matrix is not invertible")
}

/// Drags the container's handle to `target` the way a user would
fn drag_handle(
    container: &mut Container,
    scene: &mut Scene,
    overlay: &mut LabelOverlay,
    target: Vector3<f32>,
    view_proj: Matrix4<f32>,
) -> Result<()> {
    let handle = scene.world_position(container.handle_node());

    let ray = pointer_ray(handle, view_proj)?;
    if let Some(hit) = pick_mesh(scene, &ray) {
        info!("pointer over mesh {:?} at {:?}", hit.mesh, hit.intersection_point);
    }
    container.pointer_move(&ray, scene, overlay)?;
    let grabbed = container.pointer_down(&ray, scene, overlay)?;
    anyhow::ensure!(grabbed, "pointer missed the handle at {:?}", handle);

    // A few intermediate moves, like a real drag.
    for step in 1..=4 {
        let t = step as f32 / 4.0;
        let point = handle + (target - handle) * t;
        container.pointer_move(&pointer_ray(point, view_proj)?, scene, overlay)?;
    }

    container.pointer_up(scene, overlay)?;
    Ok(())
}

fn log_state(label: &str, container: &Container, scene: &Scene) {
    let size = container.size();
    let overflow = container
        .items()
        .iter()
        .filter(|item| item.position(scene).y > 0.0)
        .count();
    info!(
        "{}: {:.1}x{:.1} (minimum {}), {} of {} items overflowing",
        label,
        size.width,
        size.height,
        container.minimum_size(),
        overflow,
        container.items().len()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let mut scene = Scene::new();
    let mut overlay = LabelOverlay::fullscreen("UI");
    let mut rng = rand::rng();

    let item_settings = ItemSettings::default();
    item_settings.validate().context("invalid item settings")?;
    let items: Vec<Item> = (0..ITEM_COUNT)
        .map(|_| Item::new(&mut scene, &mut overlay, &item_settings, &mut rng))
        .collect();

    let mut container = Container::new(&mut scene, &mut overlay, ContainerSettings::default())
        .context("failed to create container")?;
    container
        .set_items(&mut scene, &mut overlay, items)
        .context("failed to assign items")?;
    log_state("after set_items", &container, &scene);

    let view_proj = camera();

    let shrink_to = scene.world_position(container.handle_node()) + Vector3::new(-60.0, 0.0, 30.0);
    drag_handle(&mut container, &mut scene, &mut overlay, shrink_to, view_proj)?;
    log_state("after shrinking", &container, &scene);

    drag_handle(&mut container, &mut scene, &mut overlay, Vector3::new(0.0, 1.5, 0.0), view_proj)?;
    log_state("after dragging past the minimum", &container, &scene);

    let labels = overlay.screen_positions(&scene, view_proj, VIEWPORT);
    info!("{} of {} labels on screen", labels.len(), overlay.len());
    if let Some(caption) = labels.iter().find(|label| label.id == container.label()) {
        info!("'{}' drawn at {:?}", caption.text, caption.center);
    }

    let stats = scene.get_statistics();
    info!(
        "scene: {} anchors, {} meshes, {} materials, {} triangles, {} vertices",
        stats.node_count, stats.object_count, stats.material_count, stats.total_triangles, stats.total_vertices
    );

    Ok(())
}
