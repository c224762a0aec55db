//! # Plane Drag Gizmo
//!
//! Lets the pointer drag an anchor across a single plane. The pointer grabs
//! and hovers a pick mesh hung under the anchor. The gizmo moves the anchor
//! itself and reports what happened as [`DragEvent`]s; the owner decides how
//! to react (highlight, resize, clamp and snap back).
//!
//! Anchors only translate, so a world-space drag delta added to the anchor's
//! local position moves it by the same delta in world space, whatever its
//! parents are.

use cgmath::{InnerSpace, Vector3};
use log::trace;

use crate::gfx::{
    picking::{intersect_mesh, Ray},
    scene::{MeshId, NodeId, Scene},
};

/// Events produced by pointer input on a [`PlaneDragGizmo`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer grabbed the attached anchor
    DragStart,
    /// The anchor was moved by `delta` (always parallel to the drag plane)
    Drag { delta: Vector3<f32> },
    /// The pointer released the anchor
    DragEnd,
    /// The pointer started (`true`) or stopped (`false`) hovering the anchor
    Hover(bool),
}

#[derive(Debug, Clone, Copy)]
enum DragState {
    Idle,
    Dragging {
        plane_point: Vector3<f32>,
        last_hit: Vector3<f32>,
    },
}

/// Drag handle constrained to the plane with the given normal
#[derive(Debug, Clone)]
pub struct PlaneDragGizmo {
    normal: Vector3<f32>,
    attached: Option<NodeId>,
    pick_mesh: Option<MeshId>,
    state: DragState,
    hovered: bool,
}

impl PlaneDragGizmo {
    /// Create a gizmo dragging across the plane with normal `normal`
    pub fn new(normal: Vector3<f32>) -> Self {
        Self {
            normal: normal.normalize(),
            attached: None,
            pick_mesh: None,
            state: DragState::Idle,
            hovered: false,
        }
    }

    /// Attach to an anchor, grabbed and hovered through `pick_mesh`
    pub fn attach(&mut self, node: NodeId, pick_mesh: MeshId) {
        self.attached = Some(node);
        self.pick_mesh = Some(pick_mesh);
        self.state = DragState::Idle;
        self.hovered = false;
    }

    pub fn attached_node(&self) -> Option<NodeId> {
        self.attached
    }

    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Starts a drag when `ray` hits the attached anchor
    pub fn pointer_down(&mut self, ray: &Ray, scene: &Scene) -> Option<DragEvent> {
        let node = self.attached?;
        let center = scene.world_position(node);
        intersect_mesh(scene, ray, self.pick_mesh?)?;

        let last_hit = ray
            .intersect_plane(center, self.normal)
            .map(|t| ray.point_at(t))
            .unwrap_or(center);

        self.state = DragState::Dragging {
            plane_point: center,
            last_hit,
        };
        trace!("plane drag started at {:?}", last_hit);
        Some(DragEvent::DragStart)
    }

    /// Moves the anchor while dragging, otherwise tracks hover changes
    pub fn pointer_move(&mut self, ray: &Ray, scene: &mut Scene) -> Option<DragEvent> {
        let node = self.attached?;

        match self.state {
            DragState::Dragging {
                plane_point,
                last_hit,
            } => {
                let t = ray.intersect_plane(plane_point, self.normal)?;
                let hit = ray.point_at(t);
                self.state = DragState::Dragging {
                    plane_point,
                    last_hit: hit,
                };
                self.move_attached(node, hit - last_hit, scene)
            }
            DragState::Idle => {
                let hovered = intersect_mesh(scene, ray, self.pick_mesh?).is_some();
                if hovered == self.hovered {
                    return None;
                }
                self.hovered = hovered;
                Some(DragEvent::Hover(hovered))
            }
        }
    }

    /// Ends the current drag, if any.
    ///
    /// Hover is re-evaluated on the next move, which reports `Hover(true)`
    /// again if the pointer is still over the pick mesh.
    pub fn pointer_up(&mut self) -> Option<DragEvent> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        self.hovered = false;
        trace!("plane drag ended");
        Some(DragEvent::DragEnd)
    }

    /// Moves the anchor by `delta` projected onto the drag plane
    pub fn drag_by(&mut self, delta: Vector3<f32>, scene: &mut Scene) -> Option<DragEvent> {
        let node = self.attached?;
        self.move_attached(node, delta, scene)
    }

    fn move_attached(
        &self,
        node: NodeId,
        delta: Vector3<f32>,
        scene: &mut Scene,
    ) -> Option<DragEvent> {
        let in_plane = delta - self.normal * delta.dot(self.normal);
        let position = scene.node_position(node) + in_plane;
        scene.set_node_position(node, position);
        trace!("plane drag moved anchor by {:?}", in_plane);
        Some(DragEvent::Drag { delta: in_plane })
    }
}
