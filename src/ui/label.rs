//! # Anchored Labels
//!
//! Editable text labels that follow 3D anchors across the screen.
//!
//! A [`LabelOverlay`] is the single full-screen 2D layer every label lives
//! on. The scene bootstrap creates exactly one and passes it to each item and
//! container that wants a caption, so there is no process-wide UI state.

use cgmath::{Matrix4, Vector4};

use crate::gfx::scene::{NodeId, Scene};

/// Handle to a label on a [`LabelOverlay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(usize);

/// Visual style shared by every label on an overlay
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub font_family: String,
    pub height_px: f32,
    /// Width of one glyph, used to stretch labels to their text after edits
    pub glyph_width_px: f32,
    /// Width before the first edit
    pub default_width_px: f32,
    pub color: [f32; 4],
    pub background: [f32; 4],
    pub focused_background: [f32; 4],
    pub highlighter_opacity: f32,
    /// Border thickness in pixels
    pub thickness: f32,
    pub shadow_color: [f32; 4],
    pub shadow_blur: f32,
    pub select_all_on_focus: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_family: "Monospace".to_string(),
            height_px: 40.0,
            glyph_width_px: 12.0,
            default_width_px: 200.0,
            color: [1.0, 1.0, 1.0, 1.0],
            background: [0.0, 0.0, 0.0, 0.0],
            focused_background: [0.0, 0.0, 0.0, 0.4],
            highlighter_opacity: 0.2,
            thickness: 0.0,
            shadow_color: [0.0, 0.0, 0.0, 1.0],
            shadow_blur: 15.0,
            select_all_on_focus: true,
        }
    }
}

/// One editable text label
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    linked_node: Option<NodeId>,
    alpha: f32,
    width_px: f32,
    auto_stretch_width: bool,
    focused: bool,
    all_selected: bool,
}

impl Label {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn linked_node(&self) -> Option<NodeId> {
        self.linked_node
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    pub fn auto_stretch_width(&self) -> bool {
        self.auto_stretch_width
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// A label resolved to screen space for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLabel {
    pub id: LabelId,
    pub text: String,
    /// Center of the label in pixels, origin top-left
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub alpha: f32,
}

/// Full-screen 2D layer holding every label
#[derive(Debug, Clone)]
pub struct LabelOverlay {
    name: String,
    style: LabelStyle,
    labels: Vec<Label>,
    focused: Option<LabelId>,
}

impl LabelOverlay {
    pub fn new(name: &str, style: LabelStyle) -> Self {
        Self {
            name: name.to_string(),
            style,
            labels: Vec::new(),
            focused: None,
        }
    }

    /// Overlay with the default label style
    pub fn fullscreen(name: &str) -> Self {
        Self::new(name, LabelStyle::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Adds an unlinked, fully opaque label showing `default_text`
    pub fn add_label(&mut self, default_text: &str) -> LabelId {
        self.labels.push(Label {
            text: default_text.to_string(),
            linked_node: None,
            alpha: 1.0,
            width_px: self.style.default_width_px,
            auto_stretch_width: false,
            focused: false,
            all_selected: false,
        });
        LabelId(self.labels.len() - 1)
    }

    pub fn label(&self, id: LabelId) -> &Label {
        &self.labels[id.0]
    }

    /// Makes the label follow `node` on screen
    pub fn link_with_node(&mut self, id: LabelId, node: NodeId) {
        self.labels[id.0].linked_node = Some(node);
    }

    pub fn set_alpha(&mut self, id: LabelId, alpha: f32) {
        self.labels[id.0].alpha = alpha;
    }

    pub fn set_text(&mut self, id: LabelId, text: &str) {
        let label = &mut self.labels[id.0];
        label.text = text.to_string();
        label.all_selected = false;
        self.stretch(id);
    }

    /// Gives keyboard focus to `id`, taking it from any other label
    pub fn focus(&mut self, id: LabelId) {
        self.blur();
        let select_all = self.style.select_all_on_focus;
        let label = &mut self.labels[id.0];
        label.focused = true;
        label.all_selected = select_all;
        self.focused = Some(id);
    }

    pub fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            let label = &mut self.labels[previous.0];
            label.focused = false;
            label.all_selected = false;
        }
    }

    pub fn focused(&self) -> Option<LabelId> {
        self.focused
    }

    /// Types a character into the focused label, replacing a full selection
    pub fn type_char(&mut self, ch: char) {
        let Some(id) = self.focused else {
            return;
        };
        let label = &mut self.labels[id.0];
        if label.all_selected {
            label.text.clear();
            label.all_selected = false;
        }
        label.text.push(ch);
        self.stretch(id);
    }

    /// Deletes the last character (or the full selection) of the focused label
    pub fn backspace(&mut self) {
        let Some(id) = self.focused else {
            return;
        };
        let label = &mut self.labels[id.0];
        if label.all_selected {
            label.text.clear();
            label.all_selected = false;
        } else {
            label.text.pop();
        }
        self.stretch(id);
    }

    // Labels track their text width once edited.
    fn stretch(&mut self, id: LabelId) {
        let glyph = self.style.glyph_width_px;
        let padding = 2.0 * self.style.thickness;
        let label = &mut self.labels[id.0];
        label.auto_stretch_width = true;
        label.width_px = label.text.chars().count() as f32 * glyph + padding;
    }

    /// Resolves every linked label to pixel coordinates.
    ///
    /// Labels whose anchor is behind the camera are skipped.
    pub fn screen_positions(
        &self,
        scene: &Scene,
        view_proj: Matrix4<f32>,
        viewport: (f32, f32),
    ) -> Vec<ScreenLabel> {
        let (width, height) = viewport;

        self.labels
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                let node = label.linked_node?;
                let world = scene.world_position(node);
                let clip: Vector4<f32> = view_proj * world.extend(1.0);
                if clip.w <= 0.0 {
                    return None;
                }

                let ndc_x = clip.x / clip.w;
                let ndc_y = clip.y / clip.w;
                Some(ScreenLabel {
                    id: LabelId(index),
                    text: label.text.clone(),
                    center: [(ndc_x + 1.0) * 0.5 * width, (1.0 - ndc_y) * 0.5 * height],
                    size: [label.width_px, self.style.height_px],
                    alpha: label.alpha,
                })
            })
            .collect()
    }
}
