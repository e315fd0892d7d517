use egui::{Painter, Pos2, Vec2};

use crate::drawable::{draw_cap, draw_glyph};
use crate::tools::ToolState;

/// Cursor-following indicator of the next mark. Transient state only: it is
/// never part of history and is reset on every pointer movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolPreview {
    pos: Pos2,
    visible: bool,
}

impl Default for ToolPreview {
    fn default() -> Self {
        Self {
            pos: Pos2::ZERO,
            visible: false,
        }
    }
}

impl ToolPreview {
    pub fn show_at(&mut self, pos: Pos2) {
        self.pos = pos;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    /// Stamp mode previews the glyph under the same transform a committed
    /// stamp uses; stroke mode previews the cap disc of the current brush.
    pub fn draw(&self, painter: &Painter, tools: &ToolState, origin: Vec2) {
        if !self.visible {
            return;
        }
        let pos = self.pos + origin;
        if tools.stamp_mode() {
            draw_glyph(painter, pos, tools.sticker(), tools.rotation_deg(), tools.color());
        } else {
            painter.circle_stroke(
                pos,
                tools.thickness() / 2.0,
                egui::Stroke::new(1.0, tools.color()),
            );
            draw_cap(painter, pos, tools.thickness(), tools.color());
        }
    }
}
