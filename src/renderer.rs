use egui::{Color32, Painter, Rect};

use crate::canvas::SketchCanvas;

/// Full repaint of the drawing surface: background, every committed
/// drawable in insertion order (later work paints over earlier work), then
/// the live preview on top. There is no partial invalidation; every state
/// change repaints everything.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repaint(&self, painter: &Painter, rect: Rect, canvas: &SketchCanvas) {
        let painter = painter.with_clip_rect(rect);
        let origin = rect.min.to_vec2();

        painter.rect_filled(rect, 0.0, self.background);
        for drawable in canvas.drawables() {
            drawable.draw(&painter, origin);
        }
        canvas.preview().draw(&painter, canvas.tools(), origin);
    }
}
