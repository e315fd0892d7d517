use egui::{Painter, Pos2, Vec2};

mod stamp;
mod stroke;

pub use stamp::Stamp;
pub use stroke::Stroke;

pub(crate) use stamp::{STAMP_FONT_SIZE, draw_glyph};
pub(crate) use stroke::draw_cap;

/// A committed visual unit: either a freehand stroke or a placed sticker.
///
/// A closed set dispatched by pattern match, so adding a variant forces
/// every operation to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Stamp(Stamp),
}

impl Drawable {
    /// Paint this drawable at its recorded position, offset by `origin`
    /// (the screen position of the canvas top-left corner).
    pub fn draw(&self, painter: &Painter, origin: Vec2) {
        match self {
            Drawable::Stroke(s) => s.draw(painter, origin),
            Drawable::Stamp(s) => s.draw(painter, origin),
        }
    }

    /// Retarget toward `pos`: a stroke grows by one point, a stamp moves
    /// its anchor.
    pub fn drag(&mut self, pos: Pos2) {
        match self {
            Drawable::Stroke(s) => s.drag(pos),
            Drawable::Stamp(s) => s.drag(pos),
        }
    }
}
