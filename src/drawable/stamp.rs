use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Vec2};

/// Logical glyph size before any export scaling.
pub(crate) const STAMP_FONT_SIZE: f32 = 24.0;

/// A positioned, rotatable text glyph placed by one gesture.
///
/// Stamps do not grow: they are created whole at gesture end with the
/// sticker text, rotation, and color current at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    pos: Pos2,
    text: String,
    rotation_deg: f32,
    color: Color32,
}

impl Stamp {
    pub fn new(pos: Pos2, text: impl Into<String>, rotation_deg: f32, color: Color32) -> Self {
        Self {
            pos,
            text: text.into(),
            rotation_deg,
            color,
        }
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Move the anchor. No input path calls this yet; it is the hook for
    /// drag-to-reposition.
    pub fn drag(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    pub fn draw(&self, painter: &Painter, origin: Vec2) {
        draw_glyph(
            painter,
            self.pos + origin,
            &self.text,
            self.rotation_deg,
            self.color,
        );
    }
}

/// Draw `text` centered on `anchor` and rotated about it. Shared by
/// committed stamps and the sticker preview.
pub(crate) fn draw_glyph(
    painter: &Painter,
    anchor: Pos2,
    text: &str,
    rotation_deg: f32,
    color: Color32,
) {
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(STAMP_FONT_SIZE),
        color,
    );
    let angle = rotation_deg.to_radians();
    // TextShape rotates about its top-left corner, so push that corner
    // back by the rotated half-extent to spin around the anchor instead.
    let pos = anchor - Rot2::from_angle(angle) * (galley.size() / 2.0);
    painter.add(TextShape::new(pos, galley, color).with_angle(angle));
}
