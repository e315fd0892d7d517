use egui::{Color32, Painter, Pos2, Vec2};

/// Freehand polyline captured from a single pointer gesture.
///
/// A stroke is created with one point at pointer-down and grows only by
/// appending at the tail while its gesture is in progress. After the
/// gesture ends it is immutable; undo removes it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Append a point at the tail.
    pub fn drag(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    pub fn draw(&self, painter: &Painter, origin: Vec2) {
        if self.points.len() > 1 {
            let line: Vec<Pos2> = self.points.iter().map(|p| *p + origin).collect();
            painter.add(egui::Shape::line(
                line,
                egui::Stroke::new(self.thickness, self.color),
            ));
        }
        // Cap discs round the line ends; they are also all a click leaves
        // behind, so a one-point stroke still shows a dot.
        if let Some(first) = self.points.first() {
            draw_cap(painter, *first + origin, self.thickness, self.color);
        }
        if self.points.len() > 1 {
            if let Some(last) = self.points.last() {
                draw_cap(painter, *last + origin, self.thickness, self.color);
            }
        }
    }
}

/// Filled disc of half the brush thickness. Shared by stroke end caps and
/// the brush preview so both always look the same.
pub(crate) fn draw_cap(painter: &Painter, center: Pos2, thickness: f32, color: Color32) {
    painter.circle_filled(center, thickness / 2.0, color);
}
