use egui::Color32;
use log::warn;

pub const DEFAULT_THICKNESS: f32 = 5.0;

/// Stickers available out of the box; the user can register more.
const DEFAULT_STICKERS: [&str; 3] = ["😊", "🌟", "❤"];

/// Current brush settings shared by the gesture tracker and the preview.
///
/// Exactly one mode is active at a time: an empty sticker string means the
/// stroke brush, anything else means stamp mode. Setters reject invalid
/// input silently (the previous valid state is kept) rather than erroring,
/// since every caller is a UI control.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    thickness: f32,
    color: Color32,
    sticker: String,
    rotation_deg: f32,
    stickers: Vec<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            color: Color32::BLACK,
            sticker: String::new(),
            rotation_deg: 0.0,
            stickers: DEFAULT_STICKERS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// The active sticker glyph; empty in stroke mode.
    pub fn sticker(&self) -> &str {
        &self.sticker
    }

    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    /// All registered sticker glyphs, defaults first.
    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn stamp_mode(&self) -> bool {
        !self.sticker.is_empty()
    }

    /// Non-positive or non-finite values keep the previous brush.
    pub fn set_thickness(&mut self, thickness: f32) {
        if thickness.is_finite() && thickness > 0.0 {
            self.thickness = thickness;
        } else {
            warn!("ignoring invalid brush thickness {thickness}");
        }
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Select a sticker glyph; the empty string reverts to the stroke brush.
    pub fn set_sticker(&mut self, sticker: impl Into<String>) {
        self.sticker = sticker.into();
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.rotation_deg = degrees;
        } else {
            warn!("ignoring non-finite sticker rotation");
        }
    }

    /// Register a new selectable sticker and switch to it. Blank labels are
    /// ignored; a label that already exists is selected, not duplicated.
    pub fn add_custom_sticker(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            warn!("ignoring empty custom sticker label");
            return;
        }
        if !self.stickers.iter().any(|s| s == label) {
            self.stickers.push(label.to_owned());
        }
        self.sticker = label.to_owned();
    }
}
