use eframe::egui;
use egui::{Key, PointerButton, Pos2, Rect, Slider};
use log::{error, info};

use crate::canvas::SketchCanvas;
use crate::export::{self, ExportOptions};
use crate::input::{InputEvent, InputHandler};
use crate::renderer::Renderer;

/// Logical edge length of the drawing surface, in ui points. Export scales
/// this up by `ExportOptions::scale`.
const CANVAS_SIZE: f32 = 256.0;

/// The UI glue layer: buttons, sliders, and the color picker are plain
/// egui widgets that call into [`SketchCanvas`]; nothing in here owns
/// drawing state of its own beyond widget scratch space.
pub struct SketchApp {
    canvas: SketchCanvas,
    renderer: Renderer,
    input: InputHandler,
    sticker_label: String,
    export_status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            canvas: SketchCanvas::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(Rect::NOTHING),
            sticker_label: String::new(),
            export_status: None,
        }
    }

    fn handle_event(&mut self, event: InputEvent, canvas_rect: Rect) {
        let local = |pos: Pos2| pos - canvas_rect.min.to_vec2();
        match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => {
                self.canvas.begin_gesture(local(location.position));
            }
            InputEvent::PointerMove { location } => {
                if location.is_in_canvas {
                    self.canvas.extend_gesture(local(location.position));
                } else {
                    self.canvas.cancel_gesture();
                }
            }
            InputEvent::PointerUp {
                location,
                button: PointerButton::Primary,
            } => {
                if location.is_in_canvas {
                    self.canvas.end_gesture(local(location.position));
                } else {
                    self.canvas.cancel_gesture();
                }
            }
            InputEvent::PointerLeave { .. } => self.canvas.cancel_gesture(),
            InputEvent::KeyDown { key: Key::Z, modifiers }
                if modifiers.command && modifiers.shift =>
            {
                self.canvas.redo();
            }
            InputEvent::KeyDown { key: Key::Z, modifiers } if modifiers.command => {
                self.canvas.undo();
            }
            InputEvent::KeyDown { key: Key::Y, modifiers } if modifiers.command => {
                self.canvas.redo();
            }
            _ => {}
        }
    }

    fn export(&mut self) {
        let font = load_system_font();
        match export::export_png(self.canvas.drawables(), ExportOptions::default(), font.as_ref())
        {
            Ok(bytes) => match std::fs::write("sketchbook-export.png", &bytes) {
                Ok(()) => {
                    info!("wrote sketchbook-export.png ({} bytes)", bytes.len());
                    self.export_status = Some("Saved sketchbook-export.png".to_owned());
                }
                Err(err) => {
                    error!("failed to write export file: {err}");
                    self.export_status = Some(format!("Save failed: {err}"));
                }
            },
            Err(err) => {
                error!("export failed: {err}");
                self.export_status = Some(format!("Export failed: {err}"));
            }
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Clear").clicked() {
                self.canvas.clear();
            }
            if ui
                .add_enabled(self.canvas.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.canvas.undo();
            }
            if ui
                .add_enabled(self.canvas.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.canvas.redo();
            }
            if ui.button("Export PNG").clicked() {
                self.export();
            }

            ui.separator();

            let mut thickness = self.canvas.tools().thickness();
            ui.label("Thickness:");
            if ui
                .add(Slider::new(&mut thickness, 1.0..=32.0))
                .changed()
            {
                self.canvas.set_thickness(thickness);
            }

            let mut color = self.canvas.tools().color();
            ui.label("Color:");
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                self.canvas.set_color(color);
            }
        });

        ui.horizontal_wrapped(|ui| {
            let in_stamp_mode = self.canvas.tools().stamp_mode();
            if ui.selectable_label(!in_stamp_mode, "🖌 Brush").clicked() {
                self.canvas.set_sticker("");
            }
            let stickers: Vec<String> = self.canvas.tools().stickers().to_vec();
            for sticker in stickers {
                let selected = self.canvas.tools().sticker() == sticker;
                if ui.selectable_label(selected, sticker.as_str()).clicked() {
                    self.canvas.set_sticker(sticker);
                }
            }

            ui.separator();
            ui.add(
                egui::TextEdit::singleline(&mut self.sticker_label)
                    .hint_text("custom sticker")
                    .desired_width(100.0),
            );
            if ui.button("Add").clicked() {
                let label = std::mem::take(&mut self.sticker_label);
                self.canvas.add_custom_sticker(&label);
            }

            if self.canvas.tools().stamp_mode() {
                let mut rotation = self.canvas.tools().rotation_deg();
                ui.label("Rotation:");
                if ui
                    .add(Slider::new(&mut rotation, 0.0..=359.0).suffix("°"))
                    .changed()
                {
                    self.canvas.set_rotation(rotation);
                }
            }

            if let Some(status) = &self.export_status {
                ui.separator();
                ui.label(status.clone());
            }
        });
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times
    /// per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(
                egui::vec2(CANVAS_SIZE, CANVAS_SIZE),
                egui::Sense::drag(),
            );
            let rect = response.rect;
            self.input.set_canvas_rect(rect);

            for event in self.input.process_input(ctx) {
                self.handle_event(event, rect);
            }

            self.renderer.repaint(&painter, rect, &self.canvas);
        });
    }
}

/// Find a font for rasterizing sticker text in exports. Checks a handful of
/// conventional install paths, outline emoji fonts first so the default
/// sticker palette renders; `None` makes a stamp-bearing export fail with
/// [`export::ExportError::NoFont`], and a font that lacks a sticker's glyph
/// fails it with [`export::ExportError::UnmappedGlyph`].
pub fn load_system_font() -> Option<ab_glyph::FontArc> {
    const CANDIDATES: &[&str] = &[
        "C:\\Windows\\Fonts\\seguiemj.ttf",
        "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
        "/usr/share/fonts/noto/NotoEmoji-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    for path in CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            match ab_glyph::FontArc::try_from_vec(bytes) {
                Ok(font) => return Some(font),
                Err(err) => log::warn!("unusable font at {path}: {err}"),
            }
        }
    }
    None
}
