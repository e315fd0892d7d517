use egui::Pos2;
use log::debug;

use crate::drawable::{Drawable, Stamp, Stroke};
use crate::history::History;
use crate::preview::ToolPreview;
use crate::tools::ToolState;

/// The owned drawing context: committed history, current tool settings, the
/// live preview, and the in-progress gesture flag.
///
/// All mutation goes through these methods, each of which bumps
/// `revision()`, so collaborators poll one counter for "state changed"
/// instead of registering callbacks. Everything runs synchronously inside
/// the caller's UI tick; nothing here blocks or defers work.
#[derive(Debug, Default)]
pub struct SketchCanvas {
    history: History,
    tools: ToolState,
    preview: ToolPreview,
    drawing: bool,
    revision: u64,
}

impl SketchCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    // --- gesture surface ------------------------------------------------

    /// Pointer down. In stroke mode this immediately commits a one-point
    /// stroke that the rest of the gesture extends, so even a plain click
    /// leaves a mark. In stamp mode the stamp is created at gesture end
    /// instead, and the preview keeps tracking until then.
    pub fn begin_gesture(&mut self, pos: Pos2) {
        self.drawing = true;
        if self.tools.stamp_mode() {
            self.preview.show_at(pos);
        } else {
            self.history.commit(Drawable::Stroke(Stroke::new(
                pos,
                self.tools.thickness(),
                self.tools.color(),
            )));
            // The growing stroke is its own feedback.
            self.preview.hide();
        }
        self.touch();
    }

    /// Pointer moved. Extends the active stroke while one is growing;
    /// otherwise just moves the preview.
    pub fn extend_gesture(&mut self, pos: Pos2) {
        if self.drawing && !self.tools.stamp_mode() {
            if let Some(active) = self.history.active_mut() {
                active.drag(pos);
            }
            self.preview.hide();
        } else {
            self.preview.show_at(pos);
        }
        self.touch();
    }

    /// Pointer up. Commits the pending stamp in stamp mode; a stroke was
    /// already committed at gesture start. Ignored when no gesture is in
    /// progress (a stray release, or one already ended by `cancel_gesture`).
    pub fn end_gesture(&mut self, pos: Pos2) {
        if !self.drawing {
            return;
        }
        self.drawing = false;
        if self.tools.stamp_mode() {
            self.history.commit(Drawable::Stamp(Stamp::new(
                pos,
                self.tools.sticker(),
                self.tools.rotation_deg(),
                self.tools.color(),
            )));
            self.preview.show_at(pos);
        }
        self.touch();
    }

    /// Pointer left the drawing surface. Ends any gesture without
    /// committing anything new and hides the preview. A stroke keeps what
    /// it captured before the pointer left.
    pub fn cancel_gesture(&mut self) {
        self.drawing = false;
        self.preview.hide();
        self.touch();
    }

    // --- commands -------------------------------------------------------
    //
    // Each command first abandons any gesture in flight. Undo, redo, and
    // clear all change which drawable sits at the tail of the committed
    // list, and a still-live gesture would otherwise extend that new tail,
    // mutating work that was committed long before the gesture started.

    pub fn undo(&mut self) {
        if self.drawing {
            self.cancel_gesture();
        }
        if self.history.undo() {
            debug!("undo ({} committed left)", self.history.committed().len());
            self.touch();
        }
    }

    pub fn redo(&mut self) {
        if self.drawing {
            self.cancel_gesture();
        }
        if self.history.redo() {
            debug!("redo ({} committed)", self.history.committed().len());
            self.touch();
        }
    }

    /// Drop the whole drawing, undone parts included. No confirmation.
    pub fn clear(&mut self) {
        if self.drawing {
            self.cancel_gesture();
        }
        self.history.clear();
        self.touch();
    }

    // --- tool controls --------------------------------------------------

    pub fn set_thickness(&mut self, thickness: f32) {
        self.tools.set_thickness(thickness);
        self.touch();
    }

    pub fn set_color(&mut self, color: egui::Color32) {
        self.tools.set_color(color);
        self.touch();
    }

    pub fn set_sticker(&mut self, sticker: impl Into<String>) {
        self.tools.set_sticker(sticker);
        self.touch();
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.tools.set_rotation(degrees);
        self.touch();
    }

    pub fn add_custom_sticker(&mut self, label: &str) {
        self.tools.add_custom_sticker(label);
        self.touch();
    }

    // --- accessors ------------------------------------------------------

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn preview(&self) -> &ToolPreview {
        &self.preview
    }

    /// The committed drawables, bottom to top.
    pub fn drawables(&self) -> &[Drawable] {
        self.history.committed()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Bumped by every mutating call. Collaborators compare against the
    /// last value they saw to decide whether to repaint or refresh button
    /// enabled states.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
