use log::debug;

use crate::drawable::Drawable;

/// Ordered list of committed drawables plus the stack of undone ones.
///
/// `committed` order is z-order, bottom to top. Every live drawable sits in
/// exactly one of the two lists: undo moves the newest committed drawable
/// onto the redo buffer, redo moves it back, and committing new work drops
/// the redo buffer entirely.
#[derive(Debug, Default)]
pub struct History {
    committed: Vec<Drawable>,
    redo_buffer: Vec<Drawable>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable. Anything undone before this point can no longer
    /// be redone.
    pub fn commit(&mut self, drawable: Drawable) {
        self.redo_buffer.clear();
        self.committed.push(drawable);
        debug!("committed drawable ({} total)", self.committed.len());
    }

    /// Move the most recently committed drawable onto the redo buffer.
    /// Returns false (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo_buffer.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Re-append the most recently undone drawable. Returns false when the
    /// redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_buffer.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Drop everything, both committed and undone. No confirmation step.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
        debug!("history cleared");
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_buffer.len()
    }

    /// Mutable access to the drawable the current gesture is extending.
    pub(crate) fn active_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Stroke;
    use egui::{Color32, Pos2};

    fn dot(x: f32, y: f32) -> Drawable {
        Drawable::Stroke(Stroke::new(Pos2::new(x, y), 5.0, Color32::BLACK))
    }

    #[test]
    fn commit_clears_redo_buffer() {
        let mut history = History::new();
        history.commit(dot(1.0, 1.0));
        history.commit(dot(2.0, 2.0));
        assert!(history.undo());
        assert_eq!(history.redo_depth(), 1);

        history.commit(dot(3.0, 3.0));
        assert_eq!(history.redo_depth(), 0);
        assert!(!history.can_redo());
        assert_eq!(history.committed().len(), 2);
    }

    #[test]
    fn drawables_live_in_exactly_one_list() {
        let mut history = History::new();
        history.commit(dot(1.0, 1.0));
        assert_eq!(history.committed().len() + history.redo_depth(), 1);
        history.undo();
        assert_eq!(history.committed().len() + history.redo_depth(), 1);
        history.redo();
        assert_eq!(history.committed().len() + history.redo_depth(), 1);
    }

    #[test]
    fn undo_redo_on_empty_lists_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.committed().is_empty());
        assert_eq!(history.redo_depth(), 0);
    }
}
