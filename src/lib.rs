#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod drawable;
pub mod export;
pub mod history;
pub mod input;
pub mod preview;
pub mod renderer;
pub mod tools;

pub use app::{SketchApp, load_system_font};
pub use canvas::SketchCanvas;
pub use drawable::{Drawable, Stamp, Stroke};
pub use export::{ExportError, ExportOptions, export_png};
pub use history::History;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use preview::ToolPreview;
pub use renderer::Renderer;
pub use tools::ToolState;
