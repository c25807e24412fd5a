#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod error;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod stroke;
pub mod tool;

pub use app::PaintApp;
pub use canvas::{Canvas, PaintItem};
pub use command::Command;
pub use error::{ExportError, ImportError, PaintError};
pub use history::StrokeHistory;
pub use id_generator::{GroupId, IdAllocator, IdSource, RandomIdSource, SeededIdSource};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use shape::Shape;
pub use state::{EditorState, PaintSettings};
pub use stroke::{Paint, Stroke, StrokeWidth};
pub use tool::{Tool, ToolKind};
