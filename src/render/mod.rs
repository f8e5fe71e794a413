//! Presentation: the drawing-sink seam, colour themes, and the terminal
//! surface the game is drawn onto

pub mod canvas;
pub mod renderer;
pub mod sink;
pub mod theme;

pub use canvas::TerminalCanvas;
pub use renderer::Renderer;
pub use sink::{DrawSink, Region, TextAlign};
pub use theme::{Palette, Rgb, Theme};
