//! Renderer Module - Paint fields and write them to the terminal
//!
//! - [`FrameBuffer`]: 2D cell grid with drawing primitives
//! - [`paint_field`] / [`render_field`]: field view plus layout into cells
//! - [`TerminalRenderer`]: diff-based output through crossterm
//!
//! # Example
//!
//! ```ignore
//! use spark_fields::renderer::{TerminalRenderer, render_field};
//!
//! let mut terminal = TerminalRenderer::stdout();
//! let frame = render_field(&field.view(), 60)?;
//! terminal.render(&frame)?;
//! ```

mod buffer;
mod paint;
mod terminal;

pub use buffer::FrameBuffer;
pub use paint::{paint_field, render_field};
pub use terminal::{TerminalRenderer, to_color};
