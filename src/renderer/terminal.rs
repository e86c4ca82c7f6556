//! Differential terminal output.
//!
//! The TerminalRenderer compares each frame to the previous one and writes
//! only the cells that changed, wrapped in a synchronized update so the
//! terminal never shows a half-drawn field.
//!
//! # Algorithm
//!
//! 1. Begin a synchronized update
//! 2. For each cell: skip it if the previous frame had the same cell,
//!    otherwise move there (when not already there) and print it, emitting
//!    color and attribute changes only when they differ from the last cell
//! 3. End the synchronized update and flush once
//! 4. Keep the frame for the next comparison

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use crate::error::RenderError;
use crate::types::{Attr, Cell, Rgba};

use super::buffer::FrameBuffer;

/// Map a cell color to a crossterm color.
pub fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

fn queue_attrs<W: Write>(out: &mut W, attrs: Attr) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    for (flag, attribute) in [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
    ] {
        if attrs.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Style and cursor position last written, to skip redundant sequences.
#[derive(Debug, Default)]
struct PenState {
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    attrs: Option<Attr>,
    position: Option<(u16, u16)>,
}

impl PenState {
    fn write_cell<W: Write>(&mut self, out: &mut W, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.position != Some((x, y)) {
            queue!(out, MoveTo(x, y))?;
        }

        if self.attrs != Some(cell.attrs) {
            queue_attrs(out, cell.attrs)?;
            self.attrs = Some(cell.attrs);
            // Attribute reset clears colors too
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(cell.fg) {
            queue!(out, SetForegroundColor(to_color(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(out, SetBackgroundColor(to_color(cell.bg)))?;
            self.bg = Some(cell.bg);
        }

        let ch = char::from_u32(cell.char).unwrap_or(' ');
        queue!(out, Print(ch))?;

        let advance = crate::layout::char_width(ch).max(1);
        self.position = Some((x.saturating_add(advance), y));
        Ok(())
    }
}

/// Differential renderer writing to any `Write` target.
pub struct TerminalRenderer<W: Write> {
    out: W,
    previous: Option<FrameBuffer>,
}

impl TerminalRenderer<io::Stdout> {
    /// Renderer on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: None,
        }
    }

    /// Render a frame, writing only changed cells.
    ///
    /// Returns true if any cells were written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> Result<bool, RenderError> {
        let previous = self
            .previous
            .take()
            .filter(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut pen = PenState::default();
        let mut has_changes = false;

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                // Continuation cells are covered by the wide char before them
                if cell.char == 0 {
                    continue;
                }
                let unchanged = previous
                    .as_ref()
                    .and_then(|prev| prev.get(x, y))
                    .is_some_and(|prev| cells_equal(prev, cell));
                if unchanged {
                    continue;
                }

                has_changes = true;
                pen.write_cell(&mut self.out, x, y, cell)?;
            }
        }

        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;

        tracing::trace!(
            width = buffer.width(),
            height = buffer.height(),
            has_changes,
            "frame rendered"
        );

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Force a full redraw (no diffing).
    ///
    /// Use this after a terminal resize or when the screen is corrupted.
    pub fn render_full(&mut self, buffer: &FrameBuffer) -> Result<(), RenderError> {
        self.invalidate();
        self.render(buffer)?;
        Ok(())
    }

    /// Forget the previous frame; the next render redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter the alternate screen with the cursor hidden.
    pub fn enter_fullscreen(&mut self) -> Result<(), RenderError> {
        queue!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Leave the alternate screen and restore the cursor.
    pub fn exit_fullscreen(&mut self) -> Result<(), RenderError> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Show,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Fast cell equality check.
#[inline]
fn cells_equal(a: &Cell, b: &Cell) -> bool {
    a.char == b.char && a.attrs == b.attrs && a.fg == b.fg && a.bg == b.bg
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn written(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(to_color(Rgba::ansi(12)), Color::AnsiValue(12));
        assert_eq!(
            to_color(Rgba::rgb(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_cells_equal() {
        let a = Cell {
            char: 'X' as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::BOLD,
        };
        let same = a;
        assert!(cells_equal(&a, &same));
        let b = Cell {
            char: 'Y' as u32,
            ..a
        };
        assert!(!cells_equal(&a, &b));
    }

    #[test]
    fn test_first_render_writes_everything() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let mut buffer = FrameBuffer::new(4, 1);
        buffer.draw_text(0, 0, "ab", Rgba::WHITE, Attr::NONE, None);

        assert!(renderer.render(&buffer).unwrap());
        assert!(renderer.has_previous());
        let out = written(renderer);
        assert!(out.contains('a'));
        assert!(out.contains('b'));
    }

    #[test]
    fn test_unchanged_frame_writes_no_cells() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let mut buffer = FrameBuffer::new(4, 1);
        buffer.draw_text(0, 0, "ab", Rgba::WHITE, Attr::NONE, None);

        renderer.render(&buffer).unwrap();
        assert!(!renderer.render(&buffer).unwrap());

        buffer.draw_text(3, 0, "z", Rgba::WHITE, Attr::NONE, None);
        assert!(renderer.render(&buffer).unwrap());
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&FrameBuffer::new(4, 1)).unwrap();
        assert!(renderer.render(&FrameBuffer::new(5, 1)).unwrap());
    }

    #[test]
    fn test_invalidate() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        let buffer = FrameBuffer::new(2, 1);
        renderer.render(&buffer).unwrap();
        renderer.invalidate();
        assert!(!renderer.has_previous());
        assert!(renderer.render(&buffer).unwrap());
    }
}
