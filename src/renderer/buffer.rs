//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed. Fields are painted into it, then the terminal renderer writes
//! the cells that changed.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: drawing functions accept an optional clip [`Rect`].
//! - **Wide characters**: the cell after a wide character holds a
//!   continuation marker (`char == 0`).

use crate::layout::{char_width, string_width};
use crate::types::{Attr, Cell, Rect, Rgba};

/// Box-drawing characters: horizontal, vertical, corners (tl, tr, br, bl).
const BORDER_ROUNDED: (char, char, char, char, char, char) = ('─', '│', '╭', '╮', '╯', '╰');

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Text of one row, continuation cells skipped. Used by tests and logs.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| cell.char != 0)
            .filter_map(|cell| char::from_u32(cell.char))
            .collect()
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell. Returns true if the cell was inside bounds and clip.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if let Some(clip) = clip {
            if !clip.contains(x, y) {
                return false;
            }
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.char = ch as u32;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.attrs = attrs;
        true
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (wide characters count as 2).
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        attrs: Attr,
        clip: Option<&Rect>,
    ) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let w = char_width(ch);
            if w == 0 {
                continue;
            }

            if self.set_cell(col, y, ch, fg, None, attrs, clip) && w == 2 {
                let in_clip = clip.is_none_or(|c| c.contains(col + 1, y));
                if in_clip {
                    if let Some(next) = self.get_mut(col + 1, y) {
                        next.char = 0;
                        next.fg = fg;
                        next.attrs = attrs;
                    }
                }
            }

            col = col.saturating_add(w);
        }

        col.saturating_sub(x)
    }

    /// Draw text right-aligned within a rect row.
    pub fn draw_text_right(&mut self, rect: Rect, y: u16, text: &str, fg: Rgba, attrs: Attr) -> u16 {
        let text_width = string_width(text);
        let offset = rect.width.saturating_sub(text_width);
        self.draw_text(rect.x + offset, y, text, fg, attrs, Some(&rect))
    }

    /// Draw a rounded border around a rectangle.
    pub fn draw_border(&mut self, rect: Rect, color: Rgba) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = BORDER_ROUNDED;
        let x2 = rect.x + rect.width - 1;
        let y2 = rect.y + rect.height - 1;

        self.set_cell(rect.x, rect.y, tl, color, None, Attr::NONE, None);
        self.set_cell(x2, rect.y, tr, color, None, Attr::NONE, None);
        self.set_cell(x2, y2, br, color, None, Attr::NONE, None);
        self.set_cell(rect.x, y2, bl, color, None, Attr::NONE, None);

        for col in (rect.x + 1)..x2 {
            self.set_cell(col, rect.y, horiz, color, None, Attr::NONE, None);
            self.set_cell(col, y2, horiz, color, None, Attr::NONE, None);
        }
        for row in (rect.y + 1)..y2 {
            self.set_cell(rect.x, row, vert, color, None, Attr::NONE, None);
            self.set_cell(x2, row, vert, color, None, Attr::NONE, None);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
