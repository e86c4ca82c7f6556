//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Widths come from `unicode-width`:
//! - ASCII characters: 1 cell
//! - CJK characters and most emoji: 2 cells
//! - Control and zero-width characters: 0 cells

use unicode_width::UnicodeWidthChar;

/// Display width of a character in terminal cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |width, c| width.saturating_add(char_width(c)))
}

/// Word-wrap text to a given width.
///
/// Breaks at the last space that fits, or mid-word when a single word is
/// wider than the line. Explicit newlines always break.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0u16;

        for word in paragraph.split(' ') {
            let word_width = string_width(word);
            let sep = u16::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            // Word longer than a line: hard break
            for c in word.chars() {
                let w = char_width(c);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }

        lines.push(current);
    }

    lines
}

/// Number of lines `text` occupies when wrapped to `width`.
pub fn measure_text_height(text: &str, width: u16) -> u16 {
    wrap_text(text, width).len().min(u16::MAX as usize) as u16
}

// =============================================================================
// Tests
// =============================================================================
