//! Painting a laid-out field into a FrameBuffer.
//!
//! Colors come from the active theme through [`variant_style`]. The border
//! tracks the field state: disabled, then error, then focus.

use crate::error::RenderError;
use crate::layout::{char_width, layout_field, wrap_text};
use crate::primitives::frame::FrameLayout;
use crate::primitives::view::{ControlKind, ControlView, FieldView};
use crate::theme::{Variant, variant_style};
use crate::types::{Attr, Rect};

use super::buffer::FrameBuffer;

/// Lay out and paint one field into a fresh buffer `width` cells wide.
pub fn render_field(view: &FieldView, width: u16) -> Result<FrameBuffer, RenderError> {
    let layout = layout_field(view, width)?;
    let mut buffer = FrameBuffer::new(width, layout.bounds.height);
    paint_field(&mut buffer, view, &layout, (0, 0));
    Ok(buffer)
}

fn shift(rect: Rect, origin: (u16, u16)) -> Rect {
    Rect::new(
        rect.x.saturating_add(origin.0),
        rect.y.saturating_add(origin.1),
        rect.width,
        rect.height,
    )
}

/// Paint a field whose layout was computed at (0, 0) with its top-left
/// corner at `origin`.
pub fn paint_field(buffer: &mut FrameBuffer, view: &FieldView, layout: &FrameLayout, origin: (u16, u16)) {
    let at = |rect: Rect| shift(rect, origin);

    if let (Some(rect), Some(label)) = (layout.label, &view.frame.label) {
        let style = variant_style(if view.control.disabled {
            Variant::Disabled
        } else {
            Variant::Default
        });
        let rect = at(rect);
        buffer.draw_text(rect.x, rect.y, label, style.fg, Attr::BOLD, Some(&rect));
    }

    if let (Some(rect), Some(marker)) = (layout.label_optional, &view.frame.label_optional) {
        let rect = at(rect);
        let fg = variant_style(Variant::Muted).fg;
        buffer.draw_text(rect.x, rect.y, marker, fg, Attr::NONE, Some(&rect));
    }

    paint_control(buffer, view, layout, origin);

    if let (Some(rect), Some(counter)) = (layout.counter, &view.counter) {
        let fg = variant_style(Variant::Muted).fg;
        buffer.draw_text_right(at(rect), at(rect).y, counter, fg, Attr::NONE);
    }

    if let (Some(rect), Some(error)) = (layout.error, &view.frame.error) {
        paint_wrapped(buffer, at(rect), error, Variant::Error);
    }

    if let (Some(rect), Some(description)) = (layout.description, &view.frame.description) {
        paint_wrapped(buffer, at(rect), description, Variant::Muted);
    }
}

fn paint_wrapped(buffer: &mut FrameBuffer, rect: Rect, text: &str, variant: Variant) {
    let fg = variant_style(variant).fg;
    for (row, line) in wrap_text(text, rect.width).iter().enumerate() {
        let y = rect.y.saturating_add(row as u16);
        if y >= rect.bottom() {
            break;
        }
        buffer.draw_text(rect.x, y, line, fg, Attr::NONE, Some(&rect));
    }
}

fn border_variant(view: &FieldView) -> Variant {
    if view.control.disabled {
        Variant::Disabled
    } else if view.frame.has_error() {
        Variant::Error
    } else if view.control.focused {
        Variant::Primary
    } else {
        Variant::Default
    }
}

fn paint_control(buffer: &mut FrameBuffer, view: &FieldView, layout: &FrameLayout, origin: (u16, u16)) {
    let control = &view.control;

    buffer.draw_border(
        shift(layout.control, origin),
        variant_style(border_variant(view)).border,
    );

    if let (Some(rect), Some(icon)) = (layout.icon, &control.icon) {
        let rect = shift(rect, origin);
        let variant = if control.style.error {
            Variant::Error
        } else {
            Variant::Muted
        };
        let fg = variant_style(variant).fg;
        buffer.draw_text(rect.x, rect.y, icon.glyph(), fg, Attr::NONE, Some(&rect));
    }

    paint_text(buffer, control, shift(layout.text, origin));

    for (action, rect) in control.actions.iter().zip(&layout.actions) {
        let rect = shift(*rect, origin);
        let variant = if control.disabled {
            Variant::Disabled
        } else {
            action.variant
        };
        let fg = variant_style(variant).fg;
        let button = format!("[{}]", action.label);
        buffer.draw_text(rect.x, rect.y, &button, fg, Attr::NONE, Some(&rect));
    }
}

/// Slice of `line` that keeps `cursor` (a char column) inside `width` cells.
///
/// Returns the visible text and the cursor's cell offset within it.
fn visible_line(line: &str, cursor: Option<usize>, width: u16) -> (String, Option<u16>) {
    let chars: Vec<char> = line.chars().collect();
    let width_of = |slice: &[char]| {
        slice
            .iter()
            .fold(0u16, |total, c| total.saturating_add(char_width(*c)))
    };

    let mut start = 0;
    if let Some(column) = cursor {
        let column = column.min(chars.len());
        // Leave one cell for the cursor itself
        while start < column && width_of(&chars[start..column]) >= width {
            start += 1;
        }
    }

    let mut visible = String::new();
    let mut used = 0u16;
    for c in &chars[start..] {
        let w = char_width(*c);
        if used.saturating_add(w) > width {
            break;
        }
        visible.push(*c);
        used = used.saturating_add(w);
    }

    let cursor_x = cursor.map(|column| width_of(&chars[start..column.min(chars.len())]));
    (visible, cursor_x)
}

fn paint_text(buffer: &mut FrameBuffer, control: &ControlView, rect: Rect) {
    if rect.is_empty() {
        return;
    }

    let cursor = if control.focused && !control.disabled {
        control.cursor
    } else {
        None
    };

    if control.shows_placeholder() {
        let placeholder = control.placeholder.as_deref().unwrap_or_default();
        let fg = variant_style(Variant::Muted).fg;
        buffer.draw_text(rect.x, rect.y, placeholder, fg, Attr::NONE, Some(&rect));
        if cursor.is_some() {
            paint_cursor(buffer, rect.x, rect.y, &rect);
        }
        return;
    }

    let variant = if control.disabled {
        Variant::Disabled
    } else {
        Variant::Default
    };
    let fg = variant_style(variant).fg;

    let lines: Vec<&str> = match control.kind {
        ControlKind::SingleLine => vec![control.text.as_str()],
        ControlKind::MultiLine { .. } => control.text.split('\n').collect(),
    };

    let rows = usize::from(rect.height);
    let first = match cursor {
        Some((line, _)) if line >= rows => line + 1 - rows,
        _ => 0,
    };

    for (row, line) in lines.iter().skip(first).take(rows).enumerate() {
        let index = first + row;
        let column = cursor.filter(|(line, _)| *line == index).map(|(_, col)| col);
        let (visible, cursor_x) = visible_line(line, column, rect.width);
        let y = rect.y.saturating_add(row as u16);

        buffer.draw_text(rect.x, y, &visible, fg, Attr::NONE, Some(&rect));
        if let Some(offset) = cursor_x {
            paint_cursor(buffer, rect.x.saturating_add(offset), y, &rect);
        }
    }
}

fn paint_cursor(buffer: &mut FrameBuffer, x: u16, y: u16, clip: &Rect) {
    if !clip.contains(x, y) {
        return;
    }
    if let Some(cell) = buffer.get_mut(x, y) {
        cell.attrs |= Attr::INVERSE;
    }
}

// =============================================================================
// Tests
// =============================================================================
