//! Text editing for the native element of Input and TextArea.
//!
//! [`TextEditor`] owns the cursor and turns key presses into candidate
//! values. It never stores the text: the value belongs to the caller, so a
//! change is returned as [`EditOutcome::Changed`] and only shows up once the
//! caller feeds it back.
//!
//! Cursor positions are character indices, not byte offsets.
//!
//! # Keys
//!
//! | key | effect |
//! |---|---|
//! | printable | insert at cursor (blocked at `max_length`) |
//! | Backspace / Delete | remove one char (Ctrl: one word) |
//! | ArrowLeft / ArrowRight | move one char (Ctrl: one word) |
//! | ArrowUp / ArrowDown | previous / next line (multiline only) |
//! | Home / End | start / end of line |
//! | Enter | newline (multiline only) |

use spark_signals::{Signal, signal};

use super::keyboard::KeyboardEvent;

/// What a key press did to the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Key not handled by the editor.
    Ignored,
    /// Cursor moved, text unchanged.
    Moved,
    /// Candidate new value.
    Changed(String),
}

impl EditOutcome {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

// =============================================================================
// Word / line helpers
// =============================================================================

/// Find the start of the word before `pos`.
/// A word is a run of alphanumeric characters.
pub fn find_word_start(chars: &[char], pos: usize) -> usize {
    let mut i = pos.min(chars.len());

    while i > 0 && !chars[i - 1].is_alphanumeric() {
        i -= 1;
    }
    while i > 0 && chars[i - 1].is_alphanumeric() {
        i -= 1;
    }

    i
}

/// Find the end of the word after `pos`.
pub fn find_word_end(chars: &[char], pos: usize) -> usize {
    let len = chars.len();
    let mut i = pos.min(len);

    while i < len && !chars[i].is_alphanumeric() {
        i += 1;
    }
    while i < len && chars[i].is_alphanumeric() {
        i += 1;
    }

    i
}

fn line_start(chars: &[char], pos: usize) -> usize {
    chars[..pos]
        .iter()
        .rposition(|&c| c == '\n')
        .map_or(0, |newline| newline + 1)
}

fn line_end(chars: &[char], pos: usize) -> usize {
    chars[pos..]
        .iter()
        .position(|&c| c == '\n')
        .map_or(chars.len(), |offset| pos + offset)
}

/// Line index and column of `pos`.
pub fn line_and_column(text: &str, pos: usize) -> (usize, usize) {
    let mut line = 0;
    let mut column = 0;
    for ch in text.chars().take(pos) {
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}

// =============================================================================
// Editor
// =============================================================================

/// Cursor and editing rules for one text element.
#[derive(Clone)]
pub struct TextEditor {
    cursor: Signal<usize>,
    multiline: bool,
    max_length: Option<usize>,
}

impl TextEditor {
    /// Single-line editor with the cursor at the end of `initial`.
    pub fn single_line(initial: &str) -> Self {
        Self::new(initial, false)
    }

    /// Multi-line editor with the cursor at the end of `initial`.
    pub fn multi_line(initial: &str) -> Self {
        Self::new(initial, true)
    }

    fn new(initial: &str, multiline: bool) -> Self {
        Self {
            cursor: signal(initial.chars().count()),
            multiline,
            max_length: None,
        }
    }

    /// Refuse insertions once the text holds `max_length` characters.
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Cursor position, clamped to `text`.
    ///
    /// The caller may have replaced the value since the last edit.
    pub fn cursor(&self, text: &str) -> usize {
        self.cursor.get().min(text.chars().count())
    }

    pub fn set_cursor(&self, pos: usize) {
        self.cursor.set(pos);
    }

    /// Move the cursor to the end of `text`.
    pub fn move_to_end(&self, text: &str) {
        self.cursor.set(text.chars().count());
    }

    /// Apply a key press to `text`.
    ///
    /// With `read_only` set, movement keys still work but nothing edits.
    pub fn apply(&self, text: &str, event: &KeyboardEvent, read_only: bool) -> EditOutcome {
        if !event.is_down() {
            return EditOutcome::Ignored;
        }

        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let pos = self.cursor.get().min(len);
        let ctrl = event.modifiers.ctrl;

        // Movement
        let target = match event.key.as_str() {
            "ArrowLeft" if ctrl => Some(find_word_start(&chars, pos)),
            "ArrowLeft" => Some(pos.saturating_sub(1)),
            "ArrowRight" if ctrl => Some(find_word_end(&chars, pos)),
            "ArrowRight" => Some((pos + 1).min(len)),
            "Home" if self.multiline => Some(line_start(&chars, pos)),
            "Home" => Some(0),
            "End" if self.multiline => Some(line_end(&chars, pos)),
            "End" => Some(len),
            "ArrowUp" if self.multiline => Some(self.vertical_target(&chars, pos, false)),
            "ArrowDown" if self.multiline => Some(self.vertical_target(&chars, pos, true)),
            _ => None,
        };
        if let Some(target) = target {
            self.cursor.set(target);
            return EditOutcome::Moved;
        }

        if read_only {
            return EditOutcome::Ignored;
        }

        match event.key.as_str() {
            "Backspace" => {
                if pos == 0 {
                    return EditOutcome::Moved;
                }
                let start = if ctrl { find_word_start(&chars, pos) } else { pos - 1 };
                self.remove(chars, start..pos, start)
            }
            "Delete" => {
                if pos >= len {
                    return EditOutcome::Moved;
                }
                let end = if ctrl { find_word_end(&chars, pos) } else { pos + 1 };
                self.remove(chars, pos..end, pos)
            }
            "Enter" if self.multiline => self.insert(chars, pos, '\n'),
            _ => match event.printable_char() {
                Some(ch) => self.insert(chars, pos, ch),
                None => EditOutcome::Ignored,
            },
        }
    }

    fn insert(&self, mut chars: Vec<char>, pos: usize, ch: char) -> EditOutcome {
        if let Some(max) = self.max_length {
            if chars.len() >= max {
                tracing::trace!(max, "insert blocked by max length");
                return EditOutcome::Moved;
            }
        }
        chars.insert(pos, ch);
        self.cursor.set(pos + 1);
        EditOutcome::Changed(chars.into_iter().collect())
    }

    fn remove(
        &self,
        mut chars: Vec<char>,
        range: std::ops::Range<usize>,
        new_pos: usize,
    ) -> EditOutcome {
        chars.drain(range);
        self.cursor.set(new_pos);
        EditOutcome::Changed(chars.into_iter().collect())
    }

    fn vertical_target(&self, chars: &[char], pos: usize, down: bool) -> usize {
        let start = line_start(chars, pos);
        let column = pos - start;

        if down {
            let end = line_end(chars, pos);
            if end >= chars.len() {
                return chars.len();
            }
            let next_start = end + 1;
            let next_end = line_end(chars, next_start);
            (next_start + column).min(next_end)
        } else {
            if start == 0 {
                return 0;
            }
            let prev_start = line_start(chars, start - 1);
            (prev_start + column).min(start - 1)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keyboard::Modifiers;

    fn key(name: &str) -> KeyboardEvent {
        KeyboardEvent::new(name)
    }

    fn ctrl(name: &str) -> KeyboardEvent {
        KeyboardEvent::with_modifiers(name, Modifiers::ctrl())
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_find_word_start() {
        let text = chars("hello world");
        assert_eq!(find_word_start(&text, 11), 6);
        assert_eq!(find_word_start(&text, 6), 0);
        assert_eq!(find_word_start(&text, 0), 0);
        assert_eq!(find_word_start(&chars("foo.bar"), 7), 4);
    }

    #[test]
    fn test_find_word_end() {
        let text = chars("hello world");
        assert_eq!(find_word_end(&text, 0), 5);
        assert_eq!(find_word_end(&text, 5), 11);
        assert_eq!(find_word_end(&text, 11), 11);
        assert_eq!(find_word_end(&text, 50), 11);
    }

    #[test]
    fn test_insert_at_cursor() {
        let editor = TextEditor::single_line("ac");
        editor.set_cursor(1);
        assert_eq!(
            editor.apply("ac", &key("b"), false),
            EditOutcome::Changed("abc".to_string())
        );
        assert_eq!(editor.cursor("abc"), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let editor = TextEditor::single_line("héllo");
        assert_eq!(
            editor.apply("héllo", &key("Backspace"), false),
            EditOutcome::Changed("héll".to_string())
        );

        editor.set_cursor(0);
        assert_eq!(
            editor.apply("héll", &key("Delete"), false),
            EditOutcome::Changed("éll".to_string())
        );

        // Nothing to delete at the edges
        assert_eq!(editor.apply("éll", &key("Backspace"), false), EditOutcome::Moved);
        editor.move_to_end("éll");
        assert_eq!(editor.apply("éll", &key("Delete"), false), EditOutcome::Moved);
    }

    #[test]
    fn test_word_deletion() {
        let editor = TextEditor::single_line("hello world");
        assert_eq!(
            editor.apply("hello world", &ctrl("Backspace"), false),
            EditOutcome::Changed("hello ".to_string())
        );
        assert_eq!(editor.cursor("hello "), 6);

        editor.set_cursor(0);
        assert_eq!(
            editor.apply("hello world", &ctrl("Delete"), false),
            EditOutcome::Changed(" world".to_string())
        );
    }

    #[test]
    fn test_max_length_blocks_insert() {
        let editor = TextEditor::single_line("abc").with_max_length(Some(3));
        assert_eq!(editor.apply("abc", &key("d"), false), EditOutcome::Moved);
        assert_eq!(
            editor.apply("abc", &key("Backspace"), false),
            EditOutcome::Changed("ab".to_string())
        );
        assert_eq!(
            editor.apply("ab", &key("d"), false),
            EditOutcome::Changed("abd".to_string())
        );
    }

    #[test]
    fn test_read_only_allows_movement_only() {
        let editor = TextEditor::single_line("secret");
        assert_eq!(editor.apply("secret", &key("x"), true), EditOutcome::Ignored);
        assert_eq!(editor.apply("secret", &key("Backspace"), true), EditOutcome::Ignored);
        assert_eq!(editor.apply("secret", &key("Home"), true), EditOutcome::Moved);
        assert_eq!(editor.cursor("secret"), 0);
    }

    #[test]
    fn test_enter_only_in_multiline() {
        let single = TextEditor::single_line("a");
        assert_eq!(single.apply("a", &key("Enter"), false), EditOutcome::Ignored);

        let multi = TextEditor::multi_line("a");
        assert_eq!(
            multi.apply("a", &key("Enter"), false),
            EditOutcome::Changed("a\n".to_string())
        );
    }

    #[test]
    fn test_multiline_navigation() {
        let text = "first\nab\nthird";
        let editor = TextEditor::multi_line(text);

        // End of "third" -> up lands on end of "ab" (shorter line)
        assert_eq!(editor.apply(text, &key("ArrowUp"), false), EditOutcome::Moved);
        assert_eq!(line_and_column(text, editor.cursor(text)), (1, 2));

        editor.apply(text, &key("ArrowUp"), false);
        assert_eq!(line_and_column(text, editor.cursor(text)), (0, 2));

        editor.apply(text, &key("End"), false);
        assert_eq!(editor.cursor(text), 5);

        editor.apply(text, &key("ArrowDown"), false);
        assert_eq!(line_and_column(text, editor.cursor(text)), (1, 2));

        editor.apply(text, &key("Home"), false);
        assert_eq!(editor.cursor(text), 6);
    }

    #[test]
    fn test_cursor_clamped_to_replaced_value() {
        let editor = TextEditor::single_line("long value");
        assert_eq!(editor.cursor("ab"), 2);
        assert_eq!(
            editor.apply("ab", &key("c"), false),
            EditOutcome::Changed("abc".to_string())
        );
    }

    #[test]
    fn test_command_keys_ignored() {
        let editor = TextEditor::single_line("");
        assert_eq!(editor.apply("", &ctrl("c"), false), EditOutcome::Ignored);
        assert_eq!(editor.apply("", &key("F5"), false), EditOutcome::Ignored);
        assert!(!EditOutcome::Ignored.is_handled());
    }
}
