//! Clipboard Module - Text copy capability for form controls
//!
//! The copy action of an input hands its value to a [`Clipboard`]. A write
//! reports its outcome through a completion callback, which the
//! implementation may call before returning or later on the UI thread.
//!
//! # Implementations
//!
//! - [`BufferClipboard`] - in-process buffer, always succeeds
//! - [`SystemClipboard`] - OS clipboard via arboard (feature `system-clipboard`)
//! - [`UnavailableClipboard`] - always fails
//!
//! # Example
//!
//! ```ignore
//! use spark_fields::state::clipboard::{self, BufferClipboard, Clipboard};
//!
//! BufferClipboard.write_text("Hello", Box::new(|result| {
//!     assert!(result.is_ok());
//! }));
//! assert_eq!(clipboard::paste(), Some("Hello".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ClipboardError;

/// Completion callback for a clipboard write.
pub type ClipboardCallback = Box<dyn FnOnce(Result<(), ClipboardError>)>;

/// A place text can be copied to.
pub trait Clipboard {
    /// Place `text` on the clipboard and report the outcome through `done`.
    ///
    /// `done` must be called at most once.
    fn write_text(&self, text: &str, done: ClipboardCallback);
}

// =============================================================================
// Internal Buffer
// =============================================================================

thread_local! {
    /// In-process clipboard buffer.
    static CLIPBOARD_BUFFER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Copy text into the in-process buffer, replacing what was there.
///
/// An empty string is stored too, so a successful write always matches what
/// `paste` returns.
pub fn copy(text: &str) {
    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = Some(text.to_string());
    });
}

/// Most recently copied text, or None if the buffer is empty.
pub fn paste() -> Option<String> {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().clone())
}

/// Clear the in-process buffer.
pub fn clear() {
    CLIPBOARD_BUFFER.with(|buf| {
        *buf.borrow_mut() = None;
    });
}

/// Check if the in-process buffer has content.
pub fn has_content() -> bool {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().is_some())
}

// =============================================================================
// Implementations
// =============================================================================

/// Clipboard backed by the in-process buffer. Writes always succeed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferClipboard;

impl Clipboard for BufferClipboard {
    fn write_text(&self, text: &str, done: ClipboardCallback) {
        copy(text);
        done(Ok(()));
    }
}

/// Clipboard that rejects every write.
///
/// Used where no clipboard exists (headless sessions, tests).
#[derive(Debug, Clone, Default)]
pub struct UnavailableClipboard {
    reason: Option<String>,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str, done: ClipboardCallback) {
        let reason = self
            .reason
            .clone()
            .unwrap_or_else(|| "no clipboard configured".to_string());
        done(Err(ClipboardError::Unavailable(reason)));
    }
}

/// The operating system clipboard.
///
/// A fresh arboard handle is opened per write, so the clipboard is only
/// touched when the user actually copies something.
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str, done: ClipboardCallback) {
        let result = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))
            .and_then(|mut clipboard| {
                clipboard
                    .set_text(text.to_owned())
                    .map_err(|err| ClipboardError::Write(err.to_string()))
            });
        done(result);
    }
}

/// Clipboard used by inputs that were not given one explicitly.
#[cfg(feature = "system-clipboard")]
pub fn default_clipboard() -> Rc<dyn Clipboard> {
    Rc::new(SystemClipboard)
}

/// Clipboard used by inputs that were not given one explicitly.
#[cfg(not(feature = "system-clipboard"))]
pub fn default_clipboard() -> Rc<dyn Clipboard> {
    Rc::new(BufferClipboard)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        clear();
    }

    fn write(clipboard: &dyn Clipboard, text: &str) -> Option<Result<(), ClipboardError>> {
        let outcome = Rc::new(RefCell::new(None));
        let outcome_clone = outcome.clone();
        clipboard.write_text(text, Box::new(move |result| {
            *outcome_clone.borrow_mut() = Some(result);
        }));
        outcome.borrow_mut().take()
    }

    #[test]
    fn test_copy_paste() {
        setup();

        assert!(paste().is_none());
        assert!(!has_content());

        copy("Hello");
        assert_eq!(paste(), Some("Hello".to_string()));
        assert!(has_content());

        // Paste is non-destructive
        assert_eq!(paste(), Some("Hello".to_string()));
    }

    #[test]
    fn test_copy_empty_replaces() {
        setup();

        copy("Something");
        assert_eq!(write(&BufferClipboard, ""), Some(Ok(())));
        assert_eq!(paste(), Some(String::new()));
        assert!(has_content());
    }

    #[test]
    fn test_buffer_clipboard_succeeds() {
        setup();

        assert_eq!(write(&BufferClipboard, "sk_live_123"), Some(Ok(())));
        assert_eq!(paste(), Some("sk_live_123".to_string()));
    }

    #[test]
    fn test_unavailable_clipboard_fails() {
        setup();

        let result = write(&UnavailableClipboard::new("headless"), "secret");
        assert_eq!(
            result,
            Some(Err(ClipboardError::Unavailable("headless".to_string())))
        );
        assert!(!has_content());
    }

    #[test]
    fn test_unicode_multiline() {
        setup();

        let text = "Line 1\nHello 世界 🚀";
        assert_eq!(write(&BufferClipboard, text), Some(Ok(())));
        assert_eq!(paste(), Some(text.to_string()));
    }
}
