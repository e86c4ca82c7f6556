//! State Module - Per-field state machines and their capabilities
//!
//! - **Reveal** - one-way mask/reveal display mode
//! - **Copy feedback** - "Copy" / "Copied" / "Failed to copy" with timed revert
//! - **Char count** - live character count against a limit
//! - **Text edit** - cursor and key handling of the native text element
//! - **Timers** - deferred tasks driven by the host loop
//! - **Clipboard** - where copied text goes
//! - **Keyboard** - key event types and crossterm conversion

pub mod char_count;
pub mod clipboard;
pub mod copy_feedback;
pub mod keyboard;
pub mod reveal;
pub mod text_edit;
pub mod timers;

pub use char_count::{CharCounter, char_count};
pub use clipboard::{
    BufferClipboard, Clipboard, ClipboardCallback, UnavailableClipboard, default_clipboard,
};
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use copy_feedback::{COPY_REVERT_DELAY, CopyFeedback, CopyFeedbackState, CopyToken};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers, convert_key_event};
pub use reveal::{DisplayMode, MASK_PLACEHOLDER, MaskState};
pub use text_edit::{EditOutcome, TextEditor};
pub use timers::TimerHandle;
