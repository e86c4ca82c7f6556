//! # spark-fields
//!
//! Reactive form controls for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity: a control reads its value, error and disabled
//! state through signals owned by the caller and reports edits back through
//! callbacks.
//!
//! ## Controls
//!
//! - [`input`] - single-line entry with an optional leading icon, a copy
//!   action with timed "Copied" feedback, a one-way reveal for masked
//!   values, and caller-supplied actions
//! - [`text_area`] - multi-line entry with a live character counter
//!
//! Both wrap themselves in a Field Frame (label, optional marker,
//! description, error text) and share one size scale with their decorations.
//!
//! ## Pipeline
//!
//! ```text
//! control.view() → FieldView → layout_field (Taffy) → paint → TerminalRenderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Cell, Rect, ControlSize, InputType)
//! - [`primitives`] - Input, TextArea, decorations, Field Frame contract
//! - [`state`] - Reveal, copy feedback, char count, timers, clipboard, keys
//! - [`layout`] - Taffy-backed Field Frame and text measurement
//! - [`renderer`] - Frame buffer, painter and diff-based terminal output
//! - [`theme`] - Semantic colors and presets

pub mod error;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{ClipboardError, LayoutError, ParseError, RenderError};

pub use layout::{TaffyFrame, layout_field, measure_text_height, string_width, wrap_text};

pub use renderer::{FrameBuffer, TerminalRenderer, paint_field, render_field};

pub use primitives::{
    Action, ChangeEvent, Decoration, DecorationFlags, FieldFrame, FieldView, FocusEvent,
    FrameLayout, FrameProps, Icon, Input, InputProps, PropValue, TextArea, TextAreaProps, input,
    text_area,
};

pub use state::{
    // Clipboard
    BufferClipboard, Clipboard, UnavailableClipboard, default_clipboard,
    // Feedback machines
    COPY_REVERT_DELAY, CharCounter, CopyFeedback, CopyFeedbackState, DisplayMode,
    MASK_PLACEHOLDER, MaskState,
    // Keyboard
    KeyState, KeyboardEvent, Modifiers, convert_key_event,
    // Timers
    TimerHandle,
};

pub use theme::{Theme, ThemeColor, Variant, active_theme, get_preset, set_theme};
