//! Form control primitives.
//!
//! - [`input`] - single-line control with icon, copy, reveal and actions
//! - [`text_area`] - multi-line control with an optional character counter
//!
//! # Architecture
//!
//! A control is a handle over per-instance state machines. It never owns the
//! value: every read goes through the caller's [`PropValue`], and edits come
//! back out through `on_change`.
//!
//! ```text
//! props ─▶ control ─▶ view() ─▶ FieldFrame::layout ─▶ paint
//!             ▲
//!   keys ─────┘ ─▶ on_change ─▶ caller updates its signal
//! ```
//!
//! Keep props reactive by passing the signal itself:
//!
//! ```ignore
//! // CORRECT - the field follows the signal
//! input(InputProps::new(value_signal.clone()));
//!
//! // WRONG - frozen at today's value
//! input(InputProps::new(value_signal.get()));
//! ```

pub mod decorations;
pub mod frame;
pub mod input;
pub mod text_area;
pub mod types;
pub mod view;

pub use decorations::{
    Decoration, DecorationFlags, DecorationStyle, action_cluster, cluster_triggered, icon_slot,
};
pub use frame::{FieldFrame, FrameLayout, FrameProps};
pub use input::{Input, REVEAL_LABEL, input};
pub use text_area::{TextArea, text_area};
pub use types::*;
pub use view::{ActionView, ControlKind, ControlView, ERROR_INDICATOR, FieldView};
