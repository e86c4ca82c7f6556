//! Render-ready snapshots of a field.
//!
//! `view()` on a control reads every prop and state machine once and returns
//! plain data. Layout and painting work from this snapshot only.

use crate::theme::Variant;
use crate::types::{ControlSize, InputType};

use super::decorations::{Decoration, DecorationStyle};
use super::frame::FrameProps;
use super::types::Icon;

/// Glyph of the error indicator in the action cluster.
pub const ERROR_INDICATOR: &str = "!";

/// Which native element the control wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    SingleLine,
    MultiLine { rows: u16, cols: u16 },
}

impl ControlKind {
    /// Text rows inside the control.
    pub fn rows(self) -> u16 {
        match self {
            Self::SingleLine => 1,
            Self::MultiLine { rows, .. } => rows.max(1),
        }
    }
}

/// One entry of the action cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub decoration: Decoration,
    /// "error", "copy", "reveal" or the caller's action id.
    pub id: String,
    pub label: String,
    pub variant: Variant,
}

impl ActionView {
    pub fn new(decoration: Decoration, id: impl Into<String>, label: impl Into<String>) -> Self {
        let variant = match decoration {
            Decoration::ErrorIndicator => Variant::Error,
            Decoration::CopyAction | Decoration::RevealAction => Variant::Primary,
            Decoration::CallerActions => Variant::Default,
        };
        Self {
            decoration,
            id: id.into(),
            label: label.into(),
            variant,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// The control box: native element plus decorations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub kind: ControlKind,
    pub name: Option<String>,
    /// Text entry kind. Always `Text` for a text area.
    pub input_type: InputType,
    /// Autofill hint passed through to the host.
    pub auto_complete: Option<String>,
    /// Displayed text (the mask placeholder while hidden).
    pub text: String,
    pub placeholder: Option<String>,
    /// Cursor as (line, column), only while focused and editable.
    pub cursor: Option<(usize, usize)>,
    pub focused: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub icon: Option<Icon>,
    pub actions: Vec<ActionView>,
    pub style: DecorationStyle,
}

impl ControlView {
    /// Check if the placeholder is shown instead of the text.
    pub fn shows_placeholder(&self) -> bool {
        self.text.is_empty() && self.placeholder.is_some()
    }

    pub fn size(&self) -> ControlSize {
        self.style.size
    }
}

/// Everything needed to lay out and paint one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub frame: FrameProps,
    pub control: ControlView,
    /// Character counter text, e.g. "12/200".
    pub counter: Option<String>,
}

impl FieldView {
    /// Labels of the action cluster, left to right.
    pub fn action_labels(&self) -> Vec<&str> {
        self.control
            .actions
            .iter()
            .map(|action| action.label.as_str())
            .collect()
    }

    /// Decorations of the action cluster, left to right.
    pub fn decorations(&self) -> Vec<Decoration> {
        self.control
            .actions
            .iter()
            .map(|action| action.decoration)
            .collect()
    }
}
