//! TextArea Primitive - Multi-line form control.
//!
//! Same frame and event surface as [`input`](super::input::input), without
//! copy or reveal. With a `limit`, the native element refuses characters past
//! it and a `"{count}/{limit}"` counter is shown below the control.
//!
//! The counter updates after the caller's `on_change` returns, so inside the
//! callback it still shows the previous count.

use spark_signals::{Signal, signal};

use crate::state::char_count::CharCounter;
use crate::state::keyboard::KeyboardEvent;
use crate::state::reveal::DisplayMode;
use crate::state::text_edit::{EditOutcome, TextEditor, line_and_column};
use crate::types::InputType;

use super::decorations::{Decoration, DecorationFlags, DecorationStyle, action_cluster, icon_slot};
use super::frame::FrameProps;
use super::types::{ChangeEvent, FocusEvent, TEXT_AREA_COLS, TextAreaProps};
use super::view::{ActionView, ControlKind, ControlView, ERROR_INDICATOR, FieldView};

/// A mounted text area.
pub struct TextArea {
    props: TextAreaProps,
    editor: TextEditor,
    counter: Option<CharCounter>,
    focused: Signal<bool>,
    mounted: bool,
}

/// Create a text area.
pub fn text_area(props: TextAreaProps) -> TextArea {
    let initial = props.value.get();

    let area = TextArea {
        editor: TextEditor::multi_line(&initial).with_max_length(props.limit),
        counter: props.limit.map(|limit| CharCounter::new(Some(limit), &initial)),
        focused: signal(false),
        mounted: true,
        props,
    };

    tracing::debug!(
        id = ?area.props.id,
        rows = area.props.rows,
        limit = ?area.props.limit,
        "text area mounted"
    );

    if area.props.auto_focus {
        area.focus();
    }

    area
}

impl TextArea {
    pub fn id(&self) -> Option<&str> {
        self.props.id.as_deref()
    }

    /// Current value, as supplied by the caller.
    pub fn value(&self) -> String {
        self.props.value.get()
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled.get()
    }

    pub fn error(&self) -> Option<String> {
        self.props.error.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The character counter, if a limit is set.
    ///
    /// The returned handle shares state with the text area.
    pub fn counter(&self) -> Option<CharCounter> {
        self.counter.clone()
    }

    /// Character count, if a limit is set.
    pub fn char_count(&self) -> Option<usize> {
        self.counter.as_ref().map(CharCounter::count)
    }

    /// Counter text, e.g. "12/200".
    pub fn counter_label(&self) -> Option<String> {
        self.counter.as_ref().and_then(CharCounter::label)
    }

    pub fn decoration_flags(&self) -> DecorationFlags {
        let mut flags = DecorationFlags::empty();
        flags.set(DecorationFlags::ICON, self.props.icon.is_some());
        flags.set(DecorationFlags::ERROR, self.error().is_some());
        flags
    }

    pub fn has_icon(&self) -> bool {
        icon_slot(self.decoration_flags())
    }

    /// Action cluster, left to right. Only the error indicator applies here.
    pub fn decorations(&self) -> Vec<Decoration> {
        action_cluster(self.decoration_flags(), DisplayMode::Revealed)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle a key press while focused. See [`Input::handle_key`].
    ///
    /// [`Input::handle_key`]: super::input::Input::handle_key
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        if !self.mounted || self.is_disabled() {
            return false;
        }

        if let Some(on_key_down) = &self.props.on_key_down {
            if on_key_down(event) {
                return true;
            }
        }

        let value = self.value();
        match self.editor.apply(&value, event, false) {
            EditOutcome::Changed(next) => {
                self.handle_change(next);
                true
            }
            outcome => outcome.is_handled(),
        }
    }

    /// The native element produced `next`.
    ///
    /// Text past the limit is cut at the limit first. The caller sees the
    /// change before the counter does.
    pub fn handle_change(&self, next: String) {
        if !self.mounted || self.is_disabled() {
            return;
        }

        let next = match self.props.limit {
            Some(limit) if next.chars().count() > limit => next.chars().take(limit).collect(),
            _ => next,
        };

        let previous = self.value();
        if next == previous {
            return;
        }

        let event = ChangeEvent {
            value: next,
            previous,
        };
        if let Some(on_change) = &self.props.on_change {
            on_change(&event);
        }
        if let Some(counter) = &self.counter {
            let count = counter.record(&event.value);
            tracing::trace!(count, "character count updated");
        }
    }

    pub fn focus(&self) {
        if !self.mounted || self.focused.get() {
            return;
        }
        self.focused.set(true);
        self.editor.move_to_end(&self.value());
        if let Some(on_focus) = &self.props.on_focus {
            on_focus(&self.focus_event());
        }
    }

    pub fn blur(&self) {
        if !self.focused.get() {
            return;
        }
        self.focused.set(false);
        if let Some(on_blur) = &self.props.on_blur {
            on_blur(&self.focus_event());
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    fn focus_event(&self) -> FocusEvent {
        FocusEvent {
            id: self.props.id.clone(),
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view(&self) -> FieldView {
        let flags = self.decoration_flags();
        let value = self.value();
        let focused = self.is_focused();
        let size = self.props.size.unwrap_or_default();

        let actions = self
            .decorations()
            .into_iter()
            .map(|decoration| ActionView::new(decoration, "error", ERROR_INDICATOR))
            .collect();

        FieldView {
            frame: FrameProps {
                id: self.props.id.clone(),
                label: self.props.label.clone(),
                label_optional: self.props.label_optional.clone(),
                layout: self.props.layout,
                description: self.props.description.clone(),
                error: self.error(),
                size: self.props.size,
            },
            control: ControlView {
                kind: ControlKind::MultiLine {
                    rows: self.props.rows,
                    cols: TEXT_AREA_COLS,
                },
                name: self.props.name.clone(),
                input_type: InputType::Text,
                auto_complete: self.props.auto_complete.then(|| "on".to_string()),
                cursor: focused.then(|| line_and_column(&value, self.editor.cursor(&value))),
                text: value,
                placeholder: self.props.placeholder.clone(),
                focused,
                disabled: self.is_disabled(),
                read_only: false,
                icon: self.props.icon.clone(),
                actions,
                style: DecorationStyle::new(size, flags),
            },
            counter: self.counter_label(),
        }
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.focused.set(false);
        tracing::debug!(id = ?self.props.id, "text area unmounted");
    }
}

impl Drop for TextArea {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// Tests
// =============================================================================
