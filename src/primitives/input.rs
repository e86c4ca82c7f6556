//! Input Primitive - Single-line form control.
//!
//! Wraps the native text element with a label frame, an optional leading
//! icon and an action cluster for copy, reveal and caller actions.
//!
//! The value is controlled: the input reads it from `props.value` and
//! reports edits through `on_change`. Nothing shows up until the caller
//! feeds the new value back.
//!
//! # Example
//!
//! ```ignore
//! use spark_fields::{input, InputProps};
//! use spark_signals::signal;
//! use std::rc::Rc;
//!
//! let token = signal(String::new());
//! let token_for_change = token.clone();
//!
//! let field = input(InputProps {
//!     label: Some("Token".to_string()),
//!     copy: true,
//!     reveal: true,
//!     on_change: Some(Rc::new(move |event| {
//!         token_for_change.set(event.value.clone());
//!     })),
//!     ..InputProps::new(token.clone())
//! });
//!
//! field.reveal();
//! field.press("copy");
//! ```

use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::state::clipboard::{Clipboard, default_clipboard};
use crate::state::copy_feedback::{CopyFeedback, CopyFeedbackState, CopyToken};
use crate::state::keyboard::KeyboardEvent;
use crate::state::reveal::{DisplayMode, MaskState};
use crate::state::text_edit::{EditOutcome, TextEditor, line_and_column};
use crate::theme::Variant;
use crate::types::InputType;

use super::decorations::{Decoration, DecorationFlags, DecorationStyle, action_cluster, icon_slot};
use super::frame::FrameProps;
use super::types::{ChangeEvent, FocusEvent, InputProps};
use super::view::{ActionView, ControlKind, ControlView, ERROR_INDICATOR, FieldView};

/// Label of the reveal action.
pub const REVEAL_LABEL: &str = "Reveal";

/// A mounted single-line input.
///
/// Dropping the handle unmounts it.
pub struct Input {
    props: InputProps,
    clipboard: Rc<dyn Clipboard>,
    editor: TextEditor,
    mask: MaskState,
    feedback: CopyFeedbackState,
    focused: Signal<bool>,
    mounted: bool,
}

/// Create an input.
///
/// Props that are signals or getters are read on every access, so the input
/// always reflects the caller's current state.
pub fn input(props: InputProps) -> Input {
    let clipboard = props.clipboard.clone().unwrap_or_else(default_clipboard);
    let initial = props.value.get();

    let field = Input {
        editor: TextEditor::single_line(&initial),
        mask: MaskState::new(props.reveal),
        feedback: CopyFeedbackState::new(),
        focused: signal(false),
        clipboard,
        mounted: true,
        props,
    };

    tracing::debug!(
        id = ?field.props.id,
        input_type = %field.props.input_type,
        masked = field.mask.is_hidden(),
        "input mounted"
    );

    if field.props.auto_focus {
        field.focus();
    }

    field
}

impl Input {
    // =========================================================================
    // Value & display
    // =========================================================================

    pub fn id(&self) -> Option<&str> {
        self.props.id.as_deref()
    }

    /// Current value, as supplied by the caller.
    pub fn value(&self) -> String {
        self.props.value.get()
    }

    /// Text the native element shows right now.
    ///
    /// A hidden value shows the mask placeholder. Otherwise the input type
    /// decides, so a password shows one glyph per character.
    pub fn display_text(&self) -> String {
        let value = self.value();
        if self.mask.is_hidden() {
            return self.mask.display(&value);
        }
        self.props.input_type.present(&value)
    }

    pub fn input_type(&self) -> InputType {
        self.props.input_type
    }

    /// Check if the native element refuses edits: while hidden, or for
    /// button-like input types.
    pub fn is_read_only(&self) -> bool {
        self.mask.is_hidden() || self.props.input_type.is_button()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mask.mode()
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

    // =========================================================================
    // Decorations
    // =========================================================================

    /// Flags describing the current configuration.
    pub fn decoration_flags(&self) -> DecorationFlags {
        let mut flags = DecorationFlags::empty();
        flags.set(DecorationFlags::ICON, self.props.icon.is_some());
        flags.set(DecorationFlags::ERROR, self.error().is_some());
        flags.set(DecorationFlags::COPY, self.props.copy);
        flags.set(DecorationFlags::MASKABLE, self.mask.maskable());
        flags.set(DecorationFlags::ACTIONS, !self.props.actions.is_empty());
        flags
    }

    /// Action cluster, left to right.
    pub fn decorations(&self) -> Vec<Decoration> {
        action_cluster(self.decoration_flags(), self.display_mode())
    }

    pub fn has_icon(&self) -> bool {
        icon_slot(self.decoration_flags())
    }

    // =========================================================================
    // Copy & reveal
    // =========================================================================

    pub fn copy_feedback(&self) -> CopyFeedback {
        self.feedback.state()
    }

    pub fn copy_label(&self) -> &'static str {
        self.feedback.label()
    }

    /// Check if a copy revert timer is pending.
    pub fn has_pending_revert(&self) -> bool {
        self.feedback.has_pending_revert()
    }

    /// Copy the current value.
    ///
    /// Returns None when the copy action is not shown (copy disabled, the
    /// value is hidden, or the input is unmounted).
    pub fn copy(&self) -> Option<CopyToken> {
        if !self.mounted || !self.decorations().contains(&Decoration::CopyAction) {
            return None;
        }
        Some(self.feedback.copy(self.clipboard.as_ref(), &self.value()))
    }

    /// Reveal a masked value. Returns true if the display mode changed.
    pub fn reveal(&self) -> bool {
        if !self.mounted || !self.mask.offers_reveal() {
            return false;
        }
        self.mask.reveal()
    }

    /// Press the action with `id` in the current cluster.
    ///
    /// Built-in ids are "copy" and "reveal"; anything else is looked up in
    /// the caller's actions. Returns false if no such action is shown.
    pub fn press(&self, id: &str) -> bool {
        let Some(action) = self.action_views().into_iter().find(|action| action.id == id) else {
            return false;
        };

        match action.decoration {
            Decoration::ErrorIndicator => false,
            Decoration::CopyAction => self.copy().is_some(),
            Decoration::RevealAction => self.reveal(),
            Decoration::CallerActions => {
                let callback = self
                    .props
                    .actions
                    .iter()
                    .find(|caller| caller.id == id)
                    .and_then(|caller| caller.on_press.clone());
                match callback {
                    Some(callback) => {
                        callback();
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn action_views(&self) -> Vec<ActionView> {
        let mut views = Vec::new();
        for decoration in self.decorations() {
            match decoration {
                Decoration::ErrorIndicator => {
                    views.push(ActionView::new(decoration, "error", ERROR_INDICATOR));
                }
                Decoration::CopyAction => {
                    let variant = match self.copy_feedback() {
                        CopyFeedback::Idle => Variant::Primary,
                        CopyFeedback::Succeeded => Variant::Success,
                        CopyFeedback::Failed => Variant::Error,
                    };
                    views.push(
                        ActionView::new(decoration, "copy", self.copy_label()).with_variant(variant),
                    );
                }
                Decoration::RevealAction => {
                    views.push(ActionView::new(decoration, "reveal", REVEAL_LABEL));
                }
                Decoration::CallerActions => {
                    views.extend(self.props.actions.iter().map(|action| {
                        ActionView::new(decoration, action.id.clone(), action.label.clone())
                    }));
                }
            }
        }
        views
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle a key press while focused.
    ///
    /// The caller's `on_key_down` sees the key first; returning true from it
    /// stops the native element from editing. Returns true if the key was
    /// used.
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
        match self.editor.apply(&value, event, self.is_read_only()) {
            EditOutcome::Changed(next) => {
                self.handle_change(next);
                true
            }
            outcome => outcome.is_handled(),
        }
    }

    /// The native element produced `next` (typing, paste, autofill).
    ///
    /// Read-only, disabled and unmounted inputs ignore edits.
    pub fn handle_change(&self, next: String) {
        if !self.mounted || self.is_disabled() || self.is_read_only() {
            tracing::trace!(id = ?self.props.id, "edit ignored");
            return;
        }

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

    /// Snapshot for layout and painting.
    pub fn view(&self) -> FieldView {
        let flags = self.decoration_flags();
        let error = self.error();
        let value = self.value();
        let hidden = self.mask.is_hidden();
        let focused = self.is_focused();

        let cursor = (focused && !hidden)
            .then(|| line_and_column(&value, self.editor.cursor(&value)));

        FieldView {
            frame: FrameProps {
                id: self.props.id.clone(),
                label: self.props.label.clone(),
                label_optional: self.props.label_optional.clone(),
                layout: self.props.layout,
                description: self.props.description.clone(),
                error,
                size: Some(self.props.size),
            },
            control: ControlView {
                kind: ControlKind::SingleLine,
                name: self.props.name.clone(),
                input_type: self.props.input_type,
                auto_complete: self.props.auto_complete.clone(),
                text: self.display_text(),
                placeholder: self.props.placeholder.clone(),
                cursor,
                focused,
                disabled: self.is_disabled(),
                read_only: self.is_read_only(),
                icon: self.props.icon.clone(),
                actions: self.action_views(),
                style: DecorationStyle::new(self.props.size, flags),
            },
            counter: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Unmount: cancel the copy revert and ignore late clipboard results.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.feedback.cancel();
        self.focused.set(false);
        tracing::debug!(id = ?self.props.id, "input unmounted");
    }
}

impl Drop for Input {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::types::{Action, Icon, PropValue};
    use crate::state::clipboard::{self, BufferClipboard, UnavailableClipboard};
    use crate::state::reveal::MASK_PLACEHOLDER;
    use crate::state::timers;
    use crate::types::{ControlSize, FieldLayout};
    use std::cell::RefCell;
    use std::time::Duration;

    fn setup() {
        timers::reset_timers();
        clipboard::clear();
    }

    /// Controlled input whose value lives in a signal.
    fn controlled(props: InputProps) -> (Input, Signal<String>) {
        let value = signal(props.value.get());
        let value_for_change = value.clone();
        let field = input(InputProps {
            value: PropValue::Signal(value.clone()),
            on_change: Some(Rc::new(move |event: &ChangeEvent| {
                value_for_change.set(event.value.clone());
            })),
            clipboard: Some(Rc::new(BufferClipboard)),
            ..props
        });
        (field, value)
    }

    #[test]
    fn test_plain_input_shows_value() {
        setup();
        let field = input(InputProps::new("hello"));
        assert_eq!(field.display_text(), "hello");
        assert_eq!(field.display_mode(), DisplayMode::Revealed);
        assert!(field.decorations().is_empty());
        assert!(field.view().control.actions.is_empty());
    }

    #[test]
    fn test_masked_until_revealed() {
        setup();
        let field = input(InputProps {
            reveal: true,
            ..InputProps::new("4242 4242 4242 4242")
        });

        assert_eq!(field.display_text(), MASK_PLACEHOLDER);
        assert_eq!(field.view().action_labels(), vec!["Reveal"]);

        assert!(field.press("reveal"));
        assert_eq!(field.display_text(), "4242 4242 4242 4242");
        assert!(field.view().action_labels().is_empty());
        assert!(!field.reveal());
    }

    #[test]
    fn test_copy_suppressed_while_hidden() {
        setup();
        let (field, _) = controlled(InputProps {
            copy: true,
            reveal: true,
            ..InputProps::new("secret")
        });

        assert_eq!(field.decorations(), vec![Decoration::RevealAction]);
        assert!(field.copy().is_none());
        assert!(!field.press("copy"));
        assert!(clipboard::paste().is_none());

        field.reveal();
        assert_eq!(field.decorations(), vec![Decoration::CopyAction]);
        assert!(field.copy().is_some());
        assert_eq!(clipboard::paste(), Some("secret".to_string()));
    }

    #[test]
    fn test_copy_label_cycle() {
        setup();
        let (field, _) = controlled(InputProps {
            copy: true,
            ..InputProps::new("value")
        });

        assert_eq!(field.view().action_labels(), vec!["Copy"]);
        assert!(field.press("copy"));
        assert_eq!(field.view().action_labels(), vec!["Copied"]);

        timers::advance(Duration::from_secs(3));
        assert_eq!(field.copy_label(), "Copy");
    }

    #[test]
    fn test_copy_failure_label() {
        setup();
        let field = input(InputProps {
            copy: true,
            clipboard: Some(Rc::new(UnavailableClipboard::new("headless"))),
            ..InputProps::new("value")
        });

        field.copy();
        assert_eq!(field.copy_feedback(), CopyFeedback::Failed);
        assert_eq!(field.view().action_labels(), vec!["Failed to copy"]);
    }

    #[test]
    fn test_cluster_order_with_error_and_actions() {
        setup();
        let field = input(InputProps {
            copy: true,
            error: "Invalid key".into(),
            actions: vec![Action::new("rotate", "Rotate")],
            ..InputProps::new("key")
        });

        let view = field.view();
        assert_eq!(view.action_labels(), vec!["!", "Copy", "Rotate"]);
        assert!(view.control.style.error);
        assert_eq!(view.frame.error, Some("Invalid key".to_string()));
    }

    #[test]
    fn test_caller_action_press() {
        setup();
        let pressed = Rc::new(RefCell::new(0));
        let pressed_clone = pressed.clone();
        let field = input(InputProps {
            actions: vec![
                Action::new("clear", "Clear").on_press(move || *pressed_clone.borrow_mut() += 1),
                Action::new("noop", "Nothing"),
            ],
            ..InputProps::new("")
        });

        assert!(field.press("clear"));
        assert_eq!(*pressed.borrow(), 1);
        assert!(!field.press("noop"));
        assert!(!field.press("missing"));
    }

    #[test]
    fn test_typing_reports_change() {
        setup();
        let (field, value) = controlled(InputProps::new("ab"));
        field.focus();

        assert!(field.handle_key(&KeyboardEvent::new("c")));
        assert_eq!(value.get(), "abc");
        assert_eq!(field.view().control.cursor, Some((0, 3)));
    }

    #[test]
    fn test_uncontrolled_value_stays_put() {
        setup();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        let field = input(InputProps {
            on_change: Some(Rc::new(move |event: &ChangeEvent| {
                events_clone.borrow_mut().push(event.clone())
            })),
            ..InputProps::new("fixed")
        });

        field.handle_key(&KeyboardEvent::new("!"));
        assert_eq!(field.value(), "fixed");
        assert_eq!(
            *events.borrow(),
            vec![ChangeEvent {
                value: "fixed!".to_string(),
                previous: "fixed".to_string(),
            }]
        );
    }

    #[test]
    fn test_hidden_input_is_read_only() {
        setup();
        let (field, value) = controlled(InputProps {
            reveal: true,
            ..InputProps::new("secret")
        });

        assert!(!field.handle_key(&KeyboardEvent::new("x")));
        field.handle_change("other".to_string());
        assert_eq!(value.get(), "secret");
        assert!(field.view().control.read_only);
    }

    #[test]
    fn test_password_shows_glyph_per_char() {
        setup();
        let (field, value) = controlled(InputProps {
            input_type: InputType::Password,
            copy: true,
            ..InputProps::new("hunter2")
        });
        field.focus();

        assert_eq!(field.display_text(), "•••••••");
        assert_eq!(field.view().control.text, "•••••••");
        assert_eq!(field.view().control.input_type, InputType::Password);
        assert!(!field.view().control.read_only);

        // Still editable, and copy takes the real value
        assert!(field.handle_key(&KeyboardEvent::new("!")));
        assert_eq!(value.get(), "hunter2!");
        assert_eq!(field.view().control.cursor, Some((0, 8)));
        field.copy();
        assert_eq!(clipboard::paste(), Some("hunter2!".to_string()));
    }

    #[test]
    fn test_masked_password_shows_placeholder_until_revealed() {
        setup();
        let field = input(InputProps {
            input_type: InputType::Password,
            reveal: true,
            ..InputProps::new("hunter2")
        });

        assert_eq!(field.display_text(), MASK_PLACEHOLDER);
        field.reveal();
        assert_eq!(field.display_text(), "•••••••");
    }

    #[test]
    fn test_button_types_take_no_edits() {
        setup();
        let (field, value) = controlled(InputProps {
            input_type: InputType::Submit,
            auto_complete: Some("off".to_string()),
            ..InputProps::new("Send")
        });

        assert!(!field.handle_key(&KeyboardEvent::new("x")));
        field.handle_change("Sent".to_string());
        assert_eq!(value.get(), "Send");

        let view = field.view();
        assert_eq!(view.control.text, "Send");
        assert!(view.control.read_only);
        assert_eq!(view.control.auto_complete.as_deref(), Some("off"));
    }

    #[test]
    fn test_key_down_can_consume() {
        setup();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let (field, value) = controlled(InputProps {
            on_key_down: Some(Rc::new(move |event: &KeyboardEvent| {
                seen_clone.borrow_mut().push(event.key.clone());
                event.key == "x"
            })),
            ..InputProps::new("")
        });

        assert!(field.handle_key(&KeyboardEvent::new("x")));
        assert!(field.handle_key(&KeyboardEvent::new("y")));
        assert_eq!(value.get(), "y");
        assert_eq!(*seen.borrow(), vec!["x", "y"]);
    }

    #[test]
    fn test_disabled_ignores_keys() {
        setup();
        let (field, value) = controlled(InputProps {
            disabled: true.into(),
            ..InputProps::new("")
        });

        assert!(!field.handle_key(&KeyboardEvent::new("a")));
        assert_eq!(value.get(), "");
        assert!(field.view().control.disabled);
    }

    #[test]
    fn test_focus_and_blur_events() {
        setup();
        let log = Rc::new(RefCell::new(Vec::new()));
        let on_focus_log = log.clone();
        let on_blur_log = log.clone();
        let field = input(InputProps {
            id: Some("email".to_string()),
            on_focus: Some(Rc::new(move |event: &FocusEvent| {
                on_focus_log.borrow_mut().push(format!("focus:{:?}", event.id))
            })),
            on_blur: Some(Rc::new(move |event: &FocusEvent| {
                on_blur_log.borrow_mut().push(format!("blur:{:?}", event.id))
            })),
            ..InputProps::new("")
        });

        field.focus();
        field.focus();
        field.blur();
        field.blur();
        assert_eq!(
            *log.borrow(),
            vec!["focus:Some(\"email\")", "blur:Some(\"email\")"]
        );
    }

    #[test]
    fn test_auto_focus() {
        setup();
        let field = input(InputProps {
            auto_focus: true,
            ..InputProps::new("abc")
        });
        assert!(field.is_focused());
        assert_eq!(field.view().control.cursor, Some((0, 3)));
    }

    #[test]
    fn test_view_carries_frame_props() {
        setup();
        let field = input(InputProps {
            id: Some("api-key".to_string()),
            name: Some("api_key".to_string()),
            label: Some("API key".to_string()),
            label_optional: Some("Optional".to_string()),
            description: Some("Used for the CLI".to_string()),
            layout: Some(FieldLayout::Horizontal),
            icon: Some(Icon::new("🔑")),
            ..InputProps::new("")
        });

        let view = field.view();
        assert_eq!(view.frame.id.as_deref(), Some("api-key"));
        assert_eq!(view.frame.label.as_deref(), Some("API key"));
        assert_eq!(view.frame.label_optional.as_deref(), Some("Optional"));
        assert_eq!(view.frame.description.as_deref(), Some("Used for the CLI"));
        assert_eq!(view.frame.size, Some(ControlSize::Medium));
        assert_eq!(view.control.name.as_deref(), Some("api_key"));
        assert!(view.control.style.with_icon);
        assert!(view.control.actions.is_empty());
    }

    #[test]
    fn test_unmount_cancels_revert() {
        setup();
        let (mut field, _) = controlled(InputProps {
            copy: true,
            ..InputProps::new("value")
        });

        field.copy();
        assert!(field.has_pending_revert());

        field.unmount();
        assert!(!field.has_pending_revert());
        assert_eq!(timers::pending_count(), 0);
        assert!(field.copy().is_none());
    }

    #[test]
    fn test_drop_cancels_revert() {
        setup();
        {
            let (field, _) = controlled(InputProps {
                copy: true,
                ..InputProps::new("value")
            });
            field.copy();
            assert_eq!(timers::pending_count(), 1);
        }
        assert_eq!(timers::pending_count(), 0);
    }
}
