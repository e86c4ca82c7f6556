//! Primitive types - Props, events and callbacks.
//!
//! These types define the interface for form controls.
//! Props support static values, signals, and getters for reactivity.

use std::fmt;
use std::rc::Rc;

use spark_signals::Signal;

use crate::state::clipboard::Clipboard;
use crate::state::keyboard::KeyboardEvent;
use crate::types::{ControlSize, FieldLayout, InputType};

// =============================================================================
// Events
// =============================================================================

/// Emitted when the native element produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Resulting text.
    pub value: String,
    /// Text before the edit.
    pub previous: String,
}

/// Emitted on focus and blur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEvent {
    pub id: Option<String>,
}

// =============================================================================
// Callback Types
// =============================================================================

/// Value change callback.
pub type ChangeCallback = Rc<dyn Fn(&ChangeEvent)>;

/// Focus callback (called when the control gains focus).
pub type FocusCallback = Rc<dyn Fn(&FocusEvent)>;

/// Blur callback (called when the control loses focus).
pub type BlurCallback = Rc<dyn Fn(&FocusEvent)>;

/// Keyboard event callback.
///
/// Return true to consume the key. A consumed key is not edited into the
/// value.
pub type KeyCallback = Rc<dyn Fn(&KeyboardEvent) -> bool>;

/// Press callback for caller-supplied actions.
pub type PressCallback = Rc<dyn Fn()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Controls read through this on every `view()`, so a signal or getter keeps
/// the field in sync with the caller's state.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal.
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Wrap a getter closure.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        PropValue::Getter(Rc::new(f))
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

impl From<&str> for PropValue<Option<String>> {
    fn from(value: &str) -> Self {
        PropValue::Static(Some(value.to_string()))
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for PropValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Static(v) => f.debug_tuple("Static").field(v).finish(),
            PropValue::Signal(s) => f.debug_tuple("Signal").field(&s.get()).finish(),
            PropValue::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

// =============================================================================
// Decoration content
// =============================================================================

/// Leading glyph shown before the text. Purely visual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    glyph: String,
}

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

/// A caller-supplied item in the action cluster.
#[derive(Clone)]
pub struct Action {
    pub id: String,
    pub label: String,
    pub on_press: Option<PressCallback>,
}

impl Action {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on_press: None,
        }
    }

    pub fn on_press(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(callback));
        self
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

// =============================================================================
// Input Props
// =============================================================================

/// Properties for the single-line [`input`](super::input::input) control.
///
/// # Example
///
/// ```ignore
/// use spark_fields::{input, InputProps};
/// use spark_signals::signal;
///
/// let key = signal("sk_live_123".to_string());
/// let key_for_change = key.clone();
///
/// let field = input(InputProps {
///     label: Some("API key".to_string()),
///     copy: true,
///     reveal: true,
///     on_change: Some(Rc::new(move |event| {
///         key_for_change.set(event.value.clone());
///     })),
///     ..InputProps::new(key)
/// });
/// ```
#[derive(Clone)]
pub struct InputProps {
    // =========================================================================
    // Identity
    // =========================================================================

    pub id: Option<String>,
    pub name: Option<String>,

    // =========================================================================
    // Value
    // =========================================================================

    /// Current value. Owned by the caller.
    pub value: PropValue<String>,

    // =========================================================================
    // Native element
    // =========================================================================

    pub input_type: InputType,
    pub placeholder: Option<String>,
    pub auto_complete: Option<String>,
    pub auto_focus: bool,
    pub disabled: PropValue<bool>,

    // =========================================================================
    // Frame
    // =========================================================================

    pub size: ControlSize,
    pub layout: Option<FieldLayout>,
    pub label: Option<String>,
    pub label_optional: Option<String>,
    pub description: Option<String>,

    /// Error text. Present means the field renders in its error style.
    pub error: PropValue<Option<String>>,

    // =========================================================================
    // Decorations
    // =========================================================================

    pub icon: Option<Icon>,

    /// Offer a copy action for the value.
    pub copy: bool,

    /// Start masked and offer a one-way reveal action.
    pub reveal: bool,

    /// Extra actions, rendered after the built-in ones.
    pub actions: Vec<Action>,

    /// Where the copy action writes. Defaults to the system clipboard.
    pub clipboard: Option<Rc<dyn Clipboard>>,

    // =========================================================================
    // Events
    // =========================================================================

    pub on_change: Option<ChangeCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    pub on_key_down: Option<KeyCallback>,
}

impl InputProps {
    pub fn new(value: impl Into<PropValue<String>>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            value: PropValue::default(),
            input_type: InputType::Text,
            placeholder: None,
            auto_complete: None,
            auto_focus: false,
            disabled: PropValue::Static(false),
            size: ControlSize::Medium,
            layout: None,
            label: None,
            label_optional: None,
            description: None,
            error: PropValue::Static(None),
            icon: None,
            copy: false,
            reveal: false,
            actions: Vec::new(),
            clipboard: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
            on_key_down: None,
        }
    }
}

// =============================================================================
// TextArea Props
// =============================================================================

/// Rendered width hint of a text area, in columns.
pub const TEXT_AREA_COLS: u16 = 100;

/// Default visible rows of a text area.
pub const TEXT_AREA_ROWS: u16 = 4;

/// Properties for the multi-line [`text_area`](super::text_area::text_area)
/// control.
#[derive(Clone)]
pub struct TextAreaProps {
    pub id: Option<String>,
    pub name: Option<String>,

    /// Current value. Owned by the caller.
    pub value: PropValue<String>,

    pub placeholder: Option<String>,
    pub auto_complete: bool,
    pub auto_focus: bool,
    pub disabled: PropValue<bool>,

    /// Visible rows (default: 4).
    pub rows: u16,

    /// Maximum characters. Enables the counter.
    pub limit: Option<usize>,

    /// Size. Unset means the frame default.
    pub size: Option<ControlSize>,
    pub layout: Option<FieldLayout>,
    pub label: Option<String>,
    pub label_optional: Option<String>,
    pub description: Option<String>,
    pub error: PropValue<Option<String>>,
    pub icon: Option<Icon>,

    pub on_change: Option<ChangeCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<BlurCallback>,
    pub on_key_down: Option<KeyCallback>,
}

impl TextAreaProps {
    pub fn new(value: impl Into<PropValue<String>>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

impl Default for TextAreaProps {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            value: PropValue::default(),
            placeholder: None,
            auto_complete: false,
            auto_focus: false,
            disabled: PropValue::Static(false),
            rows: TEXT_AREA_ROWS,
            limit: None,
            size: None,
            layout: None,
            label: None,
            label_optional: None,
            description: None,
            error: PropValue::Static(None),
            icon: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
            on_key_down: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_sources() {
        let fixed: PropValue<String> = "fixed".into();
        assert_eq!(fixed.get(), "fixed");

        let source = signal("one".to_string());
        let bound: PropValue<String> = source.clone().into();
        source.set("two".to_string());
        assert_eq!(bound.get(), "two");

        let computed = PropValue::getter(|| 21 * 2);
        assert_eq!(computed.get(), 42);
    }

    #[test]
    fn test_error_prop_from_str() {
        let error: PropValue<Option<String>> = "Required".into();
        assert_eq!(error.get(), Some("Required".to_string()));
        assert_eq!(PropValue::<Option<String>>::default().get(), None);
    }

    #[test]
    fn test_input_defaults() {
        let props = InputProps::new("value");
        assert_eq!(props.value.get(), "value");
        assert_eq!(props.size, ControlSize::Medium);
        assert_eq!(props.input_type, InputType::Text);
        assert!(props.layout.is_none());
        assert!(!props.disabled.get());
        assert!(!props.copy && !props.reveal);
        assert!(props.actions.is_empty());
    }

    #[test]
    fn test_text_area_defaults() {
        let props = TextAreaProps::default();
        assert_eq!(props.rows, 4);
        assert!(props.size.is_none());
        assert!(props.limit.is_none());
        assert!(!props.auto_complete);
    }

    #[test]
    fn test_action_builder() {
        let action = Action::new("regen", "Regenerate").on_press(|| {});
        assert_eq!(action.id, "regen");
        assert!(action.on_press.is_some());
        assert!(format!("{action:?}").contains("Regenerate"));
    }
}
