//! Mask/Reveal state for sensitive inputs.
//!
//! A maskable input starts Hidden and shows [`MASK_PLACEHOLDER`] instead of
//! its value. The reveal action moves it to Revealed, and nothing moves it
//! back. Masking only changes what is displayed; the caller's value is never
//! touched.

use spark_signals::{Signal, signal};

/// Text displayed in place of a hidden value, whatever its length.
pub const MASK_PLACEHOLDER: &str = "**** **** **** ****";

/// Whether a maskable value is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Hidden,
    Revealed,
}

impl DisplayMode {
    /// Starting mode for a field. `maskable` is the `reveal` option.
    pub const fn initial(maskable: bool) -> Self {
        if maskable { Self::Hidden } else { Self::Revealed }
    }

    /// The only transition: anything becomes Revealed.
    pub const fn reveal(self) -> Self {
        Self::Revealed
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Text to display for `value` in this mode.
    pub fn display(self, value: &str) -> &str {
        match self {
            Self::Hidden => MASK_PLACEHOLDER,
            Self::Revealed => value,
        }
    }
}

/// Per-instance mask/reveal machine.
///
/// Cloning shares the underlying signal, so closures handed to buttons can
/// trigger the transition.
#[derive(Clone)]
pub struct MaskState {
    maskable: bool,
    mode: Signal<DisplayMode>,
}

impl MaskState {
    pub fn new(maskable: bool) -> Self {
        Self {
            maskable,
            mode: signal(DisplayMode::initial(maskable)),
        }
    }

    pub fn maskable(&self) -> bool {
        self.maskable
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn is_hidden(&self) -> bool {
        self.mode().is_hidden()
    }

    /// The reveal action is offered while a maskable value is hidden.
    pub fn offers_reveal(&self) -> bool {
        self.maskable && self.is_hidden()
    }

    /// Reveal the value. Returns true if this call changed the mode.
    pub fn reveal(&self) -> bool {
        let current = self.mode.get();
        if !current.is_hidden() {
            return false;
        }
        self.mode.set(current.reveal());
        tracing::debug!("masked value revealed");
        true
    }

    /// Text to display for `value` right now.
    pub fn display(&self, value: &str) -> String {
        self.mode().display(value).to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_mirrors_flag() {
        assert_eq!(DisplayMode::initial(true), DisplayMode::Hidden);
        assert_eq!(DisplayMode::initial(false), DisplayMode::Revealed);
    }

    #[test]
    fn test_hidden_displays_placeholder() {
        let mask = MaskState::new(true);
        assert!(mask.is_hidden());
        assert!(mask.offers_reveal());
        assert_eq!(mask.display("4242 4242 4242 4242"), MASK_PLACEHOLDER);
        assert_eq!(mask.display(""), MASK_PLACEHOLDER);
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mask = MaskState::new(true);

        assert!(mask.reveal());
        assert_eq!(mask.mode(), DisplayMode::Revealed);
        assert_eq!(mask.display("secret"), "secret");
        assert!(!mask.offers_reveal());

        // Second reveal changes nothing
        assert!(!mask.reveal());
        assert_eq!(mask.mode(), DisplayMode::Revealed);
    }

    #[test]
    fn test_not_maskable_never_hides() {
        let mask = MaskState::new(false);
        assert!(!mask.is_hidden());
        assert!(!mask.offers_reveal());
        assert!(!mask.reveal());
        assert_eq!(mask.display("plain"), "plain");
    }

    #[test]
    fn test_clones_share_state() {
        let mask = MaskState::new(true);
        let handle = mask.clone();
        handle.reveal();
        assert!(!mask.is_hidden());
    }
}
