//! Theme System for spark-fields.
//!
//! Semantic colors for form controls. ANSI colors respect the user's terminal
//! scheme; RGB colors are passed through as-is.
//!
//! The active theme is thread-local and read at paint time, so switching
//! themes takes effect on the next frame.
//!
//! # Example
//!
//! ```ignore
//! use spark_fields::theme::{self, get_preset};
//!
//! theme::set_theme(get_preset("nord").unwrap());
//! let error = theme::active_theme().error.resolve();
//! ```

use std::cell::RefCell;

use crate::types::Rgba;

pub mod presets;
pub mod variant;

pub use presets::*;
pub use variant::{Variant, VariantStyle, variant_style};

// =============================================================================
// ThemeColor
// =============================================================================

/// Theme color can be:
/// - `Default`: terminal's default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: explicit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    #[default]
    Default,
    Ansi(u8),
    Rgb(Rgba),
}

impl ThemeColor {
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// `u8` is an ANSI index.
impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

/// `u32` is an RGB integer (0xRRGGBB).
impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ))
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Colors used by form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    /// Focus ring and the reveal action.
    pub primary: ThemeColor,
    /// "Copied" feedback.
    pub success: ThemeColor,
    /// Error text, indicator and border.
    pub error: ThemeColor,

    pub text: ThemeColor,
    /// Placeholder, description, counter, optional marker.
    pub text_muted: ThemeColor,
    pub text_disabled: ThemeColor,

    pub background: ThemeColor,
    pub border: ThemeColor,
    pub border_focus: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        terminal()
    }
}

impl Theme {
    /// Create a theme with every slot at the terminal default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary: ThemeColor::Default,
            success: ThemeColor::Default,
            error: ThemeColor::Default,
            text: ThemeColor::Default,
            text_muted: ThemeColor::Default,
            text_disabled: ThemeColor::Default,
            background: ThemeColor::Default,
            border: ThemeColor::Default,
            border_focus: ThemeColor::Default,
        }
    }
}

// =============================================================================
// Active theme
// =============================================================================

thread_local! {
    static ACTIVE_THEME: RefCell<Theme> = RefCell::new(terminal());
}

/// Replace the active theme.
pub fn set_theme(theme: Theme) {
    tracing::debug!(theme = %theme.name, "theme changed");
    ACTIVE_THEME.with(|active| *active.borrow_mut() = theme);
}

/// Snapshot of the active theme.
pub fn active_theme() -> Theme {
    ACTIVE_THEME.with(|active| active.borrow().clone())
}

/// Go back to the terminal theme (for testing).
pub fn reset_theme() {
    ACTIVE_THEME.with(|active| *active.borrow_mut() = terminal());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_theme();
    }

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());

        let ansi = ThemeColor::from(1u8).resolve();
        assert!(ansi.is_ansi());
        assert_eq!(ansi.ansi_index(), 1);

        assert_eq!(ThemeColor::from(0xFF5555u32).resolve(), Rgba::rgb(255, 85, 85));
    }

    #[test]
    fn test_set_theme() {
        setup();
        assert_eq!(active_theme().name, "terminal");

        set_theme(dracula());
        assert_eq!(active_theme().name, "dracula");

        reset_theme();
        assert_eq!(active_theme().name, "terminal");
    }

    #[test]
    fn test_new_theme_is_all_default() {
        let theme = Theme::new("blank");
        assert!(theme.error.is_default());
        assert!(theme.border_focus.is_default());
    }
}
