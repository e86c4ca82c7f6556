//! Variant system for consistent field theming.
//!
//! Every painted part of a field (label, control border, action buttons,
//! help text) picks a semantic variant; the variant resolves to colors
//! against the active theme.
//!
//! # Example
//!
//! ```ignore
//! use spark_fields::theme::{Variant, variant_style};
//!
//! let style = variant_style(Variant::Error);
//! println!("fg: {:?}, border: {:?}", style.fg, style.border);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::types::Rgba;

use super::active_theme;

// =============================================================================
// Variant Enum
// =============================================================================

/// Semantic variants for field parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Variant {
    /// Default styling (text on background)
    #[default]
    Default,
    /// Focus and primary actions
    Primary,
    /// Success feedback
    Success,
    /// Error state
    Error,
    /// Secondary text (placeholder, description, counter)
    Muted,
    /// Disabled controls
    Disabled,
}

impl Variant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Error => "error",
            Self::Muted => "muted",
            Self::Disabled => "disabled",
        }
    }

    pub const fn all() -> &'static [Variant] {
        &[
            Self::Default,
            Self::Primary,
            Self::Success,
            Self::Error,
            Self::Muted,
            Self::Disabled,
        ]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ();

    /// Parse from string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|variant| variant.as_str() == lower)
            .ok_or(())
    }
}

// =============================================================================
// VariantStyle
// =============================================================================

/// Resolved colors for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Foreground (text) color
    pub fg: Rgba,
    /// Background color
    pub bg: Rgba,
    /// Border color
    pub border: Rgba,
}

/// Resolve a variant against the active theme.
pub fn variant_style(variant: Variant) -> VariantStyle {
    let theme = active_theme();
    let bg = theme.background.resolve();

    match variant {
        Variant::Default => VariantStyle {
            fg: theme.text.resolve(),
            bg,
            border: theme.border.resolve(),
        },
        Variant::Primary => VariantStyle {
            fg: theme.primary.resolve(),
            bg,
            border: theme.border_focus.resolve(),
        },
        Variant::Success => VariantStyle {
            fg: theme.success.resolve(),
            bg,
            border: theme.success.resolve(),
        },
        Variant::Error => VariantStyle {
            fg: theme.error.resolve(),
            bg,
            border: theme.error.resolve(),
        },
        Variant::Muted => VariantStyle {
            fg: theme.text_muted.resolve(),
            bg,
            border: theme.border.resolve(),
        },
        Variant::Disabled => VariantStyle {
            fg: theme.text_disabled.resolve(),
            bg,
            border: theme.text_disabled.resolve(),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dracula, reset_theme, set_theme};

    #[test]
    fn test_parse_roundtrip_names() {
        for variant in Variant::all() {
            assert_eq!(variant.as_str().parse::<Variant>(), Ok(*variant));
        }
        assert_eq!("ERROR".parse::<Variant>(), Ok(Variant::Error));
        assert!("loud".parse::<Variant>().is_err());
    }

    #[test]
    fn test_error_variant_follows_theme() {
        reset_theme();
        assert_eq!(variant_style(Variant::Error).fg, Rgba::ansi(1));

        set_theme(dracula());
        assert_eq!(variant_style(Variant::Error).fg, Rgba::rgb(0xff, 0x55, 0x55));
        assert_eq!(variant_style(Variant::Primary).border, Rgba::rgb(0xbd, 0x93, 0xf9));
        reset_theme();
    }
}
