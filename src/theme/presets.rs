//! Theme presets.
//!
//! - terminal (default, ANSI colors only)
//! - dracula
//! - nord
//! - gruvbox

use super::{Theme, ThemeColor};

// =============================================================================
// Terminal Theme (Default)
// =============================================================================

/// Terminal theme - uses ANSI colors to respect the user's terminal theme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        primary: ThemeColor::Ansi(12),  // bright blue
        success: ThemeColor::Ansi(2),   // green
        error: ThemeColor::Ansi(1),     // red
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        text_disabled: ThemeColor::Ansi(8),
        background: ThemeColor::Default,
        border: ThemeColor::Ansi(7),
        border_focus: ThemeColor::Ansi(12),
    }
}

// =============================================================================
// RGB Themes
// =============================================================================

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        primary: 0xbd93f9_u32.into(),
        success: 0x50fa7b_u32.into(),
        error: 0xff5555_u32.into(),
        text: 0xf8f8f2_u32.into(),
        text_muted: 0x6272a4_u32.into(),
        text_disabled: 0x44475a_u32.into(),
        background: 0x282a36_u32.into(),
        border: 0x6272a4_u32.into(),
        border_focus: 0xbd93f9_u32.into(),
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        primary: 0x88c0d0_u32.into(),
        success: 0xa3be8c_u32.into(),
        error: 0xbf616a_u32.into(),
        text: 0xd8dee9_u32.into(),
        text_muted: 0x4c566a_u32.into(),
        text_disabled: 0x3b4252_u32.into(),
        background: 0x2e3440_u32.into(),
        border: 0x4c566a_u32.into(),
        border_focus: 0x88c0d0_u32.into(),
    }
}

pub fn gruvbox() -> Theme {
    Theme {
        name: "gruvbox".to_string(),
        primary: 0x83a598_u32.into(),
        success: 0xb8bb26_u32.into(),
        error: 0xfb4934_u32.into(),
        text: 0xebdbb2_u32.into(),
        text_muted: 0x928374_u32.into(),
        text_disabled: 0x665c54_u32.into(),
        background: 0x282828_u32.into(),
        border: 0x665c54_u32.into(),
        border_focus: 0x83a598_u32.into(),
    }
}

/// Get a preset by name (case-insensitive).
pub fn get_preset(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        "gruvbox" => Some(gruvbox()),
        _ => None,
    }
}

/// Names accepted by [`get_preset`].
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "dracula", "nord", "gruvbox"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in preset_names() {
            let theme = get_preset(name).unwrap();
            assert_eq!(theme.name, *name);
        }
        assert!(get_preset("DRACULA").is_some());
        assert!(get_preset("missing").is_none());
    }

    #[test]
    fn test_terminal_uses_ansi() {
        let theme = terminal();
        assert!(theme.error.resolve().is_ansi());
        assert!(theme.text.resolve().is_terminal_default());
    }
}
