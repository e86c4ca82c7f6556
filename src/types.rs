//! Core types for spark-fields.
//!
//! Colors, cell attributes, geometry and the enumerated configuration options
//! shared by every form control.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an ANSI palette color (0-255).
    ///
    /// Uses special marker: r=-2, g=palette_index.
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// ANSI palette index (only valid if `is_ansi()`).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for a wide-char continuation).
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

// =============================================================================
// Control Size
// =============================================================================

/// Size scale shared by a control and all of its decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ControlSize {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl ControlSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }

    /// Horizontal padding inside the control, in cells.
    pub const fn padding(self) -> u16 {
        match self {
            Self::Tiny => 0,
            Self::Small | Self::Medium => 1,
            Self::Large | Self::XLarge => 2,
        }
    }

    /// Width of the leading icon slot, in cells.
    pub const fn icon_width(self) -> u16 {
        match self {
            Self::Tiny | Self::Small => 2,
            Self::Medium | Self::Large => 3,
            Self::XLarge => 4,
        }
    }

    /// Gap between the buttons of the action cluster.
    pub const fn action_gap(self) -> u16 {
        match self {
            Self::Tiny => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for ControlSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiny" => Ok(Self::Tiny),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "xlarge" => Ok(Self::XLarge),
            _ => Err(ParseError::UnknownSize(s.to_string())),
        }
    }
}

// =============================================================================
// Field Layout
// =============================================================================

/// Orientation of the label relative to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FieldLayout {
    /// Label column beside the control.
    Horizontal,
    /// Label stacked above the control.
    #[default]
    Vertical,
}

impl FieldLayout {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for FieldLayout {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseError::UnknownLayout(s.to_string())),
        }
    }
}

// =============================================================================
// Input Type
// =============================================================================

/// Glyph a password entry shows for each character.
pub const PASSWORD_GLYPH: char = '•';

/// Kind of single-line text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum InputType {
    Color,
    Date,
    DatetimeLocal,
    Email,
    Month,
    Number,
    Password,
    Reset,
    Search,
    Submit,
    Tel,
    #[default]
    Text,
    Time,
    Url,
    Week,
}

impl InputType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Email => "email",
            Self::Month => "month",
            Self::Number => "number",
            Self::Password => "password",
            Self::Reset => "reset",
            Self::Search => "search",
            Self::Submit => "submit",
            Self::Tel => "tel",
            Self::Text => "text",
            Self::Time => "time",
            Self::Url => "url",
            Self::Week => "week",
        }
    }

    /// Get all input types.
    pub const fn all() -> &'static [InputType] {
        &[
            Self::Color,
            Self::Date,
            Self::DatetimeLocal,
            Self::Email,
            Self::Month,
            Self::Number,
            Self::Password,
            Self::Reset,
            Self::Search,
            Self::Submit,
            Self::Tel,
            Self::Text,
            Self::Time,
            Self::Url,
            Self::Week,
        ]
    }

    /// Password entries are shown with one mask glyph per character.
    pub const fn is_password(self) -> bool {
        matches!(self, Self::Password)
    }

    /// Button-like kinds render their value as a label and take no text edits.
    pub const fn is_button(self) -> bool {
        matches!(self, Self::Reset | Self::Submit)
    }

    /// Text the native element shows for `value`.
    pub fn present(self, value: &str) -> String {
        if self.is_password() {
            value.chars().map(|_| PASSWORD_GLYPH).collect()
        } else {
            value.to_string()
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| ParseError::UnknownInputType(s.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
