//! Error types for spark-fields.
//!
//! None of these ever reach a component's caller through an event callback.
//! Clipboard failures surface only as copy feedback; layout and output errors
//! are returned from the rendering entry points.

use thiserror::Error;

/// Outcome of a failed clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened in this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was opened but refused the text.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Unknown string value for one of the enumerated options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown input type '{0}'")]
    UnknownInputType(String),

    #[error("unknown control size '{0}'")]
    UnknownSize(String),

    #[error("unknown field layout '{0}'")]
    UnknownLayout(String),
}

/// Failure while laying out a field frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout engine error: {0}")]
    Engine(String),

    #[error("available width must be non-zero")]
    ZeroWidth,
}

/// Failure while writing a frame to the terminal.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
}
