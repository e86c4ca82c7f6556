//! Field Frame contract.
//!
//! Controls describe themselves as a [`FieldView`](super::view::FieldView)
//! and leave placement to a [`FieldFrame`]. The frame owns the label,
//! description and error text around the control; the control owns nothing
//! about layout.
//!
//! The default frame is [`TaffyFrame`](crate::layout::TaffyFrame).

use crate::error::LayoutError;
use crate::types::{ControlSize, FieldLayout, Rect};

use super::view::FieldView;

/// What the frame needs to know about a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameProps {
    pub id: Option<String>,
    pub label: Option<String>,
    /// Marker shown next to the label, e.g. "Optional".
    pub label_optional: Option<String>,
    /// Unset is treated as vertical.
    pub layout: Option<FieldLayout>,
    pub description: Option<String>,
    pub error: Option<String>,
    pub size: Option<ControlSize>,
}

impl FrameProps {
    pub fn layout_or_default(&self) -> FieldLayout {
        self.layout.unwrap_or_default()
    }

    pub fn size_or_default(&self) -> ControlSize {
        self.size.unwrap_or_default()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Where each part of a field ended up, in absolute cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameLayout {
    /// Whole field.
    pub bounds: Rect,
    pub label: Option<Rect>,
    pub label_optional: Option<Rect>,
    /// Control box: icon slot, text and action cluster.
    pub control: Rect,
    pub icon: Option<Rect>,
    pub text: Rect,
    /// One rect per entry of `ControlView::actions`, same order.
    pub actions: Vec<Rect>,
    pub counter: Option<Rect>,
    pub error: Option<Rect>,
    pub description: Option<Rect>,
}

impl FrameLayout {
    /// Index of the action under a cell, if any.
    pub fn action_at(&self, x: u16, y: u16) -> Option<usize> {
        self.actions.iter().position(|rect| rect.contains(x, y))
    }
}

/// Lays out a field within a given width.
pub trait FieldFrame {
    fn layout(&self, view: &FieldView, width: u16) -> Result<FrameLayout, LayoutError>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_defaults() {
        let props = FrameProps::default();
        assert_eq!(props.layout_or_default(), FieldLayout::Vertical);
        assert_eq!(props.size_or_default(), ControlSize::Medium);
        assert!(!props.has_error());
    }

    #[test]
    fn test_action_at() {
        let layout = FrameLayout {
            actions: vec![Rect::new(10, 1, 4, 1), Rect::new(15, 1, 6, 1)],
            ..FrameLayout::default()
        };
        assert_eq!(layout.action_at(12, 1), Some(0));
        assert_eq!(layout.action_at(15, 1), Some(1));
        assert_eq!(layout.action_at(14, 1), None);
        assert_eq!(layout.action_at(12, 0), None);
    }
}
