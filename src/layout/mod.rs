//! Layout Module - Field Frame placement with Taffy
//!
//! [`TaffyFrame`] is the default [`FieldFrame`]: it turns a
//! [`FieldView`] into absolute cell rectangles for the label, control,
//! decorations, counter, error text and description.
//!
//! # Example
//!
//! ```ignore
//! use spark_fields::layout::layout_field;
//!
//! let layout = layout_field(&field.view(), 60)?;
//! println!("control at {:?}", layout.control);
//! ```
//!
//! [`FieldFrame`]: crate::primitives::frame::FieldFrame
//! [`FieldView`]: crate::primitives::view::FieldView

mod taffy_frame;
mod text_measure;

pub use taffy_frame::{TaffyFrame, action_width};
pub use text_measure::*;

use crate::error::LayoutError;
use crate::primitives::frame::{FieldFrame, FrameLayout};
use crate::primitives::view::FieldView;

/// Lay out a field with the default frame.
pub fn layout_field(view: &FieldView, width: u16) -> Result<FrameLayout, LayoutError> {
    TaffyFrame.layout(view, width)
}
