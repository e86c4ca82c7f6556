//! Taffy Frame - default Field Frame backed by Taffy flexbox.
//!
//! Builds a small Taffy tree per field and reads positions back as absolute
//! cell rectangles.
//!
//! ```text
//! Vertical                         Horizontal
//! ┌──────────────────────────┐     ┌────────┬─────────────────┐
//! │ label  optional          │     │ label  │ [icon text act] │
//! │ [icon  text    actions]  │     │        │         counter │
//! │                  counter │     │        │ error           │
//! │ error                    │     │        │ description     │
//! │ description              │     └────────┴─────────────────┘
//! └──────────────────────────┘
//! ```
//!
//! The control box has a one-cell border on every side.

use taffy::{
    AlignSelf, AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId,
    Rect as TaffyRect, Size, Style, TaffyTree,
};

use crate::error::LayoutError;
use crate::primitives::frame::{FieldFrame, FrameLayout};
use crate::primitives::view::FieldView;
use crate::types::{FieldLayout, Rect};

use super::text_measure::{measure_text_height, string_width};

/// Widest the label column gets in horizontal layout, as a share of the field.
const LABEL_COLUMN_SHARE: u16 = 3;

/// Cells between a label and its optional marker.
const MARKER_GAP: u16 = 1;

/// Width of an action button: label plus brackets.
pub fn action_width(label: &str) -> u16 {
    string_width(label).saturating_add(2)
}

fn engine_error(err: taffy::TaffyError) -> LayoutError {
    LayoutError::Engine(format!("{err:?}"))
}

// =============================================================================
// STYLES
// =============================================================================

fn fixed(width: Dimension, height: f32) -> Style {
    Style {
        size: Size {
            width,
            height: Dimension::Length(height),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn column(width: Dimension) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        size: Size {
            width,
            height: Dimension::Auto,
        },
        ..Default::default()
    }
}

// =============================================================================
// TREE
// =============================================================================

/// Nodes of one field, kept for reading results back.
#[derive(Default)]
struct FieldNodes {
    label_column: Option<NodeId>,
    content_column: Option<NodeId>,
    label: Option<NodeId>,
    control: Option<NodeId>,
    icon: Option<NodeId>,
    text: Option<NodeId>,
    actions: Vec<NodeId>,
    counter: Option<NodeId>,
    error: Option<NodeId>,
    description: Option<NodeId>,
}

/// The default [`FieldFrame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TaffyFrame;

impl TaffyFrame {
    pub fn new() -> Self {
        Self
    }

    fn label_width(view: &FieldView) -> u16 {
        let Some(label) = &view.frame.label else {
            return 0;
        };
        let mut width = string_width(label);
        if let Some(marker) = &view.frame.label_optional {
            width = width
                .saturating_add(MARKER_GAP)
                .saturating_add(string_width(marker));
        }
        width
    }

    fn build(
        tree: &mut TaffyTree<()>,
        view: &FieldView,
        width: u16,
        nodes: &mut FieldNodes,
    ) -> Result<NodeId, LayoutError> {
        let horizontal = view.frame.layout_or_default() == FieldLayout::Horizontal
            && view.frame.label.is_some();

        let label_width = Self::label_width(view);
        let label_column_width = if horizontal {
            label_width.saturating_add(1).min(width / LABEL_COLUMN_SHARE).max(1)
        } else {
            width
        };
        let content_width = if horizontal {
            width.saturating_sub(label_column_width)
        } else {
            width
        };

        // Label
        let label = match &view.frame.label {
            Some(text) => {
                let label_height = if horizontal {
                    measure_text_height(text, label_column_width.saturating_sub(1)).max(1)
                } else {
                    1
                };
                let node = tree
                    .new_leaf(fixed(Dimension::Percent(1.0), f32::from(label_height)))
                    .map_err(engine_error)?;
                nodes.label = Some(node);
                Some(node)
            }
            None => None,
        };

        // Control box
        let control = Self::build_control(tree, view, nodes)?;

        // Content below the control
        let mut content = vec![control];

        if let Some(counter) = &view.counter {
            let node = tree
                .new_leaf(Style {
                    align_self: Some(AlignSelf::FlexEnd),
                    ..fixed(Dimension::Length(f32::from(string_width(counter))), 1.0)
                })
                .map_err(engine_error)?;
            nodes.counter = Some(node);
            content.push(node);
        }

        for (text, slot) in [
            (&view.frame.error, &mut nodes.error),
            (&view.frame.description, &mut nodes.description),
        ] {
            if let Some(text) = text {
                let height = measure_text_height(text, content_width).max(1);
                let node = tree
                    .new_leaf(fixed(Dimension::Percent(1.0), f32::from(height)))
                    .map_err(engine_error)?;
                *slot = Some(node);
                content.push(node);
            }
        }

        let root_width = Dimension::Length(f32::from(width));

        if horizontal {
            let label_children: Vec<NodeId> = label.into_iter().collect();
            let label_column = tree
                .new_with_children(
                    Style {
                        flex_shrink: 0.0,
                        ..column(Dimension::Length(f32::from(label_column_width)))
                    },
                    &label_children,
                )
                .map_err(engine_error)?;
            let content_column = tree
                .new_with_children(
                    Style {
                        flex_grow: 1.0,
                        flex_shrink: 1.0,
                        ..column(Dimension::Auto)
                    },
                    &content,
                )
                .map_err(engine_error)?;
            nodes.label_column = Some(label_column);
            nodes.content_column = Some(content_column);

            tree.new_with_children(
                Style {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Row,
                    size: Size {
                        width: root_width,
                        height: Dimension::Auto,
                    },
                    ..Default::default()
                },
                &[label_column, content_column],
            )
            .map_err(engine_error)
        } else {
            let children: Vec<NodeId> = label.into_iter().chain(content).collect();
            tree.new_with_children(column(root_width), &children)
                .map_err(engine_error)
        }
    }

    fn build_control(
        tree: &mut TaffyTree<()>,
        view: &FieldView,
        nodes: &mut FieldNodes,
    ) -> Result<NodeId, LayoutError> {
        let control = &view.control;
        let size = control.size();
        let rows = f32::from(control.kind.rows());

        let mut children = Vec::new();

        if let Some(icon) = &control.icon {
            let icon_width = size.icon_width().max(string_width(icon.glyph()));
            let node = tree
                .new_leaf(fixed(Dimension::Length(f32::from(icon_width)), 1.0))
                .map_err(engine_error)?;
            nodes.icon = Some(node);
            children.push(node);
        }

        let text = tree
            .new_leaf(Style {
                flex_grow: 1.0,
                flex_shrink: 1.0,
                min_size: Size {
                    width: Dimension::Length(0.0),
                    height: Dimension::Auto,
                },
                size: Size {
                    width: Dimension::Auto,
                    height: Dimension::Length(rows),
                },
                ..Default::default()
            })
            .map_err(engine_error)?;
        nodes.text = Some(text);
        children.push(text);

        for action in &control.actions {
            let node = tree
                .new_leaf(fixed(
                    Dimension::Length(f32::from(action_width(&action.label))),
                    1.0,
                ))
                .map_err(engine_error)?;
            nodes.actions.push(node);
            children.push(node);
        }

        let border = LengthPercentage::Length(1.0);
        let padding = LengthPercentage::Length(f32::from(size.padding()));
        let gap = LengthPercentage::Length(f32::from(size.action_gap()));

        let node = tree
            .new_with_children(
                Style {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Row,
                    size: Size {
                        width: Dimension::Percent(1.0),
                        height: Dimension::Auto,
                    },
                    border: TaffyRect {
                        left: border,
                        right: border,
                        top: border,
                        bottom: border,
                    },
                    padding: TaffyRect {
                        left: padding,
                        right: padding,
                        top: LengthPercentage::Length(0.0),
                        bottom: LengthPercentage::Length(0.0),
                    },
                    gap: Size {
                        width: gap,
                        height: LengthPercentage::Length(0.0),
                    },
                    flex_shrink: 0.0,
                    ..Default::default()
                },
                &children,
            )
            .map_err(engine_error)?;
        nodes.control = Some(node);
        Ok(node)
    }
}

/// Absolute rect of `node` given its parent's absolute origin.
fn place(tree: &TaffyTree<()>, node: NodeId, origin: (u16, u16)) -> Result<Rect, LayoutError> {
    let layout = tree.layout(node).map_err(engine_error)?;
    Ok(Rect::new(
        origin.0.saturating_add(layout.location.x.round() as u16),
        origin.1.saturating_add(layout.location.y.round() as u16),
        layout.size.width.round() as u16,
        layout.size.height.round() as u16,
    ))
}

fn place_opt(
    tree: &TaffyTree<()>,
    node: Option<NodeId>,
    origin: (u16, u16),
) -> Result<Option<Rect>, LayoutError> {
    node.map(|node| place(tree, node, origin)).transpose()
}

impl FieldFrame for TaffyFrame {
    fn layout(&self, view: &FieldView, width: u16) -> Result<FrameLayout, LayoutError> {
        if width == 0 {
            return Err(LayoutError::ZeroWidth);
        }

        let mut tree: TaffyTree<()> = TaffyTree::new();
        let mut nodes = FieldNodes::default();
        let root = Self::build(&mut tree, view, width, &mut nodes)?;

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(f32::from(width)),
                height: AvailableSpace::MaxContent,
            },
        )
        .map_err(engine_error)?;

        let bounds = place(&tree, root, (0, 0))?;
        let origin = (bounds.x, bounds.y);

        let label_origin = match nodes.label_column {
            Some(column) => {
                let rect = place(&tree, column, origin)?;
                (rect.x, rect.y)
            }
            None => origin,
        };
        let content_origin = match nodes.content_column {
            Some(column) => {
                let rect = place(&tree, column, origin)?;
                (rect.x, rect.y)
            }
            None => origin,
        };

        // Label row splits into label text and optional marker
        let label_row = place_opt(&tree, nodes.label, label_origin)?;
        let (label, label_optional) = match (label_row, &view.frame.label) {
            (Some(row), Some(text)) => {
                let text_width = string_width(text).min(row.width);
                let label = Rect::new(row.x, row.y, text_width, row.height);
                let marker = view.frame.label_optional.as_ref().map(|marker| {
                    let x = row.x.saturating_add(text_width).saturating_add(MARKER_GAP);
                    let available = row.x.saturating_add(row.width).saturating_sub(x);
                    Rect::new(x, row.y, string_width(marker).min(available), 1)
                });
                (Some(label), marker)
            }
            _ => (None, None),
        };

        let control_node = nodes
            .control
            .ok_or_else(|| LayoutError::Engine("control node missing".to_string()))?;
        let control = place(&tree, control_node, content_origin)?;
        let control_origin = (control.x, control.y);

        let text_node = nodes
            .text
            .ok_or_else(|| LayoutError::Engine("text node missing".to_string()))?;
        let text = place(&tree, text_node, control_origin)?;

        let actions = nodes
            .actions
            .iter()
            .map(|&node| place(&tree, node, control_origin))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FrameLayout {
            bounds,
            label,
            label_optional,
            control,
            icon: place_opt(&tree, nodes.icon, control_origin)?,
            text,
            actions,
            counter: place_opt(&tree, nodes.counter, content_origin)?,
            error: place_opt(&tree, nodes.error, content_origin)?,
            description: place_opt(&tree, nodes.description, content_origin)?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
