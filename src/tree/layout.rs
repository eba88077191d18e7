//! Layout normalization for talent node positions.
//!
//! Raw positions come from the game's trait editor coordinates. They are
//! mapped into a fixed grid box of padded icon cells so every renderer sees
//! the same coordinates for the same tree.

use serde::Serialize;

use super::TalentNode;

pub const ICON_SIZE: f64 = 56.0;
pub const ICON_PADDING: f64 = 23.0;
pub const PADDED_ICON_SIZE: f64 = ICON_SIZE + ICON_PADDING * 2.0;
pub const TREE_COLUMNS: u32 = 9;
pub const TREE_ROWS: u32 = 10;
/// Extra horizontal room, in cells, for choice nodes fanning out.
pub const CHOICE_SLACK_COLUMNS: f64 = 0.5;

/// Size of the box the normalized nodes live in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TreeSize {
    pub width: f64,
    pub height: f64,
}

impl TreeSize {
    pub fn grid() -> Self {
        Self {
            width: (TREE_COLUMNS as f64 + CHOICE_SLACK_COLUMNS) * PADDED_ICON_SIZE,
            height: TREE_ROWS as f64 * PADDED_ICON_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

fn bounds(nodes: &[TalentNode]) -> Option<Bounds> {
    let first = nodes.first()?;
    let mut b = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for node in nodes {
        b.min_x = b.min_x.min(node.x);
        b.min_y = b.min_y.min(node.y);
        b.max_x = b.max_x.max(node.x);
        b.max_y = b.max_y.max(node.y);
    }
    Some(b)
}

/// Rewrite node `x`/`y` into layout coordinates and return the box size.
///
/// Each axis maps `[min, max]` onto the cell centers of the grid, using
/// `max(1, max - min)` as the divisor so a single row or column does not
/// divide by zero. An empty node list has a zero size.
pub fn normalize_nodes(nodes: &mut [TalentNode]) -> TreeSize {
    let Some(b) = bounds(nodes) else {
        return TreeSize::default();
    };

    let inset = PADDED_ICON_SIZE * 0.5;
    let span_x = (TREE_COLUMNS - 1) as f64 * PADDED_ICON_SIZE;
    let span_y = (TREE_ROWS - 1) as f64 * PADDED_ICON_SIZE;
    let range_x = (b.max_x - b.min_x).max(1.0);
    let range_y = (b.max_y - b.min_y).max(1.0);

    for node in nodes.iter_mut() {
        node.x = inset + (node.x - b.min_x) / range_x * span_x;
        node.y = inset + (node.y - b.min_y) / range_y * span_y;
    }

    TreeSize::grid()
}
