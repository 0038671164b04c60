//! Deterministic column-packed layout for reconstructed nodes.
//!
//! The packer is a single-pass greedy algorithm, not an optimal bin-packer:
//! nodes are stacked top to bottom in creation order and a new column starts
//! once the running column height passes [`MAX_COLUMN_HEIGHT`]. The required
//! property is reproducibility (same input, same layout), not visual
//! optimality.

use crate::graph::NodeRecord;

/// Uniform node width.
pub const NODE_WIDTH: f32 = 250.0;
/// Height of a node with no ports and no widget values (title bar + body).
pub const BASE_HEIGHT: f32 = 60.0;
/// Height added per visible parameter (port row or widget row).
pub const PARAM_HEIGHT: f32 = 20.0;
/// Horizontal spacing between columns.
pub const GUTTER_X: f32 = 80.0;
/// Vertical spacing between stacked nodes.
pub const GUTTER_Y: f32 = 40.0;
/// Column height threshold after which the next node starts a new column.
pub const MAX_COLUMN_HEIGHT: f32 = 1200.0;
/// Canvas origin for the first node.
pub const ORIGIN: (f32, f32) = (100.0, 100.0);

/// Visual height of a node: port rows on the taller side plus one row per
/// widget value, on top of the base height.
pub fn node_height(node: &NodeRecord) -> f32 {
    let param_count = node.inputs.len().max(node.outputs.len()) + node.widgets_values.len();
    PARAM_HEIGHT * param_count as f32 + BASE_HEIGHT
}

pub(super) struct LayoutEngine;

impl LayoutEngine {
    pub(super) fn assign(nodes: &mut [NodeRecord]) {
        let (origin_x, origin_y) = ORIGIN;
        let mut x = origin_x;
        let mut y = origin_y;
        let mut column_height = 0.0_f32;

        for node in nodes {
            if column_height > MAX_COLUMN_HEIGHT {
                x += NODE_WIDTH + GUTTER_X;
                y = origin_y;
                column_height = 0.0;
            }

            let height = node_height(node);
            node.pos = [x, y];
            node.size = [NODE_WIDTH, height];

            y += height + GUTTER_Y;
            column_height += height + GUTTER_Y;
        }
    }
}
