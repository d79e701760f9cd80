use serde::Serialize;

use crate::constants::FADED_OPACITY;
use crate::selection::Selection;

/// Render-agnostic look of one heading node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NodeStyle {
    pub opacity: f64,
    pub interactive: bool,
}

impl NodeStyle {
    pub const FULL: NodeStyle = NodeStyle {
        opacity: 1.0,
        interactive: true,
    };
    pub const FADED: NodeStyle = NodeStyle {
        opacity: FADED_OPACITY,
        interactive: false,
    };

    pub fn is_faded(&self) -> bool {
        !self.interactive
    }
}

/// Style of heading `index` under `selection`. While a panel is open every
/// node except the active heading fades and stops taking clicks.
pub fn node_style(selection: Selection, index: usize) -> NodeStyle {
    match selection {
        Selection::None => NodeStyle::FULL,
        Selection::Heading(i) if i == index => NodeStyle::FULL,
        _ => NodeStyle::FADED,
    }
}

pub fn node_styles(selection: Selection, count: usize) -> Vec<NodeStyle> {
    (0..count).map(|i| node_style(selection, i)).collect()
}
