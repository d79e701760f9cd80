use serde::Serialize;

use crate::layout::LayoutPoint;
use crate::selection::Selection;

/// Viewport edge the detail panel is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Panel goes on the same side as the node so it never covers it.
/// `x == 0` resolves to the right.
pub fn resolve_side(selected_x: f64) -> Side {
    if selected_x >= 0.0 { Side::Right } else { Side::Left }
}

/// Side for the current selection; the overview is always on the right.
/// A heading without a computed point is treated as `x = 0`.
pub fn panel_side(selection: Selection, points: &[LayoutPoint]) -> Option<Side> {
    match selection {
        Selection::None => None,
        Selection::Overview => Some(Side::Right),
        Selection::Heading(i) => Some(resolve_side(points.get(i).map_or(0.0, |p| p.x))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::radial_layout;

    #[test]
    fn sign_boundary() {
        assert_eq!(resolve_side(0.0), Side::Right);
        assert_eq!(resolve_side(-0.0), Side::Right);
        assert_eq!(resolve_side(-0.0001), Side::Left);
        assert_eq!(resolve_side(320.0), Side::Right);
        assert_eq!(resolve_side(-320.0), Side::Left);
    }

    #[test]
    fn sides_for_six_headings() {
        let pts = radial_layout(6, 320.0);
        let sides: Vec<Side> = (0..6)
            .map(|i| panel_side(Selection::Heading(i), &pts).unwrap())
            .collect();
        use Side::*;
        assert_eq!(sides, vec![Right, Right, Left, Left, Left, Right]);
    }

    #[test]
    fn overview_and_closed() {
        assert_eq!(panel_side(Selection::Overview, &[]), Some(Side::Right));
        assert_eq!(panel_side(Selection::None, &[]), None);
        assert_eq!(panel_side(Selection::Heading(9), &[]), Some(Side::Right));
    }
}
