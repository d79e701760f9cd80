//! Radial layout: N nodes at equal angular steps on a circle around the
//! page centre.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::constants::{
    HOME_BREAKPOINT_PX, HOME_RADIUS_NARROW_PX, HOME_RADIUS_WIDE_PX, TOPIC_RADIUS_PX,
};

/// Pixel offset from the page centre. Positive `y` points down, as in CSS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for LayoutPoint {
    fn from(v: (f64, f64)) -> Self {
        LayoutPoint { x: v.0, y: v.1 }
    }
}

/// Angle (radians) of node `index` out of `count`. Zero points right.
pub fn angle_of(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (index as f64 / count as f64) * TAU
}

/// Place `count` nodes on a circle of `radius`. Index `i` of the result
/// belongs to heading `i`; an empty input yields an empty layout.
pub fn radial_layout(count: usize, radius: f64) -> Vec<LayoutPoint> {
    (0..count)
        .map(|i| {
            let (s, c) = angle_of(i, count).sin_cos();
            LayoutPoint {
                x: radius * c,
                y: radius * s,
            }
        })
        .collect()
}

/// How a page picks its radius from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusPolicy {
    Fixed(f64),
    Responsive {
        narrow: f64,
        wide: f64,
        breakpoint: f64,
    },
}

impl RadiusPolicy {
    pub const TOPIC: RadiusPolicy = RadiusPolicy::Fixed(TOPIC_RADIUS_PX);
    pub const HOME: RadiusPolicy = RadiusPolicy::Responsive {
        narrow: HOME_RADIUS_NARROW_PX,
        wide: HOME_RADIUS_WIDE_PX,
        breakpoint: HOME_BREAKPOINT_PX,
    };

    pub fn radius_for(&self, viewport_width: f64) -> f64 {
        match *self {
            RadiusPolicy::Fixed(r) => r,
            RadiusPolicy::Responsive {
                narrow,
                wide,
                breakpoint,
            } => {
                if viewport_width < breakpoint {
                    narrow
                } else {
                    wide
                }
            }
        }
    }
}

/// Straight line from the centre to a node, as length plus rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Connector {
    pub length: f64,
    pub angle: f64,
}

impl Connector {
    pub fn to(p: LayoutPoint) -> Self {
        Connector {
            length: p.x.hypot(p.y),
            angle: p.y.atan2(p.x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn six_nodes_at_320() {
        let pts = radial_layout(6, 320.0);
        assert_eq!(pts.len(), 6);
        assert!(close(pts[0].x, 320.0) && close(pts[0].y, 0.0));
        assert!(close(pts[3].x, -320.0) && pts[3].y.abs() < 1e-6);
        for p in &pts {
            assert!(close(p.x.hypot(p.y), 320.0));
        }
    }

    #[test]
    fn layout_is_repeatable() {
        assert_eq!(radial_layout(6, 320.0), radial_layout(6, 320.0));
        assert_eq!(radial_layout(12, 410.0), radial_layout(12, 410.0));
    }

    #[test]
    fn empty_layout() {
        assert!(radial_layout(0, 320.0).is_empty());
        assert_eq!(angle_of(3, 0), 0.0);
    }

    #[test]
    fn angles_partition_the_circle() {
        for count in 1..=13 {
            let step = TAU / count as f64;
            let angles: Vec<f64> = (0..count).map(|i| angle_of(i, count)).collect();
            assert_eq!(angles[0], 0.0);
            for w in angles.windows(2) {
                assert!(w[1] > w[0]);
                assert!(close(w[1] - w[0], step));
            }
            assert!(*angles.last().unwrap() < TAU);
        }
    }

    #[test]
    fn single_node_sits_on_the_right() {
        let pts = radial_layout(1, 50.0);
        assert_eq!(pts, vec![LayoutPoint { x: 50.0, y: 0.0 }]);
    }

    #[test]
    fn responsive_radius_switches_at_breakpoint() {
        let p = RadiusPolicy::HOME;
        assert_eq!(p.radius_for(800.0), 340.0);
        assert_eq!(p.radius_for(1199.9), 340.0);
        assert_eq!(p.radius_for(1200.0), 420.0);
        assert_eq!(RadiusPolicy::TOPIC.radius_for(300.0), 320.0);
    }

    #[test]
    fn connector_matches_point() {
        let c = Connector::to(LayoutPoint { x: 0.0, y: 320.0 });
        assert!(close(c.length, 320.0));
        assert!(close(c.angle, std::f64::consts::FRAC_PI_2));
        let c = Connector::to(LayoutPoint { x: -3.0, y: -4.0 });
        assert!(close(c.length, 5.0));
    }
}
