//! Decorative wireframes behind each page. Purely cosmetic: a fixed set of
//! 3D line segments turned by a constant amount every frame.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    Globe,
    BinaryTree,
    CodeCanvas,
    Architecture,
    Deadlock,
    Database,
    Robot,
    Graphics,
    Cursor,
    Mobius,
    Organization,
    Helix,
}

/// Rotation added per animation frame (radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub yaw: f64,
    pub pitch: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }
}

pub type Segment = (Point3, Point3);

/// Camera distance from the origin along +z.
pub const CAMERA_Z: f64 = 5.0;

const PALETTE: [&str; 4] = ["#cfa9f9", "#f9dc5c", "#62d0ff", "#dc91ff"];

/// Stroke colour for segment group `i`, cycling a fixed palette.
pub fn stroke_color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

impl SceneKind {
    pub fn spin(self) -> Spin {
        let yaw = match self {
            SceneKind::Globe => 0.001,
            SceneKind::Database => 0.0015,
            SceneKind::Robot | SceneKind::Mobius => 0.003,
            SceneKind::Organization => 0.2 / 60.0,
            SceneKind::Cursor => 0.0005,
            _ => 0.002,
        };
        let pitch = if self == SceneKind::Globe { 0.0005 } else { 0.0 };
        Spin { yaw, pitch }
    }

    pub fn wireframe(self) -> Vec<Segment> {
        match self {
            SceneKind::Globe => sphere(2.0, 6, 12),
            SceneKind::Cursor => sphere(1.0, 3, 6),
            SceneKind::BinaryTree => tree(3, 2),
            SceneKind::Organization => tree(2, 3),
            SceneKind::Helix => helix(1.2, 6.0, 120),
            SceneKind::Mobius => mobius(1.5, 0.4, 64),
            SceneKind::Database => cylinders(1.2, 0.6, 3, 32),
            SceneKind::Robot | SceneKind::Graphics => cube(1.0),
            SceneKind::Architecture => {
                let mut s = cube(1.2);
                s.extend(cube(0.6));
                s
            }
            SceneKind::Deadlock => ring(1.5, 4),
            SceneKind::CodeCanvas => grid(2.0, 8),
        }
    }
}

/// Turn `p` by `yaw` about y, then `pitch` about x, and project it with a
/// pinhole camera at `CAMERA_Z`. Returns canvas offsets (y down) in units of
/// `scale`, or `None` behind the camera.
pub fn project(p: Point3, yaw: f64, pitch: f64, scale: f64) -> Option<(f64, f64)> {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let x = p.x * cy + p.z * sy;
    let z = -p.x * sy + p.z * cy;
    let y = p.y * cp - z * sp;
    let z = p.y * sp + z * cp;
    let depth = CAMERA_Z - z;
    if depth <= 0.1 {
        return None;
    }
    let f = CAMERA_Z / depth * scale;
    Some((x * f, -y * f))
}

fn polyline(pts: &[Point3], closed: bool, out: &mut Vec<Segment>) {
    for w in pts.windows(2) {
        out.push((w[0], w[1]));
    }
    if closed && pts.len() > 2 {
        out.push((pts[pts.len() - 1], pts[0]));
    }
}

fn circle_xz(r: f64, y: f64, k: usize) -> Vec<Point3> {
    (0..k)
        .map(|i| {
            let a = i as f64 * TAU / k as f64;
            Point3::new(r * a.cos(), y, r * a.sin())
        })
        .collect()
}

fn sphere(r: f64, lat: usize, lon: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    for i in 1..lat {
        let phi = PI * i as f64 / lat as f64;
        polyline(&circle_xz(r * phi.sin(), r * phi.cos(), lon * 2), true, &mut out);
    }
    for j in 0..lon {
        let theta = TAU * j as f64 / lon as f64;
        let meridian: Vec<Point3> = (0..=lat * 2)
            .map(|i| {
                let phi = PI * i as f64 / (lat * 2) as f64;
                Point3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.cos(),
                    r * phi.sin() * theta.sin(),
                )
            })
            .collect();
        polyline(&meridian, false, &mut out);
    }
    out
}

fn tree(depth: usize, fan: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut level = vec![Point3::new(0.0, 1.5, 0.0)];
    for d in 1..=depth {
        let spread = 2.4 / d as f64;
        let y = 1.5 - d as f64;
        let mut next = Vec::new();
        for parent in &level {
            for c in 0..fan {
                let t = if fan == 1 {
                    0.0
                } else {
                    c as f64 / (fan - 1) as f64 - 0.5
                };
                let child = Point3::new(parent.x + t * spread, y, parent.z + t * 0.3);
                out.push((*parent, child));
                next.push(child);
            }
        }
        level = next;
    }
    out
}

fn helix(r: f64, height: f64, k: usize) -> Vec<Segment> {
    let step = PI * 10.0 / k as f64;
    let strand = |phase: f64| -> Vec<Point3> {
        (0..k)
            .map(|i| {
                let a = i as f64 * step + phase;
                let y = i as f64 * height / k as f64 - height / 2.0;
                Point3::new(r * a.cos(), y, r * a.sin())
            })
            .collect()
    };
    let (a, b) = (strand(0.0), strand(PI));
    let mut out = Vec::new();
    polyline(&a, false, &mut out);
    polyline(&b, false, &mut out);
    for i in (0..k).step_by(4) {
        out.push((a[i], b[i]));
    }
    out
}

fn mobius(r: f64, w: f64, k: usize) -> Vec<Segment> {
    let at = |u: f64, v: f64| {
        let h = u / 2.0;
        Point3::new(
            (r + v * h.cos()) * u.cos(),
            v * h.sin(),
            (r + v * h.cos()) * u.sin(),
        )
    };
    let mut out = Vec::new();
    for v in [-w, 0.0, w] {
        let edge: Vec<Point3> = (0..=k).map(|i| at(TAU * i as f64 / k as f64, v)).collect();
        polyline(&edge, false, &mut out);
    }
    for i in (0..k).step_by(4) {
        let u = TAU * i as f64 / k as f64;
        out.push((at(u, -w), at(u, w)));
    }
    out
}

fn cylinders(r: f64, gap: f64, n: usize, k: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    let top = gap * (n as f64 - 1.0) / 2.0;
    for i in 0..n {
        polyline(&circle_xz(r, top - gap * i as f64, k), true, &mut out);
    }
    for p in circle_xz(r, top, 8) {
        out.push((p, Point3::new(p.x, -top, p.z)));
    }
    out
}

fn cube(h: f64) -> Vec<Segment> {
    let v = |i: usize| {
        let s = |bit: usize| if i & bit == 0 { -h } else { h };
        Point3::new(s(1), s(2), s(4))
    };
    let mut out = Vec::new();
    for i in 0..8 {
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                out.push((v(i), v(i | bit)));
            }
        }
    }
    out
}

fn ring(r: f64, n: usize) -> Vec<Segment> {
    let nodes = circle_xz(r, 0.0, n);
    let mut out = Vec::new();
    polyline(&nodes, true, &mut out);
    for p in &nodes {
        out.push((*p, Point3::new(p.x, 0.5, p.z)));
    }
    out
}

fn grid(half: f64, n: usize) -> Vec<Segment> {
    let mut out = Vec::new();
    for i in 0..=n {
        let t = -half + 2.0 * half * i as f64 / n as f64;
        out.push((Point3::new(t, -1.0, -half), Point3::new(t, -1.0, half)));
        out.push((Point3::new(-half, -1.0, t), Point3::new(half, -1.0, t)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SceneKind; 12] = [
        SceneKind::Globe,
        SceneKind::BinaryTree,
        SceneKind::CodeCanvas,
        SceneKind::Architecture,
        SceneKind::Deadlock,
        SceneKind::Database,
        SceneKind::Robot,
        SceneKind::Graphics,
        SceneKind::Cursor,
        SceneKind::Mobius,
        SceneKind::Organization,
        SceneKind::Helix,
    ];

    #[test]
    fn every_scene_has_lines_and_turns() {
        for k in ALL {
            assert!(!k.wireframe().is_empty(), "{k:?}");
            let s = k.spin();
            assert!(s.yaw > 0.0 && s.pitch >= 0.0, "{k:?}");
        }
    }

    #[test]
    fn known_increments() {
        assert_eq!(SceneKind::BinaryTree.spin().yaw, 0.002);
        assert_eq!(SceneKind::Robot.spin().yaw, 0.003);
        assert_eq!(SceneKind::Database.spin().yaw, 0.0015);
        assert_eq!(
            SceneKind::Globe.spin(),
            Spin {
                yaw: 0.001,
                pitch: 0.0005
            }
        );
    }

    #[test]
    fn cube_has_twelve_edges() {
        assert_eq!(cube(1.0).len(), 12);
    }

    #[test]
    fn projection_basics() {
        assert_eq!(project(Point3::default(), 0.7, 0.2, 100.0), Some((0.0, 0.0)));
        // Upward points land above the centre on canvas.
        let (_, y) = project(Point3::new(0.0, 1.0, 0.0), 0.0, 0.0, 100.0).unwrap();
        assert!(y < 0.0);
        assert_eq!(project(Point3::new(0.0, 0.0, 6.0), 0.0, 0.0, 1.0), None);
    }

    #[test]
    fn yaw_preserves_radius_in_plane() {
        let p = Point3::new(1.0, 0.0, 0.0);
        let (x0, _) = project(p, 0.0, 0.0, 1.0).unwrap();
        let (x1, _) = project(p, PI, 0.0, 1.0).unwrap();
        assert!((x0 + x1).abs() < 1e-9);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(stroke_color(0), stroke_color(4));
        assert_ne!(stroke_color(0), stroke_color(1));
    }
}
