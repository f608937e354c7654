use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Affine, BezPath, Point, Vec2};

use crate::{ArcShape, LinkCurve};

/// Turns sampled shapes into whatever the host draws with.
///
/// Shapes are relative to their ring center; `origin` is that center in the drawing frame.
pub trait Renderer {
    type Path;

    fn arc(&mut self, origin: Point, shape: &ArcShape) -> Self::Path;

    fn link(&mut self, curve: &LinkCurve) -> Self::Path;
}

/// Emits `kurbo` Bézier paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathRenderer {
    /// Flattening tolerance for arc approximation.
    pub tolerance: f64,
}

impl Default for PathRenderer {
    fn default() -> Self {
        Self { tolerance: 0.1 }
    }
}

impl Renderer for PathRenderer {
    type Path = BezPath;

    fn arc(&mut self, origin: Point, shape: &ArcShape) -> BezPath {
        let mut path = arc_path(shape, self.tolerance);
        if origin != Point::ORIGIN {
            path.apply_affine(Affine::translate(origin.to_vec2()));
        }
        path
    }

    fn link(&mut self, curve: &LinkCurve) -> BezPath {
        basis_path(&curve.points)
    }
}

// Full turns are drawn as rings; anything within this of 2π counts.
const FULL_TURN_EPSILON: f64 = 1e-9;

fn polar(radius: f64, angle: f64) -> Point {
    (Vec2::from_angle(angle - FRAC_PI_2) * radius).to_point()
}

fn append_arc(path: &mut BezPath, radius: f64, start_angle: f64, sweep: f64, tolerance: f64) {
    let arc = kurbo::Arc {
        center: Point::ORIGIN,
        radii: Vec2::new(radius, radius),
        start_angle: start_angle - FRAC_PI_2,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(tolerance));
}

/// Outline of an annular sector centered on the origin.
///
/// Collapsed shapes produce an empty path. Sweeps of a full turn or more produce a ring of two
/// subpaths (outer clockwise, inner counter-clockwise).
pub fn arc_path(shape: &ArcShape, tolerance: f64) -> BezPath {
    let mut path = BezPath::new();
    let sweep = shape.sweep();
    let r0 = shape.inner_radius.min(shape.outer_radius);
    let r1 = shape.inner_radius.max(shape.outer_radius);
    if shape.is_collapsed() || r1 <= 0.0 {
        return path;
    }

    if sweep >= TAU - FULL_TURN_EPSILON || sweep <= -(TAU - FULL_TURN_EPSILON) {
        path.move_to(polar(r1, shape.start_angle));
        append_arc(&mut path, r1, shape.start_angle, TAU, tolerance);
        path.close_path();
        if r0 > 0.0 {
            path.move_to(polar(r0, shape.start_angle));
            append_arc(&mut path, r0, shape.start_angle, -TAU, tolerance);
            path.close_path();
        }
        return path;
    }

    path.move_to(polar(r1, shape.start_angle));
    append_arc(&mut path, r1, shape.start_angle, sweep, tolerance);
    if r0 > 0.0 {
        path.line_to(polar(r0, shape.end_angle));
        append_arc(&mut path, r0, shape.end_angle, -sweep, tolerance);
    } else {
        path.line_to(Point::ORIGIN);
    }
    path.close_path();
    path
}

fn basis_point(a: Point, wa: f64, b: Point, wb: f64, c: Point, wc: f64, total: f64) -> Point {
    ((a.to_vec2() * wa + b.to_vec2() * wb + c.to_vec2() * wc) / total).to_point()
}

/// Uniform cubic B-spline through `points`, clamped to the first and last point.
///
/// Two points give a straight segment.
pub fn basis_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let (first, rest) = match points {
        [] => return path,
        [only] => {
            path.move_to(*only);
            return path;
        }
        [a, b] => {
            path.move_to(*a);
            path.line_to(*b);
            return path;
        }
        [first, rest @ ..] => (*first, rest),
    };

    path.move_to(first);
    let (mut p0, mut p1) = (first, rest[0]);
    path.line_to(basis_point(p0, 5.0, p1, 1.0, p1, 0.0, 6.0));

    let segment = |path: &mut BezPath, p0: Point, p1: Point, p: Point| {
        path.curve_to(
            basis_point(p0, 2.0, p1, 1.0, p, 0.0, 3.0),
            basis_point(p0, 1.0, p1, 2.0, p, 0.0, 3.0),
            basis_point(p0, 1.0, p1, 4.0, p, 1.0, 6.0),
        );
    };
    for &p in &rest[1..] {
        segment(&mut path, p0, p1, p);
        p0 = p1;
        p1 = p;
    }
    segment(&mut path, p0, p1, p1);
    path.line_to(p1);
    path
}
