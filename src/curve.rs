//! Bezier curves
//!
//! Evaluation, subdivision and flattening of quadratic and cubic curves.
//! Flattening picks a segment count from a bound on the distance between
//! the curve and its chords, so the polyline stays within a tolerance of the
//! curve.

use crate::path::Point;

/// Evaluate a quadratic at `t`
pub fn eval_quad(p: &[Point; 3], t: f64) -> Point {
    let s = 1.0 - t;
    p[0] * (s * s) + p[1] * (2.0 * t * s) + p[2] * (t * t)
}

/// Evaluate a cubic at `t`
pub fn eval_cubic(p: &[Point; 4], t: f64) -> Point {
    let s = 1.0 - t;
    p[0] * (s * s * s) + p[1] * (3.0 * t * s * s) + p[2] * (3.0 * s * t * t) + p[3] * (t * t * t)
}

/// Split a quadratic at `t` into two quadratics sharing `dst[2]`
pub fn chop_quad_at(src: &[Point; 3], t: f64) -> [Point; 5] {
    let ab = src[0].lerp(src[1], t);
    let bc = src[1].lerp(src[2], t);
    let p = ab.lerp(bc, t);
    [src[0], ab, p, bc, src[2]]
}

/// Split a cubic at `t` into two cubics sharing `dst[3]`
pub fn chop_cubic_at(src: &[Point; 4], t: f64) -> [Point; 7] {
    let p0 = src[0].lerp(src[1], t);
    let p1 = src[1].lerp(src[2], t);
    let p2 = src[2].lerp(src[3], t);
    let q0 = p0.lerp(p1, t);
    let q1 = p1.lerp(p2, t);
    let p = q0.lerp(q1, t);
    [src[0], p0, q0, p, q1, p2, src[3]]
}

/// All points lie on one line
fn is_flat(p: &[Point]) -> bool {
    let base = p[0];
    let dir = p.iter()
        .map(|&q| q - base)
        .fold(Point::new(0.0, 0.0), |a, q| if q.length() > a.length() { q } else { a });
    let far = dir.length();
    far == 0.0 || p.iter().all(|&q| dir.cross(q - base).abs() <= 1e-9 * far * far)
}

/// Number of line segments needed to approximate a quadratic
///
/// A curve whose control points are colinear always takes a single segment.
/// The count never exceeds [`MAX_CURVE_SEGMENTS`].
pub fn quad_segments(p: &[Point; 3], tolerance: f64) -> usize {
    if is_flat(p) {
        return 1;
    }
    let err = (p[0] - p[1] * 2.0 + p[2]) * 0.25;
    segments_for(err.length() / tolerance)
}

/// Number of line segments needed to approximate a cubic
///
/// A curve whose control points are colinear always takes a single segment.
/// The count never exceeds [`MAX_CURVE_SEGMENTS`].
pub fn cubic_segments(p: &[Point; 4], tolerance: f64) -> usize {
    if is_flat(p) {
        return 1;
    }
    let e0 = p[0] - p[1] * 2.0 + p[2];
    let e1 = p[1] - p[2] * 2.0 + p[3];
    let err = Point::new(e0.x.abs().max(e1.x.abs()), e0.y.abs().max(e1.y.abs()));
    segments_for(3.0 * err.length() / (4.0 * tolerance))
}

/// Most line segments a single curve is split into
pub const MAX_CURVE_SEGMENTS: usize = 1024;

fn segments_for(v: f64) -> usize {
    let n = v.sqrt().ceil();
    if !(n > 1.0) {
        1
    } else if n >= MAX_CURVE_SEGMENTS as f64 {
        MAX_CURVE_SEGMENTS
    } else {
        n as usize
    }
}

/// Flatten a quadratic, calling `line(p0, p1)` for each segment in order
///
/// The last segment ends exactly on `p[2]`.
///
///     use scanpaint::{flatten_quad, Point};
///     let q = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 10.0)];
///     let mut n = 0;
///     flatten_quad(&q, 0.25, |_, _| n += 1);
///     assert_eq!(n, 1);
///
pub fn flatten_quad<F>(p: &[Point; 3], tolerance: f64, mut line: F)
    where F: FnMut(Point, Point)
{
    let n = quad_segments(p, tolerance);
    flatten(n, p[0], p[2], |t| eval_quad(p, t), &mut line);
}

/// Flatten a cubic, calling `line(p0, p1)` for each segment in order
///
/// The last segment ends exactly on `p[3]`.
pub fn flatten_cubic<F>(p: &[Point; 4], tolerance: f64, mut line: F)
    where F: FnMut(Point, Point)
{
    let n = cubic_segments(p, tolerance);
    flatten(n, p[0], p[3], |t| eval_cubic(p, t), &mut line);
}

fn flatten<E, F>(n: usize, start: Point, end: Point, eval: E, line: &mut F)
    where E: Fn(f64) -> Point,
          F: FnMut(Point, Point)
{
    let dt = 1.0 / n as f64;
    let mut p0 = start;
    for i in 1..n {
        let p1 = eval(i as f64 * dt);
        line(p0, p1);
        p0 = p1;
    }
    line(p0, end);
}

/// Parameters in (0,1) where a quadratic coordinate has an extremum
pub fn quad_extrema(a: f64, b: f64, c: f64) -> Option<f64> {
    let denom = a - 2.0 * b + c;
    if denom.abs() < 1e-12 {
        return None;
    }
    let t = (a - b) / denom;
    if t > 0.0 && t < 1.0 { Some(t) } else { None }
}

/// Parameters in (0,1) where a cubic coordinate has an extremum
pub fn cubic_extrema(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    // derivative / 3 = qa t^2 + qb t + qc
    let qa = -a + 3.0 * b - 3.0 * c + d;
    let qb = 2.0 * (a - 2.0 * b + c);
    let qc = b - a;
    let roots = if qa.abs() < 1e-12 {
        if qb == 0.0 {
            vec![]
        } else {
            vec![-qc / qb]
        }
    } else {
        let disc = qb * qb - 4.0 * qa * qc;
        if disc < 0.0 {
            vec![]
        } else {
            let s = disc.sqrt();
            vec![(-qb + s) / (2.0 * qa), (-qb - s) / (2.0 * qa)]
        }
    };
    roots.into_iter().filter(|&t| t > 0.0 && t < 1.0).collect()
}
