//! Edges and edge storage
//!
//! An [`Edge`] is a clipped, non-horizontal piece of a line covering the
//! half-open range of scanlines `top .. bottom`. Scanline `y` samples the
//! line at the pixel center height `y + 0.5`.

use crate::clip::Clip;
use crate::curve;
use crate::math::iround;
use crate::path::{Path, Point, Segment};
use crate::FLATNESS_TOLERANCE;

use log::trace;

use std::cmp::Ordering;

#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    /// First scanline covered
    pub top: i64,
    /// One past the last scanline covered
    pub bottom: i64,
    /// Change in x per unit y
    pub slope: f64,
    /// x where the line crosses y = 0
    pub intercept: f64,
    /// +1 or -1, sign of the direction of travel
    pub winding: i32,
    /// x at the scanline currently being swept
    pub x: f64,
}

impl Edge {
    /// Edge along the line `x = slope * y + intercept` between heights y0 and y1
    pub fn new(y0: f64, y1: f64, slope: f64, intercept: f64, winding: i32) -> Self {
        let top = iround(y0.min(y1));
        let bottom = iround(y0.max(y1));
        let mut e = Edge { top, bottom, slope, intercept, winding, x: 0.0 };
        e.x = e.compute_x(top);
        e
    }
    /// Vertical edge at `x` between heights y0 and y1
    pub fn vertical(y0: f64, y1: f64, x: f64, winding: i32) -> Self {
        Self::new(y0, y1, 0.0, x, winding)
    }
    /// Edge covers no scanline
    pub fn is_empty(&self) -> bool {
        self.top >= self.bottom
    }
    /// Scanline `y` lies within `top .. bottom`
    pub fn is_valid(&self, y: i64) -> bool {
        self.top <= y && y < self.bottom
    }
    /// x at the center of scanline `y`
    pub fn compute_x(&self, y: i64) -> f64 {
        self.slope * (y as f64 + 0.5) + self.intercept
    }
}

/// Edge Storage
///
/// Collects the clipped edges of polygons, curves and paths for one draw.
#[derive(Debug,Clone)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    clip: Clip,
    tolerance: f64,
}

impl EdgeList {
    /// Edge list clipped to a `width` x `height` device
    pub fn new(width: usize, height: usize) -> Self {
        Self { edges: vec![],
               clip: Clip::new(width as f64, height as f64),
               tolerance: FLATNESS_TOLERANCE,
        }
    }
    /// Curve flattening tolerance in device pixels
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
    pub fn reset(&mut self) {
        self.edges.clear();
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    /// Add the line from p0 to p1
    pub fn line(&mut self, p0: Point, p1: Point) {
        self.clip.line_to(&mut self.edges, p0, p1);
    }
    /// Control points all above or all below the device
    ///
    /// The curve stays inside the hull of its control points, so none of it
    /// would survive clipping.
    fn off_rows(&self, p: &[Point]) -> bool {
        let b = self.clip.clip_box();
        p.iter().all(|q| q.y < b.y1) || p.iter().all(|q| q.y > b.y2)
    }
    /// Add a flattened quadratic
    pub fn quad(&mut self, p: &[Point; 3]) {
        if self.off_rows(p) {
            trace!("quad off the device rows, skipped");
            return;
        }
        let (clip, edges) = (&self.clip, &mut self.edges);
        curve::flatten_quad(p, self.tolerance, |a, b| clip.line_to(edges, a, b));
    }
    /// Add a flattened cubic
    pub fn cubic(&mut self, p: &[Point; 4]) {
        if self.off_rows(p) {
            trace!("cubic off the device rows, skipped");
            return;
        }
        let (clip, edges) = (&self.clip, &mut self.edges);
        curve::flatten_cubic(p, self.tolerance, |a, b| clip.line_to(edges, a, b));
    }
    /// Add a closed polygon, the last point connects back to the first
    pub fn add_polygon(&mut self, pts: &[Point]) {
        let n = pts.len();
        for i in 0 .. n {
            self.line(pts[i], pts[(i + 1) % n]);
        }
        trace!("add_polygon: {} points -> {} edges", n, self.edges.len());
    }
    /// Add every contour of a path, each one closed
    pub fn add_path(&mut self, path: &Path) {
        for seg in path.segments() {
            match seg {
                Segment::Line(p) => self.line(p[0], p[1]),
                Segment::Quad(p) => self.quad(&p),
                Segment::Cubic(p) => self.cubic(&p),
            }
        }
        trace!("add_path: {} points -> {} edges", path.count_points(), self.edges.len());
    }
    /// First scanline covered by any edge
    pub fn top(&self) -> Option<i64> {
        self.edges.iter().map(|e| e.top).min()
    }
    /// One past the last scanline covered by any edge
    pub fn bottom(&self) -> Option<i64> {
        self.edges.iter().map(|e| e.bottom).max()
    }
    /// Sum of the windings of all edges crossing scanline `y`
    ///
    /// Zero for every scanline when the edges come from closed contours.
    pub fn winding_at(&self, y: i64) -> i32 {
        self.edges.iter()
            .filter(|e| e.is_valid(y))
            .map(|e| e.winding)
            .sum()
    }
    /// Sort by top scanline
    pub fn sort_by_top(&mut self) {
        sort_by_top(&mut self.edges);
    }
    /// Sort by top scanline, then by x at the top scanline
    pub fn sort_by_top_and_x(&mut self) {
        sort_by_top_and_x(&mut self.edges);
    }
}

/// Sort by top scanline, keeping the order of edges sharing a top
pub fn sort_by_top(edges: &mut [Edge]) {
    edges.sort_by_key(|e| e.top);
}

/// Sort by top scanline, then by x at the top scanline
///
/// Each edge's current x is reset to its x at its top scanline.
pub fn sort_by_top_and_x(edges: &mut [Edge]) {
    for e in edges.iter_mut() {
        e.x = e.compute_x(e.top);
    }
    edges.sort_by(|a, b| {
        a.top.cmp(&b.top).then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });
}
