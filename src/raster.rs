//! Rasterizers
//!
//! Sweep an [`EdgeList`] from top to bottom, producing the covered spans of
//! each scanline. Pixels are covered when their center lies inside the
//! shape; there is no anti-aliasing.
//!
//! - [`RasterizerRect`]: an axis-aligned rectangle in device pixels
//! - [`RasterizerConvex`]: convex polygons, exactly two edges per scanline
//! - [`RasterizerScanline`]: any closed contours, with a [`FillingRule`]

use crate::edge::{sort_by_top, sort_by_top_and_x, Edge, EdgeList};
use crate::math::iround;
use crate::scan::Scanline;
use crate::Rasterize;

use log::trace;

/// Rule deciding which winding numbers are inside
#[derive(Debug,PartialEq,Copy,Clone)]
pub enum FillingRule {
    NonZero,
    EvenOdd,
}
impl Default for FillingRule {
    fn default() -> FillingRule {
        FillingRule::NonZero
    }
}
impl FillingRule {
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            FillingRule::NonZero => winding != 0,
            FillingRule::EvenOdd => winding & 1 != 0,
        }
    }
}

/// Rasterizer for device space rectangles
///
/// Covers the pixels `x1 .. x2` on the rows `y1 .. y2`.
#[derive(Debug,Default)]
pub struct RasterizerRect {
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    scan_y: i64,
}

impl RasterizerRect {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2, scan_y: y1 }
    }
}

impl Rasterize for RasterizerRect {
    fn rewind_scanlines(&mut self) -> bool {
        self.scan_y = self.y1;
        self.x2 > self.x1 && self.y2 > self.y1
    }
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool {
        if self.scan_y >= self.y2 {
            return false;
        }
        sl.reset_spans();
        sl.add_span(self.x1, self.x2 - self.x1);
        sl.finalize(self.scan_y);
        self.scan_y += 1;
        true
    }
}

/// Rasterizer for convex polygons
///
/// Edges are taken in order of their top scanline; the two current edges
/// bound the span of each scanline, and an edge is replaced by the next one
/// once it ends. Results for non-convex input are undefined.
#[derive(Debug)]
pub struct RasterizerConvex {
    edges: Vec<Edge>,
    first: usize,
    second: usize,
    next: usize,
    scan_y: i64,
    bottom: i64,
}

impl RasterizerConvex {
    pub fn new(outline: EdgeList) -> Self {
        Self { edges: outline.edges,
               first: 0, second: 1, next: 2,
               scan_y: 0, bottom: 0,
        }
    }
    /// Replace edges that ended before scanline `y`
    ///
    /// Returns false once no edges remain
    fn advance(&mut self, y: i64) -> bool {
        while self.edges[self.first].bottom <= y {
            if self.next >= self.edges.len() {
                return false;
            }
            self.first = self.next;
            self.next += 1;
        }
        while self.edges[self.second].bottom <= y {
            if self.next >= self.edges.len() {
                return false;
            }
            self.second = self.next;
            self.next += 1;
        }
        true
    }
}

impl Rasterize for RasterizerConvex {
    fn rewind_scanlines(&mut self) -> bool {
        if self.edges.len() < 2 {
            return false;
        }
        sort_by_top(&mut self.edges);
        self.first = 0;
        self.second = 1;
        self.next = 2;
        self.scan_y = self.edges[0].top;
        self.bottom = self.edges.iter().map(|e| e.bottom).max().unwrap_or(self.scan_y);
        trace!("convex: {} edges, rows {} .. {}", self.edges.len(), self.scan_y, self.bottom);
        true
    }
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool {
        loop {
            let y = self.scan_y;
            if y >= self.bottom {
                return false;
            }
            if !self.advance(y) {
                self.scan_y = self.bottom;
                return false;
            }
            sl.reset_spans();
            let x0 = self.edges[self.first].compute_x(y);
            let x1 = self.edges[self.second].compute_x(y);
            let left = iround(x0.min(x1));
            let right = iround(x0.max(x1));
            sl.add_span(left, right - left);
            self.scan_y += 1;
            if sl.num_spans() != 0 {
                sl.finalize(y);
                return true;
            }
        }
    }
}

/// Rasterizer for arbitrary closed contours
///
/// Keeps an active list of the edges crossing the current scanline, ordered
/// by x. Walking the list left to right and summing windings finds the
/// spans whose winding number is inside according to the [`FillingRule`].
#[derive(Debug)]
pub struct RasterizerScanline {
    edges: Vec<Edge>,
    /// Indices into `edges`, sorted by x at `scan_y`
    active: Vec<usize>,
    /// Next edge, in order of top, not yet active
    next: usize,
    filling_rule: FillingRule,
    scan_y: i64,
    bottom: i64,
}

impl RasterizerScanline {
    pub fn new(outline: EdgeList, filling_rule: FillingRule) -> Self {
        Self { edges: outline.edges,
               active: vec![],
               next: 0,
               filling_rule,
               scan_y: 0,
               bottom: 0,
        }
    }
    pub fn filling_rule(&self) -> FillingRule {
        self.filling_rule
    }
    /// Add the spans of scanline `y` from the active edges
    fn accumulate(&self, y: i64, sl: &mut Scanline) {
        let mut winding = 0;
        let mut left = 0;
        for &i in &self.active {
            let e = &self.edges[i];
            let was_inside = self.filling_rule.is_inside(winding);
            winding += e.winding;
            let inside = self.filling_rule.is_inside(winding);
            if !was_inside && inside {
                left = iround(e.x);
            } else if was_inside && !inside {
                let right = iround(e.x);
                sl.add_span(left, right - left);
            }
        }
        debug_assert_eq!(winding, 0, "unbalanced winding on scanline {}", y);
    }
    /// Move the active list from scanline `y` to `y + 1`
    fn advance(&mut self, y: i64) {
        let ny = y + 1;
        let edges = &self.edges;
        self.active.retain(|&i| edges[i].is_valid(ny));
        while self.next < self.edges.len() && self.edges[self.next].top <= ny {
            if self.edges[self.next].is_valid(ny) {
                self.active.push(self.next);
            }
            self.next += 1;
        }
        for &i in &self.active {
            let e = &mut self.edges[i];
            e.x = e.compute_x(ny);
        }
        insertion_sort_by_x(&mut self.active, &self.edges);
    }
}

/// Sort active edge indices by their current x
///
/// The order changes little between scanlines, so this is close to linear.
fn insertion_sort_by_x(active: &mut [usize], edges: &[Edge]) {
    for i in 1 .. active.len() {
        let cur = active[i];
        let mut j = i;
        while j > 0 && edges[active[j - 1]].x > edges[cur].x {
            active[j] = active[j - 1];
            j -= 1;
        }
        active[j] = cur;
    }
}

impl Rasterize for RasterizerScanline {
    fn rewind_scanlines(&mut self) -> bool {
        if self.edges.len() < 2 {
            return false;
        }
        sort_by_top_and_x(&mut self.edges);

        self.scan_y = self.edges[0].top;
        self.bottom = self.edges.iter().map(|e| e.bottom).max().unwrap_or(self.scan_y);
        self.active.clear();
        self.next = 0;
        while self.next < self.edges.len() && self.edges[self.next].top <= self.scan_y {
            self.active.push(self.next);
            self.next += 1;
        }
        trace!("scanline: {} edges, rows {} .. {}", self.edges.len(), self.scan_y, self.bottom);
        true
    }
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool {
        loop {
            let y = self.scan_y;
            if y >= self.bottom {
                return false;
            }
            sl.reset_spans();
            self.accumulate(y, sl);
            self.advance(y);
            self.scan_y += 1;
            if sl.num_spans() != 0 {
                sl.finalize(y);
                return true;
            }
        }
    }
}
