//! Clipping Region

use crate::edge::Edge;
use crate::math::iround;
use crate::path::Point;

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}
impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Get location of point relative to rectangle
    ///
    /// Returned is an a u8 made up of the following bits:
    /// - [INSIDE](constant.INSIDE.html)
    /// - [LEFT](constant.LEFT.html)
    /// - [RIGHT](constant.RIGHT.html)
    /// - [BOTTOM](constant.BOTTOM.html)
    /// - [TOP](constant.TOP.html)
    ///
    pub fn clip_flags(&self, x: T, y: T) -> u8 {
        clip_flags(&x,&y, &self.x1, &self.y1, &self.x2, &self.y2)
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
}

impl Rectangle<f64> {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
    /// Corners, clockwise from the top-left
    pub fn corners(&self) -> [Point; 4] {
        [Point::new(self.x1, self.y1), Point::new(self.x2, self.y1),
         Point::new(self.x2, self.y2), Point::new(self.x1, self.y2)]
    }
}

/// Inside Region
pub const INSIDE : u8 = 0b0000;
/// Left of Region
pub const LEFT   : u8 = 0b0000_0001;
/// Right of Region
pub const RIGHT  : u8 = 0b0000_0010;
/// Above Region, smaller y
pub const TOP    : u8 = 0b0000_0100;
/// Below Region, larger y
pub const BOTTOM : u8 = 0b0000_1000;

/// Determine the location of a point relative to a broken-down rectangle
///
/// Returned is an a u8 made up of the following bits:
/// - [INSIDE](constant.INSIDE.html)
/// - [LEFT](constant.LEFT.html)
/// - [RIGHT](constant.RIGHT.html)
/// - [TOP](constant.TOP.html)
/// - [BOTTOM](constant.BOTTOM.html)
///
fn clip_flags<T: std::cmp::PartialOrd>(x: &T, y: &T, x1: &T, y1: &T, x2: &T, y2: &T) -> u8 {
    let mut code = INSIDE;
    if x < x1 { code |= LEFT; }
    if x > x2 { code |= RIGHT; }
    if y < y1 { code |= TOP; }
    if y > y2 { code |= BOTTOM; }
    code
}

/// Clip Region
///
/// Converts line segments into edges lying inside a device of width and
/// height. Parts above or below the device are discarded; parts left or
/// right of it are pinned to a vertical edge on the border so the winding
/// of every scanline is preserved.
#[derive(Debug,Copy,Clone)]
pub struct Clip {
    /// Rectangle to clip on
    clip_box: Rectangle<f64>,
}

impl Clip {
    /// Create new Clipping region from (0,0) to (width,height)
    pub fn new(width: f64, height: f64) -> Self {
        Self { clip_box: Rectangle::new(0.0, 0.0, width, height) }
    }
    pub fn clip_box(&self) -> &Rectangle<f64> {
        &self.clip_box
    }
    /// Clip the segment from p0 to p1, appending the surviving edges
    ///
    /// Segments running down (increasing y) have a winding of -1, segments
    /// running up +1. Horizontal segments produce nothing.
    pub fn line_to(&self, edges: &mut Vec<Edge>, p0: Point, p1: Point) {
        let b = &self.clip_box;
        let (mut p0, mut p1, winding) = if p0.y > p1.y {
            (p1, p0, 1)
        } else {
            (p0, p1, -1)
        };
        // Entirely above, entirely below or horizontal
        if p1.y < b.y1 || p0.y > b.y2 || iround(p0.y) >= iround(p1.y) {
            return;
        }
        let mx = (p1.x - p0.x) / (p1.y - p0.y);
        let intercept = p0.x - mx * p0.y;

        if p0.y < b.y1 {
            p0.x += (b.y1 - p0.y) * mx;
            p0.y = b.y1;
        }
        if p1.y > b.y2 {
            p1.x += (b.y2 - p1.y) * mx;
            p1.y = b.y2;
        }
        if p0.x > p1.x {
            std::mem::swap(&mut p0, &mut p1);
        }
        let my = (p1.y - p0.y) / (p1.x - p0.x);
        let y_at = |x: f64| p0.y + (x - p0.x) * my;

        let f0 = b.clip_flags(p0.x, p0.y) & (LEFT|RIGHT);
        let f1 = b.clip_flags(p1.x, p1.y) & (LEFT|RIGHT);
        let mut push = |e: Edge| if !e.is_empty() { edges.push(e) };
        match (f0, f1) {
            (INSIDE, INSIDE) => {
                push(Edge::new(p0.y, p1.y, mx, intercept, winding));
            },
            (LEFT, LEFT) => {
                push(Edge::vertical(p0.y, p1.y, b.x1, winding));
            },
            (RIGHT, RIGHT) => {
                push(Edge::vertical(p0.y, p1.y, b.x2, winding));
            },
            (LEFT, INSIDE) => {
                let y3 = y_at(b.x1);
                push(Edge::vertical(p0.y, y3, b.x1, winding));
                push(Edge::new(y3, p1.y, mx, intercept, winding));
            },
            (INSIDE, RIGHT) => {
                let y3 = y_at(b.x2);
                push(Edge::new(p0.y, y3, mx, intercept, winding));
                push(Edge::vertical(y3, p1.y, b.x2, winding));
            },
            (LEFT, RIGHT) => {
                let y3 = y_at(b.x1);
                let y4 = y_at(b.x2);
                push(Edge::vertical(p0.y, y3, b.x1, winding));
                push(Edge::new(y3, y4, mx, intercept, winding));
                push(Edge::vertical(y4, p1.y, b.x2, winding));
            },
            // p0 is left of p1
            (_, _) => unreachable!("f0,f1 {:?} {:?}", f0, f1),
        }
    }
}
