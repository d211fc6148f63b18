//! Paths
//!
//! A [`Path`] is a list of commands with their points. Each contour starts
//! with a `MoveTo` and is implicitly closed when drawn.

use crate::clip::Rectangle;
use crate::curve;
use crate::transform::Transform;

use std::ops::{Add, Mul, Sub};

/// Point in two dimensions
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Distance from the origin
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    /// z component of the cross product
    pub fn cross(&self, o: Point) -> f64 {
        self.x * o.y - self.y * o.x
    }
    /// Interpolate, `self` at `t = 0`, `o` at `t = 1`
    pub fn lerp(&self, o: Point, t: f64) -> Point {
        *self * (1.0 - t) + o * t
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point {
        Point::new(self.x + o.x, self.y + o.y)
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point {
        Point::new(self.x - o.x, self.y - o.y)
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}
impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Point {
        Point::new(p.0, p.1)
    }
}

/// Path Commands
///
/// Number of points consumed by each command:
/// - MoveTo: 1
/// - LineTo: 1
/// - QuadTo: 2 (control, end)
/// - CubicTo: 3 (control, control, end)
/// - Close: 0
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    Close,
}

impl PathCommand {
    /// Number of points stored for the command
    pub fn points(self) -> usize {
        match self {
            PathCommand::MoveTo | PathCommand::LineTo => 1,
            PathCommand::QuadTo => 2,
            PathCommand::CubicTo => 3,
            PathCommand::Close => 0,
        }
    }
}

/// Winding direction of a contour, as seen with y growing downward
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathOrientation {
    Clockwise,
    CounterClockwise
}

/// Path Storage
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn remove_all(&mut self) {
        self.commands.clear();
        self.points.clear();
    }
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn count_points(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    /// Start a contour with a MoveTo if the last one was closed
    fn ensure_contour(&mut self) {
        match self.commands.last() {
            None => self.move_to(0.0, 0.0),
            Some(PathCommand::Close) => {
                let p = self.contour_start().unwrap_or_default();
                self.move_to(p.x, p.y);
            }
            _ => {}
        }
    }
    fn contour_start(&self) -> Option<Point> {
        let mut pt = 0;
        let mut start = None;
        for cmd in &self.commands {
            if *cmd == PathCommand::MoveTo {
                start = Some(self.points[pt]);
            }
            pt += cmd.points();
        }
        start
    }
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo);
        self.points.push(Point::new(x, y));
    }
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.ensure_contour();
        self.commands.push(PathCommand::LineTo);
        self.points.push(Point::new(x, y));
    }
    /// Quadratic curve with control point `p1` ending at `p2`
    pub fn quad_to(&mut self, p1: Point, p2: Point) {
        self.ensure_contour();
        self.commands.push(PathCommand::QuadTo);
        self.points.extend_from_slice(&[p1, p2]);
    }
    /// Cubic curve with control points `p1`, `p2` ending at `p3`
    pub fn cubic_to(&mut self, p1: Point, p2: Point, p3: Point) {
        self.ensure_contour();
        self.commands.push(PathCommand::CubicTo);
        self.points.extend_from_slice(&[p1, p2, p3]);
    }
    /// Close the current contour
    pub fn close_polygon(&mut self) {
        match self.commands.last() {
            None | Some(PathCommand::Close) => {},
            Some(_) => self.commands.push(PathCommand::Close),
        }
    }
    /// Add a rectangle as a new contour starting at its top-left corner
    pub fn add_rect(&mut self, r: &Rectangle<f64>, dir: PathOrientation) {
        self.move_to(r.x1, r.y1);
        match dir {
            PathOrientation::Clockwise => {
                self.line_to(r.x2, r.y1);
                self.line_to(r.x2, r.y2);
                self.line_to(r.x1, r.y2);
            }
            PathOrientation::CounterClockwise => {
                self.line_to(r.x1, r.y2);
                self.line_to(r.x2, r.y2);
                self.line_to(r.x2, r.y1);
            }
        }
        self.close_polygon();
    }
    /// Add a polygon as a new contour
    pub fn add_polygon(&mut self, pts: &[Point]) {
        if let Some((first, rest)) = pts.split_first() {
            self.move_to(first.x, first.y);
            for p in rest {
                self.line_to(p.x, p.y);
            }
            self.close_polygon();
        }
    }
    /// Add a circle as a new contour of eight quadratic curves
    ///
    /// The contour starts at the rightmost point of the circle.
    pub fn add_circle(&mut self, center: Point, radius: f64, dir: PathOrientation) {
        let t = (std::f64::consts::PI / 8.0).tan();
        let r = std::f64::consts::FRAC_1_SQRT_2;
        // Unit circle, counter-clockwise on screen from (1,0)
        let unit = [
            (1.0, 0.0), (1.0, -t), (r, -r), (t, -1.0),
            (0.0, -1.0), (-t, -1.0), (-r, -r), (-1.0, -t),
            (-1.0, 0.0), (-1.0, t), (-r, r), (-t, 1.0),
            (0.0, 1.0), (t, 1.0), (r, r), (1.0, t),
        ];
        let m = Transform::from_rows(radius, 0.0, center.x, 0.0, radius, center.y);
        let pts: Vec<Point> = unit.iter().map(|&p| m.map_point(p.into())).collect();
        self.move_to(pts[0].x, pts[0].y);
        match dir {
            PathOrientation::CounterClockwise => {
                for i in (1..16).step_by(2) {
                    self.quad_to(pts[i], pts[(i + 1) % 16]);
                }
            }
            PathOrientation::Clockwise => {
                for i in (1..16).step_by(2).map(|i| 16 - i) {
                    self.quad_to(pts[i], pts[i - 1]);
                }
            }
        }
        self.close_polygon();
    }
    /// Copy of the path with every point mapped through `m`
    pub fn transform(&self, m: &Transform) -> Path {
        Path {
            commands: self.commands.clone(),
            points: m.map_points(&self.points),
        }
    }
    /// Segments of the path with every contour closed
    pub fn segments(&self) -> Segments<'_> {
        Segments { path: self, cmd: 0, pt: 0,
                   start: Point::default(), last: Point::default(),
                   open: false }
    }
    /// Tight bounding box, including curve extrema
    ///
    ///     use scanpaint::{Path, Point};
    ///     let mut p = Path::new();
    ///     p.move_to(0.0, 0.0);
    ///     p.quad_to(Point::new(5.0, 10.0), Point::new(10.0, 0.0));
    ///     let r = p.bounds().unwrap();
    ///     assert_eq!((r.x1, r.y1, r.x2, r.y2), (0.0, 0.0, 10.0, 5.0));
    ///
    pub fn bounds(&self) -> Option<Rectangle<f64>> {
        let first = self.points.first()?;
        let mut r = Rectangle::new(first.x, first.y, first.x, first.y);
        for seg in self.segments() {
            match seg {
                Segment::Line(p) => {
                    p.iter().for_each(|q| r.expand(q.x, q.y));
                }
                Segment::Quad(p) => {
                    r.expand(p[0].x, p[0].y);
                    r.expand(p[2].x, p[2].y);
                    let ts = [curve::quad_extrema(p[0].x, p[1].x, p[2].x),
                              curve::quad_extrema(p[0].y, p[1].y, p[2].y)];
                    for t in ts.iter().flatten() {
                        let q = curve::eval_quad(&p, *t);
                        r.expand(q.x, q.y);
                    }
                }
                Segment::Cubic(p) => {
                    r.expand(p[0].x, p[0].y);
                    r.expand(p[3].x, p[3].y);
                    let ts = curve::cubic_extrema(p[0].x, p[1].x, p[2].x, p[3].x).into_iter()
                        .chain(curve::cubic_extrema(p[0].y, p[1].y, p[2].y, p[3].y));
                    for t in ts {
                        let q = curve::eval_cubic(&p, t);
                        r.expand(q.x, q.y);
                    }
                }
            }
        }
        Some(r)
    }
}

/// Piece of a contour
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Segment {
    Line([Point; 2]),
    Quad([Point; 3]),
    Cubic([Point; 4]),
}

/// Iterator over the segments of a [`Path`]
///
/// A closing line back to the contour start is produced before each
/// `MoveTo`, on `Close` and at the end of the path, unless the contour
/// already ends on its start.
#[derive(Debug)]
pub struct Segments<'a> {
    path: &'a Path,
    cmd: usize,
    pt: usize,
    start: Point,
    last: Point,
    open: bool,
}

impl<'a> Segments<'a> {
    fn close(&mut self) -> Option<Segment> {
        if !self.open {
            return None;
        }
        self.open = false;
        if self.last == self.start {
            return None;
        }
        let seg = Segment::Line([self.last, self.start]);
        self.last = self.start;
        Some(seg)
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment;
    fn next(&mut self) -> Option<Segment> {
        let pts = &self.path.points;
        loop {
            let cmd = match self.path.commands.get(self.cmd) {
                Some(cmd) => *cmd,
                None => return self.close(),
            };
            let seg = match cmd {
                PathCommand::MoveTo => {
                    if let Some(seg) = self.close() {
                        return Some(seg);
                    }
                    self.start = pts[self.pt];
                    self.last = self.start;
                    self.open = true;
                    None
                }
                PathCommand::LineTo => Some(Segment::Line([self.last, pts[self.pt]])),
                PathCommand::QuadTo => Some(Segment::Quad([self.last, pts[self.pt], pts[self.pt + 1]])),
                PathCommand::CubicTo => Some(Segment::Cubic([self.last, pts[self.pt],
                                                             pts[self.pt + 1], pts[self.pt + 2]])),
                PathCommand::Close => {
                    self.cmd += 1;
                    match self.close() {
                        Some(seg) => return Some(seg),
                        None => continue,
                    }
                }
            };
            self.pt += cmd.points();
            self.cmd += 1;
            if let Some(seg) = seg {
                self.last = self.pt.checked_sub(1).map(|i| pts[i]).unwrap_or(self.last);
                return Some(seg);
            }
        }
    }
}
