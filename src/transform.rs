//! Transformations

use crate::path::Point;

use std::ops::Mul;

/// Affine Transformation
///
/// Maps a point as
///
/// ```text
/// x' = sx  * x + shx * y + tx
/// y' = shy * x + sy  * y + ty
/// ```
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Create from the two rows of the matrix
    ///
    ///     use scanpaint::Transform;
    ///     let t = Transform::from_rows(2.0, 0.0, 5.0,
    ///                                  0.0, 3.0, 7.0);
    ///     assert_eq!(t.transform(1.0, 1.0), (7.0, 10.0));
    ///
    pub fn from_rows(sx: f64, shx: f64, tx: f64, shy: f64, sy: f64, ty: f64) -> Self {
        Self { sx, shy, shx, sy, tx, ty }
    }
    /// Transform taking the unit triangle (0,0), (1,0), (0,1) onto p0, p1, p2
    pub fn basis(p0: Point, p1: Point, p2: Point) -> Self {
        Self::from_rows(p1.x - p0.x, p2.x - p0.x, p0.x,
                        p1.y - p0.y, p2.y - p0.y, p0.y)
    }
    /// Add a translation, applied after the current transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Add a scaling, applied after the current transform
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sx  *= sx;
        self.shx *= sx;
        self.tx  *= sx;
        self.sy  *= sy;
        self.shy *= sy;
        self.ty  *= sy;
    }
    /// Add a rotation, applied after the current transform
    ///
    /// angle is in radians
    pub fn rotate(&mut self, angle: f64) {
        let ca = angle.cos();
        let sa = angle.sin();
        let t0   = self.sx  * ca - self.shy * sa;
        let t2   = self.shx * ca - self.sy  * sa;
        let t4   = self.tx  * ca - self.ty  * sa;
        self.shy = self.sx  * sa + self.shy * ca;
        self.sy  = self.shx * sa + self.sy  * ca;
        self.ty  = self.tx  * sa + self.ty  * ca;
        self.sx  = t0;
        self.shx = t2;
        self.tx  = t4;
    }
    pub fn new_scale(sx: f64, sy: f64) -> Transform {
        let mut t = Self::new();
        t.scale(sx,sy);
        t
    }
    pub fn new_translate(tx: f64, ty: f64) -> Transform {
        let mut t = Self::new();
        t.translate(tx,ty);
        t
    }
    pub fn new_rotate(ang: f64) -> Transform {
        let mut t = Self::new();
        t.rotate(ang);
        t
    }

    /// Perform the transform
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Transform a single point
    pub fn map_point(&self, p: Point) -> Point {
        let (x, y) = self.transform(p.x, p.y);
        Point::new(x, y)
    }
    /// Transform a list of points into a new list
    pub fn map_points(&self, pts: &[Point]) -> Vec<Point> {
        pts.iter().map(|&p| self.map_point(p)).collect()
    }
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }
    pub fn is_identity(&self) -> bool {
        *self == Self::new()
    }
    /// Inverse transform, `None` if the determinant is zero
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let d = 1.0 / det;
        let sx  =  self.sy  * d;
        let sy  =  self.sx  * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        let tx  = -self.tx * sx  - self.ty * shx;
        let ty  = -self.tx * shy - self.ty * sy;
        Some(Transform { sx, shy, shx, sy, tx, ty })
    }
    /// Compose with `m`, `m` applied first then `self`
    pub fn concat(&self, m: &Transform) -> Transform {
        Transform {
            sx:  self.sx  * m.sx  + self.shx * m.shy,
            shy: self.shy * m.sx  + self.sy  * m.shy,
            shx: self.sx  * m.shx + self.shx * m.sy,
            sy:  self.shy * m.shx + self.sy  * m.sy,
            tx:  self.sx  * m.tx  + self.shx * m.ty + self.tx,
            ty:  self.shy * m.tx  + self.sy  * m.ty + self.ty,
        }
    }
}

/// `a * b` maps a point through `b`, then through `a`
impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.concat(&rhs)
    }
}
