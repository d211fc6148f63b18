//! Linear gradients

use crate::color::{Rgba, Rgba8pre};
use crate::path::Point;
use crate::shader::{device_to_local, pixel_center, Shader, TileMode};
use crate::transform::Transform;

/// Colors spaced evenly along the line from p0 to p1
///
/// Lines perpendicular to p0 → p1 have a constant color. Beyond the ends
/// of the line the [`TileMode`] decides the color.
#[derive(Debug,Clone)]
pub struct LinearGradient {
    colors: Vec<Rgba>,
    tile: TileMode,
    /// Maps the unit segment (0,0) → (1,0) onto p0 → p1
    local: Transform,
    inverse: Transform,
    opaque: bool,
}

impl LinearGradient {
    ///
    ///     use scanpaint::{LinearGradient, Point, Rgba, Rgba8pre, Shader, TileMode, Transform};
    ///     let mut g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0),
    ///                                     &[Rgba::black(), Rgba::white()], TileMode::Clamp);
    ///     assert!(g.bind_context(&Transform::new()));
    ///     let mut row = [Rgba8pre::transparent(); 6];
    ///     g.shade_span(-1, 0, &mut row);
    ///     assert_eq!(row[0], Rgba8pre::black());
    ///     assert_eq!(row[5], Rgba8pre::white());
    ///
    pub fn new(p0: Point, p1: Point, colors: &[Rgba], tile: TileMode) -> Self {
        let d = p1 - p0;
        let local = Transform::from_rows(d.x, -d.y, p0.x,
                                         d.y,  d.x, p0.y);
        let opaque = !colors.is_empty() && colors.iter().all(|c| c.is_opaque());
        Self { colors: colors.to_vec(), tile, local,
               inverse: local.invert().unwrap_or_default(),
               opaque }
    }
    /// Color at `t` along the gradient, with `t` folded by the tile mode
    pub fn color_at(&self, t: f64) -> Rgba {
        let n = self.colors.len();
        if n == 0 {
            return Rgba::transparent();
        }
        let last = (n - 1) as f64;
        let x = self.tile.tile(t) * last;
        if x >= last {
            return self.colors[n - 1];
        }
        let x = x.max(0.0);
        let i = x.floor() as usize;
        self.colors[i].lerp(&self.colors[i + 1], x - i as f64)
    }
}

impl Shader for LinearGradient {
    fn is_opaque(&self) -> bool {
        self.opaque
    }
    fn bind_context(&mut self, ctm: &Transform) -> bool {
        match device_to_local(ctm, &self.local) {
            Some(inv) => {
                self.inverse = inv;
                true
            }
            None => false,
        }
    }
    fn shade_span(&self, x: i64, y: i64, row: &mut [Rgba8pre]) {
        let (mut t, _) = pixel_center(&self.inverse, x, y);
        let step = self.inverse.sx;
        for p in row.iter_mut() {
            *p = self.color_at(t).to_pixel();
            t += step;
        }
    }
}
