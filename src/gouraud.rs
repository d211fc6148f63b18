//! Gouraud shading of triangles

use crate::color::{Rgba, Rgba8pre};
use crate::path::Point;
use crate::shader::{device_to_local, pixel_center, Shader};
use crate::transform::Transform;

/// Colors interpolated across a triangle
///
/// With `(u, v)` the coordinates of a point in the basis
/// `p1 - p0`, `p2 - p0`, the color is `c0 + u (c1 - c0) + v (c2 - c0)`.
/// Points outside the triangle extrapolate, clamped when converted to pixels.
#[derive(Debug,Clone)]
pub struct TriColorShader {
    c0: Rgba,
    dc1: Rgba,
    dc2: Rgba,
    opaque: bool,
    local: Transform,
    inverse: Transform,
}

impl TriColorShader {
    pub fn new(p: [Point; 3], c: [Rgba; 3]) -> Self {
        let local = Transform::basis(p[0], p[1], p[2]);
        Self { c0: c[0],
               dc1: c[1] - c[0],
               dc2: c[2] - c[0],
               opaque: c.iter().all(|c| c.is_opaque()),
               local,
               inverse: local.invert().unwrap_or_default(),
        }
    }
}

impl Shader for TriColorShader {
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
        let (u, v) = pixel_center(&self.inverse, x, y);
        let mut color = self.c0 + self.dc1 * u + self.dc2 * v;
        let delta = self.dc1 * self.inverse.sx + self.dc2 * self.inverse.shy;
        for p in row.iter_mut() {
            *p = color.to_pixel();
            color = color + delta;
        }
    }
}
