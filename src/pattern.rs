//! Bitmap patterns

use crate::buffer::RenderingBuffer;
use crate::color::Rgba8pre;
use crate::shader::{device_to_local, pixel_center, Shader, TileMode};
use crate::transform::Transform;

/// Pixels of a bitmap, nearest neighbor sampled
///
/// The local transform maps bitmap pixel space into the space the shader is
/// drawn in. Outside of the bitmap, the [`TileMode`] folds coordinates back.
#[derive(Debug,Clone)]
pub struct BitmapShader {
    bitmap: RenderingBuffer,
    tile: TileMode,
    local: Transform,
    inverse: Transform,
    opaque: bool,
}

impl BitmapShader {
    pub fn new(bitmap: RenderingBuffer, local: Transform, tile: TileMode) -> Self {
        let opaque = !bitmap.is_empty() && bitmap.is_opaque();
        Self { bitmap, tile, local,
               inverse: local.invert().unwrap_or_default(),
               opaque }
    }
    pub fn bitmap(&self) -> &RenderingBuffer {
        &self.bitmap
    }
    /// Texel index along an axis of `size` pixels
    fn texel(&self, v: f64, size: usize) -> usize {
        let s = size as f64;
        let i = (self.tile.tile(v / s) * s).floor();
        if i <= 0.0 {
            0
        } else {
            (i as usize).min(size - 1)
        }
    }
    /// Pixel at bitmap space position (u,v), transparent for an empty bitmap
    pub fn sample(&self, u: f64, v: f64) -> Rgba8pre {
        if self.bitmap.is_empty() {
            return Rgba8pre::transparent();
        }
        let ix = self.texel(u, self.bitmap.width);
        let iy = self.texel(v, self.bitmap.height);
        self.bitmap[(ix, iy)]
    }
}

impl Shader for BitmapShader {
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
        let (mut u, mut v) = pixel_center(&self.inverse, x, y);
        let (du, dv) = (self.inverse.sx, self.inverse.shy);
        for p in row.iter_mut() {
            *p = self.sample(u, v);
            u += du;
            v += dv;
        }
    }
}
