//! Shaders
//!
//! A [`Shader`] produces a premultiplied color for each pixel of a span.
//! Before shading, it is bound to the current transform with
//! [`Shader::bind_context`]; pixels are sampled at their centers mapped back
//! through the inverse of that transform into the shader's own space.

use crate::color::{Rgba, Rgba8pre};
use crate::transform::Transform;

/// Source of per-pixel colors
pub trait Shader {
    /// Every color produced has an alpha of 255
    fn is_opaque(&self) -> bool;
    /// Bind to the current transform
    ///
    /// Returns false if the combined transform cannot be inverted, in which
    /// case nothing should be drawn.
    fn bind_context(&mut self, ctm: &Transform) -> bool;
    /// Colors of the pixels `x .. x + row.len()` on scanline `y`
    fn shade_span(&self, x: i64, y: i64, row: &mut [Rgba8pre]);
}

impl<S: Shader + ?Sized> Shader for Box<S> {
    fn is_opaque(&self) -> bool {
        (**self).is_opaque()
    }
    fn bind_context(&mut self, ctm: &Transform) -> bool {
        (**self).bind_context(ctm)
    }
    fn shade_span(&self, x: i64, y: i64, row: &mut [Rgba8pre]) {
        (**self).shade_span(x, y, row)
    }
}

impl<'a, S: Shader + ?Sized> Shader for &'a mut S {
    fn is_opaque(&self) -> bool {
        (**self).is_opaque()
    }
    fn bind_context(&mut self, ctm: &Transform) -> bool {
        (**self).bind_context(ctm)
    }
    fn shade_span(&self, x: i64, y: i64, row: &mut [Rgba8pre]) {
        (**self).shade_span(x, y, row)
    }
}

/// Inverse of `ctm * local`, the map from device to shader space
pub fn device_to_local(ctm: &Transform, local: &Transform) -> Option<Transform> {
    ctm.concat(local).invert()
}

/// Device pixel center of (x,y) mapped through `inverse`
pub fn pixel_center(inverse: &Transform, x: i64, y: i64) -> (f64, f64) {
    inverse.transform(x as f64 + 0.5, y as f64 + 0.5)
}

/// How coordinates outside of [0,1] are folded back
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum TileMode {
    /// Extend the edge value
    Clamp,
    /// Wrap around
    Repeat,
    /// Reflect back and forth
    Mirror,
}

impl Default for TileMode {
    fn default() -> TileMode {
        TileMode::Clamp
    }
}

impl TileMode {
    /// Fold `t` into [0,1]
    pub fn tile(self, t: f64) -> f64 {
        match self {
            TileMode::Clamp => crate::math::clamp(t, 0.0, 1.0),
            TileMode::Repeat => crate::math::tile_repeat(t),
            TileMode::Mirror => crate::math::tile_and_mirror(t),
        }
    }
}

/// Single color everywhere
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct SolidShader {
    pixel: Rgba8pre,
}

impl SolidShader {
    pub fn new(color: Rgba) -> Self {
        Self { pixel: color.to_pixel() }
    }
}

impl Shader for SolidShader {
    fn is_opaque(&self) -> bool {
        self.pixel.a == 255
    }
    fn bind_context(&mut self, _ctm: &Transform) -> bool {
        true
    }
    fn shade_span(&self, _x: i64, _y: i64, row: &mut [Rgba8pre]) {
        row.iter_mut().for_each(|p| *p = self.pixel);
    }
}

/// Shader seen through an extra transform
///
/// Binding with `ctm` binds the wrapped shader with `ctm * extra`.
#[derive(Debug)]
pub struct ProxyShader<S: Shader> {
    inner: S,
    extra: Transform,
}

impl<S: Shader> ProxyShader<S> {
    pub fn new(inner: S, extra: Transform) -> Self {
        Self { inner, extra }
    }
}

impl<S: Shader> Shader for ProxyShader<S> {
    fn is_opaque(&self) -> bool {
        self.inner.is_opaque()
    }
    fn bind_context(&mut self, ctm: &Transform) -> bool {
        self.inner.bind_context(&ctm.concat(&self.extra))
    }
    fn shade_span(&self, x: i64, y: i64, row: &mut [Rgba8pre]) {
        self.inner.shade_span(x, y, row)
    }
}

/// Channel-wise product of two shaders
#[derive(Debug)]
pub struct ComposeShader<A: Shader, B: Shader> {
    first: A,
    second: B,
}

impl<A: Shader, B: Shader> ComposeShader<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Shader, B: Shader> Shader for ComposeShader<A, B> {
    fn is_opaque(&self) -> bool {
        self.first.is_opaque() && self.second.is_opaque()
    }
    fn bind_context(&mut self, ctm: &Transform) -> bool {
        self.first.bind_context(ctm) && self.second.bind_context(ctm)
    }
    fn shade_span(&self, x: i64, y: i64, row: &mut [Rgba8pre]) {
        let mut other = vec![Rgba8pre::transparent(); row.len()];
        self.first.shade_span(x, y, row);
        self.second.shade_span(x, y, &mut other);
        for (p, q) in row.iter_mut().zip(&other) {
            *p = p.modulate(q);
        }
    }
}

/// 4x5 matrix acting on unpremultiplied colors
///
/// Stored column by column:
///
/// ```text
/// r' = m[0] r + m[4] g + m[ 8] b + m[12] a + m[16]
/// g' = m[1] r + m[5] g + m[ 9] b + m[13] a + m[17]
/// b' = m[2] r + m[6] g + m[10] b + m[14] a + m[18]
/// a' = m[3] r + m[7] g + m[11] b + m[15] a + m[19]
/// ```
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ColorMatrix(pub [f64; 20]);

impl ColorMatrix {
    pub fn identity() -> Self {
        let mut m = [0.0; 20];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        ColorMatrix(m)
    }
    /// Transformed color, clamped to [0,1]
    pub fn apply(&self, c: &Rgba) -> Rgba {
        let m = &self.0;
        let row = |i: usize| m[i] * c.r + m[i + 4] * c.g + m[i + 8] * c.b + m[i + 12] * c.a + m[i + 16];
        Rgba::new(row(0), row(1), row(2), row(3)).clamped()
    }
    /// Output alpha equals input alpha
    pub fn preserves_alpha(&self) -> bool {
        let m = &self.0;
        m[3] == 0.0 && m[7] == 0.0 && m[11] == 0.0 && m[15] == 1.0 && m[19] == 0.0
    }
}

/// Colors of another shader passed through a [`ColorMatrix`]
#[derive(Debug)]
pub struct ColorMatrixShader<S: Shader> {
    inner: S,
    matrix: ColorMatrix,
}

impl<S: Shader> ColorMatrixShader<S> {
    pub fn new(matrix: ColorMatrix, inner: S) -> Self {
        Self { inner, matrix }
    }
}

impl<S: Shader> Shader for ColorMatrixShader<S> {
    fn is_opaque(&self) -> bool {
        self.inner.is_opaque() && self.matrix.preserves_alpha()
    }
    fn bind_context(&mut self, ctm: &Transform) -> bool {
        self.inner.bind_context(ctm)
    }
    fn shade_span(&self, x: i64, y: i64, row: &mut [Rgba8pre]) {
        self.inner.shade_span(x, y, row);
        for p in row.iter_mut() {
            *p = self.matrix.apply(&Rgba::from(*p)).to_pixel();
        }
    }
}
