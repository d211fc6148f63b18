//! Colors
//!
//! Two color representations are used:
//!
//! - [`Rgba`]: unpremultiplied floating point components, nominally in [0,1]
//! - [`Rgba8pre`]: premultiplied 8-bit components, the pixel format of a
//!   [`RenderingBuffer`](crate::RenderingBuffer)

use crate::math::clamp;
use crate::math::div255;
use crate::math::multiply_u8;

use std::ops::{Add, Mul, Sub};

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// Values outside of [0,1] are clamped first.
pub fn cu8(v: f64) -> u8 {
    (clamp(v, 0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

/// Color as Red, Green, Blue, and Alpha, not premultiplied
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// Create new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Fully transparent (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Clamp every component into [0,1]
    pub fn clamped(&self) -> Self {
        Self::new(clamp(self.r, 0.0, 1.0),
                  clamp(self.g, 0.0, 1.0),
                  clamp(self.b, 0.0, 1.0),
                  clamp(self.a, 0.0, 1.0))
    }
    /// Alpha rounds to 255
    pub fn is_opaque(&self) -> bool {
        cu8(self.a) == 255
    }
    /// Premultiply and quantize
    ///
    /// Components are clamped to [0,1], color channels are multiplied by
    /// alpha, then scaled by 255 and rounded.
    ///
    ///     use scanpaint::{Rgba, Rgba8pre};
    ///     let p = Rgba::new(1.0, 0.5, 0.0, 0.5).to_pixel();
    ///     assert_eq!(p, Rgba8pre::new(128, 64, 0, 128));
    ///
    pub fn to_pixel(&self) -> Rgba8pre {
        let c = self.clamped();
        Rgba8pre::new(cu8(c.r * c.a), cu8(c.g * c.a), cu8(c.b * c.a), cu8(c.a))
    }
    /// Linear interpolation, `self` at `t = 0`, `other` at `t = 1`
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        *self + (*other - *self) * t
    }
}

impl Add for Rgba {
    type Output = Rgba;
    fn add(self, o: Rgba) -> Rgba {
        Rgba::new(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}
impl Sub for Rgba {
    type Output = Rgba;
    fn sub(self, o: Rgba) -> Rgba {
        Rgba::new(self.r - o.r, self.g - o.g, self.b - o.b, self.a - o.a)
    }
}
impl Mul<f64> for Rgba {
    type Output = Rgba;
    fn mul(self, s: f64) -> Rgba {
        Rgba::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

impl From<Rgba8pre> for Rgba {
    /// Unpremultiply, a zero alpha gives transparent black
    fn from(p: Rgba8pre) -> Rgba {
        if p.a == 0 {
            return Rgba::transparent();
        }
        let a = f64::from(p.a);
        Rgba::new(f64::from(p.r) / a,
                  f64::from(p.g) / a,
                  f64::from(p.b) / a,
                  a / 255.0)
    }
}

/// Premultiplied Color as Red, Green, Blue, and Alpha
///
/// Each color component is expected to be no larger than alpha.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgba8pre {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8pre {
    /// Create new pixel
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8pre { r, g, b, a }
    }
    /// Transparent black (0,0,0,0)
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
    /// Black Color (0,0,0,255)
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
    /// White Color (255,255,255,255)
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
    /// Pack as 0xAARRGGBB
    pub fn to_argb32(&self) -> u32 {
        u32::from(self.a) << 24 | u32::from(self.r) << 16 |
        u32::from(self.g) << 8 | u32::from(self.b)
    }
    /// Unpack from 0xAARRGGBB
    pub fn from_argb32(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8)
    }
    /// Channel-wise product, each channel treated as a fraction of 255
    pub fn modulate(&self, o: &Rgba8pre) -> Rgba8pre {
        Rgba8pre::new(multiply_u8(self.r, o.r),
                      multiply_u8(self.g, o.g),
                      multiply_u8(self.b, o.b),
                      multiply_u8(self.a, o.a))
    }
    /// Scale every channel by `alpha` / 255
    pub fn scale(&self, alpha: u8) -> Rgba8pre {
        let a = u32::from(alpha);
        Rgba8pre::new(div255(u32::from(self.r) * a) as u8,
                      div255(u32::from(self.g) * a) as u8,
                      div255(u32::from(self.b) * a) as u8,
                      div255(u32::from(self.a) * a) as u8)
    }
}

impl From<Rgba> for Rgba8pre {
    fn from(c: Rgba) -> Rgba8pre {
        c.to_pixel()
    }
}
