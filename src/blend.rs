//! Porter-Duff compositing of premultiplied pixels
//!
//! With `S` the source, `D` the destination and `Sa`, `Da` their alphas, each
//! channel (alpha included) is computed as:
//!
//! | Mode      | Result                                |
//! |-----------|---------------------------------------|
//! | Clear     | 0                                     |
//! | Src       | S                                     |
//! | Dst       | D                                     |
//! | SrcOver   | S + (1 - Sa) D                        |
//! | DstOver   | D + (1 - Da) S                        |
//! | SrcIn     | Da S                                  |
//! | DstIn     | Sa D                                  |
//! | SrcOut    | (1 - Da) S                            |
//! | DstOut    | (1 - Sa) D                            |
//! | SrcATop   | Da S + (1 - Sa) D                     |
//! | DstATop   | Sa D + (1 - Da) S                     |
//! | Xor       | (1 - Sa) D + (1 - Da) S               |
//!
//! Products are computed in 8-bit fixed point with [`div255`].

use crate::color::Rgba8pre;
use crate::math::div255;

/// Compositing operator
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcATop,
    DstATop,
    Xor,
}

impl Default for BlendMode {
    fn default() -> BlendMode {
        BlendMode::SrcOver
    }
}

use self::BlendMode::*;

/// Equivalent mode when the source is opaque everywhere
const OPAQUE: [BlendMode; 12] = [
    Clear, Src, Dst, Src, DstOver, SrcIn, Dst, SrcOut, Clear, SrcIn, DstOver, SrcOut,
];
/// Equivalent mode when the source is fully transparent
const TRANSPARENT: [BlendMode; 12] = [
    Clear, Clear, Dst, Dst, Dst, Clear, Clear, Clear, Dst, Dst, Clear, Dst,
];

/// Run `$body` with `$op` bound to the channel operator
/// `op(da, sa, d, s)` of a general mode
///
/// The mode is matched once; `$body` is expanded for each operator.
macro_rules! with_channel_op {
    ($mode:expr, $op:ident => $body:expr) => {
        match $mode {
            SrcOver => { let $op = |_: u32, sa: u32, d: u32, s: u32| s + div255((255 - sa) * d); $body }
            DstOver => { let $op = |da: u32, _: u32, d: u32, s: u32| d + div255((255 - da) * s); $body }
            SrcIn   => { let $op = |da: u32, _: u32, _: u32, s: u32| div255(da * s); $body }
            DstIn   => { let $op = |_: u32, sa: u32, d: u32, _: u32| div255(sa * d); $body }
            SrcOut  => { let $op = |da: u32, _: u32, _: u32, s: u32| div255((255 - da) * s); $body }
            DstOut  => { let $op = |_: u32, sa: u32, d: u32, _: u32| div255((255 - sa) * d); $body }
            SrcATop => { let $op = |da: u32, sa: u32, d: u32, s: u32| div255(da * s + (255 - sa) * d); $body }
            DstATop => { let $op = |da: u32, sa: u32, d: u32, s: u32| div255(sa * d + (255 - da) * s); $body }
            Xor     => { let $op = |da: u32, sa: u32, d: u32, s: u32| div255((255 - sa) * d + (255 - da) * s); $body }
            Clear   => { let $op = |_: u32, _: u32, _: u32, _: u32| 0; $body }
            Src     => { let $op = |_: u32, _: u32, _: u32, s: u32| s; $body }
            Dst     => { let $op = |_: u32, _: u32, d: u32, _: u32| d; $body }
        }
    };
}

impl BlendMode {
    /// Every mode, in declaration order
    pub const ALL: [BlendMode; 12] = [
        Clear, Src, Dst, SrcOver, DstOver, SrcIn, DstIn, SrcOut, DstOut, SrcATop, DstATop, Xor,
    ];

    /// Cheaper equivalent mode for a source known to be opaque
    pub fn optimize_opaque(self) -> BlendMode {
        OPAQUE[self as usize]
    }
    /// Cheaper equivalent mode for a constant source with `alpha`
    ///
    /// Only alpha 0 and 255 change the mode.
    ///
    ///     use scanpaint::BlendMode;
    ///     assert_eq!(BlendMode::SrcOver.optimize_for_alpha(255), BlendMode::Src);
    ///     assert_eq!(BlendMode::SrcOver.optimize_for_alpha(0), BlendMode::Dst);
    ///     assert_eq!(BlendMode::SrcOver.optimize_for_alpha(128), BlendMode::SrcOver);
    ///
    pub fn optimize_for_alpha(self, alpha: u8) -> BlendMode {
        match alpha {
            0 => TRANSPARENT[self as usize],
            255 => self.optimize_opaque(),
            _ => self,
        }
    }

    /// Composite a single source pixel onto a destination pixel
    #[inline]
    pub fn blend(self, dst: Rgba8pre, src: Rgba8pre) -> Rgba8pre {
        match self {
            Clear => Rgba8pre::transparent(),
            Src   => src,
            Dst   => dst,
            _     => with_channel_op!(self, op => porter_duff(dst, src, op)),
        }
    }

    /// Composite a constant source over a row
    pub fn blend_hline(self, row: &mut [Rgba8pre], src: Rgba8pre) {
        match self {
            Clear => row.iter_mut().for_each(|p| *p = Rgba8pre::transparent()),
            Src   => row.iter_mut().for_each(|p| *p = src),
            Dst   => {}
            _     => with_channel_op!(self, op => {
                row.iter_mut().for_each(|p| *p = porter_duff(*p, src, op))
            }),
        }
    }

    /// Composite a row of source pixels over a row of destination pixels
    ///
    /// `row` and `srcs` are walked in step; the shorter one sets the length.
    pub fn blend_color_hspan(self, row: &mut [Rgba8pre], srcs: &[Rgba8pre]) {
        match self {
            Dst => {}
            Src => {
                let n = row.len().min(srcs.len());
                row[..n].copy_from_slice(&srcs[..n]);
            }
            Clear => row.iter_mut().zip(srcs).for_each(|(p, _)| *p = Rgba8pre::transparent()),
            _ => with_channel_op!(self, op => {
                for (p, s) in row.iter_mut().zip(srcs) {
                    *p = porter_duff(*p, *s, op);
                }
            }),
        }
    }
}

/// Apply a per-channel operator `f(da, sa, d, s)` to all four channels
///
/// For the alpha channel `d = da` and `s = sa`.
#[inline]
fn porter_duff<F>(dst: Rgba8pre, src: Rgba8pre, f: F) -> Rgba8pre
    where F: Fn(u32, u32, u32, u32) -> u32 + Copy
{
    let (da, sa) = (u32::from(dst.a), u32::from(src.a));
    let ch = |d: u8, s: u8| f(da, sa, u32::from(d), u32::from(s)).min(255) as u8;
    Rgba8pre::new(ch(dst.r, src.r), ch(dst.g, src.g), ch(dst.b, src.b), ch(dst.a, src.a))
}
