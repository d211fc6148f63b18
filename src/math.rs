//! Fixed point and rounding helpers

/// Divide by 255 with rounding, exact for `0 ..= 255 * 255`
///
/// Equivalent to `(n as f64 / 255.0).round()` over the range of products
/// of two 8-bit values.
///
///     use scanpaint::div255;
///     assert_eq!(div255(255 * 255), 255);
///     assert_eq!(div255(127), 0);
///     assert_eq!(div255(128), 1);
///
#[inline]
pub fn div255(n: u32) -> u32 {
    ((n + 128) * 257) >> 16
}

/// Multiply two u8 values as if they were fractions in [0,1]
#[inline]
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    div255(u32::from(a) * u32::from(b)) as u8
}

/// Round half up to the nearest integer
///
/// Matches `floor(v + 0.5)`, which differs from `f64::round` for negative
/// halves.
#[inline]
pub fn iround(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Clamp `v` into `[lo, hi]`
#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Repeat `t` over [0,1)
#[inline]
pub fn tile_repeat(t: f64) -> f64 {
    t - t.floor()
}

/// Reflect `t` back and forth across [0,1]
///
/// Even periods run forward, odd periods run backward.
#[inline]
pub fn tile_and_mirror(t: f64) -> f64 {
    let x = t - 1.0;
    let x = x - (x * 0.5).floor() * 2.0 - 1.0;
    x.abs()
}
