//! Reading and writing of image files
//!
//! Files are written and read through the `image` crate; the format follows
//! the file extension. PPM is the format used by the tests,
//! see <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>.
//! Formats without alpha (PPM, JPEG) drop it on write.
//!
use crate::buffer::RenderingBuffer;
use crate::color::Rgba8pre;
use crate::error::{Error, Result};
use crate::math::multiply_u8;

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;

use std::path::Path;

/// Unpremultiplied RGBA bytes of a buffer
pub fn to_rgba_bytes(buf: &RenderingBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() * 4);
    for p in &buf.data {
        let (r, g, b) = match p.a {
            0 => (0, 0, 0),
            255 => (p.r, p.g, p.b),
            a => {
                let un = |c: u8| ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8;
                (un(p.r), un(p.g), un(p.b))
            }
        };
        out.extend_from_slice(&[r, g, b, p.a]);
    }
    out
}

/// Premultiply RGBA bytes into a buffer
pub fn from_rgba_bytes(bytes: &[u8], width: usize, height: usize) -> Result<RenderingBuffer> {
    let data = bytes.chunks_exact(4)
        .map(|c| Rgba8pre::new(multiply_u8(c[0], c[3]),
                               multiply_u8(c[1], c[3]),
                               multiply_u8(c[2], c[3]),
                               c[3]))
        .collect();
    RenderingBuffer::from_pixels(data, width, height)
        .ok_or(Error::Dimensions { width, height, len: bytes.len() / 4 })
}

/// Write a buffer to `filename`
pub fn write_file<P: AsRef<Path>>(buf: &RenderingBuffer, filename: P) -> Result<()> {
    let filename = filename.as_ref();
    let (w, h) = (buf.width, buf.height);
    let img = RgbaImage::from_raw(w as u32, h as u32, to_rgba_bytes(buf))
        .ok_or(Error::Dimensions { width: w, height: h, len: buf.len() })?;
    let img = DynamicImage::ImageRgba8(img);
    match ImageFormat::from_path(filename)? {
        ImageFormat::Pnm | ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()).save(filename)?,
        _ => img.save(filename)?,
    }
    debug!("wrote {}x{} image to {}", w, h, filename.display());
    Ok(())
}

/// Read an image file into a premultiplied buffer
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<RenderingBuffer> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    from_rgba_bytes(&img.into_raw(), w as usize, h as usize)
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at debug level.
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let b1 = read_file(f1)?;
    let b2 = read_file(f2)?;
    if b1.width != b2.width || b1.height != b2.height {
        debug!("image sizes differ: {}x{} {}x{}", b1.width, b1.height, b2.width, b2.height);
        return Ok(false);
    }
    let mut flag = true;
    for (i, (p1, p2)) in b1.data.iter().zip(b2.data.iter()).enumerate() {
        if p1 != p2 {
            debug!("[{},{}]: {:?} {:?}", i % b1.width, i / b1.width, p1, p2);
            flag = false;
        }
    }
    Ok(flag)
}
