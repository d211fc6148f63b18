//! Rendering Base
//!
//! Clips horizontal runs to the buffer and hands them to a [`BlendMode`].

use crate::blend::BlendMode;
use crate::buffer::RenderingBuffer;
use crate::color::Rgba8pre;

use std::cmp::max;
use std::cmp::min;

#[derive(Debug)]
pub struct RenderingBase<'a> {
    pub rbuf: &'a mut RenderingBuffer,
}

impl<'a> RenderingBase<'a> {
    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        Self { rbuf }
    }
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Store `c` in every pixel
    pub fn clear(&mut self, c: Rgba8pre) {
        self.rbuf.fill(c);
    }
    /// Inclusive pixel limits (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.rbuf.width as i64;
        let h = self.rbuf.height as i64;
        (0, w-1, 0, h-1)
    }
    /// Composite `c` onto pixels `x .. x + len` of row `y`
    pub fn blend_hline(&mut self, x: i64, y: i64, len: i64, c: Rgba8pre, mode: BlendMode) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if y > ymax || y < ymin || len <= 0 {
            return;
        }
        let x1 = max(x, xmin);
        let x2 = min(x + len - 1, xmax);
        if x1 > x2 {
            return;
        }
        let row = self.rbuf.row_addr(x1 as usize, y as usize);
        mode.blend_hline(&mut row[.. (x2 - x1 + 1) as usize], c);
    }
    /// Composite `colors[i]` onto pixel `x + i` of row `y`
    pub fn blend_color_hspan(&mut self, x: i64, y: i64, colors: &[Rgba8pre], mode: BlendMode) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if y > ymax || y < ymin {
            return;
        }
        let (mut x, mut len, mut off) = (x, colors.len() as i64, 0);
        if x < xmin {
            len -= xmin - x;
            if len <= 0 {
                return;
            }
            off += xmin - x;
            x = xmin;
        }
        if x + len > xmax {
            len = xmax - x + 1;
            if len <= 0 {
                return;
            }
        }
        let row = self.rbuf.row_addr(x as usize, y as usize);
        let off = off as usize;
        mode.blend_color_hspan(&mut row[.. len as usize], &colors[off .. off + len as usize]);
    }
}
