//! Rendering buffer

use crate::color::Rgba8pre;

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Premultiplied pixels stored in row-major order (C-format). The buffer is
/// owned by the caller; drawing borrows it for the lifetime of a
/// [`Canvas`](crate::Canvas).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderingBuffer {
    /// Pixel data of Image
    pub data: Vec<Rgba8pre>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width and height, all pixels transparent
    ///
    ///     use scanpaint::{RenderingBuffer, Rgba8pre};
    ///     let buf = RenderingBuffer::new(4, 3);
    ///     assert_eq!(buf.len(), 12);
    ///     assert_eq!(buf[(3, 2)], Rgba8pre::transparent());
    ///
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width, height, data: vec![Rgba8pre::transparent(); width * height]
        }
    }
    /// Wrap existing pixel data
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` pixels
    pub fn from_pixels(data: Vec<Rgba8pre>, width: usize, height: usize) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(RenderingBuffer { data, width, height })
    }
    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer has no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Return row `i` of the image
    pub fn row(&self, i: usize) -> &[Rgba8pre] {
        debug_assert!(i < self.height);
        let row = i * self.width;
        &self.data[row .. row + self.width]
    }
    /// Return row `i` of the image, mutable
    pub fn row_ptr(&mut self, i: usize) -> &mut [Rgba8pre] {
        debug_assert!(i < self.height);
        let row = i * self.width;
        &mut self.data[row .. row + self.width]
    }
    /// Return the remainder of row `y` starting at column `x`
    pub fn row_addr(&mut self, x: usize, y: usize) -> &mut [Rgba8pre] {
        debug_assert!(x < self.width);
        &mut self.row_ptr(y)[x ..]
    }
    /// Set every pixel to `p`
    pub fn fill(&mut self, p: Rgba8pre) {
        self.data.iter_mut().for_each(|v| *v = p);
    }
    /// All pixels have an alpha of 255
    pub fn is_opaque(&self) -> bool {
        self.data.iter().all(|p| p.a == 255)
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = Rgba8pre;
    fn index(&self, index: (usize, usize)) -> &Rgba8pre {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Rgba8pre {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
