//! Aliased scanline rasterizer for premultiplied 8-bit pixmaps
//!
//! # How does this work
//!
//! ```text
//!    canvas = Canvas( RenderingBuffer )
//!    canvas.draw_*(geometry, paint)
//!      Paint        -- BlendMode optimized for the source, Shader bound to the CTM
//!      EdgeList     -- geometry mapped by the CTM
//!        Clip::line_to()        -- clip to device, pin left/right to the border
//!        curve::flatten_*()     -- curves as line segments
//!        Output: Edges with top, bottom, slope, intercept and winding
//!      Rasterizer   -- Rect, Convex or Scanline (nonzero / even-odd)
//!   render_scanlines(ras, sl, ren)
//!     rewind_scanlines
//!       sort edges
//!     sweep_scanline()
//!       Output: Spans of covered pixels for one row
//!       render() -- one row
//!         blend_hline         -- solid color
//!         blend_color_hspan   -- shader output
//!           BlendMode::blend()
//! ```
//!
//! # Example
//!
//!     use scanpaint::{Canvas, Paint, Point, RenderingBuffer, Rgba, Rgba8pre};
//!
//!     let mut buf = RenderingBuffer::new(20, 20);
//!     let mut canvas = Canvas::new(&mut buf);
//!     let pts = [Point::new(5.0, 5.0), Point::new(15.0, 5.0),
//!                Point::new(15.0, 15.0), Point::new(5.0, 15.0)];
//!     let mut paint = Paint::new(Rgba::new(1.0, 0.0, 0.0, 1.0));
//!     canvas.draw_convex_polygon(&pts, &mut paint);
//!
//!     assert_eq!(buf[(5, 5)], Rgba8pre::new(255, 0, 0, 255));
//!     assert_eq!(buf[(15, 15)], Rgba8pre::transparent());
//!

pub mod math;
pub mod color;
pub mod buffer;
pub mod base;
pub mod blend;
pub mod transform;
pub mod path;
pub mod clip;
pub mod curve;
pub mod edge;
pub mod scan;
pub mod raster;
pub mod render;
pub mod shader;
pub mod gradient;
pub mod gouraud;
pub mod pattern;
pub mod mesh;
pub mod paint;
pub mod canvas;
pub mod ppm;
pub mod error;

pub use crate::math::*;
pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::base::*;
pub use crate::blend::*;
pub use crate::transform::*;
pub use crate::path::*;
pub use crate::clip::*;
pub use crate::curve::*;
pub use crate::edge::*;
pub use crate::scan::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::shader::*;
pub use crate::gradient::*;
pub use crate::gouraud::*;
pub use crate::pattern::*;
pub use crate::mesh::*;
pub use crate::paint::*;
pub use crate::canvas::*;
pub use crate::error::{Error, Result};

/// Default curve flattening tolerance, in device pixels
pub const FLATNESS_TOLERANCE : f64 = 0.25;

/// Sweep geometry into scanlines
pub trait Rasterize {
    /// Prepare to sweep from the top, false if nothing is covered
    fn rewind_scanlines(&mut self) -> bool;
    /// Fill `sl` with the next row holding at least one span
    ///
    /// Returns false when no rows remain
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> bool;
}

/// Composite scanlines into an image
pub trait Render {
    /// Render a single Scanline Row
    fn render(&mut self, sl: &Scanline);
}
