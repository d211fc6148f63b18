//! Canvas
//!
//! The draw-call surface. A [`Canvas`] borrows a [`RenderingBuffer`] and keeps
//! the current transform (CTM) with a stack for [`Canvas::save`] and
//! [`Canvas::restore`]. Each draw call maps its geometry through the CTM,
//! builds an [`EdgeList`], picks a rasterizer and renders into the buffer.

use crate::base::RenderingBase;
use crate::blend::BlendMode;
use crate::buffer::RenderingBuffer;
use crate::clip::Rectangle;
use crate::color::{Rgba, Rgba8pre};
use crate::edge::EdgeList;
use crate::error::Result;
use crate::gouraud::TriColorShader;
use crate::math::{clamp, iround};
use crate::mesh::{self, tessellate_quad};
use crate::paint::Paint;
use crate::path::{Path, Point};
use crate::raster::{RasterizerConvex, RasterizerRect, RasterizerScanline};
use crate::render::{render_scanlines, RenderingScanlineShader, RenderingScanlineSolid};
use crate::scan::Scanline;
use crate::shader::{ComposeShader, ProxyShader, Shader};
use crate::transform::Transform;
use crate::Rasterize;
use crate::FLATNESS_TOLERANCE;

use log::debug;

/// Source of colors for one draw, after blend mode optimization
enum Fill<'s> {
    Solid(Rgba8pre),
    Shader(&'s dyn Shader),
}

/// Drawing surface over a caller owned buffer
///
///     use scanpaint::{Canvas, Paint, Rectangle, RenderingBuffer, Rgba, Rgba8pre};
///
///     let mut buf = RenderingBuffer::new(8, 8);
///     let mut canvas = Canvas::new(&mut buf);
///     canvas.clear(Rgba::white());
///     canvas.translate(2.0, 0.0);
///     canvas.draw_rect(&Rectangle::new(0.0, 0.0, 2.0, 2.0), &mut Paint::default());
///
///     assert_eq!(buf[(2, 0)], Rgba8pre::black());
///     assert_eq!(buf[(1, 0)], Rgba8pre::white());
///     assert_eq!(buf[(4, 0)], Rgba8pre::white());
///
#[derive(Debug)]
pub struct Canvas<'a> {
    base: RenderingBase<'a>,
    ctm: Transform,
    stack: Vec<Transform>,
    tolerance: f64,
}

impl<'a> Canvas<'a> {
    /// Canvas drawing into `rbuf` with an identity transform
    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        Self { base: RenderingBase::new(rbuf),
               ctm: Transform::new(),
               stack: vec![],
               tolerance: FLATNESS_TOLERANCE,
        }
    }
    pub fn width(&self) -> usize {
        self.base.width()
    }
    pub fn height(&self) -> usize {
        self.base.height()
    }
    /// Curve flattening tolerance in device pixels
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
    /// Store `color` in every pixel, ignoring the transform
    pub fn clear(&mut self, color: Rgba) {
        self.base.clear(color.to_pixel());
    }

    /// Current transform
    pub fn ctm(&self) -> Transform {
        self.ctm
    }
    /// Push a copy of the current transform
    pub fn save(&mut self) {
        self.stack.push(self.ctm);
    }
    /// Pop the transform pushed by the matching [`Canvas::save`]
    pub fn restore(&mut self) {
        match self.stack.pop() {
            Some(m) => self.ctm = m,
            None => debug!("restore without save"),
        }
    }
    /// Apply `m` to geometry before the current transform
    pub fn concat(&mut self, m: &Transform) {
        self.ctm = self.ctm.concat(m);
    }
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.concat(&Transform::new_translate(dx, dy));
    }
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(&Transform::new_scale(sx, sy));
    }
    /// Rotate by `angle` radians
    pub fn rotate(&mut self, angle: f64) {
        self.concat(&Transform::new_rotate(angle));
    }

    fn edge_list(&self) -> EdgeList {
        EdgeList::new(self.width(), self.height()).with_tolerance(self.tolerance)
    }

    /// Blend mode for a source whose colors all have the alpha of `pixel`
    ///
    /// None when nothing would change.
    fn solid_mode(mode: BlendMode, pixel: Rgba8pre) -> Option<BlendMode> {
        match mode.optimize_for_alpha(pixel.a) {
            BlendMode::Dst => {
                debug!("{:?} with alpha {} leaves the destination", mode, pixel.a);
                None
            }
            m => Some(m),
        }
    }

    /// Bind `shader` to the current transform and optimize `mode` for it
    ///
    /// None when the shader cannot be bound or nothing would change.
    fn shader_mode(&self, mode: BlendMode, shader: &mut dyn Shader) -> Option<BlendMode> {
        if !shader.bind_context(&self.ctm) {
            debug!("shader cannot be bound to {:?}", self.ctm);
            return None;
        }
        let m = if shader.is_opaque() { mode.optimize_opaque() } else { mode };
        if m == BlendMode::Dst {
            debug!("{:?} leaves the destination", mode);
            return None;
        }
        Some(m)
    }

    /// Blend mode and color source of `paint`
    fn prepare<'p>(&self, paint: &'p mut Paint) -> Option<(BlendMode, Fill<'p>)> {
        let mode = paint.blend_mode();
        if mode == BlendMode::Dst {
            debug!("Dst blend mode, nothing drawn");
            return None;
        }
        let pixel = paint.color().to_pixel();
        match paint.shader_mut() {
            Some(shader) => {
                let m = self.shader_mode(mode, shader)?;
                Some((m, Fill::Shader(shader)))
            }
            None => {
                let m = Self::solid_mode(mode, pixel)?;
                Some((m, Fill::Solid(pixel)))
            }
        }
    }

    fn fill<RAS: Rasterize>(&mut self, ras: &mut RAS, mode: BlendMode, fill: Fill) {
        let mut sl = Scanline::new();
        match fill {
            Fill::Solid(c) => {
                let mut ren = RenderingScanlineSolid::with_base(&mut self.base, c, mode);
                render_scanlines(ras, &mut sl, &mut ren);
            }
            Fill::Shader(s) => {
                let mut ren = RenderingScanlineShader::with_base(&mut self.base, s, mode);
                render_scanlines(ras, &mut sl, &mut ren);
            }
        }
    }

    /// Fill a rectangle
    ///
    /// Under an identity transform the rectangle is rounded to whole pixels
    /// and filled directly; otherwise it is drawn as a four point polygon.
    pub fn draw_rect(&mut self, rect: &Rectangle<f64>, paint: &mut Paint) {
        if !self.ctm.is_identity() {
            self.draw_convex_polygon(&rect.corners(), paint);
            return;
        }
        let (mode, fill) = match self.prepare(paint) {
            Some(v) => v,
            None => return,
        };
        let (w, h) = (self.width() as f64, self.height() as f64);
        let x1 = iround(clamp(rect.x1, 0.0, w));
        let x2 = iround(clamp(rect.x2, 0.0, w));
        let y1 = iround(clamp(rect.y1, 0.0, h));
        let y2 = iround(clamp(rect.y2, 0.0, h));
        let mut ras = RasterizerRect::new(x1, y1, x2, y2);
        self.fill(&mut ras, mode, fill);
    }

    /// Fill a convex polygon
    ///
    /// The last point connects back to the first. Fewer than three points
    /// draw nothing; non-convex input draws something undefined.
    pub fn draw_convex_polygon(&mut self, pts: &[Point], paint: &mut Paint) {
        if pts.len() < 3 {
            debug!("convex polygon with {} points", pts.len());
            return;
        }
        let (mode, fill) = match self.prepare(paint) {
            Some(v) => v,
            None => return,
        };
        let mut edges = self.edge_list();
        edges.add_polygon(&self.ctm.map_points(pts));
        let mut ras = RasterizerConvex::new(edges);
        self.fill(&mut ras, mode, fill);
    }

    /// Fill a path with the paint's [`FillingRule`](crate::FillingRule)
    ///
    /// Every contour is closed.
    pub fn draw_path(&mut self, path: &Path, paint: &mut Paint) {
        let rule = paint.filling_rule();
        let (mode, fill) = match self.prepare(paint) {
            Some(v) => v,
            None => return,
        };
        let mut edges = self.edge_list();
        edges.add_path(&path.transform(&self.ctm));
        let mut ras = RasterizerScanline::new(edges, rule);
        self.fill(&mut ras, mode, fill);
    }

    /// Fill one triangle with a shader built for it
    fn draw_triangle<S: Shader>(&mut self, p: &[Point; 3], mut shader: S, mode: BlendMode) {
        let mode = match self.shader_mode(mode, &mut shader) {
            Some(m) => m,
            None => return,
        };
        let mut edges = self.edge_list();
        edges.add_polygon(&self.ctm.map_points(p));
        let mut ras = RasterizerConvex::new(edges);
        self.fill(&mut ras, mode, Fill::Shader(&shader));
    }

    /// Draw triangles
    ///
    /// `indices` are taken three at a time, each addressing `verts` and,
    /// when given, `colors` and `texs`.
    ///
    /// - colors only: colors interpolated across each triangle
    /// - texture coordinates only: the paint's shader, mapped so each
    ///   triangle's texture coordinates land on its vertices
    /// - both: the product of the two
    /// - neither: each triangle filled with the paint
    ///
    /// Texture coordinates need a shader on the paint; without one they are
    /// ignored. Triangles with degenerate texture coordinates are skipped.
    pub fn draw_mesh(&mut self, verts: &[Point], colors: Option<&[Rgba]>, texs: Option<&[Point]>,
                     indices: &[usize], paint: &mut Paint) -> Result<()> {
        mesh::validate(verts, colors, texs, indices)?;
        let mode = paint.blend_mode();
        if mode == BlendMode::Dst {
            debug!("Dst blend mode, mesh not drawn");
            return Ok(());
        }
        let texs = if paint.shader().is_some() { texs } else { None };
        for [i0, i1, i2] in mesh::triangles(indices) {
            let p = [verts[i0], verts[i1], verts[i2]];
            let colored = colors.map(|c| TriColorShader::new(p, [c[i0], c[i1], c[i2]]));
            let tex = match texs {
                Some(t) => match texture_map(&p, &[t[i0], t[i1], t[i2]]) {
                    Some(m) => Some(m),
                    None => {
                        debug!("degenerate texture coordinates, triangle {:?} skipped", p);
                        continue;
                    }
                },
                None => None,
            };
            match (colored, tex) {
                (None, None) => self.draw_convex_polygon(&p, paint),
                (Some(c), None) => self.draw_triangle(&p, c, mode),
                (colored, Some(m)) => {
                    let shader = match paint.shader_mut() {
                        Some(s) => s,
                        None => continue,
                    };
                    let textured = ProxyShader::new(shader, m);
                    match colored {
                        Some(c) => self.draw_triangle(&p, ComposeShader::new(c, textured), mode),
                        None => self.draw_triangle(&p, textured, mode),
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw a quadrilateral patch subdivided `level` times
    ///
    /// See [`tessellate_quad`] and [`Canvas::draw_mesh`].
    pub fn draw_quad(&mut self, verts: &[Point; 4], colors: Option<&[Rgba; 4]>,
                     texs: Option<&[Point; 4]>, level: usize, paint: &mut Paint) -> Result<()> {
        let m = tessellate_quad(verts, colors, texs, level);
        self.draw_mesh(&m.verts, m.colors.as_deref(), m.texs.as_deref(), &m.indices, paint)
    }
}

/// Map taking texture coordinates `t` onto the triangle `p`
///
/// None when the texture coordinates are colinear.
fn texture_map(p: &[Point; 3], t: &[Point; 3]) -> Option<Transform> {
    let inv = Transform::basis(t[0], t[1], t[2]).invert()?;
    Some(Transform::basis(p[0], p[1], p[2]).concat(&inv))
}
