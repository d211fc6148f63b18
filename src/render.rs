//! Renderer

use crate::base::RenderingBase;
use crate::blend::BlendMode;
use crate::color::Rgba8pre;
use crate::scan::Scanline;
use crate::shader::Shader;

use crate::Rasterize;
use crate::Render;

/// Renderer for a single premultiplied color
#[derive(Debug)]
pub struct RenderingScanlineSolid<'r, 'a> {
    pub base: &'r mut RenderingBase<'a>,
    pub color: Rgba8pre,
    pub mode: BlendMode,
}

impl<'r, 'a> RenderingScanlineSolid<'r, 'a> {
    /// Create a new Renderer from a Rendering Base
    pub fn with_base(base: &'r mut RenderingBase<'a>, color: Rgba8pre, mode: BlendMode) -> Self {
        Self { base, color, mode }
    }
}

impl<'r, 'a> Render for RenderingScanlineSolid<'r, 'a> {
    fn render(&mut self, sl: &Scanline) {
        for span in &sl.spans {
            self.base.blend_hline(span.x, sl.y, span.len, self.color, self.mode);
        }
    }
}

/// Renderer for colors produced by a [`Shader`]
///
/// The shader must already be bound to the current transform.
pub struct RenderingScanlineShader<'r, 'a, 's> {
    pub base: &'r mut RenderingBase<'a>,
    pub shader: &'s dyn Shader,
    pub mode: BlendMode,
    row: Vec<Rgba8pre>,
}

impl<'r, 'a, 's> RenderingScanlineShader<'r, 'a, 's> {
    /// Create a new Renderer from a Rendering Base
    pub fn with_base(base: &'r mut RenderingBase<'a>, shader: &'s dyn Shader, mode: BlendMode) -> Self {
        let row = Vec::with_capacity(base.width());
        Self { base, shader, mode, row }
    }
}

impl<'r, 'a, 's> Render for RenderingScanlineShader<'r, 'a, 's> {
    fn render(&mut self, sl: &Scanline) {
        let (xmin, xmax, _, _) = self.base.limits();
        for span in &sl.spans {
            // shade only the visible part
            let x1 = span.x.max(xmin);
            let x2 = span.end().min(xmax + 1);
            if x2 <= x1 {
                continue;
            }
            self.row.clear();
            self.row.resize((x2 - x1) as usize, Rgba8pre::transparent());
            self.shader.shade_span(x1, sl.y, &mut self.row);
            self.base.blend_color_hspan(x1, sl.y, &self.row, self.mode);
        }
    }
}

/// Render rasterized data to an image
pub fn render_scanlines<RAS, REN>(ras: &mut RAS, sl: &mut Scanline, ren: &mut REN)
    where REN: Render,
          RAS: Rasterize
{
    if ras.rewind_scanlines() {
        sl.reset_spans();
        while ras.sweep_scanline(sl) {
            ren.render(sl);
        }
    }
}
