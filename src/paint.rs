//! Paint

use crate::blend::BlendMode;
use crate::color::Rgba;
use crate::raster::FillingRule;
use crate::shader::Shader;

use std::fmt;

/// How geometry is colored and composited
///
/// Without a shader, the color is used; with a shader, the color is
/// ignored.
pub struct Paint {
    color: Rgba,
    blend_mode: BlendMode,
    filling_rule: FillingRule,
    shader: Option<Box<dyn Shader>>,
}

impl Default for Paint {
    fn default() -> Self {
        Self::new(Rgba::black())
    }
}

impl fmt::Debug for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paint")
            .field("color", &self.color)
            .field("blend_mode", &self.blend_mode)
            .field("filling_rule", &self.filling_rule)
            .field("shader", &self.shader.is_some())
            .finish()
    }
}

impl Paint {
    /// Solid color, composited with SrcOver
    pub fn new(color: Rgba) -> Self {
        Self { color,
               blend_mode: BlendMode::default(),
               filling_rule: FillingRule::default(),
               shader: None,
        }
    }
    /// Colors from a shader, composited with SrcOver
    pub fn with_shader<S: Shader + 'static>(shader: S) -> Self {
        let mut p = Self::default();
        p.set_shader(shader);
        p
    }
    pub fn color(&self) -> Rgba {
        self.color
    }
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }
    pub fn alpha(&self) -> f64 {
        self.color.a
    }
    pub fn set_alpha(&mut self, alpha: f64) {
        self.color.a = alpha;
    }
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }
    pub fn filling_rule(&self) -> FillingRule {
        self.filling_rule
    }
    pub fn set_filling_rule(&mut self, rule: FillingRule) {
        self.filling_rule = rule;
    }
    pub fn shader(&self) -> Option<&dyn Shader> {
        self.shader.as_deref()
    }
    pub fn shader_mut(&mut self) -> Option<&mut (dyn Shader + 'static)> {
        self.shader.as_deref_mut()
    }
    pub fn set_shader<S: Shader + 'static>(&mut self, shader: S) {
        self.shader = Some(Box::new(shader));
    }
    /// Remove the shader, returning to the solid color
    pub fn take_shader(&mut self) -> Option<Box<dyn Shader>> {
        self.shader.take()
    }
}
