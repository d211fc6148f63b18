//! Triangle meshes
//!
//! A [`Mesh`] is a list of vertices with optional per vertex colors and
//! texture coordinates, and a list of indices taken three at a time.
//! [`tessellate_quad`] subdivides a quadrilateral patch into such a mesh.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::path::Point;

/// Vertices, optional attributes and triangle indices
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Mesh {
    pub verts: Vec<Point>,
    pub colors: Option<Vec<Rgba>>,
    pub texs: Option<Vec<Point>>,
    pub indices: Vec<usize>,
}

impl Mesh {
    /// Number of triangles described by the indices
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
    /// Check indices and attribute arrays against the vertices
    pub fn validate(&self) -> Result<()> {
        validate(&self.verts, self.colors.as_deref(), self.texs.as_deref(), &self.indices)
    }
    /// Index triples, one per triangle
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        triangles(&self.indices)
    }
}

/// Index triples of `indices`, dropping a trailing partial triangle
pub fn triangles(indices: &[usize]) -> impl Iterator<Item = [usize; 3]> + '_ {
    indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
}

/// Check a mesh before drawing
///
/// Every index must address a vertex, attribute arrays must cover the
/// vertices they are indexed with, and the indices must form whole
/// triangles.
pub fn validate(verts: &[Point], colors: Option<&[Rgba]>, texs: Option<&[Point]>,
                indices: &[usize]) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(Error::MeshIndexCount(indices.len()));
    }
    let count = verts.len();
    if let Some(colors) = colors {
        if colors.len() < count {
            return Err(Error::MeshAttribute { name: "colors", len: colors.len(), count });
        }
    }
    if let Some(texs) = texs {
        if texs.len() < count {
            return Err(Error::MeshAttribute { name: "texs", len: texs.len(), count });
        }
    }
    match indices.iter().find(|&&i| i >= count) {
        Some(&index) => Err(Error::MeshIndex { index, count }),
        None => Ok(()),
    }
}

/// Bilinear blend of the corners a, b, c, d at (u,v)
///
/// a is at (0,0), b at (1,0), c at (1,1) and d at (0,1).
fn bilerp<T>(q: &[T; 4], u: f64, v: f64) -> T
    where T: Copy + std::ops::Add<Output = T> + std::ops::Mul<f64, Output = T>
{
    q[0] * ((1.0 - u) * (1.0 - v))
        + q[1] * (u * (1.0 - v))
        + q[2] * (u * v)
        + q[3] * ((1.0 - u) * v)
}

/// Subdivide a quadrilateral into a grid of triangles
///
/// Corners are given in order around the quad. A `level` of `L` places
/// `L` extra lines in each direction, so the grid has `(L+2)²` vertices
/// and `2 (L+1)²` triangles. Colors and texture coordinates, when given,
/// are interpolated the same way as the positions.
///
///     use scanpaint::{tessellate_quad, Point};
///     let q = [Point::new(0.0, 0.0), Point::new(10.0, 0.0),
///              Point::new(10.0, 10.0), Point::new(0.0, 10.0)];
///     let m = tessellate_quad(&q, None, None, 1);
///     assert_eq!(m.verts.len(), 9);
///     assert_eq!(m.triangle_count(), 8);
///     assert_eq!(m.verts[4], Point::new(5.0, 5.0));
///
pub fn tessellate_quad(verts: &[Point; 4], colors: Option<&[Rgba; 4]>,
                       texs: Option<&[Point; 4]>, level: usize) -> Mesh {
    let n = level + 2;
    let d = (level + 1) as f64;
    let mut mesh = Mesh {
        verts: Vec::with_capacity(n * n),
        colors: colors.map(|_| Vec::with_capacity(n * n)),
        texs: texs.map(|_| Vec::with_capacity(n * n)),
        indices: Vec::with_capacity(6 * (n - 1) * (n - 1)),
    };
    for j in 0 .. n {
        let v = j as f64 / d;
        for i in 0 .. n {
            let u = i as f64 / d;
            mesh.verts.push(bilerp(verts, u, v));
            if let (Some(c), Some(out)) = (colors, mesh.colors.as_mut()) {
                out.push(bilerp(c, u, v));
            }
            if let (Some(t), Some(out)) = (texs, mesh.texs.as_mut()) {
                out.push(bilerp(t, u, v));
            }
        }
    }
    for j in 0 .. n - 1 {
        for i in 0 .. n - 1 {
            let v0 = j * n + i;
            mesh.indices.extend_from_slice(&[v0, v0 + 1, v0 + n]);
            mesh.indices.extend_from_slice(&[v0 + 1, v0 + n, v0 + n + 1]);
        }
    }
    mesh
}
