
use scanpaint::{tessellate_quad, BitmapShader, Canvas, Error, Mesh, Paint, Point};
use scanpaint::{RenderingBuffer, Rgba, Rgba8pre, TileMode, Transform};

const A: Rgba8pre = Rgba8pre::new(255, 0, 0, 255);
const B: Rgba8pre = Rgba8pre::new(0, 255, 0, 255);
const C: Rgba8pre = Rgba8pre::new(0, 0, 255, 255);
const D: Rgba8pre = Rgba8pre::new(255, 255, 255, 255);

fn square(s: f64) -> [Point; 4] {
    [Point::new(0.0, 0.0), Point::new(s, 0.0), Point::new(s, s), Point::new(0.0, s)]
}

/// 2x2 bitmap, A B on the first row and C D on the second
fn checker() -> BitmapShader {
    let bitmap = RenderingBuffer::from_pixels(vec![A, B, C, D], 2, 2).unwrap();
    BitmapShader::new(bitmap, Transform::new(), TileMode::Clamp)
}

#[test]
fn t06_tessellation_counts() {
    let q = square(10.0);
    let m0 = tessellate_quad(&q, None, None, 0);
    assert_eq!(m0.verts.len(), 4);
    assert_eq!(m0.triangle_count(), 2);
    let m1 = tessellate_quad(&q, None, None, 1);
    assert_eq!(m1.verts.len(), 9);
    assert_eq!(m1.triangle_count(), 8);
    let m3 = tessellate_quad(&q, None, None, 3);
    assert_eq!(m3.verts.len(), 25);
    assert_eq!(m3.triangle_count(), 32);
    for m in [m0, m1, m3].iter() {
        m.validate().unwrap();
        assert!(m.colors.is_none());
        assert!(m.texs.is_none());
    }
}

#[test]
fn t06_tessellation_interpolates() {
    let q = [Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(12.0, 8.0), Point::new(0.0, 4.0)];
    let colors = [Rgba::new(1.0, 0.0, 0.0, 1.0), Rgba::new(0.0, 1.0, 0.0, 1.0),
                  Rgba::new(0.0, 0.0, 1.0, 1.0), Rgba::new(0.0, 0.0, 0.0, 1.0)];
    let texs = square(2.0);
    let m = tessellate_quad(&q, Some(&colors), Some(&texs), 1);
    // corners are kept
    assert_eq!(m.verts[0], q[0]);
    assert_eq!(m.verts[2], q[1]);
    assert_eq!(m.verts[8], q[2]);
    assert_eq!(m.verts[6], q[3]);
    // center is the average of the corners
    assert_eq!(m.verts[4], Point::new(5.0, 3.0));
    let c = m.colors.as_ref().unwrap()[4];
    assert_eq!(c, Rgba::new(0.25, 0.25, 0.25, 1.0));
    assert_eq!(m.texs.as_ref().unwrap()[4], Point::new(1.0, 1.0));
    // edge midpoint
    assert_eq!(m.verts[1], Point::new(4.0, 0.0));
}

#[test]
fn t06_invalid_mesh() {
    let verts = square(4.0);
    let mut buf = RenderingBuffer::new(4, 4);
    let mut canvas = Canvas::new(&mut buf);
    let mut paint = Paint::default();

    let r = canvas.draw_mesh(&verts, None, None, &[0, 1, 4], &mut paint);
    assert!(matches!(r, Err(Error::MeshIndex { index: 4, count: 4 })));

    let r = canvas.draw_mesh(&verts, None, None, &[0, 1, 2, 3], &mut paint);
    assert!(matches!(r, Err(Error::MeshIndexCount(4))));

    let colors = [Rgba::white(); 3];
    let r = canvas.draw_mesh(&verts, Some(&colors), None, &[0, 1, 2], &mut paint);
    assert!(matches!(r, Err(Error::MeshAttribute { len: 3, count: 4, .. })));

    let m = Mesh { verts: verts.to_vec(), colors: None, texs: None, indices: vec![0, 1, 9] };
    assert!(m.validate().is_err());

    assert!(buf.data.iter().all(|&p| p == Rgba8pre::transparent()));
}

#[test]
fn t06_mesh_colors() {
    let mut buf = RenderingBuffer::new(10, 10);
    let mut canvas = Canvas::new(&mut buf);
    let verts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
    let colors = [Rgba::new(0.0, 0.0, 1.0, 1.0); 3];
    canvas.draw_mesh(&verts, Some(&colors), None, &[0, 1, 2], &mut Paint::default()).unwrap();
    assert_eq!(buf[(1, 1)], C);
    assert_eq!(buf[(8, 8)], Rgba8pre::transparent());
}

#[test]
fn t06_mesh_without_attributes_uses_paint() {
    let mut buf = RenderingBuffer::new(10, 10);
    let mut canvas = Canvas::new(&mut buf);
    let verts = square(10.0);
    let mut paint = Paint::new(Rgba::new(0.0, 1.0, 0.0, 1.0));
    canvas.draw_mesh(&verts, None, None, &[0, 1, 3, 1, 2, 3], &mut paint).unwrap();
    assert!(buf.data.iter().all(|&p| p == B));
}

#[test]
fn t06_quad_covers_without_seams() {
    let mut buf = RenderingBuffer::new(12, 12);
    let mut canvas = Canvas::new(&mut buf);
    let blue = [Rgba::new(0.0, 0.0, 1.0, 1.0); 4];
    canvas.draw_quad(&square(10.0), Some(&blue), None, 2, &mut Paint::default()).unwrap();
    for y in 0 .. 12 {
        for x in 0 .. 12 {
            let want = if x < 10 && y < 10 { C } else { Rgba8pre::transparent() };
            assert_eq!(buf[(x, y)], want, "pixel {} {}", x, y);
        }
    }
}

#[test]
fn t06_quad_colors_gradient() {
    let mut buf = RenderingBuffer::new(16, 16);
    let mut canvas = Canvas::new(&mut buf);
    let black = Rgba::black();
    let white = Rgba::white();
    let colors = [black, white, white, black];
    canvas.draw_quad(&square(16.0), Some(&colors), None, 3, &mut Paint::default()).unwrap();
    for y in 0 .. 16 {
        for x in 1 .. 16 {
            assert!(buf[(x, y)].r > buf[(x - 1, y)].r);
        }
        assert_eq!(buf[(0, y)], Rgba8pre::new(8, 8, 8, 255));
    }
}

#[test]
fn t06_quad_texture() {
    let mut buf = RenderingBuffer::new(10, 10);
    let mut canvas = Canvas::new(&mut buf);
    let mut paint = Paint::with_shader(checker());
    canvas.draw_quad(&square(10.0), None, Some(&square(2.0)), 0, &mut paint).unwrap();
    assert_eq!(buf[(2, 2)], A);
    assert_eq!(buf[(7, 2)], B);
    assert_eq!(buf[(2, 7)], C);
    assert_eq!(buf[(7, 7)], D);
    assert!(buf.data.iter().all(|p| p.a == 255));
}

#[test]
fn t06_quad_texture_and_colors() {
    let mut buf = RenderingBuffer::new(10, 10);
    let mut canvas = Canvas::new(&mut buf);
    let mut paint = Paint::with_shader(checker());
    let colors = [Rgba::new(1.0, 1.0, 0.0, 1.0); 4];
    canvas.draw_quad(&square(10.0), Some(&colors), Some(&square(2.0)), 1, &mut paint).unwrap();
    // yellow times the texture
    assert_eq!(buf[(2, 2)], Rgba8pre::new(255, 0, 0, 255));
    assert_eq!(buf[(7, 2)], Rgba8pre::new(0, 255, 0, 255));
    assert_eq!(buf[(2, 7)], Rgba8pre::new(0, 0, 0, 255));
    assert_eq!(buf[(7, 7)], Rgba8pre::new(255, 255, 0, 255));
}

#[test]
fn t06_degenerate_texture_skipped() {
    let mut buf = RenderingBuffer::new(10, 10);
    let mut canvas = Canvas::new(&mut buf);
    let mut paint = Paint::with_shader(checker());
    let verts = square(10.0);
    let texs = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(0.0, 2.0)];
    // first triangle has colinear texture coordinates
    canvas.draw_mesh(&verts, None, Some(&texs), &[0, 1, 2, 0, 2, 3], &mut paint).unwrap();
    assert_eq!(buf[(8, 2)], Rgba8pre::transparent());
    assert_eq!(buf[(2, 8)].a, 255);
}
