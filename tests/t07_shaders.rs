
use scanpaint::{BitmapShader, ColorMatrix, ColorMatrixShader, ComposeShader, LinearGradient};
use scanpaint::{Point, ProxyShader, RenderingBuffer, Rgba, Rgba8pre, Shader, SolidShader};
use scanpaint::{TileMode, Transform, TriColorShader};

const A: Rgba8pre = Rgba8pre::new(255, 0, 0, 255);
const B: Rgba8pre = Rgba8pre::new(0, 0, 255, 255);

fn shade<S: Shader>(s: &mut S, x: i64, y: i64, n: usize) -> Vec<Rgba8pre> {
    assert!(s.bind_context(&Transform::new()));
    let mut row = vec![Rgba8pre::transparent(); n];
    s.shade_span(x, y, &mut row);
    row
}

fn gradient(tile: TileMode) -> LinearGradient {
    LinearGradient::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0),
                        &[Rgba::black(), Rgba::white()], tile)
}

fn strip(tile: TileMode) -> BitmapShader {
    let bitmap = RenderingBuffer::from_pixels(vec![A, B], 2, 1).unwrap();
    BitmapShader::new(bitmap, Transform::new(), tile)
}

#[test]
fn t07_gradient_tiling() {
    let clamp = shade(&mut gradient(TileMode::Clamp), 0, 0, 8);
    assert_eq!(clamp[4], Rgba8pre::white());
    assert_eq!(clamp[7], Rgba8pre::white());
    assert_eq!(clamp[0], Rgba8pre::new(32, 32, 32, 255));

    let repeat = shade(&mut gradient(TileMode::Repeat), 0, 0, 8);
    assert_eq!(repeat[0], repeat[4]);
    assert_eq!(repeat[3], repeat[7]);

    let mirror = shade(&mut gradient(TileMode::Mirror), 0, 0, 8);
    assert_eq!(mirror[3], mirror[4]);
    assert_eq!(mirror[0], mirror[7]);
}

#[test]
fn t07_gradient_multiple_stops() {
    let mut g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(0.0, 8.0),
                                    &[Rgba::new(1.0, 0.0, 0.0, 1.0),
                                      Rgba::new(0.0, 1.0, 0.0, 1.0),
                                      Rgba::new(0.0, 0.0, 1.0, 1.0)],
                                    TileMode::Clamp);
    assert!(g.is_opaque());
    assert_eq!(g.color_at(0.5), Rgba::new(0.0, 1.0, 0.0, 1.0));
    // vertical gradient, constant along a row
    let row = shade(&mut g, 0, 3, 5);
    assert!(row.iter().all(|&p| p == row[0]));
    assert!(row[0].g > row[0].r);
}

#[test]
fn t07_gradient_opacity_and_binding() {
    let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0),
                                &[Rgba::black(), Rgba::new(1.0, 1.0, 1.0, 0.5)], TileMode::Clamp);
    assert!(!g.is_opaque());
    let mut flat = LinearGradient::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0),
                                       &[Rgba::black(), Rgba::white()], TileMode::Clamp);
    assert!(!flat.bind_context(&Transform::new()));
    let mut g = gradient(TileMode::Clamp);
    assert!(!g.bind_context(&Transform::new_scale(0.0, 1.0)));
}

#[test]
fn t07_tri_color() {
    let p = [Point::new(0.5, 0.5), Point::new(10.5, 0.5), Point::new(0.5, 10.5)];
    let c = [Rgba::new(1.0, 0.0, 0.0, 1.0), Rgba::new(0.0, 1.0, 0.0, 1.0), Rgba::new(0.0, 0.0, 1.0, 1.0)];
    let mut s = TriColorShader::new(p, c);
    assert!(s.is_opaque());
    let row = shade(&mut s, 0, 0, 11);
    assert_eq!(row[0], Rgba8pre::new(255, 0, 0, 255));
    assert_eq!(row[10], Rgba8pre::new(0, 255, 0, 255));
    assert_eq!(row[2], Rgba8pre::new(204, 51, 0, 255));
    let col = shade(&mut s, 0, 10, 1);
    assert_eq!(col[0], Rgba8pre::new(0, 0, 255, 255));

    let half = [c[0], c[1], Rgba::new(0.0, 0.0, 1.0, 0.5)];
    assert!(!TriColorShader::new(p, half).is_opaque());
}

#[test]
fn t07_bitmap_tiling() {
    assert_eq!(shade(&mut strip(TileMode::Repeat), 0, 0, 4), vec![A, B, A, B]);
    assert_eq!(shade(&mut strip(TileMode::Clamp), -2, 0, 6), vec![A, A, A, B, B, B]);
    assert_eq!(shade(&mut strip(TileMode::Mirror), 0, 0, 6), vec![A, B, B, A, A, B]);
    // rows outside the bitmap clamp or wrap too
    assert_eq!(shade(&mut strip(TileMode::Clamp), 0, 5, 2), vec![A, B]);
    assert!(strip(TileMode::Repeat).is_opaque());
}

#[test]
fn t07_bitmap_local_transform() {
    let bitmap = RenderingBuffer::from_pixels(vec![A, B], 2, 1).unwrap();
    let mut s = BitmapShader::new(bitmap, Transform::new_scale(2.0, 2.0), TileMode::Clamp);
    assert_eq!(shade(&mut s, 0, 0, 4), vec![A, A, B, B]);
}

#[test]
fn t07_proxy() {
    let mut plain = gradient(TileMode::Clamp);
    let base = shade(&mut plain, 0, 0, 8);
    let mut proxy = ProxyShader::new(gradient(TileMode::Clamp), Transform::new_translate(2.0, 0.0));
    let moved = shade(&mut proxy, 0, 0, 8);
    assert_eq!(moved[2 .. 8], base[0 .. 6]);
    assert_eq!(moved[0], Rgba8pre::black());

    // the proxy can borrow a shader
    let mut inner = strip(TileMode::Repeat);
    let mut proxy = ProxyShader::new(&mut inner, Transform::new_translate(1.0, 0.0));
    assert_eq!(shade(&mut proxy, 0, 0, 2), vec![B, A]);
}

#[test]
fn t07_compose() {
    let gray = SolidShader::new(Rgba::new(0.5, 0.5, 0.5, 1.0));
    let mut s = ComposeShader::new(strip(TileMode::Repeat), gray);
    assert!(s.is_opaque());
    assert_eq!(shade(&mut s, 0, 0, 2), vec![Rgba8pre::new(128, 0, 0, 255), Rgba8pre::new(0, 0, 128, 255)]);

    let half = SolidShader::new(Rgba::new(1.0, 1.0, 1.0, 0.5));
    let s = ComposeShader::new(strip(TileMode::Repeat), half);
    assert!(!s.is_opaque());
}

#[test]
fn t07_color_matrix() {
    // swap red and blue
    let mut m = ColorMatrix::identity();
    m.0[0] = 0.0;
    m.0[10] = 0.0;
    m.0[2] = 1.0;
    m.0[8] = 1.0;
    let mut s = ColorMatrixShader::new(m, strip(TileMode::Repeat));
    assert!(s.is_opaque());
    assert_eq!(shade(&mut s, 0, 0, 2), vec![B, A]);

    let mut fade = ColorMatrix::identity();
    fade.0[15] = 0.5;
    assert!(!fade.preserves_alpha());
    let mut s = ColorMatrixShader::new(fade, SolidShader::new(Rgba::white()));
    assert!(!s.is_opaque());
    assert_eq!(shade(&mut s, 0, 0, 1), vec![Rgba8pre::new(128, 128, 128, 128)]);

    let mut over = ColorMatrix::identity();
    over.0[16] = 2.0;
    assert_eq!(over.apply(&Rgba::black()), Rgba::new(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn t07_boxed_shaders() {
    let mut s: Box<dyn Shader> = Box::new(strip(TileMode::Repeat));
    assert_eq!(shade(&mut s, 1, 0, 1), vec![B]);
}
