
use scanpaint::ppm;
use scanpaint::{Canvas, Paint, Point, RenderingBuffer, Rgba, Rgba8pre};

fn scene() -> RenderingBuffer {
    let mut buf = RenderingBuffer::new(32, 24);
    let mut canvas = Canvas::new(&mut buf);
    canvas.clear(Rgba::white());
    let pts = [Point::new(4.0, 2.0), Point::new(28.0, 6.0), Point::new(12.0, 22.0)];
    canvas.draw_convex_polygon(&pts, &mut Paint::new(Rgba::new(0.2, 0.4, 0.8, 1.0)));
    buf
}

#[test]
fn t08_ppm_round_trip() {
    let buf = scene();
    let file = std::env::temp_dir().join("scanpaint_t08_scene.ppm");
    ppm::write_file(&buf, &file).unwrap();
    let back = ppm::read_file(&file).unwrap();
    assert_eq!(back, buf);
    assert!(ppm::img_diff(&file, &file).unwrap());
}

#[test]
fn t08_png_keeps_alpha() {
    let mut buf = RenderingBuffer::new(4, 1);
    buf[(1, 0)] = Rgba8pre::new(255, 0, 0, 255);
    buf[(2, 0)] = Rgba8pre::new(0, 128, 0, 128);
    let file = std::env::temp_dir().join("scanpaint_t08_alpha.png");
    ppm::write_file(&buf, &file).unwrap();
    let back = ppm::read_file(&file).unwrap();
    assert_eq!(back, buf);
}

#[test]
fn t08_img_diff_detects_changes() {
    let a = scene();
    let mut b = scene();
    b[(0, 0)] = Rgba8pre::black();
    let fa = std::env::temp_dir().join("scanpaint_t08_a.ppm");
    let fb = std::env::temp_dir().join("scanpaint_t08_b.ppm");
    ppm::write_file(&a, &fa).unwrap();
    ppm::write_file(&b, &fb).unwrap();
    assert!(!ppm::img_diff(&fa, &fb).unwrap());

    let fc = std::env::temp_dir().join("scanpaint_t08_c.ppm");
    ppm::write_file(&RenderingBuffer::new(2, 2), &fc).unwrap();
    assert!(!ppm::img_diff(&fa, &fc).unwrap());
}

#[test]
fn t08_read_missing_file() {
    let r = ppm::read_file(std::env::temp_dir().join("scanpaint_t08_missing.ppm"));
    assert!(r.is_err());
}
