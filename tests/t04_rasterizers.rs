
use scanpaint::{EdgeList, FillingRule, Path, PathOrientation, Point, Rectangle};
use scanpaint::{RasterizerConvex, RasterizerRect, RasterizerScanline};
use scanpaint::{Rasterize, Render, Scanline};

/// Collects (y, x, len) of every span
#[derive(Default)]
struct Spans(Vec<(i64, i64, i64)>);

impl Render for Spans {
    fn render(&mut self, sl: &Scanline) {
        for s in &sl.spans {
            self.0.push((sl.y, s.x, s.len));
        }
    }
}

fn sweep<R: Rasterize>(ras: &mut R) -> Vec<(i64, i64, i64)> {
    let mut sl = Scanline::new();
    let mut out = Spans::default();
    scanpaint::render_scanlines(ras, &mut sl, &mut out);
    out.0
}

fn star(c: Point, r: f64) -> Vec<Point> {
    (0 .. 5).map(|k| {
        let a = (-90.0 + 144.0 * k as f64).to_radians();
        Point::new(c.x + r * a.cos(), c.y + r * a.sin())
    }).collect()
}

fn covered(spans: &[(i64, i64, i64)], x: i64, y: i64) -> bool {
    spans.iter().any(|&(sy, sx, len)| sy == y && sx <= x && x < sx + len)
}

#[test]
fn t04_rect() {
    let spans = sweep(&mut RasterizerRect::new(1, 2, 4, 4));
    assert_eq!(spans, vec![(2, 1, 3), (3, 1, 3)]);
    assert!(!RasterizerRect::new(3, 0, 3, 5).rewind_scanlines());
}

#[test]
fn t04_convex_square() {
    let mut edges = EdgeList::new(10, 10);
    edges.add_polygon(&Rectangle::new(2.0, 2.0, 6.0, 6.0).corners());
    let spans = sweep(&mut RasterizerConvex::new(edges));
    assert_eq!(spans, vec![(2, 2, 4), (3, 2, 4), (4, 2, 4), (5, 2, 4)]);
}

#[test]
fn t04_convex_triangle() {
    let mut edges = EdgeList::new(10, 10);
    edges.add_polygon(&[Point::new(0.0, 0.0), Point::new(8.0, 8.0), Point::new(0.0, 8.0)]);
    let spans = sweep(&mut RasterizerConvex::new(edges));
    let want: Vec<_> = (0 .. 8).map(|y| (y, 0, y + 1)).collect();
    assert_eq!(spans, want);
}

#[test]
fn t04_convex_matches_general() {
    let pts = [Point::new(3.2, 1.7), Point::new(17.9, 6.1),
               Point::new(12.4, 18.3), Point::new(1.1, 11.6)];
    let mut a = EdgeList::new(20, 20);
    a.add_polygon(&pts);
    let b = a.clone();
    let convex = sweep(&mut RasterizerConvex::new(a));
    let general = sweep(&mut RasterizerScanline::new(b, FillingRule::NonZero));
    assert!(!convex.is_empty());
    assert_eq!(convex, general);
}

#[test]
fn t04_star_filling_rules() {
    let pts = star(Point::new(50.0, 50.0), 40.0);
    let mut edges = EdgeList::new(100, 100);
    edges.add_polygon(&pts);

    let nonzero = sweep(&mut RasterizerScanline::new(edges.clone(), FillingRule::NonZero));
    let evenodd = sweep(&mut RasterizerScanline::new(edges, FillingRule::EvenOdd));

    // center winds twice
    assert!(covered(&nonzero, 50, 50));
    assert!(!covered(&evenodd, 50, 50));
    // a tip winds once
    assert!(covered(&nonzero, 50, 20));
    assert!(covered(&evenodd, 50, 20));
    // outside
    assert!(!covered(&nonzero, 5, 5));
    assert!(!covered(&evenodd, 5, 5));
}

#[test]
fn t04_spans_sorted_and_disjoint() {
    let mut path = Path::new();
    path.add_circle(Point::new(20.0, 20.0), 15.0, PathOrientation::Clockwise);
    path.add_circle(Point::new(20.0, 20.0), 7.0, PathOrientation::CounterClockwise);
    let mut edges = EdgeList::new(40, 40);
    edges.add_path(&path);
    let spans = sweep(&mut RasterizerScanline::new(edges, FillingRule::NonZero));

    // the hole is open
    assert!(!covered(&spans, 20, 20));
    assert!(covered(&spans, 20, 10));
    for w in spans.windows(2) {
        let ((y0, x0, l0), (y1, x1, _)) = (w[0], w[1]);
        assert!(y0 < y1 || (y0 == y1 && x0 + l0 < x1));
    }
}

#[test]
fn t04_empty_outlines() {
    let edges = EdgeList::new(10, 10);
    assert!(!RasterizerConvex::new(edges.clone()).rewind_scanlines());
    assert!(!RasterizerScanline::new(edges, FillingRule::EvenOdd).rewind_scanlines());
}
