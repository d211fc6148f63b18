
use scanpaint::{Path, Point};
use scanpaint::{chop_cubic_at, chop_quad_at, cubic_segments, eval_cubic, eval_quad};
use scanpaint::{flatten_cubic, flatten_quad, quad_segments, MAX_CURVE_SEGMENTS};

fn close(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn t03_flat_quad_single_segment() {
    let q = [Point::new(0.0, 0.0), Point::new(20.0, 20.0), Point::new(5.0, 5.0)];
    for tol in [1.0, 0.25, 0.001].iter() {
        let mut segs = vec![];
        flatten_quad(&q, *tol, |a, b| segs.push((a, b)));
        assert_eq!(segs, vec![(q[0], q[2])]);
    }
}

#[test]
fn t03_quad_segment_count() {
    let q = [Point::new(0.0, 0.0), Point::new(50.0, 100.0), Point::new(100.0, 0.0)];
    assert_eq!(quad_segments(&q, 0.25), 15);
    // looser tolerance, fewer segments
    assert_eq!(quad_segments(&q, 1.0), 8);
}

#[test]
fn t03_cubic_segment_count() {
    let c = [Point::new(0.0, 0.0), Point::new(0.0, 100.0),
             Point::new(100.0, 100.0), Point::new(100.0, 0.0)];
    assert_eq!(cubic_segments(&c, 0.25), 21);
    let flat = [Point::new(0.0, 0.0), Point::new(1.0, 1.0),
                Point::new(2.0, 2.0), Point::new(3.0, 3.0)];
    assert_eq!(cubic_segments(&flat, 0.25), 1);
}

#[test]
fn t03_segment_count_capped() {
    let q = [Point::new(0.0, 0.0), Point::new(1e16, 1e16), Point::new(2e16, 0.0)];
    assert_eq!(quad_segments(&q, 0.25), MAX_CURVE_SEGMENTS);
    let c = [Point::new(0.0, 0.0), Point::new(0.0, 1e16),
             Point::new(1e16, 1e16), Point::new(1e16, 0.0)];
    assert_eq!(cubic_segments(&c, 0.25), MAX_CURVE_SEGMENTS);
    let mut n = 0;
    flatten_quad(&q, 0.25, |_, _| n += 1);
    assert_eq!(n, MAX_CURVE_SEGMENTS);
}

#[test]
fn t03_flattened_points_on_curve() {
    let q = [Point::new(0.0, 0.0), Point::new(50.0, 100.0), Point::new(100.0, 0.0)];
    let mut segs = vec![];
    flatten_quad(&q, 0.25, |a, b| segs.push((a, b)));
    let n = segs.len();
    assert_eq!(n, 15);
    assert_eq!(segs[0].0, q[0]);
    assert_eq!(segs[n - 1].1, q[2]);
    for i in 1 .. n {
        assert_eq!(segs[i - 1].1, segs[i].0);
        assert!(close(segs[i].0, eval_quad(&q, i as f64 / n as f64)));
    }

    let c = [Point::new(0.0, 0.0), Point::new(0.0, 100.0),
             Point::new(100.0, 100.0), Point::new(100.0, 0.0)];
    let mut pts = vec![];
    flatten_cubic(&c, 0.25, |a, _| pts.push(a));
    assert_eq!(pts.len(), 21);
    // chord midpoints stay near the curve
    for (i, w) in pts.windows(2).enumerate() {
        let t = (i as f64 + 0.5) / 21.0;
        let mid = (w[0] + w[1]) * 0.5;
        assert!((mid - eval_cubic(&c, t)).length() < 0.25 + 1e-9);
    }
}

#[test]
fn t03_chop() {
    let q = [Point::new(0.0, 0.0), Point::new(4.0, 8.0), Point::new(8.0, 0.0)];
    let d = chop_quad_at(&q, 0.5);
    assert!(close(d[2], eval_quad(&q, 0.5)));
    assert_eq!(d[0], q[0]);
    assert_eq!(d[4], q[2]);

    let c = [Point::new(0.0, 0.0), Point::new(0.0, 9.0),
             Point::new(9.0, 9.0), Point::new(9.0, 0.0)];
    let d = chop_cubic_at(&c, 0.25);
    assert!(close(d[3], eval_cubic(&c, 0.25)));
    let right = [d[3], d[4], d[5], d[6]];
    assert!(close(eval_cubic(&right, 0.5), eval_cubic(&c, 0.625)));
}

#[test]
fn t03_cubic_bounds() {
    let mut p = Path::new();
    p.move_to(0.0, 0.0);
    p.cubic_to(Point::new(0.0, 100.0), Point::new(100.0, 100.0), Point::new(100.0, 0.0));
    let r = p.bounds().unwrap();
    assert_eq!((r.x1, r.y1, r.x2), (0.0, 0.0, 100.0));
    assert!((r.y2 - 75.0).abs() < 1e-9);
}
