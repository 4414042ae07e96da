use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trirast::{rasterize, rasterize_all, Point2D, Triangle};

fn tri(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Triangle {
    Triangle::new(a.into(), b.into(), c.into())
}

fn random_point(rng: &mut StdRng, span: i32) -> Point2D {
    Point2D::new(rng.gen_range(-span..=span), rng.gen_range(-span..=span))
}

fn random_triangles(seed: u64, n: usize, span: i32) -> Vec<Triangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let a = random_point(&mut rng, span);
            let b = random_point(&mut rng, span);
            let c = random_point(&mut rng, span);
            Triangle::new(a, b, c)
        })
        .collect()
}

fn as_set(points: &[Point2D]) -> HashSet<Point2D> {
    points.iter().copied().collect()
}

#[test]
fn right_isosceles_regression() {
    let points = rasterize(Point2D::new(0, 0), Point2D::new(4, 0), Point2D::new(0, 4));
    // the x axis is dropped by the strict half-plane, the hypotenuse and the
    // y axis are kept
    let expected: HashSet<Point2D> = (0..=4)
        .flat_map(|x| (1..=4 - x).map(move |y| Point2D::new(x, y)))
        .collect();
    assert_eq!(expected.len(), 10);
    assert_eq!(as_set(&points), expected);
    assert_eq!(points.len(), 10);
}

#[test]
fn points_satisfy_both_bounds() {
    for t in random_triangles(1, 300, 25) {
        if t.a == t.b && t.b == t.c {
            continue;
        }
        let plan = t.plan();
        for p in t.rasterize() {
            assert!(plan.bounds[0].contains(p), "{p} outside first bound of {t:?}");
            assert!(plan.bounds[1].contains(p), "{p} outside second bound of {t:?}");
        }
    }
}

#[test]
fn points_stay_in_bounding_box() {
    for t in random_triangles(2, 300, 25) {
        let xs = [t.a.x, t.b.x, t.c.x];
        let ys = [t.a.y, t.b.y, t.c.y];
        let (min_x, max_x) = (*xs.iter().min().unwrap(), *xs.iter().max().unwrap());
        let (min_y, max_y) = (*ys.iter().min().unwrap(), *ys.iter().max().unwrap());
        for p in t.rasterize() {
            assert!(
                (min_x..=max_x).contains(&p.x) && (min_y..=max_y).contains(&p.y),
                "{p} escaped {t:?}"
            );
        }
    }
}

#[test]
fn each_row_is_one_contiguous_run() {
    for t in random_triangles(3, 300, 25) {
        if t.a == t.b && t.b == t.c {
            continue;
        }
        let plan = t.plan();
        let primary = plan.orientation;
        let secondary = primary.other();
        let step = plan.parity.step();
        let points = t.rasterize();

        assert_eq!(as_set(&points).len(), points.len(), "duplicates in {t:?}");

        let mut finished: HashSet<i32> = HashSet::new();
        let mut current: Option<Point2D> = None;
        for p in points {
            match current {
                Some(prev) if prev.get(primary) == p.get(primary) => {
                    assert_eq!(p.get(secondary) - prev.get(secondary), step, "gap in {t:?}");
                }
                _ => {
                    if let Some(prev) = current {
                        finished.insert(prev.get(primary));
                    }
                    assert!(!finished.contains(&p.get(primary)), "row revisited in {t:?}");
                }
            }
            current = Some(p);
        }
    }
}

#[test]
fn vertex_order_does_not_change_the_set() {
    // unique longest edge, traced without rounding ties
    let triangles = [
        tri((0, 0), (4, 0), (0, 4)),
        tri((0, 0), (7, 2), (3, 5)),
        tri((1, 1), (2, 10), (6, 4)),
        tri((-3, 2), (8, -1), (2, 6)),
        tri((0, 0), (9, 0), (4, 3)),
    ];
    for t in triangles {
        let reference = as_set(&t.rasterize());
        assert!(!reference.is_empty());
        let [a, b, c] = t.vertices();
        for (p, q, r) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            assert_eq!(as_set(&rasterize(p, q, r)), reference, "{p} {q} {r}");
        }
    }
}

#[test]
fn count_tracks_area() {
    for k in [2, 4, 8, 16, 32, 64] {
        let t = tri((0, 0), (4 * k, k), (2 * k, 3 * k));
        let area = t.doubled_area().abs() as f64 / 2.0;
        let count = t.rasterize().len() as f64;
        let columns = (4 * k + 1) as f64;
        assert!((count - area).abs() <= 2.0 * columns, "k={k}: {count} vs {area}");

        if k == 64 {
            let relative = (count - area).abs() / area;
            assert!(relative < 0.05, "k={k}: relative error {relative}");
        }
    }
}

#[test]
fn repeated_vertex_stays_on_its_segment() {
    let triangles = [
        tri((0, 0), (0, 0), (4, 0)),
        tri((4, 0), (0, 0), (0, 0)),
        tri((0, 0), (4, 0), (0, 0)),
    ];
    for t in triangles {
        for p in t.rasterize() {
            assert_eq!(p.y, 0);
            assert!((0..=4).contains(&p.x));
        }
    }
}

#[test]
fn collinear_vertices_do_not_fail() {
    let points = rasterize(Point2D::new(0, 0), Point2D::new(2, 1), Point2D::new(4, 2));
    assert!(points.len() <= 5);
    assert!(rasterize(Point2D::new(0, 0), Point2D::new(0, 5), Point2D::new(0, 2)).is_empty());
}

#[test]
fn apex_on_the_lattice_limit() {
    let top = i32::MAX;
    let t = tri((0, top - 2), (8, top - 2), (4, top));
    let points = t.rasterize();
    assert!(points.contains(&Point2D::new(4, top)));
    assert!(points.iter().all(|p| p.y >= top - 2));

    let bottom = i32::MIN;
    let t = tri((bottom, 0), (bottom, 8), (bottom + 2, 4));
    let points = t.rasterize();
    assert!(points.contains(&Point2D::new(bottom, 4)));
    assert!(points.contains(&Point2D::new(bottom + 2, 4)));
}

#[test]
fn single_point_triangle() {
    let p = Point2D::new(-7, 11);
    assert_eq!(rasterize(p, p, p), vec![p]);
}

#[test]
fn parallel_matches_sequential() {
    let triangles = random_triangles(4, 200, 40);
    let parallel = rasterize_all(&triangles);
    let sequential: Vec<Vec<Point2D>> = triangles.iter().map(|t| t.rasterize()).collect();
    assert_eq!(parallel, sequential);
}
