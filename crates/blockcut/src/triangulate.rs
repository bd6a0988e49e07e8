//! 2-D Delaunay triangulation via incremental Bowyer-Watson.

use nalgebra::Vector2;

use crate::tolerance::GEOM_EPS;

#[derive(Clone, Copy, Debug)]
struct Tri {
    a: usize,
    b: usize,
    c: usize,
}

/// Triangulates `points`, returning index triples into `points` in clockwise
/// order as viewed in the input frame. Fewer than 3 points yields an empty
/// result. Callers must have already removed duplicate points.
pub fn triangulate(points: &[Vector2<f64>]) -> Vec<(usize, usize, usize)> {
    if points.len() < 3 {
        return Vec::new();
    }

    let (lo, hi) = bounding_box(points);
    let span = (hi - lo).amax().max(1.0);
    let mid = (lo + hi) * 0.5;
    // Super-triangle comfortably containing every input point.
    let mut work: Vec<Vector2<f64>> = points.to_vec();
    let super_a = work.len();
    work.push(Vector2::new(mid.x - 20.0 * span, mid.y - span));
    let super_b = work.len();
    work.push(Vector2::new(mid.x, mid.y + 20.0 * span));
    let super_c = work.len();
    work.push(Vector2::new(mid.x + 20.0 * span, mid.y - span));

    let mut tris = vec![Tri {
        a: super_a,
        b: super_b,
        c: super_c,
    }];

    for p in 0..points.len() {
        let mut bad = Vec::new();
        for (i, t) in tris.iter().enumerate() {
            if in_circumcircle(&work, t, p) {
                bad.push(i);
            }
        }

        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for &i in &bad {
            let t = tris[i];
            for edge in [(t.a, t.b), (t.b, t.c), (t.c, t.a)] {
                let shared = bad.iter().any(|&j| j != i && tri_has_edge(&tris[j], edge));
                if !shared {
                    boundary.push(edge);
                }
            }
        }

        for &i in bad.iter().rev() {
            tris.swap_remove(i);
        }
        for (u, v) in boundary {
            tris.push(Tri { a: u, b: v, c: p });
        }
    }

    tris.retain(|t| {
        !(involves(t, super_a) || involves(t, super_b) || involves(t, super_c))
    });

    tris.into_iter()
        .map(|t| orient_clockwise(points, t))
        .collect()
}

fn bounding_box(points: &[Vector2<f64>]) -> (Vector2<f64>, Vector2<f64>) {
    let mut lo = points[0];
    let mut hi = points[0];
    for p in &points[1..] {
        lo.x = lo.x.min(p.x);
        lo.y = lo.y.min(p.y);
        hi.x = hi.x.max(p.x);
        hi.y = hi.y.max(p.y);
    }
    (lo, hi)
}

fn involves(t: &Tri, v: usize) -> bool {
    t.a == v || t.b == v || t.c == v
}

fn tri_has_edge(t: &Tri, edge: (usize, usize)) -> bool {
    let edges = [(t.a, t.b), (t.b, t.c), (t.c, t.a)];
    edges
        .iter()
        .any(|&(u, v)| (u, v) == edge || (v, u) == edge)
}

/// True iff `work[p]` lies strictly inside the circumcircle of `t`, via the
/// standard signed in-circle determinant.
fn in_circumcircle(work: &[Vector2<f64>], t: &Tri, p: usize) -> bool {
    let a = work[t.a];
    let b = work[t.b];
    let c = work[t.c];
    let d = work[p];

    // Orient (a,b,c) counter-clockwise so the determinant's sign test is valid.
    let (a, b, c) = if signed_area(a, b, c) < 0.0 {
        (a, c, b)
    } else {
        (a, b, c)
    };

    let ax = a.x - d.x;
    let ay = a.y - d.y;
    let bx = b.x - d.x;
    let by = b.y - d.y;
    let cx = c.x - d.x;
    let cy = c.y - d.y;

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    det > GEOM_EPS
}

fn signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn orient_clockwise(points: &[Vector2<f64>], t: Tri) -> (usize, usize, usize) {
    let area = signed_area(points[t.a], points[t.b], points[t.c]);
    if area > 0.0 {
        (t.a, t.c, t.b)
    } else {
        (t.a, t.b, t.c)
    }
}
