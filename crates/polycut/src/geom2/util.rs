//! Geometry primitives: products, distances and the tolerant comparator.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// 2D cross product `u × v`; positive when `v` turns counterclockwise from `u`.
#[inline]
pub fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

#[inline]
pub fn dot(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.x + u.y * v.y
}

/// Euclidean distance. Only for ordering, never for equality.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Compare with absolute tolerance: `|a - b| <= eps` is `Equal`.
#[inline]
pub fn approx_cmp(a: f64, b: f64, eps: f64) -> Ordering {
    if (a - b).abs() <= eps {
        Ordering::Equal
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Sign of `x` in {-1, 0, +1} under `approx_cmp(x, 0, eps)`.
#[inline]
pub fn sign_eps(x: f64, eps: f64) -> i8 {
    match approx_cmp(x, 0.0, eps) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Coordinate-wise equality within `eps`.
#[inline]
pub fn approx_eq_point(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    approx_cmp(a.x, b.x, eps) == Ordering::Equal && approx_cmp(a.y, b.y, eps) == Ordering::Equal
}

/// `(b - a) × (c - a)`.
#[inline]
pub(crate) fn cross3(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    cross(b - a, c - a)
}

/// Shoelace signed area of an implicitly closed loop (CCW positive).
pub fn signed_area(verts: &[Vector2<f64>]) -> f64 {
    let n = verts.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..n {
        let p = verts[i];
        let q = verts[(i + 1) % n];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Area centroid of a non-degenerate loop, or `None` if the area vanishes.
pub fn area_centroid(verts: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if verts.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let cr = p.x * q.y - q.x * p.y;
        a += cr;
        cx += (p.x + q.x) * cr;
        cy += (p.y + q.y) * cr;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn products_and_distance() {
        let u = vector![1.0, 0.0];
        let v = vector![0.0, 2.0];
        assert_eq!(cross(u, v), 2.0);
        assert_eq!(cross(v, u), -2.0);
        assert_eq!(dot(u, v), 0.0);
        assert!((distance(vector![0.0, 0.0], vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn comparator_tolerance_is_inclusive() {
        assert_eq!(approx_cmp(1.0, 1.0 + 1e-7, 1e-6), Ordering::Equal);
        assert_eq!(approx_cmp(0.5, 0.5, 0.0), Ordering::Equal);
        assert_eq!(approx_cmp(1.0, 1.0 + 1e-5, 1e-6), Ordering::Less);
        assert_eq!(approx_cmp(2.0, 1.0, 1e-6), Ordering::Greater);
        assert_eq!(sign_eps(-1e-9, 1e-6), 0);
        assert_eq!(sign_eps(-1e-3, 1e-6), -1);
    }

    #[test]
    fn centroid_of_square() {
        let sq = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        let c = area_centroid(&sq).unwrap();
        assert!((c - vector![1.0, 1.0]).norm() < 1e-12);
        assert!((signed_area(&sq) - 4.0).abs() < 1e-12);
        assert!(area_centroid(&sq[..2]).is_none());
    }
}
