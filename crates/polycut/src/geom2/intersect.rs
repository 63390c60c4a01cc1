//! Segment/segment classification.
//!
//! Sides are the four cross products `s1 = (p2-p1)×(q1-p1)`,
//! `s2 = (p2-p1)×(q2-p1)`, `s3 = (q2-q1)×(p1-q1)`, `s4 = (q2-q1)×(p2-q1)`,
//! each reduced to a sign with `approx_cmp`. A proper crossing needs both
//! pairs to straddle; otherwise the incidence cases are tried in a fixed
//! order and the first match wins.

use std::cmp::Ordering;

use super::types::{CutCfg, Point2};
use super::util::{approx_cmp, cross3, dot, sign_eps};
use crate::error::GeometryError;

/// Relation between two closed segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    None,
    /// Each segment strictly separates the other's endpoints.
    Proper(Point2),
    /// An endpoint of one segment lies on the other (shared point returned).
    Incident(Point2),
}

impl SegmentIntersection {
    #[inline]
    pub fn point(&self) -> Option<Point2> {
        match *self {
            SegmentIntersection::None => None,
            SegmentIntersection::Proper(p) | SegmentIntersection::Incident(p) => Some(p),
        }
    }
}

/// Where `a` sits relative to the extent of segment `p1p2`, assuming it is on the line.
///
/// Compares `(p1 - a)·(p2 - a)` with zero: `Less` strictly inside, `Equal`
/// at an endpoint, `Greater` outside.
#[inline]
pub fn point_on_segment(a: Point2, p1: Point2, p2: Point2, eps: f64) -> Ordering {
    approx_cmp(dot(p1 - a, p2 - a), 0.0, eps)
}

/// Classify segment `p1p2` against segment `q1q2`.
///
/// Incidence order (tie-break): `q1` on `p1p2`, `q2` on `p1p2`, `p1` on
/// `q1q2`, `p2` on `q1q2`.
///
/// Errors
/// - `NumericalDegeneracy` if the straddle test passed but `s2 - s1`
///   vanishes, or the interpolated point is not finite.
pub fn classify_segments(
    p1: Point2,
    p2: Point2,
    q1: Point2,
    q2: Point2,
    cfg: CutCfg,
) -> Result<SegmentIntersection, GeometryError> {
    let eps = cfg.eps;
    let s1 = cross3(p1, p2, q1);
    let s2 = cross3(p1, p2, q2);
    let s3 = cross3(q1, q2, p1);
    let s4 = cross3(q1, q2, p2);
    let (d1, d2, d3, d4) = (
        sign_eps(s1, eps),
        sign_eps(s2, eps),
        sign_eps(s3, eps),
        sign_eps(s4, eps),
    );

    if d1 * d2 == -1 && d3 * d4 == -1 {
        // s1, s2 are the signed distances (scaled) of q1, q2 to line p1p2.
        let denom = s2 - s1;
        if approx_cmp(denom, 0.0, eps) == Ordering::Equal {
            return Err(GeometryError::NumericalDegeneracy {
                context: "segment crossing",
            });
        }
        let p = (q1 * s2 - q2 * s1) / denom;
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(GeometryError::NumericalDegeneracy {
                context: "segment crossing",
            });
        }
        return Ok(SegmentIntersection::Proper(p));
    }

    let within =
        |a: Point2, b1: Point2, b2: Point2| point_on_segment(a, b1, b2, eps) != Ordering::Greater;
    if d1 == 0 && within(q1, p1, p2) {
        return Ok(SegmentIntersection::Incident(q1));
    }
    if d2 == 0 && within(q2, p1, p2) {
        return Ok(SegmentIntersection::Incident(q2));
    }
    if d3 == 0 && within(p1, q1, q2) {
        return Ok(SegmentIntersection::Incident(p1));
    }
    if d4 == 0 && within(p2, q1, q2) {
        return Ok(SegmentIntersection::Incident(p2));
    }
    Ok(SegmentIntersection::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn classify(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> SegmentIntersection {
        classify_segments(p1, p2, q1, q2, CutCfg::default()).unwrap()
    }

    #[test]
    fn proper_crossing_point() {
        let r = classify(
            vector![5.0, -5.0],
            vector![5.0, 15.0],
            vector![0.0, 10.0],
            vector![10.0, 10.0],
        );
        match r {
            SegmentIntersection::Proper(p) => assert!((p - vector![5.0, 10.0]).norm() < 1e-12),
            other => panic!("expected proper crossing, got {other:?}"),
        }
        // Oblique edge: crossing lands on the edge, not on the cut extension.
        let r = classify(
            vector![0.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 3.0],
            vector![3.0, 0.0],
        );
        assert_eq!(r.point().map(|p| (p - vector![1.5, 1.5]).norm() < 1e-12), Some(true));
    }

    #[test]
    fn disjoint_and_parallel() {
        let r = classify(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
        );
        assert_eq!(r, SegmentIntersection::None);
        // Collinear but not overlapping.
        let r = classify(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![3.0, 0.0],
        );
        assert_eq!(r, SegmentIntersection::None);
    }

    #[test]
    fn incidence_order() {
        // q1 lies on the cut: reported first even though q2 is off-line.
        let r = classify(
            vector![-1.0, -2.0],
            vector![6.0, 12.0],
            vector![0.0, 0.0],
            vector![0.0, 10.0],
        );
        assert_eq!(r, SegmentIntersection::Incident(vector![0.0, 0.0]));
        // Only q2 on the cut.
        let r = classify(
            vector![-1.0, -2.0],
            vector![6.0, 12.0],
            vector![10.0, 0.0],
            vector![0.0, 0.0],
        );
        assert_eq!(r, SegmentIntersection::Incident(vector![0.0, 0.0]));
        // Cut starts on the edge interior: p1 incidence.
        let r = classify(
            vector![5.0, 0.0],
            vector![5.0, 5.0],
            vector![0.0, 0.0],
            vector![10.0, 0.0],
        );
        assert_eq!(r, SegmentIntersection::Incident(vector![5.0, 0.0]));
        // Shared endpoints: q1 == p2 wins over p2 on q1q2.
        let r = classify(
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![1.0, 1.0],
            vector![2.0, 0.0],
        );
        assert_eq!(r, SegmentIntersection::Incident(vector![1.0, 1.0]));
    }

    #[test]
    fn extent_test() {
        let a = vector![0.0, 0.0];
        let b = vector![2.0, 0.0];
        assert_eq!(point_on_segment(vector![1.0, 0.0], a, b, 1e-6), Ordering::Less);
        assert_eq!(point_on_segment(a, a, b, 1e-6), Ordering::Equal);
        assert_eq!(point_on_segment(vector![3.0, 0.0], a, b, 1e-6), Ordering::Greater);
    }
}
