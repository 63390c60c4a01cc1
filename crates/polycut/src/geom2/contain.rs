//! Point-in-polygon classification by rightward ray casting.
//!
//! Vertices are checked first (`OnVertex`). Then each edge is tested against
//! the horizontal ray `{ (x, point.y) : x >= point.x }`; any `OnSegment`
//! short-circuits to `OnEdge`, otherwise the parity of `Hit`s decides.
//!
//! Hits use the half-open y-range `[min_y, max_y)` of each edge, so a vertex
//! on the ray is counted once per boundary pass. Horizontal edges are only
//! checked for `OnSegment`; the interpolation denominator `pb.y - pa.y`
//! vanishes for them.

use std::cmp::Ordering;

use super::types::{CutCfg, Point2, Polygon};
use super::util::{approx_cmp, approx_eq_point};
use crate::error::GeometryError;

/// Classification of a point against a simple polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Outside,
    Inside,
    OnEdge,
    OnVertex,
}

impl Containment {
    /// Inside, on an edge or on a vertex.
    #[inline]
    pub fn is_closed_inside(self) -> bool {
        self != Containment::Outside
    }
}

/// Relation between a rightward ray from a point and one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayHit {
    NoHit,
    /// The ray crosses the edge strictly to the right of the point.
    Hit,
    /// The point lies on the edge.
    OnSegment,
}

/// Test the rightward ray from `point` against edge `pa -> pb`.
///
/// `OnSegment` uses the closed edge. `Hit` uses the half-open y-range
/// `[min_y, max_y)`, so a ray through a shared vertex counts it once.
/// Horizontal edges are never a `Hit` and are never divided by.
///
/// Errors
/// - `NumericalDegeneracy` if the interpolated crossing is not finite.
pub fn ray_edge_relation(
    point: Point2,
    pa: Point2,
    pb: Point2,
    cfg: CutCfg,
) -> Result<RayHit, GeometryError> {
    let eps = cfg.eps;
    let min_x = pa.x.min(pb.x);
    let max_x = pa.x.max(pb.x);
    let min_y = pa.y.min(pb.y);
    let max_y = pa.y.max(pb.y);
    if approx_cmp(pa.y, pb.y, eps) == Ordering::Equal {
        let on_line = approx_cmp(point.y, pa.y, eps) == Ordering::Equal;
        let within = approx_cmp(point.x, min_x, eps) != Ordering::Less
            && approx_cmp(point.x, max_x, eps) != Ordering::Greater;
        return Ok(if on_line && within {
            RayHit::OnSegment
        } else {
            RayHit::NoHit
        });
    }
    if point.y < min_y || point.y > max_y || point.x > max_x {
        return Ok(RayHit::NoHit);
    }
    let x0 = pa.x + (pb.x - pa.x) / (pb.y - pa.y) * (point.y - pa.y);
    if !x0.is_finite() {
        return Err(GeometryError::NumericalDegeneracy {
            context: "ray crossing",
        });
    }
    Ok(match approx_cmp(x0, point.x, eps) {
        Ordering::Equal => RayHit::OnSegment,
        Ordering::Greater if point.y < max_y => RayHit::Hit,
        Ordering::Greater | Ordering::Less => RayHit::NoHit,
    })
}

/// Classify `point` against `polygon` with the default tolerance.
#[inline]
pub fn classify_point(point: Point2, polygon: &Polygon) -> Result<Containment, GeometryError> {
    classify_point_with(point, polygon, CutCfg::default())
}

/// Classify `point` against `polygon`.
///
/// Parity counting assumes a simple polygon. A ray through a vertex counts
/// once when the boundary passes through that height, and zero or two times
/// at a local top or bottom.
pub fn classify_point_with(
    point: Point2,
    polygon: &Polygon,
    cfg: CutCfg,
) -> Result<Containment, GeometryError> {
    if !(point.x.is_finite() && point.y.is_finite()) {
        return Err(GeometryError::NonFinite);
    }
    if polygon
        .vertices()
        .iter()
        .any(|&v| approx_eq_point(v, point, cfg.eps))
    {
        return Ok(Containment::OnVertex);
    }
    let mut hits = 0usize;
    for (_, pa, pb) in polygon.edges() {
        match ray_edge_relation(point, pa, pb, cfg)? {
            RayHit::OnSegment => return Ok(Containment::OnEdge),
            RayHit::Hit => hits += 1,
            RayHit::NoHit => {}
        }
    }
    Ok(if hits % 2 == 1 {
        Containment::Inside
    } else {
        Containment::Outside
    })
}
