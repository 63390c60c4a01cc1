//! Polygon splitting along a straight cut.
//!
//! Steps
//! 1. Build the augmented sequence: original vertices with proper crossings
//!    spliced in after the start vertex of their edge. A cut through an
//!    existing vertex is recorded at that vertex (no duplicate point).
//! 2. Fewer than two crossings means no cut; the polygon is returned as is.
//! 3. Seed the inside/outside state from the midpoint of the first two
//!    crossings (see `seed_inside` for the >2 crossings heuristic).
//! 4. Order intersections by distance from the cut start for `extremes`.
//! 5. Walk the sequence once from the first crossing, alternating between
//!    the interior arc being traced and the remainder loop.
//! 6. Close or merge the arc left open at the end; the remainder is pushed last.

use super::contain::classify_point_with;
use super::intersect::{classify_segments, SegmentIntersection};
use super::types::{
    CutCfg, CutSegment, IntersectionKind, IntersectionPoint, Point2, Polygon, SplitResult,
};
use super::util::{approx_eq_point, distance};
use crate::error::GeometryError;

/// Polygon vertex cycle with the cut's boundary intersections spliced in.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentedSequence {
    pub points: Vec<Point2>,
    /// Positions in `points` holding an intersection, in traversal order.
    pub crossings: Vec<usize>,
    /// Intersection records, parallel to `crossings`.
    pub intersections: Vec<IntersectionPoint>,
}

/// Step 1: classify each edge against the cut and splice in the crossings.
///
/// An incidence away from the edge's start vertex adds nothing: an edge's end
/// vertex is picked up as the start of the next edge, and a cut endpoint
/// resting on an edge is not a crossing.
pub fn build_augmented(
    polygon: &Polygon,
    cut: &CutSegment,
    cfg: CutCfg,
) -> Result<AugmentedSequence, GeometryError> {
    let mut points = Vec::with_capacity(polygon.len() + 4);
    let mut crossings = Vec::new();
    let mut intersections = Vec::new();
    for (edge, a, b) in polygon.edges() {
        points.push(a);
        match classify_segments(cut.start, cut.end, a, b, cfg)? {
            SegmentIntersection::Proper(p) => {
                crossings.push(points.len());
                points.push(p);
                intersections.push(IntersectionPoint {
                    point: p,
                    edge,
                    kind: IntersectionKind::Proper,
                });
            }
            SegmentIntersection::Incident(p) if approx_eq_point(p, a, cfg.eps) => {
                crossings.push(points.len() - 1);
                intersections.push(IntersectionPoint {
                    point: a,
                    edge,
                    kind: IntersectionKind::Vertex,
                });
            }
            SegmentIntersection::Incident(_) | SegmentIntersection::None => {}
        }
    }
    Ok(AugmentedSequence {
        points,
        crossings,
        intersections,
    })
}

/// Split `polygon` along the segment `start -> end` with the default tolerance.
#[inline]
pub fn split_polygon(
    start: Point2,
    end: Point2,
    polygon: &Polygon,
) -> Result<SplitResult, GeometryError> {
    split_polygon_with(CutSegment::new(start, end), polygon, CutCfg::default())
}

/// Split `polygon` along `cut`.
///
/// Errors
/// - `InvalidPolygon` for fewer than 3 vertices.
/// - `DegenerateCut` / `NonFinite` for a zero-length or non-finite cut.
/// - `NumericalDegeneracy` from the classifiers.
///
/// The polygon must be simple; self-intersecting input gives unspecified pieces.
pub fn split_polygon_with(
    cut: CutSegment,
    polygon: &Polygon,
    cfg: CutCfg,
) -> Result<SplitResult, GeometryError> {
    if polygon.len() < 3 {
        return Err(GeometryError::InvalidPolygon {
            vertices: polygon.len(),
        });
    }
    cut.validate(cfg)?;

    let aug = build_augmented(polygon, &cut, cfg)?;
    if aug.crossings.len() < 2 {
        return Ok(SplitResult::uncut(polygon, aug.intersections));
    }

    let first_inside = seed_inside(&aug, polygon, cfg)?;

    let mut by_distance = aug.intersections.clone();
    by_distance.sort_by(|a, b| {
        distance(cut.start, a.point).total_cmp(&distance(cut.start, b.point))
    });
    let extremes = match (by_distance.first(), by_distance.last()) {
        (Some(&near), Some(&far)) => Some((near, far)),
        _ => None,
    };

    let pieces = walk(&aug, first_inside);
    Ok(SplitResult {
        pieces,
        intersections: aug.intersections,
        extremes,
    })
}

/// Split each polygon with the same cut; one result per input, in order.
pub fn cut_polygons(
    cut: CutSegment,
    polygons: &[Polygon],
    cfg: CutCfg,
) -> Vec<Result<SplitResult, GeometryError>> {
    polygons
        .iter()
        .map(|poly| split_polygon_with(cut, poly, cfg))
        .collect()
}

/// Step 3: is the arc starting at the first crossing interior?
///
/// The midpoint of the first two crossings is classified against the
/// original polygon (edge/vertex counts as inside). With more than two
/// crossings, if the first pair is farther apart than the first and the last
/// crossing, the midpoint of the latter pair is used with the sense inverted.
/// This heuristic is not proven for every concave input.
fn seed_inside(
    aug: &AugmentedSequence,
    polygon: &Polygon,
    cfg: CutCfg,
) -> Result<bool, GeometryError> {
    let cps = &aug.crossings;
    let cp0 = aug.points[cps[0]];
    let cp1 = aug.points[cps[1]];
    let mut inside = classify_point_with((cp0 + cp1) * 0.5, polygon, cfg)?.is_closed_inside();
    if cps.len() > 2 {
        let last = aug.points[cps[cps.len() - 1]];
        if distance(cp0, cp1) > distance(cp0, last) {
            inside = !classify_point_with((cp0 + last) * 0.5, polygon, cfg)?.is_closed_inside();
        }
    }
    Ok(inside)
}

/// Steps 5 and 6: one pass over the cycle starting at the first crossing.
fn walk(aug: &AugmentedSequence, first_inside: bool) -> Vec<Polygon> {
    let points = &aug.points;
    let cps = &aug.crossings;
    let n = points.len();
    let start = cps[0];

    let mut inside = first_inside;
    let mut main = vec![points[start]];
    let mut current = if inside { vec![points[start]] } else { Vec::new() };
    let mut pieces = Vec::new();
    let mut next = 1usize;

    for step in 1..n {
        let pos = (start + step) % n;
        let p = points[pos];
        if next < cps.len() && pos == cps[next] {
            next += 1;
            main.push(p);
            if inside {
                current.push(p);
                pieces.push(Polygon::from_loop(std::mem::take(&mut current)));
            } else {
                current = vec![p];
            }
            inside = !inside;
        } else if inside {
            current.push(p);
        } else {
            main.push(p);
        }
    }

    if inside {
        if !first_inside && current.len() > 1 {
            // Arc opened after the start: it closes on the first crossing.
            current.push(points[start]);
            pieces.push(Polygon::from_loop(current));
        } else {
            main.extend(current);
        }
    }
    pieces.push(Polygon::from_loop(main));
    pieces
}
