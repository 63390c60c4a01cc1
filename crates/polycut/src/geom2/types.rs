//! Value types for the cutting kernel.
//!
//! - `CutCfg`: the comparison tolerance shared by every predicate.
//! - `Polygon`: implicitly closed vertex loop (>= 3 vertices on input).
//! - `CutSegment`: directed cutting segment; direction orders intersections.
//! - `IntersectionPoint`, `SplitResult`: outputs of `split::split_polygon`.
//!
//! All types are plain values created per call; nothing here holds state
//! between calls.

use nalgebra::Vector2;

use super::util::{approx_eq_point, signed_area};
use crate::error::GeometryError;

/// A point (or vector) in the polygon's coordinate space.
pub type Point2 = Vector2<f64>;

/// Tolerance used when no `CutCfg` is given.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Kernel configuration (tolerances).
///
/// Two scalars compare equal if their absolute difference is `<= eps`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutCfg {
    pub eps: f64,
}

impl Default for CutCfg {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl CutCfg {
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self { eps }
    }
}

/// Simple polygon given as an implicitly closed vertex loop.
///
/// Invariants for inputs built with [`Polygon::new`]:
/// - At least 3 vertices, all coordinates finite.
/// - Consistent winding and no self-intersections. These two are caller
///   preconditions; they are not checked and behaviour is undefined if
///   violated.
///
/// Loops emitted by the splitter use the same type but may be degenerate
/// (fewer than 3 points) when the cut only grazes the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Validate and wrap a vertex loop.
    pub fn new(vertices: Vec<Point2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidPolygon {
                vertices: vertices.len(),
            });
        }
        if vertices.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::NonFinite);
        }
        Ok(Self { vertices })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self, GeometryError> {
        Self::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Wrap an output loop without validation.
    #[inline]
    pub(crate) fn from_loop(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges `(i, v[i], v[i+1])`, including the closing edge back to `v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (i, self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area, positive for counterclockwise loops.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// True if any two consecutive vertices (cyclically) coincide within `eps`.
    pub fn has_repeated_vertex(&self, eps: f64) -> bool {
        let n = self.vertices.len();
        n > 1
            && (0..n).any(|i| approx_eq_point(self.vertices[i], self.vertices[(i + 1) % n], eps))
    }
}

/// Directed cutting segment in the polygon's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutSegment {
    pub start: Point2,
    pub end: Point2,
}

impl CutSegment {
    #[inline]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Reject non-finite coordinates and zero-length cuts.
    pub fn validate(&self, cfg: CutCfg) -> Result<(), GeometryError> {
        let finite = [self.start, self.end]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite());
        if !finite {
            return Err(GeometryError::NonFinite);
        }
        if approx_eq_point(self.start, self.end, cfg.eps) {
            return Err(GeometryError::DegenerateCut);
        }
        Ok(())
    }
}

/// How the cut met the polygon boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntersectionKind {
    /// Transversal crossing in the interior of an edge; a new point was spliced in.
    Proper,
    /// The cut passes through an existing vertex; no point was added.
    Vertex,
}

/// Boundary intersection found while building the augmented sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionPoint {
    pub point: Point2,
    /// Index of the polygon edge (`v[edge] -> v[edge+1]`) it was found on.
    pub edge: usize,
    pub kind: IntersectionKind,
}

/// Output of `split_polygon`.
///
/// - `pieces`: closed loops; the last one is always the remainder. A miss
///   yields exactly one piece, the input polygon.
/// - `intersections`: boundary intersections in traversal order.
/// - `extremes`: nearest and farthest intersection from the cut start, or
///   `None` when nothing was cut.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitResult {
    pub pieces: Vec<Polygon>,
    pub intersections: Vec<IntersectionPoint>,
    pub extremes: Option<(IntersectionPoint, IntersectionPoint)>,
}

impl SplitResult {
    pub(crate) fn uncut(polygon: &Polygon, intersections: Vec<IntersectionPoint>) -> Self {
        Self {
            pieces: vec![polygon.clone()],
            intersections,
            extremes: None,
        }
    }

    /// Whether the polygon was actually split.
    #[inline]
    pub fn is_cut(&self) -> bool {
        self.extremes.is_some()
    }

    #[inline]
    pub fn nearest(&self) -> Option<Point2> {
        self.extremes.map(|(a, _)| a.point)
    }

    #[inline]
    pub fn farthest(&self) -> Option<Point2> {
        self.extremes.map(|(_, b)| b.point)
    }

    /// Pieces with at least 3 vertices.
    pub fn proper_pieces(&self) -> impl Iterator<Item = &Polygon> {
        self.pieces.iter().filter(|p| p.len() >= 3)
    }
}
