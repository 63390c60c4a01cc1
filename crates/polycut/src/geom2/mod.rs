//! 2D cutting kernel.
//!
//! Pipeline
//! - `intersect`: classify every polygon edge against the cut segment.
//! - `contain`: ray-casting parity test, used to seed the inside/outside
//!   state of the first arc.
//! - `split`: splice intersections into the vertex cycle and walk it once to
//!   emit the sub-polygons.
//!
//! Tolerances
//! - Every equality-sensitive branch goes through `util::approx_cmp` with
//!   `CutCfg::eps` (default `DEFAULT_EPS = 1e-6`). Plain `==` on floats is
//!   not used for branching.
//!
//! Code cross-refs: `Polygon`, `CutSegment`, `CutCfg`, `SplitResult`

pub mod contain;
pub mod intersect;
pub mod rand;
pub mod split;
mod types;
pub mod util;

pub use contain::{classify_point, classify_point_with, ray_edge_relation, Containment, RayHit};
pub use intersect::{classify_segments, point_on_segment, SegmentIntersection};
pub use split::{
    build_augmented, cut_polygons, split_polygon, split_polygon_with, AugmentedSequence,
};
pub use types::{
    CutCfg, CutSegment, IntersectionKind, IntersectionPoint, Point2, Polygon, SplitResult,
    DEFAULT_EPS,
};

#[cfg(test)]
mod tests;
