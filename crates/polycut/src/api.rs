//! Curated API for the CLI and bindings.
//!
//! Prefer these re-exports over reaching into `geom2` submodules; internal
//! module layout may change.

pub use crate::error::GeometryError;
pub use crate::geom2::rand::{
    draw_chord, draw_convex_polygon, draw_star_polygon, DrawKey as PolygonReplay, ShapeCfg,
    SideCount,
};
pub use crate::geom2::util::{approx_cmp, area_centroid, cross, distance, dot};
pub use crate::geom2::{
    build_augmented, classify_point, classify_point_with, classify_segments, cut_polygons,
    ray_edge_relation, split_polygon, split_polygon_with, AugmentedSequence, Containment, CutCfg,
    CutSegment, IntersectionKind, IntersectionPoint, Point2, Polygon, RayHit, SegmentIntersection,
    SplitResult, DEFAULT_EPS,
};
