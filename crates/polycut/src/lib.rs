//! Straight-line polygon cutting in 2D.
//!
//! The crate splits a simple polygon along a cutting segment. It is a pure,
//! synchronous kernel: callers move coordinates into the polygon's frame,
//! call [`geom2::split_polygon`], and move the resulting loops back out.
//!
//! API Policy
//! - `api` is the curated import surface for the CLI and bindings.
//! - Internals may change freely; prefer `api`/`prelude` re-exports.

pub mod api;
pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeometryError;
pub use geom2::{CutCfg, Point2, Polygon, DEFAULT_EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeometryError;
    pub use crate::geom2::rand::{
        draw_chord, draw_convex_polygon, DrawKey, ShapeCfg, SideCount,
    };
    pub use crate::geom2::{
        classify_point, classify_segments, split_polygon, Containment, CutCfg, CutSegment, Point2,
        Polygon, SegmentIntersection, SplitResult,
    };
    pub use nalgebra::Vector2 as Vec2;
}
