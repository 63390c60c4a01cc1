//! Error taxonomy for the cutting kernel.
//!
//! The kernel never aborts and never logs; every rejected input or guarded
//! division surfaces here and the caller decides what "no cut" means.

/// Errors returned by polygon construction, containment and splitting.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Fewer than three vertices were supplied.
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    InvalidPolygon { vertices: usize },
    /// Cut start and end coincide within the configured tolerance.
    #[error("cut segment has zero length")]
    DegenerateCut,
    /// A division would have used a near-zero denominator.
    #[error("numerically degenerate {context}: denominator is near zero")]
    NumericalDegeneracy { context: &'static str },
    /// A coordinate is NaN or infinite.
    #[error("coordinates must be finite")]
    NonFinite,
    /// Input the kernel does not handle, e.g. a self-intersecting polygon.
    ///
    /// Never produced by the kernel itself: self-intersection is not
    /// detected and behaviour on such input is undefined. Kept for callers
    /// that validate before calling.
    #[error("unsupported input: {reason}")]
    Unsupported { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = GeometryError::InvalidPolygon { vertices: 2 };
        assert_eq!(e.to_string(), "polygon needs at least 3 vertices, got 2");
        let e = GeometryError::NumericalDegeneracy {
            context: "segment interpolation",
        };
        assert!(e.to_string().contains("segment interpolation"));
    }
}
