//! Seeded test shapes: jittered star and convex polygons plus random chords.
//!
//! A shape is `n` vertices on a wobbly circle: evenly spaced angles nudged by
//! `angle_wobble`, radii scaled by `1 ± radius_wobble`. Sorting the angles
//! keeps the loop simple and star-shaped around the origin; the convex
//! variant takes its hull. `draw_chord` cuts through the area centroid and
//! reaches far past every vertex, so a convex shape is crossed exactly twice.
//! Every draw is a pure function of its `DrawKey`.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{CutSegment, Point2, Polygon};
use super::util::{area_centroid, cross3};
use crate::error::GeometryError;

/// How many vertices a drawn shape gets (never fewer than 3).
#[derive(Clone, Copy, Debug)]
pub enum SideCount {
    Fixed(usize),
    /// Inclusive range.
    Uniform { min: usize, max: usize },
}

impl SideCount {
    fn pick<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            SideCount::Fixed(n) => n.max(3),
            SideCount::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ShapeCfg {
    pub sides: SideCount,
    /// Fraction of the even angular step each vertex may move (capped at 0.49
    /// so neighbours never swap).
    pub angle_wobble: f64,
    /// Relative radius noise, capped at 0.9.
    pub radius_wobble: f64,
    pub radius: f64,
    /// Start the angle sweep at a random offset instead of the +x axis.
    pub rotate: bool,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            sides: SideCount::Fixed(12),
            angle_wobble: 0.3,
            radius_wobble: 0.25,
            radius: 1.0,
            rotate: true,
        }
    }
}

/// Addresses one draw: `index` enumerates shapes within a `seed` stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawKey {
    pub seed: u64,
    pub index: u64,
}

impl DrawKey {
    const SHAPE: u64 = 0x7368_6170_65;
    const CHORD: u64 = 0x6368_6f72_64;

    fn rng(self, stream: u64) -> StdRng {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.index.to_le_bytes());
        bytes[16..24].copy_from_slice(&stream.to_le_bytes());
        StdRng::from_seed(bytes)
    }
}

/// Star-shaped simple polygon around the origin (CCW, possibly concave).
pub fn draw_star_polygon(cfg: ShapeCfg, tok: DrawKey) -> Result<Polygon, GeometryError> {
    let mut rng = tok.rng(DrawKey::SHAPE);
    Polygon::new(radial_points(cfg, &mut rng))
}

/// Convex polygon (CCW): convex hull of a radial draw.
pub fn draw_convex_polygon(cfg: ShapeCfg, tok: DrawKey) -> Result<Polygon, GeometryError> {
    let mut rng = tok.rng(DrawKey::SHAPE);
    Polygon::new(convex_hull(&radial_points(cfg, &mut rng)))
}

/// Random cut through the area centroid of `poly`, extending past its extent.
pub fn draw_chord(poly: &Polygon, tok: DrawKey) -> Result<CutSegment, GeometryError> {
    let c = area_centroid(poly.vertices()).ok_or(GeometryError::NumericalDegeneracy {
        context: "polygon centroid",
    })?;
    let reach = poly
        .vertices()
        .iter()
        .map(|v| (v - c).norm())
        .fold(0.0, f64::max)
        * 2.0
        + 1.0;
    let mut rng = tok.rng(DrawKey::CHORD);
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let dir = Point2::new(theta.cos(), theta.sin());
    Ok(CutSegment::new(c - dir * reach, c + dir * reach))
}

fn radial_points<R: Rng>(cfg: ShapeCfg, rng: &mut R) -> Vec<Point2> {
    let n = cfg.sides.pick(rng).max(3);
    let aj = cfg.angle_wobble.clamp(0.0, 0.49);
    let rj = cfg.radius_wobble.clamp(0.0, 0.9);
    let r0 = cfg.radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.rotate {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Andrew’s monotone chain convex hull (CCW, collinear points dropped).
fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross3(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross3(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = ShapeCfg {
            sides: SideCount::Fixed(10),
            angle_wobble: 0.2,
            radius_wobble: 0.1,
            radius: 1.0,
            rotate: true,
        };
        let tok = DrawKey { seed: 42, index: 7 };
        let p1 = draw_convex_polygon(cfg, tok).unwrap();
        let p2 = draw_convex_polygon(cfg, tok).unwrap();
        assert_eq!(p1, p2);
        let c1 = draw_chord(&p1, tok).unwrap();
        let c2 = draw_chord(&p2, tok).unwrap();
        assert_eq!(c1, c2);
        let other = draw_convex_polygon(cfg, DrawKey { seed: 42, index: 8 }).unwrap();
        assert_ne!(p1, other);
    }

    #[test]
    fn convex_draw_is_ccw_and_convex() {
        let tok = DrawKey { seed: 3, index: 1 };
        let p = draw_convex_polygon(ShapeCfg::default(), tok).unwrap();
        assert!(p.signed_area() > 0.0);
        let v = p.vertices();
        let n = v.len();
        for i in 0..n {
            assert!(cross3(v[i], v[(i + 1) % n], v[(i + 2) % n]) > 0.0);
        }
    }

    #[test]
    fn star_draw_keeps_vertex_count() {
        let cfg = ShapeCfg {
            sides: SideCount::Uniform { min: 5, max: 9 },
            radius_wobble: 0.6,
            ..ShapeCfg::default()
        };
        let p = draw_star_polygon(cfg, DrawKey { seed: 9, index: 2 }).unwrap();
        assert!((5..=9).contains(&p.len()));
        assert!(p.signed_area() > 0.0);
    }

    #[test]
    fn hull_drops_interior_points() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(convex_hull(&pts).len(), 4);
    }
}
