use super::rand::{
    draw_chord, draw_convex_polygon, draw_star_polygon, ShapeCfg, DrawKey, SideCount,
};
use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn convex_cfg() -> ShapeCfg {
    ShapeCfg {
        sides: SideCount::Uniform { min: 3, max: 24 },
        ..ShapeCfg::default()
    }
}

#[test]
fn square_scenario_end_to_end() {
    let sq = Polygon::from_xy(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
    let r = split_polygon(vector![5.0, -5.0], vector![5.0, 15.0], &sq).unwrap();
    assert_eq!(r.pieces.len(), 2);
    assert!(r.pieces.iter().all(|p| (p.area() - 50.0).abs() < 1e-9));
    let (near, far) = r.extremes.unwrap();
    assert_eq!(near.point, vector![5.0, 0.0]);
    assert_eq!(far.point, vector![5.0, 10.0]);
}

#[test]
fn custom_tolerance_is_honoured() {
    let sq = Polygon::from_xy(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
    // A cut 1e-3 long is degenerate under a coarse tolerance only.
    let cut = CutSegment::new(vector![5.0, 5.0], vector![5.0, 5.001]);
    assert_eq!(
        split_polygon_with(cut, &sq, CutCfg::with_eps(1e-2)),
        Err(crate::GeometryError::DegenerateCut)
    );
    assert!(split_polygon_with(cut, &sq, CutCfg::default()).is_ok());
    // A point 1e-4 from a vertex snaps to it under the coarse tolerance.
    let p = vector![10.0, 10.0 - 1e-4];
    assert_eq!(
        classify_point_with(p, &sq, CutCfg::with_eps(1e-3)),
        Ok(Containment::OnVertex)
    );
    assert_eq!(classify_point(p, &sq), Ok(Containment::OnEdge));
}

proptest! {
    #[test]
    fn convex_split_conserves_area(seed in any::<u64>(), index in 0u64..10_000) {
        let tok = DrawKey { seed, index };
        let poly = draw_convex_polygon(convex_cfg(), tok).unwrap();
        let cut = draw_chord(&poly, tok).unwrap();
        let r = split_polygon_with(cut, &poly, CutCfg::default()).unwrap();
        prop_assert!(r.is_cut());
        prop_assert_eq!(r.pieces.len(), 2);
        let total: f64 = r.pieces.iter().map(Polygon::area).sum();
        prop_assert!((total - poly.area()).abs() < 1e-9, "total={} area={}", total, poly.area());
        let (near, far) = r.extremes.unwrap();
        prop_assert!(util::distance(cut.start, near.point) <= util::distance(cut.start, far.point));
    }

    #[test]
    fn vertices_classify_on_vertex(seed in any::<u64>(), index in 0u64..10_000) {
        let tok = DrawKey { seed, index };
        let poly = draw_star_polygon(convex_cfg(), tok).unwrap();
        for &v in poly.vertices() {
            prop_assert_eq!(classify_point(v, &poly), Ok(Containment::OnVertex));
        }
    }

    #[test]
    fn centroid_inside_far_point_outside(seed in any::<u64>(), index in 0u64..10_000) {
        let tok = DrawKey { seed, index };
        let poly = draw_convex_polygon(convex_cfg(), tok).unwrap();
        let c = util::area_centroid(poly.vertices()).unwrap();
        prop_assert_eq!(classify_point(c, &poly), Ok(Containment::Inside));
        prop_assert_eq!(classify_point(vector![100.0, 3.5], &poly), Ok(Containment::Outside));
        prop_assert_eq!(classify_point(vector![-100.0, -0.25], &poly), Ok(Containment::Outside));
    }

    #[test]
    fn miss_returns_input(seed in any::<u64>(), index in 0u64..10_000) {
        let tok = DrawKey { seed, index };
        let poly = draw_star_polygon(convex_cfg(), tok).unwrap();
        // Radii stay below 2 * radius, so this cut never reaches the boundary.
        let r = split_polygon(vector![5.0, -5.0], vector![5.0, 5.0], &poly).unwrap();
        prop_assert!(!r.is_cut());
        prop_assert_eq!(r.pieces, vec![poly]);
    }

    #[test]
    fn star_split_never_errors(seed in any::<u64>(), index in 0u64..10_000) {
        let tok = DrawKey { seed, index };
        let cfg = ShapeCfg {
            sides: SideCount::Uniform { min: 5, max: 16 },
            radius_wobble: 0.5,
            ..ShapeCfg::default()
        };
        let poly = draw_star_polygon(cfg, tok).unwrap();
        let cut = draw_chord(&poly, tok).unwrap();
        let r = split_polygon_with(cut, &poly, CutCfg::default()).unwrap();
        prop_assert!(!r.pieces.is_empty());
        prop_assert_eq!(r.intersections.len() >= 2, r.is_cut());
    }
}
