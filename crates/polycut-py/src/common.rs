use nalgebra::Vector2;
use polycut::api::{CutCfg, GeometryError, Point2, Polygon};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn polygon_from_py(points: Vec<(f64, f64)>) -> PyResult<Polygon> {
    Polygon::from_xy(&points).map_err(map_geometry_err)
}

#[inline]
pub fn point_from_py(p: (f64, f64)) -> Point2 {
    Vector2::new(p.0, p.1)
}

#[inline]
pub fn point_to_py(p: Point2) -> (f64, f64) {
    (p.x, p.y)
}

pub fn cfg_from_py(eps: Option<f64>) -> CutCfg {
    eps.map(CutCfg::with_eps).unwrap_or_default()
}

pub fn map_geometry_err(err: GeometryError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
