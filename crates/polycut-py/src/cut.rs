//! Splitting and containment bindings.

use crate::common::{cfg_from_py, map_geometry_err, point_from_py, point_to_py, polygon_from_py};
use polycut::api::{classify_point_with, split_polygon_with, Containment, CutSegment};
use pyo3::prelude::*;
use pyo3::types::PyDict;

type Loop = Vec<(f64, f64)>;

/// Split `polygon` along `cut_start -> cut_end`.
///
/// Returns a dict with `pieces` (list of vertex lists, remainder last) and
/// `extremes` (`None` or the nearest/farthest intersection from the start).
#[pyfunction]
#[pyo3(signature = (polygon, cut_start, cut_end, eps=None))]
pub fn split_polygon(
    py: Python<'_>,
    polygon: Loop,
    cut_start: (f64, f64),
    cut_end: (f64, f64),
    eps: Option<f64>,
) -> PyResult<PyObject> {
    let poly = polygon_from_py(polygon)?;
    let cut = CutSegment::new(point_from_py(cut_start), point_from_py(cut_end));
    let res = split_polygon_with(cut, &poly, cfg_from_py(eps)).map_err(map_geometry_err)?;
    let pieces: Vec<Loop> = res
        .pieces
        .iter()
        .map(|p| p.vertices().iter().map(|&v| point_to_py(v)).collect())
        .collect();
    let extremes = res
        .extremes
        .map(|(a, b)| (point_to_py(a.point), point_to_py(b.point)));
    let out = PyDict::new(py);
    out.set_item("pieces", pieces)?;
    out.set_item("extremes", extremes)?;
    Ok(out.into())
}

/// Classify a point: one of "inside", "outside", "on_edge", "on_vertex".
#[pyfunction]
#[pyo3(signature = (point, polygon, eps=None))]
pub fn classify_point(point: (f64, f64), polygon: Loop, eps: Option<f64>) -> PyResult<&'static str> {
    let poly = polygon_from_py(polygon)?;
    let c = classify_point_with(point_from_py(point), &poly, cfg_from_py(eps))
        .map_err(map_geometry_err)?;
    Ok(match c {
        Containment::Inside => "inside",
        Containment::Outside => "outside",
        Containment::OnEdge => "on_edge",
        Containment::OnVertex => "on_vertex",
    })
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(split_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(classify_point, m)?)?;
    Ok(())
}
