//! PyO3 bindings for the `polycut` kernel.
//!
//! Notes
//! - Keep bindings thin: polygons are lists of `(x, y)` tuples, results are
//!   plain lists and dicts.
//! - Kernel errors surface as `ValueError` with the kernel's message.

use pyo3::prelude::*;

mod common;
mod cut;

#[pymodule]
fn polycut_native(_py: Python, m: &PyModule) -> PyResult<()> {
    cut::register(m)?;
    Ok(())
}
