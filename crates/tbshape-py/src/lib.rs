//! PyO3 bindings for the `tbshape` descriptors.
//!
//! Notes
//! - Keep bindings thin and predictable: tuples in, tuples out.
//! - Shape validation lives in Rust; failures surface as `ValueError`.

use pyo3::prelude::*;

mod common;
mod lattice;
mod shapes;

#[pymodule]
fn tbshape_native(_py: Python, m: &PyModule) -> PyResult<()> {
    shapes::register(m)?;
    lattice::register(m)?;
    m.add("__version__", tbshape::VERSION)?;
    Ok(())
}
