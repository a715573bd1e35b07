//! Primitive cell and translational symmetry descriptors.

use pyo3::prelude::*;
use tbshape::lattice::{self, Primitive, Translation, TranslationalSymmetry};

#[pyclass(name = "Primitive", module = "tbshape_native")]
#[derive(Clone)]
pub struct PyPrimitive {
    inner: Primitive,
}

#[pymethods]
impl PyPrimitive {
    #[getter]
    fn lengths(&self) -> (f64, f64, f64) {
        let [a, b, c] = self.inner.lengths;
        (a, b, c)
    }

    #[getter]
    fn nanometers(&self) -> bool {
        self.inner.nanometers
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
}

#[pyclass(name = "Translational", module = "tbshape_native")]
#[derive(Clone)]
pub struct PyTranslational {
    inner: TranslationalSymmetry,
}

#[pymethods]
impl PyTranslational {
    /// Sentinel-encoded lengths: -1 disabled, 0 automatic, else nm.
    #[getter]
    fn lengths(&self) -> (f64, f64, f64) {
        let [a, b, c] = self.inner.lengths;
        (a, b, c)
    }

    fn __repr__(&self) -> String {
        let [a, b, c] = self.inner.directions();
        format!("Translational({a}, {b}, {c})")
    }
}

/// Per-direction argument: a flag or a manual length.
///
/// `bool` must be tried first: Python bools also extract as floats.
#[derive(FromPyObject, Clone, Copy)]
enum TranslationArg {
    Flag(bool),
    Length(f64),
}

/// Omitted directions default to automatic.
fn translation(arg: Option<TranslationArg>) -> Translation {
    match arg {
        None => Translation::Automatic,
        Some(TranslationArg::Flag(flag)) => Translation::from(flag),
        Some(TranslationArg::Length(length)) => Translation::from(length),
    }
}

#[pyfunction]
#[pyo3(signature = (v1=None, v2=None, v3=None, nanometers=false))]
fn primitive(v1: Option<f64>, v2: Option<f64>, v3: Option<f64>, nanometers: bool) -> PyPrimitive {
    PyPrimitive {
        inner: lattice::primitive(v1, v2, v3, nanometers),
    }
}

#[pyfunction]
#[pyo3(signature = (a1=None, a2=None, a3=None))]
fn translational_symmetry(
    a1: Option<TranslationArg>,
    a2: Option<TranslationArg>,
    a3: Option<TranslationArg>,
) -> PyTranslational {
    PyTranslational {
        inner: lattice::translational_symmetry(translation(a1), translation(a2), translation(a3)),
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPrimitive>()?;
    m.add_class::<PyTranslational>()?;
    m.add_function(wrap_pyfunction!(primitive, m)?)?;
    m.add_function(wrap_pyfunction!(translational_symmetry, m)?)?;
    Ok(())
}
