//! `Polygon`, `Circle` and the shape factories.

use crate::common::{map_plot_err, map_shape_err, render_svg};
use nalgebra::{Vector2, Vector3};
use pyo3::prelude::*;
use tbshape::shape::{self, Circle, Polygon, Shape};

/// Shape defined by a list of vertices (clockwise or counterclockwise).
#[pyclass(name = "Polygon", module = "tbshape_native")]
#[derive(Clone)]
pub struct PyPolygon {
    inner: Polygon,
}

#[pymethods]
impl PyPolygon {
    #[new]
    fn new(vertices: Vec<(f64, f64)>) -> PyResult<Self> {
        let inner = Polygon::new(vertices).map_err(map_shape_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn vertices(&self) -> Vec<(f64, f64)> {
        self.inner.vertices()
    }

    /// Rejected assignments leave the previous vertices in place.
    #[setter]
    fn set_vertices(&mut self, vertices: Vec<(f64, f64)>) -> PyResult<()> {
        self.inner.set_vertices(vertices).map_err(map_shape_err)
    }

    #[getter]
    fn x(&self) -> Vec<f64> {
        self.inner.x().to_vec()
    }

    #[getter]
    fn y(&self) -> Vec<f64> {
        self.inner.y().to_vec()
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        self.inner.contains(Vector2::new(x, y))
    }

    #[pyo3(signature = (color=None))]
    fn to_svg(&self, color: Option<String>) -> String {
        render_svg(&self.inner, color).to_svg_string()
    }

    #[pyo3(signature = (path, color=None))]
    fn save_svg(&self, path: &str, color: Option<String>) -> PyResult<()> {
        render_svg(&self.inner, color)
            .save(path)
            .map_err(map_plot_err)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Circle", module = "tbshape_native")]
#[derive(Clone)]
pub struct PyCircle {
    inner: Circle,
}

#[pymethods]
impl PyCircle {
    #[new]
    #[pyo3(signature = (radius, center=(0.0, 0.0, 0.0)))]
    fn new(radius: f64, center: (f64, f64, f64)) -> Self {
        let c = Vector3::new(center.0, center.1, center.2);
        Self {
            inner: Circle::new(radius, c),
        }
    }

    #[getter]
    fn r(&self) -> f64 {
        self.inner.radius
    }

    #[getter]
    fn center(&self) -> (f64, f64, f64) {
        let c = self.inner.center;
        (c.x, c.y, c.z)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        self.inner.contains(Vector2::new(x, y))
    }

    #[pyo3(signature = (color=None))]
    fn to_svg(&self, color: Option<String>) -> String {
        render_svg(&self.inner, color).to_svg_string()
    }

    #[pyo3(signature = (path, color=None))]
    fn save_svg(&self, path: &str, color: Option<String>) -> PyResult<()> {
        render_svg(&self.inner, color)
            .save(path)
            .map_err(map_plot_err)
    }

    fn __repr__(&self) -> String {
        let (x, y, z) = self.center();
        format!("Circle(r={}, center=({x}, {y}, {z}))", self.inner.radius)
    }
}

#[pyfunction]
#[pyo3(signature = (x, y=None))]
fn rectangle(x: f64, y: Option<f64>) -> PyPolygon {
    PyPolygon {
        inner: shape::rectangle(x, y),
    }
}

#[pyfunction]
#[pyo3(signature = (num_sides, radius, angle=0.0))]
fn regular_polygon(num_sides: usize, radius: f64, angle: f64) -> PyResult<PyPolygon> {
    let inner = shape::regular_polygon(num_sides, radius, angle).map_err(map_shape_err)?;
    Ok(PyPolygon { inner })
}

#[pyfunction]
#[pyo3(signature = (radius, center=(0.0, 0.0, 0.0)))]
fn circle(radius: f64, center: (f64, f64, f64)) -> PyCircle {
    PyCircle::new(radius, center)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPolygon>()?;
    m.add_class::<PyCircle>()?;
    m.add_function(wrap_pyfunction!(rectangle, m)?)?;
    m.add_function(wrap_pyfunction!(regular_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(circle, m)?)?;
    Ok(())
}
