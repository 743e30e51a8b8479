use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EventEdep, ParticleRecord, N_SBAR, N_TRAY};
use crate::error::{Error, Result};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Borrow a contiguous 1-D float64 array as a slice.
fn as_values<'a>(what: &str, src: &'a PyReadonlyArray1<'_, f64>) -> Result<&'a [f64]> {
    src.as_slice()
        .map_err(|e| Error::InvalidParam(format!("{what}: {e}")))
}

#[pymethods]
impl ParticleRecord {
    /// Build a particle step record; every field defaults to zero.
    #[new]
    #[pyo3(signature = (pid=0, trackid=0, px=0.0, py=0.0, pz=0.0, ma=0.0, x=0.0, y=0.0, z=0.0, steplength=0.0, edep=0.0))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        pid: i32,
        trackid: i32,
        px: f64,
        py: f64,
        pz: f64,
        ma: f64,
        x: f64,
        y: f64,
        z: f64,
        steplength: f64,
        edep: f64,
    ) -> Self {
        Self {
            pid,
            trackid,
            px,
            py,
            pz,
            ma,
            x,
            y,
            z,
            steplength,
            edep,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Particle(pid={}, trackid={}, px={}, py={}, pz={}, ma={}, x={}, y={}, z={}, steplength={}, edep={})",
            self.pid,
            self.trackid,
            self.px,
            self.py,
            self.pz,
            self.ma,
            self.x,
            self.y,
            self.z,
            self.steplength,
            self.edep
        )
    }
}

/// Python-facing wrapper around [`EventEdep`].
///
/// API:
/// - Edep()
/// - get_sbar() -> np.ndarray, shape (40,); get_tray() -> np.ndarray, shape (4,)
/// - set_sbar(arr), set_tray(arr): exact length required
/// - add_sbar(i, v), add_tray(i, v), merge(other), reset(), is_empty()
#[pyclass(name = "Edep")]
#[derive(Clone, Default)]
pub struct PyEdep {
    inner: EventEdep,
}

#[pymethods]
impl PyEdep {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Return the bar slots as a NumPy array of shape (40,), dtype=float64.
    fn get_sbar<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice(py, &self.inner.sbar)
    }

    /// Return the tray slots as a NumPy array of shape (4,), dtype=float64.
    fn get_tray<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice(py, &self.inner.tray)
    }

    /// Overwrite all bar slots. Raises ValueError unless the array has exactly 40 elements.
    fn set_sbar(&mut self, values: PyReadonlyArray1<'_, f64>) -> PyResult<()> {
        let values = as_values("sbar", &values).map_err(py_err)?;
        self.inner.set_sbar(values).map_err(py_err)
    }

    /// Overwrite all tray slots. Raises ValueError unless the array has exactly 4 elements.
    fn set_tray(&mut self, values: PyReadonlyArray1<'_, f64>) -> PyResult<()> {
        let values = as_values("tray", &values).map_err(py_err)?;
        self.inner.set_tray(values).map_err(py_err)
    }

    fn add_sbar(&mut self, index: usize, value: f64) -> PyResult<()> {
        self.inner.add_sbar(index, value).map_err(py_err)
    }

    fn add_tray(&mut self, index: usize, value: f64) -> PyResult<()> {
        self.inner.add_tray(index, value).map_err(py_err)
    }

    /// Add another record's slots into this one.
    fn merge(&mut self, other: PyRef<'_, PyEdep>) {
        self.inner.merge(&other.inner);
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn __repr__(&self) -> String {
        format!("Edep(SBAR={:?}, TRAY={:?})", self.inner.sbar, self.inner.tray)
    }
}

/// The sc8data Python module entry point.
#[pymodule]
fn sc8data(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ParticleRecord>()?;
    m.add_class::<PyEdep>()?;
    m.add("N_SBAR", N_SBAR)?;
    m.add("N_TRAY", N_TRAY)?;
    Ok(())
}
