//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Card, EngineError};

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Read-only view of one card.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Stable card id (deck position).
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    /// Face value, only meaningful to show while visible or found.
    #[getter]
    fn value(&self) -> u8 {
        self.0.value
    }

    #[getter]
    fn is_visible(&self) -> bool {
        self.0.is_visible
    }

    #[getter]
    fn is_found(&self) -> bool {
        self.0.is_found
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(id={}, value={}, visible={}, found={})",
            self.0.id.raw(),
            self.0.value,
            self.0.is_visible,
            self.0.is_found
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
