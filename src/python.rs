use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Player, PlayerId, RankingResult};
use crate::engine::{InferenceOptions, InferenceRequest, RankEngine as RustRankEngine};

/// Python wrapper for RankEngine
#[pyclass]
struct RankEngine {
    engine: RustRankEngine,
}

#[pymethods]
impl RankEngine {
    /// Create new RankEngine
    #[new]
    fn new(max_ranks: Option<usize>) -> Self {
        let mut options = InferenceOptions::default();
        if let Some(max_ranks) = max_ranks {
            options.max_ranks = max_ranks;
        }
        Self {
            engine: RustRankEngine::new(options),
        }
    }

    /// Infer the podium from OCR text
    fn infer(
        &self,
        roster: Vec<&PyDict>,
        text: Option<String>,
        uploader_id: Option<&PyAny>,
    ) -> PyResult<Vec<PyObject>> {
        let request = InferenceRequest {
            roster: roster_from_py(roster)?,
            text,
            uploader_id: uploader_id.map(player_id_from_py).transpose()?,
        };

        let result = self.engine.infer(&request);

        Python::with_gil(|py| ranking_to_py(py, &result))
    }

    #[getter]
    fn max_ranks(&self) -> usize {
        self.engine.options().max_ranks
    }
}

/// Infer ranks 1..3 with default options
#[pyfunction]
fn infer_top_three(
    roster: Vec<&PyDict>,
    text: Option<String>,
    uploader_id: Option<&PyAny>,
) -> PyResult<Vec<PyObject>> {
    RankEngine::new(None).infer(roster, text, uploader_id)
}

/// Read `{"id": ..., "name": ...}` dicts; ids may be int or str
fn roster_from_py(roster: Vec<&PyDict>) -> PyResult<Vec<Player>> {
    roster
        .into_iter()
        .map(|dict| {
            let id = dict
                .get_item("id")?
                .ok_or_else(|| PyErr::new::<pyo3::exceptions::PyKeyError, _>("id"))?;
            let name: String = dict
                .get_item("name")?
                .ok_or_else(|| PyErr::new::<pyo3::exceptions::PyKeyError, _>("name"))?
                .extract()?;

            Ok(Player::new(player_id_from_py(id)?, name))
        })
        .collect()
}

/// Player ids arrive as int or str, same as the JSON surfaces
fn player_id_from_py(value: &PyAny) -> PyResult<PlayerId> {
    match value.extract::<i64>() {
        Ok(n) => Ok(PlayerId::from(n)),
        Err(_) => Ok(PlayerId::from(value.extract::<String>()?)),
    }
}

/// Convert RankingResult to a list of Python dicts
fn ranking_to_py(py: Python, result: &RankingResult) -> PyResult<Vec<PyObject>> {
    result
        .players
        .iter()
        .map(|player| {
            let dict = PyDict::new(py);
            dict.set_item("id", player.id.as_str())?;
            dict.set_item("name", &player.name)?;
            Ok(dict.into())
        })
        .collect()
}

/// Python module
#[pymodule]
fn podium_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<RankEngine>()?;
    m.add_function(wrap_pyfunction!(infer_top_three, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
