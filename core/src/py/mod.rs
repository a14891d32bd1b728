use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::config::LogConfig;
use crate::pipeline;

fn parse_config(config_json: Option<&str>) -> Result<LogConfig, String> {
    let Some(raw) = config_json else {
        return Ok(LogConfig::default());
    };
    let mut de = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        format!("parse error (LogConfig) at {}: {}", path, e)
    })
}

fn report_json(text: &str, config_json: Option<&str>) -> Result<String, String> {
    let cfg = parse_config(config_json)?;
    let report = pipeline::run(text, &cfg).map_err(|e| e.to_string())?;
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

/// Logg-tekst (+ valgfri konfig som JSON) → PowerReport som JSON-streng.
#[pyfunction]
#[pyo3(signature = (text, config_json=None))]
fn decode_log_json(text: &str, config_json: Option<&str>) -> PyResult<String> {
    report_json(text, config_json).map_err(PyValueError::new_err)
}

/// Leser loggfil og returnerer rapporten som dict (klar for matplotlib).
#[pyfunction]
#[pyo3(signature = (path, config_json=None))]
fn decode_log_file(py: Python<'_>, path: &str, config_json: Option<&str>) -> PyResult<PyObject> {
    let cfg = parse_config(config_json).map_err(PyValueError::new_err)?;
    let report = pipeline::run_file(path, &cfg).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let out = serde_json::to_string(&report).map_err(|e| PyValueError::new_err(e.to_string()))?;

    // Returnér som Python-objekt (dict) via Python's json.loads (unngår pyo3 serde-feature)
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out.as_str(),))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

#[pymodule]
fn blepower_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decode_log_json, m)?)?;
    m.add_function(wrap_pyfunction!(decode_log_file, m)?)?;
    Ok(())
}
