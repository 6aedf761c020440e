// src/python_api.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Python bindings using PyO3

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_RECORD_COUNT};
use crate::error::DatagenError;
use crate::generator::{GeneratorConfig, RecordGenerator};
use crate::record::GenomicRecord;
use crate::writer::OutputWriter;

fn to_py_err(err: DatagenError) -> PyErr {
    match err {
        DatagenError::Io { .. } => pyo3::exceptions::PyIOError::new_err(err.to_string()),
        DatagenError::InvalidConfig(_) => {
            pyo3::exceptions::PyValueError::new_err(err.to_string())
        }
        _ => pyo3::exceptions::PyRuntimeError::new_err(err.to_string()),
    }
}

fn generate(count: usize, seed: Option<u64>) -> PyResult<Vec<GenomicRecord>> {
    let config = GeneratorConfig {
        count,
        seed,
        ..GeneratorConfig::default()
    };
    let mut generator = RecordGenerator::new(config).map_err(to_py_err)?;
    Ok(generator.generate())
}

fn record_to_dict<'py>(py: Python<'py>, record: &GenomicRecord) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("genome_id", record.genome_id.as_str())?;
    dict.set_item("gene_name", record.gene_name.as_str())?;
    dict.set_item("sequence", record.sequence.as_str())?;
    dict.set_item("start_position", record.start_position)?;
    dict.set_item("end_position", record.end_position)?;
    dict.set_item("gtdb_taxonomy_id", record.gtdb_taxonomy_id)?;
    Ok(dict)
}

/// Generate synthetic genomic records
///
/// # Arguments
/// * `count` - Number of records (default 100)
/// * `seed` - Seed for reproducible output (None = time + urandom)
///
/// # Returns
/// List of dicts, one per record, keys in column order
///
/// # Example
/// ```python
/// import genomic_datagen
///
/// rows = genomic_datagen.generate_records(10, seed=42)
/// print(rows[0]["genome_id"])  # G0001
/// ```
#[pyfunction]
#[pyo3(signature = (count=DEFAULT_RECORD_COUNT, seed=None))]
fn generate_records<'py>(
    py: Python<'py>,
    count: usize,
    seed: Option<u64>,
) -> PyResult<Bound<'py, PyList>> {
    let records = generate(count, seed)?;

    let list = PyList::empty(py);
    for record in &records {
        list.append(record_to_dict(py, record)?)?;
    }
    Ok(list)
}

/// Generate records and save them as Parquet and JSON Lines
///
/// # Returns
/// Tuple of (parquet_path, json_lines_path)
#[pyfunction]
#[pyo3(signature = (count=DEFAULT_RECORD_COUNT, seed=None, output_dir=DEFAULT_OUTPUT_DIR))]
fn save_records(count: usize, seed: Option<u64>, output_dir: &str) -> PyResult<(String, String)> {
    let records = generate(count, seed)?;
    let paths = OutputWriter::new(output_dir)
        .write_all(&records)
        .map_err(to_py_err)?;

    Ok((
        paths.parquet.display().to_string(),
        paths.json_lines.display().to_string(),
    ))
}

pub fn register_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_records, m)?)?;
    m.add_function(wrap_pyfunction!(save_records, m)?)?;
    Ok(())
}
