// src/lib.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synthetic genomic record generation with Parquet and JSON Lines output
//!
//! This library provides:
//! - Seedable Xoshiro256++ generation of random genomic records
//! - Injectable gene-name and taxonomy pools via `GeneratorConfig`
//! - Parquet (Snappy) and JSON Lines writers sharing one in-memory record set
//! - Readers for both formats to check that the encodings agree
//! - Python bindings via PyO3 (optional)

// Core modules
pub mod constants;
pub mod error;
pub mod generator;
pub mod reader;
pub mod record;
pub mod schema;
pub mod writer;

// Python bindings
#[cfg(feature = "python-bindings")]
mod python_api;

// Re-export main API
pub use error::{DatagenError, Result};
pub use generator::{
    format_genome_id, generate_records, generate_records_simple, random_dna, GeneratorConfig,
    RecordGenerator,
};
pub use reader::{read_json_lines, read_parquet};
pub use record::GenomicRecord;
pub use writer::{write_json_lines, write_parquet, OutputPaths, OutputWriter};

// PyO3 module initialization
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _genomic_datagen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_api::register_functions(m)?;
    Ok(())
}
