// src/writer.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialization of a generated record set to Parquet and JSON Lines
//!
//! Both files are written from the same in-memory slice, one after the
//! other. There is no atomicity between them: if the second write fails the
//! first file stays on disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::constants::{JSON_LINES_FILE_NAME, PARQUET_FILE_NAME};
use crate::error::{DatagenError, Result};
use crate::record::GenomicRecord;
use crate::schema::record_schema_ref;

/// Locations of the two files produced by one write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub parquet: PathBuf,
    pub json_lines: PathBuf,
}

/// Writes a record set into a fixed pair of files under `output_dir`
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn paths(&self) -> OutputPaths {
        OutputPaths {
            parquet: self.output_dir.join(PARQUET_FILE_NAME),
            json_lines: self.output_dir.join(JSON_LINES_FILE_NAME),
        }
    }

    /// Create the output directory if needed, then write Parquet followed by JSON Lines
    pub fn write_all(&self, records: &[GenomicRecord]) -> Result<OutputPaths> {
        tracing::info!(
            "Writing {} records to {}",
            records.len(),
            self.output_dir.display()
        );

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| DatagenError::io(&self.output_dir, e))?;

        let paths = self.paths();
        write_parquet(records, &paths.parquet)?;
        write_json_lines(records, &paths.json_lines)?;

        tracing::info!(
            "Wrote {} and {}",
            paths.parquet.display(),
            paths.json_lines.display()
        );
        Ok(paths)
    }
}

/// Build a single Arrow batch holding every record, columns in record field order
pub fn records_to_batch(records: &[GenomicRecord]) -> Result<RecordBatch> {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.genome_id.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.gene_name.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.sequence.as_str()),
        )),
        Arc::new(Int64Array::from_iter_values(
            records.iter().map(|r| r.start_position),
        )),
        Arc::new(Int64Array::from_iter_values(
            records.iter().map(|r| r.end_position),
        )),
        Arc::new(Int64Array::from_iter_values(
            records.iter().map(|r| r.gtdb_taxonomy_id),
        )),
    ];

    Ok(RecordBatch::try_new(record_schema_ref(), columns)?)
}

/// Write all records as one Snappy-compressed Parquet table
pub fn write_parquet(records: &[GenomicRecord], path: &Path) -> Result<()> {
    let batch = records_to_batch(records)?;

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(Vec::new(), batch.schema(), Some(props))?;

    // An empty table still gets a footer carrying the schema
    if batch.num_rows() > 0 {
        writer.write(&batch)?;
    }
    // Encoded in memory; only the final write touches the filesystem
    let encoded = writer.into_inner()?;
    fs::write(path, &encoded).map_err(|e| DatagenError::io(path, e))?;

    tracing::debug!("Parquet: {} rows -> {}", records.len(), path.display());
    Ok(())
}

/// Write one JSON object per line, newline-terminated, in generation order
pub fn write_json_lines(records: &[GenomicRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| DatagenError::io(path, e))?;
    let mut out = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut out, record).map_err(|e| {
            if e.is_io() {
                DatagenError::io(path, e.into())
            } else {
                DatagenError::Json(e)
            }
        })?;
        out.write_all(b"\n").map_err(|e| DatagenError::io(path, e))?;
    }
    out.flush().map_err(|e| DatagenError::io(path, e))?;

    tracing::debug!("JSON Lines: {} rows -> {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_records, GeneratorConfig};
    use crate::reader::{read_json_lines, read_parquet};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn init_tracing() {
        use tracing_subscriber::{fmt, EnvFilter};
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    fn records(count: usize) -> Vec<GenomicRecord> {
        let config = GeneratorConfig {
            count,
            ..GeneratorConfig::default()
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        generate_records(&config, &mut rng).unwrap()
    }

    #[test]
    fn test_write_creates_missing_directory() {
        init_tracing();
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("output");

        let paths = OutputWriter::new(&dir).write_all(&records(5)).unwrap();

        assert_eq!(paths.parquet, dir.join("genomic_data.parquet"));
        assert_eq!(paths.json_lines, dir.join("genomic_data.json"));
        assert!(paths.parquet.is_file());
        assert!(paths.json_lines.is_file());
    }

    #[test]
    fn test_both_files_decode_to_same_records() {
        init_tracing();
        let tmp = tempfile::tempdir().unwrap();
        let written = records(100);

        let paths = OutputWriter::new(tmp.path()).write_all(&written).unwrap();

        let from_parquet = read_parquet(&paths.parquet).unwrap();
        let from_json = read_json_lines(&paths.json_lines).unwrap();
        assert_eq!(from_parquet, written);
        assert_eq!(from_json, written);
    }

    #[test]
    fn test_empty_record_set() {
        init_tracing();
        let tmp = tempfile::tempdir().unwrap();

        let paths = OutputWriter::new(tmp.path()).write_all(&[]).unwrap();

        assert!(paths.parquet.is_file());
        assert!(read_parquet(&paths.parquet).unwrap().is_empty());
        assert_eq!(fs::read_to_string(&paths.json_lines).unwrap(), "");
    }

    #[test]
    fn test_json_line_layout() {
        init_tracing();
        let tmp = tempfile::tempdir().unwrap();
        let written = records(3);

        let paths = OutputWriter::new(tmp.path()).write_all(&written).unwrap();
        let text = fs::read_to_string(&paths.json_lines).unwrap();

        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let r = &written[0];
        let expected = format!(
            r#"{{"genome_id":"G0001","gene_name":"{}","sequence":"{}","start_position":{},"end_position":{},"gtdb_taxonomy_id":{}}}"#,
            r.gene_name, r.sequence, r.start_position, r.end_position, r.gtdb_taxonomy_id
        );
        assert_eq!(lines[0], expected);
        assert!(lines[2].starts_with(r#"{"genome_id":"G0003","#));
    }

    #[test]
    fn test_batch_shape() {
        let batch = records_to_batch(&records(12)).unwrap();
        assert_eq!(batch.num_rows(), 12);
        assert_eq!(batch.num_columns(), 6);
        assert_eq!(batch.schema(), record_schema_ref());
    }

    #[test]
    fn test_unwritable_directory_is_io_error() {
        init_tracing();
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not_a_dir");
        fs::write(&blocker, b"occupied").unwrap();

        let err = OutputWriter::new(blocker.join("output"))
            .write_all(&records(1))
            .unwrap_err();
        assert!(matches!(err, DatagenError::Io { .. }), "{}", err);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_json_lines_disk_full_is_io_error() {
        init_tracing();
        let full = Path::new("/dev/full");
        let err = write_json_lines(&records(100), full).unwrap_err();
        match err {
            DatagenError::Io { path, source } => {
                assert_eq!(path, full);
                assert_eq!(source.raw_os_error(), Some(28), "{}", source);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_parquet_disk_full_is_io_error() {
        init_tracing();
        let full = Path::new("/dev/full");
        let err = write_parquet(&records(100), full).unwrap_err();
        assert!(
            matches!(&err, DatagenError::Io { path, .. } if path == full),
            "{:?}",
            err
        );
    }

    #[test]
    fn test_rewrite_overwrites_previous_run() {
        init_tracing();
        let tmp = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(tmp.path());

        writer.write_all(&records(50)).unwrap();
        let paths = writer.write_all(&records(2)).unwrap();

        assert_eq!(read_parquet(&paths.parquet).unwrap().len(), 2);
        assert_eq!(read_json_lines(&paths.json_lines).unwrap().len(), 2);
    }
}
