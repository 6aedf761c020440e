// src/reader.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding of written output back into records

use std::fs::{self, File};
use std::path::Path;

use arrow::array::{Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::{DatagenError, Result};
use crate::record::GenomicRecord;
use crate::schema::*;

/// Read every row of a Parquet file written by `write_parquet`
pub fn read_parquet(path: &Path) -> Result<Vec<GenomicRecord>> {
    let file = File::open(path).map_err(|e| DatagenError::io(path, e))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();
    for batch in reader {
        append_batch(&batch?, &mut records)?;
    }

    tracing::debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Read a JSON Lines file written by `write_json_lines`; blank lines are skipped
pub fn read_json_lines(path: &Path) -> Result<Vec<GenomicRecord>> {
    let text = fs::read_to_string(path).map_err(|e| DatagenError::io(path, e))?;

    let records = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str::<GenomicRecord>(line))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!("Read {} lines from {}", records.len(), path.display());
    Ok(records)
}

fn append_batch(batch: &RecordBatch, out: &mut Vec<GenomicRecord>) -> Result<()> {
    let genome_id = string_column(batch, GENOME_ID)?;
    let gene_name = string_column(batch, GENE_NAME)?;
    let sequence = string_column(batch, SEQUENCE)?;
    let start = int_column(batch, START_POSITION)?;
    let end = int_column(batch, END_POSITION)?;
    let taxon = int_column(batch, GTDB_TAXONOMY_ID)?;

    out.reserve(batch.num_rows());
    for i in 0..batch.num_rows() {
        out.push(GenomicRecord {
            genome_id: genome_id.value(i).to_string(),
            gene_name: gene_name.value(i).to_string(),
            sequence: sequence.value(i).to_string(),
            start_position: start.value(i),
            end_position: end.value(i),
            gtdb_taxonomy_id: taxon.value(i),
        });
    }
    Ok(())
}

fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| DatagenError::Schema(format!("missing column {}", name)))?;
    if column.null_count() > 0 {
        return Err(DatagenError::Schema(format!("null values in {}", name)));
    }
    column
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            DatagenError::Schema(format!(
                "column {} is {}, expected Utf8",
                name,
                column.data_type()
            ))
        })
}

fn int_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Int64Array> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| DatagenError::Schema(format!("missing column {}", name)))?;
    if column.null_count() > 0 {
        return Err(DatagenError::Schema(format!("null values in {}", name)));
    }
    column
        .as_any()
        .downcast_ref::<Int64Array>()
        .ok_or_else(|| {
            DatagenError::Schema(format!(
                "column {} is {}, expected Int64",
                name,
                column.data_type()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::ArrayRef;
    use arrow::datatypes::{DataType, Field, Schema};
    use parquet::arrow::ArrowWriter;

    #[test]
    fn test_missing_column_is_schema_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("partial.parquet");

        let schema = Arc::new(Schema::new(vec![Field::new(
            GENOME_ID,
            DataType::Utf8,
            false,
        )]));
        let ids: ArrayRef = Arc::new(StringArray::from(vec!["G0001"]));
        let batch = RecordBatch::try_new(schema.clone(), vec![ids]).unwrap();

        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = read_parquet(&path).unwrap_err();
        assert!(matches!(err, DatagenError::Schema(_)), "{}", err);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("absent.json");
        assert!(matches!(
            read_json_lines(&missing),
            Err(DatagenError::Io { .. })
        ));
        assert!(matches!(
            read_parquet(&missing),
            Err(DatagenError::Io { .. })
        ));
    }

    #[test]
    fn test_json_lines_skips_blank_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("rows.json");
        fs::write(
            &path,
            concat!(
                r#"{"genome_id":"G0001","gene_name":"recA","sequence":"ACGT","start_position":10,"end_position":14,"gtdb_taxonomy_id":102}"#,
                "\n\n"
            ),
        )
        .unwrap();

        let records = read_json_lines(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gene_name, "recA");
        assert_eq!(records[0].end_position, 14);
    }

    #[test]
    fn test_malformed_json_line_is_json_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{\"genome_id\": 5}\n").unwrap();
        assert!(matches!(read_json_lines(&path), Err(DatagenError::Json(_))));
    }
}
