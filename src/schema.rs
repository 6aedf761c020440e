// src/schema.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Arrow schema for the genomic record table

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};

pub const GENOME_ID: &str = "genome_id";
pub const GENE_NAME: &str = "gene_name";
pub const SEQUENCE: &str = "sequence";
pub const START_POSITION: &str = "start_position";
pub const END_POSITION: &str = "end_position";
pub const GTDB_TAXONOMY_ID: &str = "gtdb_taxonomy_id";

/// Column layout shared by the writer and the reader, in record field order
pub fn record_schema() -> Schema {
    Schema::new(vec![
        Field::new(GENOME_ID, DataType::Utf8, false),
        Field::new(GENE_NAME, DataType::Utf8, false),
        Field::new(SEQUENCE, DataType::Utf8, false),
        Field::new(START_POSITION, DataType::Int64, false),
        Field::new(END_POSITION, DataType::Int64, false),
        Field::new(GTDB_TAXONOMY_ID, DataType::Int64, false),
    ])
}

pub fn record_schema_ref() -> SchemaRef {
    Arc::new(record_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order() {
        let schema = record_schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(
            names,
            vec![
                GENOME_ID,
                GENE_NAME,
                SEQUENCE,
                START_POSITION,
                END_POSITION,
                GTDB_TAXONOMY_ID
            ]
        );
        assert!(schema.fields().iter().all(|f| !f.is_nullable()));
    }
}
