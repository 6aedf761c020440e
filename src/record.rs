// src/record.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// One synthetic genomic entry
///
/// Field order is the column order of the Parquet table and the key order
/// of each JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GenomicRecord {
    pub genome_id: String,
    pub gene_name: String,
    pub sequence: String,
    pub start_position: i64,
    /// Always `start_position + sequence.len()`
    pub end_position: i64,
    pub gtdb_taxonomy_id: i64,
}

