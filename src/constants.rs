// src/constants.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Number of records produced when no count is given
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Gene names drawn uniformly for `gene_name`
pub const GENE_NAMES: [&str; 6] = ["16S_rRNA", "gyrB", "recA", "rpoB", "dnaK", "atpD"];

/// GTDB taxonomy ids drawn uniformly for `gtdb_taxonomy_id`
pub const TAXONOMY_IDS: [i64; 4] = [101, 102, 103, 104];

/// Nucleotide alphabet for random sequences
pub const DNA_ALPHABET: &[u8; 4] = b"ACGT";

/// Shortest generated sequence (inclusive)
pub const MIN_SEQUENCE_LEN: usize = 100;

/// Longest generated sequence (inclusive)
pub const MAX_SEQUENCE_LEN: usize = 300;

/// Start positions are drawn from 1..=MAX_START_POSITION
pub const MAX_START_POSITION: i64 = 1_000_000;

/// Output directory used by the CLI when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Columnar output file name
pub const PARQUET_FILE_NAME: &str = "genomic_data.parquet";

/// Line-delimited JSON output file name
pub const JSON_LINES_FILE_NAME: &str = "genomic_data.json";
