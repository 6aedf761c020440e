// src/generator.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synthetic genomic record generation
//!
//! Every draw goes through an explicit `Rng`, so a seeded Xoshiro256++ gives
//! a fully reproducible record set.

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::*;
use crate::error::{DatagenError, Result};
use crate::record::GenomicRecord;

/// Configuration for record generation
///
/// Pools and ranges are plain data so callers can swap them out; the
/// defaults reproduce the stock gene and taxonomy sets.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of records to produce
    pub count: usize,
    /// Pool for `gene_name`
    pub gene_names: Vec<String>,
    /// Pool for `gtdb_taxonomy_id`
    pub taxonomy_ids: Vec<i64>,
    /// Inclusive lower bound on sequence length
    pub min_sequence_len: usize,
    /// Inclusive upper bound on sequence length
    pub max_sequence_len: usize,
    /// Start positions are drawn from 1..=max_start_position
    pub max_start_position: i64,
    /// Random seed for reproducible generation (None = use time + urandom)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORD_COUNT,
            gene_names: GENE_NAMES.iter().map(|g| g.to_string()).collect(),
            taxonomy_ids: TAXONOMY_IDS.to_vec(),
            min_sequence_len: MIN_SEQUENCE_LEN,
            max_sequence_len: MAX_SEQUENCE_LEN,
            max_start_position: MAX_START_POSITION,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check that every pool can be drawn from and every range is non-empty
    pub fn validate(&self) -> Result<()> {
        if self.gene_names.is_empty() {
            return Err(DatagenError::InvalidConfig(
                "gene name pool is empty".to_string(),
            ));
        }
        if self.taxonomy_ids.is_empty() {
            return Err(DatagenError::InvalidConfig(
                "taxonomy id pool is empty".to_string(),
            ));
        }
        if self.min_sequence_len > self.max_sequence_len {
            return Err(DatagenError::InvalidConfig(format!(
                "min_sequence_len {} exceeds max_sequence_len {}",
                self.min_sequence_len, self.max_sequence_len
            )));
        }
        if self.max_start_position < 1 {
            return Err(DatagenError::InvalidConfig(format!(
                "max_start_position must be at least 1, got {}",
                self.max_start_position
            )));
        }
        // end_position = start + len must stay representable
        let fits = i64::try_from(self.max_sequence_len)
            .ok()
            .and_then(|len| self.max_start_position.checked_add(len))
            .is_some();
        if !fits {
            return Err(DatagenError::InvalidConfig(format!(
                "max_start_position {} + max_sequence_len {} overflows i64",
                self.max_start_position, self.max_sequence_len
            )));
        }
        Ok(())
    }
}

/// Format a 1-based sequence number as a genome id (`G0001`, `G0042`, ...)
///
/// Numbers above 9999 keep all their digits.
pub fn format_genome_id(n: usize) -> String {
    format!("G{:04}", n)
}

/// Random nucleotide string of exactly `len` characters over `ACGT`
pub fn random_dna<R: Rng + ?Sized>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| DNA_ALPHABET[rng.random_range(0..DNA_ALPHABET.len())] as char)
        .collect()
}

/// Simple API: generate `count` records with the default pools and fresh entropy
///
/// # Example
/// ```rust
/// use genomic_datagen::generate_records_simple;
///
/// let records = generate_records_simple(10);
/// assert_eq!(records.len(), 10);
/// assert_eq!(records[0].genome_id, "G0001");
/// ```
pub fn generate_records_simple(count: usize) -> Vec<GenomicRecord> {
    let config = GeneratorConfig {
        count,
        ..GeneratorConfig::default()
    };
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(generate_call_entropy());
    fill_records(&config, &mut rng)
}

/// Generate `config.count` records from an explicit random source
///
/// Output is a pure function of `(config, rng)`: the same config and an
/// identically seeded RNG yield identical records.
pub fn generate_records<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<GenomicRecord>> {
    config.validate()?;
    Ok(fill_records(config, rng))
}

/// Assumes `config` has been validated
fn fill_records<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<GenomicRecord> {
    tracing::info!(
        "Starting record generation: count={}, genes={}, taxa={}",
        config.count,
        config.gene_names.len(),
        config.taxonomy_ids.len()
    );

    let records: Vec<GenomicRecord> = (1..=config.count)
        .map(|i| draw_record(i, config, rng))
        .collect();

    tracing::debug!("Record generation complete: {} records", records.len());
    records
}

fn draw_record<R: Rng + ?Sized>(
    index: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GenomicRecord {
    let start_position = rng.random_range(1..=config.max_start_position);
    let seq_len = rng.random_range(config.min_sequence_len..=config.max_sequence_len);
    let sequence = random_dna(seq_len, rng);
    let gene_name = config.gene_names[rng.random_range(0..config.gene_names.len())].clone();
    let gtdb_taxonomy_id = config.taxonomy_ids[rng.random_range(0..config.taxonomy_ids.len())];

    let record = GenomicRecord {
        genome_id: format_genome_id(index),
        gene_name,
        sequence,
        start_position,
        end_position: start_position + seq_len as i64,
        gtdb_taxonomy_id,
    };

    tracing::trace!(
        "draw_record: id={}, gene={}, start={}, len={}, taxon={}",
        record.genome_id,
        record.gene_name,
        record.start_position,
        seq_len,
        record.gtdb_taxonomy_id
    );

    record
}

/// Generate per-call entropy from time + urandom
fn generate_call_entropy() -> u64 {
    let time_entropy = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;

    let urandom_entropy: u64 = {
        let mut rng = rand::rng();
        rng.next_u64()
    };

    time_entropy.wrapping_add(urandom_entropy)
}

/// Record generator owning its config and a Xoshiro256++ stream
pub struct RecordGenerator {
    config: GeneratorConfig,
    seed: u64,
    rng: Xoshiro256PlusPlus,
}

impl RecordGenerator {
    /// Validate `config` and seed the RNG from `config.seed` (or fresh entropy)
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(generate_call_entropy);

        tracing::info!(
            "Creating RecordGenerator: count={}, seed={} ({})",
            config.count,
            seed,
            if config.seed.is_some() {
                "deterministic"
            } else {
                "non-deterministic"
            }
        );

        Ok(Self {
            config,
            seed,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        })
    }

    /// Produce the full record set
    ///
    /// Each call continues the RNG stream, so repeated calls give different
    /// records with the same genome ids. Use `set_seed` to replay.
    pub fn generate(&mut self) -> Vec<GenomicRecord> {
        fill_records(&self.config, &mut self.rng)
    }

    /// Set or reset the random seed for subsequent generation
    ///
    /// # Arguments
    /// * `seed` - New seed value, or None to use time+urandom entropy (non-deterministic)
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed.unwrap_or_else(generate_call_entropy);
        self.rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        tracing::debug!(
            "Seed reset: {} (entropy={})",
            if seed.is_some() {
                "deterministic"
            } else {
                "non-deterministic"
            },
            self.seed
        );
    }

    /// Seed currently driving the RNG stream
    pub fn seed(&self) -> u64 {
        self.seed
    }

}
