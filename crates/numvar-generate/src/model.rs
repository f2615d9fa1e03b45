use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Variations to generate per surviving source number.
    pub variations_per_number: usize,
    /// Digit positions to vary behind the operator prefix.
    pub digits_to_vary: usize,
    /// Blacklist CSV location; `None` or a missing file means an empty
    /// blacklist.
    pub blacklist_path: Option<PathBuf>,
    /// RNG seed for reproducible runs; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            variations_per_number: 5,
            digits_to_vary: 3,
            blacklist_path: None,
            seed: None,
        }
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    /// Seed the run's RNG was built from; replaying it reproduces the run.
    pub seed: u64,
    pub rows_in: u64,
    pub seeds_added: u64,
    pub rows_dropped_unparsable: u64,
    pub rows_dropped_unclassified: u64,
    pub rows_dropped_blacklisted: u64,
    /// Rows kept in the output whose phone does not match their own
    /// operator's prefixes; no variations were generated for them.
    pub rows_skipped_operator_mismatch: u64,
    pub variations_generated: u64,
    pub attempts_total: u64,
    pub candidates_rejected_duplicate: u64,
    pub candidates_rejected_blacklisted: u64,
    /// Base numbers whose attempt budget ran out before reaching the
    /// requested variation count.
    pub budget_exhausted: u64,
    pub rows_out: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            rows_in: 0,
            seeds_added: 0,
            rows_dropped_unparsable: 0,
            rows_dropped_unclassified: 0,
            rows_dropped_blacklisted: 0,
            rows_skipped_operator_mismatch: 0,
            variations_generated: 0,
            attempts_total: 0,
            candidates_rejected_duplicate: 0,
            candidates_rejected_blacklisted: 0,
            budget_exhausted: 0,
            rows_out: 0,
            duration_ms: 0,
        }
    }
}
