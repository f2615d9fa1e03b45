use std::collections::HashSet;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use numvar_core::{OperatorRegistry, PhoneRecord, NEW_NUMBER_TIP};

use crate::blacklist::load_blacklist;
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::normalize::{clean_source, format_tip};
use crate::seed::seed_missing_operators;
use crate::variation::generate_variation;

/// Attempt budget per base number, as a multiple of the requested
/// variation count.
const ATTEMPTS_PER_VARIATION: usize = 10;

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Filtered source rows plus generated rows, shuffled.
    pub records: Vec<PhoneRecord>,
    pub report: GenerationReport,
}

/// Entry point for expanding a source dataset with number variations.
#[derive(Debug, Clone)]
pub struct VariationEngine {
    registry: OperatorRegistry,
    options: GenerateOptions,
}

impl VariationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_registry(OperatorRegistry::default(), options)
    }

    pub fn with_registry(registry: OperatorRegistry, options: GenerateOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Run the full pipeline over `records`.
    ///
    /// Seeds missing operators, normalizes and filters the combined
    /// dataset, generates variations per surviving row, and returns the
    /// shuffled union together with the run report. Per-row problems are
    /// absorbed into report counters; the hard failures are an invalid
    /// `digits_to_vary` and blacklist I/O errors.
    pub fn run(&self, mut records: Vec<PhoneRecord>) -> Result<PipelineOutcome, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self
            .options
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut report = GenerationReport::new(run_id.clone(), seed);
        report.rows_in = records.len() as u64;

        info!(
            run_id = %run_id,
            rows = records.len(),
            variations_per_number = self.options.variations_per_number,
            digits_to_vary = self.options.digits_to_vary,
            seed,
            "pipeline started"
        );

        // Seeds join the source before any filtering so they pass the same
        // validation as real rows.
        let present: HashSet<String> = records
            .iter()
            .map(|record| record.operator.clone())
            .collect();
        let seeds = seed_missing_operators(&present, &self.registry, &mut rng);
        if !seeds.is_empty() {
            info!(run_id = %run_id, seeds = seeds.len(), "seeded missing operators");
        }
        report.seeds_added = seeds.len() as u64;
        records.extend(seeds);

        let blacklist = match &self.options.blacklist_path {
            Some(path) => load_blacklist(path, &self.registry)?,
            None => HashSet::new(),
        };

        let mut survivors = Vec::with_capacity(records.len());
        for mut record in records {
            let Some(phone) = clean_source(&record.phone, &self.registry) else {
                report.rows_dropped_unparsable += 1;
                continue;
            };
            record.phone = phone;
            record.tip = format_tip(&record.tip);

            // Registry-wide check only: a row whose phone carries another
            // operator's prefix survives here and stays in the output, but
            // the per-operator gate below skips it for variation
            // generation.
            if self.registry.matched_prefix(&record.phone).is_none() {
                report.rows_dropped_unclassified += 1;
                continue;
            }
            if blacklist.contains(&record.phone) {
                report.rows_dropped_blacklisted += 1;
                continue;
            }
            survivors.push(record);
        }

        let mut used: HashSet<String> = survivors
            .iter()
            .map(|record| record.phone.clone())
            .collect();
        let mut generated = Vec::new();
        let max_attempts = self.options.variations_per_number * ATTEMPTS_PER_VARIATION;

        for record in &survivors {
            if self
                .registry
                .matched_prefix_for(&record.operator, &record.phone)
                .is_none()
            {
                report.rows_skipped_operator_mismatch += 1;
                continue;
            }

            let mut accepted = 0;
            let mut attempts = 0;
            while accepted < self.options.variations_per_number && attempts < max_attempts {
                attempts += 1;
                report.attempts_total += 1;

                let candidate = generate_variation(
                    &record.phone,
                    self.options.digits_to_vary,
                    &record.operator,
                    &self.registry,
                    &mut rng,
                )?;
                let Some(candidate) = candidate else {
                    continue;
                };
                if used.contains(&candidate) {
                    report.candidates_rejected_duplicate += 1;
                    continue;
                }
                if blacklist.contains(&candidate) {
                    report.candidates_rejected_blacklisted += 1;
                    continue;
                }

                used.insert(candidate.clone());
                generated.push(PhoneRecord::new(candidate, NEW_NUMBER_TIP, &record.operator));
                accepted += 1;
            }

            if accepted < self.options.variations_per_number {
                report.budget_exhausted += 1;
                warn!(
                    base = %record.phone,
                    operator = %record.operator,
                    accepted,
                    requested = self.options.variations_per_number,
                    "attempt budget exhausted"
                );
            }
        }

        report.variations_generated = generated.len() as u64;

        let mut combined = survivors;
        combined.extend(generated);
        combined.shuffle(&mut rng);

        report.rows_out = combined.len() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            rows_out = report.rows_out,
            variations = report.variations_generated,
            dropped = report.rows_dropped_unparsable
                + report.rows_dropped_unclassified
                + report.rows_dropped_blacklisted,
            duration_ms = report.duration_ms,
            "pipeline completed"
        );

        Ok(PipelineOutcome {
            records: combined,
            report,
        })
    }
}
