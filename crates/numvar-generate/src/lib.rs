//! Variation generation pipeline for numvar.
//!
//! Consumes a `Phone,Tip,Operator` dataset and produces an expanded dataset
//! containing the cleaned source rows plus synthetic variation numbers per
//! row, seed records for operators missing from the source, and nothing
//! that appears on the blacklist.

pub mod blacklist;
pub mod engine;
pub mod errors;
pub mod io;
pub mod model;
pub mod normalize;
pub mod seed;
pub mod variation;

pub use engine::{PipelineOutcome, VariationEngine};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
