//! Core contracts shared across numvar crates.
//!
//! This crate defines the operator prefix registry and the canonical row
//! shape of the working dataset. It has no I/O and no randomness; the
//! pipeline crates build on top of it.

pub mod operators;
pub mod record;

pub use operators::{Operator, OperatorRegistry, PHONE_LEN};
pub use record::{PhoneRecord, NEW_NUMBER_TIP, SEED_TIP};
