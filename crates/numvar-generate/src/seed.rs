use std::collections::HashSet;

use rand::Rng;

use numvar_core::{OperatorRegistry, PhoneRecord, PHONE_LEN, SEED_TIP};

/// Placeholder records fabricated per missing prefix.
const SEEDS_PER_PREFIX: usize = 2;

/// Fabricate placeholder records for registered operators absent from the
/// source dataset.
///
/// Each missing operator gets [`SEEDS_PER_PREFIX`] records per registered
/// prefix: the prefix followed by uniformly random digits up to the
/// canonical width, with the seed tip. Seeds are appended to the source
/// before normalization so they pass the same validation as real rows and
/// can serve as variation bases themselves.
pub fn seed_missing_operators(
    present: &HashSet<String>,
    registry: &OperatorRegistry,
    rng: &mut impl Rng,
) -> Vec<PhoneRecord> {
    let mut seeds = Vec::new();
    for operator in registry.operators() {
        if present.contains(&operator.name) {
            continue;
        }
        for prefix in &operator.prefixes {
            for _ in 0..SEEDS_PER_PREFIX {
                let mut phone = prefix.clone();
                while phone.len() < PHONE_LEN {
                    phone.push(random_digit(rng));
                }
                seeds.push(PhoneRecord::new(phone, SEED_TIP, &operator.name));
            }
        }
    }
    seeds
}

pub(crate) fn random_digit(rng: &mut impl Rng) -> char {
    char::from(b'0' + rng.random_range(0..10u8))
}
