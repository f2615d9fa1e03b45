use rand::seq::index;
use rand::Rng;

use numvar_core::{OperatorRegistry, PHONE_LEN};

use crate::errors::GenerationError;
use crate::seed::random_digit;

/// Generate one candidate variation of `base` for `operator`.
///
/// The matched operator prefix stays fixed; `digits_to_vary` distinct
/// positions among the remaining digits are chosen uniformly without
/// replacement and replaced with uniform random digits (a replacement may
/// coincide with the original digit). The fixed/mutable split follows the
/// matched prefix's actual length, so a one-digit prefix leaves seven
/// mutable positions.
///
/// Returns `Ok(None)` when `base` carries none of the operator's prefixes
/// or the rebuilt number fails validation. `digits_to_vary` larger than
/// the mutable width is a hard error. No uniqueness or blacklist checking
/// happens here; that is the pipeline's job.
pub fn generate_variation(
    base: &str,
    digits_to_vary: usize,
    operator: &str,
    registry: &OperatorRegistry,
    rng: &mut impl Rng,
) -> Result<Option<String>, GenerationError> {
    let Some(prefix) = registry.matched_prefix_for(operator, base) else {
        return Ok(None);
    };

    let remainder = &base[prefix.len()..];
    if digits_to_vary > remainder.len() {
        return Err(GenerationError::InvalidDigitsToVary {
            requested: digits_to_vary,
            available: remainder.len(),
            prefix_len: prefix.len(),
        });
    }

    let mut digits: Vec<char> = remainder.chars().collect();
    for pos in index::sample(rng, digits.len(), digits_to_vary) {
        digits[pos] = random_digit(rng);
    }

    let candidate: String = prefix.chars().chain(digits).collect();
    if candidate.len() != PHONE_LEN || registry.matched_prefix_for(operator, &candidate).is_none() {
        return Ok(None);
    }
    Ok(Some(candidate))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn registry() -> OperatorRegistry {
        OperatorRegistry::moldova()
    }

    #[test]
    fn variation_preserves_matched_prefix() {
        let registry = registry();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let candidate = generate_variation("60123456", 3, "Orange", &registry, &mut rng)
                .expect("valid parameters")
                .expect("prefix matches");
            assert_eq!(candidate.len(), PHONE_LEN);
            assert!(candidate.starts_with("60"));
            assert!(candidate.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn varies_exactly_requested_positions_at_most() {
        let registry = registry();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let candidate = generate_variation("76543210", 2, "Moldcell", &registry, &mut rng)
                .expect("valid parameters")
                .expect("prefix matches");
            let differing = candidate
                .chars()
                .zip("76543210".chars())
                .filter(|(a, b)| a != b)
                .count();
            // Replacement digits may coincide with the originals.
            assert!(differing <= 2, "{candidate} differs in {differing} digits");
        }
    }

    #[test]
    fn prefix_mismatch_yields_none() {
        let registry = registry();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result =
            generate_variation("76123456", 2, "Orange", &registry, &mut rng).expect("no error");
        assert!(result.is_none());
    }

    #[test]
    fn single_digit_prefix_leaves_seven_mutable_positions() {
        let registry = registry();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        // Moldtelecom's prefix is "2": seven digits may vary.
        let candidate = generate_variation("21234567", 7, "Moldtelecom", &registry, &mut rng)
            .expect("seven mutable digits")
            .expect("prefix matches");
        assert!(candidate.starts_with('2'));

        let err = generate_variation("21234567", 8, "Moldtelecom", &registry, &mut rng)
            .expect_err("eight exceeds the mutable width");
        assert!(matches!(
            err,
            GenerationError::InvalidDigitsToVary {
                requested: 8,
                available: 7,
                prefix_len: 1,
            }
        ));
    }

    #[test]
    fn digits_to_vary_beyond_two_digit_prefix_width_errors() {
        let registry = registry();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let err = generate_variation("60123456", 7, "Orange", &registry, &mut rng)
            .expect_err("six mutable digits behind a two-digit prefix");
        assert!(matches!(
            err,
            GenerationError::InvalidDigitsToVary {
                requested: 7,
                available: 6,
                prefix_len: 2,
            }
        ));
    }

    #[test]
    fn zero_digits_to_vary_reproduces_the_base() {
        let registry = registry();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let candidate = generate_variation("67123456", 0, "Unite", &registry, &mut rng)
            .expect("valid parameters")
            .expect("prefix matches");
        assert_eq!(candidate, "67123456");
    }
}
