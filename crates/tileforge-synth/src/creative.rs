//! Creative Freedom-B seed transform.
//!
//! Maps a (seed, variation, enabled) triple to the derived seed fed into
//! noise synthesis. The disabled branch is pure arithmetic; the enabled
//! branch mixes in one fresh entropy draw that is deliberately NOT derived
//! from the request seed, so re-running identical settings with the toggle
//! on yields a different field each time. That divergence is the feature's
//! contract, not an accident.

use rand::Rng;

/// Temperature tuning constant for the enabled branch.
pub const TEMPERATURE: f64 = 1.5;

/// Top-P tuning constant for the enabled branch.
pub const TOP_P: f64 = 0.90;

/// Derive the seed for one noise synthesis from a base seed.
///
/// Disabled: `seed + variation * 100`, fully deterministic.
///
/// Enabled: `seed + floor(variation * TEMPERATURE * 150)` plus
/// `floor(r * 1000 * TOP_P)` where `r` is one fresh draw from thread-local
/// entropy. The result is therefore bounded but not reproducible.
pub fn derive_seed(seed: u64, variation: u32, enabled: bool) -> u64 {
    if !enabled {
        return seed + u64::from(variation) * 100;
    }

    let boost = (f64::from(variation) * TEMPERATURE * 150.0).floor() as u64;
    let randomness = (rand::thread_rng().gen::<f64>() * 1000.0 * TOP_P).floor() as u64;
    seed + boost + randomness
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_branch_is_arithmetic() {
        assert_eq!(derive_seed(42, 50, false), 5042);
        assert_eq!(derive_seed(0, 0, false), 0);
        assert_eq!(derive_seed(7, 100, false), 10_007);
    }

    #[test]
    fn test_disabled_branch_is_repeatable() {
        for _ in 0..10 {
            assert_eq!(derive_seed(123, 33, false), derive_seed(123, 33, false));
        }
    }

    #[test]
    fn test_enabled_branch_stays_in_bounds() {
        // boost = floor(50 * 1.5 * 150) = 11250; randomness in [0, 900).
        for _ in 0..100 {
            let derived = derive_seed(42, 50, true);
            assert!(derived >= 42 + 11_250);
            assert!(derived < 42 + 11_250 + 900);
        }
    }

    #[test]
    fn test_enabled_branch_varies_across_calls() {
        // 900 possible offsets; 32 identical draws in a row would be
        // astronomically unlikely.
        let first = derive_seed(42, 50, true);
        let any_different = (0..32).any(|_| derive_seed(42, 50, true) != first);
        assert!(any_different);
    }
}
