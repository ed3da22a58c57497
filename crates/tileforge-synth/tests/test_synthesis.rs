//! End-to-end synthesis properties: determinism, creative-freedom
//! divergence, channel independence, and precondition enforcement.

use tileforge_spec::{GenerationSettings, MapChannel};
use tileforge_synth::{
    compose_channel, derive_seed, recipe_for, synthesize_field, LcgSource, SynthesisError,
    CHANNEL_RECIPES,
};

// ============================================================================
// Determinism
// ============================================================================

/// The deterministic baseline scenario: derive(42, 50, false) = 5042,
/// albedo scale 4 + 50/20 = 6.5, 6 octaves, byte-identical across calls.
#[test]
fn test_deterministic_baseline_scenario() {
    let derived = derive_seed(42, 50, false);
    assert_eq!(derived, 5042);

    let first = synthesize_field(96, 54, derived, 6.5, 6).unwrap();
    let second = synthesize_field(96, 54, derived, 6.5, 6).unwrap();
    assert_eq!(first, second, "identical calls must match bit-for-bit");
}

/// Two sources from one seed stay in lockstep indefinitely.
#[test]
fn test_source_streams_are_reproducible() {
    let mut a = LcgSource::new(5042);
    let mut b = LcgSource::new(5042);
    for _ in 0..10_000 {
        assert_eq!(a.next_f64(), b.next_f64());
    }
}

/// Composed maps (field + post-process + encoding) are reproducible when
/// creative freedom is off.
#[test]
fn test_composed_maps_are_reproducible() {
    let settings = GenerationSettings::new("stone", 7, 35);
    for recipe in &CHANNEL_RECIPES {
        let a = compose_channel(recipe, &settings, 48, 27).unwrap();
        let b = compose_channel(recipe, &settings, 48, 27).unwrap();
        assert_eq!(a.png, b.png, "{} must be reproducible", recipe.channel);
    }
}

// ============================================================================
// Creative freedom
// ============================================================================

/// With the toggle on, derived seeds almost surely differ across calls;
/// nothing may ever require equality.
#[test]
fn test_creative_freedom_diverges_across_calls() {
    let first = derive_seed(42, 50, true);
    let diverged = (0..32).any(|_| derive_seed(42, 50, true) != first);
    assert!(diverged, "creative freedom should re-randomize derived seeds");
}

/// The toggle only widens the seed; the deterministic floor still holds.
#[test]
fn test_creative_freedom_bounds() {
    // floor boost = floor(50 * 1.5 * 150) = 11250, randomness < 900.
    for _ in 0..50 {
        let derived = derive_seed(42, 50, true);
        assert!((11_292..12_192).contains(&derived));
    }
}

// ============================================================================
// Channel independence
// ============================================================================

/// The five channel offsets guarantee pairwise distinct derived seeds.
#[test]
fn test_channel_seeds_pairwise_distinct() {
    let settings = GenerationSettings::new("metal", 42, 50);
    let seeds: Vec<u64> = CHANNEL_RECIPES
        .iter()
        .map(|r| r.derived_seed(&settings))
        .collect();

    for i in 0..seeds.len() {
        for j in (i + 1)..seeds.len() {
            assert_ne!(seeds[i], seeds[j]);
        }
    }
}

/// No two channels produce bit-identical noise fields.
#[test]
fn test_channel_fields_not_identical() {
    let settings = GenerationSettings::new("metal", 42, 50);
    let fields: Vec<Vec<u8>> = CHANNEL_RECIPES
        .iter()
        .map(|r| {
            synthesize_field(
                48,
                27,
                r.derived_seed(&settings),
                r.base_scale(settings.variation),
                r.octaves,
            )
            .unwrap()
            .data
        })
        .collect();

    for i in 0..fields.len() {
        for j in (i + 1)..fields.len() {
            assert_ne!(fields[i], fields[j]);
        }
    }
}

// ============================================================================
// Variation effect
// ============================================================================

/// Increasing variation strictly increases the effective scale of every
/// channel.
#[test]
fn test_variation_monotonically_raises_scale() {
    for &channel in MapChannel::all() {
        let recipe = recipe_for(channel);
        for variation in 0..100 {
            assert!(recipe.base_scale(variation + 1) > recipe.base_scale(variation));
        }
    }
}

// ============================================================================
// Ranges and preconditions
// ============================================================================

/// Fields are well-formed for octave counts 1 through 8 and assorted
/// fractional scales.
#[test]
fn test_octave_and_scale_sweep() {
    for octaves in 1..=8 {
        for scale in [0.5, 1.0, 6.5, 10.0, 25.0] {
            let field = synthesize_field(24, 24, 42, scale, octaves).unwrap();
            assert_eq!(field.data.len(), 24 * 24);
        }
    }
}

/// Invalid dimensions and octave counts are rejected, never clamped.
#[test]
fn test_preconditions_fail_fast() {
    assert!(matches!(
        synthesize_field(0, 10, 42, 4.0, 4),
        Err(SynthesisError::InvalidParameter(_))
    ));
    assert!(matches!(
        synthesize_field(10, 0, 42, 4.0, 4),
        Err(SynthesisError::InvalidParameter(_))
    ));
    assert!(matches!(
        synthesize_field(10, 10, 42, 4.0, 0),
        Err(SynthesisError::InvalidParameter(_))
    ));
    assert!(matches!(
        synthesize_field(10, 10, 42, -2.0, 4),
        Err(SynthesisError::InvalidParameter(_))
    ));
}
