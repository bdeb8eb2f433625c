//! Option set building: the target color plus distinct random decoys.
//!
//! Decoys are drawn with an accept-if-absent check. A run of rejected
//! draws longer than `max_draw_attempts` switches to a deterministic walk
//! through the color space, so the builder terminates even with a
//! degenerate random source.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use crate::color::random_color;
use crate::error::BuildError;
use crate::types::{COLOR_SPACE, HexColor, OptionConfig};

/// Build `count` distinct colors, one of which is `correct`, in random order.
///
/// # Errors
/// Returns [`BuildError::TooManyOptions`] if `count` is zero or larger
/// than the 24-bit color space.
pub fn build_options<R: Rng>(
    correct: HexColor,
    count: usize,
    config: &OptionConfig,
    rng: &mut R,
) -> Result<Vec<HexColor>, BuildError> {
    if count == 0 || count > COLOR_SPACE {
        return Err(BuildError::TooManyOptions(count));
    }

    let max_attempts = config.max_draw_attempts.max(1);
    let mut options = Vec::with_capacity(count);
    let mut seen = HashSet::with_capacity(count);
    options.push(correct);
    seen.insert(correct);

    let mut rejected = 0u32;
    while options.len() < count {
        let candidate = random_color(rng);
        if seen.insert(candidate) {
            options.push(candidate);
            rejected = 0;
            continue;
        }

        rejected += 1;
        if rejected >= max_attempts {
            let fresh = next_absent(candidate, &seen);
            warn!(
                rejected,
                fallback = %fresh,
                "random source keeps repeating colors, walking the color space"
            );
            seen.insert(fresh);
            options.push(fresh);
            rejected = 0;
        }
    }

    options.shuffle(rng);
    Ok(options)
}

/// First color after `start` (wrapping) that is not in `seen`.
///
/// Callers guarantee `seen` is smaller than the color space.
fn next_absent(start: HexColor, seen: &HashSet<HexColor>) -> HexColor {
    let mut color = start.wrapping_next();
    while seen.contains(&color) {
        color = color.wrapping_next();
    }
    color
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameMode;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// A random source that only ever produces zero bits.
    struct StuckRng;

    impl RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn assert_valid(options: &[HexColor], correct: HexColor, count: usize) {
        assert_eq!(options.len(), count);
        let unique: HashSet<_> = options.iter().collect();
        assert_eq!(unique.len(), count, "duplicates in {:?}", options);
        assert_eq!(options.iter().filter(|&&c| c == correct).count(), 1);
    }

    #[test]
    fn every_mode_gets_a_valid_option_set() {
        let mut rng = StdRng::seed_from_u64(11);
        for mode in GameMode::ALL {
            for _ in 0..50 {
                let correct = random_color(&mut rng);
                let options =
                    build_options(correct, mode.option_count(), &OptionConfig::default(), &mut rng)
                        .unwrap();
                assert_valid(&options, correct, mode.option_count());
                for c in &options {
                    let s = c.to_string();
                    assert_eq!(s.len(), 7);
                    assert!(s[1..].chars().all(|ch| matches!(ch, '0'..='9' | 'a'..='f')));
                }
            }
        }
    }

    #[test]
    fn single_option_is_just_the_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let correct = HexColor::from_u32(0x123456);
        let options = build_options(correct, 1, &OptionConfig::default(), &mut rng).unwrap();
        assert_eq!(options, vec![correct]);
    }

    #[test]
    fn zero_options_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = build_options(HexColor::from_u32(0), 0, &OptionConfig::default(), &mut rng);
        assert_eq!(result, Err(BuildError::TooManyOptions(0)));
    }

    #[test]
    fn more_options_than_colors_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = build_options(
            HexColor::from_u32(0),
            COLOR_SPACE + 1,
            &OptionConfig::default(),
            &mut rng,
        );
        assert_eq!(result, Err(BuildError::TooManyOptions(COLOR_SPACE + 1)));
    }

    #[test]
    fn stuck_random_source_still_terminates_with_distinct_colors() {
        let correct = HexColor::from_u32(0);
        let config = OptionConfig { max_draw_attempts: 4 };
        let options = build_options(correct, 10, &config, &mut StuckRng).unwrap();
        assert_valid(&options, correct, 10);
    }

    #[test]
    fn zero_attempt_budget_behaves_like_one() {
        let correct = HexColor::from_u32(0);
        let config = OptionConfig { max_draw_attempts: 0 };
        let options = build_options(correct, 6, &config, &mut StuckRng).unwrap();
        assert_valid(&options, correct, 6);
    }

    #[test]
    fn next_absent_skips_taken_colors_and_wraps() {
        let seen: HashSet<_> = [0xFF_FFFF, 0, 1].into_iter().map(HexColor::from_u32).collect();
        let next = next_absent(HexColor::from_u32(0xFF_FFFE), &seen);
        assert_eq!(next, HexColor::from_u32(2));
    }

    #[test]
    fn target_position_varies_across_rounds() {
        let mut rng = StdRng::seed_from_u64(99);
        let positions: HashSet<usize> = (0..200)
            .map(|_| {
                let correct = random_color(&mut rng);
                let options = build_options(correct, 4, &OptionConfig::default(), &mut rng).unwrap();
                options.iter().position(|&c| c == correct).unwrap()
            })
            .collect();
        assert_eq!(positions.len(), 4, "target should land in every slot");
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // 4000 rounds over 4 slots: each slot expects 1000.
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let correct = random_color(&mut rng);
            let options = build_options(correct, 4, &OptionConfig::default(), &mut rng).unwrap();
            counts[options.iter().position(|&c| c == correct).unwrap()] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed slots: {:?}", counts);
        }
    }
}
