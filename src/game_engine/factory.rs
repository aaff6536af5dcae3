use rand::Rng;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::hardcoded;
use crate::game_engine::levels::{level1, level2, level3, level4, level5, level6};
use crate::game_engine::models::{ChallengeSource, Range};

/// Number of difficulty levels, indexed 0..=5.
pub const NUM_LEVELS: usize = 6;

/// Core dispatch: builds one shuffled challenge set for `level`.
///
/// Panics on an out-of-range level. Each schedule sizes its pools to cover
/// all of its draws, so generation itself never fails.
pub fn create_challenges<R: Rng>(
    rng: &mut R,
    level: usize,
    source: ChallengeSource,
    x_range: Range,
    y_range: Range,
) -> Vec<Challenge> {
    if source == ChallengeSource::HardCoded {
        return hardcoded::create_challenges(level, x_range, y_range);
    }
    match level {
        0 => level1::generate(rng, x_range, y_range),
        1 => level2::generate(rng, x_range, y_range),
        2 => level3::generate(rng, x_range, y_range),
        3 => level4::generate(rng, x_range, y_range),
        4 => level5::generate(rng, x_range, y_range),
        5 => level6::generate(rng, x_range, y_range),
        _ => panic!("unsupported level: {}", level),
    }
}
