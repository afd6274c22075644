//! Dealing a fresh deck.
//!
//! A deal draws one value per pair, doubles the sequence so each drawn
//! value appears twice, and applies a uniform permutation. Card ids are
//! the positions after shuffling.

use super::card::{Card, CardId};
use super::config::{GameConfig, ValuePolicy};
use super::error::{EngineError, EngineResult};
use super::rng::{range_len, GameRng};

/// Deal a fully hidden deck of `config.deck_len()` cards.
pub fn deal(config: &GameConfig, rng: &mut GameRng) -> EngineResult<Vec<Card>> {
    config.validate()?;

    let values = draw_values(config, rng)?;
    let doubled: Vec<u8> = values.iter().chain(values.iter()).copied().collect();
    let slots = shuffled_slots(doubled.len(), rng);

    Ok(slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| Card::new(CardId::new(position as u32), doubled[slot]))
        .collect())
}

/// Draw one value per pair according to the configured policy.
fn draw_values(config: &GameConfig, rng: &mut GameRng) -> EngineResult<Vec<u8>> {
    let range = config.value_range();
    match config.value_policy {
        ValuePolicy::Distinct => {
            rng.sample_distinct(range.clone(), config.pair_count)
                .ok_or(EngineError::NotEnoughValues {
                    requested: config.pair_count,
                    available: range_len(&range),
                })
        }
        ValuePolicy::Independent => Ok((0..config.pair_count)
            .map(|_| rng.gen_value(range.clone()))
            .collect()),
    }
}

/// Uniform permutation of `0..len`.
///
/// Entry `i` is the pre-shuffle slot that lands at deck position `i`.
pub(crate) fn shuffled_slots(len: usize, rng: &mut GameRng) -> Vec<usize> {
    let mut slots: Vec<usize> = (0..len).collect();
    rng.shuffle(&mut slots);
    slots
}
