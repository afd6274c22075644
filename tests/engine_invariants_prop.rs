//! Property tests for engine invariants.
//!
//! Random seeds, pair counts and tap sequences are generated and the engine
//! is driven through them. Invariants covered:
//! - Dealt decks have `2k` cards, ids equal positions, each value twice
//! - A repeated tap on the same card is a no-op
//! - No reveal is accepted while a resolution is pending
//! - Turns advance once per resolved pair, never per single reveal
//! - Matched pairs never go back, and completion is announced at most once

use proptest::prelude::*;

use memory_match::core::{CardId, GameConfig, GamePhase, GameState};
use memory_match::engine::{GameEngine, GameEvent, IgnoreReason, RevealOutcome};

fn assert_state_consistent(state: &GameState) {
    let found = state.deck().iter().filter(|c| c.is_found).count();
    let visible = state.deck().iter().filter(|c| c.is_visible).count();

    assert_eq!(found % 2, 0);
    assert_eq!(state.matched_pair_count(), found / 2);
    assert_eq!(visible, state.visible_cards().len());
    assert!(visible <= 2);
    assert!(state.deck().iter().all(|c| !(c.is_found && c.is_visible)));
    assert_eq!(state.input_locked(), visible == 2);
    assert_eq!(state.is_complete(), found == state.deck_len());
}

proptest! {
    #[test]
    fn dealt_deck_has_two_of_each_value(seed in any::<u64>(), pair_count in 1usize..=99) {
        let engine = GameEngine::new(GameConfig::new(pair_count), seed).unwrap();
        let state = engine.state();

        prop_assert_eq!(state.deck_len(), pair_count * 2);
        for (position, card) in state.deck().iter().enumerate() {
            prop_assert_eq!(card.id.index(), position);
            prop_assert!((1..=99).contains(&card.value));
        }

        let counts = state.value_counts();
        prop_assert_eq!(counts.len(), pair_count);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert_eq!(state.phase(), GamePhase::Idle);
    }

    #[test]
    fn repeated_tap_is_noop(seed in any::<u64>(), pair_count in 1usize..20, pick in any::<u32>()) {
        let mut engine = GameEngine::new(GameConfig::new(pair_count), seed).unwrap();
        let id = CardId::new(pick % (pair_count as u32 * 2));

        prop_assert_eq!(engine.reveal(id), RevealOutcome::Revealed);
        let after_first = engine.snapshot();

        prop_assert_eq!(
            engine.reveal(id),
            RevealOutcome::Ignored(IgnoreReason::AlreadyVisible)
        );
        prop_assert_eq!(engine.state(), &after_first);
    }

    #[test]
    fn random_taps_respect_invariants(
        seed in any::<u64>(),
        pair_count in 1usize..12,
        taps in prop::collection::vec((any::<u32>(), any::<bool>()), 1..200),
    ) {
        let mut engine = GameEngine::new(GameConfig::new(pair_count), seed).unwrap();
        let deck_len = pair_count as u32 * 2;
        let mut pending = None;
        let mut resolved_turns = 0u32;
        let mut completions = 0usize;

        for (pick, redeem) in taps {
            // Occasionally aim past the deck to exercise unknown ids.
            let id = CardId::new(pick % (deck_len + 1));
            let before = engine.snapshot();
            let outcome = engine.reveal(id);

            match outcome {
                RevealOutcome::Ignored(reason) => {
                    prop_assert_eq!(engine.state(), &before);
                    if before.input_locked() {
                        prop_assert_eq!(reason, IgnoreReason::InputLocked);
                    }
                }
                RevealOutcome::Revealed => {
                    prop_assert_eq!(engine.state().turn_count(), before.turn_count());
                }
                RevealOutcome::ResolutionPending(ticket) => {
                    prop_assert_eq!(engine.state().turn_count(), before.turn_count() + 1);
                    prop_assert!(engine.state().input_locked());
                    pending = Some(ticket);
                }
            }

            if redeem {
                if let Some(ticket) = pending.take() {
                    let matched_before = engine.state().matched_pair_count();
                    let resolution = engine.resolve(ticket).unwrap();
                    resolved_turns += 1;

                    let expected = matched_before + usize::from(resolution.matched);
                    prop_assert_eq!(engine.state().matched_pair_count(), expected);
                    prop_assert!(engine.resolve(ticket).is_none());
                }
            }

            assert_state_consistent(engine.state());
            completions += engine
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::GameCompleted { .. }))
                .count();
        }

        prop_assert!(completions <= 1);
        prop_assert_eq!(completions == 1, engine.state().is_complete());
        let outstanding = u32::from(pending.is_some());
        prop_assert_eq!(engine.state().turn_count(), resolved_turns + outstanding);
    }

    #[test]
    fn reset_always_yields_fresh_game(seed in any::<u64>(), pair_count in 1usize..20, taps in 0usize..10) {
        let mut engine = GameEngine::new(GameConfig::new(pair_count), seed).unwrap();
        for i in 0..taps {
            engine.reveal(CardId::new(i as u32));
        }
        let stale = engine.pending_ticket();

        let state = engine.reset().unwrap().clone();
        prop_assert_eq!(state.deck_len(), pair_count * 2);
        prop_assert_eq!(state.turn_count(), 0);
        prop_assert_eq!(state.phase(), GamePhase::Idle);

        if let Some(ticket) = stale {
            prop_assert!(engine.resolve(ticket).is_none());
            prop_assert_eq!(engine.state(), &state);
        }
    }
}
