//! Game bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::core::{CardId, GameConfig, ValuePolicy};
use crate::engine::{GameEvent, GameSession};

use super::py_core::{to_py_err, PyCard};

/// Python wrapper for a game session.
///
/// The caller forwards taps with `tap()` and drives time with `advance()`.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    session: GameSession,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - pair_count: Number of matching pairs
    /// - resolution_delay_ms: How long two face-up cards stay visible
    /// - distinct_values: Guarantee each value appears exactly twice
    /// - seed: RNG seed for deterministic deals
    #[new]
    #[pyo3(signature = (
        pair_count = 6,
        resolution_delay_ms = 1000,
        distinct_values = true,
        seed = 42
    ))]
    fn new(
        pair_count: usize,
        resolution_delay_ms: u64,
        distinct_values: bool,
        seed: u64,
    ) -> PyResult<Self> {
        let policy = if distinct_values {
            ValuePolicy::Distinct
        } else {
            ValuePolicy::Independent
        };
        let config = GameConfig::new(pair_count)
            .with_resolution_delay(Duration::from_millis(resolution_delay_ms))
            .with_value_policy(policy);
        let session = GameSession::new(config, seed).map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Reveal a card. Returns true if the tap changed state.
    fn tap(&mut self, card_id: u32) -> bool {
        self.session.tap(CardId::new(card_id)).is_accepted()
    }

    /// Advance the clock. Returns how many resolutions fired.
    fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.session.advance(Duration::from_millis(elapsed_ms)).len()
    }

    /// Deal again with the same pair count.
    fn restart(&mut self) -> PyResult<()> {
        self.session.restart().map_err(to_py_err)?;
        Ok(())
    }

    /// Deal a new game with a different pair count.
    fn new_game(&mut self, pair_count: usize) -> PyResult<()> {
        self.session.new_game(pair_count).map_err(to_py_err)?;
        Ok(())
    }

    /// Cards in deck order.
    fn deck(&self) -> Vec<PyCard> {
        self.session.state().deck().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn turn_count(&self) -> u32 {
        self.session.state().turn_count()
    }

    #[getter]
    fn matched_pair_count(&self) -> usize {
        self.session.state().matched_pair_count()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.session.state().is_complete()
    }

    #[getter]
    fn input_locked(&self) -> bool {
        self.session.state().input_locked()
    }

    /// Drain events and report whether the game completed since the last call.
    fn take_completion(&mut self) -> bool {
        self.session
            .drain_events()
            .iter()
            .any(GameEvent::is_completion)
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "MemoryGame(pairs={}, found={}, turns={}, phase={:?})",
            state.pair_count(),
            state.matched_pair_count(),
            state.turn_count(),
            state.phase()
        )
    }
}
