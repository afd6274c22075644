//! Python bindings for the memory-match engine.
//!
//! Lets a Python front end drive a game session.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(pair_count=6, seed=42)
//! game.tap(0)
//! game.tap(1)
//! game.advance(1000)
//! if game.take_completion():
//!     game.restart()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// memory_match: a memory matching card game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
