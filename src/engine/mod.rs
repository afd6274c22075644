//! Game engine: the reveal/resolve state machine and its driver.
//!
//! ## State Machine
//!
//! - `Idle`: zero or one card face-up, reveals accepted
//! - `Resolving`: two cards face-up, input locked until the ticket is redeemed
//! - `Complete`: every card found; only a new deal leaves this state
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{CardId, GameConfig};
//! use memory_match::engine::GameSession;
//!
//! let mut session = GameSession::new(GameConfig::new(2), 42).unwrap();
//!
//! session.tap(CardId::new(0));
//! session.tap(CardId::new(1));
//! assert!(session.state().input_locked());
//! assert_eq!(session.state().turn_count(), 1);
//!
//! session.advance(Duration::from_secs(1));
//! assert!(!session.state().input_locked());
//! ```

mod event;
mod game;
mod schedule;
mod session;

pub use event::{EventLog, GameEvent, DEFAULT_EVENT_CAPACITY};
pub use game::{GameEngine, IgnoreReason, Resolution, RevealOutcome};
pub use schedule::{ResolutionTicket, TimerQueue};
pub use session::GameSession;
