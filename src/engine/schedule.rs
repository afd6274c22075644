//! Deferred resolution in virtual time.
//!
//! Two face-up cards resolve after a fixed delay. The engine never sleeps:
//! it hands out a [`ResolutionTicket`] and whoever owns the clock redeems it
//! once the delay has elapsed. A ticket names the game generation and turn
//! it was issued for, so redeeming it after a reset does nothing.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Claim on one pending resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Game generation the ticket was issued in.
    pub generation: u64,
    /// Turn number the ticket resolves.
    pub turn: u32,
}

impl ResolutionTicket {
    /// Create a new ticket.
    #[must_use]
    pub const fn new(generation: u64, turn: u32) -> Self {
        Self { generation, turn }
    }
}

impl std::fmt::Display for ResolutionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ticket(gen {}, turn {})", self.generation, self.turn)
    }
}

/// Min-heap of tickets keyed by due time.
///
/// Ties fire in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<(Duration, u64, ResolutionTicket)>>,
    next_seq: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `ticket` to fire at `due_at`.
    pub fn schedule(&mut self, due_at: Duration, ticket: ResolutionTicket) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse((due_at, seq, ticket)));
    }

    /// Remove and return every ticket due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Duration) -> Vec<ResolutionTicket> {
        let mut due = Vec::new();
        while let Some(Reverse((due_at, _, ticket))) = self.heap.peek().copied() {
            if due_at > now {
                break;
            }
            self.heap.pop();
            due.push(ticket);
        }
        due
    }

    /// Due time of the earliest pending ticket.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse((due_at, _, _))| *due_at)
    }

    /// Drop every pending ticket.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Number of pending tickets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_pop_due_respects_time() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(1000), ResolutionTicket::new(1, 1));

        assert!(queue.pop_due(ms(999)).is_empty());
        assert_eq!(queue.next_due(), Some(ms(1000)));

        assert_eq!(queue.pop_due(ms(1000)), vec![ResolutionTicket::new(1, 1)]);
        assert!(queue.is_empty());
        assert_eq!(queue.next_due(), None);
    }

    #[test]
    fn test_pop_due_orders_by_time_then_schedule() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(300), ResolutionTicket::new(1, 3));
        queue.schedule(ms(100), ResolutionTicket::new(1, 1));
        queue.schedule(ms(300), ResolutionTicket::new(2, 1));

        assert_eq!(queue.len(), 3);
        assert_eq!(
            queue.pop_due(ms(500)),
            vec![
                ResolutionTicket::new(1, 1),
                ResolutionTicket::new(1, 3),
                ResolutionTicket::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_clear() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(10), ResolutionTicket::new(1, 1));
        queue.clear();

        assert!(queue.pop_due(ms(100)).is_empty());
    }

    #[test]
    fn test_ticket_display() {
        assert_eq!(format!("{}", ResolutionTicket::new(3, 7)), "Ticket(gen 3, turn 7)");
    }
}
