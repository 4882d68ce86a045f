//! Bounded, most-recent-first log of played rounds.
//!
//! Purely cosmetic: the engine never reads it.

use std::collections::VecDeque;

use crate::types::{Choice, Outcome, MAX_HISTORY_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

impl RoundRecord {
    /// One-line summary, e.g. `You Rock - Scissors (win)`.
    pub fn describe(&self) -> String {
        format!(
            "You {} - {} ({})",
            self.player.label(),
            self.computer.label(),
            self.outcome
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundHistory {
    entries: VecDeque<RoundRecord>,
    capacity: usize,
}

impl RoundHistory {
    /// Capacity is clamped to `1..=MAX_HISTORY_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.clamp(1, MAX_HISTORY_CAPACITY),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a round at the front, evicting the oldest when full.
    pub fn push(&mut self, record: RoundRecord) {
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(record);
    }

    pub fn latest(&self) -> Option<&RoundRecord> {
        self.entries.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for RoundHistory {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player: Choice, computer: Choice, outcome: Outcome) -> RoundRecord {
        RoundRecord {
            player,
            computer,
            outcome,
        }
    }

    #[test]
    fn newest_first_and_bounded() {
        let mut h = RoundHistory::new(2);
        h.push(record(Choice::Rock, Choice::Scissors, Outcome::Win));
        h.push(record(Choice::Rock, Choice::Paper, Outcome::Lose));
        h.push(record(Choice::Paper, Choice::Paper, Outcome::Tie));

        assert_eq!(h.len(), 2);
        let outcomes: Vec<_> = h.iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, vec![Outcome::Tie, Outcome::Lose]);
        assert_eq!(h.latest().map(|r| r.outcome), Some(Outcome::Tie));
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut h = RoundHistory::new(0);
        assert_eq!(h.capacity(), 1);
        h.push(record(Choice::Rock, Choice::Rock, Outcome::Tie));
        h.push(record(Choice::Paper, Choice::Rock, Outcome::Win));
        assert_eq!(h.len(), 1);
        assert_eq!(h.latest().map(|r| r.player), Some(Choice::Paper));
    }

    #[test]
    fn oversized_capacity_is_capped() {
        let mut h = RoundHistory::new(usize::MAX);
        assert_eq!(h.capacity(), MAX_HISTORY_CAPACITY);
        for _ in 0..MAX_HISTORY_CAPACITY + 5 {
            h.push(record(Choice::Rock, Choice::Paper, Outcome::Lose));
        }
        assert_eq!(h.len(), MAX_HISTORY_CAPACITY);
    }

    #[test]
    fn clear_empties() {
        let mut h = RoundHistory::default();
        assert_eq!(h.capacity(), 3);
        h.push(record(Choice::Rock, Choice::Rock, Outcome::Tie));
        h.clear();
        assert!(h.is_empty());
        assert!(h.latest().is_none());
    }

    #[test]
    fn describe_names_both_moves() {
        let r = record(Choice::Rock, Choice::Scissors, Outcome::Win);
        assert_eq!(r.describe(), "You Rock - Scissors (win)");
    }
}
