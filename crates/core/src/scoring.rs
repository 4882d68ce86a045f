//! Scoring module - running win/loss/tie counters

use crate::types::Outcome;

/// Cumulative counts since the last reset.
///
/// Callers only ever see copies; the engine owns the live value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Score {
    pub player_wins: u64,
    pub computer_wins: u64,
    pub ties: u64,
}

impl Score {
    pub const fn new(player_wins: u64, computer_wins: u64, ties: u64) -> Self {
        Self {
            player_wins,
            computer_wins,
            ties,
        }
    }

    /// Rounds judged since the last reset.
    pub fn total(&self) -> u64 {
        self.player_wins + self.computer_wins + self.ties
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Bump exactly the counter that `outcome` belongs to.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player_wins += 1,
            Outcome::Lose => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}
