//! Game engine - rules plus the authoritative running score
//!
//! The engine keeps aggregate counts only. Round history, if any, belongs to
//! whoever renders the game.

use tracing::{debug, trace};

use crate::rng::{ChoiceSource, RandomSource};
use crate::rules;
use crate::scoring::Score;
use crate::types::{Choice, InvalidChoice, Outcome};

/// Result of [`GameEngine::play_round`]: the outcome plus the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub outcome: Outcome,
    pub computer: Choice,
}

/// Single-player rock-paper-scissors against a random opponent.
///
/// All mutation goes through `&mut self`; callers sharing an engine across
/// threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct GameEngine<S = RandomSource> {
    source: S,
    score: Score,
}

impl GameEngine<RandomSource> {
    /// Engine whose opponent draws from OS entropy.
    pub fn from_os_rng() -> Self {
        Self::new(RandomSource::from_os_rng())
    }

    /// Engine whose opponent replays the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomSource::seeded(seed))
    }
}

impl Default for GameEngine<RandomSource> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<S: ChoiceSource> GameEngine<S> {
    pub fn new(source: S) -> Self {
        debug_assert!(rules::is_total_and_asymmetric(&rules::WIN_RULES));
        Self {
            source,
            score: Score::default(),
        }
    }

    /// Pick the computer's move. Leaves the score alone.
    pub fn generate_opponent_choice(&mut self) -> Choice {
        self.source.next_choice()
    }

    /// Adjudicate one round and count it.
    ///
    /// Exactly one counter moves per call, so judging the same pair twice
    /// yields the same outcome twice and counts it twice.
    pub fn judge(&mut self, player: Choice, computer: Choice) -> Outcome {
        let outcome = rules::outcome(player, computer);
        self.score.record(outcome);
        trace!(%player, %computer, %outcome, "round judged");
        outcome
    }

    /// [`judge`](Self::judge) for untyped input.
    ///
    /// Both symbols are parsed before anything is counted; on error the score
    /// is untouched.
    pub fn judge_symbols(&mut self, player: &str, computer: &str) -> Result<Outcome, InvalidChoice> {
        let player: Choice = player.parse()?;
        let computer: Choice = computer.parse()?;
        Ok(self.judge(player, computer))
    }

    /// Draw the computer's move, then judge it against `player`.
    pub fn play_round(&mut self, player: Choice) -> RoundOutcome {
        let computer = self.generate_opponent_choice();
        let outcome = self.judge(player, computer);
        RoundOutcome { outcome, computer }
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        debug!(previous = ?self.score, "score reset");
        self.score = Score::default();
    }

    pub fn current_score(&self) -> Score {
        self.score
    }
}
