//! The front-end's side of a game: the engine plus the on-screen history.
//!
//! Every round goes `generate_opponent_choice` then `judge`, and the history
//! is cleared together with the score.

use tracing::info;

use crate::core::{ChoiceSource, GameEngine, RandomSource};
use crate::term::{RoundHistory, RoundRecord, TableSnapshot};
use crate::types::{Choice, GameAction};

pub struct Session<S = RandomSource> {
    engine: GameEngine<S>,
    history: RoundHistory,
}

impl<S: ChoiceSource> Session<S> {
    pub fn new(engine: GameEngine<S>, history_capacity: usize) -> Self {
        Self {
            engine,
            history: RoundHistory::new(history_capacity),
        }
    }

    /// Apply one player action. Returns the round played, if any.
    pub fn apply(&mut self, action: GameAction) -> Option<RoundRecord> {
        match action {
            GameAction::Play(choice) => Some(self.play(choice)),
            GameAction::Reset => {
                self.reset();
                None
            }
        }
    }

    pub fn play(&mut self, player: Choice) -> RoundRecord {
        let round = self.engine.play_round(player);
        let record = RoundRecord {
            player,
            computer: round.computer,
            outcome: round.outcome,
        };
        self.history.push(record);

        let score = self.engine.current_score();
        info!(
            player = player.glyph(),
            computer = round.computer.glyph(),
            outcome = %round.outcome,
            wins = score.player_wins,
            losses = score.computer_wins,
            ties = score.ties,
            "round played"
        );
        record
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.history.clear();
        info!("score reset");
    }

    pub fn snapshot(&self) -> TableSnapshot<'_> {
        TableSnapshot::new(self.engine.current_score(), &self.history)
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }
}
