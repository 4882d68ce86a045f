//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules, the opponent's move generation, and the
//! running score. It has no dependency on terminals or any other front-end,
//! which makes it:
//!
//! - **Deterministic**: a seeded or scripted opponent replays identical games
//! - **Testable**: the rule table is checked exhaustively
//! - **Portable**: any front-end can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`engine`]: [`GameEngine`], the only stateful component
//! - [`rules`]: the `(winner, loser)` table and its exhaustiveness check
//! - [`rng`]: injectable opponent move sources
//! - [`scoring`]: the win/loss/tie counters
//!
//! # Game Rules
//!
//! - Rock beats scissors, scissors beats paper, paper beats rock
//! - Equal choices tie
//! - The computer picks uniformly at random, independently every round
//! - Every judged round increments exactly one counter
//!
//! # Example
//!
//! ```
//! use tui_rps_core::{GameEngine, ScriptedSource, Score};
//! use tui_rps_types::{Choice, Outcome};
//!
//! let mut engine = GameEngine::new(ScriptedSource::constant(Choice::Scissors));
//!
//! let round = engine.play_round(Choice::Rock);
//! assert_eq!(round.outcome, Outcome::Win);
//! assert_eq!(round.computer, Choice::Scissors);
//!
//! assert_eq!(engine.judge(Choice::Paper, Choice::Paper), Outcome::Tie);
//! assert_eq!(engine.current_score(), Score::new(1, 0, 1));
//!
//! engine.reset();
//! assert!(engine.current_score().is_zero());
//! ```

pub mod engine;
pub mod rng;
pub mod rules;
pub mod scoring;

pub use tui_rps_types as types;

// Re-export commonly used types for convenience
pub use engine::{GameEngine, RoundOutcome};
pub use rng::{ChoiceSource, RandomSource, ScriptedSource};
pub use rules::{beats, WIN_RULES};
pub use scoring::Score;
