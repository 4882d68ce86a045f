//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, terminal rendering, tests).
//!
//! # Choices
//!
//! The game has exactly three symbols, in a fixed order:
//!
//! | Index | Choice | Glyph | Beats |
//! |-------|--------|-------|-------|
//! | 0 | `Rock` | ✊ | `Scissors` |
//! | 1 | `Scissors` | ✌️ | `Paper` |
//! | 2 | `Paper` | ✋ | `Rock` |
//!
//! The "beats" column is owned by the rules engine (`tui_rps_core::rules`);
//! it is listed here only for reference.
//!
//! # Examples
//!
//! ```
//! use tui_rps_types::{Choice, GameAction, Outcome};
//!
//! // Parse from text (case-insensitive)
//! let rock: Choice = "Rock".parse().unwrap();
//! assert_eq!(rock, Choice::Rock);
//!
//! // Anything outside the three symbols is rejected
//! assert!("lizard".parse::<Choice>().is_err());
//!
//! // Index order is fixed
//! assert_eq!(Choice::ALL[1], Choice::Scissors);
//!
//! // Outcomes are from the player's perspective
//! assert_eq!(Outcome::Win.as_str(), "win");
//!
//! // Actions carry the player's choice
//! assert_eq!(GameAction::Play(Choice::Paper).choice(), Some(Choice::Paper));
//! ```

use std::fmt;
use std::str::FromStr;

/// Number of selectable symbols.
pub const CHOICE_COUNT: usize = 3;

/// Default number of rounds kept by the on-screen history log.
pub const DEFAULT_HISTORY_CAPACITY: usize = 3;

/// Largest history log the front-end will keep.
pub const MAX_HISTORY_CAPACITY: usize = 64;

/// One of the three selectable symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Scissors,
    Paper,
}

impl Choice {
    /// All choices, in canonical order.
    pub const ALL: [Choice; CHOICE_COUNT] = [Choice::Rock, Choice::Scissors, Choice::Paper];

    /// Position of this choice in [`Choice::ALL`].
    pub fn index(self) -> usize {
        match self {
            Choice::Rock => 0,
            Choice::Scissors => 1,
            Choice::Paper => 2,
        }
    }

    /// Lowercase symbol name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_rps_types::Choice;
    ///
    /// assert_eq!(Choice::Rock.as_str(), "rock");
    /// assert_eq!(Choice::Paper.as_str(), "paper");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Scissors => "scissors",
            Choice::Paper => "paper",
        }
    }

    /// Capitalized name for display.
    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Scissors => "Scissors",
            Choice::Paper => "Paper",
        }
    }

    /// Hand glyph for display.
    ///
    /// Most terminals draw these two columns wide, so grid renderers should
    /// prefer [`Choice::label`].
    pub fn glyph(self) -> &'static str {
        match self {
            Choice::Rock => "\u{270A}",
            Choice::Scissors => "\u{270C}\u{FE0F}",
            Choice::Paper => "\u{270B}",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = InvalidChoice;

    /// Accepts full names, single letters, and glyphs (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" | "\u{270A}" => Ok(Choice::Rock),
            "scissors" | "s" | "\u{270C}" | "\u{270C}\u{FE0F}" => Ok(Choice::Scissors),
            "paper" | "p" | "\u{270B}" => Ok(Choice::Paper),
            _ => Err(InvalidChoice::new(s)),
        }
    }
}

impl TryFrom<usize> for Choice {
    type Error = InvalidChoice;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Choice::ALL
            .get(index)
            .copied()
            .ok_or_else(|| InvalidChoice::new(index.to_string()))
    }
}

/// Result of one round from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Tie => "tie",
        }
    }

    /// Short message shown after a round.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "Computer wins",
            Outcome::Tie => "Tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions the player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Play one round with the given choice
    Play(Choice),
    /// Zero the score and clear the history log
    Reset,
}

impl GameAction {
    /// The choice carried by a `Play` action.
    pub fn choice(self) -> Option<Choice> {
        match self {
            GameAction::Play(choice) => Some(choice),
            GameAction::Reset => None,
        }
    }
}

/// A value outside the three-symbol set was offered as a [`Choice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice {
    input: String,
}

impl InvalidChoice {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid choice {:?}: expected rock, scissors or paper",
            self.input
        )
    }
}

impl std::error::Error for InvalidChoice {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_canonical_order() {
        for (i, choice) in Choice::ALL.iter().enumerate() {
            assert_eq!(choice.index(), i);
            assert_eq!(Choice::try_from(i), Ok(*choice));
        }
        assert!(Choice::try_from(CHOICE_COUNT).is_err());
    }

    #[test]
    fn parse_accepts_names_letters_and_glyphs() {
        assert_eq!("ROCK".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!(" scissors ".parse::<Choice>(), Ok(Choice::Scissors));
        assert_eq!("p".parse::<Choice>(), Ok(Choice::Paper));
        for choice in Choice::ALL {
            assert_eq!(choice.glyph().parse::<Choice>(), Ok(choice));
            assert_eq!(choice.as_str().parse::<Choice>(), Ok(choice));
        }
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        let err = "lizard".parse::<Choice>().unwrap_err();
        assert_eq!(err.input(), "lizard");
        assert!(err.to_string().contains("lizard"));
        assert!("".parse::<Choice>().is_err());
        assert!("spock".parse::<Choice>().is_err());
    }

    #[test]
    fn reset_action_carries_no_choice() {
        assert_eq!(GameAction::Reset.choice(), None);
    }
}
