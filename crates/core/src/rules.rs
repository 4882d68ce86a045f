//! Rules module - the win relation
//!
//! The cyclic dominance is kept as a table of `(winner, loser)` pairs rather
//! than branching logic, so it can be checked exhaustively:
//! 3 choices give 6 ordered distinct pairs, exactly 3 of which are wins.

use crate::types::{Choice, Outcome};

/// The `(winner, loser)` pairs of standard rock-paper-scissors.
pub const WIN_RULES: [(Choice, Choice); 3] = [
    (Choice::Rock, Choice::Scissors),
    (Choice::Scissors, Choice::Paper),
    (Choice::Paper, Choice::Rock),
];

/// Whether `a` beats `b` under [`WIN_RULES`].
///
/// Never true for `a == b`.
pub fn beats(a: Choice, b: Choice) -> bool {
    WIN_RULES.contains(&(a, b))
}

/// Outcome of `player` against `computer`, from the player's side.
///
/// Pure; the engine layers score bookkeeping on top of this.
pub fn outcome(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if beats(player, computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Check that a rule table is a tournament over [`Choice::ALL`]:
/// irreflexive, and for every distinct pair exactly one direction is present.
pub fn is_total_and_asymmetric(rules: &[(Choice, Choice)]) -> bool {
    if rules.iter().any(|&(a, b)| a == b) {
        return false;
    }

    for (i, &a) in Choice::ALL.iter().enumerate() {
        for &b in &Choice::ALL[i + 1..] {
            let forward = rules.contains(&(a, b));
            let backward = rules.contains(&(b, a));
            if forward == backward {
                return false;
            }
        }
    }

    true
}
