//! RNG module - opponent choice generation
//!
//! The engine draws the computer's move from a [`ChoiceSource`], so games can
//! run on OS entropy, on a fixed seed, or on a scripted sequence in tests
//! without touching the judging logic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::{Choice, CHOICE_COUNT};

/// Anything that can pick the opponent's next move.
pub trait ChoiceSource {
    fn next_choice(&mut self) -> Choice;
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for &mut S {
    fn next_choice(&mut self) -> Choice {
        (**self).next_choice()
    }
}

/// Uniform selection over [`Choice::ALL`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<SmallRng> {
    /// Seed from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Default for RandomSource<SmallRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> ChoiceSource for RandomSource<R> {
    fn next_choice(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..CHOICE_COUNT)]
    }
}

/// Replays a fixed, non-empty list of choices, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedSource {
    /// Returns `None` for an empty script.
    pub fn new(script: impl Into<Vec<Choice>>) -> Option<Self> {
        let script = script.into();
        if script.is_empty() {
            return None;
        }
        Some(Self { script, cursor: 0 })
    }

    /// Always plays the same choice.
    pub fn constant(choice: Choice) -> Self {
        Self {
            script: vec![choice],
            cursor: 0,
        }
    }
}

impl ChoiceSource for ScriptedSource {
    fn next_choice(&mut self) -> Choice {
        let choice = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(source: &mut impl ChoiceSource, draws: usize) -> [usize; CHOICE_COUNT] {
        let mut counts = [0; CHOICE_COUNT];
        for _ in 0..draws {
            counts[source.next_choice().index()] += 1;
        }
        counts
    }

    #[test]
    fn test_seeded_deterministic() {
        let mut a = RandomSource::seeded(12345);
        let mut b = RandomSource::seeded(12345);

        for _ in 0..100 {
            assert_eq!(a.next_choice(), b.next_choice());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomSource::seeded(12345);
        let mut b = RandomSource::seeded(54321);

        let xs: Vec<_> = (0..32).map(|_| a.next_choice()).collect();
        let ys: Vec<_> = (0..32).map(|_| b.next_choice()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_os_rng_roughly_uniform() {
        let draws = 10_000;
        let counts = frequencies(&mut RandomSource::from_os_rng(), draws);
        for (i, &n) in counts.iter().enumerate() {
            let share = n as f64 / draws as f64;
            assert!(
                (0.25..=0.41).contains(&share),
                "{:?} drawn {:.3} of the time",
                Choice::ALL[i],
                share
            );
        }
    }

    #[test]
    fn test_seeded_covers_every_choice() {
        let counts = frequencies(&mut RandomSource::seeded(7), 10_000);
        assert!(counts.iter().all(|&n| n > 2_500 && n < 4_100), "{counts:?}");
    }

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedSource::new([Choice::Paper, Choice::Rock]).unwrap();
        assert_eq!(source.next_choice(), Choice::Paper);
        assert_eq!(source.next_choice(), Choice::Rock);
        assert_eq!(source.next_choice(), Choice::Paper);
    }

    #[test]
    fn test_scripted_rejects_empty() {
        assert!(ScriptedSource::new(Vec::<Choice>::new()).is_none());
    }

    #[test]
    fn test_borrowed_source_advances_owner() {
        fn draw<S: ChoiceSource>(mut source: S) -> Choice {
            source.next_choice()
        }

        let mut source = ScriptedSource::new([Choice::Rock, Choice::Scissors]).unwrap();
        assert_eq!(draw(&mut source), Choice::Rock);
        assert_eq!(source.next_choice(), Choice::Scissors);
    }
}
