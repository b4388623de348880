use crate::chess::Outcome;
use derive_more::{Deref, From};
use std::fmt;

/// The summary of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Verdict(Outcome);

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(c) => write!(f, "game over! the {c} team wins ({})", self.method()),
            None => write!(f, "game over! it's a draw ({})", self.method()),
        }
    }
}
