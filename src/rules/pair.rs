use crate::*;

/// An ordered pair of scores.
///
/// Used both absolutely (`a` is player A) and from an acting player's
/// perspective (`a` is the actor, `b` the opponent); the owner decides which.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pair(Score, Score);

impl Pair {
    pub fn a(&self) -> Score {
        self.0
    }
    pub fn b(&self) -> Score {
        self.1
    }
    /// Cap both scores at the goal.
    pub fn cap(&self, goal: Score) -> Self {
        Self(self.0.min(goal), self.1.min(goal))
    }
    /// True if either score has reached the goal.
    pub fn reached(&self, goal: Score) -> bool {
        self.0 >= goal || self.1 >= goal
    }
}

impl From<(Score, Score)> for Pair {
    fn from((a, b): (Score, Score)) -> Self {
        Self(a, b)
    }
}

impl From<Pair> for (Score, Score) {
    fn from(pair: Pair) -> Self {
        (pair.0, pair.1)
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
