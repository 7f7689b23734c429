use crate::*;

/// Whose turn it is.
///
/// - `Choice(usize)` — Player `usize` must pick an action
/// - `Terminal` — Someone reached the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Choice(Position),
    Terminal,
}

impl From<Position> for Turn {
    fn from(player: Position) -> Self {
        assert!(player < N, "no seat {}", player);
        Self::Choice(player)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(0) => write!(f, "A"),
            Self::Choice(_) => write!(f, "B"),
            Self::Terminal => write!(f, "-"),
        }
    }
}
