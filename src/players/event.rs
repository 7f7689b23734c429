use crate::rules::*;
use crate::*;

/// What happened at the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A seat played `action`, leaving the table at `game`.
    Turn {
        seat: Position,
        action: Action,
        game: Game,
    },
    /// The game ended, won by `winner` unless it was abandoned.
    End { winner: Option<Position>, game: Game },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Turn { seat, action, game } => write!(
                f,
                "{} {:<14} A {:>3}  B {:>3}",
                Turn::from(*seat),
                action.label(),
                game.score(0),
                game.score(1)
            ),
            Self::End {
                winner: Some(seat),
                game,
            } => write!(f, "{} wins {} after {} turns", Turn::from(*seat), game.pair(), game.ticker()),
            Self::End { winner: None, game } => write!(f, "abandoned at {} after {} turns", game.pair(), game.ticker()),
        }
    }
}
