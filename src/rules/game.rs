use super::*;
use crate::dice::*;
use crate::*;

/// The state of one game of Hog.
///
/// `Game` owns both scores, each player's previous action (for the repeat
/// bonus), whose turn it is, how many turns have been played, and the goal.
/// Transitions are functional: [`apply`](Self::apply) returns the next state
/// and leaves `self` untouched, which lets a player simulate a move on a
/// copy before committing to it.
///
/// Scores are capped at the goal after every turn, so a finished game always
/// holds exactly one score equal to the goal. Only one player can get there:
/// the opponent was below the goal before the turn, the turn only raises the
/// actor's score, and a swap only exchanges the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Game {
    scores: [Score; N],
    prevs: [Action; N],
    actor: Position,
    ticker: usize,
    goal: Score,
}

impl Default for Game {
    fn default() -> Self {
        Self::root()
    }
}

/// Game entry points.
impl Game {
    /// Both players at zero, A to act, racing to [`GOAL`].
    pub fn root() -> Self {
        Self::with_goal(GOAL)
    }
    /// Opening position for a shorter race.
    pub fn with_goal(goal: Score) -> Self {
        assert!(goal >= 1 && goal <= GOAL, "goal {} outside 1..={}", goal, GOAL);
        Self {
            scores: [0; N],
            prevs: [Action::FREE; N],
            actor: 0,
            ticker: 0,
            goal,
        }
    }
    /// A position with the given absolute scores and A to act.
    ///
    /// Previous actions are reset, so this is the position a player would
    /// face if the game had started from these scores.
    pub fn seated(self, pair: Pair) -> Self {
        Self {
            scores: [pair.a(), pair.b()],
            prevs: [Action::FREE; N],
            actor: 0,
            ..self
        }
    }
}

/// Public state accessors.
impl Game {
    pub fn goal(&self) -> Score {
        self.goal
    }
    /// Turns played so far.
    pub fn ticker(&self) -> usize {
        self.ticker
    }
    pub fn score(&self, seat: Position) -> Score {
        self.scores[seat]
    }
    pub fn prev(&self, seat: Position) -> Action {
        self.prevs[seat]
    }
    /// Absolute scores, player A first.
    pub fn pair(&self) -> Pair {
        Pair::from((self.scores[0], self.scores[1]))
    }
    /// Scores from the acting player's side: own first, opponent second.
    pub fn perspective(&self) -> Pair {
        self.perspective_of(self.actor)
    }
    /// Scores from the given seat's side.
    pub fn perspective_of(&self, seat: Position) -> Pair {
        Pair::from((self.scores[seat], self.scores[Self::other(seat)]))
    }
    /// The seat due to act next, whether or not the game is over.
    pub fn actor(&self) -> Position {
        self.actor
    }
    pub fn turn(&self) -> Turn {
        match self.is_terminal() {
            true => Turn::Terminal,
            false => Turn::Choice(self.actor),
        }
    }
    pub fn is_terminal(&self) -> bool {
        self.pair().reached(self.goal)
    }
    /// The seat holding the goal, if the game is over.
    pub fn winner(&self) -> Option<Position> {
        (0..N).find(|seat| self.scores[*seat] >= self.goal)
    }
    fn other(seat: Position) -> Position {
        (seat + 1) % N
    }
}

/// State transitions.
impl Game {
    /// Play the actor's turn and hand the dice to the opponent.
    ///
    /// # Panics
    ///
    /// If the game is already over.
    pub fn apply<D>(&self, action: Action, dice: &mut D) -> Self
    where
        D: Dice + ?Sized,
    {
        assert!(!self.is_terminal(), "the game should be over: {}", self);
        let hero = self.actor;
        let villain = Self::other(hero);
        let round = Round::from((self.scores[hero], self.scores[villain], self.prevs[hero]))
            .resolve(action, dice);
        let mut next = *self;
        next.scores[hero] = round.own().min(self.goal);
        next.scores[villain] = round.opponent().min(self.goal);
        next.prevs[hero] = round.prev();
        next.actor = villain;
        next.ticker += 1;
        next
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A {:>3}  B {:>3}  {} to act",
            self.scores[0],
            self.scores[1],
            self.turn()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position() {
        let game = Game::root();
        assert_eq!(game.pair(), Pair::from((0, 0)));
        assert_eq!(game.turn(), Turn::Choice(0));
        assert_eq!(game.prev(0), Action::FREE);
        assert_eq!(game.prev(1), Action::FREE);
        assert_eq!(game.goal(), GOAL);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn turns_alternate() {
        let ref mut dice = Scripted::from(vec![2, 3, 4, 4, 5]);
        let game = Game::root();
        let game = game.apply(Action::from(5u8), dice);
        assert_eq!(game.pair(), Pair::from((18, 0)));
        assert_eq!(game.turn(), Turn::Choice(1));
        assert_eq!(game.perspective(), Pair::from((0, 18)));
        let game = game.apply(Action::FREE, dice);
        assert_eq!(game.pair(), Pair::from((18, 9)));
        assert_eq!(game.turn(), Turn::Choice(0));
        assert_eq!(game.ticker(), 2);
        assert_eq!(game.prev(0), Action::from(5u8));
        assert_eq!(game.prev(1), Action::FREE);
    }

    #[test]
    fn previous_actions_are_per_seat() {
        let ref mut dice = Scripted::from(vec![2]);
        let game = Game::root()
            .apply(Action::from(3u8), dice) // A: 6
            .apply(Action::from(4u8), dice) // B: 8
            .apply(Action::from(5u8), dice); // A: 6 + 10 + 3 (repeat of 3 -> 5)
        assert_eq!(game.pair(), Pair::from((19, 8)));
    }

    #[test]
    fn swap_hands_over_the_lead() {
        let ref mut dice = Scripted::from(vec![6]);
        let game = Game::root().seated(Pair::from((85, 19)));
        let game = game.apply(Action::from(1u8), dice);
        assert_eq!(game.pair(), Pair::from((19, 91)));
    }

    #[test]
    fn scores_cap_at_goal() {
        let ref mut dice = Scripted::from(vec![6]);
        let game = Game::root().seated(Pair::from((95, 40)));
        let game = game.apply(Action::from(4u8), dice);
        assert_eq!(game.pair(), Pair::from((100, 40)));
        assert!(game.is_terminal());
        assert_eq!(game.turn(), Turn::Terminal);
        assert_eq!(game.winner(), Some(0));
    }

    #[test]
    fn swap_can_crown_the_opponent() {
        // 97 + 6 = 103 swaps with 13; B wins on A's turn
        let ref mut dice = Scripted::from(vec![6]);
        let game = Game::root().seated(Pair::from((97, 13)));
        let game = game.apply(Action::from(1u8), dice);
        assert_eq!(game.pair(), Pair::from((13, 100)));
        assert_eq!(game.winner(), Some(1));
    }

    #[test]
    fn shorter_goals() {
        let ref mut dice = Scripted::from(vec![5]);
        let game = Game::with_goal(20).apply(Action::from(5u8), dice);
        assert_eq!(game.pair(), Pair::from((20, 0)));
        assert_eq!(game.winner(), Some(0));
    }

    #[test]
    #[should_panic]
    fn no_turns_after_the_end() {
        let ref mut dice = Scripted::from(vec![6]);
        let game = Game::root().seated(Pair::from((100, 0)));
        game.apply(Action::from(1u8), dice);
    }

    #[test]
    #[should_panic]
    fn goal_too_large() {
        Game::with_goal(GOAL + 1);
    }
}
