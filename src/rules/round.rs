use super::*;
use crate::dice::*;
use crate::*;

/// One player's view of the table just before acting.
///
/// Holds the acting player's score, the opponent's score, and the action the
/// acting player chose on their previous turn. [`resolve`](Self::resolve)
/// plays one turn and returns the context with every rule applied.
///
/// The resolver is written for the acting player only. Resolving for the
/// other seat means building the context with the roles swapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Round {
    own: Score,
    opponent: Score,
    prev: Action,
}

impl Round {
    pub fn own(&self) -> Score {
        self.own
    }
    pub fn opponent(&self) -> Score {
        self.opponent
    }
    pub fn prev(&self) -> Action {
        self.prev
    }
    /// Play one turn.
    ///
    /// 1. Score the action against the opponent.
    /// 2. Add the repeat bonus if the dice count moved by exactly two.
    /// 3. Trade scores if their digit products match.
    /// 4. Remember the action for next time.
    pub fn resolve<D>(self, action: Action, dice: &mut D) -> Self
    where
        D: Dice + ?Sized,
    {
        let mut own = self.own + take_turn(action, self.opponent, dice);
        let mut opponent = self.opponent;
        if action.distance(self.prev) == REPEAT_DISTANCE {
            own += REPEAT_BONUS;
        }
        if is_swap(own, opponent) {
            std::mem::swap(&mut own, &mut opponent);
        }
        Self {
            own,
            opponent,
            prev: action,
        }
    }
}

impl From<(Score, Score, Action)> for Round {
    fn from((own, opponent, prev): (Score, Score, Action)) -> Self {
        Self {
            own,
            opponent,
            prev,
        }
    }
}

impl From<Round> for (Score, Score, Action) {
    fn from(round: Round) -> Self {
        (round.own, round.opponent, round.prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(action: u8, own: Score, opponent: Score, prev: u8, faces: &[Face]) -> (Score, Score, Action) {
        let ref mut dice = Scripted::from(faces);
        Round::from((own, opponent, Action::from(prev)))
            .resolve(Action::from(action), dice)
            .into()
    }

    #[test]
    fn rolls_then_free_bonus() {
        // five dice summing to 18 from the opening position
        let (a, b, prev) = resolve(5, 0, 0, 0, &[2, 3, 4, 4, 5]);
        assert_eq!((a, b, prev), (18, 0, Action::from(5u8)));
        // opponent answers with the free bonus against 18
        let (b, a, prev) = resolve(0, b, a, 0, &[6]);
        assert_eq!((a, b, prev), (18, 9, Action::FREE));
    }

    #[test]
    fn repeat_bonus_at_distance_two() {
        let (own, _, _) = resolve(5, 20, 33, 3, &[2]);
        assert_eq!(own, 20 + 10 + 3);
        let (own, _, _) = resolve(1, 20, 33, 3, &[2]);
        assert_eq!(own, 20 + 2 + 3);
    }

    #[test]
    fn no_repeat_bonus_otherwise() {
        let (own, _, _) = resolve(4, 20, 33, 3, &[2]);
        assert_eq!(own, 20 + 8);
        let (own, _, _) = resolve(3, 20, 33, 3, &[2]);
        assert_eq!(own, 20 + 6);
        let (own, _, _) = resolve(6, 20, 33, 3, &[2]);
        assert_eq!(own, 20 + 12);
    }

    #[test]
    fn first_turn_of_two_dice_earns_bonus() {
        let (own, _, _) = resolve(2, 0, 0, 0, &[3, 3]);
        assert_eq!(own, 6 + 3);
    }

    #[test]
    fn matching_digit_products_swap() {
        // 85 + 6 = 91 and 19 share a digit product of 9
        let (own, opponent, prev) = resolve(1, 85, 19, 5, &[6]);
        assert_eq!((own, opponent, prev), (19, 91, Action::from(1u8)));
    }

    #[test]
    fn bonus_counts_before_swap() {
        // 10 + 6 + 3 = 19 only matches 91 because of the repeat bonus
        let (own, opponent, _) = resolve(1, 10, 91, 3, &[6]);
        assert_eq!((own, opponent), (91, 19));
    }

    #[test]
    fn scores_over_one_hundred_use_hundreds_digit() {
        // 97 + 8 = 105 has product 1 * 5, matching 15
        let (own, opponent, _) = resolve(2, 97, 15, 2, &[4, 4]);
        assert_eq!((own, opponent), (15, 105));
    }

    #[test]
    fn deterministic_under_script() {
        let faces = [3, 5, 2, 6, 4, 6, 2, 3];
        let a = resolve(8, 40, 52, 1, &faces);
        let b = resolve(8, 40, 52, 1, &faces);
        assert_eq!(a, b);
        assert_eq!(a.0, 40 + 31);
    }
}
