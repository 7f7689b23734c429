use super::*;
use crate::dice::*;
use crate::*;

/// Points gained by one turn.
///
/// The free bonus (zero dice) depends only on the opponent's score. Rolling
/// sums every face unless any die shows a one, in which case the whole turn
/// is worth exactly one point.
///
/// # Panics
///
/// If the opponent has already reached [`GOAL`]; the game should be over.
pub fn take_turn<D>(action: Action, opponent: Score, dice: &mut D) -> Score
where
    D: Dice + ?Sized,
{
    assert!(opponent < GOAL, "the game should be over: opponent holds {}", opponent);
    match action.rolls() {
        0 => free_bonus(opponent),
        n => roll_dice(n, dice),
    }
}

/// Roll `n` dice and total them, collapsing to one point on a pig-out.
///
/// All `n` dice are rolled even after a one appears, so the dice stream
/// advances by exactly `n` faces.
pub fn roll_dice<D>(n: u8, dice: &mut D) -> Score
where
    D: Dice + ?Sized,
{
    assert!(n > 0, "must roll at least once");
    assert!(n <= MAX_ROLLS, "cannot roll {} dice (max {})", n, MAX_ROLLS);
    let (total, pigout) = (0..n)
        .map(|_| dice.roll())
        .fold((0 as Score, false), |(total, pigout), face| {
            (total + face as Score, pigout || face == PIG_OUT_FACE)
        });
    match pigout {
        true => PIG_OUT_SCORE,
        false => total,
    }
}

/// Points for taking zero dice against an opponent holding `opponent`.
///
/// Ten while the opponent is in single digits, otherwise ten minus the
/// smaller of the opponent's two digits.
pub fn free_bonus(opponent: Score) -> Score {
    assert!(opponent < GOAL, "the game should be over: opponent holds {}", opponent);
    match opponent {
        0..10 => FREE_BONUS,
        _ => FREE_BONUS - (opponent / 10).min(opponent % 10),
    }
}
