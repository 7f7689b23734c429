//! Rules of Hog.
//!
//! Leaves first: [`take_turn`] scores a single decision, [`Round`] applies
//! the bonus and swap rules around it, and [`Game`] strings rounds together
//! into the alternating race to the goal.
mod action;
mod engine;
mod game;
mod pair;
mod round;
mod swap;
mod turn;

pub use action::*;
pub use engine::*;
pub use game::*;
pub use pair::*;
pub use round::*;
pub use swap::*;
pub use turn::*;
