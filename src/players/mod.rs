//! Participants in a game of Hog and the loop that seats them.
mod duel;
mod event;
mod fish;
#[cfg(feature = "cli")]
mod human;
mod player;
mod robot;

pub use duel::*;
pub use event::*;
pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use player::*;
pub use robot::*;
