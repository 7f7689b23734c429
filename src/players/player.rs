use super::*;
use crate::rules::*;

/// Something that can take a seat at the table.
///
/// `decide` is called whenever the player is to act. `notify` is called for
/// every event at the table, including the player's own turns.
pub trait Player {
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action>;
    fn notify(&mut self, _event: &Event) {}
}
