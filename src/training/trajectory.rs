use crate::learning::*;
use crate::rules::*;

/// The `(state, action)` steps one player took during a game, in order,
/// optionally closed by the state in which the game ended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    steps: Vec<(Pair, Action)>,
    end: Option<Pair>,
}

impl Trajectory {
    pub fn record(&mut self, pair: Pair, action: Action) {
        self.steps.push((pair, action));
    }
    pub fn close(&mut self, pair: Pair) {
        self.end = Some(pair);
    }
    pub fn clear(&mut self) {
        self.steps.clear();
        self.end = None;
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    /// Each step paired with the state the player next acted from, oldest
    /// first. The final step leads into the closing state, flagged terminal,
    /// and is dropped if the trajectory was never closed.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        let successors = self
            .steps
            .iter()
            .skip(1)
            .map(|(pair, _)| (*pair, false))
            .chain(self.end.map(|pair| (pair, true)));
        self.steps
            .iter()
            .zip(successors)
            .map(|((from, action), (into, terminal))| (*from, *action, into, terminal))
    }
}
