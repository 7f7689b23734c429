use super::*;
use crate::dice::*;
use crate::learning::*;
use crate::rules::*;
use crate::*;
use rand::Rng;

/// A state-value learner.
///
/// Chooses actions by one-step lookahead: every action is applied to a copy
/// of the game and the resulting score pair looked up in its own
/// [`StateValues`]. Rolling is stochastic, so those successors are averaged
/// over several samples. It remembers the pairs it produced during a game
/// and learns from them once the game ends.
#[derive(Debug, Clone)]
pub struct Agent {
    name: String,
    values: StateValues,
    states: Vec<StateKey>,
    rate: Utility,
    discount: Utility,
    epsilon: Probability,
    samples: usize,
}

impl Agent {
    pub fn new(name: &str, seat: Position, config: &Config) -> Self {
        Self {
            name: name.to_string(),
            values: StateValues::default(),
            states: Vec::new(),
            rate: config.rate,
            discount: config.discount,
            epsilon: config.epsilon(seat),
            samples: config.samples,
        }
    }
    pub fn with_values(self, values: StateValues) -> Self {
        Self { values, ..self }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn values(&self) -> &StateValues {
        &self.values
    }
    pub fn states(&self) -> &[StateKey] {
        &self.states
    }

    /// Explore with probability epsilon, otherwise look ahead.
    pub fn choose<D, R>(&self, game: &Game, dice: &mut D, rng: &mut R) -> Action
    where
        D: Dice + ?Sized,
        R: Rng + ?Sized,
    {
        match rng.random::<Probability>() < self.epsilon {
            true => Action::sample(rng),
            false => self.lookahead(game, dice),
        }
    }
    /// Action with the highest estimated successor value. The free bonus is
    /// deterministic and evaluated once. The first maximum wins ties.
    pub fn lookahead<D>(&self, game: &Game, dice: &mut D) -> Action
    where
        D: Dice + ?Sized,
    {
        let free = self.value(&game.apply(Action::FREE, dice));
        let mut averaged = Averaged::new(|action: Action| self.value(&game.apply(action, dice)), self.samples);
        std::iter::once((Action::FREE, free))
            .chain(
                Action::all()
                    .filter(|action| !action.is_free())
                    .map(|action| (action, averaged.estimate(action))),
            )
            .fold((Action::FREE, Utility::NEG_INFINITY), |(best, max), (action, value)| {
                match value > max {
                    true => (action, value),
                    false => (best, max),
                }
            })
            .0
    }
    /// Learned value of a game's score pair.
    pub fn value(&self, game: &Game) -> Utility {
        self.values.get(&StateKey::from(game.pair()))
    }
    /// Remember a state produced by one of this agent's turns.
    pub fn remember(&mut self, game: &Game) {
        self.states.push(StateKey::from(game.pair()));
    }
    /// Propagate the game's reward through the remembered states.
    pub fn feed(&mut self, reward: Utility) {
        self.values.feed(&self.states, reward, self.rate, self.discount);
    }
    pub fn reset(&mut self) {
        self.states.clear();
    }
}
