use super::*;
use crate::dice::*;
use crate::learning::*;
use crate::rules::*;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// State-value learning between two [`Agent`]s.
///
/// After each finished game the winner propagates the win reward and the
/// loser the loss reward through the states their own turns produced.
/// Games abandoned at the turn cap teach nothing.
pub struct Selfplay<D: Dice> {
    config: Config,
    agents: [Agent; N],
    dice: D,
    rng: SmallRng,
    tally: Tally,
}

impl Selfplay<Fair> {
    pub fn new(config: Config) -> Self {
        let (dice, rng) = match config.seed {
            Some(seed) => (Fair::seeded(config.sides, seed), SmallRng::seed_from_u64(!seed)),
            None => (Fair::new(config.sides), SmallRng::from_os_rng()),
        };
        Self::from_parts(config, dice, rng)
    }
}

impl<D: Dice> Selfplay<D> {
    pub fn from_parts(config: Config, dice: D, rng: SmallRng) -> Self {
        Self {
            agents: [Agent::new("a", 0, &config), Agent::new("b", 1, &config)],
            config,
            dice,
            rng,
            tally: Tally::default(),
        }
    }
    /// Replace an agent's learned values, to continue an earlier run.
    pub fn resume(mut self, seat: Position, values: StateValues) -> Self {
        let [a, b] = self.agents;
        self.agents = match seat {
            0 => [a.with_values(values), b],
            _ => [a, b.with_values(values)],
        };
        self
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn agents(&self) -> &[Agent; N] {
        &self.agents
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn into_agents(self) -> [Agent; N] {
        self.agents
    }

    /// Play up to `games` episodes, stopping early on interrupt.
    pub fn train(&mut self, games: usize) {
        log::info!("state-value self-play for {} games", games);
        log::info!("{} samples per rolled action", self.config.samples);
        let mut checkpoint = std::time::Instant::now();
        for _ in 0..games {
            if crate::interrupted() {
                break;
            }
            self.episode();
            if checkpoint.elapsed() > TRAINING_LOG_INTERVAL {
                checkpoint = std::time::Instant::now();
                log::info!("{}", self.tally.stats());
            }
        }
        log::info!("{}", self.tally.summary());
        for agent in self.agents.iter() {
            log::info!("agent {} learned {} states", agent.name(), agent.values().len());
        }
    }

    /// Play one game and learn from it. Returns the winner, or `None` if the
    /// game hit the turn cap.
    pub fn episode(&mut self) -> Option<Position> {
        self.agents.iter_mut().for_each(Agent::reset);
        let mut game = Game::with_goal(self.config.goal);
        let winner = loop {
            if let Some(winner) = game.winner() {
                break Some(winner);
            }
            if game.ticker() >= self.config.cap {
                break None;
            }
            let seat = game.actor();
            let action = self.agents[seat].choose(&game, &mut self.dice, &mut self.rng);
            game = game.apply(action, &mut self.dice);
            self.agents[seat].remember(&game);
        };
        match winner {
            Some(winner) => {
                for (seat, agent) in self.agents.iter_mut().enumerate() {
                    agent.feed(match seat == winner {
                        true => WIN_REWARD,
                        false => LOSS_REWARD,
                    });
                }
                log::debug!("{} won after {} turns: {}", Turn::from(winner), game.ticker(), game);
            }
            None => log::debug!("abandoned after {} turns: {}", game.ticker(), game),
        }
        self.agents.iter_mut().for_each(Agent::reset);
        self.tally.record(winner, game.ticker());
        winner
    }
}
