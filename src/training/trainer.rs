use super::*;
use crate::dice::*;
use crate::learning::*;
use crate::rules::*;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Tabular Q-learning by self-play.
///
/// Both seats read and write one shared [`QTable`] from their own
/// perspective. Each game records one [`Trajectory`] per seat. When a seat
/// wins, every step of its trajectory receives the step reward plus the
/// discounted value of the state it led to, and the winning step leads into
/// a terminal state worth nothing. Losing trajectories and games abandoned
/// at the turn cap leave the table untouched.
pub struct Trainer<D: Dice> {
    config: Config,
    table: QTable,
    dice: D,
    rng: SmallRng,
    trajectories: [Trajectory; N],
    tally: Tally,
}

impl Trainer<Fair> {
    /// Fresh table and fair dice, seeded from the config when it has a seed.
    pub fn new(config: Config) -> Self {
        Self::resume(config, QTable::new(config.goal))
    }
    /// Continue training an existing table.
    pub fn resume(config: Config, table: QTable) -> Self {
        let (dice, rng) = match config.seed {
            Some(seed) => (Fair::seeded(config.sides, seed), SmallRng::seed_from_u64(!seed)),
            None => (Fair::new(config.sides), SmallRng::from_os_rng()),
        };
        Self::from_parts(config, table, dice, rng)
    }
}

impl<D: Dice> Trainer<D> {
    pub fn from_parts(config: Config, table: QTable, dice: D, rng: SmallRng) -> Self {
        assert!(table.goal() == config.goal, "table for goal {} trained to {}", table.goal(), config.goal);
        Self {
            config,
            table,
            dice,
            rng,
            trajectories: Default::default(),
            tally: Tally::default(),
        }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn table(&self) -> &QTable {
        &self.table
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn into_table(self) -> QTable {
        self.table
    }

    /// Play up to `games` episodes, stopping early on interrupt.
    pub fn train(&mut self, games: usize) {
        log::info!("q-learning for {} games", games);
        log::info!("exploration {} vs {}", self.config.seats[0], self.config.seats[1]);
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
        log::info!("visited {} of {} rows", self.table.visited(), self.table.len() / ACTIONS);
    }

    /// Play one game and learn from it. Returns the winner, or `None` if the
    /// game hit the turn cap.
    pub fn episode(&mut self) -> Option<Position> {
        let mut game = Game::with_goal(self.config.goal);
        let winner = loop {
            if let Some(winner) = game.winner() {
                break Some(winner);
            }
            if game.ticker() >= self.config.cap {
                break None;
            }
            let seat = game.actor();
            let pair = game.perspective();
            let action = self.config.seats[seat].select(&self.table, pair, &mut self.rng);
            self.trajectories[seat].record(pair, action);
            game = game.apply(action, &mut self.dice);
        };
        match winner {
            Some(seat) => {
                self.trajectories[seat].close(game.perspective_of(seat));
                self.learn(seat);
                log::debug!("{} won after {} turns: {}", Turn::from(seat), game.ticker(), game);
            }
            None => log::debug!("abandoned after {} turns: {}", game.ticker(), game),
        }
        self.trajectories.iter_mut().for_each(Trajectory::clear);
        self.tally.record(winner, game.ticker());
        winner
    }

    fn learn(&mut self, seat: Position) {
        let Config {
            reward,
            rate,
            discount,
            ..
        } = self.config;
        for transition in self.trajectories[seat].transitions() {
            self.table.learn(transition, reward, rate, discount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::q()
        }
    }

    #[test]
    fn games_end_within_the_cap() {
        let mut trainer = Trainer::new(seeded(11));
        for _ in 0..200 {
            trainer.episode();
        }
        let tally = trainer.tally();
        assert_eq!(tally.games(), 200);
        assert!(tally.turns() <= 200 * TURN_CAP);
        assert_eq!(tally.wins().iter().sum::<usize>() + tally.truncated(), 200);
    }

    #[test]
    fn winning_changes_the_table() {
        let mut trainer = Trainer::new(seeded(12));
        let winner = trainer.episode();
        assert!(winner.is_some());
        assert!(trainer.table().visited() > 0);
    }

    #[test]
    fn trajectories_are_cleared_after_each_game() {
        let mut trainer = Trainer::new(seeded(16));
        assert!(trainer.episode().is_some());
        assert!(trainer.trajectories.iter().all(Trajectory::is_empty));
        let config = Config {
            cap: 3,
            ..seeded(17)
        };
        let mut trainer = Trainer::new(config);
        assert_eq!(trainer.episode(), None);
        assert!(trainer.trajectories.iter().all(Trajectory::is_empty));
    }

    #[test]
    fn truncated_games_learn_nothing() {
        let config = Config {
            cap: 1,
            ..seeded(13)
        };
        let mut trainer = Trainer::new(config);
        assert_eq!(trainer.episode(), None);
        assert_eq!(trainer.table().visited(), 0);
        assert_eq!(trainer.tally().truncated(), 1);
    }

    #[test]
    fn only_the_winner_is_credited() {
        // Every opening turn ends a game to one point, either for the roller
        // or, after a swap, for the seat that never acted.
        for seed in 0..20 {
            let config = Config {
                goal: 1,
                ..seeded(seed)
            };
            let mut trainer = Trainer::from_parts(
                config,
                QTable::new(1),
                Scripted::from(vec![6]),
                SmallRng::seed_from_u64(seed),
            );
            let winner = trainer.episode();
            match winner {
                Some(0) => {
                    let opening = trainer.table().max(Pair::from((0, 0)));
                    assert!((opening - Q_LEARNING_RATE * Q_STEP_REWARD).abs() < 1e-6);
                    assert_eq!(trainer.table().visited(), 1);
                }
                _ => assert_eq!(trainer.table().visited(), 0),
            }
        }
    }

    #[test]
    fn same_seed_same_table() {
        let mut one = Trainer::new(seeded(14));
        let mut two = Trainer::new(seeded(14));
        for _ in 0..50 {
            assert_eq!(one.episode(), two.episode());
        }
        assert_eq!(one.table(), two.table());
    }

    #[test]
    fn train_plays_every_game() {
        let mut trainer = Trainer::new(seeded(15));
        trainer.train(10);
        assert_eq!(trainer.tally().games(), 10);
    }
}
