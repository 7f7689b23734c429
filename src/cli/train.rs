use crate::learning::*;
use crate::save::*;
use crate::training::*;
use crate::*;
use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct Train {
    /// Games to play.
    #[arg(long, default_value_t = TRAINING_GAMES)]
    games: usize,
    /// Kind of table to learn.
    #[arg(long, value_enum, default_value_t = Form::Q)]
    form: Form,
    /// Exploration rate of both seats.
    #[arg(long)]
    epsilon: Option<Probability>,
    /// Learning rate.
    #[arg(long)]
    rate: Option<Utility>,
    /// Discount factor.
    #[arg(long)]
    discount: Option<Utility>,
    /// Step reward credited along winning trajectories.
    #[arg(long)]
    reward: Option<Utility>,
    #[arg(long, default_value_t = GOAL)]
    goal: Score,
    #[arg(long, default_value_t = SIDES)]
    sides: Face,
    /// Turns after which a game is abandoned.
    #[arg(long, default_value_t = TURN_CAP)]
    cap: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// Monte Carlo samples per rolled action in state-value lookahead.
    #[arg(long)]
    samples: Option<usize>,
    /// Seat B explores uniformly instead of learning greedily.
    #[arg(long)]
    uniform_opponent: bool,
    /// Continue from the tables already in the output directory.
    #[arg(long)]
    resume: bool,
    /// Directory for learned tables.
    #[arg(long, default_value = TABLE_DIR)]
    out: PathBuf,
}

impl Train {
    /// Defaults for the chosen form, overridden by whatever was passed.
    pub fn config(&self) -> Config {
        let defaults = Config::form(self.form);
        let epsilon = self.epsilon.unwrap_or(defaults.epsilon(0));
        let opponent = match self.uniform_opponent {
            true => Exploration::Uniform,
            false => Exploration::Greedy { epsilon },
        };
        Config {
            goal: self.goal,
            sides: self.sides,
            rate: self.rate.unwrap_or(defaults.rate),
            discount: self.discount.unwrap_or(defaults.discount),
            reward: self.reward.unwrap_or(defaults.reward),
            cap: self.cap,
            samples: self.samples.unwrap_or(defaults.samples),
            seed: self.seed,
            seats: [Exploration::Greedy { epsilon }, opponent],
        }
    }
    pub fn run(self) -> anyhow::Result<()> {
        let config = self.config();
        config.validate()?;
        std::fs::create_dir_all(&self.out).with_context(|| format!("create {}", self.out.display()))?;
        log::info!("training {} tables into {}", self.form, self.out.display());
        crate::brb();
        match self.form {
            Form::Q => self.q(config),
            Form::Values => self.values(config),
        }
    }
    fn q(&self, config: Config) -> anyhow::Result<()> {
        let ref path = QTable::path(&self.out);
        let table = match self.resume && QTable::done(&self.out) {
            true => QTable::load(path)?,
            false => QTable::new(config.goal),
        };
        anyhow::ensure!(
            table.goal() == config.goal,
            "{} was trained to {}, not {}",
            path.display(),
            table.goal(),
            config.goal
        );
        let mut trainer = Trainer::resume(config, table);
        trainer.train(self.games);
        let metadata = Metadata::new(Form::Q, config, trainer.tally());
        trainer.into_table().save(path)?;
        metadata.save(path)
    }
    fn values(&self, config: Config) -> anyhow::Result<()> {
        let mut selfplay = Selfplay::new(config);
        if self.resume {
            for seat in 0..N {
                let ref path = self.path(selfplay.agents()[seat].name());
                if path.exists() {
                    selfplay = selfplay.resume(seat, StateValues::load(path)?);
                }
            }
        }
        selfplay.train(self.games);
        let metadata = Metadata::new(Form::Values, config, selfplay.tally());
        for agent in selfplay.into_agents() {
            let ref path = self.path(agent.name());
            agent.values().save(path)?;
            metadata.save(path)?;
        }
        Ok(())
    }
    fn path(&self, agent: &str) -> PathBuf {
        self.out.join(format!("{}-{}.bin", StateValues::name(), agent))
    }
}
