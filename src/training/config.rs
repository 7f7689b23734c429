use crate::learning::*;
use crate::*;

/// Which kind of table a training run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Form {
    /// Action values learned by one-step temporal difference.
    #[default]
    Q,
    /// State values learned by backward reward propagation.
    Values,
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Q => write!(f, "q"),
            Self::Values => write!(f, "values"),
        }
    }
}

/// Hyperparameters of a training run.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub goal: Score,
    pub sides: Face,
    pub rate: Utility,
    pub discount: Utility,
    pub reward: Utility,
    pub cap: usize,
    pub samples: usize,
    pub seed: Option<u64>,
    pub seats: [Exploration; N],
}

impl Default for Config {
    fn default() -> Self {
        Self::q()
    }
}

impl Config {
    /// Defaults for Q-learning.
    pub fn q() -> Self {
        Self {
            goal: GOAL,
            sides: SIDES,
            rate: Q_LEARNING_RATE,
            discount: Q_DISCOUNT,
            reward: Q_STEP_REWARD,
            cap: TURN_CAP,
            samples: V_SAMPLES,
            seed: None,
            seats: [Exploration::Greedy { epsilon: Q_EPSILON }; N],
        }
    }
    /// Defaults for state-value self-play.
    pub fn values() -> Self {
        Self {
            goal: GOAL,
            sides: SIDES,
            rate: V_LEARNING_RATE,
            discount: V_DISCOUNT,
            reward: WIN_REWARD,
            cap: TURN_CAP,
            samples: V_SAMPLES,
            seed: None,
            seats: [Exploration::Greedy { epsilon: V_EPSILON }; N],
        }
    }
    pub fn form(form: Form) -> Self {
        match form {
            Form::Q => Self::q(),
            Form::Values => Self::values(),
        }
    }
    /// Exploration rate of a seat, one if it always explores.
    pub fn epsilon(&self, seat: Position) -> Probability {
        match self.seats[seat] {
            Exploration::Greedy { epsilon } => epsilon,
            Exploration::Uniform => 1.,
        }
    }
    /// Reject hyperparameters the learners cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.goal >= 1 && self.goal <= GOAL, "goal must be within 1..={}", GOAL);
        anyhow::ensure!(self.sides == 4 || self.sides == 6, "dice have 4 or 6 sides, not {}", self.sides);
        anyhow::ensure!(self.rate > 0. && self.rate <= 1., "learning rate must be within (0, 1]");
        anyhow::ensure!((0. ..=1.).contains(&self.discount), "discount must be within [0, 1]");
        anyhow::ensure!(self.reward.is_finite(), "reward must be finite");
        anyhow::ensure!(self.cap > 0, "turn cap must be positive");
        anyhow::ensure!(self.samples > 0, "averaging needs at least one sample");
        for seat in self.seats.iter() {
            if let Exploration::Greedy { epsilon } = seat {
                anyhow::ensure!((0. ..=1.).contains(epsilon), "epsilon must be within [0, 1]");
            }
        }
        Ok(())
    }
}
