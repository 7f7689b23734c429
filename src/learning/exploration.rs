use super::*;
use crate::rules::*;
use crate::*;
use rand::Rng;

/// How a learner picks actions while training.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Exploration {
    /// Random with probability `epsilon`, otherwise the table's best action.
    /// A player who has not scored yet always explores.
    Greedy { epsilon: Probability },
    /// Always random.
    Uniform,
}

impl Default for Exploration {
    fn default() -> Self {
        Self::Greedy { epsilon: Q_EPSILON }
    }
}

impl Exploration {
    pub fn select<R>(&self, table: &QTable, pair: Pair, rng: &mut R) -> Action
    where
        R: Rng + ?Sized,
    {
        match *self {
            Self::Uniform => Action::sample(rng),
            Self::Greedy { .. } if pair.a() == 0 => Action::sample(rng),
            Self::Greedy { epsilon } if rng.random::<Probability>() < epsilon => Action::sample(rng),
            Self::Greedy { .. } => table.best(pair),
        }
    }
}

impl std::fmt::Display for Exploration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy { epsilon } => write!(f, "greedy(ε={})", epsilon),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}
