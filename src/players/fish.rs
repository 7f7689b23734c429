use super::*;
use crate::rules::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Plays uniformly random actions.
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Player for Fish {
    fn decide(&mut self, _: &Game) -> anyhow::Result<Action> {
        Ok(Action::sample(&mut self.0))
    }
}
