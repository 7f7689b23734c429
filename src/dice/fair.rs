use super::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A fair die with a fixed number of sides.
///
/// Four- and six-sided dice are the only variants the game defines.
#[derive(Debug, Clone)]
pub struct Fair {
    sides: Face,
    rng: SmallRng,
}

impl Fair {
    /// A die seeded from the operating system.
    pub fn new(sides: Face) -> Self {
        Self::from((sides, SmallRng::from_os_rng()))
    }
    /// A reproducible die.
    pub fn seeded(sides: Face, seed: u64) -> Self {
        Self::from((sides, SmallRng::seed_from_u64(seed)))
    }
}

impl From<(Face, SmallRng)> for Fair {
    fn from((sides, rng): (Face, SmallRng)) -> Self {
        assert!(sides == 4 || sides == 6, "unsupported die with {} sides", sides);
        Self { sides, rng }
    }
}

impl Default for Fair {
    fn default() -> Self {
        Self::new(SIDES)
    }
}

impl Dice for Fair {
    fn roll(&mut self) -> Face {
        self.rng.random_range(1..=self.sides)
    }
}
