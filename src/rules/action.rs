use crate::*;
use rand::Rng;

/// A turn decision: roll between one and ten dice, or take the free bonus.
///
/// Zero is the free-bonus move; any other value is the number of dice rolled.
/// Values above [`MAX_ROLLS`] are not representable through the infallible
/// constructors, which panic instead of clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Action(u8);

impl Action {
    /// The free-bonus move.
    pub const FREE: Self = Self(0);

    /// Every legal action, free bonus first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_ROLLS).map(Self)
    }
    /// Uniformly random action drawn from the given generator.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..=MAX_ROLLS))
    }
    /// Number of dice rolled. Zero for the free bonus.
    pub fn rolls(&self) -> u8 {
        self.0
    }
    /// Column of this action in a value table row.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn is_free(&self) -> bool {
        self.0 == 0
    }
    /// Absolute difference in dice count, as used by the repeat bonus.
    pub fn distance(&self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
    /// Display label (e.g., "free bonus", "roll 5").
    pub fn label(&self) -> String {
        match self.0 {
            0 => String::from("free bonus"),
            n => format!("roll {}", n),
        }
    }
}

impl From<u8> for Action {
    fn from(rolls: u8) -> Self {
        assert!(rolls <= MAX_ROLLS, "cannot roll {} dice (max {})", rolls, MAX_ROLLS);
        Self(rolls)
    }
}

impl From<usize> for Action {
    fn from(index: usize) -> Self {
        assert!(index < ACTIONS, "action index {} out of range", index);
        Self(index as u8)
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.0
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let rolls = s
            .trim()
            .parse::<u8>()
            .map_err(|_| anyhow::anyhow!("{:?} is not a number of dice", s.trim()))?;
        match rolls {
            n if n <= MAX_ROLLS => Ok(Self(n)),
            n => Err(anyhow::anyhow!("cannot roll {} dice (max {})", n, MAX_ROLLS)),
        }
    }
}

impl Arbitrary for Action {
    fn random() -> Self {
        Self(rand::random_range(0..=MAX_ROLLS))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
