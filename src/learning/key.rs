use crate::rules::*;
use crate::*;

/// Width reserved for each score in the key.
const DIGITS: u32 = 1000;

/// Canonical fixed-width encoding of a score pair.
///
/// Each score takes three decimal digits, so `(18, 9)` prints as `018009`
/// and is stored as the integer `18009`. Distinct pairs of scores below one
/// thousand always produce distinct keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey(u32);

impl From<Pair> for StateKey {
    fn from(pair: Pair) -> Self {
        let (a, b) = (pair.a() as u32, pair.b() as u32);
        assert!(a < DIGITS && b < DIGITS, "scores {} do not fit a state key", pair);
        Self(a * DIGITS + b)
    }
}

impl From<StateKey> for Pair {
    fn from(key: StateKey) -> Self {
        Pair::from(((key.0 / DIGITS) as Score, (key.0 % DIGITS) as Score))
    }
}

impl From<StateKey> for u32 {
    fn from(key: StateKey) -> Self {
        key.0
    }
}

impl TryFrom<u32> for StateKey {
    type Error = anyhow::Error;
    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n < DIGITS * DIGITS {
            true => Ok(Self(n)),
            false => Err(anyhow::anyhow!("{} is too wide for a state key", n)),
        }
    }
}

impl TryFrom<&str> for StateKey {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(anyhow::anyhow!("state key {:?} must be six digits", s));
        }
        Self::try_from(s.parse::<u32>()?)
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}{:03}", self.0 / DIGITS, self.0 % DIGITS)
    }
}
