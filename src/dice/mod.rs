//! Dice sources.
//!
//! Every source implements [`Dice`], so the turn engine never cares whether
//! faces come from a seeded RNG, a fixed script, or an arbitrary closure.
//!
//! - [`Fair`] — Uniform N-sided die backed by a seedable `SmallRng`
//! - [`Scripted`] — Cycles through a fixed face sequence, for tests
mod dice;
mod fair;
mod scripted;

pub use dice::*;
pub use fair::*;
pub use scripted::*;
