//! Value tables and the machinery around them.
//!
//! Both learners store estimates behind the narrow [`Table`] interface:
//!
//! - [`QTable`] — Dense action values over (own score, opponent score, action)
//! - [`StateValues`] — Sparse state values keyed by [`StateKey`]
//!
//! Action selection lives in [`Exploration`], and Monte Carlo estimates of
//! stochastic actions in [`Averaged`].
mod averaged;
mod exploration;
mod key;
mod qtable;
mod table;
mod values;

pub use averaged::*;
pub use exploration::*;
pub use key::*;
pub use qtable::*;
pub use table::*;
pub use values::*;
