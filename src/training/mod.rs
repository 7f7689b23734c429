//! Self-play training and evaluation.
//!
//! Two learners share the rules engine and the tables in `learning`:
//!
//! - [`Trainer`] — Tabular Q-learning, credited along the winner's trajectory
//! - [`Selfplay`] — State-value learning between two lookahead [`Agent`]s
//!
//! Both keep a [`Tally`] of finished games and report through [`Progress`].
//! Learned Q tables are measured against a random opponent by [`evaluate`].
mod agent;
mod config;
mod evaluation;
mod progress;
mod selfplay;
mod trainer;
mod trajectory;

pub use agent::*;
pub use config::*;
pub use evaluation::*;
pub use progress::*;
pub use selfplay::*;
pub use trainer::*;
pub use trajectory::*;
