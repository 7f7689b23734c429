//! Command line surface of the `hog` binary.
mod eval;
mod play;
mod train;

pub use eval::*;
pub use play::*;
pub use train::*;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Learn a table by self-play and save it", alias = "t")]
    Train(Train),
    #[command(about = "Play one game against a learned Q table", alias = "p")]
    Play(Play),
    #[command(about = "Measure a learned Q table against a random opponent", alias = "e")]
    Eval(Eval),
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Train(train) => train.run(),
            Self::Play(play) => play.run(),
            Self::Eval(eval) => eval.run(),
        }
    }
}

/// Dice the command line accepts.
fn sides(sides: crate::Face) -> anyhow::Result<crate::Face> {
    anyhow::ensure!(sides == 4 || sides == 6, "dice have 4 or 6 sides, not {}", sides);
    Ok(sides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::*;

    #[test]
    fn train_defaults() {
        let Command::Train(train) = Command::parse_from(["hog", "train"]) else {
            panic!("expected train");
        };
        assert_eq!(train.config(), Config::q());
    }

    #[test]
    fn train_overrides() {
        let Command::Train(train) = Command::parse_from([
            "hog", "t", "--form", "values", "--epsilon", "0.1", "--goal", "50", "--seed", "3", "--samples", "8",
        ]) else {
            panic!("expected train");
        };
        let config = train.config();
        assert_eq!(config.goal, 50);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.samples, 8);
        assert_eq!(config.epsilon(0), 0.1);
        assert_eq!(config.rate, crate::V_LEARNING_RATE);
    }

    #[test]
    fn uniform_opponents() {
        let Command::Train(train) = Command::parse_from(["hog", "train", "--uniform-opponent"]) else {
            panic!("expected train");
        };
        assert_eq!(train.config().seats[1], crate::learning::Exploration::Uniform);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(Command::try_parse_from(["hog", "train", "--form", "sarsa"]).is_err());
        assert!(sides(5).is_err());
        assert_eq!(sides(4).unwrap(), 4);
    }
}
