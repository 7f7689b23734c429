use crate::dice::*;
use crate::learning::*;
use crate::players::*;
use crate::rules::*;
use crate::save::*;
use crate::*;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct Play {
    /// Q table to play against.
    #[arg(long)]
    table: Option<PathBuf>,
    #[arg(long, default_value_t = SIDES)]
    sides: Face,
    #[arg(long)]
    seed: Option<u64>,
    /// Let the robot move first.
    #[arg(long)]
    second: bool,
}

impl Play {
    pub fn run(self) -> anyhow::Result<()> {
        let sides = super::sides(self.sides)?;
        let path = self.table.unwrap_or_else(|| QTable::path(Path::new(TABLE_DIR)));
        let table = QTable::load(&path)?;
        let ref mut dice = match self.seed {
            Some(seed) => Fair::seeded(sides, seed),
            None => Fair::new(sides),
        };
        let seat = self.second as Position;
        let mut human = Human::from(seat);
        let mut robot = Robot::from(&table);
        let players: [&mut dyn Player; N] = match seat {
            0 => [&mut human, &mut robot],
            _ => [&mut robot, &mut human],
        };
        println!("first to {} wins", table.goal());
        duel(players, Game::with_goal(table.goal()), dice, TURN_CAP)?;
        Ok(())
    }
}
