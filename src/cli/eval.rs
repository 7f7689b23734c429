use crate::learning::*;
use crate::save::*;
use crate::training::*;
use crate::*;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct Eval {
    /// Q table to measure.
    #[arg(long)]
    table: Option<PathBuf>,
    #[arg(long, default_value_t = EVALUATION_GAMES)]
    games: usize,
    #[arg(long, default_value_t = SIDES)]
    sides: Face,
    #[arg(long)]
    seed: Option<u64>,
}

impl Eval {
    pub fn run(self) -> anyhow::Result<()> {
        let sides = super::sides(self.sides)?;
        let path = self.table.unwrap_or_else(|| QTable::path(Path::new(TABLE_DIR)));
        let table = QTable::load(&path)?;
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("evaluation seed {}", seed);
        let record = evaluate(&table, self.games, sides, seed)?;
        println!("{}", record);
        Ok(())
    }
}
