use crate::dice::*;
use crate::learning::*;
use crate::players::*;
use crate::rules::*;
use crate::*;
use rayon::prelude::*;

/// Results of a greedy table against a uniformly random opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: usize,
    pub losses: usize,
    pub truncated: usize,
}

impl Record {
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.truncated
    }
    /// Share of all games won, truncated games counting against.
    pub fn rate(&self) -> Probability {
        match self.games() {
            0 => 0.,
            n => self.wins as Probability / n as Probability,
        }
    }
}

impl std::ops::Add for Record {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            truncated: self.truncated + other.truncated,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<16}{:<16}{:<16}{:<16}",
            format!("won {}", self.wins),
            format!("lost {}", self.losses),
            format!("capped {}", self.truncated),
            format!("rate {:.3}", self.rate()),
        )
    }
}

/// Play `games` games between a [`Robot`] reading `table` and a [`Fish`],
/// alternating who moves first. Game `i` draws its dice and the fish's moves
/// from `seed + i`, so results do not depend on how rayon splits the work.
pub fn evaluate(table: &QTable, games: usize, sides: Face, seed: u64) -> anyhow::Result<Record> {
    log::info!("evaluating {} games against a random opponent", games);
    let record = (0..games)
        .into_par_iter()
        .map(|i| contest(table, sides, seed.wrapping_add(i as u64), i % N))
        .try_reduce(Record::default, |a, b| Ok(a + b))?;
    log::info!("{}", record);
    Ok(record)
}

fn contest(table: &QTable, sides: Face, seed: u64, hero: Position) -> anyhow::Result<Record> {
    let ref mut dice = Fair::seeded(sides, seed);
    let mut robot = Robot::from(table);
    let mut fish = Fish::seeded(!seed);
    let players: [&mut dyn Player; N] = match hero {
        0 => [&mut robot, &mut fish],
        _ => [&mut fish, &mut robot],
    };
    let game = duel(players, Game::with_goal(table.goal()), dice, TURN_CAP)?;
    Ok(match game.winner() {
        Some(seat) if seat == hero => Record { wins: 1, ..Record::default() },
        Some(_) => Record { losses: 1, ..Record::default() },
        None => Record { truncated: 1, ..Record::default() },
    })
}
