use crate::*;
use std::time::Duration;
use std::time::Instant;

/// Unified training progress across learners.
///
/// Implementors supply the raw counters; formatting is shared.
pub trait Progress {
    /// Games started, including truncated ones.
    fn games(&self) -> usize;
    /// Turns played across all games.
    fn turns(&self) -> usize;
    /// Games abandoned at the turn cap.
    fn truncated(&self) -> usize;
    /// Games won by each seat.
    fn wins(&self) -> [usize; N];
    /// Wall-clock duration since training started.
    fn elapsed(&self) -> Duration;
    /// Formats stats as aligned columns with throughput calculation.
    fn format(&self) -> String {
        let rates = self.games() as f64 / self.elapsed().as_secs_f64().max(1e-3);
        let [a, b] = self.wins();
        format!(
            "{:<20}{:<20}{:<20}{:<20}{:<20}",
            format!("games {}", self.games()),
            format!("turns {}", self.turns()),
            format!("A/B {}/{}", a, b),
            format!("capped {}", self.truncated()),
            format!("G/sec {:.1}", rates),
        )
    }
    fn stats(&self) -> String {
        self.format()
    }
    fn summary(&self) -> String {
        format!("training stopped\n{}", self.format())
    }
}

/// Counters of finished games.
#[derive(Debug, Clone)]
pub struct Tally {
    games: usize,
    turns: usize,
    truncated: usize,
    wins: [usize; N],
    started: Instant,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            games: 0,
            turns: 0,
            truncated: 0,
            wins: [0; N],
            started: Instant::now(),
        }
    }
}

impl Tally {
    /// Count one game that lasted `turns` and was won by `winner`, if anyone.
    pub fn record(&mut self, winner: Option<Position>, turns: usize) {
        self.games += 1;
        self.turns += turns;
        match winner {
            Some(seat) => self.wins[seat] += 1,
            None => self.truncated += 1,
        }
    }
}

impl Progress for Tally {
    fn games(&self) -> usize {
        self.games
    }
    fn turns(&self) -> usize {
        self.turns
    }
    fn truncated(&self) -> usize {
        self.truncated
    }
    fn wins(&self) -> [usize; N] {
        self.wins
    }
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_outcomes() {
        let mut tally = Tally::default();
        tally.record(Some(0), 20);
        tally.record(Some(1), 30);
        tally.record(Some(0), 10);
        tally.record(None, 1000);
        assert_eq!(tally.games(), 4);
        assert_eq!(tally.turns(), 1060);
        assert_eq!(tally.wins(), [2, 1]);
        assert_eq!(tally.truncated(), 1);
    }

    #[test]
    fn summary_mentions_the_counts() {
        let mut tally = Tally::default();
        tally.record(Some(1), 42);
        let summary = tally.summary();
        assert!(summary.starts_with("training stopped"));
        assert!(summary.contains("games 1"));
        assert!(summary.contains("A/B 0/1"));
    }
}
