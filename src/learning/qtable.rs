use super::*;
use crate::rules::*;
use crate::save::*;
use crate::*;
use anyhow::Context;

/// One step of play: `(state, action, successor, successor is terminal)`.
pub type Transition = (Pair, Action, Pair, bool);

/// Dense action-value table over `(own, opponent, action)`.
///
/// Rows are indexed by the acting player's score pair, so one table serves
/// both seats. The arena holds `(goal + 1)² × 11` values and every lookup
/// caps scores into `[0, goal]` first; nothing outside the arena is ever
/// addressed.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    goal: Score,
    values: Vec<Utility>,
}

impl Default for QTable {
    fn default() -> Self {
        Self::new(GOAL)
    }
}

impl QTable {
    /// A zeroed table for games played to `goal`.
    pub fn new(goal: Score) -> Self {
        assert!(goal >= 1 && goal <= GOAL, "goal {} outside 1..={}", goal, GOAL);
        let side = goal as usize + 1;
        Self {
            goal,
            values: vec![0.; side * side * ACTIONS],
        }
    }
    pub fn goal(&self) -> Score {
        self.goal
    }
    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Number of rows holding at least one learned value.
    pub fn visited(&self) -> usize {
        self.values
            .chunks(ACTIONS)
            .filter(|row| row.iter().any(|v| *v != 0.))
            .count()
    }
    /// Values of every action at this pair, free bonus first.
    pub fn row(&self, pair: Pair) -> &[Utility] {
        let offset = self.offset(pair);
        &self.values[offset..offset + ACTIONS]
    }
    /// Highest-valued action. The first maximum wins ties, so an untouched
    /// row picks the free bonus.
    pub fn best(&self, pair: Pair) -> Action {
        let (index, _) = self
            .row(pair)
            .iter()
            .enumerate()
            .fold((0, Utility::NEG_INFINITY), |(i, best), (j, v)| {
                match *v > best {
                    true => (j, *v),
                    false => (i, best),
                }
            });
        Action::from(index)
    }
    /// Value of the best action at this pair.
    pub fn max(&self, pair: Pair) -> Utility {
        self.row(pair)
            .iter()
            .copied()
            .fold(Utility::NEG_INFINITY, Utility::max)
    }
    /// One-step temporal-difference update.
    ///
    /// `Q[s,a] += rate * (reward + discount * max Q[s'] - Q[s,a])`, where a
    /// terminal successor is worth nothing.
    pub fn learn(&mut self, transition: Transition, reward: Utility, rate: Utility, discount: Utility) -> Utility {
        let (from, action, into, terminal) = transition;
        let future = match terminal {
            true => 0.,
            false => self.max(into),
        };
        self.update(&(from, action), reward + discount * future, rate)
    }
    fn offset(&self, pair: Pair) -> usize {
        let side = self.goal as usize + 1;
        let pair = pair.cap(self.goal);
        let offset = (pair.a() as usize * side + pair.b() as usize) * ACTIONS;
        debug_assert!(offset + ACTIONS <= self.values.len(), "{} escaped the arena", pair);
        offset
    }
}

impl Table for QTable {
    type K = (Pair, Action);
    fn get(&self, (pair, action): &Self::K) -> Utility {
        self.values[self.offset(*pair) + action.index()]
    }
    fn set(&mut self, (pair, action): &Self::K, value: Utility) {
        let index = self.offset(*pair) + action.index();
        self.values[index] = value;
    }
}

impl Disk for QTable {
    fn name() -> &'static str {
        "qtable"
    }
    fn header() -> &'static [u8] {
        b"HOGQ\n\xFF\r\n\0"
    }
    fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use byteorder::BE;
        use byteorder::WriteBytesExt;
        use std::io::Write;
        log::info!("{:<32}{:<32}", "saving      q table", path.display());
        let file = std::fs::File::create(path).with_context(|| format!("touch {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        writer.write_all(Self::header())?;
        writer.write_u16::<BE>(self.goal)?;
        writer.write_u16::<BE>(ACTIONS as u16)?;
        for value in self.values.iter() {
            writer.write_f32::<BE>(*value)?;
        }
        writer.write_u16::<BE>(Self::footer())?;
        writer.flush()?;
        Ok(())
    }
    fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use byteorder::BE;
        use byteorder::ReadBytesExt;
        log::info!("{:<32}{:<32}", "loading     q table", path.display());
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        let ref mut reader = std::io::BufReader::new(file);
        Self::verify(reader).with_context(|| format!("{} is not a q table", path.display()))?;
        let goal = reader.read_u16::<BE>().context("goal")?;
        anyhow::ensure!(goal >= 1 && goal <= GOAL, "goal {} outside 1..={}", goal, GOAL);
        let actions = reader.read_u16::<BE>().context("action count")?;
        anyhow::ensure!(actions as usize == ACTIONS, "{} actions per row, expected {}", actions, ACTIONS);
        let mut table = Self::new(goal);
        for value in table.values.iter_mut() {
            *value = reader.read_f32::<BE>().context("truncated q table")?;
        }
        let footer = reader.read_u16::<BE>().context("missing footer")?;
        anyhow::ensure!(footer == Self::footer(), "unexpected footer {:#06x}", footer);
        log::info!("loaded {} visited rows", table.visited());
        Ok(table)
    }
}
