use super::*;
use crate::save::*;
use crate::*;
use anyhow::Context;
use std::collections::BTreeMap;

/// Fields in one persisted row: the key and its value.
const FIELDS: u16 = 2;

/// Sparse state-value table.
///
/// Only visited score pairs occupy memory. Ordered by key so that saved files
/// are byte-for-byte reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateValues(BTreeMap<StateKey, Utility>);

impl StateValues {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &Utility)> {
        self.0.iter()
    }
    /// Propagate a terminal reward backward through the states a player
    /// visited, most recent first. Each state moves toward the discounted
    /// value of its successor, where the last state's successor is the
    /// reward itself.
    pub fn feed(&mut self, states: &[StateKey], reward: Utility, rate: Utility, discount: Utility) {
        states
            .iter()
            .rev()
            .fold(reward, |reward, state| self.update(state, discount * reward, rate));
    }
}

impl Table for StateValues {
    type K = StateKey;
    fn get(&self, key: &Self::K) -> Utility {
        self.0.get(key).copied().unwrap_or_default()
    }
    fn set(&mut self, key: &Self::K, value: Utility) {
        self.0.insert(*key, value);
    }
}

impl Disk for StateValues {
    fn name() -> &'static str {
        "values"
    }
    fn header() -> &'static [u8] {
        b"HOGV\n\xFF\r\n\0"
    }
    fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use byteorder::BE;
        use byteorder::WriteBytesExt;
        use std::io::Write;
        log::info!("{:<32}{:<32}", "saving      state values", path.display());
        let file = std::fs::File::create(path).with_context(|| format!("touch {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        writer.write_all(Self::header())?;
        for (key, value) in self.0.iter() {
            writer.write_u16::<BE>(FIELDS)?;
            writer.write_u32::<BE>(u32::from(*key))?;
            writer.write_f32::<BE>(*value)?;
        }
        writer.write_u16::<BE>(Self::footer())?;
        writer.flush()?;
        Ok(())
    }
    fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        use byteorder::BE;
        use byteorder::ReadBytesExt;
        log::info!("{:<32}{:<32}", "loading     state values", path.display());
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
        let ref mut reader = std::io::BufReader::new(file);
        Self::verify(reader).with_context(|| format!("{} is not a state value table", path.display()))?;
        let mut values = BTreeMap::new();
        loop {
            match reader.read_u16::<BE>().context("missing footer")? {
                FIELDS => {
                    let key = StateKey::try_from(reader.read_u32::<BE>()?)?;
                    let value = reader.read_f32::<BE>()?;
                    values.insert(key, value);
                }
                n if n == Self::footer() => break,
                n => anyhow::bail!("unexpected field count {}", n),
            }
        }
        log::info!("loaded {} states", values.len());
        Ok(Self(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::*;

    fn key(a: Score, b: Score) -> StateKey {
        StateKey::from(Pair::from((a, b)))
    }

    #[test]
    fn unseen_reads_zero() {
        let values = StateValues::default();
        assert_eq!(values.get(&key(55, 12)), 0.);
        assert!(values.is_empty());
    }

    #[test]
    fn update_moves_toward_target() {
        let mut values = StateValues::default();
        assert_eq!(values.update(&key(1, 1), 1., 0.5), 0.5);
        assert_eq!(values.update(&key(1, 1), 1., 0.5), 0.75);
        assert_eq!(values.update(&key(1, 1), 0., 1.), 0.);
    }

    #[test]
    fn feed_walks_backward() {
        let mut values = StateValues::default();
        let states = [key(10, 0), key(30, 12), key(100, 40)];
        values.feed(&states, 1., 0.5, 0.5);
        // last state: 0 + 0.5 * (0.5 * 1) = 0.25
        // middle:     0 + 0.5 * (0.5 * 0.25) = 0.0625
        // first:      0 + 0.5 * (0.5 * 0.0625) = 0.015625
        assert_eq!(values.get(&key(100, 40)), 0.25);
        assert_eq!(values.get(&key(30, 12)), 0.0625);
        assert_eq!(values.get(&key(10, 0)), 0.015625);
    }

    #[test]
    fn losses_pull_values_down() {
        let mut values = StateValues::default();
        values.set(&key(20, 20), 0.8);
        values.feed(&[key(20, 20)], 0., 0.5, 0.9);
        assert!((values.get(&key(20, 20)) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn repeated_states_update_twice() {
        let mut values = StateValues::default();
        values.feed(&[key(5, 5), key(5, 5)], 1., 1., 1.);
        assert_eq!(values.get(&key(5, 5)), 1.);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn disk_round_trip() {
        let mut values = StateValues::default();
        values.set(&key(18, 9), 0.5);
        values.set(&key(100, 0), 1.);
        values.set(&key(0, 100), -0.25);
        let path = std::env::temp_dir().join(format!("hog-values-{}.bin", std::process::id()));
        values.save(&path).unwrap();
        let loaded = StateValues::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, values);
    }

    /// Header followed by one row with the given field count and key.
    fn one_row(name: &str, fields: u16, key: u32) -> std::path::PathBuf {
        use byteorder::BE;
        use byteorder::WriteBytesExt;
        let path = std::env::temp_dir().join(format!("hog-{}-{}.bin", name, std::process::id()));
        let mut bytes = StateValues::header().to_vec();
        bytes.write_u16::<BE>(fields).unwrap();
        bytes.write_u32::<BE>(key).unwrap();
        bytes.write_f32::<BE>(0.5).unwrap();
        bytes.write_u16::<BE>(StateValues::footer()).unwrap();
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn disk_accepts_well_formed_rows() {
        let path = one_row("values-ok", 2, 18009);
        let loaded = StateValues::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.unwrap().get(&key(18, 9)), 0.5);
    }

    #[test]
    fn disk_rejects_wrong_field_counts() {
        let path = one_row("values-fields", 3, 18009);
        let loaded = StateValues::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(loaded.is_err());
    }

    #[test]
    fn disk_rejects_out_of_range_keys() {
        let path = one_row("values-key", 2, 5_000_000);
        let loaded = StateValues::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(loaded.is_err());
    }

    #[test]
    fn disk_rejects_missing_footers() {
        let path = std::env::temp_dir().join(format!("hog-values-footer-{}.bin", std::process::id()));
        std::fs::write(&path, StateValues::header()).unwrap();
        let loaded = StateValues::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(loaded.is_err());
    }

    #[test]
    fn disk_rejects_q_tables() {
        let path = std::env::temp_dir().join(format!("hog-values-mismatch-{}.bin", std::process::id()));
        QTable::new(4).save(&path).unwrap();
        assert!(StateValues::load(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
