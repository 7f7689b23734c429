use crate::*;

/// A store of value estimates.
///
/// Keys never seen before read as zero, never as an error. Learning rules are
/// expressed through [`update`](Self::update), which nudges a stored value
/// toward a target, so the temporal-difference and backward-propagation
/// rules share one write path.
pub trait Table {
    /// What a value is indexed by.
    type K;

    /// Current estimate, zero if unseen.
    fn get(&self, key: &Self::K) -> Utility;
    /// Overwrite an estimate.
    fn set(&mut self, key: &Self::K, value: Utility);

    /// Move the estimate a fraction `rate` of the way toward `target`,
    /// returning the new value.
    fn update(&mut self, key: &Self::K, target: Utility, rate: Utility) -> Utility {
        let value = self.get(key);
        let value = value + rate * (target - value);
        self.set(key, value);
        value
    }
}
