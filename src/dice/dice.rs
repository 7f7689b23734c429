use crate::*;

/// A source of die faces.
///
/// Implementations return a face in `[1, sides]` on every call. The engine
/// only ever draws faces one at a time, so a source may be stateful
/// (an RNG, a cursor into a script) but must never fail.
pub trait Dice {
    /// Roll once.
    fn roll(&mut self) -> Face;
}

/// Any zero-argument closure producing faces is a die.
impl<F> Dice for F
where
    F: FnMut() -> Face,
{
    fn roll(&mut self) -> Face {
        self()
    }
}
