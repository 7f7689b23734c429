use super::*;
use crate::*;

/// A deterministic die that replays a fixed sequence of faces, wrapping
/// around when it runs out.
///
/// `Scripted::from(vec![4, 2, 5, 1])` yields 4, 2, 5, 1, 4, 2, ...
#[derive(Debug, Clone)]
pub struct Scripted {
    faces: Vec<Face>,
    cursor: usize,
}

impl From<Vec<Face>> for Scripted {
    fn from(faces: Vec<Face>) -> Self {
        assert!(!faces.is_empty(), "scripted dice need at least one face");
        assert!(faces.iter().all(|f| *f >= 1), "faces start at one");
        Self { faces, cursor: 0 }
    }
}

impl From<&[Face]> for Scripted {
    fn from(faces: &[Face]) -> Self {
        Self::from(faces.to_vec())
    }
}

impl Scripted {
    /// Number of faces drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl Dice for Scripted {
    fn roll(&mut self) -> Face {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_and_wraps() {
        let ref mut dice = Scripted::from(vec![4, 2, 5, 1]);
        let faces = (0..6).map(|_| dice.roll()).collect::<Vec<_>>();
        assert_eq!(faces, vec![4, 2, 5, 1, 4, 2]);
        assert_eq!(dice.drawn(), 6);
    }

    #[test]
    fn closures_are_dice() {
        let mut n: Face = 0;
        let ref mut dice = || {
            n += 1;
            n
        };
        assert_eq!(dice.roll(), 1);
        assert_eq!(dice.roll(), 2);
    }
}
