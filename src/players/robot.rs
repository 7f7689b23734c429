use super::*;
use crate::learning::*;
use crate::rules::*;

/// Plays the best action of a learned Q table, never exploring.
#[derive(Debug, Clone, Copy)]
pub struct Robot<'a> {
    table: &'a QTable,
}

impl<'a> From<&'a QTable> for Robot<'a> {
    fn from(table: &'a QTable) -> Self {
        Self { table }
    }
}

impl Player for Robot<'_> {
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action> {
        let action = self.table.best(game.perspective());
        log::debug!("robot at {} chooses {}", game.perspective(), action);
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::*;

    #[test]
    fn untrained_robots_take_the_free_bonus() {
        let table = QTable::default();
        let mut robot = Robot::from(&table);
        assert_eq!(robot.decide(&Game::root()).unwrap(), Action::FREE);
    }

    #[test]
    fn robots_read_their_own_perspective() {
        // A pigs out from 25 to 26, so B looks at (40, 26).
        let game = Game::root()
            .seated(Pair::from((25, 40)))
            .apply(Action::from(1u8), &mut Scripted::from(vec![1]));
        assert_eq!(game.perspective(), Pair::from((40, 26)));
        let mut table = QTable::default();
        table.set(&(Pair::from((40, 26)), Action::from(4u8)), 1.);
        table.set(&(Pair::from((26, 40)), Action::from(9u8)), 2.);
        assert_eq!(Robot::from(&table).decide(&game).unwrap(), Action::from(4u8));
    }
}
