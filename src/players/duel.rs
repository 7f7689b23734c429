use super::*;
use crate::dice::*;
use crate::rules::*;
use crate::*;

/// Play `game` to completion between two seated players, broadcasting every
/// event to both. Gives up once `cap` turns have been played.
pub fn duel<D>(mut players: [&mut dyn Player; N], mut game: Game, dice: &mut D, cap: usize) -> anyhow::Result<Game>
where
    D: Dice + ?Sized,
{
    let winner = loop {
        if let Some(winner) = game.winner() {
            break Some(winner);
        }
        if game.ticker() >= cap {
            break None;
        }
        let seat = game.actor();
        let action = players[seat].decide(&game)?;
        game = game.apply(action, dice);
        let ref event = Event::Turn { seat, action, game };
        players.iter_mut().for_each(|player| player.notify(event));
    };
    let ref event = Event::End { winner, game };
    players.iter_mut().for_each(|player| player.notify(event));
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always rolls the same number of dice and keeps a log of events.
    #[derive(Default)]
    struct Stubborn {
        rolls: u8,
        events: Vec<Event>,
    }

    impl Player for Stubborn {
        fn decide(&mut self, _: &Game) -> anyhow::Result<Action> {
            Ok(Action::from(self.rolls))
        }
        fn notify(&mut self, event: &Event) {
            self.events.push(*event);
        }
    }

    /// Refuses to play.
    struct Quitter;

    impl Player for Quitter {
        fn decide(&mut self, _: &Game) -> anyhow::Result<Action> {
            Err(anyhow::anyhow!("quit"))
        }
    }

    #[test]
    fn duels_run_to_the_end() {
        let mut a = Stubborn { rolls: 5, ..Default::default() };
        let mut b = Fish::seeded(0);
        let ref mut dice = Fair::seeded(SIDES, 3);
        let game = duel([&mut a, &mut b], Game::root(), dice, TURN_CAP).unwrap();
        assert!(game.is_terminal());
        let turns = a.events.iter().filter(|e| matches!(e, Event::Turn { .. })).count();
        assert_eq!(turns, game.ticker());
        assert!(matches!(a.events.last(), Some(Event::End { winner: Some(_), .. })));
    }

    #[test]
    fn both_players_hear_every_turn() {
        let mut a = Stubborn { rolls: 2, ..Default::default() };
        let mut b = Stubborn { rolls: 3, ..Default::default() };
        let ref mut dice = Fair::seeded(SIDES, 4);
        duel([&mut a, &mut b], Game::with_goal(30), dice, TURN_CAP).unwrap();
        assert_eq!(a.events, b.events);
    }

    #[test]
    fn duels_stop_at_the_cap() {
        let mut a = Stubborn { rolls: 1, ..Default::default() };
        let mut b = Stubborn { rolls: 1, ..Default::default() };
        let ref mut dice = Scripted::from(vec![1]);
        let game = duel([&mut a, &mut b], Game::root(), dice, 6).unwrap();
        assert_eq!(game.ticker(), 6);
        assert_eq!(a.events.last(), Some(&Event::End { winner: None, game }));
    }

    #[test]
    fn player_errors_propagate() {
        let mut a = Quitter;
        let mut b = Fish::seeded(1);
        let ref mut dice = Fair::seeded(SIDES, 5);
        assert!(duel([&mut a, &mut b], Game::root(), dice, TURN_CAP).is_err());
    }
}
