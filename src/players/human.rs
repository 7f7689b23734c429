use super::*;
use crate::rules::*;
use crate::*;
use colored::Colorize;
use dialoguer::Input;

/// A person at the terminal.
#[derive(Debug)]
pub struct Human {
    seat: Position,
}

impl From<Position> for Human {
    fn from(seat: Position) -> Self {
        Self { seat }
    }
}

impl Player for Human {
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action> {
        let (own, opponent): (Score, Score) = game.perspective().into();
        let input = Input::<String>::new()
            .with_prompt(format!("You {} vs {}. Dice to roll [0-{}]", own, opponent, MAX_ROLLS))
            .validate_with(|i: &String| -> Result<(), String> {
                Action::try_from(i.as_str()).map(|_| ()).map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()?;
        Action::try_from(input.as_str())
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Turn { seat, .. } if *seat == self.seat => println!("{}", event.to_string().cyan()),
            Event::Turn { .. } => println!("{}", event.to_string().yellow()),
            Event::End {
                winner: Some(seat), ..
            } if *seat == self.seat => println!("{}", "you win".green().bold()),
            Event::End { winner: Some(_), .. } => println!("{}", "you lose".red().bold()),
            Event::End { winner: None, .. } => println!("{}", event),
        }
    }
}
