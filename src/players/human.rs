use super::player::Player;
use crate::Chips;
use crate::Position;
use crate::cards::hole::Hole;
use crate::gameplay::action::Decision;
use crate::gameplay::bounds::Bounds;
use crate::gameplay::game::Game;
use dialoguer::Input;
use dialoguer::Select;

/// Terminal seat. Prompts on stdin and only ever offers legal moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

impl Human {
    /// Blocks on the terminal until a legal decision is entered.
    /// Falls back to the passive move if the terminal goes away.
    pub fn prompt(hole: Option<Hole>, bounds: Bounds) -> Decision {
        match Self::ask(hole, bounds) {
            Ok(decision) => decision,
            Err(e) => {
                log::warn!("[human] prompt failed: {}", e);
                Self::passive(bounds)
            }
        }
    }

    fn passive(bounds: Bounds) -> Decision {
        if bounds.may_check() {
            Decision::CheckCall
        } else {
            Decision::Fold
        }
    }

    fn ask(hole: Option<Hole>, bounds: Bounds) -> dialoguer::Result<Decision> {
        let passive = if bounds.may_check() {
            String::from("Check")
        } else if bounds.to_call >= bounds.max_to {
            format!("All-in {}", bounds.max_to)
        } else {
            format!("Call {}", bounds.to_call)
        };
        let mut labels = vec![String::from("Fold"), passive];
        if bounds.may_raise {
            let aggressive = if bounds.to_call == 0 { "Bet" } else { "Raise" };
            labels.push(String::from(aggressive));
        }
        let prompt = match hole {
            Some(hole) => format!("\nYOU HOLD {} | {}", hole, bounds),
            None => format!("\n{}", bounds),
        };
        let selection = Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(&labels[..])
            .default(if bounds.may_check() { 1 } else { 0 })
            .interact()?;
        match selection {
            0 => Ok(Decision::Fold),
            1 => Ok(Decision::CheckCall),
            _ => Self::raise(bounds).map(Decision::Raise),
        }
    }

    fn raise(bounds: Bounds) -> dialoguer::Result<Chips> {
        let lo = bounds.cheapest();
        let hi = bounds.max_to;
        if lo == hi {
            return Ok(hi);
        }
        Input::<Chips>::new()
            .with_prompt(format!("To ({}-{})", lo, hi))
            .report(false)
            .default(lo)
            .validate_with(|to: &Chips| -> Result<(), String> {
                match *to {
                    to if to < lo => Err(format!("at least {}", lo)),
                    to if to > hi => Err(format!("at most {}", hi)),
                    _ => Ok(()),
                }
            })
            .interact_text()
    }
}

impl Player for Human {
    fn decide(&mut self, game: &Game, position: Position) -> Decision {
        Self::prompt(game.seat(position).hole(), game.bounds_for(position))
    }
}
