use crate::Position;
use crate::gameplay::action::Decision;
use crate::gameplay::game::Game;

/// Anything that can fill a seat's decision when asked.
pub trait Player {
    fn decide(&mut self, game: &Game, position: Position) -> Decision;
}
