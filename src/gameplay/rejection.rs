use crate::Chips;
use crate::Position;

/// Why the table refused a request. Nothing changes on a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no hand has been started")]
    Idle,
    #[error("the hand is already over")]
    HandOver,
    #[error("a hand is still in progress")]
    InProgress,
    #[error("it is not seat {0}'s turn")]
    OutOfTurn(Position),
    #[error("the table is waiting on a bot or the dealer")]
    NotHuman,
    #[error("continuation for hand {hand} step {step} is stale")]
    Stale { hand: u64, step: u64 },
    #[error("seat {0} cannot act")]
    CannotAct(Position),
    #[error("raising is not available")]
    NoRaise,
    #[error("raise to {to} is below the minimum of {min}")]
    UnderRaise { to: Chips, min: Chips },
    #[error("raise to {0} does not increase the bet")]
    NoIncrease(Chips),
    #[error("nothing of that kind is pending")]
    NotReady,
}
