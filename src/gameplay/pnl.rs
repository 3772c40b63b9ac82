use super::seat::State;
use super::settlement::Settlement;
use crate::Chips;
use crate::Position;

/// Public profit/loss for one seat at the end of a hand.
/// Carries chip movements and final state without revealing hole cards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PnL {
    seat: Position,
    reward: Chips,
    risked: Chips,
    status: State,
}

impl PnL {
    pub fn new(seat: Position, reward: Chips, risked: Chips, status: State) -> Self {
        Self {
            seat,
            reward,
            risked,
            status,
        }
    }
    pub fn won(&self) -> Chips {
        self.reward - self.risked
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn reward(&self) -> Chips {
        self.reward
    }
    pub fn risked(&self) -> Chips {
        self.risked
    }
    pub fn status(&self) -> State {
        self.status
    }
}

impl From<&Settlement> for PnL {
    fn from(s: &Settlement) -> Self {
        Self::new(s.position, s.reward, s.risked, s.status)
    }
}

impl std::fmt::Display for PnL {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:+}", self.won())
    }
}
