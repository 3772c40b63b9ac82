use super::seat::State;
use crate::Chips;
use crate::Position;
use crate::cards::strength::Strength;

/// A seat's row in the end-of-hand ledger.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub position: Position,
    pub reward: Chips,
    pub risked: Chips,
    pub status: State,
    pub strength: Option<Strength>,
}

impl Settlement {
    pub fn pnl(&self) -> Chips {
        self.reward - self.risked
    }
    pub fn is_folded(&self) -> bool {
        self.status == State::Folding
    }
}

impl From<(Position, Chips, State, Option<Strength>)> for Settlement {
    fn from((position, risked, status, strength): (Position, Chips, State, Option<Strength>)) -> Self {
        Self {
            position,
            reward: 0,
            risked,
            status,
            strength,
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let strength = self
            .strength
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_default();
        if self.reward > 0 {
            write!(f, "P{} +{:<5}{}", self.position, self.reward, strength)
        } else {
            write!(f, "P{}       {}", self.position, strength)
        }
    }
}
