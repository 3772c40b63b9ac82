use crate::Position;

/// Whose move it is, or which table step comes next.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(tag = "type", content = "seat", rename_all = "lowercase")]
pub enum Turn {
    /// A seat owes a decision.
    Choice(Position),
    /// The betting round is closed and the next street must be drawn.
    Chance,
    /// Drawn cards are waiting to be disclosed.
    Reveal,
    /// River betting is closed.
    Showdown,
    /// No hand in progress.
    Terminal,
}

impl Turn {
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Choice(p) => Some(*p),
            _ => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Chance => write!(f, "??"),
            Self::Reveal => write!(f, "!!"),
            Self::Showdown => write!(f, "SD"),
            Self::Terminal => write!(f, "XX"),
        }
    }
}
