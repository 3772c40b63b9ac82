use super::ticket::Ticket;
use crate::Position;
use crate::gameplay::bounds::Bounds;

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pending {
    /// No hand in progress. Call `start_hand`.
    Idle,
    /// The human is on the clock. Call `submit` (or `timeout`).
    Human { seat: Position, bounds: Bounds },
    /// A bot is thinking. Call `resume` with the ticket.
    Bot { seat: Position, ticket: Ticket },
    /// The next street is about to be drawn.
    Deal { ticket: Ticket },
    /// Drawn cards are about to be turned face up.
    Reveal { ticket: Ticket },
    /// River betting is closed; hands are about to be shown.
    Showdown { ticket: Ticket },
}

impl Pending {
    pub fn ticket(&self) -> Option<Ticket> {
        match self {
            Pending::Bot { ticket, .. }
            | Pending::Deal { ticket }
            | Pending::Reveal { ticket }
            | Pending::Showdown { ticket } => Some(*ticket),
            Pending::Idle | Pending::Human { .. } => None,
        }
    }
    pub fn is_idle(&self) -> bool {
        matches!(self, Pending::Idle)
    }
    pub fn is_human(&self) -> bool {
        matches!(self, Pending::Human { .. })
    }
}

impl std::fmt::Display for Pending {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Pending::Idle => write!(f, "idle"),
            Pending::Human { seat, bounds } => write!(f, "P{} to act: {}", seat, bounds),
            Pending::Bot { seat, ticket } => write!(f, "P{} thinking {}", seat, ticket),
            Pending::Deal { ticket } => write!(f, "deal {}", ticket),
            Pending::Reveal { ticket } => write!(f, "reveal {}", ticket),
            Pending::Showdown { ticket } => write!(f, "showdown {}", ticket),
        }
    }
}
