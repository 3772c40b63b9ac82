/// Claim on one deferred step of one hand.
///
/// Handed out with every [`super::Pending`] that needs a later resumption.
/// The session bumps its step counter on every change, so a ticket held
/// across a fold, a new street, or a new hand no longer matches and is
/// turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Ticket {
    pub hand: u64,
    pub step: u64,
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}.{}", self.hand, self.step)
    }
}
