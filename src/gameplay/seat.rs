use super::action::Action;
use crate::Chips;
use crate::Probability;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;

/// Who decides for a seat.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Human,
    /// A scripted opponent with its own aggression multiplier.
    Bot { temper: Probability },
}

/// Where a seat stands in the current hand.
///
/// `Folding` doubles as "sitting out": seats that start a hand without
/// chips are folded before any card is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

/// One chair at the table.
///
/// `stack` persists across hands. Everything else is per hand and is
/// cleared by [`Seat::reset`]. `stake` is what the seat has put in on the
/// current street, `spent` what it has put in over the whole hand.
#[derive(Debug, Clone)]
pub struct Seat {
    name: &'static str,
    kind: Kind,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    state: State,
    acted: bool,
    hole: Option<Hole>,
    last: Option<Action>,
    shown: Option<Strength>,
}

impl Seat {
    pub fn new(name: &'static str, kind: Kind, stack: Chips) -> Self {
        Self {
            name,
            kind,
            stack,
            stake: 0,
            spent: 0,
            state: State::Betting,
            acted: false,
            hole: None,
            last: None,
            shown: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn is_human(&self) -> bool {
        self.kind == Kind::Human
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn acted(&self) -> bool {
        self.acted
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn last(&self) -> Option<Action> {
        self.last
    }
    pub fn shown(&self) -> Option<&Strength> {
        self.shown.as_ref()
    }

    /// Still has decisions to make this hand.
    pub fn can_act(&self) -> bool {
        self.state == State::Betting && self.stack > 0
    }
    /// Still contesting the pot.
    pub fn is_live(&self) -> bool {
        self.state != State::Folding && (self.stack > 0 || self.state == State::Shoving)
    }
    pub fn is_folded(&self) -> bool {
        self.state == State::Folding
    }
    pub fn is_shoving(&self) -> bool {
        self.state == State::Shoving
    }

    /// Moves up to `amount` from the stack onto the table and returns what
    /// actually moved. Emptying the stack puts the seat all-in.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        if amount <= 0 || self.stack <= 0 {
            return 0;
        }
        let chips = amount.min(self.stack);
        self.stack -= chips;
        self.stake += chips;
        self.spent += chips;
        if self.stack == 0 {
            self.state = State::Shoving;
        }
        chips
    }
    pub fn win(&mut self, chips: Chips) {
        self.stack += chips;
    }
    pub fn fold(&mut self) {
        self.state = State::Folding;
    }
    pub fn touch(&mut self, action: Action) {
        self.acted = true;
        self.last = Some(action);
    }
    pub fn set_acted(&mut self, acted: bool) {
        self.acted = acted;
    }
    pub fn set_stack(&mut self, stack: Chips) {
        self.stack = stack;
    }
    pub fn show(&mut self, strength: Strength) {
        self.shown = Some(strength);
    }

    /// Clears every per-hand field. Seats without chips sit the hand out.
    pub fn reset(&mut self) {
        self.stake = 0;
        self.spent = 0;
        self.hole = None;
        self.last = None;
        self.shown = None;
        self.state = if self.stack > 0 {
            State::Betting
        } else {
            State::Folding
        };
        self.acted = self.state == State::Folding;
    }
    pub fn deal(&mut self, hole: Hole) {
        self.hole = Some(hole);
    }
    /// Street boundary: stakes go back to zero and anyone who can still
    /// act owes a decision again.
    pub fn reset_street(&mut self) {
        self.stake = 0;
        self.acted = !self.can_act();
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status = match self.state {
            State::Betting => "P",
            State::Shoving => "S",
            State::Folding => "F",
        };
        write!(f, "{:<6}{} {:>6} {:>5}", self.name, status, self.stack, self.stake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_caps_at_stack() {
        let mut seat = Seat::new("Rook", Kind::Bot { temper: 1.0 }, 30);
        assert_eq!(seat.commit(50), 30);
        assert_eq!(seat.stack(), 0);
        assert_eq!(seat.stake(), 30);
        assert_eq!(seat.spent(), 30);
        assert!(seat.is_shoving());
        assert!(seat.is_live());
        assert!(!seat.can_act());
        assert_eq!(seat.commit(10), 0);
    }

    #[test]
    fn bankrupt_seat_sits_out() {
        let mut seat = Seat::new("Jade", Kind::Bot { temper: 1.0 }, 0);
        seat.reset();
        assert!(seat.is_folded());
        assert!(seat.acted());
        assert!(!seat.is_live());
    }

    #[test]
    fn street_reset_keeps_spent() {
        let mut seat = Seat::new("You", Kind::Human, 100);
        seat.commit(40);
        seat.touch(Action::Call(40));
        seat.reset_street();
        assert_eq!(seat.stake(), 0);
        assert_eq!(seat.spent(), 40);
        assert!(!seat.acted());
    }
}
