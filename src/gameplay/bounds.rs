use crate::Chips;

/// The legal moves open to the seat on the clock.
///
/// `min_to` and `max_to` are street totals: a raise must land in
/// `min_to..=max_to`, or exactly on `max_to` when the seat cannot afford
/// a full raise (`min_to > max_to` in that case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Bounds {
    pub to_call: Chips,
    pub min_to: Chips,
    pub max_to: Chips,
    pub may_raise: bool,
}

impl Bounds {
    pub fn may_check(&self) -> bool {
        self.to_call == 0
    }
    /// The cheapest legal raise target.
    pub fn cheapest(&self) -> Chips {
        self.min_to.min(self.max_to)
    }
    /// Pulls a raise target into the legal range.
    pub fn clamp(&self, to: Chips) -> Chips {
        to.max(self.cheapest()).min(self.max_to)
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.to_call, self.may_raise) {
            (0, true) => write!(f, "check or bet {}-{}", self.cheapest(), self.max_to),
            (0, false) => write!(f, "check"),
            (c, true) => write!(f, "call {} or raise {}-{}", c, self.cheapest(), self.max_to),
            (c, false) => write!(f, "call {} or fold", c),
        }
    }
}
