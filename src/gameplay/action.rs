use crate::Chips;

/// What a seat actually did, after the engine resolved its [`Decision`].
///
/// `Call` and `Blind` carry the chips added. `Bet`, `Raise` and `Shove`
/// carry the seat's street total afterwards. `Shove` covers every move
/// that leaves the seat all-in, including a short call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "type", content = "chips", rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Bet(Chips),
    Raise(Chips),
    Shove(Chips),
    Blind(Chips),
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Action::Fold => String::from("Fold"),
            Action::Check => String::from("Check"),
            Action::Call(c) => format!("Call {}", c),
            Action::Bet(c) => format!("Bet {}", c),
            Action::Raise(c) => format!("Raise {}", c),
            Action::Shove(c) => format!("All-in {}", c),
            Action::Blind(c) => format!("Blind {}", c),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a seat asks to do. The engine validates it and resolves it into
/// an [`Action`], or rejects it without touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "to", rename_all = "lowercase")]
pub enum Decision {
    Fold,
    /// Check when nothing is owed, otherwise call (all-in if short).
    CheckCall,
    /// Raise so the seat's street total becomes this amount.
    Raise(Chips),
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Decision::Fold => write!(f, "fold"),
            Decision::CheckCall => write!(f, "check/call"),
            Decision::Raise(to) => write!(f, "raise to {}", to),
        }
    }
}
