use crate::Chips;
use crate::Probability;

/// One step of the tournament ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub name: &'static str,
    /// Stack every bot sits down with when the stage opens.
    pub npc_chips: Chips,
    /// Chips added to the human's stack when the stage opens.
    pub bonus: Chips,
    /// Scales bot aggression.
    pub aggro: Probability,
}

pub const STAGES: [Stage; 4] = [
    Stage {
        name: "Back Room",
        npc_chips: crate::STACK,
        bonus: 0,
        aggro: 1.00,
    },
    Stage {
        name: "Card Club",
        npc_chips: 2500,
        bonus: 1000,
        aggro: 1.12,
    },
    Stage {
        name: "High Rollers",
        npc_chips: 4000,
        bonus: 2000,
        aggro: 1.25,
    },
    Stage {
        name: "Final Table",
        npc_chips: 6000,
        bonus: 3000,
        aggro: 1.40,
    },
];

impl Stage {
    /// The stage at `index`, or the last one past the end of the ladder.
    pub fn at(index: usize) -> &'static Self {
        &STAGES[index.min(STAGES.len() - 1)]
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
