use super::action::Action;
use super::pnl::PnL;
use super::showdown::Award;
use crate::Chips;
use crate::Position;
use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;

/// Everything a presentation needs to animate the table, in order.
/// Each event carries the hand number it belongs to.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// New hand with its button, blinds, and opening stacks.
    HandStart {
        hand: u64,
        dealer: Position,
        small: Position,
        big: Position,
        blinds: (Chips, Chips),
        stacks: Vec<Chips>,
    },
    /// Two cards went to a seat. Only the human's cards are face up.
    HoleCards {
        hand: u64,
        seat: Position,
        hole: Option<Hole>,
    },
    /// A seat took an action (blinds included).
    Action {
        hand: u64,
        seat: Position,
        action: Action,
        pot: Chips,
    },
    /// A street's cards were disclosed. Carries the whole public board.
    Board {
        hand: u64,
        street: Street,
        board: Board,
    },
    /// A live seat turned its cards over at showdown.
    Reveal {
        hand: u64,
        seat: Position,
        hole: Hole,
        strength: Strength,
    },
    /// One pot layer was paid out.
    Award {
        hand: u64,
        award: Award,
        uncontested: bool,
    },
    /// The hand is settled.
    HandEnd { hand: u64, results: Vec<PnL> },
    /// Blinds went up.
    LevelUp {
        hand: u64,
        level: usize,
        blinds: (Chips, Chips),
    },
    /// Every bot went broke; the table moves to the next stage.
    StageUp {
        hand: u64,
        stage: &'static str,
        bonus: Chips,
    },
    /// Too few seats had chips, so everyone was restacked.
    TableReset { hand: u64, stack: Chips },
}

impl Event {
    pub fn hand(&self) -> u64 {
        match self {
            Event::HandStart { hand, .. }
            | Event::HoleCards { hand, .. }
            | Event::Action { hand, .. }
            | Event::Board { hand, .. }
            | Event::Reveal { hand, .. }
            | Event::Award { hand, .. }
            | Event::HandEnd { hand, .. }
            | Event::LevelUp { hand, .. }
            | Event::StageUp { hand, .. }
            | Event::TableReset { hand, .. } => *hand,
        }
    }
    pub fn action(&self) -> Option<Action> {
        match self {
            Event::Action { action, .. } => Some(*action),
            _ => None,
        }
    }
    pub fn position(&self) -> Option<Position> {
        match self {
            Event::HoleCards { seat, .. } => Some(*seat),
            Event::Action { seat, .. } => Some(*seat),
            Event::Reveal { seat, .. } => Some(*seat),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::HandStart {
                hand,
                dealer,
                blinds,
                ..
            } => write!(
                f,
                "Hand #{} (dealer P{}, blinds {}/{})",
                hand, dealer, blinds.0, blinds.1
            ),
            Event::HoleCards {
                seat, hole: Some(h), ..
            } => write!(f, "P{}: dealt {}", seat, h),
            Event::HoleCards {
                seat, hole: None, ..
            } => write!(f, "P{}: dealt", seat),
            Event::Action { seat, action, .. } => write!(f, "P{}: {}", seat, action),
            Event::Board { street, board, .. } => write!(f, "{}: {}", street, board),
            Event::Reveal {
                seat,
                hole,
                strength,
                ..
            } => write!(f, "P{}: {} {}", seat, hole, strength.ranking()),
            Event::Award { award, .. } => {
                let s = award
                    .winners
                    .iter()
                    .map(|(p, c)| format!("P{} wins {}", p, c))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}", s)
            }
            Event::HandEnd { hand, .. } => write!(f, "Hand #{} over", hand),
            Event::LevelUp { level, blinds, .. } => {
                write!(f, "Level {}: blinds {}/{}", level + 1, blinds.0, blinds.1)
            }
            Event::StageUp { stage, bonus, .. } => write!(f, "Stage: {} (+{})", stage, bonus),
            Event::TableReset { stack, .. } => write!(f, "Table reset to {} each", stack),
        }
    }
}
