use crate::Chips;
use crate::STACK;
use std::time::Duration;

/// Cosmetic delays a presentation waits before resuming a deferred step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pace {
    pub think: Duration,
    pub jitter: Duration,
    pub street: Duration,
    pub runout: Duration,
}

impl Pace {
    /// No waiting at all. Used by simulations and tests.
    pub fn instant() -> Self {
        Self {
            think: Duration::ZERO,
            jitter: Duration::ZERO,
            street: Duration::ZERO,
            runout: Duration::ZERO,
        }
    }
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            think: Duration::from_millis(crate::THINK_MS),
            jitter: Duration::from_millis(crate::THINK_JITTER_MS),
            street: Duration::from_millis(crate::STREET_MS),
            runout: Duration::from_millis(crate::RUNOUT_MS),
        }
    }
}

/// Session-wide knobs.
///
/// A fixed `seed` makes every shuffle and every bot roll reproducible.
/// The turn `timer` is enforced by whoever drives the session, never by
/// the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub stack: Chips,
    pub hands_per_level: u64,
    pub seed: Option<u64>,
    pub timer: Option<Duration>,
    pub pace: Pace,
}

impl Config {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            pace: Pace::instant(),
            timer: None,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack: STACK,
            hands_per_level: crate::HANDS_PER_LEVEL,
            seed: None,
            timer: Some(Duration::from_millis(crate::TURN_TIMER_MS)),
            pace: Pace::default(),
        }
    }
}
