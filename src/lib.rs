//! Four-seat No-Limit Texas Hold'em table engine.
//!
//! One human seat plays against three scripted bots across a staged
//! tournament with escalating blinds. The crate is a pure in-process core:
//! a [`session::Session`] drives hands step by step, exposes read-only
//! [`gameplay::Snapshot`]s and an ordered [`gameplay::Event`] log, and
//! hands out [`session::Ticket`]s so that deferred bot moves, street
//! pacing, and turn timers can never act on a hand that has moved on.

pub mod cards;
pub mod config;
pub mod gameplay;
pub mod players;
pub mod session;
pub mod tournament;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, stakes, and pot amounts in whole chips.
pub type Chips = i32;
/// Seat index around the table.
pub type Position = usize;
/// Bot decision inputs and outputs (strength estimates, rolls, aggression).
pub type Probability = f32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 4;
/// The one seat driven by external input.
pub const HUMAN: Position = 2;
/// Seat names in table order.
pub const NAMES: [&str; N] = ["Viper", "Rook", "You", "Jade"];
/// Per-seat aggression multipliers on top of the stage profile.
pub const TEMPERS: [Probability; N] = [1.08, 0.94, 1.0, 1.0];
/// Starting stack for every seat after a table reset.
pub const STACK: Chips = 1500;
/// Small blind of the first level.
pub const S_BLIND: Chips = 10;
/// Big blind of the first level.
pub const B_BLIND: Chips = 20;

// ============================================================================
// TOURNAMENT SCHEDULE
// ============================================================================
/// Hands played at each blind level before the next one.
pub const HANDS_PER_LEVEL: u64 = 8;
/// Ascending (small, big) blind levels; the last one is held indefinitely.
pub const LEVELS: [(Chips, Chips); 8] = [
    (S_BLIND, B_BLIND),
    (15, 30),
    (25, 50),
    (50, 100),
    (75, 150),
    (100, 200),
    (150, 300),
    (200, 400),
];

// ============================================================================
// PACING (cosmetic, never affects outcomes)
// ============================================================================
/// Base bot thinking delay (milliseconds).
pub const THINK_MS: u64 = 700;
/// Uniform jitter added to the bot thinking delay (milliseconds).
pub const THINK_JITTER_MS: u64 = 450;
/// Pause before a street is dealt (milliseconds).
pub const STREET_MS: u64 = 750;
/// Pause between streets when nobody can act anymore (milliseconds).
pub const RUNOUT_MS: u64 = 620;
/// Default human turn timer (milliseconds).
pub const TURN_TIMER_MS: u64 = 30_000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/holdem-{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
