pub mod bot;
pub use bot::*;

pub mod heuristic;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod player;
pub use player::*;
