pub mod action;
pub use action::*;

pub mod bounds;
pub use bounds::*;

pub mod event;
pub use event::*;

pub mod game;
pub use game::*;

pub mod pnl;
pub use pnl::*;

pub mod pot;
pub use pot::*;

pub mod rejection;
pub use rejection::*;

pub mod seat;
pub use seat::*;

pub mod settlement;
pub use settlement::*;

pub mod showdown;
pub use showdown::*;

pub mod snapshot;
pub use snapshot::*;

pub mod turn;
pub use turn::*;
