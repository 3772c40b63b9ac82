pub mod pending;
pub use pending::*;

pub mod session;
pub use session::*;

pub mod ticket;
pub use ticket::*;
