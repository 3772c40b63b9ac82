pub mod blinds;
pub use blinds::*;

pub mod progression;
pub use progression::*;

pub mod stage;
pub use stage::*;
