pub mod logger;
pub mod movement;

pub use logger::*;
pub use movement::*;
