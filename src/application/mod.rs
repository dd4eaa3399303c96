pub mod command;
pub mod movement_service;

pub use command::*;
pub use movement_service::*;
