pub mod coordinate;
pub mod direction;
pub mod displacement;
pub mod events;
pub mod flow;
pub mod hare;
pub mod pace;
pub mod path;
pub mod point;
pub mod projections;

pub use coordinate::*;
pub use direction::*;
pub use displacement::*;
pub use events::*;
pub use flow::{expected_paces, MAX_TRAVEL_SECS};
pub use hare::*;
pub use pace::*;
pub use path::*;
pub use point::*;
pub use projections::*;
