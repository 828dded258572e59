//! Application layer: the stateful game service.

pub mod game;

pub use game::{GameService, MoveRecord};
