pub mod error;
pub mod types;
pub mod schedule;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;

pub use error::CommandError;
pub use state::GameState;
