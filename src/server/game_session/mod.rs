pub mod server;
pub mod session;
pub mod messages;
pub mod timers;

pub use server::GameSession;
