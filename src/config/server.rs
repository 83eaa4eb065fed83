/// Server configuration constants.
///
/// Bind address and session lifetime parameters.
pub const BIND_HOST: &str = "127.0.0.1";

/// Port the HTTP/WebSocket server listens on.
pub const BIND_PORT: u16 = 8080;

/// Time (in seconds) a session survives with no client attached before it is stopped.
/// Reattaching within this window resumes the game where it was left.
pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 60;
