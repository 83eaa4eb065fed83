use std::time::{Instant, Duration};
use log::warn;

use crate::config::anti_spam::{MAX_COMMANDS_PER_SECOND, MAX_ERRORS_PER_SECOND};

/// Tracks flood state for a single WebSocket connection.
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Timestamp of last reset (for per-second counters)
    last_tick: Instant,
    commands_this_tick: u32,
    errors_this_tick: u32,
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            commands_this_tick: 0,
            errors_this_tick: 0,
        }
    }

    /// Call for every incoming command.
    /// Returns true if the connection exceeded its command rate and must be closed.
    pub fn record_command(&mut self, connection: &str) -> bool {
        self.tick(Instant::now());
        self.commands_this_tick += 1;
        if self.commands_this_tick > MAX_COMMANDS_PER_SECOND {
            warn!("[AntiSpam] connection={} exceeded {} commands per second", connection, MAX_COMMANDS_PER_SECOND);
            return true;
        }
        false
    }

    /// Call before sending an error. Returns true if the error should be sent:
    /// repeats of the previous code and errors past the per-second cap are dropped.
    pub fn should_send_error(&mut self, error_code: &str, connection: &str) -> bool {
        self.tick(Instant::now());
        if self.last_error_code.as_deref() == Some(error_code) {
            warn!("[AntiSpam] Suppressed duplicate error '{}' for connection={}", error_code, connection);
            return false;
        }
        self.errors_this_tick += 1;
        if self.errors_this_tick > MAX_ERRORS_PER_SECOND {
            return false;
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a command was accepted, so the next error is reported again.
    pub fn reset_error_suppression(&mut self) {
        self.last_error_code = None;
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.commands_this_tick = 0;
            self.errors_this_tick = 0;
        }
    }
}

impl Default for AntiSpamState {
    fn default() -> Self {
        Self::new()
    }
}
