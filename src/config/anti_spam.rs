/// Configuration for per-connection flood protection.
/// All values are counts per second.
pub const MAX_COMMANDS_PER_SECOND: u32 = 20;
pub const MAX_ERRORS_PER_SECOND: u32 = 5;
