/// Game configuration constants.
///
/// This module defines the gameplay parameters: grid dimensions, the level table,
/// flash timing, recall budgets and the short result pauses.

/// Number of rows and columns in the square grid.
pub const GRID_SIZE: usize = 5;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Highest level. Completing it wraps the player back to level 1.
pub const MAX_LEVEL: u8 = 7;

// Every level needs `level` distinct cells.
const _: () = assert!(CELL_COUNT >= MAX_LEVEL as usize);

/// Flash duration at level 1 (in milliseconds).
pub const FLASH_BASE_MS: u64 = 3000;

/// Flash duration removed per level above 1 (in milliseconds).
pub const FLASH_STEP_MS: u64 = 400;

/// Shortest flash duration (in milliseconds).
pub const FLASH_FLOOR_MS: u64 = 500;

/// Recall time budget for levels up to `SHORT_BUDGET_MAX_LEVEL` (in seconds).
pub const SHORT_RECALL_BUDGET_SECS: u32 = 20;

/// Recall time budget above `SHORT_BUDGET_MAX_LEVEL` (in seconds).
pub const LONG_RECALL_BUDGET_SECS: u32 = 30;

/// Last level that gets the short recall budget.
pub const SHORT_BUDGET_MAX_LEVEL: u8 = 5;

/// Remaining seconds at or below which the timer is shown as running out.
pub const LOW_TIME_THRESHOLD_SECS: u32 = 5;

/// Countdown tick period (in milliseconds).
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Pause before a solved level is resolved, so the last success cell stays visible (ms).
pub const SUCCESS_DELAY_MS: u64 = 200;

/// Pause before a wrong click restarts the level (ms).
pub const FAILURE_DELAY_MS: u64 = 100;

/// Random draws tried before falling back to picking among free cells.
pub const MAX_DRAW_ATTEMPTS: usize = 64;
