use std::time::Duration;

use crate::config::game::{
    FLASH_BASE_MS, FLASH_FLOOR_MS, FLASH_STEP_MS, LONG_RECALL_BUDGET_SECS,
    SHORT_BUDGET_MAX_LEVEL, SHORT_RECALL_BUDGET_SECS,
};

/// How long one cell stays highlighted. Shrinks with the level, never below the floor.
pub fn flash_duration(level: u8) -> Duration {
    let reduction = FLASH_STEP_MS * u64::from(level.saturating_sub(1));
    Duration::from_millis(FLASH_BASE_MS.saturating_sub(reduction).max(FLASH_FLOOR_MS))
}

/// Seconds granted for the recall phase.
pub fn recall_budget(level: u8) -> u32 {
    if level <= SHORT_BUDGET_MAX_LEVEL {
        SHORT_RECALL_BUDGET_SECS
    } else {
        LONG_RECALL_BUDGET_SECS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_duration_table() {
        assert_eq!(flash_duration(1), Duration::from_millis(3000));
        assert_eq!(flash_duration(5), Duration::from_millis(1400));
        assert_eq!(flash_duration(7), Duration::from_millis(600));
        assert_eq!(flash_duration(8), Duration::from_millis(500));
        assert_eq!(flash_duration(20), Duration::from_millis(500));
    }

    #[test]
    fn test_flash_duration_is_non_increasing() {
        for level in 1..30u8 {
            assert!(flash_duration(level + 1) <= flash_duration(level));
        }
    }

    #[test]
    fn test_recall_budget() {
        for level in 1..=5 {
            assert_eq!(recall_budget(level), 20);
        }
        assert_eq!(recall_budget(6), 30);
        assert_eq!(recall_budget(7), 30);
    }
}
