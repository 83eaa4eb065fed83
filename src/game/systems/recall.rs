//! Recall validation.
//!
//! Checks each click of the recall phase against the flashed sequence, in strict order.

use crate::game::types::{GridCoordinate, RecallOutcome};

/// Submit one click against `target`, appending it to `click_log` unless ignored.
///
/// A coordinate that belongs to the sequence but is clicked out of turn is `Wrong`.
/// Wrong clicks are still logged so the board can show them.
pub fn submit(
    coord: GridCoordinate,
    click_log: &mut Vec<GridCoordinate>,
    target: &[GridCoordinate],
) -> RecallOutcome {
    if click_log.contains(&coord) {
        return RecallOutcome::Ignored;
    }

    let Some(expected) = target.get(click_log.len()) else {
        return RecallOutcome::Ignored;
    };

    click_log.push(coord);

    if coord != *expected {
        RecallOutcome::Wrong
    } else if click_log.len() == target.len() {
        RecallOutcome::Complete
    } else {
        RecallOutcome::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    #[test]
    fn test_in_order_clicks_complete() {
        let target = vec![c(0, 0), c(4, 4), c(1, 2)];
        let mut log = Vec::new();
        assert_eq!(submit(c(0, 0), &mut log, &target), RecallOutcome::Correct);
        assert_eq!(submit(c(4, 4), &mut log, &target), RecallOutcome::Correct);
        assert_eq!(submit(c(1, 2), &mut log, &target), RecallOutcome::Complete);
        assert_eq!(log, target);
    }

    #[test]
    fn test_single_cell_sequence_completes_immediately() {
        let target = vec![c(2, 3)];
        let mut log = Vec::new();
        assert_eq!(submit(c(2, 3), &mut log, &target), RecallOutcome::Complete);
    }

    #[test]
    fn test_out_of_turn_member_is_wrong() {
        let target = vec![c(0, 0), c(4, 4), c(1, 2)];
        let mut log = vec![c(0, 0)];
        assert_eq!(submit(c(1, 2), &mut log, &target), RecallOutcome::Wrong);
        assert_eq!(log, vec![c(0, 0), c(1, 2)]);
    }

    #[test]
    fn test_unrelated_cell_is_wrong() {
        let target = vec![c(0, 0), c(4, 4)];
        let mut log = Vec::new();
        assert_eq!(submit(c(3, 3), &mut log, &target), RecallOutcome::Wrong);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_duplicate_click_is_ignored() {
        let target = vec![c(0, 0), c(4, 4)];
        let mut log = vec![c(0, 0)];
        assert_eq!(submit(c(0, 0), &mut log, &target), RecallOutcome::Ignored);
        assert_eq!(log, vec![c(0, 0)]);
    }

    #[test]
    fn test_click_after_full_log_is_ignored() {
        let target = vec![c(1, 1)];
        let mut log = vec![c(1, 1)];
        assert_eq!(submit(c(2, 2), &mut log, &target), RecallOutcome::Ignored);
        assert_eq!(log.len(), 1);
    }
}
