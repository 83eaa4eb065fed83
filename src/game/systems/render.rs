use crate::config::game::GRID_SIZE;
use crate::game::types::{CellState, CellView, GridCoordinate, Phase};

/// Build the per-cell view of the board for the current phase.
///
/// While flashing, the highlighted cell carries its 1-based position in the
/// sequence. While recalling, each clicked cell is green with its click ordinal
/// when it matches the sequence at that position, red otherwise.
pub fn build_board(
    phase: Phase,
    flashing: Option<GridCoordinate>,
    sequence: &[GridCoordinate],
    clicks: &[GridCoordinate],
) -> Vec<Vec<CellView>> {
    let mut board = vec![vec![CellView::DOT; GRID_SIZE]; GRID_SIZE];

    match phase {
        Phase::Flashing { step } => {
            if let Some(coord) = flashing {
                board[coord.row][coord.col] = CellView {
                    state: CellState::Flash,
                    label: Some(step + 1),
                };
            }
        }
        Phase::Recalling => {
            for (index, coord) in clicks.iter().enumerate() {
                board[coord.row][coord.col] = if sequence.get(index) == Some(coord) {
                    CellView { state: CellState::Success, label: Some(index + 1) }
                } else {
                    CellView { state: CellState::Error, label: None }
                };
            }
        }
        Phase::Idle | Phase::Distraction { .. } => {}
    }

    board
}

/// Text rendering of a board, used in debug logs.
pub fn render_board(board: &[Vec<CellView>]) -> String {
    let mut out = String::new();
    for row in board {
        for cell in row {
            let symbol = match (cell.state, cell.label) {
                (CellState::Dot, _) => " .".to_string(),
                (CellState::Flash, Some(n)) => format!("F{}", n),
                (CellState::Flash, None) => " F".to_string(),
                (CellState::Success, Some(n)) => format!("S{}", n),
                (CellState::Success, None) => " S".to_string(),
                (CellState::Error, _) => " X".to_string(),
            };
            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }
    out
}
