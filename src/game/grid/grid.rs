use crate::config::game::GRID_SIZE;
use crate::game::types::GridCoordinate;

/// Every cell of the grid, row by row.
pub fn all_cells() -> impl Iterator<Item = GridCoordinate> {
    (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| GridCoordinate { row, col }))
}

/// Cells not present in `taken`.
pub fn free_cells(taken: &[GridCoordinate]) -> Vec<GridCoordinate> {
    all_cells().filter(|cell| !taken.contains(cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game::CELL_COUNT;

    #[test]
    fn test_all_cells_covers_grid_once() {
        let cells: Vec<_> = all_cells().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        for (i, a) in cells.iter().enumerate() {
            assert!(!cells[i + 1..].contains(a));
        }
    }

    #[test]
    fn test_free_cells_excludes_taken() {
        let taken = vec![GridCoordinate { row: 0, col: 0 }, GridCoordinate { row: 4, col: 4 }];
        let free = free_cells(&taken);
        assert_eq!(free.len(), CELL_COUNT - 2);
        assert!(taken.iter().all(|c| !free.contains(c)));
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(GridCoordinate::new(GRID_SIZE - 1, 0).is_some());
        assert!(GridCoordinate::new(GRID_SIZE, 0).is_none());
        assert!(GridCoordinate::new(0, GRID_SIZE).is_none());
    }
}
