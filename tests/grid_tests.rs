use std::collections::HashSet;

use broadside::{CellState, Coord, GameError, Grid};

#[test]
fn test_generate_yields_unique_empty_cells() {
    let grid = Grid::generate(10, 10).unwrap();
    assert_eq!(grid.cells().count(), 100);

    let mut seen = HashSet::new();
    for cell in grid.cells() {
        assert_eq!(cell.state(), CellState::Empty);
        assert!(seen.insert(cell.coord()), "duplicate position");
    }
    assert_eq!(grid.shot_count(), 0);
}

#[test]
fn test_positions_follow_row_letter_column_number() {
    let grid = Grid::generate(3, 4).unwrap();
    assert_eq!(grid.cells().next().unwrap().coord().to_string(), "A1");
    assert_eq!(grid.cell(Coord::new(2, 3)).unwrap().coord().to_string(), "C4");
    assert_eq!(grid.headers(), vec!['A', 'B', 'C']);
}

#[test]
fn test_generate_rejects_unlabelable_dimensions() {
    assert_eq!(
        Grid::generate(27, 10).unwrap_err(),
        GameError::InvalidDimensions { rows: 27, cols: 10 }
    );
    assert_eq!(
        Grid::generate(0, 10).unwrap_err(),
        GameError::InvalidDimensions { rows: 0, cols: 10 }
    );
    assert_eq!(
        Grid::generate(10, 0).unwrap_err(),
        GameError::InvalidDimensions { rows: 10, cols: 0 }
    );
    assert!(Grid::generate(26, 1).is_ok());
}

#[test]
fn test_find_treats_malformed_and_out_of_range_alike() {
    let grid = Grid::generate(10, 10).unwrap();
    assert!(grid.find("A1").is_some());
    assert!(grid.find("j10").is_some());
    assert!(grid.find("Z99").is_none());
    assert!(grid.find("A0").is_none());
    assert!(grid.find("not a coordinate").is_none());
}
