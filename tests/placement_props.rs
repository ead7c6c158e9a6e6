use std::collections::HashSet;

use broadside::{place_fleet, CellState, Grid, DEFAULT_FLEET, MAX_PLACE_ATTEMPTS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_placement_is_always_legal(seed in any::<u64>()) {
        let mut grid = Grid::generate(10, 10).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut grid, &DEFAULT_FLEET, MAX_PLACE_ATTEMPTS, &mut rng).unwrap();

        let mut seen = HashSet::new();
        for ship in fleet.ships() {
            prop_assert_eq!(ship.positions().len(), ship.size());
            prop_assert_eq!(ship.hits(), 0);
            prop_assert!(!ship.is_destroyed());
            for &coord in ship.positions() {
                prop_assert!(coord.in_bounds(10, 10));
                prop_assert!(seen.insert(coord), "ships overlap at {}", coord);
                prop_assert_eq!(grid.state(coord), Some(CellState::Ship));
            }
        }
        let marked = grid.cells().filter(|c| c.state() == CellState::Ship).count();
        prop_assert_eq!(marked, seen.len());
    }

    #[test]
    fn placed_runs_are_straight_and_contiguous(seed in any::<u64>()) {
        let mut grid = Grid::generate(10, 10).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = place_fleet(&mut grid, &DEFAULT_FLEET, MAX_PLACE_ATTEMPTS, &mut rng).unwrap();

        for ship in fleet.ships() {
            let positions = ship.positions();
            let start = positions[0];
            let horizontal = positions.iter().all(|c| c.row == start.row);
            let vertical = positions.iter().all(|c| c.col == start.col);
            prop_assert!(horizontal || vertical);
            for (step, coord) in positions.iter().enumerate() {
                if horizontal {
                    prop_assert_eq!(coord.col, start.col + step);
                } else {
                    prop_assert_eq!(coord.row, start.row + step);
                }
            }
        }
    }
}
