//! Tests for Wilson's algorithm carving and gate placement

#[cfg(test)]
mod tests {
    use wilsonmaze::MazeError;
    use wilsonmaze::algorithm::random::RandomSelector;
    use wilsonmaze::algorithm::wilson::{GatePlacement, WilsonGenerator, generate_maze};
    use wilsonmaze::analysis::topology::MazeStatistics;
    use wilsonmaze::spatial::{Direction, Grid, Sides};

    fn carved(height: usize, width: usize, seed: u64) -> Grid {
        let Ok(grid) = Grid::new(height, width) else {
            unreachable!("{height}x{width} grid is valid");
        };
        let Ok(mut generator) = WilsonGenerator::new(grid, RandomSelector::new(seed)) else {
            unreachable!("generator accepts a fresh grid");
        };
        let Ok(()) = generator.carve() else {
            unreachable!("carving a valid grid succeeds");
        };
        generator.into_grid()
    }

    fn walls(grid: &Grid) -> Vec<Sides<bool>> {
        grid.cells().iter().map(|cell| cell.walls()).collect()
    }

    // Tests gate spans for narrow and wide grids
    #[test]
    fn test_gate_placement() {
        assert!(matches!(
            GatePlacement::for_width(5),
            Err(MazeError::InvalidParameter { .. })
        ));

        let Ok(narrow) = GatePlacement::for_width(6) else {
            unreachable!("width 6 admits one gate column");
        };
        assert_eq!(narrow.span(), 1);
        assert_eq!(narrow.entrance_columns(), 0..1);
        assert_eq!(narrow.exit_columns(), 5..6);

        let Ok(wide) = GatePlacement::for_width(60) else {
            unreachable!("width 60 admits ten gate columns");
        };
        assert_eq!(wide.span(), 10);
        assert_eq!(wide.entrance_columns(), 0..10);
        assert_eq!(wide.exit_columns(), 50..60);
    }

    // Tests carving yields a spanning tree across shapes and seeds
    #[test]
    fn test_carved_grid_is_perfect() {
        for (height, width) in [(1, 1), (1, 7), (7, 1), (2, 2), (5, 5), (12, 9), (30, 40)] {
            for seed in [0, 1, 99] {
                let grid = carved(height, width, seed);
                let stats = MazeStatistics::from_grid(&grid);
                assert!(stats.is_perfect(), "{height}x{width} seed {seed}: {stats}");
                assert_eq!(stats.open_passages, height * width - 1);
                assert!(grid.cells().iter().all(|cell| cell.is_member()));
            }
        }
    }

    // Tests the single-cell grid carves to a lone tree without walks
    #[test]
    fn test_single_cell_grid() {
        let Ok(grid) = Grid::new(1, 1) else {
            unreachable!("1x1 grid is valid");
        };
        let Ok(mut generator) = WilsonGenerator::new(grid, RandomSelector::new(0)) else {
            unreachable!("generator accepts a fresh grid");
        };
        assert_eq!(generator.members(), 1);
        assert!(generator.is_complete());
        assert!(matches!(generator.run_iteration(), Ok(false)));
        assert_eq!(generator.walks(), 0);

        let grid = generator.grid();
        assert!(Direction::ALL.iter().all(|&d| grid.cells().iter().all(|c| c.has_wall(d))));

        // No gate columns exist for a single column
        let Err(error) = generator.finish() else {
            unreachable!("width 1 cannot place gates");
        };
        assert!(error.is_configuration());
    }

    // Tests the 5x5 seed 1 carve is a reproducible spanning tree
    #[test]
    fn test_five_by_five_fixture() {
        let first = carved(5, 5, 1);
        let second = carved(5, 5, 1);

        let stats = MazeStatistics::from_grid(&first);
        assert_eq!(stats.open_passages, 24);
        assert_eq!(stats.components, 1);
        assert!(stats.is_perfect());
        assert_eq!(walls(&first), walls(&second));
    }

    // Tests equal seeds reproduce walls and gates
    #[test]
    fn test_generation_is_deterministic() {
        let (Ok(a), Ok(b)) = (generate_maze(20, 30, 8), generate_maze(20, 30, 8)) else {
            unreachable!("20x30 maze is valid");
        };
        assert_eq!(walls(&a), walls(&b));
        assert_eq!(a.entrance(), b.entrance());
        assert_eq!(a.exit(), b.exit());

        let Ok(c) = generate_maze(20, 30, 9) else {
            unreachable!("20x30 maze is valid");
        };
        assert_ne!(walls(&a), walls(&c));
    }

    // Tests gates fall in their column spans with open outward walls
    #[test]
    fn test_gates_are_placed_on_opposite_edges() {
        for seed in 0..20 {
            let Ok(grid) = generate_maze(8, 18, seed) else {
                unreachable!("8x18 maze is valid");
            };
            let (Some(entrance), Some(exit)) = (grid.entrance(), grid.exit()) else {
                unreachable!("generated grid has gates");
            };
            let (Some(entry), Some(out)) = (grid.cell_at(entrance), grid.cell_at(exit)) else {
                unreachable!("gate indices are in range");
            };

            assert_eq!(entry.row(), 0);
            assert!(entry.col() < 3);
            assert!(entry.is_entrance());
            assert!(!entry.has_wall(Direction::North));

            assert_eq!(out.row(), 7);
            assert!(out.col() >= 15);
            assert!(out.is_exit());
            assert!(!out.has_wall(Direction::South));

            let flagged = grid
                .cells()
                .iter()
                .filter(|cell| cell.is_entrance() || cell.is_exit())
                .count();
            assert_eq!(flagged, 2);
        }
    }

    // Tests gate walls are the only open boundary sides
    #[test]
    fn test_boundary_stays_closed_except_gates() {
        let Ok(grid) = generate_maze(10, 12, 4) else {
            unreachable!("10x12 maze is valid");
        };
        let open_boundary = grid
            .cells()
            .iter()
            .flat_map(|cell| Direction::ALL.map(|d| (cell, d)))
            .filter(|(cell, d)| cell.neighbor(*d).is_none() && !cell.has_wall(*d))
            .count();
        assert_eq!(open_boundary, 2);
    }

    // Tests walk and skip counters account for every queued cell
    #[test]
    fn test_iteration_counters() {
        let Ok(grid) = Grid::new(9, 11) else {
            unreachable!("9x11 grid is valid");
        };
        let Ok(mut generator) = WilsonGenerator::new(grid, RandomSelector::new(21)) else {
            unreachable!("generator accepts a fresh grid");
        };
        assert_eq!(generator.remaining(), 98);
        assert_eq!(generator.iteration(), 0);

        let mut steps = 0;
        while matches!(generator.run_iteration(), Ok(true)) {
            steps += 1;
            assert_eq!(generator.remaining(), 98 - steps);
        }

        assert!(generator.is_complete());
        assert_eq!(generator.iteration(), 98);
        assert_eq!(generator.members(), 99);
        assert_eq!(generator.walks() + generator.skipped(), 98);
        assert!(generator.walks() > 0);
    }

    // Tests a queued cell already in the tree changes nothing
    #[test]
    fn test_skipped_iterations_leave_walls_unchanged() {
        let Ok(grid) = Grid::new(8, 8) else {
            unreachable!("8x8 grid is valid");
        };
        let Ok(mut generator) = WilsonGenerator::new(grid, RandomSelector::new(2)) else {
            unreachable!("generator accepts a fresh grid");
        };

        let mut observed_skip = false;
        loop {
            let before = walls(generator.grid());
            let members = generator.members();
            let skipped = generator.skipped();
            match generator.run_iteration() {
                Ok(true) => {}
                Ok(false) => break,
                Err(error) => unreachable!("iteration failed: {error}"),
            }
            if generator.skipped() > skipped {
                observed_skip = true;
                assert_eq!(walls(generator.grid()), before);
                assert_eq!(generator.members(), members);
            } else {
                assert!(generator.members() > members);
            }
        }
        assert!(observed_skip);
    }

    // Tests configuration errors surface before carving
    #[test]
    fn test_generate_maze_rejects_bad_configuration() {
        for (height, width) in [(0, 10), (10, 0), (10, 5), (10, 10_001)] {
            let Err(error) = generate_maze(height, width, 0) else {
                unreachable!("{height}x{width} must be rejected");
            };
            assert!(error.is_configuration(), "{height}x{width}: {error}");
        }
    }

    // Tests a single-row maze is one straight corridor
    #[test]
    fn test_single_row_maze() {
        let Ok(grid) = generate_maze(1, 6, 13) else {
            unreachable!("1x6 maze is valid");
        };
        for cell in grid.cells() {
            assert_eq!(cell.is_open(Direction::East), cell.col() < 5);
            assert_eq!(cell.is_open(Direction::West), cell.col() > 0);
        }
        assert_eq!(grid.entrance(), Some(0));
        assert_eq!(grid.exit(), Some(5));
    }

    // Tests a walk from an isolated cell outside the tree is rejected
    // Verified by stepping to the cell itself when the neighborhood is empty
    #[test]
    fn test_walk_without_neighbors_is_invariant_violation() {
        let Ok(grid) = Grid::new(1, 1) else {
            unreachable!("1x1 grid is valid");
        };
        let mut generator = WilsonGenerator::resume(grid, RandomSelector::new(0), [0]);
        assert_eq!(generator.members(), 0);

        let result = generator.run_iteration();
        assert!(
            matches!(
                result,
                Err(MazeError::InvariantViolation { operation: "loop_erased_walk", .. })
            ),
            "{result:?}"
        );
        assert_eq!(generator.walks(), 0);
    }

    // Tests retracing a cell the walk never left is rejected
    #[test]
    fn test_retrace_without_exit_is_invariant_violation() {
        let Ok(grid) = Grid::new(2, 2) else {
            unreachable!("2x2 grid is valid");
        };
        let mut generator = WilsonGenerator::resume(grid, RandomSelector::new(0), [0_usize; 0]);

        let result = generator.retrace(0);
        assert!(
            matches!(
                result,
                Err(MazeError::InvariantViolation { operation: "retrace", .. })
            ),
            "{result:?}"
        );
        assert_eq!(generator.members(), 0);
        assert!(Direction::ALL.iter().all(|&d| generator.grid().cells().iter().all(|c| c.has_wall(d))));
    }

    // Tests a queue entry outside the grid is rejected
    #[test]
    fn test_out_of_range_queue_entry() {
        let Ok(grid) = Grid::new(2, 2) else {
            unreachable!("2x2 grid is valid");
        };
        let mut generator = WilsonGenerator::resume(grid, RandomSelector::new(0), [99]);
        assert!(matches!(
            generator.run_iteration(),
            Err(MazeError::InvariantViolation { .. })
        ));
    }

    // Tests resuming counts existing members and finishes with no work left
    #[test]
    fn test_resume_carved_grid() {
        let grid = carved(4, 6, 3);
        let before = walls(&grid);
        let mut generator = WilsonGenerator::resume(grid, RandomSelector::new(3), [5, 17]);
        assert_eq!(generator.members(), 24);

        assert!(matches!(generator.run_iteration(), Ok(true)));
        assert!(matches!(generator.run_iteration(), Ok(true)));
        assert!(matches!(generator.run_iteration(), Ok(false)));
        assert_eq!(generator.skipped(), 2);
        assert_eq!(walls(generator.grid()), before);
    }

    // Tests the generator seeds the tree on a partially carved grid without
    // counting the seed twice
    #[test]
    fn test_new_on_member_grid_keeps_member_count() {
        let grid = carved(3, 6, 8);
        let Ok(generator) = WilsonGenerator::new(grid, RandomSelector::new(8)) else {
            unreachable!("generator accepts a carved grid");
        };
        assert_eq!(generator.members(), 18);
    }
}
