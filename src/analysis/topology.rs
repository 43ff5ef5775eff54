//! Passage-graph measurements of a generated maze
//!
//! Treats cells as vertices and open internal walls as edges. A graph with
//! `n` vertices, `e` edges and `c` connected components is a forest exactly
//! when `e == n - c`, which gives an acyclicity check without searching for
//! cycles directly.

use std::collections::VecDeque;
use std::fmt;

use bitvec::vec::BitVec;

use crate::spatial::{Direction, Grid};

/// Summary of a maze's passage graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeStatistics {
    /// Total number of cells
    pub cells: usize,
    /// Open walls between neighboring cells, each shared edge counted once
    pub open_passages: usize,
    /// Connected components of the passage graph
    pub components: usize,
    /// Cells with exactly one open passage
    pub dead_ends: usize,
    /// Shared edges whose two wall flags disagree
    pub asymmetric_walls: usize,
    /// Cells on the solved path, if the grid has been solved
    pub solution_length: Option<usize>,
}

impl MazeStatistics {
    /// Measure a grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut open_passages = 0;
        let mut asymmetric_walls = 0;

        // East and south sides visit every shared edge exactly once
        for (index, cell) in grid.cells().iter().enumerate() {
            for direction in [Direction::East, Direction::South] {
                let Some(neighbor) = cell.neighbor(direction) else {
                    continue;
                };
                let facing = grid
                    .cell_at(neighbor)
                    .is_none_or(|other| other.has_wall(direction.opposite()));
                if cell.has_wall(direction) != facing {
                    asymmetric_walls += 1;
                }
                if grid.open_neighbor(index, direction).is_some() {
                    open_passages += 1;
                }
            }
        }

        let dead_ends = grid
            .cells()
            .iter()
            .filter(|cell| cell.open_passages() == 1)
            .count();

        let solution_length = grid
            .is_solved()
            .then(|| grid.cells().iter().filter(|cell| cell.is_on_path()).count());

        Self {
            cells: grid.len(),
            open_passages,
            components: count_components(grid),
            dead_ends,
            asymmetric_walls,
            solution_length,
        }
    }

    /// Whether every cell is reachable from every other
    pub const fn is_connected(&self) -> bool {
        self.components == 1
    }

    /// Whether the passage graph contains no cycle
    pub const fn is_acyclic(&self) -> bool {
        self.open_passages + self.components == self.cells
    }

    /// Whether the maze is perfect: a spanning tree with consistent walls
    pub const fn is_perfect(&self) -> bool {
        self.is_connected() && self.is_acyclic() && self.asymmetric_walls == 0
    }
}

impl fmt::Display for MazeStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells, {} open passages, {} dead ends, {} component(s)",
            self.cells, self.open_passages, self.dead_ends, self.components
        )?;
        if let Some(length) = self.solution_length {
            write!(f, ", solution {length} cells")?;
        }
        if self.is_perfect() {
            write!(f, ", perfect")
        } else {
            write!(f, ", NOT perfect")
        }
    }
}

/// Cells reachable from `start` through open passages, in breadth-first
/// order
pub fn reachable_from(grid: &Grid, start: usize) -> Vec<usize> {
    let mut seen: BitVec = BitVec::repeat(false, grid.len());
    flood(grid, start, &mut seen)
}

fn count_components(grid: &Grid) -> usize {
    let mut seen: BitVec = BitVec::repeat(false, grid.len());
    let mut components = 0;
    for start in 0..grid.len() {
        if seen.get(start).is_some_and(|bit| *bit) {
            continue;
        }
        flood(grid, start, &mut seen);
        components += 1;
    }
    components
}

fn flood(grid: &Grid, start: usize, seen: &mut BitVec) -> Vec<usize> {
    let mut order = Vec::new();
    if start >= grid.len() {
        return order;
    }

    let mut queue = VecDeque::from([start]);
    seen.set(start, true);
    while let Some(current) = queue.pop_front() {
        order.push(current);
        for direction in Direction::ALL {
            let Some(neighbor) = grid.open_neighbor(current, direction) else {
                continue;
            };
            if seen.get(neighbor).is_some_and(|bit| !*bit) {
                seen.set(neighbor, true);
                queue.push_back(neighbor);
            }
        }
    }
    order
}
