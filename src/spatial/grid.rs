//! Rectangular cell graph with symmetric wall state
//!
//! Cells live in a single row-major vector and refer to each other by index,
//! so neighbor links, walk exits and path predecessors never alias owned
//! data. Links are fixed at construction; afterwards only wall flags and the
//! per-phase transient fields change.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter, invariant_violation};
use crate::spatial::cell::{Cell, Sides};
use crate::spatial::direction::Direction;

/// Every cell of one maze, plus the entrance and exit once placed
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    entrance: Option<usize>,
    exit: Option<usize>,
    solved: bool,
}

impl Grid {
    /// Create a fully walled `height` x `width` grid with linked neighbors
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(height: usize, width: usize) -> Result<Self> {
        validate_dimension("height", height)?;
        validate_dimension("width", width)?;

        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                let link = |direction: Direction| {
                    direction
                        .step(row, col, height, width)
                        .map(|(r, c)| r * width + c)
                };
                let neighbors = Sides {
                    north: link(Direction::North),
                    east: link(Direction::East),
                    south: link(Direction::South),
                    west: link(Direction::West),
                };
                cells.push(Cell::new(row, col, neighbors));
            }
        }

        Ok(Self {
            height,
            width,
            cells,
            entrance: None,
            exit: None,
            solved: false,
        })
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of a position, if in bounds
    pub const fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Cell at a position, if in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index_of(row, col).and_then(|index| self.cells.get(index))
    }

    /// Cell at a row-major index
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every cell index in row-major order
    ///
    /// Serves as the base sequence for shuffling; the order itself carries
    /// no meaning.
    pub fn all_cells(&self) -> Vec<usize> {
        (0..self.cells.len()).collect()
    }

    /// Index of the entrance cell once placed
    pub const fn entrance(&self) -> Option<usize> {
        self.entrance
    }

    /// Index of the exit cell once placed
    pub const fn exit(&self) -> Option<usize> {
        self.exit
    }

    /// Whether the solver has marked the entrance to exit path
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Clear every cell's loop-erased walk exit
    pub fn reset_walk_pointers(&mut self) {
        for cell in &mut self.cells {
            cell.walk_exit = None;
        }
    }

    /// Clear walk exits, predecessors and the visited/on-path flags
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.walk_exit = None;
            cell.predecessor = None;
            cell.visited = false;
            cell.on_path = false;
        }
        self.solved = false;
    }

    /// Remove the wall between a cell and its neighbor on both sides
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the index is out of range or there
    /// is no neighbor across `direction`
    pub fn remove_wall(&mut self, index: usize, direction: Direction) -> Result<()> {
        let neighbor = self
            .cell_at(index)
            .ok_or_else(|| missing_cell("remove_wall", index))?
            .neighbor(direction)
            .ok_or_else(|| {
                invariant_violation(
                    "remove_wall",
                    &format!("cell {index} has no {direction} neighbor"),
                )
            })?;

        self.set_wall(index, direction, false)?;
        self.set_wall(neighbor, direction.opposite(), false)
    }

    /// Open a wall that faces outside the grid
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the index is out of range or the
    /// side is shared with another cell
    pub fn open_boundary(&mut self, index: usize, direction: Direction) -> Result<()> {
        let cell = self
            .cell_at(index)
            .ok_or_else(|| missing_cell("open_boundary", index))?;
        if cell.neighbor(direction).is_some() {
            return Err(invariant_violation(
                "open_boundary",
                &format!("the {direction} side of cell {index} is not on the boundary"),
            ));
        }
        self.set_wall(index, direction, false)
    }

    /// Open the entrance's north wall and the exit's south wall and record
    /// both cells as the maze gates
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if either index is out of range, the
    /// entrance is not on the first row, or the exit is not on the last row
    pub fn place_gates(&mut self, entrance: usize, exit: usize) -> Result<()> {
        // Both sides are checked before either wall opens
        for (index, side) in [(entrance, Direction::North), (exit, Direction::South)] {
            let cell = self
                .cell_at(index)
                .ok_or_else(|| missing_cell("place_gates", index))?;
            if cell.neighbor(side).is_some() {
                return Err(invariant_violation(
                    "place_gates",
                    &format!("cell {index} is not on the {side} edge"),
                ));
            }
        }

        self.open_boundary(entrance, Direction::North)?;
        self.open_boundary(exit, Direction::South)?;
        self.cell_mut(entrance)?.entrance = true;
        self.cell_mut(exit)?.exit = true;
        self.entrance = Some(entrance);
        self.exit = Some(exit);
        Ok(())
    }

    /// Overwrite the solver predecessor of one cell
    ///
    /// Lets hand-built chains be fed to
    /// [`mark_path`](crate::algorithm::solver::mark_path); a full solve
    /// replaces every predecessor.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the index is out of range
    #[doc(hidden)]
    pub fn set_predecessor(&mut self, index: usize, predecessor: Option<usize>) -> Result<()> {
        self.cell_mut(index)?.predecessor = predecessor;
        Ok(())
    }

    /// Neighbor reachable through an open passage
    pub fn open_neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        self.cell_at(index)
            .filter(|cell| cell.is_open(direction))
            .and_then(|cell| cell.neighbor(direction))
    }

    /// Path from entrance to exit recorded by the last solve
    ///
    /// Returns `None` when the grid has not been solved.
    pub fn solution(&self) -> Option<Vec<usize>> {
        if !self.solved {
            return None;
        }
        let mut path = Vec::new();
        let mut current = self.exit;
        while let Some(index) = current {
            if path.len() >= self.cells.len() {
                return None;
            }
            path.push(index);
            current = self.cells.get(index).and_then(Cell::predecessor);
        }
        path.reverse();
        Some(path)
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Result<&mut Cell> {
        self.cells
            .get_mut(index)
            .ok_or_else(|| missing_cell("cell_mut", index))
    }

    pub(crate) const fn mark_solved(&mut self) {
        self.solved = true;
    }

    fn set_wall(&mut self, index: usize, direction: Direction, present: bool) -> Result<()> {
        *self.cell_mut(index)?.walls.get_mut(direction) = present;
        Ok(())
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

fn missing_cell(operation: &'static str, index: usize) -> MazeError {
    invariant_violation(operation, &format!("cell index {index} is out of range"))
}
