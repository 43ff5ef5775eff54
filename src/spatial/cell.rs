//! Per-position maze state: walls, neighbor links and phase flags

use crate::spatial::direction::Direction;

/// A value stored once for each side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides<T> {
    /// Value for the north side
    pub north: T,
    /// Value for the east side
    pub east: T,
    /// Value for the south side
    pub south: T,
    /// Value for the west side
    pub west: T,
}

impl<T> Sides<T> {
    /// Same value on every side
    pub const fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self {
            north: value,
            east: value,
            south: value,
            west: value,
        }
    }

    /// Borrow the value for one side
    pub const fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    /// Mutably borrow the value for one side
    pub const fn get_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        }
    }
}

/// One grid position
///
/// Neighbors, walk exits and predecessors are indices into the owning
/// [`Grid`](crate::spatial::Grid)'s row-major cell vector. Wall flags are
/// duplicated on both cells sharing an edge; only the grid mutates them so
/// the two copies stay in agreement.
#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    col: usize,
    pub(crate) walls: Sides<bool>,
    neighbors: Sides<Option<usize>>,
    neighborhood: Vec<usize>,
    pub(crate) member: bool,
    pub(crate) entrance: bool,
    pub(crate) exit: bool,
    pub(crate) visited: bool,
    pub(crate) on_path: bool,
    /// Most recent exit choice of the current loop-erased walk
    pub(crate) walk_exit: Option<usize>,
    /// Cell from which the solver first reached this one
    pub(crate) predecessor: Option<usize>,
}

impl Cell {
    /// A fully walled cell with the given neighbor links
    ///
    /// The neighborhood lists the existing neighbors in north, east, south,
    /// west order.
    pub(crate) fn new(row: usize, col: usize, neighbors: Sides<Option<usize>>) -> Self {
        let neighborhood = Direction::ALL
            .iter()
            .filter_map(|&direction| *neighbors.get(direction))
            .collect();

        Self {
            row,
            col,
            walls: Sides::splat(true),
            neighbors,
            neighborhood,
            member: false,
            entrance: false,
            exit: false,
            visited: false,
            on_path: false,
            walk_exit: None,
            predecessor: None,
        }
    }

    /// Row of this cell
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of this cell
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Whether the side facing `direction` is walled
    pub const fn has_wall(&self, direction: Direction) -> bool {
        *self.walls.get(direction)
    }

    /// All four wall flags
    pub const fn walls(&self) -> Sides<bool> {
        self.walls
    }

    /// Index of the neighbor across `direction`, `None` at the boundary
    pub const fn neighbor(&self, direction: Direction) -> Option<usize> {
        *self.neighbors.get(direction)
    }

    /// Indices of every in-bounds neighbor
    pub fn neighborhood(&self) -> &[usize] {
        &self.neighborhood
    }

    /// Direction leading to the neighbor with index `other`, if adjacent
    pub fn direction_to(&self, other: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(direction) == Some(other))
    }

    /// Whether a neighbor exists across `direction` with no wall between
    pub const fn is_open(&self, direction: Direction) -> bool {
        self.neighbor(direction).is_some() && !self.has_wall(direction)
    }

    /// Whether this cell has been added to the spanning tree
    pub const fn is_member(&self) -> bool {
        self.member
    }

    /// Whether this cell is the maze entrance
    pub const fn is_entrance(&self) -> bool {
        self.entrance
    }

    /// Whether this cell is the maze exit
    pub const fn is_exit(&self) -> bool {
        self.exit
    }

    /// Whether the solver reached this cell
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Whether this cell lies on the entrance to exit path
    pub const fn is_on_path(&self) -> bool {
        self.on_path
    }

    /// Exit recorded for this cell by the current loop-erased walk
    pub const fn walk_exit(&self) -> Option<usize> {
        self.walk_exit
    }

    /// Cell the solver reached this cell from
    pub const fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    /// Number of open passages to neighboring cells
    pub fn open_passages(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_open(direction))
            .count()
    }
}
