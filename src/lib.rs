//! Perfect maze generation with Wilson's algorithm
//!
//! A rectangular grid is carved into a uniform spanning tree using
//! loop-erased random walks, so exactly one simple path joins any two cells.
//! An entrance is opened on the north edge and an exit on the south edge;
//! a depth-first search can then mark the path between them. Finished grids
//! render as box-drawing text, PNG or SVG.

#![forbid(unsafe_code)]

/// Maze generation and solving algorithms
pub mod algorithm;
/// Read-only statistics over generated mazes
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Grid and cell graph model
pub mod spatial;

pub use algorithm::solver::solve;
pub use algorithm::wilson::generate_maze;
pub use io::error::{MazeError, Result};
pub use spatial::{Cell, Direction, Grid};
