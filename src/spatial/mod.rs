//! Spatial data structures for the maze cell graph
//!
//! This module contains:
//! - Compass directions and their grid offsets
//! - Per-cell wall, link and flag state
//! - The grid that owns every cell

/// Compass sides and offsets
pub mod direction;
/// Cell state and side-indexed storage
pub mod cell;
/// Row-major grid ownership and wall mutation
pub mod grid;

pub use cell::{Cell, Sides};
pub use direction::Direction;
pub use grid::Grid;
