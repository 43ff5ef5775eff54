//! Compass sides of a rectangular cell and their grid offsets

use std::fmt;

/// One of the four sides of a cell
///
/// The declaration order (north, east, south, west) is the fixed order used
/// for neighborhoods and for the solver's expansion of open passages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    North,
    /// Toward the last column
    East,
    /// Toward the last row
    South,
    /// Toward column 0
    West,
}

impl Direction {
    /// All directions in north, east, south, west order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The side facing this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Row and column deltas for a step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// Coordinates one step away, or `None` when the step leaves a
    /// `height` x `width` grid
    pub const fn step(self, row: usize, col: usize, height: usize, width: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        let (Some(next_row), Some(next_col)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
        else {
            return None;
        };
        if next_row < height && next_col < width {
            Some((next_row, next_col))
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
