//! Maze constants and runtime configuration defaults

// Default values for configurable parameters
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 125;
/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 125;
/// Default rendered cell size in pixels
pub const DEFAULT_SCALE: u32 = 20;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Entrance and exit columns fall within `width / GATE_DIVISOR` of their edge
pub const GATE_DIVISOR: usize = 6;

// Raster and vector geometry
/// Smallest border around the maze in pixels
pub const MIN_GUTTER: u32 = 5;
/// Width of wall strokes in pixels
pub const WALL_THICKNESS: u32 = 3;
/// Background color
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Wall color
pub const WALL_COLOR: [u8; 3] = [0, 0, 0];
/// Fill color for cells on the solved path
pub const PATH_COLOR: [u8; 3] = [255, 196, 196];
/// Stroke color for the solved path in vector output
pub const SVG_PATH_COLOR: &str = "#d03030";

// Text rendering
/// Interior glyph for cells on the solved path
pub const PATH_GLYPH: char = '·';
/// Output target name meaning standard output
pub const STDOUT_TARGET: &str = "-";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Cells processed between progress bar refreshes
pub const PROGRESS_REFRESH_CELLS: usize = 256;
