//! Tests for maze defaults, limits and rendering constants

#[cfg(test)]
mod tests {
    use wilsonmaze::io::configuration::{
        BACKGROUND_COLOR, DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH, GATE_DIVISOR,
        MAX_GRID_DIMENSION, MIN_GUTTER, PATH_COLOR, PATH_GLYPH, PROGRESS_REFRESH_CELLS,
        STDOUT_TARGET, WALL_COLOR, WALL_THICKNESS,
    };

    // Tests command-line defaults
    // Verified by changing default dimensions
    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_HEIGHT, 125);
        assert_eq!(DEFAULT_WIDTH, 125);
        assert_eq!(DEFAULT_SCALE, 20);
    }

    // Tests the default width leaves room for gates
    #[test]
    fn test_default_width_places_gates() {
        assert_eq!(DEFAULT_WIDTH / GATE_DIVISOR, 20);
    }

    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
    }

    // Tests raster geometry constants
    // Verified by changing wall thickness to an even number
    #[test]
    fn test_geometry_values() {
        assert_eq!(MIN_GUTTER, 5);
        assert_eq!(WALL_THICKNESS % 2, 1);
    }

    // Tests the three fill colors are distinguishable
    #[test]
    fn test_colors_are_distinct() {
        assert_ne!(BACKGROUND_COLOR, WALL_COLOR);
        assert_ne!(BACKGROUND_COLOR, PATH_COLOR);
        assert_ne!(WALL_COLOR, PATH_COLOR);
    }

    #[test]
    fn test_text_constants() {
        assert_eq!(PATH_GLYPH, '·');
        assert_eq!(STDOUT_TARGET, "-");
        assert_eq!(PROGRESS_REFRESH_CELLS, 256);
    }
}
