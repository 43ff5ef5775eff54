//! Tests for pixel layout and PNG rendering

#[cfg(test)]
mod tests {
    use image::Rgb;
    use wilsonmaze::io::configuration::{BACKGROUND_COLOR, PATH_COLOR, WALL_COLOR};
    use wilsonmaze::io::image::{Layout, export_png, render_image};
    use wilsonmaze::spatial::Grid;
    use wilsonmaze::{MazeError, generate_maze, solve};

    fn fresh(height: usize, width: usize) -> Grid {
        let Ok(grid) = Grid::new(height, width) else {
            unreachable!("{height}x{width} grid is valid");
        };
        grid
    }

    // Tests a zero scale is a configuration error
    #[test]
    fn test_zero_scale_is_rejected() {
        let grid = fresh(2, 2);
        assert!(matches!(
            Layout::new(&grid, 0),
            Err(MazeError::InvalidParameter { .. })
        ));
        assert!(render_image(&grid, 0).is_err());
    }

    // Tests the gutter is half the scale but never below five pixels
    #[test]
    fn test_gutter_and_dimensions() {
        let grid = fresh(3, 7);
        let Ok(large) = Layout::new(&grid, 20) else {
            unreachable!("scale 20 is valid");
        };
        assert_eq!(large.gutter, 10);
        assert_eq!((large.width, large.height), (160, 80));

        let Ok(small) = Layout::new(&grid, 4) else {
            unreachable!("scale 4 is valid");
        };
        assert_eq!(small.gutter, 5);
        assert_eq!((small.width, small.height), (38, 22));
    }

    // Tests cell corners and centers are offset by the gutter
    #[test]
    fn test_cell_geometry() {
        let Ok(layout) = Layout::new(&fresh(3, 3), 20) else {
            unreachable!("scale 20 is valid");
        };
        assert_eq!(layout.corners(0, 0), ((10, 10), (30, 30)));
        assert_eq!(layout.corners(2, 1), ((30, 50), (50, 70)));
        assert_eq!(layout.center(1, 2), (60, 40));
    }

    // Tests each wall segment is emitted once
    #[test]
    fn test_wall_segment_counts() {
        let grid = fresh(2, 3);
        let Ok(layout) = Layout::new(&grid, 10) else {
            unreachable!("scale 10 is valid");
        };
        assert_eq!(layout.wall_segments(&grid).len(), 17);

        // 58 edges less 23 carved passages and 2 gates
        let Ok(maze) = generate_maze(4, 6, 30) else {
            unreachable!("4x6 maze is valid");
        };
        let Ok(layout) = Layout::new(&maze, 10) else {
            unreachable!("scale 10 is valid");
        };
        assert_eq!(layout.wall_segments(&maze).len(), 33);
    }

    // Tests walls are drawn over a white background
    #[test]
    fn test_render_pixels() {
        let Ok(img) = render_image(&fresh(2, 2), 20) else {
            unreachable!("scale 20 is valid");
        };
        assert_eq!(img.dimensions(), (60, 60));
        assert_eq!(img.get_pixel_checked(0, 0), Some(&Rgb(BACKGROUND_COLOR)));
        assert_eq!(img.get_pixel_checked(11, 10), Some(&Rgb(WALL_COLOR)));
        assert_eq!(img.get_pixel_checked(20, 20), Some(&Rgb(BACKGROUND_COLOR)));
        assert_eq!(img.get_pixel_checked(30, 20), Some(&Rgb(WALL_COLOR)));
    }

    // Tests solved path cells are shaded
    #[test]
    fn test_render_solution() {
        let Ok(mut grid) = generate_maze(6, 12, 4) else {
            unreachable!("6x12 maze is valid");
        };
        let Ok(layout) = Layout::new(&grid, 20) else {
            unreachable!("scale 20 is valid");
        };
        let Some(entrance) = grid.entrance().and_then(|index| grid.cell_at(index)) else {
            unreachable!("generated grid has an entrance");
        };
        let (x, y) = layout.center(entrance.row(), entrance.col());

        let Ok(plain) = render_image(&grid, 20) else {
            unreachable!("scale 20 is valid");
        };
        assert_eq!(plain.get_pixel_checked(x, y), Some(&Rgb(BACKGROUND_COLOR)));

        assert!(solve(&mut grid).is_ok());
        let Ok(shaded) = render_image(&grid, 20) else {
            unreachable!("scale 20 is valid");
        };
        assert_eq!(shaded.get_pixel_checked(x, y), Some(&Rgb(PATH_COLOR)));
    }

    // Tests export writes a decodable PNG of the expected size
    #[test]
    fn test_export_png() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory can be created");
        };
        let path = dir.path().join("out").join("maze.png");
        let Ok(grid) = generate_maze(5, 8, 2) else {
            unreachable!("5x8 maze is valid");
        };

        assert!(export_png(&grid, 10, &path).is_ok());
        let Ok(decoded) = image::open(&path) else {
            unreachable!("exported png decodes");
        };
        assert_eq!((decoded.width(), decoded.height()), (90, 60));
    }
}
