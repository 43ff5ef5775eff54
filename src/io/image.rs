//! PNG rendering of wall segments with a fixed border gutter

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::io::configuration::{
    BACKGROUND_COLOR, MIN_GUTTER, PATH_COLOR, WALL_COLOR, WALL_THICKNESS,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::spatial::{Direction, Grid};

/// Pixel geometry shared by the raster and vector renderers
///
/// Each cell occupies a `scale` x `scale` block offset by the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Cell edge length in pixels
    pub scale: u32,
    /// Border around the maze in pixels
    pub gutter: u32,
    /// Total image width in pixels
    pub width: u32,
    /// Total image height in pixels
    pub height: u32,
}

/// Straight wall line between two cell corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Start point (x, y)
    pub from: (u32, u32),
    /// End point (x, y)
    pub to: (u32, u32),
}

impl Layout {
    /// Compute the layout for a grid at the given cell scale
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero scale or an image size that
    /// does not fit in 32 bits
    pub fn new(grid: &Grid, scale: u32) -> Result<Self> {
        if scale == 0 {
            return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
        }
        let gutter = (scale / 2).max(MIN_GUTTER);
        let extent = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(scale))
                .and_then(|pixels| pixels.checked_add(gutter * 2))
                .ok_or_else(|| invalid_parameter("scale", &scale, &"image would be too large"))
        };

        Ok(Self {
            scale,
            gutter,
            width: extent(grid.width())?,
            height: extent(grid.height())?,
        })
    }

    /// Corner points of a cell as (north-west, south-east)
    pub const fn corners(&self, row: usize, col: usize) -> ((u32, u32), (u32, u32)) {
        let x = col as u32 * self.scale + self.gutter;
        let y = row as u32 * self.scale + self.gutter;
        ((x, y), (x + self.scale, y + self.scale))
    }

    /// Center point of a cell
    pub const fn center(&self, row: usize, col: usize) -> (u32, u32) {
        let ((x, y), _) = self.corners(row, col);
        (x + self.scale / 2, y + self.scale / 2)
    }

    /// Every remaining wall as a segment, each shared edge emitted once
    pub fn wall_segments(&self, grid: &Grid) -> Vec<Segment> {
        let mut segments = Vec::new();
        for cell in grid.cells() {
            let (nw, se) = self.corners(cell.row(), cell.col());
            let ne = (se.0, nw.1);
            let sw = (nw.0, se.1);

            if cell.has_wall(Direction::North) {
                segments.push(Segment { from: nw, to: ne });
            }
            if cell.has_wall(Direction::West) {
                segments.push(Segment { from: sw, to: nw });
            }
            if cell.neighbor(Direction::East).is_none() && cell.has_wall(Direction::East) {
                segments.push(Segment { from: ne, to: se });
            }
            if cell.neighbor(Direction::South).is_none() && cell.has_wall(Direction::South) {
                segments.push(Segment { from: se, to: sw });
            }
        }
        segments
    }
}

/// Render a grid to an RGB image
///
/// # Errors
///
/// Returns a configuration error if the scale is invalid
pub fn render_image(grid: &Grid, scale: u32) -> Result<RgbImage> {
    let layout = Layout::new(grid, scale)?;
    let mut img = RgbImage::from_pixel(layout.width, layout.height, Rgb(BACKGROUND_COLOR));

    if grid.is_solved() {
        for cell in grid.cells().iter().filter(|cell| cell.is_on_path()) {
            let (nw, se) = layout.corners(cell.row(), cell.col());
            fill_rect(&mut img, nw, (se.0 - 1, se.1 - 1), Rgb(PATH_COLOR));
        }
    }

    let half = WALL_THICKNESS / 2;
    for segment in layout.wall_segments(grid) {
        let min = (
            segment.from.0.min(segment.to.0).saturating_sub(half),
            segment.from.1.min(segment.to.1).saturating_sub(half),
        );
        let max = (
            segment.from.0.max(segment.to.0) + half,
            segment.from.1.max(segment.to.1) + half,
        );
        fill_rect(&mut img, min, max, Rgb(WALL_COLOR));
    }

    Ok(img)
}

// Inclusive bounds; pixels outside the image are skipped
fn fill_rect(img: &mut RgbImage, min: (u32, u32), max: (u32, u32), color: Rgb<u8>) {
    for y in min.1..=max.1 {
        for x in min.0..=max.0 {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }
}

/// Render a grid and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The scale is invalid
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved
pub fn export_png(grid: &Grid, scale: u32, path: &Path) -> Result<()> {
    let img = render_image(grid, scale)?;
    super::create_parent_dir(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| MazeError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
