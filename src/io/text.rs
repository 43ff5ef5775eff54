//! Box-drawing text rendering
//!
//! The canvas has `2 * height + 1` rows and `2 * width + 1` columns. Cell
//! interiors sit at odd/odd coordinates, wall segments at odd/even and
//! even/odd coordinates, and wall junctions at even/even coordinates.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ndarray::Array2;

use crate::io::configuration::PATH_GLYPH;
use crate::io::error::{Result, WithPath};
use crate::spatial::{Direction, Grid};

const HORIZONTAL: char = '═';
const VERTICAL: char = '║';
const OPEN: char = ' ';

/// Build the glyph canvas for a grid
pub fn render_canvas(grid: &Grid) -> Array2<char> {
    let rows = grid.height() * 2 + 1;
    let cols = grid.width() * 2 + 1;
    let mut canvas = Array2::from_elem((rows, cols), OPEN);

    let mut put = |y: usize, x: usize, glyph: char| {
        if let Some(slot) = canvas.get_mut([y, x]) {
            *slot = glyph;
        }
    };

    for cell in grid.cells() {
        let (y, x) = (cell.row() * 2 + 1, cell.col() * 2 + 1);

        if grid.is_solved() && cell.is_on_path() {
            put(y, x, PATH_GLYPH);
        }

        // Shared edges are drawn from the north and west sides only
        if cell.has_wall(Direction::North) {
            put(y - 1, x, HORIZONTAL);
        }
        if cell.has_wall(Direction::West) {
            put(y, x - 1, VERTICAL);
        }
        if cell.neighbor(Direction::East).is_none() && cell.has_wall(Direction::East) {
            put(y, x + 1, VERTICAL);
        }
        if cell.neighbor(Direction::South).is_none() && cell.has_wall(Direction::South) {
            put(y + 1, x, HORIZONTAL);
        }
    }

    for y in (0..rows).step_by(2) {
        for x in (0..cols).step_by(2) {
            let at = |dy: isize, dx: isize| {
                y.checked_add_signed(dy)
                    .zip(x.checked_add_signed(dx))
                    .and_then(|(ny, nx)| canvas.get([ny, nx]).copied())
            };
            let up = at(-1, 0) == Some(VERTICAL);
            let down = at(1, 0) == Some(VERTICAL);
            let left = at(0, -1) == Some(HORIZONTAL);
            let right = at(0, 1) == Some(HORIZONTAL);

            if let Some(slot) = canvas.get_mut([y, x]) {
                *slot = junction(up, right, down, left);
            }
        }
    }

    canvas
}

/// Double-line glyph for a corner given which wall segments meet there
const fn junction(up: bool, right: bool, down: bool, left: bool) -> char {
    match (up, right, down, left) {
        (false, false, false, false) => OPEN,
        (_, false, _, false) => VERTICAL,
        (false, _, false, _) => HORIZONTAL,
        (false, true, true, false) => '╔',
        (false, false, true, true) => '╗',
        (true, true, false, false) => '╚',
        (true, false, false, true) => '╝',
        (true, true, true, false) => '╠',
        (true, false, true, true) => '╣',
        (false, true, true, true) => '╦',
        (true, true, false, true) => '╩',
        (true, true, true, true) => '╬',
    }
}

/// Render a grid as text, one canvas row per line
pub fn render_text(grid: &Grid) -> String {
    let canvas = render_canvas(grid);
    let mut text = String::with_capacity(canvas.len() * 3 + canvas.nrows());
    for row in canvas.rows() {
        text.extend(row.iter());
        text.push('\n');
    }
    text
}

/// Write the text rendering to any writer
///
/// # Errors
///
/// Returns any error raised by the writer
pub fn write_text(grid: &Grid, writer: &mut impl Write) -> std::io::Result<()> {
    writer.write_all(render_text(grid).as_bytes())?;
    writer.flush()
}

/// Write the text rendering to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written
pub fn export_text(grid: &Grid, path: &Path) -> Result<()> {
    super::create_parent_dir(path)?;
    let file = File::create(path).with_path(path, "create text file")?;
    let mut writer = BufWriter::new(file);
    write_text(grid, &mut writer).with_path(path, "write text")
}
