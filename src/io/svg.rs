//! SVG rendering using the same wall geometry as the PNG renderer

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::io::configuration::{SVG_PATH_COLOR, WALL_THICKNESS};
use crate::io::error::{Result, WithPath};
use crate::io::image::Layout;
use crate::spatial::Grid;

/// Render a grid as an SVG document
///
/// Walls become `<line>` elements; a solved grid also gets a `<polyline>`
/// through the path cell centers from entrance to exit.
///
/// # Errors
///
/// Returns a configuration error if the scale is invalid
pub fn render_svg(grid: &Grid, scale: u32) -> Result<String> {
    let layout = Layout::new(grid, scale)?;
    let (width, height) = (layout.width, layout.height);

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#
    );

    if let Some(path) = grid.solution() {
        let points = path
            .iter()
            .filter_map(|&index| grid.cell_at(index))
            .map(|cell| {
                let (x, y) = layout.center(cell.row(), cell.col());
                format!("{x},{y}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        let stroke = (scale / 4).max(1);
        let _ = writeln!(
            svg,
            r#"  <polyline points="{points}" fill="none" stroke="{SVG_PATH_COLOR}" stroke-width="{stroke}" stroke-linejoin="round"/>"#
        );
    }

    let _ = writeln!(
        svg,
        r#"  <g stroke="black" stroke-width="{WALL_THICKNESS}" stroke-linecap="square">"#
    );
    for segment in layout.wall_segments(grid) {
        let _ = writeln!(
            svg,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            segment.from.0, segment.from.1, segment.to.0, segment.to.1
        );
    }
    svg.push_str("  </g>\n</svg>\n");

    Ok(svg)
}

/// Render a grid and save it as an SVG file
///
/// # Errors
///
/// Returns an error if the scale is invalid or the file cannot be written
pub fn export_svg(grid: &Grid, scale: u32, path: &Path) -> Result<()> {
    let svg = render_svg(grid, scale)?;
    super::create_parent_dir(path)?;
    fs::write(path, svg).with_path(path, "write svg")
}
