//! Command-line interface for generating, solving and rendering one maze

use crate::algorithm::random::RandomSelector;
use crate::algorithm::solver;
use crate::algorithm::wilson::{GatePlacement, WilsonGenerator};
use crate::analysis::topology::MazeStatistics;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH, STDOUT_TARGET};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::io::svg::export_svg;
use crate::io::text::{export_text, write_text};
use crate::spatial::Grid;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "wilsonmaze")]
#[command(
    author,
    version,
    about = "Generate perfect mazes with Wilson's algorithm"
)]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Height of the maze in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Width of the maze in cells (at least 6)
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Edge length of a cell in rendered images, in pixels
    #[arg(short = 'c', long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Random seed for reproducible generation (drawn from the OS if absent)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Solve the maze before rendering
    #[arg(long)]
    pub solve: bool,

    /// Text file to render ("-" for standard output)
    #[arg(short, long, value_name = "PATH")]
    pub text: Option<PathBuf>,

    /// PNG image file to render
    #[arg(short, long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// SVG image file to render
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Log passage statistics after generation
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if any output destination was requested
    pub const fn has_outputs(&self) -> bool {
        self.text.is_some() || self.png.is_some() || self.svg.is_some()
    }

    /// Check if a raster or vector image was requested
    pub const fn renders_images(&self) -> bool {
        self.png.is_some() || self.svg.is_some()
    }
}

/// Runs one generate, solve and render cycle for parsed arguments
pub struct MazeCommand {
    cli: Cli,
}

impl MazeCommand {
    /// Create a command for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parsed arguments
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Generate the maze, optionally solve it, and write every requested
    /// output
    ///
    /// Returns the finished grid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Height, width or scale are invalid (checked before generation)
    /// - An internal invariant is violated during generation or solving
    /// - An output file cannot be written
    pub fn run(&self) -> Result<Grid> {
        self.validate()?;

        let seed = self.cli.seed.unwrap_or_else(RandomSelector::entropy_seed);
        log::info!("using seed {seed}");

        let started = Instant::now();
        let mut grid = self.generate(seed)?;
        log::info!(
            "created {:5} x {:5} maze in {:?}",
            grid.height(),
            grid.width(),
            started.elapsed()
        );

        if self.cli.solve {
            let started = Instant::now();
            let path = solver::solve(&mut grid)?;
            log::info!(
                "solved  {:5} x {:5} maze in {:?} ({} cells on path)",
                grid.height(),
                grid.width(),
                started.elapsed(),
                path.len()
            );
        }

        if self.cli.stats {
            log::info!("{}", MazeStatistics::from_grid(&grid));
        }

        self.write_outputs(&grid)?;
        Ok(grid)
    }

    fn validate(&self) -> Result<()> {
        GatePlacement::for_width(self.cli.width)?;
        if self.cli.renders_images() && self.cli.scale == 0 {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    fn generate(&self, seed: u64) -> Result<Grid> {
        let grid = Grid::new(self.cli.height, self.cli.width)?;
        let total = grid.len();
        let mut generator = WilsonGenerator::new(grid, RandomSelector::new(seed))?;

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(total, "carving")
        } else {
            ProgressManager::hidden(total)
        };
        while generator.run_iteration()? {
            progress.update(generator.members());
        }
        progress.update(generator.members());
        progress.finish();

        generator.finish()
    }

    fn write_outputs(&self, grid: &Grid) -> Result<()> {
        if !self.cli.has_outputs() {
            return write_stdout(grid);
        }

        if let Some(path) = &self.cli.text {
            if path.as_os_str() == STDOUT_TARGET {
                write_stdout(grid)?;
            } else {
                timed(path, || export_text(grid, path))?;
            }
        }
        if let Some(path) = &self.cli.png {
            timed(path, || export_png(grid, self.cli.scale, path))?;
        }
        if let Some(path) = &self.cli.svg {
            timed(path, || export_svg(grid, self.cli.scale, path))?;
        }
        Ok(())
    }
}

fn write_stdout(grid: &Grid) -> Result<()> {
    write_text(grid, &mut std::io::stdout().lock()).with_path(Path::new("<stdout>"), "write text")
}

fn timed(path: &Path, write: impl FnOnce() -> Result<()>) -> Result<()> {
    let started = Instant::now();
    write()?;
    log::info!("created {} in {:?}", path.display(), started.elapsed());
    Ok(())
}
