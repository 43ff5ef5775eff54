//! Wilson's algorithm: uniform spanning trees from loop-erased random walks
//!
//! Every cell is queued in shuffled order. The first becomes the initial
//! tree; each later cell not yet in the tree starts a random walk that stops
//! on reaching the tree. Each visited cell keeps only its most recent exit
//! choice, which erases any loops the walk made, and the walk is then
//! retraced from its start, opening walls and adding cells to the tree.
//!
//! A walk terminates with probability 1 on a finite connected grid, but has
//! no worst-case bound. No step limit is imposed, since one would bias the
//! distribution of generated mazes.

use std::collections::VecDeque;

use crate::algorithm::random::RandomSelector;
use crate::io::configuration::GATE_DIVISOR;
use crate::io::error::{Result, invalid_parameter, invariant_violation};
use crate::spatial::Grid;

/// Column span available to the entrance and exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePlacement {
    width: usize,
    span: usize,
}

impl GatePlacement {
    /// Compute the gate span for a grid width
    ///
    /// The entrance is drawn from the leftmost `width / 6` columns of the
    /// north edge, the exit from the rightmost `width / 6` columns of the
    /// south edge.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the span would be empty
    pub fn for_width(width: usize) -> Result<Self> {
        let span = width / GATE_DIVISOR;
        if span == 0 {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be at least {GATE_DIVISOR} to place an entrance and exit"),
            ));
        }
        Ok(Self { width, span })
    }

    /// Number of candidate columns on each edge
    pub const fn span(&self) -> usize {
        self.span
    }

    /// Candidate entrance columns
    pub const fn entrance_columns(&self) -> std::ops::Range<usize> {
        0..self.span
    }

    /// Candidate exit columns
    pub const fn exit_columns(&self) -> std::ops::Range<usize> {
        self.width - self.span..self.width
    }
}

/// Incremental Wilson's algorithm over a single grid
///
/// Each call to [`run_iteration`](Self::run_iteration) consumes one queued
/// cell, which lets callers report progress between walks.
pub struct WilsonGenerator {
    /// Grid being carved
    grid: Grid,
    /// Random source for the shuffle, walk steps and gate columns
    random_selector: RandomSelector,
    /// Cells still to connect, front first
    queue: VecDeque<usize>,
    /// Queue entries consumed so far
    iteration: usize,
    /// Cells currently in the spanning tree
    members: usize,
    /// Random walks performed
    walks: usize,
    /// Queue entries already absorbed by an earlier retrace
    skipped: usize,
}

impl WilsonGenerator {
    /// Shuffle the work queue and seed the tree with its first cell
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the grid has no cells
    pub fn new(grid: Grid, mut random_selector: RandomSelector) -> Result<Self> {
        let mut order = grid.all_cells();
        random_selector.shuffle(&mut order);
        let mut queue = VecDeque::from(order);

        let seed_cell = queue
            .pop_front()
            .ok_or_else(|| invariant_violation("WilsonGenerator::new", &"grid has no cells"))?;

        let mut generator = Self::resume(grid, random_selector, queue);
        let seed = generator.grid.cell_mut(seed_cell)?;
        if !seed.member {
            seed.member = true;
            generator.members += 1;
        }
        Ok(generator)
    }

    /// Continue carving a grid whose tree members are already marked
    ///
    /// `queue` lists the cells still to connect, front first. Unless the
    /// queue is empty, at least one cell must already be a member: walks
    /// only stop on reaching the tree.
    pub fn resume(
        grid: Grid,
        random_selector: RandomSelector,
        queue: impl IntoIterator<Item = usize>,
    ) -> Self {
        let members = grid.cells().iter().filter(|cell| cell.is_member()).count();
        Self {
            grid,
            random_selector,
            queue: queue.into_iter().collect(),
            iteration: 0,
            members,
            walks: 0,
            skipped: 0,
        }
    }

    /// Connect the next queued cell to the tree
    ///
    /// Returns `false` once the queue is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if a walk reaches a cell with no
    /// neighbors or the retrace finds a broken exit chain
    pub fn run_iteration(&mut self) -> Result<bool> {
        let Some(from) = self.queue.pop_front() else {
            return Ok(false);
        };
        self.iteration += 1;

        let already_member = self
            .grid
            .cell_at(from)
            .ok_or_else(|| invariant_violation("run_iteration", &format!("queued cell {from} is out of range")))?
            .is_member();
        if already_member {
            self.skipped += 1;
            return Ok(true);
        }

        self.loop_erased_walk(from)?;
        self.retrace(from)?;
        self.walks += 1;

        Ok(true)
    }

    /// Run iterations until every cell is in the tree
    ///
    /// # Errors
    ///
    /// Propagates any error from [`run_iteration`](Self::run_iteration)
    pub fn carve(&mut self) -> Result<()> {
        while self.run_iteration()? {}
        log::debug!(
            "carved {} cells with {} walks, {} queued cells already connected",
            self.members,
            self.walks,
            self.skipped
        );
        Ok(())
    }

    /// Carve any remaining cells, place the entrance and exit, and release
    /// the grid
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the width admits no gate columns,
    /// or propagates carving errors
    pub fn finish(mut self) -> Result<Grid> {
        let gates = GatePlacement::for_width(self.grid.width())?;
        self.carve()?;
        self.place_gates(gates)?;
        Ok(self.grid)
    }

    /// Whether every queued cell has been processed
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty()
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Release the grid without placing gates
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Queue entries consumed so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Cells currently in the spanning tree
    pub const fn members(&self) -> usize {
        self.members
    }

    /// Random walks performed so far
    pub const fn walks(&self) -> usize {
        self.walks
    }

    /// Queue entries that were already in the tree when reached
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Queue entries not yet consumed
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Walk from `from` until reaching the tree, recording exits
    ///
    /// Revisiting a cell overwrites its exit, so only the last departure from
    /// each cell survives.
    fn loop_erased_walk(&mut self, from: usize) -> Result<()> {
        self.grid.reset_walk_pointers();

        let mut current = from;
        loop {
            let cell = self.grid.cell_at(current).ok_or_else(|| {
                invariant_violation("loop_erased_walk", &format!("cell {current} is out of range"))
            })?;
            if cell.is_member() {
                return Ok(());
            }

            let next = self
                .random_selector
                .choose(cell.neighborhood())
                .ok_or_else(|| {
                    invariant_violation(
                        "loop_erased_walk",
                        &format!("cell {current} has an empty neighborhood"),
                    )
                })?;

            self.grid.cell_mut(current)?.walk_exit = Some(next);
            current = next;
        }
    }

    /// Follow recorded exits from `from`, opening walls and joining cells to
    /// the tree until a member is reached
    ///
    /// This is the second half of [`run_iteration`](Self::run_iteration) and
    /// relies on the exits left by the walk that precedes it there.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if a cell on the way has no recorded
    /// exit or its exit is not adjacent
    #[doc(hidden)]
    pub fn retrace(&mut self, from: usize) -> Result<()> {
        let mut current = from;
        loop {
            let cell = self.grid.cell_at(current).ok_or_else(|| {
                invariant_violation("retrace", &format!("cell {current} is out of range"))
            })?;
            if cell.is_member() {
                return Ok(());
            }

            let next = cell.walk_exit().ok_or_else(|| {
                invariant_violation("retrace", &format!("cell {current} has no recorded exit"))
            })?;
            let direction = cell.direction_to(next).ok_or_else(|| {
                invariant_violation(
                    "retrace",
                    &format!("recorded exit {next} is not adjacent to cell {current}"),
                )
            })?;

            self.grid.remove_wall(current, direction)?;
            self.grid.cell_mut(current)?.member = true;
            self.members += 1;
            current = next;
        }
    }

    /// Pick entrance and exit columns and open their outward walls
    fn place_gates(&mut self, gates: GatePlacement) -> Result<()> {
        let north = 0;
        let south = self.grid.height() - 1;
        let east = self.grid.width() - 1;

        let entrance_col = self.gate_offset(gates)?;
        let exit_col = east - self.gate_offset(gates)?;

        let entrance = self
            .grid
            .index_of(north, entrance_col)
            .ok_or_else(|| invariant_violation("place_gates", &"entrance column out of range"))?;
        let exit = self
            .grid
            .index_of(south, exit_col)
            .ok_or_else(|| invariant_violation("place_gates", &"exit column out of range"))?;

        self.grid.place_gates(entrance, exit)?;

        log::debug!("entrance at column {entrance_col}, exit at column {exit_col}");
        Ok(())
    }

    fn gate_offset(&mut self, gates: GatePlacement) -> Result<usize> {
        self.random_selector
            .index(gates.span())
            .ok_or_else(|| invariant_violation("place_gates", &"gate span is empty"))
    }
}

/// Generate a perfect maze with entrance and exit
///
/// Configuration is validated before any cell is carved.
///
/// # Errors
///
/// Returns a configuration error for zero or oversized dimensions or a
/// width below 6; invariant violations are propagated from carving
pub fn generate_maze(height: usize, width: usize, seed: u64) -> Result<Grid> {
    GatePlacement::for_width(width)?;
    let grid = Grid::new(height, width)?;
    WilsonGenerator::new(grid, RandomSelector::new(seed))?.finish()
}
