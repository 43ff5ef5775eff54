//! Explicit-stack depth-first search from entrance to exit
//!
//! The passage graph of a generated maze is a tree, so the first path found
//! is the only one and no shortest-path bookkeeping is needed.

use crate::io::error::{Result, invalid_parameter, invariant_violation};
use crate::spatial::{Cell, Direction, Grid};

/// Find and mark the unique entrance to exit path
///
/// Clears any previous search state, runs the search, flags every cell on
/// the path and returns the path indices from entrance to exit. Solving an
/// already solved grid recomputes the identical path.
///
/// # Errors
///
/// Returns a configuration error if the grid has no entrance or exit, and
/// an invariant violation if the exit is unreachable or the predecessor
/// chain is broken
pub fn solve(grid: &mut Grid) -> Result<Vec<usize>> {
    let (entrance, exit) = gates(grid)?;

    grid.reset_search_state();
    search(grid, entrance, exit)?;
    let path = mark_path(grid)?;

    log::debug!("solution visits {} cells", path.len());
    Ok(path)
}

fn gates(grid: &Grid) -> Result<(usize, usize)> {
    match (grid.entrance(), grid.exit()) {
        (Some(entrance), Some(exit)) => Ok((entrance, exit)),
        _ => Err(invalid_parameter(
            "grid",
            &"ungenerated",
            &"solving requires a placed entrance and exit",
        )),
    }
}

fn search(grid: &mut Grid, entrance: usize, exit: usize) -> Result<()> {
    let mut stack = vec![entrance];
    grid.cell_mut(entrance)?.visited = true;

    loop {
        let Some(&top) = stack.last() else {
            return Err(invariant_violation(
                "solve",
                &"search stack exhausted before reaching the exit",
            ));
        };
        if top == exit {
            return Ok(());
        }
        stack.pop();
        let current = top;

        // An exit directly south ends the search without expanding further
        if grid.open_neighbor(current, Direction::South) == Some(exit) {
            visit(grid, exit, current)?;
            stack.push(exit);
            continue;
        }

        for direction in Direction::ALL {
            let Some(neighbor) = grid.open_neighbor(current, direction) else {
                continue;
            };
            let seen = grid.cell_at(neighbor).is_some_and(Cell::is_visited);
            if !seen {
                visit(grid, neighbor, current)?;
                stack.push(neighbor);
            }
        }
    }
}

fn visit(grid: &mut Grid, index: usize, from: usize) -> Result<()> {
    let cell = grid.cell_mut(index)?;
    cell.visited = true;
    cell.predecessor = Some(from);
    Ok(())
}

/// Flag the predecessor chain left by a search and mark the grid solved
///
/// Walks back from the exit to the entrance, setting each cell's on-path
/// flag, and returns the path entrance first. [`solve`] calls this after its
/// search; it only reads the predecessors already stored in the grid.
///
/// # Errors
///
/// Returns a configuration error if the grid has no entrance or exit, and
/// an invariant violation if the chain breaks off or loops before reaching
/// the entrance
pub fn mark_path(grid: &mut Grid) -> Result<Vec<usize>> {
    let (entrance, exit) = gates(grid)?;
    let mut path = Vec::new();
    let mut current = exit;
    loop {
        if path.len() >= grid.len() {
            return Err(invariant_violation("mark_path", &"predecessor chain contains a cycle"));
        }
        let cell = grid.cell_mut(current)?;
        cell.on_path = true;
        path.push(current);
        if current == entrance {
            break;
        }
        current = cell.predecessor.ok_or_else(|| {
            invariant_violation(
                "mark_path",
                &format!("cell {current} on the path has no predecessor"),
            )
        })?;
    }
    path.reverse();
    grid.mark_solved();
    Ok(path)
}
