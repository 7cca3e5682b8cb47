//! Flood fill over grid cells
//!
//! 4-connected, iterative with an explicit stack so large grids can not
//! overflow the call stack. Every cell is recolored at most once per call,
//! which bounds the work to O(resolution²).

use pixel_engine::{Color, Grid, GridPosition};

/// Recolors the region of cells connected to `start` that share its color.
///
/// Cells are addressed `[row][col]`. Neighbours are pushed in the order
/// row+1, row-1, col+1, col-1; coordinates off the grid are dropped when
/// popped. Filling with the region's own color is a no-op.
///
/// Returns the number of recolored cells.
pub fn flood_fill(grid: &mut Grid, start: GridPosition, target: Color) -> usize {
    let Some(old_color) = grid.fill_color(start) else {
        return 0;
    };

    let mut filled = 0;
    let mut stack: Vec<(i64, i64)> = vec![(start.row as i64, start.col as i64)];

    while let Some((row, col)) = stack.pop() {
        if !grid.is_valid(row, col) {
            continue;
        }
        let Some(cell) = grid.get_mut((row as usize, col as usize)) else {
            continue;
        };
        if cell.fill_color != old_color || cell.fill_color == target {
            continue;
        }

        cell.fill_color = target;
        filled += 1;

        stack.push((row + 1, col));
        stack.push((row - 1, col));
        stack.push((row, col + 1));
        stack.push((row, col - 1));
    }

    log::debug!("flood fill at {start} with {target}: {filled} cells");
    filled
}
