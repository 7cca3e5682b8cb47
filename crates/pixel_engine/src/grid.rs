use crate::{Cell, Color, ConfirmGate};

pub const RESOLUTION_CHANGE_WARNING: &str = "Warning, changing the grid density will erase the current drawing, are you sure?";

/// A (row, column) coordinate into the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row: {}, col: {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for GridPosition {
    fn from(value: (usize, usize)) -> Self {
        GridPosition::new(value.0, value.1)
    }
}

/// `resolution` x `resolution` square cells covering a square surface of
/// `surface_size` pixels, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    resolution: usize,
    surface_size: f32,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(resolution: usize, surface_size: f32) -> Self {
        let mut grid = Self {
            resolution: resolution.max(1),
            surface_size,
            cells: Vec::new(),
        };
        grid.build();
        grid
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn surface_size(&self) -> f32 {
        self.surface_size
    }

    pub fn cell_width(&self) -> f32 {
        self.surface_size / self.resolution as f32
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get(&self, pos: impl Into<GridPosition>) -> Option<&Cell> {
        let pos = pos.into();
        self.cells.get(pos.row).and_then(|row| row.get(pos.col))
    }

    pub fn get_mut(&mut self, pos: impl Into<GridPosition>) -> Option<&mut Cell> {
        let pos = pos.into();
        self.cells.get_mut(pos.row).and_then(|row| row.get_mut(pos.col))
    }

    pub fn fill_color(&self, pos: impl Into<GridPosition>) -> Option<Color> {
        self.get(pos).map(|cell| cell.fill_color)
    }

    pub fn is_valid(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.cells.len() && (col as usize) < self.cells[row as usize].len()
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (GridPosition, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, cell)| (GridPosition::new(row, col), cell)))
    }

    fn offset(&self, index: usize) -> f32 {
        // modulo guards against float drift pushing a cell onto the far edge
        (self.cell_width() * index as f32) % self.surface_size
    }

    fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (self.offset(col), self.offset(row))
    }

    /// Exclusive far edge of column or row `index`: the origin of the next
    /// one, or the surface size for the last. Computing it this way keeps
    /// `pos + width` rounding from reaching into the neighbour.
    pub fn cell_end(&self, index: usize) -> f32 {
        if index + 1 >= self.resolution {
            self.surface_size
        } else {
            self.offset(index + 1)
        }
    }

    /// Throws away all cells and allocates a fresh white grid.
    pub fn build(&mut self) {
        let width = self.cell_width();
        let mut cells = Vec::with_capacity(self.resolution);
        for row in 0..self.resolution {
            let mut line = Vec::with_capacity(self.resolution);
            for col in 0..self.resolution {
                let (pos_x, pos_y) = self.cell_origin(row, col);
                line.push(Cell::new(width, pos_x, pos_y));
            }
            cells.push(line);
        }
        self.cells = cells;
        log::debug!("built {0}x{0} grid on {1}px surface", self.resolution, self.surface_size);
    }

    /// Recomputes cell geometry for a new surface size. Colors and
    /// (row, col) identity are kept, nothing is reallocated.
    pub fn reposition(&mut self, surface_size: f32) {
        self.surface_size = surface_size;
        let width = self.cell_width();
        for row in 0..self.cells.len() {
            for col in 0..self.cells[row].len() {
                let (pos_x, pos_y) = self.cell_origin(row, col);
                let cell = &mut self.cells[row][col];
                cell.width = width;
                cell.pos_x = pos_x;
                cell.pos_y = pos_y;
            }
        }
        log::debug!("repositioned grid to {}px surface", surface_size);
    }

    pub fn clear(&mut self) {
        self.build();
    }

    /// Switches to `resolution` cells per side after asking `gate`.
    ///
    /// The drawing is erased on success. Returns `false` and leaves the grid
    /// untouched if the user declines, if `resolution` is zero or if it is
    /// the current resolution (no question is asked in the last two cases).
    pub fn change_resolution(&mut self, resolution: usize, gate: &mut impl ConfirmGate) -> bool {
        if resolution == 0 {
            log::warn!("ignoring invalid grid resolution 0");
            return false;
        }
        if resolution == self.resolution {
            return false;
        }
        if !gate.confirm(RESOLUTION_CHANGE_WARNING) {
            log::info!("resolution change {} -> {} declined", self.resolution, resolution);
            return false;
        }
        log::info!("resolution change {} -> {}", self.resolution, resolution);
        self.resolution = resolution;
        self.clear();
        true
    }
}
