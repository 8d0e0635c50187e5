/// Binary occupancy field over a uniform square lattice.
///
/// Cell `(x, y)` (0-based) covers the world square
/// `[min_x + x*step, min_x + (x+1)*step) x [min_y + y*step, min_y + (y+1)*step)`.
/// Rows are stored contiguously, so row-major scans walk the buffer in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyGrid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    origin: (f64, f64),
    step: f64,
}

impl OccupancyGrid {
    /// Create an empty (all unoccupied) grid
    pub fn new(width: usize, height: usize, origin: (f64, f64), step: f64) -> Self {
        let mut grid = Self::default();
        grid.reset(width, height, origin, step);
        grid
    }

    /// Build a grid from rows of text, `#` marking an occupied cell.
    ///
    /// Short rows are padded with unoccupied cells.
    pub fn from_rows(rows: &[&str], origin: (f64, f64), step: f64) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, rows.len(), origin, step);

        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.set(x, y, true);
                }
            }
        }

        grid
    }

    /// Resize and clear every cell, keeping the allocation
    pub fn reset(&mut self, width: usize, height: usize, origin: (f64, f64), step: f64) {
        self.cells.clear();
        self.cells.resize(width * height, false);
        self.width = width;
        self.height = height;
        self.origin = origin;
        self.step = step;
    }

    /// Drop to a 0x0 grid, keeping the allocation
    pub fn clear(&mut self) {
        self.reset(0, 0, (0.0, 0.0), self.step);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    /// Like [`get`](Self::get), but any off-grid coordinate is unoccupied
    pub fn is_occupied(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && self.get(x as usize, y as usize)
    }

    pub fn set(&mut self, x: usize, y: usize, occupied: bool) {
        let i = self.index(x, y);
        self.cells[i] = occupied;
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major position of the first occupied cell for which `skip` is false
    pub fn first_occupied_where<F>(&self, mut skip: F) -> Option<(usize, usize)>
    where
        F: FnMut(usize) -> bool,
    {
        self.cells
            .iter()
            .enumerate()
            .find(|&(i, &c)| c && !skip(i))
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// World position of the centre of cell `(x, y)`
    pub fn cell_center(&self, x: usize, y: usize) -> (f64, f64) {
        (
            self.origin.0 + (x as f64 + 0.5) * self.step,
            self.origin.1 + (y as f64 + 0.5) * self.step,
        )
    }

    /// World position of lattice vertex `(x, y)`, the top-left corner of cell `(x, y)`
    pub fn vertex(&self, x: usize, y: usize) -> (f64, f64) {
        (
            self.origin.0 + x as f64 * self.step,
            self.origin.1 + y as f64 * self.step,
        )
    }

    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
