use super::Cell;

/// Double-buffered toroidal grid.
///
/// Holds two same-shaped buffers: "current" is the readable snapshot and
/// "next" is the scratch target a simulation step writes into. After a step
/// the buffers swap in O(1), so "next" must be fully reassigned every step
/// (it still holds the state from two generations ago).
pub struct Grid {
    width: i32,
    height: i32,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead in both buffers
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0);
        let len = (width * height) as usize;
        Self {
            width,
            height,
            current: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
        }
    }

    pub const fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Whether (x, y) names a cell. Painting coordinates are allowed to be
    /// out of range (the pointer can leave the grid) and are rejected here,
    /// never wrapped.
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Row-major flat index; callers check bounds first
    const fn idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Read a cell from the current buffer
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.in_bounds(x, y).then(|| self.current[self.idx(x, y)])
    }

    /// Write a cell into the current buffer (painting path); out-of-range
    /// coordinates are a no-op
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.idx(x, y);
            self.current[idx] = cell;
        }
    }

    /// Write a cell into the scratch buffer (stepping path)
    pub fn set_next(&mut self, x: i32, y: i32, cell: Cell) {
        debug_assert!(self.in_bounds(x, y));
        let idx = self.idx(x, y);
        self.next[idx] = cell;
    }

    /// Promote the scratch buffer to current. Constant time: the two
    /// buffers trade places, no cells are copied.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Kill every cell in the current buffer
    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
    }

    /// Count live cells among the 8 toroidal neighbors of (x, y). Both axes
    /// wrap independently, so the grid is a torus, not a cylinder.
    ///
    /// Counting stops once the count exceeds 3: every count above 3 feeds
    /// the same rule branch, so the early exit cannot change the outcome.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0u8;
        'rows: for dy in -1..=1 {
            let mut ny = y + dy;
            if ny < 0 {
                ny = self.height - 1;
            } else if ny == self.height {
                ny = 0;
            }
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let mut nx = x + dx;
                if nx < 0 {
                    nx = self.width - 1;
                } else if nx == self.width {
                    nx = 0;
                }
                if self.current[self.idx(nx, ny)].is_alive() {
                    count += 1;
                    if count > 3 {
                        break 'rows;
                    }
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_dead() {
        let grid = Grid::new(8, 6);
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(grid.get(x, y), Some(Cell::Dead));
            }
        }
    }

    #[test]
    fn bounds_are_exclusive_of_width_and_height() {
        let grid = Grid::new(8, 6);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(7, 5));
        assert!(!grid.in_bounds(8, 0));
        assert!(!grid.in_bounds(0, 6));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let grid = Grid::new(8, 6);
        assert_eq!(grid.get(8, 0), None);
        assert_eq!(grid.get(-1, 3), None);
    }

    #[test]
    fn corner_neighbors_wrap_both_axes() {
        let mut grid = Grid::new(8, 6);
        grid.set(0, 0, Cell::Alive);

        // (0,0) is a toroidal neighbor of all three opposite corners/edges
        assert_eq!(grid.live_neighbors(7, 0), 1);
        assert_eq!(grid.live_neighbors(0, 5), 1);
        assert_eq!(grid.live_neighbors(7, 5), 1);
        // and of its plain in-range neighbor
        assert_eq!(grid.live_neighbors(1, 1), 1);
        // a cell two columns away sees nothing
        assert_eq!(grid.live_neighbors(2, 0), 0);
    }

    #[test]
    fn neighbor_count_excludes_center() {
        let mut grid = Grid::new(8, 6);
        grid.set(3, 3, Cell::Alive);
        assert_eq!(grid.live_neighbors(3, 3), 0);
    }

    #[test]
    fn early_exit_caps_count_above_three() {
        let mut grid = Grid::new(8, 6);
        // all 8 neighbors of (3,3) alive
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx != 0 || dy != 0 {
                    grid.set(3 + dx, 3 + dy, Cell::Alive);
                }
            }
        }
        let count = grid.live_neighbors(3, 3);
        assert!(count > 3);
        // the capped count still kills a live cell and starves a dead one
        assert_eq!(Cell::Alive.evolve(count), Cell::Dead);
        assert_eq!(Cell::Dead.evolve(count), Cell::Dead);
    }

    #[test]
    fn swap_exchanges_buffers() {
        let mut grid = Grid::new(4, 4);
        grid.set_next(2, 2, Cell::Alive);
        assert_eq!(grid.get(2, 2), Some(Cell::Dead));
        grid.swap();
        assert_eq!(grid.get(2, 2), Some(Cell::Alive));
        grid.swap();
        assert_eq!(grid.get(2, 2), Some(Cell::Dead));
    }
}
