use rand::Rng;

use super::ChangeSet;
use crate::domain::{Cell, Grid, Pattern};

/// Simulation owns the double-buffered grid and the render change set, and
/// is the only mutator of either. Painting goes through `set_cell_alive`,
/// the generation advance goes through `step`.
pub struct Simulation {
    grid: Grid,
    changes: ChangeSet,
    generation: u64,
}

impl Simulation {
    /// Create a paused, all-dead simulation of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid: Grid::new(width, height),
            changes: ChangeSet::new(),
            generation: 0,
        }
    }

    pub fn dimensions(&self) -> (i32, i32) {
        self.grid.dimensions()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Coordinates currently needing a draw
    pub fn changes(&self) -> &[(i32, i32)] {
        self.changes.points()
    }

    /// Whether the change set mutated since this was last called
    pub fn take_needs_redraw(&mut self) -> bool {
        self.changes.take_dirty()
    }

    /// Advance the automaton by one generation.
    ///
    /// Reads the whole current buffer, writes every cell of the scratch
    /// buffer (the scratch still holds a stale generation, so nothing may
    /// carry over), rebuilds the change set with the live cells of the new
    /// state in row-major order, then swaps the buffers.
    pub fn step(&mut self) {
        let (width, height) = self.grid.dimensions();
        self.changes.clear();

        for y in 0..height {
            for x in 0..width {
                let cell = self.grid.get(x, y).unwrap_or(Cell::Dead);
                let next = cell.evolve(self.grid.live_neighbors(x, y));
                self.grid.set_next(x, y, next);
                if next.is_alive() {
                    self.changes.push(x, y);
                }
            }
        }

        self.grid.swap();
        self.generation += 1;
    }

    /// Mark (x, y) alive in the current buffer.
    ///
    /// Returns true iff the coordinate is in bounds, whether or not the
    /// cell changed state. Out-of-range coordinates are an expected input
    /// (the pointer can leave the grid) and are rejected, never wrapped.
    /// A cell that was already alive is left alone so the change set does
    /// not accumulate an entry per hover frame.
    pub fn set_cell_alive(&mut self, x: i32, y: i32) -> bool {
        if !self.grid.in_bounds(x, y) {
            return false;
        }
        if !self.is_alive(x, y) {
            self.grid.set(x, y, Cell::Alive);
            self.changes.push(x, y);
        }
        true
    }

    /// Place a pattern with its origin at (x, y); cells falling outside the
    /// grid are dropped
    pub fn stamp(&mut self, pattern: Pattern, x: i32, y: i32) {
        for &(dx, dy) in pattern.cells {
            self.set_cell_alive(x + dx, y + dy);
        }
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.changes.clear();
        self.generation = 0;
    }

    /// Repopulate every cell at random (30% alive) and reset the
    /// generation counter
    pub fn randomize(&mut self) {
        let mut rng = rand::rng();
        let (width, height) = self.grid.dimensions();
        self.clear();
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(0.3) {
                    self.grid.set(x, y, Cell::Alive);
                    self.changes.push(x, y);
                }
            }
        }
    }
}
