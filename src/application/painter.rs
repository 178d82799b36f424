use super::Simulation;
use crate::domain::raster;

/// Drag-session state for pointer painting.
///
/// Pointer motion is sampled once per frame, so a fast drag can move the
/// pointer several cells between samples. While a drag is in progress each
/// sample rasterizes a line from the previous sampled cell to the current
/// one, giving a continuous stroke instead of disconnected dots.
pub struct Painter {
    was_down: bool,
    last_cell: (i32, i32),
}

impl Painter {
    pub fn new() -> Self {
        Self {
            was_down: false,
            last_cell: (0, 0),
        }
    }

    /// Feed one pointer sample: the current button state and the pointer
    /// position in grid cells (may be outside the grid).
    ///
    /// The first sample of a drag paints a single cell; subsequent samples
    /// paint the rasterized line from the previous cell. Out-of-range cells
    /// are rejected by the simulation, not here, so a stroke that leaves
    /// the grid and comes back still bridges the on-grid portion.
    pub fn sample(&mut self, sim: &mut Simulation, down: bool, cell: (i32, i32)) {
        if down {
            if self.was_down {
                for (x, y) in raster::line(self.last_cell.0, self.last_cell.1, cell.0, cell.1) {
                    sim.set_cell_alive(x, y);
                }
            } else {
                sim.set_cell_alive(cell.0, cell.1);
            }
            self.last_cell = cell;
        }
        self.was_down = down;
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_while_up_paints_nothing() {
        let mut sim = Simulation::new(16, 12);
        let mut painter = Painter::new();
        painter.sample(&mut sim, false, (5, 5));
        assert!(sim.changes().is_empty());
    }

    #[test]
    fn first_down_sample_paints_one_cell() {
        let mut sim = Simulation::new(16, 12);
        let mut painter = Painter::new();
        painter.sample(&mut sim, true, (5, 5));
        assert_eq!(sim.changes(), &[(5, 5)]);
    }

    #[test]
    fn drag_fills_the_gap_between_samples() {
        let mut sim = Simulation::new(16, 12);
        let mut painter = Painter::new();
        painter.sample(&mut sim, true, (2, 3));
        painter.sample(&mut sim, true, (8, 3));
        // the whole span is painted even though only two samples arrived
        for x in 2..=8 {
            assert!(sim.is_alive(x, 3));
        }
    }

    #[test]
    fn repeated_sample_on_one_cell_reports_it_once() {
        let mut sim = Simulation::new(16, 12);
        let mut painter = Painter::new();
        painter.sample(&mut sim, true, (10, 10));
        painter.sample(&mut sim, true, (10, 10));
        assert_eq!(sim.changes(), &[(10, 10)]);
    }

    #[test]
    fn release_breaks_the_stroke() {
        let mut sim = Simulation::new(16, 12);
        let mut painter = Painter::new();
        painter.sample(&mut sim, true, (2, 2));
        painter.sample(&mut sim, false, (2, 2));
        painter.sample(&mut sim, true, (8, 2));
        // no line between the strokes
        assert!(sim.is_alive(2, 2));
        assert!(sim.is_alive(8, 2));
        assert!(!sim.is_alive(5, 2));
    }

    #[test]
    fn stroke_leaving_the_grid_paints_the_on_grid_part() {
        let mut sim = Simulation::new(16, 12);
        let mut painter = Painter::new();
        painter.sample(&mut sim, true, (14, 5));
        painter.sample(&mut sim, true, (18, 5));
        assert!(sim.is_alive(15, 5));
        // nothing wrapped around to the left edge
        assert!(!sim.is_alive(0, 5));
        assert!(!sim.is_alive(1, 5));
    }
}
