/// Ordered list of alive coordinates the renderer should draw this frame.
///
/// The simulation rebuilds it wholesale after each step; painting appends
/// to it incrementally. Paint strokes that revisit a cell may append the
/// same coordinate twice within one tick; that is tolerated rather than
/// deduplicated, since it costs a duplicate draw of one point and nothing
/// else. The next step rebuild discards any duplicates.
pub struct ChangeSet {
    points: Vec<(i32, i32)>,
    dirty: bool,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            dirty: true,
        }
    }

    /// Coordinates to draw, in insertion order
    pub fn points(&self) -> &[(i32, i32)] {
        &self.points
    }

    /// Append a coordinate and flag a redraw
    pub fn push(&mut self, x: i32, y: i32) {
        self.points.push((x, y));
        self.dirty = true;
    }

    /// Drop all coordinates (start of a wholesale rebuild)
    pub fn clear(&mut self) {
        self.points.clear();
        self.dirty = true;
    }

    /// Report and reset the mutated-since-last-render signal
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for ChangeSet {
    fn default() -> Self {
        Self::new()
    }
}
