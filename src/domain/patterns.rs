/// A named set of live cells, as offsets from a placement origin.
#[derive(Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

/// Glider - simplest spaceship, translates by (+1, +1) every 4 steps
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Blinker - period 2 oscillator
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
};

/// Block - still life
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};
