//! Build-time configuration. None of these are runtime-mutable; the only
//! live-adjustable quantity is the simulation rate, which the pacing
//! controller clamps to [0, MAX_STEPS_PER_SECOND].

/// Simulation grid width in cells
pub const SIM_WIDTH: i32 = 480;

/// Simulation grid height in cells
pub const SIM_HEIGHT: i32 = 270;

/// Side length of one cell on screen, in pixels
pub const RENDER_SCALE: i32 = 4;

/// Upper clamp for the mouse-wheel rate adjustment
pub const MAX_STEPS_PER_SECOND: f32 = 20.0;

/// Window width in pixels
pub const fn window_width() -> i32 {
    SIM_WIDTH * RENDER_SCALE
}

/// Window height in pixels
pub const fn window_height() -> i32 {
    SIM_HEIGHT * RENDER_SCALE
}
