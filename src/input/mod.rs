use macroquad::prelude::*;

use crate::application::{PacingController, Painter, Simulation};
use crate::config::RENDER_SCALE;
use crate::domain::GLIDER;

/// Pointer position in grid cells. Display coordinates divide by the render
/// scale and truncate, so the simulation never sees sub-cell precision. The
/// result can be outside the grid; bounds rejection happens in the
/// simulation, not here.
pub fn pointer_cell() -> (i32, i32) {
    let (mx, my) = mouse_position();
    (mx as i32 / RENDER_SCALE, my as i32 / RENDER_SCALE)
}

/// Feed the current left-button state and pointer cell to the painter
pub fn sample_paint(painter: &mut Painter, sim: &mut Simulation) {
    painter.sample(sim, is_mouse_button_down(MouseButton::Left), pointer_cell());
}

/// Mouse wheel nudges the simulation rate
pub fn handle_speed_wheel(pacing: &mut PacingController) {
    let wheel = mouse_wheel().1;
    if wheel != 0.0 {
        pacing.adjust(wheel.signum());
    }
}

/// Keyboard: C clears, R randomizes, G stamps a glider at the pointer
pub fn handle_keys(sim: &mut Simulation) {
    if is_key_pressed(KeyCode::C) {
        sim.clear();
    }
    if is_key_pressed(KeyCode::R) {
        sim.randomize();
    }
    if is_key_pressed(KeyCode::G) {
        let (x, y) = pointer_cell();
        sim.stamp(GLIDER, x, y);
    }
}
