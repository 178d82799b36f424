use macroquad::prelude::*;

use crate::application::{PacingController, Simulation};
use crate::config::RENDER_SCALE;

/// Clear the frame and draw one scaled square per change-set coordinate.
/// The change set is drawn exactly as reported; a duplicate entry just
/// paints the same square twice.
pub fn draw_cells(points: &[(i32, i32)]) {
    clear_background(BLACK);
    let scale = RENDER_SCALE as f32;
    for &(x, y) in points {
        draw_rectangle(x as f32 * scale, y as f32 * scale, scale, scale, WHITE);
    }
}

/// Status line: rate, generation, and the key bindings
pub fn draw_hud(sim: &Simulation, pacing: &PacingController) {
    let status = if pacing.is_paused() {
        format!("paused | gen {}", sim.generation())
    } else {
        format!("{:.0} steps/s | gen {}", pacing.rate(), sim.generation())
    };
    draw_text(&status, 8.0, 20.0, 20.0, GRAY);
    draw_text(
        "drag: paint | wheel: speed | C: clear | R: random | G: glider",
        8.0,
        38.0,
        16.0,
        DARKGRAY,
    );
}
