use macroquad::prelude::*;

use life_paint::config::{SIM_HEIGHT, SIM_WIDTH, window_height, window_width};
use life_paint::{PacingController, Painter, Simulation, input, rendering};

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Painter".to_owned(),
        window_width: window_width(),
        window_height: window_height(),
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut sim = Simulation::new(SIM_WIDTH, SIM_HEIGHT);
    let mut painter = Painter::new();
    let mut pacing = PacingController::new();

    loop {
        // one pointer sample per frame; the painter bridges fast drags
        input::sample_paint(&mut painter, &mut sim);
        input::handle_speed_wheel(&mut pacing);
        input::handle_keys(&mut sim);

        if pacing.should_step(get_time()) {
            sim.step();
        }

        // macroquad presents a fresh backbuffer every iteration, so the
        // cells are redrawn unconditionally rather than gated on the
        // change set's redraw signal
        rendering::draw_cells(sim.changes());
        rendering::draw_hud(&sim, &pacing);

        next_frame().await;
    }
}
