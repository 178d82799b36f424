mod changes;
mod pacing;
mod painter;
mod simulation;

pub use changes::ChangeSet;
pub use pacing::PacingController;
pub use painter::Painter;
pub use simulation::Simulation;
