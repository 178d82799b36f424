// Domain layer - grid storage, transition rule, line rasterization
pub mod domain;

// Application layer - simulation engine, painting, pacing
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Build-time constants
pub mod config;

// Re-exports for convenience
pub use application::{PacingController, Painter, Simulation};
pub use domain::{Cell, Grid, Pattern};
