mod cell;
mod grid;
mod patterns;
pub mod raster;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{BLINKER, BLOCK, GLIDER, Pattern};
