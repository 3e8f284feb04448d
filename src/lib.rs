mod cell;
mod control;
mod grid;
mod gui;
mod matrix;
pub mod rules;
mod utils;

pub use cell::CellState;
pub use control::{advance, create, reset, snapshot};
pub use grid::Grid;
pub use gui::{App, Config};
pub use matrix::CellMatrix;
pub use utils::{GridError, SimConfig};
