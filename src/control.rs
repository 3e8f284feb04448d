//! Operations the front-end drives the simulation with.

use crate::{CellMatrix, Grid, GridError, SimConfig};

/// Start a new simulation, including the step that follows the random draw.
pub fn create(config: &SimConfig) -> Result<Grid, GridError> {
    Grid::randomize(config)
}

/// Perform exactly one step.
pub fn advance(grid: &mut Grid) {
    grid.step();
}

/// Go back to the seed generation.
pub fn reset(grid: &mut Grid) {
    grid.restart();
}

/// Current cells for rendering.
pub fn snapshot(grid: &Grid) -> &CellMatrix {
    grid.cells()
}
