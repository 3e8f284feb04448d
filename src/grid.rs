use crate::{CellMatrix, GridError, SimConfig};
use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bounded Game of Life field together with the generation `restart` returns to.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: CellMatrix,
    cells_next: CellMatrix,
    seed_generation: CellMatrix, // Never mutated after `randomize`.
    generation: u64,             // Steps since the seed generation.
    seed: u64,                   // Seed of the random draw.
}

impl Grid {
    /// Draw a random field and advance it by one step.
    ///
    /// The advanced field, not the raw draw, becomes the seed generation.
    pub fn randomize(config: &SimConfig) -> Result<Self, GridError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let raw = CellMatrix::random(config.size, config.fill_rate(), &mut rng);

        let cells_curr = raw.next_generation();
        let grid = Self {
            cells_next: raw,
            seed_generation: cells_curr.clone(),
            cells_curr,
            generation: 0,
            seed,
        };
        info!(
            "generated {}x{} grid: live_percent={}, seed={}, population={}",
            config.size,
            config.size,
            config.live_percent,
            seed,
            grid.population()
        );
        Ok(grid)
    }

    /// Use `cells` as both the current and the seed generation, without the initial step.
    pub fn from_cells(cells: CellMatrix) -> Self {
        Self {
            cells_next: CellMatrix::blank(cells.size()),
            seed_generation: cells.clone(),
            cells_curr: cells,
            generation: 0,
            seed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.cells_curr.size()
    }

    pub fn cells(&self) -> &CellMatrix {
        &self.cells_curr
    }

    pub fn seed_generation(&self) -> &CellMatrix {
        &self.seed_generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed of the random draw; `0` for grids built with [`Grid::from_cells`].
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn population(&self) -> usize {
        self.cells_curr.population()
    }

    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        self.cells_curr.neighbor_count(row, col)
    }

    /// Advance the whole field by one generation.
    pub fn step(&mut self) {
        self.cells_curr.next_generation_into(&mut self.cells_next);
        std::mem::swap(&mut self.cells_curr, &mut self.cells_next);
        self.generation += 1;
        trace!(
            "generation {}: population={}",
            self.generation,
            self.population()
        );
    }

    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Return to a copy of the seed generation.
    pub fn restart(&mut self) {
        self.cells_curr.clone_from(&self.seed_generation);
        self.generation = 0;
        debug!("restarted from seed generation, seed={}", self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    const SEED: u64 = 42;

    #[test]
    fn test_randomize_matches_raw_draw_advanced_once() {
        let config = SimConfig::new(32, 35.).with_seed(SEED);
        let grid = Grid::randomize(&config).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let raw = CellMatrix::random(32, config.fill_rate(), &mut rng);

        assert_eq!(grid.cells(), &raw.next_generation());
        assert_eq!(grid.seed_generation(), grid.cells());
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.seed(), SEED);
    }

    #[test]
    fn test_randomize_rejects_invalid_config() {
        assert_eq!(
            Grid::randomize(&SimConfig::new(0, 20.)).unwrap_err(),
            GridError::InvalidSize(0)
        );
        assert_eq!(
            Grid::randomize(&SimConfig::new(10, 101.)).unwrap_err(),
            GridError::InvalidProbability(101.)
        );
    }

    #[test]
    fn test_step_uses_double_buffer() {
        let blinker = CellMatrix::from_fn(5, |r, c| (r == 2 && (1..=3).contains(&c)).into());
        let mut grid = Grid::from_cells(blinker);
        grid.step();
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.cells().get(1, 2), CellState::Alive);
        assert_eq!(grid.cells().get(2, 1), CellState::Dead);
        grid.step();
        assert_eq!(grid.cells(), grid.seed_generation());
    }

    #[test]
    fn test_restart_keeps_seed_generation() {
        let mut grid = Grid::randomize(&SimConfig::new(24, 40.).with_seed(SEED)).unwrap();
        let seed_generation = grid.seed_generation().clone();

        grid.step_n(5);
        assert_eq!(grid.generation(), 5);
        grid.restart();
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.cells(), &seed_generation);

        grid.step_n(3);
        assert_eq!(grid.seed_generation(), &seed_generation);
    }
}
