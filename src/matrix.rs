use crate::{rules, CellState, GridError};
use rand::Rng;
use std::{fmt, ops::Index, str::FromStr};

/// Dense `size x size` field of cells, row-major.
///
/// Edges are bounded: cells outside the field are never counted as neighbors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellMatrix {
    cells: Vec<CellState>,
    size: usize,
}

impl CellMatrix {
    /// Create a field with all cells dead.
    ///
    /// Panics if `size == 0`; use [`SimConfig::validate`](crate::SimConfig::validate)
    /// to check user input first.
    pub fn blank(size: usize) -> Self {
        assert!(size >= 1, "field side must be positive");
        Self {
            cells: vec![CellState::Dead; size * size],
            size,
        }
    }

    /// Create a field by evaluating `f(row, col)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> CellState) -> Self {
        let mut result = Self::blank(size);
        for row in 0..size {
            for col in 0..size {
                result.set(row, col, f(row, col));
            }
        }
        result
    }

    /// The raw random draw: every cell is independently alive with probability `fill_rate`.
    ///
    /// `fill_rate` must lie in `[0, 1]`.
    pub fn random<R: Rng>(size: usize, fill_rate: f64, rng: &mut R) -> Self {
        Self::from_fn(size, |_, _| rng.gen_bool(fill_rate).into())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index_of(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        let idx = self.index_of(row, col);
        self.cells[idx] = state;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of live cells among the up to 8 in-bounds cells around `(row, col)`.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let last = self.size - 1;
        let mut count = 0;
        for r in row.saturating_sub(1)..=(row + 1).min(last) {
            for c in col.saturating_sub(1)..=(col + 1).min(last) {
                if (r, c) != (row, col) && self.get(r, c).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Write the next generation of `self` into `dst`.
    ///
    /// `self` is only read, so every neighbor count comes from the current generation.
    pub fn next_generation_into(&self, dst: &mut Self) {
        assert_eq!(self.size, dst.size);
        for row in 0..self.size {
            for col in 0..self.size {
                let idx = self.index_of(row, col);
                dst.cells[idx] = rules::next_state(self.cells[idx], self.neighbor_count(row, col));
            }
        }
    }

    pub fn next_generation(&self) -> Self {
        let mut next = Self::blank(self.size);
        self.next_generation_into(&mut next);
        next
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) is outside of {}x{} field",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }
}

impl Index<(usize, usize)> for CellMatrix {
    type Output = CellState;

    fn index(&self, (row, col): (usize, usize)) -> &CellState {
        &self.cells[self.index_of(row, col)]
    }
}

/// One line per row, `#` for alive and `.` for dead.
impl fmt::Display for CellMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) format back; surrounding blank lines
/// and whitespace are ignored.
impl FromStr for CellMatrix {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let size = lines.len();
        if size == 0 {
            return Err(GridError::InvalidSize(0));
        }

        let mut result = Self::blank(size);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != size {
                return Err(GridError::MalformedPattern {
                    line: row + 1,
                    reason: format!("expected {} cells, found {}", size, line.chars().count()),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let state = match ch {
                    '#' | 'O' | '*' => CellState::Alive,
                    '.' => CellState::Dead,
                    other => {
                        return Err(GridError::MalformedPattern {
                            line: row + 1,
                            reason: format!("unexpected character {:?}", other),
                        })
                    }
                };
                result.set(row, col, state);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SEED: u64 = 42;

    fn parse(text: &str) -> CellMatrix {
        text.parse().unwrap()
    }

    #[test]
    fn test_neighbor_count_interior() {
        let m = parse(
            "
            ###
            #.#
            ###
            ",
        );
        assert_eq!(m.neighbor_count(1, 1), 8);
        assert_eq!(m.neighbor_count(0, 0), 2);
        assert_eq!(m.neighbor_count(0, 1), 4);
    }

    #[test]
    fn test_neighbor_count_does_not_wrap() {
        let m = parse(
            "
            ...#
            ....
            ....
            #..#
            ",
        );
        // on a torus (0, 0) would see all three other corners
        assert_eq!(m.neighbor_count(0, 0), 0);
        assert_eq!(m.neighbor_count(3, 3), 0);
        assert_eq!(m.neighbor_count(3, 2), 1);
    }

    #[test]
    fn test_neighbor_count_bounds() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
        let n = 16;
        for fill_rate in [0.3, 0.7, 1.0] {
            let m = CellMatrix::random(n, fill_rate, &mut rng);
            for row in 0..n {
                for col in 0..n {
                    let on_row_edge = row == 0 || row == n - 1;
                    let on_col_edge = col == 0 || col == n - 1;
                    let max = match (on_row_edge, on_col_edge) {
                        (true, true) => 3,
                        (true, false) | (false, true) => 5,
                        (false, false) => 8,
                    };
                    let count = m.neighbor_count(row, col);
                    assert!(count <= max, "({}, {}) has {} neighbors", row, col, count);
                }
            }
        }
        let full = CellMatrix::random(n, 1.0, &mut rng);
        assert_eq!(full.neighbor_count(0, 0), 3);
        assert_eq!(full.neighbor_count(0, 5), 5);
        assert_eq!(full.neighbor_count(5, 5), 8);
    }

    #[test]
    fn test_single_cell_field() {
        let m = CellMatrix::from_fn(1, |_, _| CellState::Alive);
        assert_eq!(m.neighbor_count(0, 0), 0);
        assert_eq!(m.next_generation().population(), 0);
    }

    #[test]
    fn test_display_and_parse() {
        let text = "#..\n.#.\n..#\n";
        let m = parse(text);
        assert_eq!(m.size(), 3);
        assert_eq!(m.population(), 3);
        assert_eq!(m[(1, 1)], CellState::Alive);
        assert_eq!(m.to_string(), text);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "##\n#\n".parse::<CellMatrix>(),
            Err(GridError::MalformedPattern { line: 2, .. })
        ));
        assert!(matches!(
            "#x\n..\n".parse::<CellMatrix>(),
            Err(GridError::MalformedPattern { line: 1, .. })
        ));
        assert!(matches!(
            "\n  \n".parse::<CellMatrix>(),
            Err(GridError::InvalidSize(0))
        ));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        CellMatrix::blank(4).get(4, 0);
    }
}
