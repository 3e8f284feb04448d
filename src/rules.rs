//! Conway's B3/S23 transition.

use crate::CellState;

/// Survival: a live cell stays alive with 2 or 3 live neighbors,
/// otherwise it dies of under- or overpopulation.
pub fn next_state_if_alive(live_neighbors: u8) -> CellState {
    matches!(live_neighbors, 2 | 3).into()
}

/// Birth: a dead cell becomes alive with exactly 3 live neighbors.
pub fn next_state_if_dead(live_neighbors: u8) -> CellState {
    (live_neighbors == 3).into()
}

pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match current {
        CellState::Alive => next_state_if_alive(live_neighbors),
        CellState::Dead => next_state_if_dead(live_neighbors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Alive, Dead};

    #[test]
    fn test_alive_cell_all_counts() {
        let expected = [Dead, Dead, Alive, Alive, Dead, Dead, Dead, Dead, Dead];
        for (n, &state) in expected.iter().enumerate() {
            assert_eq!(next_state_if_alive(n as u8), state, "n={}", n);
            assert_eq!(next_state(Alive, n as u8), state, "n={}", n);
        }
    }

    #[test]
    fn test_dead_cell_all_counts() {
        let expected = [Dead, Dead, Dead, Alive, Dead, Dead, Dead, Dead, Dead];
        for (n, &state) in expected.iter().enumerate() {
            assert_eq!(next_state_if_dead(n as u8), state, "n={}", n);
            assert_eq!(next_state(Dead, n as u8), state, "n={}", n);
        }
    }
}
