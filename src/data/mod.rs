#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Questioned,
    Revealed,
}

/// Lifecycle of a single game on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub bomb: bool,
    pub adjacent: u8,
    pub state: CellState,
    pub exploded: bool,
}

impl Cell {
    pub fn make_bomb(&mut self) {
        self.bomb = true;
    }

    /// Counts one more bomb in the neighborhood. Bombs keep no count of
    /// their own.
    pub fn increment(&mut self) {
        if self.bomb {
            return;
        }
        self.adjacent += 1;
    }

    /// Cycles the marker: unmarked -> flagged -> questioned -> unmarked.
    /// Uncovered cells cannot be marked. Returns the state after the toggle.
    pub fn toggle_flag(&mut self) -> CellState {
        self.state = match self.state {
            CellState::Hidden => CellState::Flagged,
            CellState::Flagged => CellState::Questioned,
            CellState::Questioned => CellState::Hidden,
            CellState::Revealed => CellState::Revealed,
        };
        self.state
    }

    pub fn reveal(&mut self) {
        self.state = CellState::Revealed;
    }

    /// Marks the bomb that ended the game. Only bombs can explode.
    pub fn explode(&mut self) {
        if !self.bomb {
            return;
        }
        self.exploded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_cycle_returns_to_unmarked() {
        let mut cell = Cell::default();
        assert_eq!(cell.toggle_flag(), CellState::Flagged);
        assert_eq!(cell.toggle_flag(), CellState::Questioned);
        assert_eq!(cell.toggle_flag(), CellState::Hidden);
    }

    #[test]
    fn test_uncovered_cells_cannot_be_marked() {
        let mut cell = Cell::default();
        cell.reveal();
        assert_eq!(cell.toggle_flag(), CellState::Revealed);
        assert_eq!(cell.state, CellState::Revealed);
    }

    #[test]
    fn test_bombs_keep_no_adjacency_count() {
        let mut cell = Cell::default();
        cell.increment();
        assert_eq!(cell.adjacent, 1);

        cell.make_bomb();
        cell.increment();
        assert_eq!(cell.adjacent, 1);
    }

    #[test]
    fn test_only_bombs_explode() {
        let mut cell = Cell::default();
        cell.explode();
        assert!(!cell.exploded);

        cell.make_bomb();
        cell.explode();
        assert!(cell.exploded);
    }

    #[test]
    fn test_phase_is_over_only_in_terminal_states() {
        assert!(!Phase::NotStarted.is_over());
        assert!(!Phase::InProgress.is_over());
        assert!(Phase::Won.is_over());
        assert!(Phase::Lost.is_over());
    }
}
