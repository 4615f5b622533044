use serde::{Deserialize, Serialize};

use super::{CellView, Pos};

/// Where the game stands after an action.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

/// A single cell whose appearance changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub pos: Pos,
    pub value: CellView,
}

/// Diff produced by an uncover action: every cell the reveal touched and the
/// phase the game is in afterwards. An empty `updates` usually means the
/// action was ignored; the exception is a first uncover aimed at a marked
/// cell, which starts the game without opening anything.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RevealResult {
    pub updates: Vec<CellUpdate>,
    pub outcome: Outcome,
}

/// Result of a marker toggle.
///
/// `remaining_bombs` is the bomb count minus the flags placed, or `None`
/// once more flags than bombs are on the board (the classic counter has
/// nothing sensible to show then).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlagResult {
    pub update: Option<CellUpdate>,
    pub remaining_bombs: Option<usize>,
    pub outcome: Outcome,
}

/// Full snapshot of the board for an initial render.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub width: usize,
    pub height: usize,
    pub bombs: usize,
    /// Rows from top to bottom, `cells[y][x]`.
    pub cells: Vec<Vec<CellView>>,
}

impl BoardView {
    pub fn cell(&self, pos: Pos) -> Option<&CellView> {
        self.cells.get(pos.y)?.get(pos.x)
    }
}
