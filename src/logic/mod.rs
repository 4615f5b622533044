use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, instrument, warn};

use crate::{
    data::{Cell, CellState, Phase},
    error::ParamsError,
    model::{
        CellView, GameParams, Pos,
        results::{BoardView, CellUpdate, FlagResult, Outcome, RevealResult},
    },
};

fn validate_params(params: &GameParams) -> Result<(), ParamsError> {
    if params.width == 0 || params.height == 0 {
        return Err(ParamsError::InvalidDimensions {
            width: params.width,
            height: params.height,
        });
    }

    if params.bombs >= params.width * params.height {
        return Err(ParamsError::TooManyBombs {
            width: params.width,
            height: params.height,
            bombs: params.bombs,
        });
    }

    Ok(())
}

fn neighbor_indices(index: usize, width: usize, height: usize) -> Vec<usize> {
    let x = index % width;
    let y = index / width;
    let mut neighbors = Vec::with_capacity(8);

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let new_x = x as i32 + dx;
            let new_y = y as i32 + dy;

            if new_x >= 0 && new_x < width as i32 && new_y >= 0 && new_y < height as i32 {
                neighbors.push(new_x as usize + new_y as usize * width);
            }
        }
    }

    neighbors
}

/// Minesweeper board engine.
///
/// Owns the grid and drives the whole game: lazy bomb placement on the first
/// uncover, flood-fill reveal propagation, the marker cycle and win/loss
/// detection. It renders nothing and reads no input; every action reports
/// the cells it changed as data for a rendering collaborator, and an
/// external scheduler advances the clock through [`MineField::tick`]. Each
/// action runs to completion before the next one can start, the `&mut self`
/// receivers make interleaving unrepresentable.
#[derive(Debug)]
pub struct MineField {
    width: usize,
    height: usize,
    bombs: usize,
    cells: Vec<Cell>,
    phase: Phase,
    uncovered: usize,
    flagged: usize,
    ticks: u32,
    rng: StdRng,
}

impl MineField {
    /// Validates the configuration and allocates a fully covered board.
    ///
    /// No bombs are placed yet; they are planted by the first uncover so
    /// that the first click can never explode.
    #[instrument(level = "trace")]
    pub fn new(params: GameParams) -> Result<Self, ParamsError> {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Like [`MineField::new`] with a caller-supplied generator, so bomb
    /// placement is reproducible.
    pub fn with_rng(params: GameParams, rng: StdRng) -> Result<Self, ParamsError> {
        validate_params(&params)?;
        info!(
            "Creating new board: {}x{} with {} bombs",
            params.width, params.height, params.bombs
        );

        Ok(Self {
            width: params.width,
            height: params.height,
            bombs: params.bombs,
            cells: vec![Cell::default(); params.width * params.height],
            phase: Phase::NotStarted,
            uncovered: 0,
            flagged: 0,
            ticks: 0,
            rng,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bombs(&self) -> usize {
        self.bombs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn uncovered(&self) -> usize {
        self.uncovered
    }

    pub fn flagged(&self) -> usize {
        self.flagged
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.ticks
    }

    /// Bombs not yet accounted for by flags, or `None` once more flags than
    /// bombs are on the board.
    pub fn remaining_bombs(&self) -> Option<usize> {
        self.bombs.checked_sub(self.flagged)
    }

    /// Full snapshot for an initial render.
    pub fn board_view(&self) -> BoardView {
        BoardView {
            width: self.width,
            height: self.height,
            bombs: self.bombs,
            cells: (0..self.cells.len())
                .map(|index| self.view_cell(index))
                .collect::<Vec<CellView>>()
                .chunks(self.width)
                .map(|chunk| chunk.to_vec())
                .collect(),
        }
    }

    /// Uncovers the cell at `pos` and propagates through zero-count regions.
    ///
    /// The first uncover of a game plants the bombs with `pos` excluded, so
    /// it can never explode. Out-of-bounds coordinates, marked or already
    /// uncovered cells and finished games produce an empty diff. Uncovering
    /// a bomb loses the game and the diff carries the full loss tableau.
    #[instrument(level = "trace", skip(self), fields(x = pos.x, y = pos.y))]
    pub fn uncover_at(&mut self, pos: Pos) -> RevealResult {
        if !self.validate_pos(&pos) {
            warn!("Invalid uncover position: ({}, {})", pos.x, pos.y);
            return self.reveal_noop();
        }

        if self.phase.is_over() {
            debug!("Ignoring uncover on finished game at ({}, {})", pos.x, pos.y);
            return self.reveal_noop();
        }

        if self.phase == Phase::NotStarted {
            self.start(pos);
        }

        let index = pos.x + pos.y * self.width;
        if self.cells[index].state != CellState::Hidden {
            debug!("Ignoring uncover on marked or open cell ({}, {})", pos.x, pos.y);
            return self.reveal_noop();
        }

        self.cells[index].reveal();
        self.uncovered += 1;

        if self.cells[index].bomb {
            warn!("Uncovered a bomb at ({}, {}) - game over", pos.x, pos.y);
            self.cells[index].explode();
            self.phase = Phase::Lost;

            let mut updates = vec![CellUpdate {
                pos,
                value: self.view_cell(index),
            }];
            self.reveal_loss(&mut updates);
            info!("Game lost, {} cells exposed", updates.len());
            return RevealResult {
                updates,
                outcome: Outcome::Lost,
            };
        }

        let mut updates = vec![CellUpdate {
            pos,
            value: self.view_cell(index),
        }];
        if self.cells[index].adjacent == 0 {
            self.flood_uncover(index, &mut updates);
        }

        self.check_victory();
        if self.phase != Phase::Won {
            debug!("Uncovered {} cells, game continues", updates.len());
        }

        RevealResult {
            updates,
            outcome: self.outcome(),
        }
    }

    /// Cycles the marker at `pos`: none -> flag -> question mark -> none.
    ///
    /// Only transitions into and out of the flagged state move the flag
    /// counter; question marks count for nothing. Flagging the last covered
    /// cell can win the game. No-op on invalid coordinates, uncovered cells
    /// and finished games.
    #[instrument(level = "trace", skip(self), fields(x = pos.x, y = pos.y))]
    pub fn flag_at(&mut self, pos: Pos) -> FlagResult {
        if !self.validate_pos(&pos) {
            warn!("Invalid flag position: ({}, {})", pos.x, pos.y);
            return self.flag_noop();
        }

        if self.phase.is_over() {
            debug!("Ignoring flag action on finished game at ({}, {})", pos.x, pos.y);
            return self.flag_noop();
        }

        let index = pos.x + pos.y * self.width;
        let was_flagged = self.cells[index].state == CellState::Flagged;
        let state = self.cells[index].toggle_flag();

        if state == CellState::Revealed {
            debug!("Ignoring flag action on uncovered cell ({}, {})", pos.x, pos.y);
            return self.flag_noop();
        }

        if was_flagged {
            self.flagged -= 1;
        } else if state == CellState::Flagged {
            self.flagged += 1;
        }
        debug!(
            "Cell ({}, {}) marker now {:?}, {} flags placed",
            pos.x, pos.y, state, self.flagged
        );

        self.check_victory();
        FlagResult {
            update: Some(CellUpdate {
                pos,
                value: self.view_cell(index),
            }),
            remaining_bombs: self.remaining_bombs(),
            outcome: self.outcome(),
        }
    }

    /// Discards the current game and builds a fresh covered board, keeping
    /// the dimensions unless new parameters are given.
    ///
    /// A game in progress is forcibly ended, which also stops the clock.
    /// Rejected parameters leave the old board untouched and playable.
    #[instrument(level = "trace", skip(self))]
    pub fn restart(&mut self, params: Option<GameParams>) -> Result<BoardView, ParamsError> {
        let params = params.unwrap_or(GameParams {
            width: self.width,
            height: self.height,
            bombs: self.bombs,
        });
        validate_params(&params)?;

        if self.phase == Phase::InProgress {
            info!("Force-ending game in progress after {} seconds", self.ticks);
        }
        info!(
            "Restarting board: {}x{} with {} bombs",
            params.width, params.height, params.bombs
        );

        self.width = params.width;
        self.height = params.height;
        self.bombs = params.bombs;
        self.cells = vec![Cell::default(); params.width * params.height];
        self.phase = Phase::NotStarted;
        self.uncovered = 0;
        self.flagged = 0;
        self.ticks = 0;

        Ok(self.board_view())
    }

    /// Advances the clock by one external scheduler tick and reports the
    /// elapsed seconds. The clock only runs while a game is in progress, so
    /// it freezes on win and loss and resets on restart.
    pub fn tick(&mut self) -> u32 {
        if self.phase == Phase::InProgress {
            self.ticks += 1;
        }
        self.ticks
    }

    /// Plants the configured number of bombs by rejection sampling, never
    /// on the first-clicked cell, and opens play.
    fn start(&mut self, safe: Pos) {
        let safe_index = safe.x + safe.y * self.width;
        let total = self.width * self.height;

        for _ in 0..self.bombs {
            let index = loop {
                let candidate = self.rng.random_range(0..total);
                if candidate != safe_index && !self.cells[candidate].bomb {
                    break candidate;
                }
            };

            self.cells[index].make_bomb();
            for neighbor in neighbor_indices(index, self.width, self.height) {
                self.cells[neighbor].increment();
            }
        }

        self.phase = Phase::InProgress;
        debug!(
            "Placed {} bombs, first uncover at ({}, {})",
            self.bombs, safe.x, safe.y
        );
    }

    fn flood_uncover(&mut self, from: usize, updates: &mut Vec<CellUpdate>) {
        let mut stack = vec![from];

        while let Some(index) = stack.pop() {
            for neighbor in neighbor_indices(index, self.width, self.height) {
                if self.cells[neighbor].state != CellState::Hidden {
                    continue;
                }

                self.cells[neighbor].reveal();
                self.uncovered += 1;
                updates.push(CellUpdate {
                    pos: self.pos_of(neighbor),
                    value: self.view_cell(neighbor),
                });

                // Zero-count neighbors keep the fill going, numbered cells
                // are the border of the region.
                if self.cells[neighbor].adjacent == 0 {
                    stack.push(neighbor);
                }
            }
        }
    }

    /// Builds the loss tableau: every unflagged bomb is opened (a question
    /// mark does not protect a bomb) and every flag on a safe cell is
    /// exposed as wrong. Correctly flagged bombs keep their flags.
    fn reveal_loss(&mut self, updates: &mut Vec<CellUpdate>) {
        for y in 0..self.height {
            for x in 0..self.width {
                let index = x + y * self.width;
                let cell = &self.cells[index];

                let show = if cell.bomb {
                    !cell.exploded && cell.state != CellState::Flagged
                } else {
                    cell.state == CellState::Flagged
                };
                if !show {
                    continue;
                }

                if self.cells[index].bomb {
                    self.cells[index].reveal();
                }
                updates.push(CellUpdate {
                    pos: Pos { x, y },
                    value: self.view_cell(index),
                });
            }
        }
    }

    /// The permissive classic rule: won once every cell is either uncovered
    /// or flagged, with no more flags than bombs. Flag placement is not
    /// checked beyond the count.
    fn check_victory(&mut self) {
        if self.phase == Phase::InProgress
            && self.flagged <= self.bombs
            && self.uncovered + self.flagged == self.width * self.height
        {
            info!(
                "Game won, {} cells uncovered and {} flagged",
                self.uncovered, self.flagged
            );
            self.phase = Phase::Won;
        }
    }

    fn view_cell(&self, index: usize) -> CellView {
        let cell = &self.cells[index];
        match cell.state {
            CellState::Hidden => CellView::Hidden,
            CellState::Flagged if self.phase == Phase::Lost && !cell.bomb => CellView::WrongFlag,
            CellState::Flagged => CellView::Flagged,
            CellState::Questioned => CellView::Questioned,
            CellState::Revealed if cell.exploded => CellView::Exploded,
            CellState::Revealed if cell.bomb => CellView::Bomb,
            CellState::Revealed => CellView::Revealed {
                adjacent: cell.adjacent,
            },
        }
    }

    fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost,
            Phase::NotStarted | Phase::InProgress => Outcome::Continue,
        }
    }

    fn reveal_noop(&self) -> RevealResult {
        RevealResult {
            updates: Vec::new(),
            outcome: self.outcome(),
        }
    }

    fn flag_noop(&self) -> FlagResult {
        FlagResult {
            update: None,
            remaining_bombs: self.remaining_bombs(),
            outcome: self.outcome(),
        }
    }

    fn pos_of(&self, index: usize) -> Pos {
        Pos {
            x: index % self.width,
            y: index / self.width,
        }
    }

    fn validate_pos(&self, pos: &Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }
}
