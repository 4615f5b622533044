//! Minesweeper Board Engine
//!
//! This library implements the full rules of a single minesweeper board:
//! lazy bomb placement on the first uncover (so the first click is never a
//! bomb), flood-fill reveal propagation, the flag/question-mark cycle and
//! win/loss detection. It renders nothing and reads no input; every action
//! returns a diff of the cells it changed for a rendering collaborator to
//! consume, and an external scheduler drives the clock through
//! [`MineField::tick`].
//!
//! ## Usage
//!
//! ```rust
//! use minefield::{Difficulty, MineField, Outcome, Pos};
//!
//! # fn main() -> Result<(), minefield::ParamsError> {
//! let mut field = MineField::new(Difficulty::Beginner.params())?;
//!
//! // Markers can be placed before the first uncover.
//! let flag = field.flag_at(Pos { x: 0, y: 0 });
//! assert_eq!(flag.remaining_bombs, Some(9));
//!
//! // The first uncover plants the bombs and can never explode.
//! let result = field.uncover_at(Pos { x: 4, y: 4 });
//! match result.outcome {
//!     Outcome::Continue => println!("{} cells opened", result.updates.len()),
//!     Outcome::Won => println!("won already"),
//!     Outcome::Lost => unreachable!("the first uncover is never a bomb"),
//! }
//! # Ok(())
//! # }
//! ```

mod data;
mod error;
mod logic;
mod model;

pub use data::Phase;
pub use error::ParamsError;
pub use logic::MineField;

// Re-export the model types making up the public surface
pub use model::results::{BoardView, CellUpdate, FlagResult, Outcome, RevealResult};
pub use model::{CellView, Difficulty, GameParams, Pos};
