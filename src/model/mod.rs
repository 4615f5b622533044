use serde::{Deserialize, Serialize};

pub mod results;

/// Externally visible state of a single cell.
///
/// Bomb positions stay secret while a game runs: until the game is lost,
/// cells only ever render as hidden, marked or revealed-with-count. The
/// `Bomb`, `Exploded` and `WrongFlag` variants appear in the loss tableau
/// only.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "state")]
pub enum CellView {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "flagged")]
    Flagged,
    #[serde(rename = "questioned")]
    Questioned,
    #[serde(rename = "revealed")]
    Revealed { adjacent: u8 },
    #[serde(rename = "bomb")]
    Bomb,
    #[serde(rename = "exploded")]
    Exploded,
    #[serde(rename = "wrong")]
    WrongFlag,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameParams {
    pub width: usize,
    pub height: usize,
    pub bombs: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Difficulty::Beginner.params()
    }
}

/// The classic preset boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }

    pub fn params(&self) -> GameParams {
        match self {
            Self::Beginner => GameParams {
                width: 9,
                height: 9,
                bombs: 10,
            },
            Self::Intermediate => GameParams {
                width: 16,
                height: 16,
                bombs: 40,
            },
            Self::Expert => GameParams {
                width: 30,
                height: 16,
                bombs: 99,
            },
        }
    }
}

impl From<Difficulty> for GameParams {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_view_serializes_with_state_tags() {
        let json = serde_json::to_value(CellView::Revealed { adjacent: 3 }).unwrap();
        assert_eq!(json, json!({"state": "revealed", "adjacent": 3}));

        let json = serde_json::to_value(CellView::Hidden).unwrap();
        assert_eq!(json, json!({"state": "hidden"}));

        let json = serde_json::to_value(CellView::WrongFlag).unwrap();
        assert_eq!(json, json!({"state": "wrong"}));
    }

    #[test]
    fn test_game_params_default_is_the_beginner_board() {
        assert_eq!(
            GameParams::default(),
            GameParams {
                width: 9,
                height: 9,
                bombs: 10,
            }
        );
    }

    #[test]
    fn test_game_params_deserialize_fills_in_defaults() {
        let params: GameParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, GameParams::default());

        let params: GameParams = serde_json::from_str(r#"{"width": 4}"#).unwrap();
        assert_eq!(params.width, 4);
        assert_eq!(params.height, 9);
        assert_eq!(params.bombs, 10);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(
            Difficulty::Beginner.params(),
            GameParams {
                width: 9,
                height: 9,
                bombs: 10,
            }
        );
        assert_eq!(
            Difficulty::Intermediate.params(),
            GameParams {
                width: 16,
                height: 16,
                bombs: 40,
            }
        );
        assert_eq!(
            Difficulty::Expert.params(),
            GameParams {
                width: 30,
                height: 16,
                bombs: 99,
            }
        );
        assert_eq!(Difficulty::ALL.len(), 3);
        assert_eq!(Difficulty::Expert.name(), "Expert");
        assert_eq!(GameParams::from(Difficulty::Expert), Difficulty::Expert.params());
    }
}
