use derive_more::{Display, Error};

/// Rejected board configuration.
///
/// Returned by construction and restart; the board is never created (or, on
/// restart, left untouched) when one of these comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParamsError {
    #[display("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// With every cell a bomb there is no safe first click and bomb
    /// placement could never terminate.
    #[display("{bombs} bombs do not fit a {width}x{height} board")]
    TooManyBombs {
        width: usize,
        height: usize,
        bombs: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_error_messages() {
        let err = ParamsError::InvalidDimensions {
            width: 0,
            height: 9,
        };
        assert_eq!(err.to_string(), "board dimensions must be positive, got 0x9");

        let err = ParamsError::TooManyBombs {
            width: 3,
            height: 3,
            bombs: 9,
        };
        assert_eq!(err.to_string(), "9 bombs do not fit a 3x3 board");
    }
}
