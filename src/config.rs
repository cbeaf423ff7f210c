/// Rows and columns on the board; valid axis values are `0..BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 10;
/// Longest ship, in cells.
pub const MAX_SHIP_LENGTH: usize = 4;
/// Shortest ship, in cells. Only enforced in strict mode.
pub const MIN_SHIP_LENGTH: usize = 2;

/// Separates the start and end coordinate of a ship: `"3:2,3:5"`.
pub const SHIP_DELIMITER: char = ',';
/// Separates row and column of a coordinate: `"3:2"`.
pub const AXIS_DELIMITER: char = ':';

/// Knobs for a single round evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Accept ships whose start and end are the same cell (`"5:5,5:5"`).
    pub allow_single_cell_ships: bool,
}

impl RoundConfig {
    /// Reject single-cell ships with `RoundError::TooShort`.
    pub const fn strict() -> Self {
        Self {
            allow_single_cell_ships: false,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            allow_single_cell_ships: true,
        }
    }
}
