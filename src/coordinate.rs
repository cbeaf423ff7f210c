//! Board coordinates and their `"row:col"` text form.

use core::fmt;

use crate::common::RoundError;
use crate::config::{AXIS_DELIMITER, BOARD_SIZE};

/// A cell on the board. Both axes are always below `BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Returns `None` when either axis is off the board.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// `(row, col)` as board indices.
    pub fn index(&self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// Parse a `"row:col"` token. `input` is the full string reported in
    /// errors, which for ships is the whole `"start,end"` text.
    pub(crate) fn parse_token(token: &str, input: &str) -> Result<Self, RoundError> {
        let (row, col) = split_axes(token, input)?;
        let out_of_bounds = || RoundError::OutOfBounds {
            input: input.into(),
        };
        let row = to_axis(row).ok_or_else(out_of_bounds)?;
        let col = to_axis(col).ok_or_else(out_of_bounds)?;
        Coordinate::new(row, col).ok_or_else(out_of_bounds)
    }
}

/// Split a token into its two raw integer components without bounds checks.
pub(crate) fn split_axes(token: &str, input: &str) -> Result<(i64, i64), RoundError> {
    let mut parts = token.split(AXIS_DELIMITER);
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => {
            return Err(RoundError::MalformedCoordinate {
                input: input.into(),
            })
        }
    };
    let row = row
        .trim()
        .parse::<i64>()
        .map_err(|e| RoundError::parse_failure(input, e))?;
    let col = col
        .trim()
        .parse::<i64>()
        .map_err(|e| RoundError::parse_failure(input, e))?;
    Ok((row, col))
}

/// Narrow a raw axis value to the board, rejecting negatives as well.
pub(crate) fn to_axis(value: i64) -> Option<u8> {
    u8::try_from(value).ok().filter(|v| *v < BOARD_SIZE)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.row, AXIS_DELIMITER, self.col)
    }
}
