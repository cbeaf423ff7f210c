//! Errors reported while validating a round.

use alloc::string::String;
use core::fmt;
use core::num::ParseIntError;

use crate::config::{BOARD_SIZE, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH};

/// First violation found while evaluating a round. Every variant carries the
/// offending input string so callers can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// Wrong number of tokens when splitting a ship or guess.
    MalformedCoordinate { input: String },
    /// A row or column is negative or not below `BOARD_SIZE`.
    OutOfBounds { input: String },
    /// Ship start and end share neither row nor column.
    InvalidOrientation { input: String },
    /// Ship covers more than `MAX_SHIP_LENGTH` cells.
    TooLong { input: String },
    /// Ship covers fewer than `MIN_SHIP_LENGTH` cells (strict mode only).
    TooShort { input: String },
    /// Ship shares a cell with an earlier ship, given in `r,c:r,c` form.
    Overlap { input: String, other: String },
    /// Same guess string appears more than once.
    DuplicateGuess { input: String },
    /// A coordinate component is not an integer.
    ParseFailure { input: String, source: ParseIntError },
}

impl RoundError {
    /// The ship or guess string that triggered the error.
    pub fn input(&self) -> &str {
        match self {
            RoundError::MalformedCoordinate { input }
            | RoundError::OutOfBounds { input }
            | RoundError::InvalidOrientation { input }
            | RoundError::TooLong { input }
            | RoundError::TooShort { input }
            | RoundError::Overlap { input, .. }
            | RoundError::DuplicateGuess { input }
            | RoundError::ParseFailure { input, .. } => input,
        }
    }

    pub(crate) fn parse_failure(input: &str, source: ParseIntError) -> Self {
        RoundError::ParseFailure {
            input: input.into(),
            source,
        }
    }
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::MalformedCoordinate { input } => {
                write!(f, "Co-ordinates {} are invalid", input)
            }
            RoundError::OutOfBounds { input } => write!(
                f,
                "{} is out of bounds (axis values must be 0..{})",
                input, BOARD_SIZE
            ),
            RoundError::InvalidOrientation { input } => write!(
                f,
                "Ship co-ordinates {} are invalid as it is neither horizontal nor vertical",
                input
            ),
            RoundError::TooLong { input } => write!(
                f,
                "Ship co-ordinates {} are too long. The maximum length is {} units.",
                input, MAX_SHIP_LENGTH
            ),
            RoundError::TooShort { input } => write!(
                f,
                "Ship co-ordinates {} are too short. The minimum length is {} units.",
                input, MIN_SHIP_LENGTH
            ),
            RoundError::Overlap { input, other } => {
                write!(f, "Invalid data. Ships {} and {} are overlapping.", input, other)
            }
            RoundError::DuplicateGuess { input } => write!(f, "Duplicate guess found: {}", input),
            RoundError::ParseFailure { input, source } => {
                write!(f, "Could not parse {}: {}", input, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoundError::ParseFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}
