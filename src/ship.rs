//! Ship placements parsed from `"r:c,r:c"` strings.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Grid;
use crate::common::RoundError;
use crate::config::{RoundConfig, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH, SHIP_DELIMITER};
use crate::coordinate::{split_axes, to_axis, Coordinate};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Start and end share a row.
    Horizontal,
    /// Start and end share a column.
    Vertical,
}

/// A straight run of cells from `start` to `end`, inclusive.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipPlacement {
    start: Coordinate,
    end: Coordinate,
    orientation: Orientation,
    cells: Vec<Coordinate>,
    #[cfg_attr(feature = "std", serde(skip))]
    mask: Grid,
}

// A ship always holds its start cell, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl ShipPlacement {
    /// Parse one ship string, checking format, bounds, orientation and length.
    /// Overlap with other ships is checked by [`parse_ships`].
    pub fn parse(input: &str, config: &RoundConfig) -> Result<Self, RoundError> {
        let mut tokens = input.split(SHIP_DELIMITER);
        let (start, end) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => {
                return Err(RoundError::MalformedCoordinate {
                    input: input.into(),
                })
            }
        };

        // Both tokens are parsed before any bounds check.
        let (start_row, start_col) = split_axes(start, input)?;
        let (end_row, end_col) = split_axes(end, input)?;

        let on_board = |row: i64, col: i64| {
            to_axis(row)
                .zip(to_axis(col))
                .and_then(|(row, col)| Coordinate::new(row, col))
        };
        let (start, end) = match (on_board(start_row, start_col), on_board(end_row, end_col)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(RoundError::OutOfBounds {
                    input: input.into(),
                })
            }
        };

        let orientation = if start.row() == end.row() {
            Orientation::Horizontal
        } else if start.col() == end.col() {
            Orientation::Vertical
        } else {
            return Err(RoundError::InvalidOrientation {
                input: input.into(),
            });
        };

        let cells = trace_cells(start, end, orientation, input)?;
        if cells.len() < MIN_SHIP_LENGTH && !config.allow_single_cell_ships {
            return Err(RoundError::TooShort {
                input: input.into(),
            });
        }
        let mask = Grid::from_coordinates(cells.iter().copied());

        Ok(ShipPlacement {
            start,
            end,
            orientation,
            cells,
            mask,
        })
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells in order from start to end.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.mask.contains(coord)
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Grid {
        self.mask
    }

    /// `true` when every cell of the ship is in `guesses`.
    pub fn is_sunk_by(&self, guesses: &Grid) -> bool {
        self.mask.is_subset_of(guesses)
    }

    /// The ship in the `"r:c,r:c"` form it is parsed from.
    pub fn to_input_string(&self) -> String {
        alloc::format!("{}{}{}", self.start, SHIP_DELIMITER, self.end)
    }
}

/// Walk from `start` to `end` one cell at a time along the varying axis.
fn trace_cells(
    start: Coordinate,
    end: Coordinate,
    orientation: Orientation,
    input: &str,
) -> Result<Vec<Coordinate>, RoundError> {
    let too_long = || RoundError::TooLong {
        input: input.into(),
    };

    let (from, to) = match orientation {
        Orientation::Horizontal => (start.col(), end.col()),
        Orientation::Vertical => (start.row(), end.row()),
    };
    let mut cells = Vec::with_capacity(MAX_SHIP_LENGTH);
    cells.push(start);
    let mut step = from;
    while step != to {
        step = if to > from { step + 1 } else { step - 1 };
        let cell = match orientation {
            Orientation::Horizontal => Coordinate::new(start.row(), step),
            Orientation::Vertical => Coordinate::new(step, start.col()),
        };
        // Every step lies between two on-board values.
        cells.extend(cell);
        if cells.len() > MAX_SHIP_LENGTH {
            return Err(too_long());
        }
    }
    Ok(cells)
}

/// Parse every ship in order, failing on the first invalid or overlapping one.
pub fn parse_ships<S: AsRef<str>>(
    ships: &[S],
    config: &RoundConfig,
) -> Result<Vec<ShipPlacement>, RoundError> {
    let mut placed: Vec<ShipPlacement> = Vec::with_capacity(ships.len());
    let mut occupied = Grid::new();

    for input in ships {
        let input = input.as_ref();
        let ship = ShipPlacement::parse(input, config)?;
        if ship.mask.intersects(&occupied) {
            let other = placed
                .iter()
                .find(|prior| prior.mask.intersects(&ship.mask))
                .map(|prior| alloc::format!("{}", prior))
                .unwrap_or_default();
            return Err(RoundError::Overlap {
                input: input.into(),
                other,
            });
        }
        log::debug!(
            "ship {} -> {:?}, {} cell(s)",
            input,
            ship.orientation,
            ship.len()
        );
        occupied |= ship.mask;
        placed.push(ship);
    }
    Ok(placed)
}

/// Report form used in the round summary: `"r,c:r,c"`.
impl fmt::Display for ShipPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}:{},{}",
            self.start.row(),
            self.start.col(),
            self.end.row(),
            self.end.col()
        )
    }
}

impl fmt::Debug for ShipPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShipPlacement {{ start: {}, end: {}, orientation: {:?}, cells: {} }}",
            self.start,
            self.end,
            self.orientation,
            self.cells.len(),
        )
    }
}
