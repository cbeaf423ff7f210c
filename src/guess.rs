//! Guess list validation.

use alloc::vec::Vec;

use crate::bitboard::Grid;
use crate::common::RoundError;
use crate::coordinate::Coordinate;

/// Validated guesses in input order, plus their set on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessSet {
    guesses: Vec<Coordinate>,
    board: Grid,
}

impl GuessSet {
    /// Validate every guess in order: duplicate text first, then format, then bounds.
    pub fn parse<S: AsRef<str>>(guesses: &[S]) -> Result<Self, RoundError> {
        let texts: Vec<&str> = guesses.iter().map(|g| g.as_ref()).collect();
        let mut parsed = Vec::with_capacity(texts.len());
        for &guess in &texts {
            let occurrences = texts.iter().filter(|&&g| g == guess).count();
            if occurrences > 1 {
                return Err(RoundError::DuplicateGuess {
                    input: guess.into(),
                });
            }
            let coord = Coordinate::parse_token(guess, guess)?;
            log::trace!("guess {} -> {}", guess, coord);
            parsed.push(coord);
        }
        let board = Grid::from_coordinates(parsed.iter().copied());
        Ok(GuessSet {
            guesses: parsed,
            board,
        })
    }

    /// Guesses in input order.
    pub fn guesses(&self) -> &[Coordinate] {
        &self.guesses
    }

    /// Guessed cells as a board; differently spelled guesses of one cell collapse.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.board.contains(coord)
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

/// Gate form of [`GuessSet::parse`] for callers that only need the verdict.
pub fn validate_guesses<S: AsRef<str>>(guesses: &[S]) -> Result<(), RoundError> {
    GuessSet::parse(guesses).map(|_| ())
}
