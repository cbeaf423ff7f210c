#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod coordinate;
mod guess;
#[cfg(feature = "std")]
mod logging;
mod round;
mod ship;

pub use bitboard::{BitBoard, Grid};
pub use common::RoundError;
pub use config::*;
pub use coordinate::Coordinate;
pub use guess::{validate_guesses, GuessSet};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use round::play;
pub use round::{sunk_ships, RoundEvaluator, RoundResult};
pub use ship::{parse_ships, Orientation, ShipPlacement};
