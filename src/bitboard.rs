//! A fixed-size cell set backed by a single unsigned integer.
//!
//! Ship footprints and guess sets are stored as `N×N` bitboards so that
//! overlap and "every cell guessed" checks are a single mask operation.

use core::ops::BitOrAssign;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// The 10×10 game board.
pub type Grid = BitBoard<u128, { BOARD_SIZE as usize }>;

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    // Evaluated on first use of `insert`/`contains`; fails the build for a
    // board that cannot hold every `Coordinate`.
    const HOLDS_COORDINATES: () = assert!(
        N >= BOARD_SIZE as usize && N * N <= mem::size_of::<T>() * 8,
        "bitboard too small for the game board"
    );

    /// Create an empty bitboard.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// `true` when every cell set here is also set in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        (self.bits & other.bits) == self.bits
    }

    /// `true` when the two boards share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Marks `coord` as occupied. Infallible since a `Coordinate` is always on the board.
    #[inline]
    pub fn insert(&mut self, coord: Coordinate) {
        let () = Self::HOLDS_COORDINATES;
        let (row, col) = coord.index();
        self.bits = self.bits | (T::one() << (row * N + col));
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        let () = Self::HOLDS_COORDINATES;
        let (row, col) = coord.index();
        self.bit(row * N + col)
    }

    /// Builds a board from coordinates; duplicates collapse.
    pub fn from_coordinates<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for coord in iter {
            board.insert(coord);
        }
        board
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    // Occupied cells as `(row, col)`, row-major.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BitBoard ")?;
        f.debug_list()
            .entries((0..N * N).filter(|idx| self.bit(*idx)).map(|idx| (idx / N, idx % N)))
            .finish()
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
