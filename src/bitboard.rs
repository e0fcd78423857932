//! A fixed-size rectangular bitboard using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as a `W×H` grid (`W` columns, `H` rows) packed row-major into
//! an unsigned integer `T`, so bit `row * W + col` holds cell `(row, col)`.
//! `W * H` must not exceed the bit width of `T`.

use core::ops::BitOr;
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::BitBoardError;

/// A fixed-size `W×H` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const W: usize, const H: usize> BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`W * H`).
    const BOARD_BITS: usize = W * H;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared).
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell of the board is set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        Ok(self.bit_at(idx))
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Bit index of (row, col). Rows are checked against `H` and columns
    /// against `W`, each on its own.
    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= H || col >= W {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * W + col)
        }
    }

    #[inline]
    fn bit_at(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }
}

impl<T, const W: usize, const H: usize> Default for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize> fmt::Debug for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}x{}>:", any::type_name::<T>(), W, H)?;
        for r in 0..H {
            for c in 0..W {
                let bit = if self.bit_at(r * W + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const W: usize, const H: usize> BitOr for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}
