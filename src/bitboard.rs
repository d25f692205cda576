/*
  Quiver, a pseudo-legal chess move generator.
  Copyright (C) 2022 The Quiver Authors (see AUTHORS.md file)

  Quiver is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Quiver is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Bitboards, data structures used to efficiently represent sets of squares.

use super::Square;

use std::{
    fmt::{Display, Formatter, Result},
    iter::Iterator,
    mem::transmute,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not, Shl, Shr},
};

/// A bitboard, which uses an integer to express a set of `Square`s.
/// Bit `i` of the inner integer is set exactly when square `i` is an element,
/// so the least significant bit is A1 and the most significant is H8.
///
/// Set intersection, union, and difference are all single integer operations,
/// which is what makes move generation over bitboards fast.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A bitboard representing the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Bitboard, Square};
    ///
    /// assert!(!Bitboard::EMPTY.contains(Square::E4));
    /// ```
    pub const EMPTY: Bitboard = Bitboard::new(0);

    /// A bitboard containing all 64 squares on the board.
    pub const ALL: Bitboard = Bitboard::new(!0);

    /// The squares on the A file.
    pub const A_FILE: Bitboard = Bitboard::new(0x0101_0101_0101_0101);

    /// The squares on the H file.
    pub const H_FILE: Bitboard = Bitboard::new(0x8080_8080_8080_8080);

    /// Every square except those on the A file.
    pub const NOT_A_FILE: Bitboard = Bitboard::new(!Bitboard::A_FILE.0);

    /// Every square except those on the H file.
    pub const NOT_H_FILE: Bitboard = Bitboard::new(!Bitboard::H_FILE.0);

    /// The first rank, where White's pieces start.
    pub const RANK_1: Bitboard = Bitboard::new(0x0000_0000_0000_00FF);

    /// The fourth rank, where a white pawn lands after a double push.
    pub const RANK_4: Bitboard = Bitboard::new(0x0000_0000_FF00_0000);

    /// The fifth rank, where a black pawn lands after a double push.
    pub const RANK_5: Bitboard = Bitboard::new(0x0000_00FF_0000_0000);

    /// The eighth rank, where Black's pieces start.
    pub const RANK_8: Bitboard = Bitboard::new(0xFF00_0000_0000_0000);

    #[inline(always)]
    #[must_use]
    /// Construct a new Bitboard from a numeric literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// bb.insert(Square::A1);
    ///
    /// assert_eq!(bb, Bitboard::new(1));
    /// ```
    pub const fn new(x: u64) -> Bitboard {
        Bitboard(x)
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representation of this bitboard.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this bitboard contains a given square.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Bitboard, Square};
    ///
    /// assert!(Bitboard::new(1).contains(Square::A1));
    /// assert!(!(Bitboard::new(2).contains(Square::A1)));
    /// ```
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square as u8) != 0
    }

    #[inline(always)]
    /// Add a square to the set of squares contained in this `Bitboard`.
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq as u8;
    }

    #[inline(always)]
    /// Remove a square from the set of squares contained in this `Bitboard`.
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1 << sq as u8);
    }

    #[inline(always)]
    #[must_use]
    /// Get a copy of this bitboard with `sq` added to it.
    pub const fn with_square(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | 1 << sq as u8)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    /// Compute the number of squares contained in this `Bitboard`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY;
    /// assert_eq!(bb.len(), 0);
    /// bb.insert(Square::A1);
    /// assert_eq!(bb.len(), 1);
    /// ```
    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline(always)]
    #[must_use]
    /// Count the number of trailing zeros (i.e. empty squares between A1 and
    /// the first non-empty square) in this bitboard.
    pub const fn trailing_zeros(self) -> u32 {
        self.0.trailing_zeros()
    }

    #[must_use]
    #[inline(always)]
    /// Determine whether this bitboard is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    #[must_use]
    /// Get the lowest-indexed square in this bitboard, or `None` if it is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Bitboard, Square};
    ///
    /// let bb = Bitboard::EMPTY.with_square(Square::C3).with_square(Square::B7);
    /// assert_eq!(bb.lowest_square(), Some(Square::C3));
    /// assert_eq!(Bitboard::EMPTY.lowest_square(), None);
    /// ```
    pub fn lowest_square(self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the bitboard is nonempty, so the number of trailing zeros is
        // between 0 and 63.
        #[allow(clippy::cast_possible_truncation)]
        Some(unsafe { transmute::<u8, Square>(self.trailing_zeros() as u8) })
    }

    #[inline(always)]
    /// Remove the lowest-indexed square from this bitboard and return it.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Bitboard, Square};
    ///
    /// let mut bb = Bitboard::EMPTY.with_square(Square::H1).with_square(Square::A2);
    /// assert_eq!(bb.pop_lowest(), Some(Square::H1));
    /// assert_eq!(bb.pop_lowest(), Some(Square::A2));
    /// assert_eq!(bb.pop_lowest(), None);
    /// ```
    pub fn pop_lowest(&mut self) -> Option<Square> {
        let sq = self.lowest_square()?;
        // x & (x - 1) clears the lowest set bit
        self.0 &= self.0 - 1;
        Some(sq)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Shl<u8> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: u8) -> Self::Output {
        Bitboard(self.0 << rhs)
    }
}

impl Shr<u8> for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u8) -> Self::Output {
        Bitboard(self.0 >> rhs)
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl Mul for Bitboard {
    type Output = Self;

    #[inline(always)]
    /// Multiplication wraps, which is what magic hashing relies on.
    fn mul(self, rhs: Self) -> Self::Output {
        Bitboard(self.0.wrapping_mul(rhs.0))
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u8)
    }
}

impl From<Bitboard> for usize {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        {
            bb.0 as usize
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for row_idx in 0..8 {
            for col_idx in 0..8 {
                let bit = 1 << ((8 * (7 - row_idx)) + col_idx);
                if bit & self.0 == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "1 ")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[allow(clippy::copy_iterator)]
impl Iterator for Bitboard {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lowest()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}
