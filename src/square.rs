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

//! Squares, which are positions on a board.

use super::{Direction, FenError};

use std::{
    cmp::max,
    convert::TryFrom,
    fmt::{Display, Formatter},
    mem::transmute,
    ops::Add,
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
/// A square: one of 64 spots on a `Board` that a `Piece` can occupy.
///
/// Squares are numbered rank-major starting from A1, so a square's index is
/// `8 * rank + file`:
/// * 2 unused bits
/// * 3 bits for the rank
/// * 3 bits for the file
pub enum Square {
    A1 = 0,
    B1,
    C1,
    D1,
    E1,
    F1,
    G1,
    H1,
    A2,
    B2,
    C2,
    D2,
    E2,
    F2,
    G2,
    H2,
    A3,
    B3,
    C3,
    D3,
    E3,
    F3,
    G3,
    H3,
    A4,
    B4,
    C4,
    D4,
    E4,
    F4,
    G4,
    H4,
    A5,
    B5,
    C5,
    D5,
    E5,
    F5,
    G5,
    H5,
    A6,
    B6,
    C6,
    D6,
    E6,
    F6,
    G6,
    H6,
    A7,
    B7,
    C7,
    D7,
    E7,
    F7,
    G7,
    H7,
    A8,
    B8,
    C8,
    D8,
    E8,
    F8,
    G8,
    H8,
}

impl Square {
    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    /// Create a Square from the given rank and file. The ranks run from 0 to 7
    /// (instead of 1 through 8), and the files run from A to H.
    pub fn new(rank: usize, file: usize) -> Option<Square> {
        if rank >= 8 || file >= 8 {
            return None;
        }
        Square::try_from(((rank << 3) | file) as u8).ok()
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the rank (0 -> 1, ...) of this square.
    pub const fn rank(self) -> usize {
        (self as u8 >> 3u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the file (0 -> A, ...) of this square.
    pub const fn file(self) -> usize {
        (self as u8 & 7u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the Chebyshev distance to another square.
    pub fn chebyshev_to(self, rhs: Square) -> u8 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            clippy::cast_sign_loss
        )]
        {
            let rankdiff = ((rhs.rank() as i8) - (self.rank() as i8)).abs();
            let filediff = ((rhs.file() as i8) - (self.file() as i8)).abs();

            max(rankdiff, filediff) as u8
        }
    }

    /// Convert an algebraic string (such as 'e7') to a square.
    /// The file must be in lowercase.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `s` is not a legal algebraic
    /// square.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::Square;
    ///
    /// assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
    /// assert!(Square::from_algebraic("i9").is_err());
    /// ```
    pub fn from_algebraic(s: &str) -> Result<Square, FenError> {
        let bad_square = || FenError::BadSquare(s.to_string());
        let mut chars = s.chars();
        let (Some(file_chr), Some(rank_chr), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(bad_square());
        };
        let file = "abcdefgh".find(file_chr).ok_or_else(bad_square)?;
        let rank = rank_chr
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or_else(bad_square)?;
        Square::new(rank as usize - 1, file).ok_or_else(bad_square)
    }

    #[must_use]
    /// Get the name of the file of this square. For instance, the square
    /// representing A1 will have the name "a".
    pub const fn file_name(self) -> &'static str {
        match self.file() {
            0 => "a",
            1 => "b",
            2 => "c",
            3 => "d",
            4 => "e",
            5 => "f",
            6 => "g",
            _ => "h",
        }
    }
}

impl Add<Direction> for Square {
    type Output = Square;
    #[inline(always)]
    #[allow(clippy::cast_sign_loss)]
    /// Offset a square. The result wraps modulo 64; callers that care about
    /// leaving the board must check the distance themselves.
    fn add(self, rhs: Direction) -> Self::Output {
        // SAFETY: masking with 63 keeps the value in range.
        unsafe { transmute(((self as i8) + rhs.0) as u8 & 63) }
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank() + 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = &'static str;
    #[inline(always)]
    fn try_from(x: u8) -> Result<Square, Self::Error> {
        match x {
            // SAFETY: `x` is at most the largest discriminant.
            x if x <= Square::H8 as u8 => Ok(unsafe { transmute::<u8, Square>(x) }),
            _ => Err("input for square conversion is out of bounds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_square_and_direction() {
        assert_eq!(Square::A1 + Direction::EAST, Square::B1);
        assert_eq!(Square::A1 + Direction::NORTHEAST, Square::B2);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
        assert_eq!(Square::from_algebraic("f7"), Ok(Square::F7));
        assert_eq!(Square::from_algebraic("h8"), Ok(Square::H8));
        assert!(Square::from_algebraic("e").is_err());
        assert!(Square::from_algebraic("e0").is_err());
        assert!(Square::from_algebraic("e44").is_err());
    }

    #[test]
    fn rank_and_file() {
        assert_eq!(Square::E4.rank(), 3);
        assert_eq!(Square::E4.file(), 4);
        assert_eq!(Square::new(7, 7), Some(Square::H8));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn display_is_lowercase_algebraic() {
        assert_eq!(Square::G7.to_string(), "g7");
    }
}
