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

//! Compact representation of moves.

use super::{Piece, Square};

use std::{
    fmt::{Display, Formatter},
    mem::transmute,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// The information of one move, containing its from- and to-squares, as well as
/// its promote type, in one integer.
/// From MSB to LSB:
/// * 1 unused bit
/// * 1 bit: whether the move is a promotion
/// * 2 bits: promote type
/// * 6 bits: to-square
/// * 6 bits: from-square
///
/// A `Move` carries no reference to the board it was generated on. Castling is
/// expressed as a plain two-square king move, and an en passant capture as a
/// plain diagonal pawn move.
pub struct Move(u16);

impl Move {
    /// The mask for the bits holding the from-square.
    const FROM_MASK: u16 = 0x003F;
    /// The mask for the bits holding the to-square.
    const TO_MASK: u16 = 0x0FC0;
    /// The mask for the promote type and the promotion flag together.
    const PROMOTE_MASK: u16 = 0x7000;
    /// The flag bit marking a move as a promotion.
    const PROMOTE_FLAG: u16 = 0x4000;

    #[inline(always)]
    #[must_use]
    /// Create a `Move` with no promotion type.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Move, Square};
    ///
    /// let m = Move::normal(Square::E2, Square::E4);
    /// assert_eq!(m.from_square(), Square::E2);
    /// assert_eq!(m.to_square(), Square::E4);
    /// assert_eq!(m.promote_type(), None);
    /// ```
    pub const fn normal(from_square: Square, to_square: Square) -> Move {
        Move(0).with_from(from_square).with_to(to_square)
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` with the given promotion type. The promote type must
    /// not be a pawn or a king.
    pub const fn promoting(from_square: Square, to_square: Square, promote_type: Piece) -> Move {
        Move::normal(from_square, to_square).with_promote(promote_type)
    }

    #[inline(always)]
    #[must_use]
    /// Get a copy of this move with its from-square replaced.
    pub const fn with_from(self, sq: Square) -> Move {
        Move(self.0 & !Move::FROM_MASK | sq as u16)
    }

    #[inline(always)]
    #[must_use]
    /// Get a copy of this move with its to-square replaced.
    pub const fn with_to(self, sq: Square) -> Move {
        Move(self.0 & !Move::TO_MASK | (sq as u16) << 6)
    }

    #[inline(always)]
    #[must_use]
    /// Get a copy of this move which promotes to `pt`. Only the four
    /// promotion types are meaningful here; nothing is validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Move, Piece, Square};
    ///
    /// let m = Move::default()
    ///     .with_from(Square::B7)
    ///     .with_to(Square::B8)
    ///     .with_promote(Piece::Queen);
    /// assert_eq!(m, Move::promoting(Square::B7, Square::B8, Piece::Queen));
    /// ```
    pub const fn with_promote(self, pt: Piece) -> Move {
        Move(self.0 & !Move::PROMOTE_MASK | ((pt as u16) & 3) << 12 | Move::PROMOTE_FLAG)
    }

    #[inline(always)]
    #[must_use]
    /// Get the square that a piece moves from to execute this move.
    pub fn from_square(self) -> Square {
        // SAFETY: the mask keeps the value below 64.
        unsafe { transmute((self.0 & Move::FROM_MASK) as u8) }
    }

    #[inline(always)]
    #[must_use]
    /// Get the target square of this move.
    pub fn to_square(self) -> Square {
        // SAFETY: the mask keeps the value below 64.
        unsafe { transmute(((self.0 & Move::TO_MASK) >> 6) as u8) }
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this move is marked as a promotion.
    pub const fn is_promotion(self) -> bool {
        self.0 & Move::PROMOTE_FLAG != 0
    }

    #[inline(always)]
    #[must_use]
    /// Get the promotion type of this move. The resulting type will never be a
    /// pawn or a king.
    pub const fn promote_type(self) -> Option<Piece> {
        if self.is_promotion() {
            Some(Piece::PROMOTE_TYPES[((self.0 >> 12) & 3) as usize])
        } else {
            None
        }
    }

    #[must_use]
    /// Construct a UCI string version of this move, such as `e7e8q`.
    pub fn to_uci(self) -> String {
        match self.promote_type() {
            None => format!("{}{}", self.from_square(), self.to_square()),
            Some(p) => format!(
                "{}{}{}",
                self.from_square(),
                self.to_square(),
                p.code().to_ascii_lowercase()
            ),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.promote_type() {
            None => write!(f, "{} -> {}", self.from_square(), self.to_square()),
            Some(p) => write!(f, "{} -> {} ={p}", self.from_square(), self.to_square()),
        }
    }
}
