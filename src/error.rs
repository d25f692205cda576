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

//! Errors raised by the collaborators around move generation.
//!
//! Move generation itself never fails: it trusts that the board and the
//! lookup tables are well-formed. Everything that builds those inputs reports
//! problems through the types here instead.

use thiserror::Error;

use super::Square;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A reason why a FEN string could not be loaded into a `Board`.
pub enum FenError {
    /// The string ended before a required field.
    #[error("FEN ended while parsing {0}")]
    UnexpectedEnd(&'static str),
    /// A character in the piece placement field was not understood.
    #[error("unexpected character '{0}' in piece placement")]
    BadPlacement(char),
    /// A rank in the piece placement field did not hold exactly eight squares.
    #[error("rank {0} does not describe exactly eight squares")]
    BadRankLength(usize),
    /// The side-to-move field was neither `w` nor `b`.
    #[error("unrecognized player to move '{0}'")]
    BadPlayer(String),
    /// The castling field contained an unknown character.
    #[error("unrecognized castle rights character '{0}'")]
    BadCastleRights(char),
    /// A square name could not be parsed.
    #[error("invalid square name '{0}'")]
    BadSquare(String),
    /// The en passant square is not on the rank behind a double push.
    #[error("{0} cannot be an en passant square")]
    BadEnPassant(Square),
    /// The position breaks a board invariant, such as having two kings.
    #[error("board state after loading was illegal")]
    InvalidBoard,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A reason why magic lookup tables could not be built.
pub enum TableError {
    /// No collision-free multiplier was found within the configured number of
    /// tries.
    #[error("failed to find {family} magic for square {square} after {tries} tries")]
    MagicNotFound {
        /// Either "rook" or "bishop".
        family: &'static str,
        /// The square whose table could not be built.
        square: Square,
        /// The number of candidate multipliers tested.
        tries: u64,
    },
    /// A supplied multiplier maps two occupancies with different attacks onto
    /// the same table slot.
    #[error("{family} magic for square {square} has a hash collision")]
    Collision {
        /// Either "rook" or "bishop".
        family: &'static str,
        /// The square whose multiplier collided.
        square: Square,
    },
}
