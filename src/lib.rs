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

//! Pseudo-legal move generation for chess positions stored as bitboards.
//!
//! The core of this crate is `movegen`, which enumerates every move each
//! piece can make under the rules of movement, and answers whether a square is
//! attacked. Sliding pieces are handled with magic bitboards, whose lookup
//! tables live in an `AttacksTable` that is built once and then shared by
//! reference.
//!
//! # Examples
//!
//! ```
//! use quiver::{movegen, AttacksTable, Board, MagicConfig};
//!
//! let table = AttacksTable::new(&MagicConfig::default()).unwrap();
//! let board = Board::new();
//! assert_eq!(movegen::get_moves(&board, &table).len(), 20);
//! ```

// Many module elements are re-exported to make names more ergonomic to access.

mod bitboard;
pub use bitboard::Bitboard;

mod board;
pub use board::{Board, Side};

mod castling;
pub use castling::CastleRights;

mod color;
pub use color::Color;

mod config;
pub use config::MagicConfig;

mod direction;
pub use direction::Direction;

mod error;
pub use error::{FenError, TableError};

mod magic;
pub use magic::{AttacksTable, SquareAttacks, MAGIC};

pub mod movegen;

mod moves;
pub use moves::Move;

pub mod perft;

mod piece;
pub use piece::Piece;

mod square;
pub use square::Square;
