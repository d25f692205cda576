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

//! Generation of pseudo-legal moves in a position.
//!
//! A pseudo-legal move follows the movement rules of its piece but may leave
//! the mover's own king in check. The only exceptions are king moves and
//! castles, which never step into, out of, or through an attacked square.
//! Callers which need fully legal moves can filter with `is_legal_after`, or
//! use `get_legal_moves` directly.
//!
//! Every function here only reads the board and the lookup tables, so
//! generation may run on many threads at once, even against the same board.

mod attacks;
mod king;
mod pawns;
mod pieces;

#[cfg(test)]
mod tests;

pub use attacks::{
    any_square_attacked_by, is_in_check, is_square_attacked_by, is_square_attacked_with_occupancy,
};
pub use king::king_moves;
pub use pawns::{pawn_captures, pawn_pushes};
pub use pieces::{bishop_moves, knight_moves, queen_moves, rook_moves};

use super::{AttacksTable, Bitboard, Board, Move, Piece, Square};

/// In nearly every position, there are fewer than this many pseudo-legal moves.
const MOVES_CAPACITY: usize = 45;

#[must_use]
/// Get every pseudo-legal move in a position.
///
/// The moves are generated for each piece type in turn: pawn pushes, pawn
/// captures, knights, the king (castles first), rooks, bishops, and queens.
/// Generation is deterministic, but callers should not rely on this order
/// being kept between versions.
///
/// # Examples
///
/// ```
/// use quiver::{movegen::get_moves, Board, MAGIC};
///
/// assert_eq!(get_moves(&Board::new(), &MAGIC).len(), 20);
/// ```
pub fn get_moves(b: &Board, table: &AttacksTable) -> Vec<Move> {
    let mut moves = Vec::with_capacity(MOVES_CAPACITY);
    pawn_pushes(b, &mut moves);
    pawn_captures(b, &mut moves);
    knight_moves(b, table, &mut moves);
    king_moves(b, table, &mut moves);
    rook_moves(b, table, &mut moves);
    bishop_moves(b, table, &mut moves);
    queen_moves(b, table, &mut moves);

    moves
}

#[must_use]
/// Get every legal move in a position: the pseudo-legal moves which do not
/// leave the mover's king attacked.
pub fn get_legal_moves(b: &Board, table: &AttacksTable) -> Vec<Move> {
    let mut moves = get_moves(b, table);
    moves.retain(|&m| is_legal_after(b, table, m));

    moves
}

#[must_use]
/// Determine whether playing a pseudo-legal move `m` on `b` leaves the mover's
/// king safe.
///
/// # Examples
///
/// ```
/// use quiver::{movegen::is_legal_after, Board, Move, Square, MAGIC};
///
/// // the bishop on e2 is pinned against the king by the rook on e7
/// let b = Board::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
/// assert!(!is_legal_after(&b, &MAGIC, Move::normal(Square::E2, Square::D3)));
/// assert!(is_legal_after(&b, &MAGIC, Move::normal(Square::E1, Square::D1)));
/// ```
pub fn is_legal_after(b: &Board, table: &AttacksTable, m: Move) -> bool {
    let mut after = *b;
    after.make_move(m);
    !is_in_check(&after, table, b.player)
}

#[inline(always)]
/// Add one normal move from `from_sq` to each square in `targets`.
fn append_targets(moves: &mut Vec<Move>, from_sq: Square, targets: Bitboard) {
    for to_sq in targets {
        moves.push(Move::normal(from_sq, to_sq));
    }
}

#[inline(always)]
/// Add a pawn move, fanning it out into one move per promotion type if it
/// lands on `promote_rank`.
fn append_pawn_move(moves: &mut Vec<Move>, from_sq: Square, to_sq: Square, promote_rank: Bitboard) {
    let m = Move::normal(from_sq, to_sq);
    if promote_rank.contains(to_sq) {
        for pt in Piece::PROMOTE_TYPES {
            moves.push(m.with_promote(pt));
        }
    } else {
        moves.push(m);
    }
}
