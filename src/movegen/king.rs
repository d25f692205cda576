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

//! King moves, including castling.

use super::{
    any_square_attacked_by, is_square_attacked_with_occupancy, AttacksTable, Bitboard, Board, Move,
};

use crate::{Color, Square};

/// Generate every king move for the player to move: castles first, then
/// single steps. The king never steps onto an attacked square.
///
/// Requires that the player to move has exactly one king.
pub fn king_moves(b: &Board, table: &AttacksTable, moves: &mut Vec<Move>) {
    let player = b.player;
    let allies = b[player];
    let Some(king_sq) = allies.king_square() else {
        return;
    };

    castles(b, table, moves);

    // Probe attacks as if the king were already gone. Otherwise a slider whose
    // ray ends on the king would not be seen attacking the square behind it.
    let occupancy = b.occupancy() ^ Bitboard::from(king_sq);
    for to_sq in table.king_moves(king_sq) & !allies.all {
        if !is_square_attacked_with_occupancy(b, table, to_sq, !player, occupancy) {
            moves.push(Move::normal(king_sq, to_sq));
        }
    }
}

/// The squares involved in castling to one side of the board.
struct CastlePath {
    /// The squares between the king and the rook, which must be empty.
    between: Bitboard,
    /// The king's start, transit, and landing squares, none of which may be
    /// attacked.
    king_path: [Square; 3],
}

/// Get the kingside and queenside castling paths of `color`.
const fn castle_paths(color: Color) -> (CastlePath, CastlePath) {
    match color {
        Color::White => (
            CastlePath {
                between: Bitboard::new(0x0000_0000_0000_0060),
                king_path: [Square::E1, Square::F1, Square::G1],
            },
            CastlePath {
                between: Bitboard::new(0x0000_0000_0000_000E),
                king_path: [Square::E1, Square::D1, Square::C1],
            },
        ),
        Color::Black => (
            CastlePath {
                between: Bitboard::new(0x6000_0000_0000_0000),
                king_path: [Square::E8, Square::F8, Square::G8],
            },
            CastlePath {
                between: Bitboard::new(0x0E00_0000_0000_0000),
                king_path: [Square::E8, Square::D8, Square::C8],
            },
        ),
    }
}

/// Generate the castling moves for the player to move. A castle is encoded
/// as the king moving two squares toward the rook.
fn castles(b: &Board, table: &AttacksTable, moves: &mut Vec<Move>) {
    let player = b.player;
    let occupancy = b.occupancy();
    let (kingside, queenside) = castle_paths(player);

    for (has_right, path) in [
        (b.castle_rights.kingside(player), kingside),
        (b.castle_rights.queenside(player), queenside),
    ] {
        if has_right
            && (occupancy & path.between).is_empty()
            && !any_square_attacked_by(b, table, &path.king_path, !player)
        {
            let [home_sq, _, to_sq] = path.king_path;
            moves.push(Move::normal(home_sq, to_sq));
        }
    }
}
