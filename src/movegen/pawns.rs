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

//! Pawn pushes and captures.

use super::{append_pawn_move, Bitboard, Board, Move};

use crate::{Color, Direction};

/// Generate every pawn push, single and double, for the player to move.
/// Pushes onto the last rank are fanned out into the four promotions.
pub fn pawn_pushes(b: &Board, moves: &mut Vec<Move>) {
    let player = b.player;
    let promote_rank = player.pawn_promote_rank();
    let back = -player.pawn_direction();
    let (targets, double_targets) = pawn_push_bitboards(b);

    for to_sq in targets {
        append_pawn_move(moves, to_sq + back, to_sq, promote_rank);
    }
    // a double push can never reach the last rank
    for to_sq in double_targets {
        moves.push(Move::normal(to_sq + back + back, to_sq));
    }
}

/// Get the squares that pawns can push to by one square and by two squares.
fn pawn_push_bitboards(b: &Board) -> (Bitboard, Bitboard) {
    let free = !b.occupancy();
    let player = b.player;
    let pawns = b[player].pawns;
    let targets = match player {
        Color::White => (pawns << 8) & free,
        Color::Black => (pawns >> 8) & free,
    };
    let double_targets = match player {
        Color::White => targets << 8,
        Color::Black => targets >> 8,
    } & free
        & player.pawn_double_push_rank();

    (targets, double_targets)
}

/// Generate every pawn capture for the player to move, including en passant.
/// Captures onto the last rank are fanned out into the four promotions.
pub fn pawn_captures(b: &Board, moves: &mut Vec<Move>) {
    let player = b.player;
    let promote_rank = player.pawn_promote_rank();
    let (east, west) = pawn_capture_bitboards(b);
    // the step from a capture target back to the pawn that made it
    let (east_back, west_back) = match player {
        Color::White => (Direction::SOUTHWEST, Direction::SOUTHEAST),
        Color::Black => (Direction::NORTHWEST, Direction::NORTHEAST),
    };

    for to_sq in east {
        append_pawn_move(moves, to_sq + east_back, to_sq, promote_rank);
    }
    for to_sq in west {
        append_pawn_move(moves, to_sq + west_back, to_sq, promote_rank);
    }
}

/// Get the squares that pawns can capture on toward the H file and toward the
/// A file, respectively.
fn pawn_capture_bitboards(b: &Board) -> (Bitboard, Bitboard) {
    let player = b.player;
    let pawns = b[player].pawns;
    let mut targets = b[!player].all;
    if let Some(ep_sq) = b.en_passant_square {
        targets.insert(ep_sq);
    }

    // a capture landing on the far file wrapped around the edge of the board
    let (east, west) = match player {
        Color::White => (pawns << 9, pawns << 7),
        Color::Black => (pawns >> 7, pawns >> 9),
    };

    (
        east & Bitboard::NOT_A_FILE & targets,
        west & Bitboard::NOT_H_FILE & targets,
    )
}
