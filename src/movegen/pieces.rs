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

//! Knight and sliding piece moves.
//!
//! Sliding pieces use the magic lookup in `AttacksTable`, which yields every
//! square up to and including the first blocker in each direction. Masking out
//! the mover's own pieces turns that into the set of legal destinations.

use super::{append_targets, AttacksTable, Board, Move};

/// Generate every knight move for the player to move.
pub fn knight_moves(b: &Board, table: &AttacksTable, moves: &mut Vec<Move>) {
    let allies = b[b.player];
    for from_sq in allies.knights {
        append_targets(moves, from_sq, table.knight_moves(from_sq) & !allies.all);
    }
}

/// Generate every rook move for the player to move.
pub fn rook_moves(b: &Board, table: &AttacksTable, moves: &mut Vec<Move>) {
    let allies = b[b.player];
    let occupancy = b.occupancy();
    for from_sq in allies.rooks {
        append_targets(
            moves,
            from_sq,
            table.rook_attacks(occupancy, from_sq) & !allies.all,
        );
    }
}

/// Generate every bishop move for the player to move.
pub fn bishop_moves(b: &Board, table: &AttacksTable, moves: &mut Vec<Move>) {
    let allies = b[b.player];
    let occupancy = b.occupancy();
    for from_sq in allies.bishops {
        append_targets(
            moves,
            from_sq,
            table.bishop_attacks(occupancy, from_sq) & !allies.all,
        );
    }
}

/// Generate every queen move for the player to move.
pub fn queen_moves(b: &Board, table: &AttacksTable, moves: &mut Vec<Move>) {
    let allies = b[b.player];
    let occupancy = b.occupancy();
    for from_sq in allies.queens {
        let attacks =
            table.rook_attacks(occupancy, from_sq) | table.bishop_attacks(occupancy, from_sq);
        append_targets(moves, from_sq, attacks & !allies.all);
    }
}
