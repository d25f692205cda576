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

//! Detection of attacks on squares.

use super::{AttacksTable, Bitboard, Board, Square};

use crate::Color;

#[inline(always)]
#[must_use]
/// Determine whether `sq` is attacked by any piece of color `attacker`.
///
/// Only direct attacks count; whether the attacking piece could legally
/// capture on `sq` is not considered. In particular, a king counts as
/// attacking every square next to it.
///
/// # Examples
///
/// ```
/// use quiver::{movegen::is_square_attacked_by, Board, Color, Square, MAGIC};
///
/// let b = Board::new();
/// assert!(is_square_attacked_by(&b, &MAGIC, Square::F3, Color::White));
/// assert!(!is_square_attacked_by(&b, &MAGIC, Square::F4, Color::White));
/// ```
pub fn is_square_attacked_by(
    b: &Board,
    table: &AttacksTable,
    sq: Square,
    attacker: Color,
) -> bool {
    is_square_attacked_with_occupancy(b, table, sq, attacker, b.occupancy())
}

#[must_use]
/// Determine whether `sq` is attacked by `attacker` when sliding pieces see
/// `occupancy` instead of the board's real occupancy. This lets a caller ask
/// about a hypothetical board, such as one where a piece has been lifted off,
/// without modifying the board.
pub fn is_square_attacked_with_occupancy(
    b: &Board,
    table: &AttacksTable,
    sq: Square,
    attacker: Color,
    occupancy: Bitboard,
) -> bool {
    let enemies = &b[attacker];

    if !(table.knight_moves(sq) & enemies.knights).is_empty() {
        return true;
    }

    let diagonal_attackers = enemies.bishops | enemies.queens;
    if !(table.bishop_attacks(occupancy, sq) & diagonal_attackers).is_empty() {
        return true;
    }

    let orthogonal_attackers = enemies.rooks | enemies.queens;
    if !(table.rook_attacks(occupancy, sq) & orthogonal_attackers).is_empty() {
        return true;
    }

    // TODO: check that the attacking king could itself stand on `sq`.
    if !(table.king_moves(sq) & enemies.kings).is_empty() {
        return true;
    }

    !(pawn_attack_origins(sq, attacker) & enemies.pawns).is_empty()
}

#[must_use]
/// Determine whether any of `squares` is attacked by `attacker`. Stops at the
/// first attacked square.
pub fn any_square_attacked_by(
    b: &Board,
    table: &AttacksTable,
    squares: &[Square],
    attacker: Color,
) -> bool {
    squares
        .iter()
        .any(|&sq| is_square_attacked_by(b, table, sq, attacker))
}

#[must_use]
/// Determine whether the king of `color` is currently attacked. A side
/// without a king is never in check.
pub fn is_in_check(b: &Board, table: &AttacksTable, color: Color) -> bool {
    b[color]
        .king_square()
        .is_some_and(|king_sq| is_square_attacked_by(b, table, king_sq, !color))
}

#[inline(always)]
/// Get the squares from which a pawn of color `attacker` would attack `sq`.
/// Shifting drops squares which would fall off the top or bottom of the board,
/// and the file masks drop those which would wrap around the side.
fn pawn_attack_origins(sq: Square, attacker: Color) -> Bitboard {
    let target = Bitboard::from(sq);
    match attacker {
        Color::White => {
            ((target >> 7) & Bitboard::NOT_A_FILE) | ((target >> 9) & Bitboard::NOT_H_FILE)
        }
        Color::Black => {
            ((target << 7) & Bitboard::NOT_H_FILE) | ((target << 9) & Bitboard::NOT_A_FILE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_origins_do_not_wrap() {
        assert_eq!(
            pawn_attack_origins(Square::A3, Color::White),
            Bitboard::from(Square::B2)
        );
        assert_eq!(
            pawn_attack_origins(Square::H6, Color::Black),
            Bitboard::from(Square::G7)
        );
        assert_eq!(
            pawn_attack_origins(Square::D4, Color::White),
            Bitboard::EMPTY
                .with_square(Square::C3)
                .with_square(Square::E3)
        );
    }

    #[test]
    fn pawn_origins_off_board() {
        // no white pawn can attack the first rank
        assert!(pawn_attack_origins(Square::E1, Color::White).is_empty());
        assert!(pawn_attack_origins(Square::E8, Color::Black).is_empty());
        assert!(pawn_attack_origins(Square::A1, Color::White).is_empty());
    }
}
