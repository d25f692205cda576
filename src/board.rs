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

//! A position on the board: where every piece stands, whose turn it is, and the
//! special-move state needed to generate moves from it. Move counters and
//! repetition history are not tracked.

use super::{Bitboard, CastleRights, Color, FenError, Move, Piece, Square};

use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// The pieces belonging to one player.
///
/// `all` must always be the union of the six piece bitboards; `Board` keeps
/// it that way through `add_piece` and `remove_piece`.
pub struct Side {
    /// The squares occupied by this side's pawns.
    pub pawns: Bitboard,
    /// The squares occupied by this side's knights.
    pub knights: Bitboard,
    /// The squares occupied by this side's bishops.
    pub bishops: Bitboard,
    /// The squares occupied by this side's rooks.
    pub rooks: Bitboard,
    /// The squares occupied by this side's queens.
    pub queens: Bitboard,
    /// The squares occupied by this side's king.
    pub kings: Bitboard,
    /// Every square occupied by this side.
    pub all: Bitboard,
}

impl Side {
    #[inline(always)]
    #[must_use]
    /// Get the squares occupied by one type of this side's pieces.
    pub const fn pieces(&self, pt: Piece) -> Bitboard {
        match pt {
            Piece::Knight => self.knights,
            Piece::Bishop => self.bishops,
            Piece::Rook => self.rooks,
            Piece::Queen => self.queens,
            Piece::Pawn => self.pawns,
            Piece::King => self.kings,
        }
    }

    #[inline(always)]
    fn pieces_mut(&mut self, pt: Piece) -> &mut Bitboard {
        match pt {
            Piece::Knight => &mut self.knights,
            Piece::Bishop => &mut self.bishops,
            Piece::Rook => &mut self.rooks,
            Piece::Queen => &mut self.queens,
            Piece::Pawn => &mut self.pawns,
            Piece::King => &mut self.kings,
        }
    }

    #[must_use]
    /// Get the type of this side's piece on `sq`, if there is one.
    pub fn type_at_square(&self, sq: Square) -> Option<Piece> {
        if !self.all.contains(sq) {
            return None;
        }
        Piece::ALL_TYPES
            .into_iter()
            .find(|&pt| self.pieces(pt).contains(sq))
    }

    #[inline(always)]
    #[must_use]
    /// Get the square of this side's king. The result is only meaningful if
    /// the side has exactly one king.
    pub fn king_square(&self) -> Option<Square> {
        self.kings.lowest_square()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A representation of a position. Does not handle the repetition or turn
/// timer.
pub struct Board {
    /// White's pieces.
    pub white: Side,
    /// Black's pieces.
    pub black: Side,
    /// The color of the player to move.
    pub player: Color,
    /// The square which can be moved to by a pawn in en passant. Will be
    /// `None` when a pawn has not moved two squares in the previous move.
    pub en_passant_square: Option<Square>,
    /// The rights of each player for castling.
    pub castle_rights: CastleRights,
}

impl Board {
    #[must_use]
    /// Create a `Board` in the standard starting position.
    pub const fn new() -> Board {
        Board {
            white: Side {
                pawns: Bitboard::new(0x0000_0000_0000_FF00),
                knights: Bitboard::new(0x0000_0000_0000_0042),
                bishops: Bitboard::new(0x0000_0000_0000_0024),
                rooks: Bitboard::new(0x0000_0000_0000_0081),
                queens: Bitboard::new(0x0000_0000_0000_0008),
                kings: Bitboard::new(0x0000_0000_0000_0010),
                all: Bitboard::new(0x0000_0000_0000_FFFF),
            },
            black: Side {
                pawns: Bitboard::new(0x00FF_0000_0000_0000),
                knights: Bitboard::new(0x4200_0000_0000_0000),
                bishops: Bitboard::new(0x2400_0000_0000_0000),
                rooks: Bitboard::new(0x8100_0000_0000_0000),
                queens: Bitboard::new(0x0800_0000_0000_0000),
                kings: Bitboard::new(0x1000_0000_0000_0000),
                all: Bitboard::new(0xFFFF_0000_0000_0000),
            },
            player: Color::White,
            en_passant_square: None,
            castle_rights: CastleRights::ALL_RIGHTS,
        }
    }

    #[must_use]
    /// Create a board with no pieces on it and no castling rights.
    const fn empty() -> Board {
        Board {
            white: Side {
                pawns: Bitboard::EMPTY,
                knights: Bitboard::EMPTY,
                bishops: Bitboard::EMPTY,
                rooks: Bitboard::EMPTY,
                queens: Bitboard::EMPTY,
                kings: Bitboard::EMPTY,
                all: Bitboard::EMPTY,
            },
            black: Side {
                pawns: Bitboard::EMPTY,
                knights: Bitboard::EMPTY,
                bishops: Bitboard::EMPTY,
                rooks: Bitboard::EMPTY,
                queens: Bitboard::EMPTY,
                kings: Bitboard::EMPTY,
                all: Bitboard::EMPTY,
            },
            player: Color::White,
            en_passant_square: None,
            castle_rights: CastleRights::NO_RIGHTS,
        }
    }

    /// Create a Board populated from some FEN and load it. The halfmove and
    /// fullmove counters may be present but are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `FenError` describing the first problem found if the FEN is
    /// malformed or describes a board breaking one of its invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::Board;
    ///
    /// let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    /// let b = Board::from_fen(fen).unwrap();
    /// assert_eq!(b, Board::new());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut board = Board::empty();
        let mut fields = fen.split_whitespace();

        let placement = fields
            .next()
            .ok_or(FenError::UnexpectedEnd("piece placement"))?;
        let mut rank = 7;
        let mut file = 0;
        for chr in placement.chars() {
            if chr == '/' {
                if file != 8 || rank == 0 {
                    return Err(FenError::BadRankLength(rank + 1));
                }
                rank -= 1;
                file = 0;
            } else if let Some(n) = chr.to_digit(10).filter(|n| (1..=8).contains(n)) {
                file += n as usize;
            } else {
                let pt = Piece::from_code(chr.to_ascii_uppercase())
                    .ok_or(FenError::BadPlacement(chr))?;
                let color = if chr.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank, file).ok_or(FenError::BadRankLength(rank + 1))?;
                board.add_piece(sq, pt, color);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::BadRankLength(rank + 1));
            }
        }
        if rank != 0 || file != 8 {
            return Err(FenError::BadRankLength(rank + 1));
        }

        let player = fields
            .next()
            .ok_or(FenError::UnexpectedEnd("player to move"))?;
        board.player = match player {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::BadPlayer(player.to_string())),
        };

        let castling = fields
            .next()
            .ok_or(FenError::UnexpectedEnd("castle rights"))?;
        for chr in castling.chars() {
            board.castle_rights |= match chr {
                'K' => CastleRights::king_castle(Color::White),
                'Q' => CastleRights::queen_castle(Color::White),
                'k' => CastleRights::king_castle(Color::Black),
                'q' => CastleRights::queen_castle(Color::Black),
                '-' => CastleRights::NO_RIGHTS,
                _ => return Err(FenError::BadCastleRights(chr)),
            };
        }

        let en_passant = fields
            .next()
            .ok_or(FenError::UnexpectedEnd("en passant square"))?;
        if en_passant != "-" {
            let sq = Square::from_algebraic(en_passant)?;
            let expected_rank = match board.player {
                Color::White => 5,
                Color::Black => 2,
            };
            if sq.rank() != expected_rank {
                return Err(FenError::BadEnPassant(sq));
            }
            board.en_passant_square = Some(sq);
        }

        if !board.is_valid() {
            return Err(FenError::InvalidBoard);
        }

        Ok(board)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares occupied by pieces of either color.
    pub fn occupancy(&self) -> Bitboard {
        self.white.all | self.black.all
    }

    #[must_use]
    /// Get the type of the piece occupying a given square.
    /// Returns `None` if there are no pieces occupying the square.
    pub fn type_at_square(&self, sq: Square) -> Option<Piece> {
        self.white
            .type_at_square(sq)
            .or_else(|| self.black.type_at_square(sq))
    }

    #[must_use]
    /// Get the color of the piece occupying a given square.
    pub fn color_at_square(&self, sq: Square) -> Option<Color> {
        if self.white.all.contains(sq) {
            Some(Color::White)
        } else if self.black.all.contains(sq) {
            Some(Color::Black)
        } else {
            None
        }
    }

    #[inline(always)]
    /// Put a piece on a square, keeping the side's aggregate occupancy in
    /// step. The square must be empty.
    pub fn add_piece(&mut self, sq: Square, pt: Piece, color: Color) {
        let side = &mut self[color];
        side.pieces_mut(pt).insert(sq);
        side.all.insert(sq);
    }

    #[inline(always)]
    /// Take a piece off a square, keeping the side's aggregate occupancy in
    /// step.
    pub fn remove_piece(&mut self, sq: Square, pt: Piece, color: Color) {
        let side = &mut self[color];
        side.pieces_mut(pt).remove(sq);
        side.all.remove(sq);
    }

    #[must_use]
    /// Check the invariants that move generation relies on: each side's
    /// aggregate occupancy is the union of its pieces, no two pieces share a
    /// square, each side has exactly one king, and every castling right is
    /// backed by a king and rook on their home squares.
    pub fn is_valid(&self) -> bool {
        for color in [Color::White, Color::Black] {
            let side = &self[color];
            let (king_home, kingside_rook, queenside_rook) = match color {
                Color::White => (Square::E1, Square::H1, Square::A1),
                Color::Black => (Square::E8, Square::H8, Square::A8),
            };
            let kingside = self.castle_rights.kingside(color);
            let queenside = self.castle_rights.queenside(color);
            if (kingside || queenside) && !side.kings.contains(king_home) {
                return false;
            }
            if (kingside && !side.rooks.contains(kingside_rook))
                || (queenside && !side.rooks.contains(queenside_rook))
            {
                return false;
            }
        }

        if !(self.white.all & self.black.all).is_empty() {
            return false;
        }
        for side in [&self.white, &self.black] {
            if side.kings.len() != 1 {
                return false;
            }
            let mut union = Bitboard::EMPTY;
            let mut total = 0;
            for pt in Piece::ALL_TYPES {
                union |= side.pieces(pt);
                total += side.pieces(pt).len();
            }
            // overlapping piece bitboards would make the total too large
            if union != side.all || total != side.all.len() {
                return false;
            }
        }
        true
    }

    /// Apply a move to this board. The move must be pseudo-legal for this
    /// position; anything else leaves the board in an unspecified state.
    ///
    /// Castling is recognized as a king moving two files, in which case the
    /// rook is relocated as well. A pawn moving onto the en passant square
    /// captures the pawn behind it.
    ///
    /// If the player to move has no piece on the origin square, the board is
    /// left untouched, including the player to move.
    ///
    /// # Examples
    ///
    /// ```
    /// use quiver::{Board, Color, Move, Square};
    ///
    /// let mut b = Board::new();
    /// b.make_move(Move::normal(Square::E2, Square::E4));
    /// assert_eq!(b.player, Color::Black);
    /// assert_eq!(b.en_passant_square, Some(Square::E3));
    /// ```
    pub fn make_move(&mut self, m: Move) {
        let from_sq = m.from_square();
        let to_sq = m.to_square();
        let player = self.player;
        let Some(pt) = self[player].type_at_square(from_sq) else {
            return;
        };

        if let Some(captured) = self[!player].type_at_square(to_sq) {
            self.remove_piece(to_sq, captured, !player);
        } else if pt == Piece::Pawn && self.en_passant_square == Some(to_sq) {
            // the captured pawn sits beside the mover, not on the target
            if let Some(capture_sq) = Square::new(from_sq.rank(), to_sq.file()) {
                self.remove_piece(capture_sq, Piece::Pawn, !player);
            }
        }

        self.remove_piece(from_sq, pt, player);
        self.add_piece(to_sq, m.promote_type().unwrap_or(pt), player);

        if pt == Piece::King && from_sq.file().abs_diff(to_sq.file()) == 2 {
            let rank = from_sq.rank();
            let (rook_from, rook_to) = if to_sq.file() > from_sq.file() {
                (Square::new(rank, 7), Square::new(rank, 5))
            } else {
                (Square::new(rank, 0), Square::new(rank, 3))
            };
            if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
                self.remove_piece(rook_from, Piece::Rook, player);
                self.add_piece(rook_to, Piece::Rook, player);
            }
        }

        self.en_passant_square = if pt == Piece::Pawn && from_sq.rank().abs_diff(to_sq.rank()) == 2
        {
            Square::new((from_sq.rank() + to_sq.rank()) / 2, from_sq.file())
        } else {
            None
        };

        for sq in [from_sq, to_sq] {
            self.castle_rights &= !match sq {
                Square::E1 => CastleRights::color_rights(Color::White),
                Square::H1 => CastleRights::king_castle(Color::White),
                Square::A1 => CastleRights::queen_castle(Color::White),
                Square::E8 => CastleRights::color_rights(Color::Black),
                Square::H8 => CastleRights::king_castle(Color::Black),
                Square::A8 => CastleRights::queen_castle(Color::Black),
                _ => CastleRights::NO_RIGHTS,
            };
        }

        self.player = !player;
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Index<Color> for Board {
    type Output = Side;

    #[inline(always)]
    fn index(&self, index: Color) -> &Self::Output {
        match index {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

impl IndexMut<Color> for Board {
    #[inline(always)]
    fn index_mut(&mut self, index: Color) -> &mut Self::Output {
        match index {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for r in (0..8).rev() {
            for c in 0..8 {
                let Some(sq) = Square::new(r, c) else {
                    continue;
                };
                let chr = match (self.type_at_square(sq), self.color_at_square(sq)) {
                    (Some(pt), Some(Color::White)) => pt.code(),
                    (Some(pt), Some(Color::Black)) => pt.code().to_ascii_lowercase(),
                    _ => '.',
                };
                write!(f, "{chr} ")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_valid() {
        assert!(Board::new().is_valid());
        assert_eq!(Board::new().occupancy().len(), 32);
    }

    #[test]
    fn fen_without_clocks() {
        let b = Board::from_fen("8/8/8/8/8/8/8/K6k b - -").unwrap();
        assert_eq!(b.player, Color::Black);
        assert_eq!(b.white.kings, Bitboard::from(Square::A1));
        assert_eq!(b.black.kings, Bitboard::from(Square::H1));
        assert_eq!(b.castle_rights, CastleRights::NO_RIGHTS);
    }

    #[test]
    fn fen_en_passant_square() {
        let b = Board::from_fen("rnbqkbnr/ppppp1pp/8/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
        assert_eq!(b.en_passant_square, Some(Square::F6));
    }

    #[test]
    fn fen_errors() {
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K6k x - - 0 1"),
            Err(FenError::BadPlayer("x".into()))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K6 w - - 0 1"),
            Err(FenError::BadRankLength(1))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K5Xk w - - 0 1"),
            Err(FenError::BadPlacement('X'))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K6K w - - 0 1"),
            Err(FenError::InvalidBoard)
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K6k w - e4 0 1"),
            Err(FenError::BadEnPassant(Square::E4))
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K6k w"),
            Err(FenError::UnexpectedEnd("castle rights"))
        );
    }

    #[test]
    fn castle_moves_rook() {
        let mut b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        b.make_move(Move::normal(Square::E1, Square::G1));
        assert_eq!(b.type_at_square(Square::F1), Some(Piece::Rook));
        assert_eq!(b.type_at_square(Square::H1), None);
        assert!(!b.castle_rights.kingside(Color::White));
        assert!(!b.castle_rights.queenside(Color::White));
        assert!(b.castle_rights.kingside(Color::Black));

        b.make_move(Move::normal(Square::E8, Square::C8));
        assert_eq!(b.type_at_square(Square::D8), Some(Piece::Rook));
        assert_eq!(b.type_at_square(Square::A8), None);
        assert_eq!(b.castle_rights, CastleRights::NO_RIGHTS);
        assert!(b.is_valid());
    }

    #[test]
    fn en_passant_capture_removes_pawn() {
        let mut b = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        b.make_move(Move::normal(Square::E5, Square::D6));
        assert_eq!(b.type_at_square(Square::D5), None);
        assert_eq!(b.type_at_square(Square::D6), Some(Piece::Pawn));
        assert!(b.black.pawns.is_empty());
        assert_eq!(b.en_passant_square, None);
        assert!(b.is_valid());
    }

    #[test]
    fn promotion_replaces_pawn() {
        let mut b = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        b.make_move(Move::promoting(Square::A7, Square::B8, Piece::Knight));
        assert_eq!(b.type_at_square(Square::B8), Some(Piece::Knight));
        assert_eq!(b.color_at_square(Square::B8), Some(Color::White));
        assert!(b.black.rooks.is_empty());
        assert!(b.is_valid());
    }

    #[test]
    fn castle_rights_need_home_pieces() {
        // king off its home square
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/3K3R w K - 0 1"),
            Err(FenError::InvalidBoard)
        );
        // a knight where the rook should be
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K2N w K - 0 1"),
            Err(FenError::InvalidBoard)
        );
        assert_eq!(
            Board::from_fen("r3k3/8/8/8/8/8/8/4K3 w k - 0 1"),
            Err(FenError::InvalidBoard)
        );
        assert!(Board::from_fen("r3k3/8/8/8/8/8/8/4K3 w q - 0 1").is_ok());

        let mut b = Board::new();
        b.castle_rights = CastleRights::king_castle(Color::White);
        b.remove_piece(Square::H1, Piece::Rook, Color::White);
        assert!(!b.is_valid());
    }

    #[test]
    fn empty_origin_leaves_board_alone() {
        let mut b = Board::new();
        b.make_move(Move::normal(Square::E4, Square::E5));
        assert_eq!(b, Board::new());
    }

    #[test]
    fn capturing_rook_revokes_rights() {
        let mut b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        b.make_move(Move::normal(Square::A1, Square::A8));
        assert!(!b.castle_rights.queenside(Color::White));
        assert!(!b.castle_rights.queenside(Color::Black));
        assert!(b.castle_rights.kingside(Color::White));
        assert!(b.castle_rights.kingside(Color::Black));
    }
}
