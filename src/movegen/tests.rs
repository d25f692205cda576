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

use super::*;
use crate::{Color, MAGIC};

use crate::Square::*;

fn moves_of(fen: &str) -> Vec<Move> {
    get_moves(&Board::from_fen(fen).unwrap(), &MAGIC)
}

fn moves_from(moves: &[Move], from_sq: Square) -> Vec<Move> {
    moves
        .iter()
        .copied()
        .filter(|m| m.from_square() == from_sq)
        .collect()
}

fn count_of(moves: &[Move], m: Move) -> usize {
    moves.iter().filter(|&&x| x == m).count()
}

#[test]
fn start_position() {
    let moves = get_moves(&Board::new(), &MAGIC);
    assert_eq!(moves.len(), 20);
    for m in [Move::normal(E2, E4), Move::normal(G1, F3), Move::normal(A2, A3)] {
        assert!(moves.contains(&m));
    }
}

#[test]
/// Every pawn move onto the last rank fans out into one move per promotion.
fn white_promotions_fan_out() {
    let moves = moves_of("r1n1k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
    let pawn_moves = moves_from(&moves, B7);
    assert_eq!(pawn_moves.len(), 12);
    for to_sq in [A8, B8, C8] {
        for pt in Piece::PROMOTE_TYPES {
            assert_eq!(count_of(&pawn_moves, Move::promoting(B7, to_sq, pt)), 1);
        }
    }
    assert!(pawn_moves.iter().all(|m| m.is_promotion()));
}

#[test]
fn black_promotions_fan_out() {
    let moves = moves_of("4k3/8/8/8/8/8/6p1/4K2R b - - 0 1");
    let pawn_moves = moves_from(&moves, G2);
    assert_eq!(pawn_moves.len(), 8);
    assert_eq!(
        pawn_moves.iter().filter(|m| m.to_square() == H1).count(),
        4
    );
    assert!(pawn_moves.contains(&Move::promoting(G2, G1, Piece::Knight)));
}

#[test]
fn no_self_capture() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ] {
        let b = Board::from_fen(fen).unwrap();
        for m in get_moves(&b, &MAGIC) {
            assert!(
                !b[b.player].all.contains(m.to_square()),
                "{m} captures an ally in {fen}"
            );
        }
    }
}

#[test]
fn white_en_passant() {
    let moves = moves_of("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    assert!(moves.contains(&Move::normal(E5, F6)));
    // d5 did not just double push, so it cannot be taken in passing
    assert!(!moves.contains(&Move::normal(E5, D6)));
}

#[test]
fn black_en_passant() {
    let moves = moves_of("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
    assert!(moves.contains(&Move::normal(D4, E3)));
    assert!(moves.contains(&Move::normal(D4, D3)));
}

#[test]
fn captures_do_not_wrap() {
    let moves = moves_of("4k3/8/p7/8/7P/8/8/4K3 w - - 0 1");
    assert!(!moves.contains(&Move::normal(H4, A6)));
    assert_eq!(moves_from(&moves, H4), vec![Move::normal(H4, H5)]);

    let moves = moves_of("4k3/8/8/p7/8/7P/8/4K3 b - - 0 1");
    assert!(!moves.contains(&Move::normal(A5, H3)));
    assert_eq!(moves_from(&moves, A5), vec![Move::normal(A5, A4)]);
}

#[test]
fn blocked_pushes() {
    let b = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    let mut moves = Vec::new();
    pawn_pushes(&b, &mut moves);
    assert!(moves.is_empty());

    // the single push is open but the double push lands on a piece
    let b = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    let mut moves = Vec::new();
    pawn_pushes(&b, &mut moves);
    assert_eq!(moves, vec![Move::normal(E2, E3)]);
}

#[test]
fn castles_both_ways() {
    let moves = moves_of("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert_eq!(count_of(&moves, Move::normal(E1, G1)), 1);
    assert_eq!(count_of(&moves, Move::normal(E1, C1)), 1);

    let moves = moves_of("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    assert_eq!(count_of(&moves, Move::normal(E8, G8)), 1);
    assert_eq!(count_of(&moves, Move::normal(E8, C8)), 1);
}

#[test]
fn no_castle_through_attack() {
    // the rook on f8 covers f1
    let moves = moves_of("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!moves.contains(&Move::normal(E1, G1)));
    assert!(moves.contains(&Move::normal(E1, C1)));
}

#[test]
fn castle_with_attacked_rook_path() {
    // b1 is attacked, but the king never crosses it
    let moves = moves_of("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(moves.contains(&Move::normal(E1, C1)));
    assert!(moves.contains(&Move::normal(E1, G1)));
}

#[test]
fn no_castle_out_of_check() {
    let moves = moves_of("4k3/8/8/4r3/8/8/8/R3K2R w KQ - 0 1");
    assert!(!moves.contains(&Move::normal(E1, G1)));
    assert!(!moves.contains(&Move::normal(E1, C1)));
}

#[test]
fn no_castle_through_pieces() {
    let moves = moves_of("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
    assert!(!moves.contains(&Move::normal(E1, C1)));
    assert!(moves.contains(&Move::normal(E1, G1)));
}

#[test]
fn no_castle_without_rights() {
    let moves = moves_of("4k3/8/8/8/8/8/8/R3K2R w - - 0 1");
    assert!(!moves.contains(&Move::normal(E1, G1)));
    assert!(!moves.contains(&Move::normal(E1, C1)));

    let moves = moves_of("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1");
    assert!(!moves.contains(&Move::normal(E1, G1)));
    assert!(moves.contains(&Move::normal(E1, C1)));
}

#[test]
/// The king may not step away from a slider along the line of attack.
fn king_does_not_retreat_along_ray() {
    let moves = moves_of("4k3/8/8/8/r2K4/8/8/8 w - - 0 1");
    let king_moves = moves_from(&moves, D4);
    assert_eq!(king_moves.len(), 6);
    assert!(!king_moves.contains(&Move::normal(D4, E4)));
    assert!(!king_moves.contains(&Move::normal(D4, C4)));
}

#[test]
fn king_captures_undefended_piece() {
    let moves = moves_of("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    assert!(moves.contains(&Move::normal(E1, D2)));
    // protected by the king on e3
    let moves = moves_of("8/8/8/8/8/4k3/3r4/4K3 w - - 0 1");
    assert!(!moves.contains(&Move::normal(E1, D2)));
}

#[test]
fn generation_is_repeatable() {
    let b = Board::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let before = b;
    assert_eq!(get_moves(&b, &MAGIC), get_moves(&b, &MAGIC));
    assert_eq!(b, before);
}

#[test]
fn queen_moves_combine_slides() {
    let b = Board::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").unwrap();
    let mut moves = Vec::new();
    queen_moves(&b, &MAGIC, &mut moves);
    assert_eq!(moves.len(), 27);
}

#[test]
fn pawn_does_not_attack_across_edge() {
    let b = Board::from_fen("4k3/8/8/8/8/8/7P/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked_by(&b, &MAGIC, G3, Color::White));
    assert!(!is_square_attacked_by(&b, &MAGIC, A4, Color::White));

    let b = Board::from_fen("4k3/p7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(is_square_attacked_by(&b, &MAGIC, B6, Color::Black));
    assert!(!is_square_attacked_by(&b, &MAGIC, H5, Color::Black));
}

#[test]
fn attacks_with_lifted_piece() {
    let b = Board::from_fen("4k3/8/8/8/r2K4/8/8/8 w - - 0 1").unwrap();
    assert!(!is_square_attacked_by(&b, &MAGIC, E4, Color::Black));
    let lifted = b.occupancy() ^ Bitboard::from(D4);
    assert!(is_square_attacked_with_occupancy(
        &b,
        &MAGIC,
        E4,
        Color::Black,
        lifted
    ));
}

#[test]
fn any_square_attacked() {
    let b = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(any_square_attacked_by(&b, &MAGIC, &[E1, F1, G1], Color::Black));
    assert!(!any_square_attacked_by(&b, &MAGIC, &[E1, D1, C1], Color::Black));
    assert!(!any_square_attacked_by(&b, &MAGIC, &[], Color::Black));
}

#[test]
fn checks() {
    let b = Board::from_fen("4k3/8/8/4r3/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(is_in_check(&b, &MAGIC, Color::White));
    assert!(!is_in_check(&b, &MAGIC, Color::Black));
    assert!(!is_in_check(&Board::new(), &MAGIC, Color::White));
}

#[test]
fn only_legal_king_move() {
    let b = Board::from_fen("2k5/4R3/8/5K2/3R4/8/8/8 b - - 2 2").unwrap();
    assert_eq!(get_legal_moves(&b, &MAGIC), vec![Move::normal(C8, B8)]);
}

#[test]
fn checkmate_has_no_legal_moves() {
    let b = Board::from_fen("r1b2b1r/ppp2kpp/8/4p3/3n4/2Q5/PP1PqPPP/RNB1K2R w KQ - 4 11")
        .unwrap();
    assert!(is_in_check(&b, &MAGIC, Color::White));
    assert!(get_legal_moves(&b, &MAGIC).is_empty());
}

#[test]
fn pinned_piece_is_pseudo_legal() {
    let b = Board::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let m = Move::normal(E2, D3);
    assert!(get_moves(&b, &MAGIC).contains(&m));
    assert!(!get_legal_moves(&b, &MAGIC).contains(&m));
    assert!(!is_legal_after(&b, &MAGIC, m));
}

#[test]
fn generators_use_given_table() {
    let table = AttacksTable::new(&crate::MagicConfig::default()).unwrap();
    let b = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
        .unwrap();
    assert_eq!(get_moves(&b, &table), get_moves(&b, &MAGIC));
}
