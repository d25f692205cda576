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

//! Performance testing, or "perft." Perft counts the leaves of the legal move
//! tree to a fixed depth, which is used for verifying the correctness of move
//! generation against published node counts.

use std::time::Instant;

use log::debug;

use super::{movegen::get_legal_moves, AttacksTable, Board, Move};

#[must_use]
/// Count the number of legal move sequences of length `depth` from `b`.
///
/// # Examples
///
/// ```
/// use quiver::{perft::perft, Board, MAGIC};
///
/// assert_eq!(perft(&Board::new(), &MAGIC, 2), 400);
/// ```
pub fn perft(b: &Board, table: &AttacksTable, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = get_legal_moves(b, table);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|m| {
            let mut bcopy = *b;
            bcopy.make_move(m);
            perft(&bcopy, table, depth - 1)
        })
        .sum()
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
/// Perform a perft and split the count up by the first move played. Useful
/// for tracking down which branch of the tree disagrees with a reference
/// engine.
pub fn divide(b: &Board, table: &AttacksTable, depth: u8) -> Vec<(Move, u64)> {
    let tic = Instant::now();
    let counts: Vec<(Move, u64)> = get_legal_moves(b, table)
        .into_iter()
        .map(|m| {
            let mut bcopy = *b;
            bcopy.make_move(m);
            let count = perft(&bcopy, table, depth.saturating_sub(1));
            debug!("{}: {count}", m.to_uci());
            (m, count)
        })
        .collect();
    let num_nodes: u64 = counts.iter().map(|&(_, n)| n).sum();
    let secs = tic.elapsed().as_secs_f64();
    debug!(
        "time {secs:.2} secs, num nodes {num_nodes}: {:.0} nodes/sec",
        num_nodes as f64 / secs
    );

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Square, MAGIC};

    fn perft_assistant(fen: &str, node_counts: &[u64]) {
        let b = Board::from_fen(fen).unwrap();
        for (i, num) in node_counts.iter().enumerate() {
            assert_eq!(*num, perft(&b, &MAGIC, i as u8), "depth {i} of {fen}");
        }
    }

    #[test]
    /// Test the perft values for the board starting position.
    fn perft_start_position() {
        perft_assistant(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &[1, 20, 400, 8_902, 197_281],
        );
    }

    #[test]
    /// Test the perft values for the
    /// [Kiwipete](https://www.chessprogramming.org/Perft_Results#Position_2)
    /// position.
    fn perft_kiwipete() {
        perft_assistant(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - ",
            &[1, 48, 2_039, 97_862],
        );
    }

    #[test]
    fn perft_endgame() {
        // https://www.chessprogramming.org/Perft_Results#Position_3
        perft_assistant(
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - ",
            &[1, 14, 191, 2_812, 43_238],
        );
    }

    #[test]
    /// Test the perft values for an unbalanced position. Uses results from
    /// [the CPW wiki](https://www.chessprogramming.org/Perft_Results#Position_4).
    fn perft_unbalanced() {
        perft_assistant(
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            &[1, 6, 264, 9_467],
        );
    }

    #[test]
    fn perft_edwards() {
        // https://www.chessprogramming.org/Perft_Results#Position_5
        perft_assistant(
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            &[1, 44, 1_486, 62_379],
        );
    }

    #[test]
    fn perft_edwards2() {
        // https://www.chessprogramming.org/Perft_Results#Position_6
        perft_assistant(
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
            &[1, 46, 2_079, 89_890],
        );
    }

    #[test]
    fn divide_sums_to_perft() {
        let b = Board::new();
        let split = divide(&b, &MAGIC, 3);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|&(_, n)| n).sum::<u64>(), 8_902);
        let e4 = split
            .iter()
            .find(|&&(m, _)| m == Move::normal(Square::E2, Square::E4))
            .map(|&(_, n)| n);
        assert_eq!(e4, Some(600));
    }
}
