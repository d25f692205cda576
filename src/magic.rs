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

//! Lookup tables for piece attacks.
//!
//! Knights and kings use a plain table of reachable squares per square. Rooks
//! and bishops use magic bitboards: the occupancy of the squares that can block
//! a slider is multiplied by a per-square magic number, and the top bits of the
//! product index a table of precomputed attack sets.

use super::{Bitboard, Direction, MagicConfig, Square, TableError};

use log::{debug, trace};
use once_cell::sync::Lazy;

/// A shared copy of the default lookup tables, built the first time it is
/// used.
///
/// # Panics
///
/// Dereferencing this will panic if the default configuration fails to find a
/// magic for some square, which would be an internal error.
pub static MAGIC: Lazy<AttacksTable> = Lazy::new(|| {
    AttacksTable::new(&MagicConfig::default()).expect("default magic configuration must succeed")
});

/// The two families of sliding pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    /// The name of this family, for diagnostics.
    const fn name(self) -> &'static str {
        match self {
            Slider::Rook => "rook",
            Slider::Bishop => "bishop",
        }
    }

    /// The directions a piece of this family travels in.
    const fn directions(self) -> &'static [Direction; 4] {
        match self {
            Slider::Rook => &Direction::ROOK_DIRECTIONS,
            Slider::Bishop => &Direction::BISHOP_DIRECTIONS,
        }
    }
}

#[derive(Clone, Debug)]
/// A complete set of lookup tables for every piece which does not need special
/// pawn handling. It is built once and then only read, so one table can be
/// shared by reference across every board and thread.
pub struct AttacksTable {
    rook_table: Vec<SquareAttacks>,
    bishop_table: Vec<SquareAttacks>,
    knight_moves: [Bitboard; 64],
    king_moves: [Bitboard; 64],
}

impl AttacksTable {
    /// Build a new table, searching for magics with a random number generator
    /// seeded from `config`.
    ///
    /// # Errors
    ///
    /// Returns `TableError::MagicNotFound` if some square exhausts
    /// `config.max_tries` without finding a collision-free magic.
    pub fn new(config: &MagicConfig) -> Result<AttacksTable, TableError> {
        let mut rng = fastrand::Rng::with_seed(config.seed);
        let rook_table = make_magic_helper(Slider::Rook, &mut rng, config.max_tries)?;
        let bishop_table = make_magic_helper(Slider::Bishop, &mut rng, config.max_tries)?;
        debug!("built magic tables from seed {:#x}", config.seed);

        Ok(AttacksTable {
            rook_table,
            bishop_table,
            knight_moves: create_step_attacks(&Direction::KNIGHT_STEPS, 2),
            king_moves: create_step_attacks(&Direction::KING_STEPS, 1),
        })
    }

    /// Build a table from previously found magic multipliers, one per square.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Collision` if any multiplier sends two blocker
    /// arrangements with different attacks to the same slot.
    pub fn from_magics(
        rook_magics: &[Bitboard; 64],
        bishop_magics: &[Bitboard; 64],
    ) -> Result<AttacksTable, TableError> {
        Ok(AttacksTable {
            rook_table: load_magic_helper(Slider::Rook, rook_magics)?,
            bishop_table: load_magic_helper(Slider::Bishop, bishop_magics)?,
            knight_moves: create_step_attacks(&Direction::KNIGHT_STEPS, 2),
            king_moves: create_step_attacks(&Direction::KING_STEPS, 1),
        })
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares that a rook on `sq` attacks, given the occupancy of the
    /// whole board. The first blocker in each direction is included.
    pub fn rook_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.rook_table[sq as usize].attacks(occupancy)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares that a bishop on `sq` attacks, given the occupancy of
    /// the whole board. The first blocker in each direction is included.
    pub fn bishop_attacks(&self, occupancy: Bitboard, sq: Square) -> Bitboard {
        self.bishop_table[sq as usize].attacks(occupancy)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares that a knight on `sq` could move to on an empty board.
    pub fn knight_moves(&self, sq: Square) -> Bitboard {
        self.knight_moves[sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares that a king on `sq` could step to on an empty board.
    pub fn king_moves(&self, sq: Square) -> Bitboard {
        self.king_moves[sq as usize]
    }

    #[must_use]
    /// Get the magic entry used for rooks on `sq`.
    pub fn rook_entry(&self, sq: Square) -> &SquareAttacks {
        &self.rook_table[sq as usize]
    }

    #[must_use]
    /// Get the magic entry used for bishops on `sq`.
    pub fn bishop_entry(&self, sq: Square) -> &SquareAttacks {
        &self.bishop_table[sq as usize]
    }
}

/// All the information needed to look up the attacks of a rook or bishop from
/// one square.
#[derive(Clone, Debug)]
pub struct SquareAttacks {
    /// A mask which, when &ed with the occupancy bitboard, will give only the
    /// bits that matter when computing moves.
    mask: Bitboard,
    /// The magic number to multiply to hash the current board effectively.
    magic: Bitboard,
    /// A lookup vector of squares attacked, with one slot per subset of
    /// `mask`.
    attacks: Vec<Bitboard>,
    /// The shift related to this square.
    shift: u8,
}

impl SquareAttacks {
    #[must_use]
    /// Get the blocker mask of this entry.
    pub fn mask(&self) -> Bitboard {
        self.mask
    }

    #[must_use]
    /// Get the magic multiplier of this entry.
    pub fn magic(&self) -> Bitboard {
        self.magic
    }

    #[must_use]
    /// Get the shift applied to the hashed occupancy.
    pub fn shift(&self) -> u8 {
        self.shift
    }

    #[must_use]
    /// Get the number of slots in the attack table.
    pub fn table_len(&self) -> usize {
        self.attacks.len()
    }

    #[inline(always)]
    /// Look up the attacks for the given occupancy of the whole board.
    fn attacks(&self, occupancy: Bitboard) -> Bitboard {
        let key = compute_magic_key(occupancy & self.mask, self.magic, self.shift);
        // SAFETY: the shift leaves exactly as many bits as the table has slots
        // for, so `key` is always in bounds.
        unsafe { *self.attacks.get_unchecked(key) }
    }
}

#[inline(always)]
/// Use magic hashing to get the index to look up attacks in a bitboard.
fn compute_magic_key(occupancy: Bitboard, magic: Bitboard, shift: u8) -> usize {
    usize::from((occupancy * magic) >> shift)
}

/// Every blocker arrangement for one square, alongside the attacks it
/// produces.
fn enumerate_blockers(sq: Square, slider: Slider) -> (Bitboard, Vec<Bitboard>, Vec<Bitboard>) {
    let mask = relevant_mask(sq, slider.directions());
    let n = 1 << mask.len();
    let occupancies: Vec<Bitboard> = (0..n).map(|j| index_to_occupancy(j, mask)).collect();
    let attacks = occupancies
        .iter()
        .map(|&occ| directional_attacks(sq, slider.directions(), occ))
        .collect();
    (mask, occupancies, attacks)
}

/// Place each attack set at its hashed slot, failing if two different attack
/// sets land in the same slot. Slider attacks are never empty, so an empty slot
/// is a free one.
fn fill_table(
    occupancies: &[Bitboard],
    attacks: &[Bitboard],
    magic: Bitboard,
    shift: u8,
    table: &mut [Bitboard],
) -> bool {
    table.fill(Bitboard::EMPTY);
    for (&occ, &attack) in occupancies.iter().zip(attacks) {
        let key = compute_magic_key(occ, magic, shift);
        if table[key].is_empty() {
            table[key] = attack;
        } else if table[key] != attack {
            return false;
        }
    }
    true
}

/// Load the magic entries for one family from saved multipliers.
fn load_magic_helper(
    slider: Slider,
    magics: &[Bitboard; 64],
) -> Result<Vec<SquareAttacks>, TableError> {
    let mut table = Vec::with_capacity(64);
    for sq in Bitboard::ALL {
        let magic = magics[sq as usize];
        let (mask, occupancies, attacks) = enumerate_blockers(sq, slider);
        let shift = 64 - mask.len();
        let mut slots = vec![Bitboard::EMPTY; occupancies.len()];
        if !fill_table(&occupancies, &attacks, magic, shift, &mut slots) {
            return Err(TableError::Collision {
                family: slider.name(),
                square: sq,
            });
        }
        table.push(SquareAttacks {
            mask,
            magic,
            attacks: slots,
            shift,
        });
    }

    Ok(table)
}

/// Search for magics for every square of one family.
fn make_magic_helper(
    slider: Slider,
    rng: &mut fastrand::Rng,
    max_tries: u64,
) -> Result<Vec<SquareAttacks>, TableError> {
    let mut table = Vec::with_capacity(64);
    for sq in Bitboard::ALL {
        let (mask, occupancies, attacks) = enumerate_blockers(sq, slider);
        let shift = 64 - mask.len();
        let mut slots = vec![Bitboard::EMPTY; occupancies.len()];

        let mut found = None;
        for attempt in 1..=max_tries {
            let magic = random_sparse_bitboard(rng);
            // a good magic spreads the mask into the high bits
            if ((mask * magic) >> 56).len() < 6 {
                continue;
            }
            if fill_table(&occupancies, &attacks, magic, shift, &mut slots) {
                found = Some((magic, attempt));
                break;
            }
        }

        let Some((magic, attempt)) = found else {
            return Err(TableError::MagicNotFound {
                family: slider.name(),
                square: sq,
                tries: max_tries,
            });
        };
        trace!(
            "found {} magic {:#018x} for {sq} after {attempt} tries",
            slider.name(),
            magic.as_u64()
        );
        table.push(SquareAttacks {
            mask,
            magic,
            attacks: slots,
            shift,
        });
    }

    Ok(table)
}

/// Create the mask of squares whose occupancy can change what a slider on `sq`
/// attacks. The last square of each ray never matters, since it is attacked
/// whether or not something stands there.
fn relevant_mask(sq: Square, dirs: &[Direction]) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for &dir in dirs {
        let mut current_square = sq;
        while is_valid_step(current_square, dir) {
            let next_square = current_square + dir;
            if !is_valid_step(next_square, dir) {
                break;
            }
            result.insert(next_square);
            current_square = next_square;
        }
    }

    result
}

/// Given some mask, create the occupancy bitboard according to this index.
/// Bit `i` of `index` decides whether the `i`-th lowest square of `mask` is
/// occupied.
fn index_to_occupancy(index: usize, mask: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for (i, sq) in mask.enumerate() {
        if index & (1 << i) != 0 {
            result.insert(sq);
        }
    }

    result
}

/// Construct the squares attacked by the pieces at `sq` if it could move along
/// the directions in `dirs`, when the board is occupied by the pieces in
/// `occupancy`. This is slow and should only be used for building tables.
fn directional_attacks(sq: Square, dirs: &[Direction], occupancy: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for &dir in dirs {
        let mut current_square = sq;
        while is_valid_step(current_square, dir) {
            current_square = current_square + dir;
            result.insert(current_square);
            if occupancy.contains(current_square) {
                break;
            }
        }
    }

    result
}

/// Return whether stepping from `sq` in `dir` stays on the board.
fn is_valid_step(sq: Square, dir: Direction) -> bool {
    sq.chebyshev_to(sq + dir) <= 1
}

/// Get the step attacks that could be made by moving in `dirs` from each
/// square. Exclude the steps that travel more than `max_dist` (this prevents
/// overflow around the edges of the board).
fn create_step_attacks(dirs: &[Direction], max_dist: u8) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for start_sq in Bitboard::ALL {
        for &dir in dirs {
            let target_sq = start_sq + dir;
            if target_sq.chebyshev_to(start_sq) <= max_dist {
                attacks[start_sq as usize].insert(target_sq);
            }
        }
    }

    attacks
}

#[inline(always)]
/// Generate a random, mostly-empty bitboard.
fn random_sparse_bitboard(rng: &mut fastrand::Rng) -> Bitboard {
    Bitboard::new(rng.u64(..) & rng.u64(..) & rng.u64(..))
}
