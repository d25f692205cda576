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

//! Directions, which are offsets between squares.

use std::ops::{Add, Neg};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A difference between two squares. Internally, they use the same
/// representation as a Square but with a signed integer.
pub struct Direction(pub i8);

impl Direction {
    /// A move "north" from White's point of view, the way a white pawn travels.
    pub const NORTH: Direction = Direction(8);
    /// A move "east" from White's point of view.
    pub const EAST: Direction = Direction(1);
    /// A move "south" from White's point of view.
    pub const SOUTH: Direction = Direction(-8);
    /// A move "west" from White's point of view.
    pub const WEST: Direction = Direction(-1);

    /// A move "northwest" from White's point of view.
    pub const NORTHWEST: Direction = Direction(Direction::NORTH.0 + Direction::WEST.0);
    /// A move "northeast" from White's point of view.
    pub const NORTHEAST: Direction = Direction(Direction::NORTH.0 + Direction::EAST.0);
    /// A move "southeast" from White's point of view.
    pub const SOUTHEAST: Direction = Direction(Direction::SOUTH.0 + Direction::EAST.0);
    /// A move "southwest" from White's point of view.
    pub const SOUTHWEST: Direction = Direction(Direction::SOUTH.0 + Direction::WEST.0);

    /// A move "north-by-northwest" from White's point of view.
    pub const NNW: Direction = Direction(2 * Direction::NORTH.0 + Direction::WEST.0);
    /// A move "north-by-northeast" from White's point of view.
    pub const NNE: Direction = Direction(2 * Direction::NORTH.0 + Direction::EAST.0);
    /// A move "east-by-northeast" from White's point of view.
    pub const ENE: Direction = Direction(Direction::NORTH.0 + 2 * Direction::EAST.0);
    /// A move "east-by-southeast" from White's point of view.
    pub const ESE: Direction = Direction(Direction::SOUTH.0 + 2 * Direction::EAST.0);
    /// A move "south-by-southeast" from White's point of view.
    pub const SSE: Direction = Direction(2 * Direction::SOUTH.0 + Direction::EAST.0);
    /// A move "south-by-southwest" from White's point of view.
    pub const SSW: Direction = Direction(2 * Direction::SOUTH.0 + Direction::WEST.0);
    /// A move "west-by-southwest" from White's point of view.
    pub const WSW: Direction = Direction(Direction::SOUTH.0 + 2 * Direction::WEST.0);
    /// A move "west-by-northwest" from White's point of view.
    pub const WNW: Direction = Direction(Direction::NORTH.0 + 2 * Direction::WEST.0);

    /// The directions that a rook can move, along only one step.
    pub const ROOK_DIRECTIONS: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// The directions that a bishop can move, along only one step.
    pub const BISHOP_DIRECTIONS: [Direction; 4] = [
        Direction::NORTHWEST,
        Direction::NORTHEAST,
        Direction::SOUTHWEST,
        Direction::SOUTHEAST,
    ];

    /// The steps that a knight can make.
    pub const KNIGHT_STEPS: [Direction; 8] = [
        Direction::NNW,
        Direction::NNE,
        Direction::ENE,
        Direction::ESE,
        Direction::SSE,
        Direction::SSW,
        Direction::WSW,
        Direction::WNW,
    ];

    /// The steps that a king can make.
    pub const KING_STEPS: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTHEAST,
        Direction::EAST,
        Direction::SOUTHEAST,
        Direction::SOUTH,
        Direction::SOUTHWEST,
        Direction::WEST,
        Direction::NORTHWEST,
    ];
}

impl Neg for Direction {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Direction(-self.0)
    }
}

impl Add<Direction> for Direction {
    type Output = Self;
    fn add(self, rhs: Direction) -> Self::Output {
        Direction(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_directions() {
        assert_eq!(Direction::NORTH + Direction::NORTH, Direction(16));
        assert_eq!(Direction::NORTH + Direction::EAST, Direction::NORTHEAST);
    }

    #[test]
    fn opposite_directions() {
        assert_eq!(-Direction::EAST, Direction::WEST);
        assert_eq!(-Direction::NORTHEAST, Direction::SOUTHWEST);
    }
}
