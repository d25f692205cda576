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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for building magic lookup tables.
pub struct MagicConfig {
    /// The seed for the random number generator that proposes magic
    /// multipliers. The same seed always produces the same tables.
    pub seed: u64,
    /// The number of candidate multipliers to test for each square before
    /// giving up.
    pub max_tries: u64,
}

impl MagicConfig {
    #[must_use]
    /// Get the default configuration.
    pub const fn new() -> MagicConfig {
        MagicConfig {
            seed: 0x0DDB_A11_5EED,
            max_tries: 10_000_000,
        }
    }
}

impl Default for MagicConfig {
    fn default() -> MagicConfig {
        MagicConfig::new()
    }
}
