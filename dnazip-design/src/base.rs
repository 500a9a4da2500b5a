/*
DNAzip, a simulation of double-stranded DNA hybridization, replication and cleavage.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
//! The four DNA bases.

use super::DnaError;
use std::convert::TryFrom;
use std::fmt;

/// A DNA base.
///
/// `A` pairs with `T` and `C` pairs with `G`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    A,
    T,
    C,
    G,
}

impl Base {
    pub fn from_char(c: char) -> Result<Self, DnaError> {
        match c {
            'A' => Ok(Self::A),
            'T' => Ok(Self::T),
            'C' => Ok(Self::C),
            'G' => Ok(Self::G),
            _ => Err(DnaError::InvalidBase(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::C => 'C',
            Self::G => 'G',
        }
    }

    /// The base that pairs with `self`.
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true iff `self` and `other` can form a base pair.
    pub fn pairs_with(self, other: Self) -> bool {
        self.complement() == other
    }
}

impl TryFrom<char> for Base {
    type Error = DnaError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Read a sequence of bases.
///
/// The whole text is validated before anything is returned, so a rejected sequence never
/// produces a partial chain.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Base>, DnaError> {
    if sequence.is_empty() {
        return Err(DnaError::EmptySequence);
    }
    sequence.chars().map(Base::from_char).collect()
}
