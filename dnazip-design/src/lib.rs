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
//! This crate models double-stranded DNA as two antiparallel chains of nucleotides.
//!
//! Nucleotides of a molecule live in a `NucleotidePool` and are addressed by `NuclId` handles.
//! A `StrandEnds` is a view on one chain of the pool, and a `Molecule` owns a pool together with
//! the two strands that are hybridized ("zipped") to each other.
//! Molecules can be replicated, combined at their sticky ends and cut at recognition sequences.

#[macro_use]
extern crate serde_derive;
extern crate serde;

use std::fmt;

mod base;
pub use base::*;
mod nucleotides;
pub use nucleotides::*;
mod strands;
pub use strands::*;
mod molecule;
pub use molecule::*;

mod parameters;
pub use parameters::*;

#[cfg(test)]
mod tests;

/// The errors that can be returned by the operations on strands and molecules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnaError {
    /// A character that is not one of `A`, `T`, `C` or `G`.
    InvalidBase(char),
    /// A sequence with no base at all.
    EmptySequence,
    /// Two strands that cannot be paired at any offset.
    NoAlignment,
    /// The operation requires at least one pair of bonded nucleotides.
    Unzipped,
    InvalidParameters(String),
}

impl fmt::Display for DnaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(c) => write!(f, "invalid base {:?}", c),
            Self::EmptySequence => write!(f, "empty sequence"),
            Self::NoAlignment => write!(f, "unable to zip up the strands"),
            Self::Unzipped => write!(f, "unzipped molecule"),
            Self::InvalidParameters(msg) => write!(f, "invalid parameters: {}", msg),
        }
    }
}

impl std::error::Error for DnaError {}

impl std::convert::From<serde_json::Error> for DnaError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidParameters(error.to_string())
    }
}
