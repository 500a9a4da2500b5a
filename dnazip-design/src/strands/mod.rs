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

use super::{parse_sequence, DnaError, NuclId, NucleotidePool, Walk};
use std::fmt;
mod formating;

/// A strand, identified by the two ends of a chain of nucleotides.
///
/// A `StrandEnds` does not own any nucleotide, it is a view on a chain of a `NucleotidePool`.
/// Walking from `prime3` along the `next` links reaches `prime5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrandEnds {
    /// The end of the strand that has no 3' neighbour
    pub prime3: NuclId,
    /// The end of the strand that has no 5' neighbour
    pub prime5: NuclId,
}

impl StrandEnds {
    /// Build a new chain in `pool` from a sequence given in the 3' -> 5' order.
    pub fn from_sequence(pool: &mut NucleotidePool, sequence: &str) -> Result<Self, DnaError> {
        let bases = parse_sequence(sequence)?;
        let mut bases = bases.into_iter();
        let prime3 = pool.add(bases.next().ok_or(DnaError::EmptySequence)?);
        let mut prime5 = prime3;
        for b in bases {
            let nucl = pool.add(b);
            pool.append(prime5, Some(nucl));
            prime5 = nucl;
        }
        Ok(Self { prime3, prime5 })
    }

    /// The strand containing `any`. `any` can be any nucleotide of the chain.
    pub fn containing(pool: &NucleotidePool, any: NuclId) -> Self {
        Self {
            prime3: pool.prime3_end_of(any),
            prime5: pool.prime5_end_of(any),
        }
    }

    pub fn len(&self, pool: &NucleotidePool) -> usize {
        pool.size(self.prime3)
    }

    /// Iterate over the nucleotides of the strand in the 3' -> 5' order.
    pub fn nucls<'a>(&self, pool: &'a NucleotidePool) -> Walk<'a> {
        pool.walk_forward(self.prime3)
    }

    /// Iterate over the nucleotides of the strand in the 5' -> 3' order.
    pub fn nucls_reversed<'a>(&self, pool: &'a NucleotidePool) -> Walk<'a> {
        pool.walk_backward(self.prime5)
    }

    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self {
            prime3: self.prime3.shifted(offset),
            prime5: self.prime5.shifted(offset),
        }
    }
}

/// A single strand that owns its nucleotides.
///
/// Free strands are used to build molecules with `Molecule::from_strands`.
#[derive(Clone, Debug)]
pub struct Strand {
    nucls: NucleotidePool,
    ends: StrandEnds,
}

impl Strand {
    /// Build a strand from a sequence given in the 3' -> 5' order.
    pub fn new(sequence: &str) -> Result<Self, DnaError> {
        let mut nucls = NucleotidePool::new();
        let ends = StrandEnds::from_sequence(&mut nucls, sequence)?;
        Ok(Self { nucls, ends })
    }

    pub fn len(&self) -> usize {
        self.ends.len(&self.nucls)
    }

    /// Always false, a strand is made of at least one nucleotide.
    pub fn is_empty(&self) -> bool {
        self.ends.len(&self.nucls) == 0
    }

    /// The sequence in the 3' -> 5' order
    pub fn plain(&self) -> String {
        self.ends.plain(&self.nucls)
    }

    /// The sequence in the 5' -> 3' order
    pub fn plain_reversed(&self) -> String {
        self.ends.plain_reversed(&self.nucls)
    }

    /// The annotated sequence in the 5' -> 3' order, e.g. `(5) C=A (3)`.
    pub fn to_string_reversed(&self) -> String {
        self.ends.formated_reversed(&self.nucls)
    }

    pub(crate) fn into_parts(self) -> (NucleotidePool, StrandEnds) {
        (self.nucls, self.ends)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ends.formated(&self.nucls))
    }
}

impl std::str::FromStr for Strand {
    type Err = DnaError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The sequence of the strand that can be fully zipped to `sequence`.
///
/// Both the input and the output are given in the 3' -> 5' order. Since the two strands are
/// antiparallel, the output is the reverse complement of the input: `AAC` gives `GTT`.
pub fn complement_of(sequence: &str) -> Result<String, DnaError> {
    let mut pool = NucleotidePool::new();
    let strand = StrandEnds::from_sequence(&mut pool, sequence)?;
    let compl = pool.full_complement_chain(strand.prime5);
    Ok(StrandEnds::containing(&pool, compl).plain(&pool))
}
