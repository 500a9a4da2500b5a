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
//! Double-stranded molecules.
//!
//! A molecule is drawn with `strand_a` on top, in the 3' -> 5' order, and `strand_b` below it in
//! the 5' -> 3' order. The bonds between the two strands always form a single contiguous run.

use super::{Base, DnaError, NuclId, NucleotidePool, Strand, StrandEnds};
mod combine;
mod formating;
mod restriction;
pub use combine::Orientation;

/// A DNA molecule made of two hybridized strands.
#[derive(Clone, Debug)]
pub struct Molecule {
    nucls: NucleotidePool,
    strand_a: StrandEnds,
    strand_b: StrandEnds,
}

/// A best overlap between two strands. Positions are given as indices in the text of strand A
/// read 3' -> 5' and in the text of strand B read 5' -> 3'.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Alignment {
    /// Position of the first base of strand B relative to the first base of strand A.
    pub offset: isize,
    pub begin_a: usize,
    pub begin_b: usize,
    pub len: usize,
}

/// Find the offset maximizing the number of paired bases, such that every aligned pair of bases
/// is complementary. Among the best alignments, the one with the smallest offset is returned.
pub(crate) fn best_alignment(a: &[Base], b: &[Base]) -> Option<Alignment> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let mut ret: Option<Alignment> = None;
    for offset in -(m - 1)..n {
        let begin_a = offset.max(0);
        let end_a = (m + offset - 1).min(n - 1);
        if end_a < begin_a {
            continue;
        }
        let len = (end_a - begin_a + 1) as usize;
        if len <= ret.map(|al| al.len).unwrap_or(0) {
            continue;
        }
        let begin_b = (-offset).max(0) as usize;
        let begin_a = begin_a as usize;
        let feasible = a[begin_a..begin_a + len]
            .iter()
            .zip(b[begin_b..begin_b + len].iter())
            .all(|(x, y)| x.pairs_with(*y));
        if feasible {
            ret = Some(Alignment {
                offset,
                begin_a,
                begin_b,
                len,
            });
        }
    }
    ret
}

impl Molecule {
    /// A fully zipped molecule whose strand A has the given sequence, in the 3' -> 5' order.
    pub fn new(sequence: &str) -> Result<Self, DnaError> {
        let mut nucls = NucleotidePool::new();
        let strand_a = StrandEnds::from_sequence(&mut nucls, sequence)?;
        let compl = nucls.full_complement_chain(strand_a.prime5);
        let strand_b = StrandEnds::containing(&nucls, compl);
        let mut ret = Self {
            nucls,
            strand_a,
            strand_b,
        };
        if ret.zip_up() {
            Ok(ret)
        } else {
            Err(DnaError::NoAlignment)
        }
    }

    /// Zip two strands together. Fail if there is no offset at which the strands can be paired.
    pub fn from_strands(strand_a: Strand, strand_b: Strand) -> Result<Self, DnaError> {
        let (mut nucls, strand_a) = strand_a.into_parts();
        let (other, strand_b) = strand_b.into_parts();
        let offset = nucls.absorb(other);
        let mut ret = Self {
            nucls,
            strand_a,
            strand_b: strand_b.shifted(offset),
        };
        if ret.zip_up() {
            Ok(ret)
        } else {
            log::debug!(
                "could not zip {} with {}",
                ret.strand_a(),
                ret.strand_b.plain_reversed(&ret.nucls)
            );
            Err(DnaError::NoAlignment)
        }
    }

    /// Bond the two strands at the offset that maximizes the number of base pairs.
    ///
    /// Return false if no pair of bases can be formed at any offset, in which case no bond is
    /// created.
    fn zip_up(&mut self) -> bool {
        let pool = &self.nucls;
        let bases_a: Vec<Base> = self.strand_a.nucls(pool).map(|n| pool.base(n)).collect();
        let bases_b: Vec<Base> = self
            .strand_b
            .nucls_reversed(pool)
            .map(|n| pool.base(n))
            .collect();
        let alignment = if let Some(alignment) = best_alignment(&bases_a, &bases_b) {
            alignment
        } else {
            return false;
        };
        let pairs: Vec<(NuclId, NuclId)> = self
            .strand_a
            .nucls(pool)
            .skip(alignment.begin_a)
            .zip(self.strand_b.nucls_reversed(pool).skip(alignment.begin_b))
            .take(alignment.len)
            .collect();
        for (a, b) in pairs {
            self.nucls.pair(a, b);
        }
        log::debug!(
            "zipped at offset {} over {} nucleotides",
            alignment.offset,
            alignment.len
        );
        true
    }

    /// Semi-conservative replication.
    ///
    /// Each strand serves as a template for a new strand. `self` keeps its strand A, paired with
    /// a new strand B, and the returned molecule holds the former strand B of `self` paired with
    /// a new strand A.
    pub fn duplicate(&mut self) -> Result<Molecule, DnaError> {
        if !self.is_zipped() {
            return Err(DnaError::Unzipped);
        }
        let replica_b = self
            .nucls
            .full_complement_with_peer_chain(self.strand_a.prime5)
            .ok_or(DnaError::Unzipped)?;
        let replica_a = self
            .nucls
            .full_complement_with_peer_chain(self.strand_b.prime5)
            .ok_or(DnaError::Unzipped)?;
        for (template, replica) in replica_b.bonds.iter().chain(replica_a.bonds.iter()) {
            self.nucls.pair(*template, *replica);
        }
        let sibling = self.regroup(replica_a.prime5, self.strand_b.prime5);
        *self = self.regroup(self.strand_a.prime5, replica_b.prime5);
        log::debug!("duplicated a molecule of {} bonds", self.nb_bonds());
        Ok(sibling)
    }

    /// Swap the two strands.
    pub fn flip(&mut self) -> &mut Self {
        std::mem::swap(&mut self.strand_a, &mut self.strand_b);
        self
    }

    /// A new molecule made of the chains containing `root_a` and `root_b`.
    fn regroup(&self, root_a: NuclId, root_b: NuclId) -> Molecule {
        let (nucls, map) = self.nucls.extract(&[root_a, root_b]);
        let strand_a = StrandEnds::containing(&nucls, map[&root_a]);
        let strand_b = StrandEnds::containing(&nucls, map[&root_b]);
        Self {
            nucls,
            strand_a,
            strand_b,
        }
    }

    /// Overhang on the side of the 3' end of strand A.
    ///
    /// The result is positive if strand A sticks out, negative if strand B sticks out.
    pub(crate) fn left_overhang(&self) -> Result<isize, DnaError> {
        let peer_a = self.nucls.peer(self.strand_a.prime3);
        let peer_b = self.nucls.peer(self.strand_b.prime5);
        match (peer_a, peer_b) {
            (Some(_), Some(_)) => Ok(0),
            (Some(peer), None) => Ok(-(self.nucls.size_right(peer) as isize)),
            (None, Some(peer)) => Ok(self.nucls.size_left(peer) as isize),
            (None, None) => Err(DnaError::Unzipped),
        }
    }

    /// Overhang on the side of the 5' end of strand A.
    ///
    /// The result is positive if strand B sticks out, negative if strand A sticks out.
    pub(crate) fn right_overhang(&self) -> Result<isize, DnaError> {
        let peer_a = self.nucls.peer(self.strand_a.prime5);
        let peer_b = self.nucls.peer(self.strand_b.prime3);
        match (peer_a, peer_b) {
            (Some(_), Some(_)) => Ok(0),
            (Some(peer), None) => Ok(self.nucls.size_left(peer) as isize),
            (None, Some(peer)) => Ok(-(self.nucls.size_right(peer) as isize)),
            (None, None) => Err(DnaError::Unzipped),
        }
    }

    /// The sequence of strand A, in the 3' -> 5' order.
    pub fn strand_a(&self) -> String {
        self.strand_a.plain(&self.nucls)
    }

    /// The sequence of strand B, in the 3' -> 5' order.
    pub fn strand_b(&self) -> String {
        self.strand_b.plain(&self.nucls)
    }

    pub fn strand_a_ends(&self) -> StrandEnds {
        self.strand_a
    }

    pub fn strand_b_ends(&self) -> StrandEnds {
        self.strand_b
    }

    pub fn nucleotides(&self) -> &NucleotidePool {
        &self.nucls
    }

    /// Return true iff at least one pair of nucleotides is bonded.
    pub fn is_zipped(&self) -> bool {
        self.nb_bonds() > 0
    }

    /// Number of bonded pairs of nucleotides.
    pub fn nb_bonds(&self) -> usize {
        self.strand_a
            .nucls(&self.nucls)
            .filter(|n| self.nucls.peer(*n).is_some())
            .count()
    }
}
