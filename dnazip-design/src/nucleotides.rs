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
//! Nucleotides and the pool that owns them.
//!
//! Nucleotides are linked along their strand by `prev`/`next` links going from the 3' end to the
//! 5' end, and can be bonded to a nucleotide of the opposite strand by a `peer` link. Links are
//! `NuclId` handles into the `NucleotidePool` that owns the nucleotides.
//!
//! [PeerSymmetry]: if `a.peer == Some(b)` then `b.peer == Some(a)` and the bases of `a` and `b`
//! are complementary. Peer links are only modified through `NucleotidePool::pair` and
//! `NucleotidePool::unpair`.

use super::Base;
use std::collections::HashMap;

/// Identifier of a nucleotide in a `NucleotidePool`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NuclId(usize);

impl NuclId {
    pub(crate) fn shifted(self, offset: usize) -> Self {
        Self(self.0 + offset)
    }
}

/// A node of a strand.
#[derive(Clone, Debug)]
pub struct Nucleotide {
    pub base: Base,
    prev: Option<NuclId>,
    next: Option<NuclId>,
    peer: Option<NuclId>,
}

impl Nucleotide {
    fn new(base: Base) -> Self {
        Self {
            base,
            prev: None,
            next: None,
            peer: None,
        }
    }

    /// The 3' neighbour
    pub fn prev(&self) -> Option<NuclId> {
        self.prev
    }

    /// The 5' neighbour
    pub fn next(&self) -> Option<NuclId> {
        self.next
    }

    pub fn peer(&self) -> Option<NuclId> {
        self.peer
    }
}

/// A maping from the identifiers of a pool to the identifiers of an other pool.
pub type NuclMap = HashMap<NuclId, NuclId, ahash::RandomState>;

/// A newly synthesized chain, and the bonds that it must form with its template.
#[derive(Debug)]
pub struct Replica {
    /// The 5' end of the new chain.
    pub prime5: NuclId,
    /// Pairs `(template, replica)` of nucleotides to bond.
    pub bonds: Vec<(NuclId, NuclId)>,
}

/// The arena owning the nucleotides of a molecule.
#[derive(Clone, Debug, Default)]
pub struct NucleotidePool {
    nucls: Vec<Nucleotide>,
}

impl NucleotidePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nucls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucls.is_empty()
    }

    /// Create a new nucleotide that is not linked to anything.
    pub fn add(&mut self, base: Base) -> NuclId {
        self.nucls.push(Nucleotide::new(base));
        NuclId(self.nucls.len() - 1)
    }

    pub fn get(&self, id: NuclId) -> &Nucleotide {
        &self.nucls[id.0]
    }

    fn get_mut(&mut self, id: NuclId) -> &mut Nucleotide {
        &mut self.nucls[id.0]
    }

    pub fn base(&self, id: NuclId) -> Base {
        self.get(id).base
    }

    pub fn prev(&self, id: NuclId) -> Option<NuclId> {
        self.get(id).prev
    }

    pub fn next(&self, id: NuclId) -> Option<NuclId> {
        self.get(id).next
    }

    pub fn peer(&self, id: NuclId) -> Option<NuclId> {
        self.get(id).peer
    }

    /// Make `other` the 5' neighbour of `this`.
    ///
    /// The former 5' neighbour of `this` and the former 3' neighbour of `other` are detached.
    /// Appending `None` terminates the chain at `this`.
    pub fn append(&mut self, this: NuclId, other: Option<NuclId>) {
        if let Some(next) = self.get(this).next {
            self.get_mut(next).prev = None;
        }
        if let Some(other) = other {
            if let Some(prev) = self.get(other).prev {
                self.get_mut(prev).next = None;
            }
            self.get_mut(other).prev = Some(this);
        }
        self.get_mut(this).next = other;
    }

    /// Bond `a` and `b`, releasing their previous partners if any.
    pub fn pair(&mut self, a: NuclId, b: NuclId) {
        debug_assert!(self.is_complement(a, b), "pairing non complementary bases");
        self.unpair(a);
        self.unpair(b);
        self.get_mut(a).peer = Some(b);
        self.get_mut(b).peer = Some(a);
    }

    /// Break the bond of `id` if it has one.
    pub fn unpair(&mut self, id: NuclId) {
        if let Some(peer) = self.get_mut(id).peer.take() {
            self.get_mut(peer).peer = None;
        }
    }

    pub fn is_complement(&self, a: NuclId, b: NuclId) -> bool {
        self.base(a).pairs_with(self.base(b))
    }

    /// Iterate over the chain of `id`, from `id` to the 5' end.
    pub fn walk_forward(&self, id: NuclId) -> Walk<'_> {
        Walk {
            pool: self,
            current: Some(id),
            forward: true,
        }
    }

    /// Iterate over the chain of `id`, from `id` to the 3' end.
    pub fn walk_backward(&self, id: NuclId) -> Walk<'_> {
        Walk {
            pool: self,
            current: Some(id),
            forward: false,
        }
    }

    /// The 3' end of the chain of `id`
    pub fn prime3_end_of(&self, id: NuclId) -> NuclId {
        let mut ret = id;
        while let Some(prev) = self.prev(ret) {
            ret = prev;
        }
        ret
    }

    /// The 5' end of the chain of `id`
    pub fn prime5_end_of(&self, id: NuclId) -> NuclId {
        let mut ret = id;
        while let Some(next) = self.next(ret) {
            ret = next;
        }
        ret
    }

    /// Number of nucleotides before `id` on its chain.
    pub fn size_left(&self, id: NuclId) -> usize {
        self.walk_backward(id).skip(1).count()
    }

    /// Number of nucleotides after `id` on its chain.
    pub fn size_right(&self, id: NuclId) -> usize {
        self.walk_forward(id).skip(1).count()
    }

    /// Length of the chain of `id`.
    pub fn size(&self, id: NuclId) -> usize {
        1 + self.size_left(id) + self.size_right(id)
    }

    /// Number of nucleotides from `begin` to `end`, both included. Return `None` if `end` is not
    /// reachable from `begin` by following 5' links.
    pub fn count_interval(&self, begin: NuclId, end: NuclId) -> Option<usize> {
        self.walk_forward(begin)
            .position(|id| id == end)
            .map(|n| n + 1)
    }

    /// Create an unlinked nucleotide whose base is the complement the base of `id`.
    pub fn complement_of(&mut self, id: NuclId) -> NuclId {
        let base = self.base(id).complement();
        self.add(base)
    }

    /// Build the complement of the whole chain of `id`.
    ///
    /// The new chain is antiparallel to the original one: its 3' end is the complement of the
    /// original 5' end. Return the 5' end of the new chain.
    pub fn full_complement_chain(&mut self, id: NuclId) -> NuclId {
        let mut now = self.prime5_end_of(id);
        let mut ret = self.complement_of(now);
        while let Some(prev) = self.prev(now) {
            let compl = self.complement_of(prev);
            self.append(ret, Some(compl));
            ret = compl;
            now = prev;
        }
        ret
    }

    /// Build the chain that would replace the current partner of the chain of `id` in a
    /// semi-conservative replication.
    ///
    /// Every bonded nucleotide of the template gets a complementary nucleotide in the new chain.
    /// The overhangs of the partner are reproduced as unpaired nucleotides, and the overhangs of
    /// the template stay unpaired. The new chain is thus a copy of the partner.
    ///
    /// No bond is modified, the bonds that the replica must form are returned instead. Return
    /// `None` if the template has no bonded nucleotide.
    pub fn full_complement_with_peer_chain(&mut self, id: NuclId) -> Option<Replica> {
        let mut now = Some(self.prime5_end_of(id));
        let mut replica_end: Option<NuclId> = None;
        let mut last_peer = None;
        let mut bonds = Vec::new();
        while let Some(template) = now {
            if let Some(peer) = self.peer(template) {
                last_peer = Some(peer);
                let compl = self.complement_of(template);
                if let Some(end) = replica_end {
                    self.append(end, Some(compl));
                } else {
                    // overhang of the partner on its 3' side
                    let mut head = compl;
                    let mut overhang = self.prev(peer);
                    while let Some(n) = overhang {
                        let base = self.base(n);
                        let copy = self.add(base);
                        self.append(copy, Some(head));
                        head = copy;
                        overhang = self.prev(n);
                    }
                }
                replica_end = Some(compl);
                bonds.push((template, compl));
            } else {
                last_peer = None;
            }
            now = self.prev(template);
        }
        let mut prime5 = replica_end?;
        if let Some(peer) = last_peer {
            // overhang of the partner on its 5' side
            let mut overhang = self.next(peer);
            while let Some(n) = overhang {
                let base = self.base(n);
                let copy = self.add(base);
                self.append(prime5, Some(copy));
                prime5 = copy;
                overhang = self.next(n);
            }
        }
        Some(Replica { prime5, bonds })
    }

    /// Move all the nucleotides of `other` into `self`.
    ///
    /// Return the offset by which the identifiers of `other` must be shifted.
    pub fn absorb(&mut self, other: NucleotidePool) -> usize {
        let offset = self.len();
        let shift = |id: Option<NuclId>| id.map(|id| id.shifted(offset));
        self.nucls
            .extend(other.nucls.into_iter().map(|n| Nucleotide {
                base: n.base,
                prev: shift(n.prev),
                next: shift(n.next),
                peer: shift(n.peer),
            }));
        offset
    }

    /// Copy the chains containing `roots` into a new pool.
    ///
    /// Links to nucleotides that are not copied are dropped. Return the new pool and the mapping
    /// from the identifiers of `self` to the identifiers of the new pool.
    pub fn extract(&self, roots: &[NuclId]) -> (NucleotidePool, NuclMap) {
        let mut map = NuclMap::default();
        let mut ret = NucleotidePool::new();
        let mut copied = Vec::new();
        for root in roots.iter() {
            let prime3 = self.prime3_end_of(*root);
            if map.contains_key(&prime3) {
                continue;
            }
            for id in self.walk_forward(prime3) {
                let new_id = ret.add(self.base(id));
                map.insert(id, new_id);
                copied.push(id);
            }
        }
        for id in copied {
            let old = self.get(id);
            let remap = |link: Option<NuclId>| link.and_then(|l| map.get(&l).cloned());
            let (prev, next, peer) = (remap(old.prev), remap(old.next), remap(old.peer));
            if let Some(new_id) = map.get(&id).cloned() {
                let new = ret.get_mut(new_id);
                new.prev = prev;
                new.next = next;
                new.peer = peer;
            }
        }
        (ret, map)
    }
}

/// An iterator over the nucleotides of a chain.
pub struct Walk<'a> {
    pool: &'a NucleotidePool,
    current: Option<NuclId>,
    forward: bool,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NuclId;

    fn next(&mut self) -> Option<NuclId> {
        let ret = self.current?;
        self.current = if self.forward {
            self.pool.next(ret)
        } else {
            self.pool.prev(ret)
        };
        Some(ret)
    }
}
