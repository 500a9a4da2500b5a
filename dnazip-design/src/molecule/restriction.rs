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

use super::{DnaError, Molecule, NuclId};
use crate::{parse_sequence, Base};

impl Molecule {
    /// Cut the molecule at the first interior occurence of `site` on either strand.
    ///
    /// The recognized nucleotides are unbonded, and each strand is severed at one end of the
    /// site, leaving complementary sticky ends on both parts. `self` keeps the part containing
    /// the 3' end of strand A and the returned molecule holds the other part.
    ///
    /// Return `None` if no occurence of `site` can be cut without emptying a strand.
    pub fn restriction_cut(&mut self, site: &str) -> Result<Option<Molecule>, DnaError> {
        let site = parse_sequence(site)?;
        let (begin_a, end_a, begin_b) = self.zipped_interval()?;
        let interval = if let Some(n) = self.nucls.count_interval(begin_a, end_a) {
            n
        } else {
            log::warn!("bonds of the molecule are not contiguous");
            return Ok(None);
        };
        if site.len() > interval {
            return Ok(None);
        }
        let mut now_a = Some(begin_a);
        let mut now_b = Some(begin_b);
        for _ in 0..=(interval - site.len()) {
            let (a, b) = match (now_a, now_b) {
                (Some(a), Some(b)) => (a, b),
                _ => break,
            };
            for pos in [a, b].iter() {
                if self.site_at(*pos, &site) {
                    if let Some(ret) = self.try_cut_at(*pos, site.len()) {
                        log::debug!("cut at a site of {} nucleotides", site.len());
                        return Ok(Some(ret));
                    }
                    log::trace!("site at {:?} is not interior", pos);
                }
            }
            now_a = self.nucls.next(a);
            now_b = self.nucls.next(b);
        }
        Ok(None)
    }

    /// The bonded nucleotides of strand A at both ends of the zipped region, and the bonded
    /// nucleotide of strand B at the 3' end the zipped region.
    fn zipped_interval(&self) -> Result<(NuclId, NuclId, NuclId), DnaError> {
        let begin_a = if self.nucls.peer(self.strand_a.prime3).is_some() {
            self.strand_a.prime3
        } else if let Some(peer) = self.nucls.peer(self.strand_b.prime5) {
            peer
        } else {
            return Err(DnaError::Unzipped);
        };
        let (end_a, begin_b) = if let Some(peer) = self.nucls.peer(self.strand_a.prime5) {
            (self.strand_a.prime5, peer)
        } else if let Some(peer) = self.nucls.peer(self.strand_b.prime3) {
            (peer, self.strand_b.prime3)
        } else {
            return Err(DnaError::Unzipped);
        };
        Ok((begin_a, end_a, begin_b))
    }

    /// Return true iff the nucleotides starting at `pos` spell `site` in the 3' -> 5' order.
    fn site_at(&self, pos: NuclId, site: &[Base]) -> bool {
        let mut nucls = self.nucls.walk_forward(pos);
        site.iter()
            .all(|b| nucls.next().map(|n| self.nucls.base(n)) == Some(*b))
    }

    fn try_cut_at(&mut self, pos: NuclId, len: usize) -> Option<Molecule> {
        self.nucls.prev(pos)?;
        let pos_peer = self.nucls.peer(pos)?;
        self.nucls.next(pos_peer)?;
        let run: Vec<NuclId> = self.nucls.walk_forward(pos).take(len).collect();
        if run.len() < len || run.iter().any(|n| self.nucls.peer(*n).is_none()) {
            return None;
        }
        let pos_end = *run.last()?;
        self.nucls.next(pos_end)?;
        let end_peer = self.nucls.peer(pos_end)?;
        self.nucls.prev(end_peer)?;

        for n in run {
            self.nucls.unpair(n);
        }
        self.nucls.append(pos_end, None);
        self.nucls.append(pos_peer, None);
        let downstream = self.regroup(self.strand_a.prime5, self.strand_b.prime3);
        *self = self.regroup(self.strand_a.prime3, self.strand_b.prime5);
        Some(downstream)
    }
}
