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

use super::{DnaError, Molecule, NuclId, NucleotidePool};

/// The ways of placing two molecules side by side, in the order in which they are tried by
/// `Molecule::try_to_combine_with`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// `self` on the left, `other` on the right
    Direct,
    /// `other` on the left, `self` on the right
    Swapped,
    /// `self` flipped on the left, `other` on the right
    SelfFlipped,
    /// `self` on the left, `other` flipped on the right
    OtherFlipped,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Self::Direct,
        Self::Swapped,
        Self::SelfFlipped,
        Self::OtherFlipped,
    ];
}

impl Molecule {
    /// Try to join `self` and `other` at compatible ends.
    ///
    /// The four orientations are tried in order on copies of the molecules, and the first
    /// successful combination is returned. Neither `self` nor `other` is modified.
    pub fn try_to_combine_with(&self, other: &Molecule) -> Result<Option<Molecule>, DnaError> {
        Ok(self
            .try_to_combine_with_orientation(other)?
            .map(|(_, molecule)| molecule))
    }

    /// Same as `try_to_combine_with`, also returning the orientation that succeeded.
    pub fn try_to_combine_with_orientation(
        &self,
        other: &Molecule,
    ) -> Result<Option<(Orientation, Molecule)>, DnaError> {
        for orientation in Orientation::ALL.iter() {
            let (left, right) = match orientation {
                Orientation::Direct => (self.clone(), other.clone()),
                Orientation::Swapped => (other.clone(), self.clone()),
                Orientation::SelfFlipped => {
                    let mut left = self.clone();
                    left.flip();
                    (left, other.clone())
                }
                Orientation::OtherFlipped => {
                    let mut right = other.clone();
                    right.flip();
                    (self.clone(), right)
                }
            };
            if let Some(molecule) = combine(left, right)? {
                log::debug!("combined molecules in orientation {:?}", orientation);
                return Ok(Some((*orientation, molecule)));
            }
            log::trace!("orientation {:?} is not compatible", orientation);
        }
        Ok(None)
    }
}

/// Join the 5' end of the strand A of `left` to the 3' end of the strand A of `right`.
///
/// The overhangs of `left` on its right and of `right` on its left must have the same length
/// and be complementary. They are bonded to each other.
fn combine(mut left: Molecule, right: Molecule) -> Result<Option<Molecule>, DnaError> {
    let offset_left = left.right_overhang()?;
    let offset_right = right.left_overhang()?;
    if offset_left != offset_right {
        log::trace!("overhangs {} and {} do not match", offset_left, offset_right);
        return Ok(None);
    }

    let Molecule {
        nucls,
        strand_a: right_a,
        strand_b: right_b,
    } = right;
    let shift = left.nucls.absorb(nucls);
    let right_a = right_a.shifted(shift);
    let right_b = right_b.shifted(shift);

    let overlap = offset_left.abs() as usize;
    let bonds = if offset_left > 0 {
        // strand B of left sticks out, facing the overhang of strand A of right
        left.nucls
            .walk_forward(left.strand_b.prime3)
            .nth(overlap - 1)
            .and_then(|start_b| sticky_bonds(&left.nucls, right_a.prime3, start_b, overlap))
    } else if offset_left < 0 {
        // strand A of left sticks out, facing the overhang of strand B of right
        left.nucls
            .walk_backward(left.strand_a.prime5)
            .nth(overlap - 1)
            .and_then(|start_a| sticky_bonds(&left.nucls, start_a, right_b.prime5, overlap))
    } else {
        Some(Vec::new())
    };
    let bonds = if let Some(bonds) = bonds {
        bonds
    } else {
        log::trace!("sticky ends of length {} are not complementary", overlap);
        return Ok(None);
    };

    for (a, b) in bonds {
        left.nucls.pair(a, b);
    }
    left.nucls.append(left.strand_a.prime5, Some(right_a.prime3));
    left.strand_a.prime5 = right_a.prime5;
    left.nucls.append(right_b.prime5, Some(left.strand_b.prime3));
    left.strand_b.prime3 = right_b.prime3;
    Ok(Some(left))
}

/// The bonds between `len` unpaired nucleotides going 3' -> 5' from `start_a` and `len` unpaired
/// nucleotides going 5' -> 3' from `start_b`, if they are all complementary.
fn sticky_bonds(
    pool: &NucleotidePool,
    start_a: NuclId,
    start_b: NuclId,
    len: usize,
) -> Option<Vec<(NuclId, NuclId)>> {
    let bonds: Vec<(NuclId, NuclId)> = pool
        .walk_forward(start_a)
        .zip(pool.walk_backward(start_b))
        .take(len)
        .collect();
    let compatible = bonds.len() == len
        && bonds.iter().all(|(a, b)| {
            pool.is_complement(*a, *b) && pool.peer(*a).is_none() && pool.peer(*b).is_none()
        });
    if compatible {
        Some(bonds)
    } else {
        None
    }
}
