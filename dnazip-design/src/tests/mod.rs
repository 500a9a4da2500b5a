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

use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

fn random_sequence(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| ['A', 'T', 'C', 'G'][rng.gen_range(0..4)])
        .collect()
}

fn molecule_from(a: &str, b: &str) -> Result<Molecule, DnaError> {
    Molecule::from_strands(Strand::new(a)?, Strand::new(b)?)
}

/// Check [PeerSymmetry] and that the bonds of the molecule form a single contiguous run.
fn assert_sane_bonds(molecule: &Molecule) {
    let pool = molecule.nucleotides();
    let strand_a = molecule.strand_a_ends();
    let strand_b = molecule.strand_b_ends();
    for strand in [strand_a, strand_b].iter() {
        for n in strand.nucls(pool) {
            if let Some(peer) = pool.peer(n) {
                assert_eq!(pool.peer(peer), Some(n));
                assert!(pool.is_complement(n, peer));
            }
        }
    }
    let bonded: Vec<NuclId> = strand_a
        .nucls(pool)
        .filter(|n| pool.peer(*n).is_some())
        .collect();
    assert!(!bonded.is_empty());
    for pair in bonded.windows(2) {
        assert_eq!(pool.next(pair[0]), Some(pair[1]));
        let peer_0 = pool.peer(pair[0]).unwrap();
        assert_eq!(pool.prev(peer_0), pool.peer(pair[1]));
    }
    assert_eq!(
        StrandEnds::containing(pool, strand_a.prime5).prime3,
        strand_a.prime3
    );
    assert_eq!(
        StrandEnds::containing(pool, strand_b.prime3).prime5,
        strand_b.prime5
    );
}

#[test]
fn basic_construction() {
    init_logger();
    let molecule = Molecule::new("ACGTACGT").unwrap();
    let expected = "(3) A=C=G=T=A=C=G=T (5)\n".to_owned()
        + "    | | | | | | | |\n"
        + "(5) T=G=C=A=T=G=C=A (3)";
    assert_eq!(molecule.render().unwrap(), expected);
    assert_sane_bonds(&molecule);
}

#[test]
fn strand_construction() {
    init_logger();
    let molecule = molecule_from("ACGTACGT", "ACGTACGTTTTT").unwrap();
    let expected = "        (3) A=C=G=T=A=C=G=T (5)\n".to_owned()
        + "            | | | | | | | |\n"
        + "(5) T=T=T=T=T=G=C=A=T=G=C=A (3)";
    assert_eq!(molecule.render().unwrap(), expected);
    assert_sane_bonds(&molecule);
}

#[test]
fn strand_b_sticking_out_on_the_right() {
    let molecule = molecule_from("AAAAA", "TTTT").unwrap();
    let expected = "(3) A=A=A=A=A (5)\n".to_owned() + "    | | | |\n" + "(5) T=T=T=T (3)";
    assert_eq!(molecule.render().unwrap(), expected);
}

#[test]
fn strands_that_cannot_be_zipped() {
    init_logger();
    assert_eq!(
        molecule_from("AGCT", "ATGC").unwrap_err(),
        DnaError::NoAlignment
    );
    assert_eq!(molecule_from("AAA", "AAA").unwrap_err(), DnaError::NoAlignment);
}

#[test]
fn invalid_sequences() {
    assert_eq!(Molecule::new("").unwrap_err(), DnaError::EmptySequence);
    assert_eq!(
        Molecule::new("ACGTZ").unwrap_err(),
        DnaError::InvalidBase('Z')
    );
}

#[test]
fn complement_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..200 {
        let s = random_sequence(&mut rng, 40);
        let compl = complement_of(&s).unwrap();
        assert_eq!(compl.len(), s.len());
        assert_eq!(complement_of(&compl).unwrap(), s);
    }
}

#[test]
fn molecule_from_one_sequence_is_fully_zipped() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let s = random_sequence(&mut rng, 30);
        let molecule = Molecule::new(&s).unwrap();
        assert_eq!(molecule.nb_bonds(), s.len());
        assert_eq!(molecule.strand_b(), complement_of(&s).unwrap());
        let rendering = molecule.render().unwrap();
        let lines: Vec<&str> = rendering.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("(3) "));
        assert!(lines[2].starts_with("(5) "));
        assert_eq!(lines[1].matches('|').count(), s.len());
        assert_sane_bonds(&molecule);
    }
}

#[test]
fn duplicate_twice() {
    init_logger();
    let mut molecule = Molecule::new("ACGTACGT").unwrap();
    let expected = molecule.render().unwrap();
    let mut sibling = molecule.duplicate().unwrap();
    let third = sibling.duplicate().unwrap();
    assert_eq!(molecule.render().unwrap(), expected);
    assert_eq!(sibling.render().unwrap(), expected);
    assert_eq!(third.render().unwrap(), expected);
    for m in [&molecule, &sibling, &third].iter() {
        assert_sane_bonds(m);
    }
}

#[test]
fn duplicate_ragged_molecules() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut nb_tested = 0;
    while nb_tested < 100 {
        let a = random_sequence(&mut rng, 10);
        let b = random_sequence(&mut rng, 10);
        let mut molecule = if let Ok(m) = molecule_from(&a, &b) {
            m
        } else {
            continue;
        };
        nb_tested += 1;
        let expected = molecule.render().unwrap();
        let sibling = molecule.duplicate().unwrap();
        assert_eq!(molecule.render().unwrap(), expected);
        assert_eq!(sibling.render().unwrap(), expected);
        assert_eq!(molecule.strand_a(), a);
        assert_eq!(sibling.strand_b(), b);
        assert_sane_bonds(&molecule);
        assert_sane_bonds(&sibling);
    }
}

#[test]
fn cut_and_combine_back() {
    init_logger();
    let mut molecule = Molecule::new("ATCGGGTCAATCC").unwrap();
    let expected = molecule.render().unwrap();
    let right = molecule.restriction_cut("GGT").unwrap().unwrap();
    assert_eq!(
        molecule.render().unwrap(),
        "(3) A=T=C=G=G=G=T (5)\n    | | | |\n(5) T=A=G=C (3)"
    );
    assert_eq!(
        right.render().unwrap(),
        "      (3) C=A=A=T=C=C (5)\n".to_owned()
            + "          | | | | | |\n"
            + "(5) C=C=A=G=T=T=A=G=G (3)"
    );
    assert_sane_bonds(&molecule);
    assert_sane_bonds(&right);

    let (orientation, combined) = molecule
        .try_to_combine_with_orientation(&right)
        .unwrap()
        .unwrap();
    assert_eq!(orientation, Orientation::Direct);
    assert_eq!(combined.render().unwrap(), expected);
    assert_sane_bonds(&combined);
}

#[test]
fn random_cuts_reconstitute_the_molecule() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut nb_cuts = 0;
    for _ in 0..500 {
        let s = random_sequence(&mut rng, 16);
        let site = random_sequence(&mut rng, 3);
        let mut molecule = Molecule::new(&s).unwrap();
        let strand_b = molecule.strand_b();
        let expected = molecule.render().unwrap();
        let right = if let Some(right) = molecule.restriction_cut(&site).unwrap() {
            right
        } else {
            assert_eq!(molecule.render().unwrap(), expected);
            continue;
        };
        nb_cuts += 1;
        assert_eq!(molecule.strand_a() + &right.strand_a(), s);
        assert_eq!(right.strand_b() + &molecule.strand_b(), strand_b);
        assert_sane_bonds(&molecule);
        assert_sane_bonds(&right);
        let combined = molecule.try_to_combine_with(&right).unwrap().unwrap();
        assert_eq!(combined.render().unwrap(), expected);
    }
    assert!(nb_cuts > 0);
}

#[test]
fn ragged_molecule_cut_on_strand_a() {
    let mut molecule = molecule_from(
        "GGTATCCACCATATATATATCCCT",
        "AAAAAAAAAAATAGGGATATATATATGGTGGA",
    )
    .unwrap();
    let right = molecule.restriction_cut("GGT").unwrap().unwrap();
    assert_eq!(
        molecule.render().unwrap(),
        "(3) G=G=T=A=T=C=C=A=C=C (5)\n".to_owned()
            + "            | | |\n"
            + "        (5) A=G=G (3)"
    );
    assert_eq!(
        right.render().unwrap(),
        "      (3) A=T=A=T=A=T=A=T=A=T=C=C=C=T (5)\n".to_owned()
            + "          | | | | | | | | | | | | | |\n"
            + "(5) T=G=G=T=A=T=A=T=A=T=A=T=A=G=G=G=A=T=A=A=A=A=A=A=A=A=A=A=A (3)"
    );
}

#[test]
fn combine_blunt_molecules() {
    let left = Molecule::new("ATATATAT").unwrap();
    let right = Molecule::new("CGCGCGCG").unwrap();
    let combined = left.try_to_combine_with(&right).unwrap().unwrap();
    assert_eq!(
        combined.render().unwrap(),
        "(3) A=T=A=T=A=T=A=T=C=G=C=G=C=G=C=G (5)\n".to_owned()
            + "    | | | | | | | | | | | | | | | |\n"
            + "(5) T=A=T=A=T=A=T=A=G=C=G=C=G=C=G=C (3)"
    );
}

#[test]
fn combine_sticky_molecules() {
    init_logger();
    let left = molecule_from("TTAAAATTAT", "CCATAATT").unwrap();
    let right = molecule_from("GGAATT", "GGAATTCC").unwrap();
    let combined = left.try_to_combine_with(&right).unwrap().unwrap();
    assert_eq!(
        combined.render().unwrap(),
        "(3) T=T=A=A=A=A=T=T=A=T=G=G=A=A=T=T=C=C (5)\n".to_owned()
            + "            | | | | | | | | | | | | | |\n"
            + "        (5) T=T=A=A=T=A=C=C=T=T=A=A=G=G (3)"
    );
    assert_sane_bonds(&combined);
}

#[test]
fn combined_molecules_can_be_duplicated_and_cut() {
    let left = Molecule::new("ATATATAT").unwrap();
    let right = Molecule::new("CGCGCGCG").unwrap();
    let mut combined = left.try_to_combine_with(&right).unwrap().unwrap();
    let expected = combined.render().unwrap();
    let sibling = combined.duplicate().unwrap();
    assert_eq!(sibling.render().unwrap(), expected);
    let downstream = combined.restriction_cut("TCG").unwrap().unwrap();
    assert_eq!(combined.strand_a(), "ATATATATCG");
    assert_eq!(downstream.strand_a(), "CGCGCG");
}

#[test]
fn middle_fragment_is_joined_after_the_other_molecule() {
    init_logger();
    let mut molecule = Molecule::new("ATCGGGTCAATCCGAGTTACC").unwrap();
    let expected = molecule.render().unwrap();
    let mut middle = molecule.restriction_cut("GGT").unwrap().unwrap();
    let last = middle.restriction_cut("CGA").unwrap().unwrap();
    assert_eq!(
        middle.render().unwrap(),
        "      (3) C=A=A=T=C=C=G=A (5)\n".to_owned()
            + "          | | | | |\n"
            + "(5) C=C=A=G=T=T=A=G (3)"
    );

    // the sticky ends of the middle fragment only fit with `molecule` on its left
    let (orientation, combined) = middle
        .try_to_combine_with_orientation(&molecule)
        .unwrap()
        .unwrap();
    assert_eq!(orientation, Orientation::Swapped);
    assert_eq!(combined.strand_a(), "ATCGGGTCAATCCGA");
    assert_eq!(combined.strand_b(), "GATTGACCCGAT");
    assert_sane_bonds(&combined);

    let (orientation, whole) = combined
        .try_to_combine_with_orientation(&last)
        .unwrap()
        .unwrap();
    assert_eq!(orientation, Orientation::Direct);
    assert_eq!(whole.render().unwrap(), expected);
}

#[test]
fn flipped_fragment_is_flipped_back_before_joining() {
    init_logger();
    let mut molecule = Molecule::new("ATCGGGTCAATCC").unwrap();
    let expected = molecule.render().unwrap();
    let right = molecule.restriction_cut("GGT").unwrap().unwrap();
    molecule.flip();
    let (orientation, combined) = molecule
        .try_to_combine_with_orientation(&right)
        .unwrap()
        .unwrap();
    assert_eq!(orientation, Orientation::SelfFlipped);
    assert_eq!(combined.render().unwrap(), expected);
    assert_eq!(combined.strand_b(), "GGATTGACCCGAT");
    assert_sane_bonds(&combined);
}
