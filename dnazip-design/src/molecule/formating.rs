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

use super::Molecule;
use crate::{DnaError, Parameters};

impl Molecule {
    /// Draw the two strands and the bonds between them:
    ///
    /// ```text
    /// (3) A=C=T=G (5)
    ///         | |
    ///     (5) A=C (3)
    /// ```
    ///
    /// The strand that does not start in the first column is shifted so that bonded bases are
    /// drawn above each other.
    pub fn render(&self) -> Result<String, DnaError> {
        self.render_with(&Parameters::DEFAULT)
    }

    pub fn render_with(&self, parameters: &Parameters) -> Result<String, DnaError> {
        let offset = self.left_overhang()?;
        let mut line_a = self.strand_a.formated_with(&self.nucls, parameters);
        let mut line_b = self.strand_b.formated_reversed_with(&self.nucls, parameters);
        let padding = " ".repeat(2 * offset.abs() as usize);
        if offset > 0 {
            line_b.insert_str(0, &padding);
        } else {
            line_a.insert_str(0, &padding);
        }

        let nb_bonds = if offset <= 0 {
            self.strand_a
                .nucls(&self.nucls)
                .take_while(|n| self.nucls.peer(*n).is_some())
                .count()
        } else {
            self.strand_b
                .nucls_reversed(&self.nucls)
                .take_while(|n| self.nucls.peer(*n).is_some())
                .count()
        };
        let mut bonds = " ".repeat(parameters.margin());
        bonds.push_str(&padding);
        let marks: Vec<String> = std::iter::repeat(parameters.bond.to_string())
            .take(nb_bonds)
            .collect();
        bonds.push_str(&marks.join(" "));

        Ok(format!("{}\n{}\n{}", line_a, bonds, line_b))
    }
}
