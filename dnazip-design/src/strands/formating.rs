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

use super::StrandEnds;
use crate::{NucleotidePool, Parameters, Walk};

impl StrandEnds {
    /// The strand in the 3' -> 5' order, e.g. `(3) A=C (5)`.
    pub fn formated(&self, pool: &NucleotidePool) -> String {
        self.formated_with(pool, &Parameters::DEFAULT)
    }

    /// The strand in the 5' -> 3' order, e.g. `(5) C=A (3)`.
    pub fn formated_reversed(&self, pool: &NucleotidePool) -> String {
        self.formated_reversed_with(pool, &Parameters::DEFAULT)
    }

    pub fn formated_with(&self, pool: &NucleotidePool, parameters: &Parameters) -> String {
        let body = join(pool, self.nucls(pool), Some(parameters.backbone));
        if parameters.end_labels {
            format!("(3) {} (5)", body)
        } else {
            body
        }
    }

    pub fn formated_reversed_with(&self, pool: &NucleotidePool, parameters: &Parameters) -> String {
        let body = join(pool, self.nucls_reversed(pool), Some(parameters.backbone));
        if parameters.end_labels {
            format!("(5) {} (3)", body)
        } else {
            body
        }
    }

    pub fn plain(&self, pool: &NucleotidePool) -> String {
        join(pool, self.nucls(pool), None)
    }

    pub fn plain_reversed(&self, pool: &NucleotidePool) -> String {
        join(pool, self.nucls_reversed(pool), None)
    }
}

fn join(pool: &NucleotidePool, nucls: Walk<'_>, separator: Option<char>) -> String {
    let mut ret = String::new();
    for (i, id) in nucls.enumerate() {
        if i > 0 {
            if let Some(c) = separator {
                ret.push(c);
            }
        }
        ret.push(pool.base(id).to_char());
    }
    ret
}
