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
//! Rendering parameters.

use super::DnaError;

/// Parameters of the textual rendering of strands and molecules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// Character drawn between two consecutive bases of a strand.
    #[serde(default = "default_backbone")]
    pub backbone: char,
    /// Character drawn between two bonded bases.
    #[serde(default = "default_bond")]
    pub bond: char,
    /// If true, the strands are annotated with their `(3)` and `(5)` ends.
    #[serde(default = "default_end_labels")]
    pub end_labels: bool,
}

fn default_backbone() -> char {
    Parameters::DEFAULT.backbone
}

fn default_bond() -> char {
    Parameters::DEFAULT.bond
}

fn default_end_labels() -> bool {
    Parameters::DEFAULT.end_labels
}

impl Parameters {
    /// The rendering used by `Molecule::render`:
    ///
    /// ```text
    /// (3) A=C=G=T (5)
    ///     | | | |
    /// (5) T=G=C=A (3)
    /// ```
    pub const DEFAULT: Parameters = Parameters {
        backbone: '=',
        bond: '|',
        end_labels: true,
    };

    /// Read parameters from a json object. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, DnaError> {
        let ret: Self = serde_json::from_str(json)?;
        if ret.backbone.is_whitespace() || ret.bond.is_whitespace() {
            return Err(DnaError::InvalidParameters(String::from(
                "backbone and bond symbols must be visible",
            )));
        }
        Ok(ret)
    }

    /// Number of columns occupied by the label of a strand end, including the following space.
    pub fn margin(&self) -> usize {
        if self.end_labels {
            4
        } else {
            0
        }
    }

    pub fn formated_string(&self) -> String {
        use std::fmt::Write;
        let mut ret = String::new();
        writeln!(&mut ret, "  Backbone symbol: {}", self.backbone).unwrap_or_default();
        writeln!(&mut ret, "  Bond symbol: {}", self.bond).unwrap_or_default();
        writeln!(&mut ret, "  End labels: {}", self.end_labels).unwrap_or_default();
        ret
    }
}

impl std::default::Default for Parameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
