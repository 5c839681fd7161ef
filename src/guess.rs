// Copyright 2024 Mikael Lund
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! # Element guessing from standard atom names
//!
//! Heavy atoms of the standard amino acids and nucleotides have fixed names in structure
//! records, so their element follows from the name alone. Only exact names are recognized;
//! there is no prefix or column-based guessing, and hydrogen names are not covered.

use crate::Element;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Element of a standard protein or nucleic acid atom name.
///
/// Returns the empty element for any name not in the table, including
/// hydrogens, ligand atoms and names with surrounding whitespace.
///
/// ~~~
/// use pdb_elements::guess_element;
/// assert_eq!(guess_element("CA"), "C");
/// assert_eq!(guess_element("OXT"), "O");
/// assert!(guess_element(" CA ").is_empty());
/// ~~~
pub fn guess_element(atom_name: &str) -> Element {
    guesses()
        .get(atom_name)
        .map(|&symbol| Element::from_symbol(symbol))
        .unwrap_or_else(Element::unknown)
}

/// All atom names with a known element
pub fn guessable_names() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAME_TO_ELEMENT.iter().copied()
}

fn guesses() -> &'static HashMap<&'static str, &'static str> {
    static GUESSES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    GUESSES.get_or_init(|| NAME_TO_ELEMENT.iter().copied().collect())
}

#[rustfmt::skip]
const NAME_TO_ELEMENT: &[(&str, &str)] = &[
    // protein backbone
    ("N", "N"), ("CA", "C"), ("C", "C"), ("O", "O"), ("OXT", "O"),
    // protein side chains
    ("CB", "C"), ("CG", "C"), ("CG1", "C"), ("CG2", "C"),
    ("CD", "C"), ("CD1", "C"), ("CD2", "C"),
    ("CE", "C"), ("CE1", "C"), ("CE2", "C"), ("CE3", "C"),
    ("CZ", "C"), ("CZ2", "C"), ("CZ3", "C"), ("CH2", "C"),
    ("ND1", "N"), ("ND2", "N"), ("NE", "N"), ("NE1", "N"), ("NE2", "N"),
    ("NH1", "N"), ("NH2", "N"), ("NZ", "N"),
    ("OD1", "O"), ("OD2", "O"), ("OE1", "O"), ("OE2", "O"),
    ("OG", "O"), ("OG1", "O"), ("OH", "O"),
    ("SD", "S"), ("SG", "S"),
    // nucleic acid phosphate
    ("P", "P"), ("OP1", "O"), ("OP2", "O"), ("OP3", "O"),
    ("O1P", "O"), ("O2P", "O"), ("O3P", "O"),
    // sugar
    ("O5'", "O"), ("C5'", "C"), ("C4'", "C"), ("O4'", "O"), ("C3'", "C"),
    ("O3'", "O"), ("C2'", "C"), ("O2'", "O"), ("C1'", "C"),
    ("O5*", "O"), ("C5*", "C"), ("C4*", "C"), ("O4*", "O"), ("C3*", "C"),
    ("O3*", "O"), ("C2*", "C"), ("O2*", "O"), ("C1*", "C"),
    // bases
    ("N1", "N"), ("C2", "C"), ("O2", "O"), ("N2", "N"), ("N3", "N"),
    ("C4", "C"), ("O4", "O"), ("N4", "N"), ("C5", "C"), ("C5M", "C"),
    ("C6", "C"), ("O6", "O"), ("N6", "N"), ("N7", "N"), ("C7", "C"),
    ("C8", "C"), ("N9", "N"),
];
