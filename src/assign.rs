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

use crate::{guess_element, Element};
use serde::{Deserialize, Serialize};

/// Atom as read from a structure record
///
/// Only the two fields needed to settle the element are required.
pub trait AtomRecord {
    /// Explicit element column; empty if absent
    fn element_code(&self) -> &str;
    /// Atom name, e.g. `CA` or `OXT`
    fn atom_name(&self) -> &str;
}

/// Minimal atom record with a name and an optional element column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Atom {
    /// Atom name
    pub name: String,
    /// Element column, possibly empty
    #[serde(default)]
    pub element: String,
}

impl Atom {
    pub fn new(name: &str, element: &str) -> Self {
        Self {
            name: name.to_string(),
            element: element.to_string(),
        }
    }
}

impl AtomRecord for Atom {
    fn element_code(&self) -> &str {
        &self.element
    }
    fn atom_name(&self) -> &str {
        &self.name
    }
}

impl<T: AtomRecord + ?Sized> AtomRecord for &T {
    fn element_code(&self) -> &str {
        (**self).element_code()
    }
    fn atom_name(&self) -> &str {
        (**self).atom_name()
    }
}

/// Element of an atom
///
/// A non-empty element column is returned as is, without checking it against the
/// element table. Otherwise the element is guessed from the atom name, which gives
/// the empty element if the name is not recognized.
///
/// ~~~
/// use pdb_elements::{assign_element, Atom};
/// assert_eq!(assign_element(&Atom::new("CA", "")), "C");
/// assert_eq!(assign_element(&Atom::new("CA", "CA")), "CA"); // calcium
/// ~~~
pub fn assign_element(atom: &impl AtomRecord) -> Element {
    match atom.element_code() {
        "" => guess_element(atom.atom_name()),
        code => Element::from_symbol(code),
    }
}
