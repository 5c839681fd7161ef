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

//! Element properties and element assignment for atoms in macromolecular structures.
//!
//! The element column of structure files is often missing, so the element of an atom is
//! settled by [`assign_element`] which falls back to [`guess_element`] on the atom name.
//! Physical constants for the element are then looked up in the [`table`] module.
//!
//! # Examples
//! ~~~
//! use pdb_elements::*;
//! let atom = Atom::new("SG", "");
//! let element = assign_element(&atom);
//! assert_eq!(element, "S");
//! assert_eq!(atomic_number(&element), 16);
//! assert!(covalent_radius(&element) <= MAX_COVALENT_RADIUS);
//!
//! // unknown symbols give zero and a diagnostic
//! let sink = diagnostic::RecordingSink::default();
//! assert_eq!(atomic_mass_with("XYZ", &sink), 0.0);
//! assert_eq!(sink.len(), 1);
//! ~~~

mod assign;
pub mod cli;
pub mod diagnostic;
mod element;
mod guess;
pub mod table;

pub use assign::{assign_element, Atom, AtomRecord};
pub use element::Element;
pub use guess::{guess_element, guessable_names};
pub use table::{
    atomic_mass, atomic_mass_with, atomic_number, atomic_number_with, covalent_radius,
    covalent_radius_with, van_der_waals_radius, van_der_waals_radius_with, ElementData,
    Property, UnknownElement, MAX_COVALENT_RADIUS, MAX_VAN_DER_WAALS_RADIUS,
};
