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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chemical element symbol as used in structure records, e.g. `C` or `FE`.
///
/// Symbols are uppercase and compared exactly. The empty symbol is a valid value
/// and means that the element could not be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(String);

impl Element {
    /// Normalized element from user input, e.g. `" Fe "` becomes `FE`
    pub fn new(symbol: &str) -> Self {
        Self(symbol.trim().to_uppercase())
    }

    /// Element holding `symbol` exactly as given
    pub fn from_symbol(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The empty, unassigned element
    pub fn unknown() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn symbol(&self) -> &str {
        &self.0
    }

    /// True if no element could be assigned
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the symbol is one of the tabulated elements
    pub fn is_known(&self) -> bool {
        crate::table::lookup(&self.0).is_some()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Element {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Element {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Element {
    fn from(symbol: &str) -> Self {
        Self::from_symbol(symbol)
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.0
    }
}
