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

//! Regression test pinning every tabulated value, including the 2.0 van der Waals placeholders.

mod common;

use serde_yaml::Value;

#[test]
fn element_table_matches_reference() {
    let reference: Value = serde_yaml::from_str(
        &std::fs::read_to_string(common::fixture("reference_table.yaml"))
            .expect("failed to read reference_table.yaml"),
    )
    .expect("failed to parse reference_table.yaml");

    let actual = common::run_yaml(&["table"]);
    common::assert_yaml_eq(&reference, &actual, 1e-12);
}

#[test]
fn reference_has_all_elements() {
    let reference: Value = serde_yaml::from_str(
        &std::fs::read_to_string(common::fixture("reference_table.yaml")).unwrap(),
    )
    .unwrap();
    let elements = reference["elements"].as_sequence().unwrap();
    assert_eq!(elements.len(), 110);
    let placeholders = elements
        .iter()
        .filter(|e| e["van_der_waals_radius"].as_f64() == Some(2.0))
        .count();
    assert_eq!(placeholders, 72);
}
