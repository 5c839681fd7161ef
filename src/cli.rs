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

//! Command line interface for element lookup and assignment.

use crate::{
    assign_element,
    diagnostic::{DiagnosticSink, LogSink},
    guess_element, guessable_names, table, Atom, Element,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use pretty_env_logger::env_logger::DEFAULT_FILTER_ENV;
use serde::{Deserialize, Serialize};
use std::{io::Write, path::PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show tabulated properties of elements
    #[clap(arg_required_else_help = true)]
    Lookup {
        /// Element symbols, e.g. C or Fe
        symbols: Vec<String>,
    },
    /// Guess elements from standard atom names
    #[clap(arg_required_else_help = true)]
    Guess {
        /// Atom names, e.g. CA or OXT
        names: Vec<String>,
        /// List all atom names with a known element
        #[clap(long, short = 'l', action)]
        list: bool,
    },
    /// Assign elements to a list of atoms
    #[clap(arg_required_else_help = true)]
    Assign {
        /// Input file in YAML format with an `atoms` list
        #[clap(long, short = 'i')]
        input: PathBuf,
    },
    /// Write the full element table
    Table,
}

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    pub command: Commands,

    /// Verbose output. See more with e.g. RUST_LOG=Trace
    #[clap(long, short = 'v', action)]
    pub verbose: bool,
    /// Output file in YAML format; default is standard output
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Tabulated properties of a single element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Properties {
    pub atomic_number: u32,
    pub atomic_mass: f64,
    pub covalent_radius: f64,
    pub van_der_waals_radius: f64,
}

impl Properties {
    /// Look up all properties; unknown symbols are reported to `sink` and give zeros
    pub fn new(symbol: &str, sink: &dyn DiagnosticSink) -> Self {
        Self {
            atomic_number: table::atomic_number_with(symbol, sink),
            atomic_mass: table::atomic_mass_with(symbol, sink),
            covalent_radius: table::covalent_radius_with(symbol, sink),
            van_der_waals_radius: table::van_der_waals_radius_with(symbol, sink),
        }
    }
}

/// Output record for a looked up element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    pub symbol: Element,
    #[serde(flatten)]
    pub properties: Properties,
}

/// Output record for a guessed atom name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessRecord {
    pub name: String,
    pub element: Element,
}

/// Input file for the `assign` command
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct AtomList {
    atoms: Vec<Atom>,
}

/// Output record for an atom with an assigned element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedAtom {
    pub name: String,
    pub element: Element,
    /// True if the element was guessed from the atom name
    pub guessed: bool,
    /// Omitted if no element could be assigned
    #[serde(flatten)]
    pub properties: Option<Properties>,
}

/// Look up normalized symbols, e.g. `fe` becomes `FE`
pub fn lookup_elements(symbols: &[String], sink: &dyn DiagnosticSink) -> Vec<ElementRecord> {
    symbols
        .iter()
        .map(|symbol| {
            let symbol = Element::new(symbol);
            let properties = Properties::new(symbol.symbol(), sink);
            ElementRecord { symbol, properties }
        })
        .collect()
}

/// Guess the element of each atom name
pub fn guess_names(names: Vec<String>) -> Vec<GuessRecord> {
    names
        .into_iter()
        .map(|name| GuessRecord {
            element: guess_element(&name),
            name,
        })
        .collect()
}

/// Every atom name the guess table knows, with its element
pub fn known_guesses() -> Vec<GuessRecord> {
    guessable_names()
        .map(|(name, symbol)| GuessRecord {
            name: name.to_string(),
            element: Element::from_symbol(symbol),
        })
        .collect()
}

/// Assign elements and look up their properties
pub fn assign_atoms(atoms: &[Atom], sink: &dyn DiagnosticSink) -> Vec<AssignedAtom> {
    atoms
        .iter()
        .map(|atom| {
            let element = assign_element(atom);
            let properties =
                (!element.is_empty()).then(|| Properties::new(element.symbol(), sink));
            AssignedAtom {
                name: atom.name.clone(),
                guessed: atom.element.is_empty() && !element.is_empty(),
                element,
                properties,
            }
        })
        .collect()
}

pub fn do_main() -> Result<()> {
    let args = Args::parse();
    if std::env::var(DEFAULT_FILTER_ENV).is_err() {
        std::env::set_var(
            DEFAULT_FILTER_ENV,
            if args.verbose { "Debug" } else { "Info" },
        );
    }
    pretty_env_logger::init();

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    match args.command {
        Commands::Lookup { symbols } => {
            let records = lookup_elements(&symbols, &LogSink);
            write_yaml(&records, &mut output, Some("elements"))?;
        }
        Commands::Guess { names, list } => {
            let records = if list {
                known_guesses()
            } else {
                guess_names(names)
            };
            write_yaml(&records, &mut output, Some("guesses"))?;
        }
        Commands::Assign { input } => assign(input, &mut output)?,
        Commands::Table => {
            let elements = table::elements().collect_vec();
            write_yaml(&elements, &mut output, Some("elements"))?;
        }
    }
    output.flush()?;
    Ok(())
}

fn assign(input: PathBuf, output: &mut dyn Write) -> Result<()> {
    let file = std::fs::File::open(&input)
        .with_context(|| format!("Could not open {}", input.display()))?;
    let atom_list: AtomList = serde_yaml::from_reader(file)
        .with_context(|| format!("Could not parse atoms in {}", input.display()))?;
    log::debug!(
        "Read {} atoms from {}",
        atom_list.atoms.len(),
        input.display()
    );

    let assigned = assign_atoms(&atom_list.atoms, &LogSink);

    let unassigned = assigned
        .iter()
        .filter(|atom| atom.element.is_empty())
        .map(|atom| atom.name.as_str())
        .unique()
        .collect_vec();
    if !unassigned.is_empty() {
        log::warn!(
            "No element could be assigned to atom names: {}",
            unassigned.iter().join(", ")
        );
    }
    log::info!(
        "Assigned elements to {} of {} atoms ({} guessed from names)",
        assigned.iter().filter(|a| !a.element.is_empty()).count(),
        assigned.len(),
        assigned.iter().filter(|a| a.guessed).count()
    );

    write_yaml(&assigned, output, Some("atoms"))
}

/// Helper function to serialize data to a YAML stream
fn write_yaml<T: serde::Serialize>(
    data: &T,
    output: &mut dyn Write,
    key: Option<&str>,
) -> Result<()> {
    match key {
        Some(key) => {
            let mut wrapper = std::collections::BTreeMap::new();
            wrapper.insert(key.to_string(), data);
            let yaml = serde_yaml::to_string(&wrapper)?;
            output.write_all(yaml.as_bytes())?;
        }
        None => {
            let yaml = serde_yaml::to_string(data)?;
            output.write_all(yaml.as_bytes())?;
        }
    }
    Ok(())
}
