//! A small, strict reader for single-molecule TRIPOS MOL2 files.
//! It locates the `MOLECULE`, `ATOM` and `BOND` sections of a document, decodes
//! their records into typed tables, and answers per-element and per-bond
//! queries without going back to the text.
//!
//! # Features
//!
//! - **Single-pass section scan**: One forward walk over the lines finds all
//!   three sections, tolerating blank lines, comments and unrelated sections
//! - **Typed records**: Header, atoms and bonds decode into named fields,
//!   with line numbers on every decoding error
//! - **Element index**: Atoms grouped by element symbol in file order
//! - **Configurable strictness**: Duplicate atom serials, bond direction and
//!   bond-reference checking are selected through [`ParseOptions`]
//!
//! # Quick Start
//!
//! ```
//! use tripos_mol2::{AtomValues, HeaderValue, parse};
//!
//! let text = "\
//! @<TRIPOS>MOLECULE
//! Water
//! 3 2 0 0 0
//! SMALL
//! NO_CHARGES
//! @<TRIPOS>ATOM
//! 1 O1 0.0000 0.0000 0.0000 O.3 1 WAT -0.834
//! 2 H1 0.9572 0.0000 0.0000 H   1 WAT  0.417
//! 3 H2 -0.2400 0.9266 0.0000 H  1 WAT  0.417
//! @<TRIPOS>BOND
//! 1 1 2 1
//! 2 1 3 1
//! ";
//!
//! let water = parse(text)?;
//!
//! // Header fields
//! assert_eq!(water.get_information("name")?, HeaderValue::Text("Water"));
//! assert!(water.get_information("comment")?.is_missing());
//!
//! // Atoms of one element, in file order
//! assert_eq!(water.get_molecule("H", "atom_name")?, AtomValues::Text(vec!["H1", "H2"]));
//!
//! // Bonds are filed under the first atom of each pair
//! assert_eq!(&water.get_bond("atoms_bond")?["1"], ["2", "3"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: Section scanning, record decoding and [`ParseOptions`]
//! - [`parse`] / [`parse_with`]: Entry points from a complete text
//!
//! # Data Types
//!
//! - [`ParsedMolecule`]: Immutable result of a parse
//! - [`MoleculeHeader`]: Name, [`GeneralCounts`] and the optional header lines
//! - [`AtomRecord`]: One atom with coordinates, typing and charge
//! - [`AtomTable`]: Atom records by serial plus the element index
//! - [`BondTable`]: The `atoms_bond` and `bonds_type` groupings
//! - [`Groups`]: Insertion-ordered key → list mapping
//!
//! ## Queries
//!
//! - [`HeaderKind`], [`AtomField`], [`BondField`]: Closed sets of query kinds
//! - [`HeaderValue`], [`AtomValues`]: Query results
//! - [`QueryError`]: Invalid kind or unknown element

mod model;
mod query;

pub mod io;

pub use model::atom::AtomRecord;
pub use model::groups::Groups;
pub use model::header::{GeneralCounts, MISSING_VALUE, MoleculeHeader};
pub use model::molecule::ParsedMolecule;
pub use model::table::{AtomTable, BondTable};

pub use query::{AtomField, AtomValues, BondField, HeaderKind, HeaderValue, QueryError};

pub use io::{BondDirection, DuplicateSerialPolicy, ParseOptions, parse, parse_with};

pub use io::Error as ParseError;
