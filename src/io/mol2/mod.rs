//! TRIPOS MOL2 decoding.
//!
//! A document goes through one forward [`scanner`] pass that locates the
//! `MOLECULE`, `ATOM` and `BOND` payloads, then each payload is decoded on its
//! own by [`header`], [`atoms`] and [`bonds`]. The pieces are assembled into a
//! [`ParsedMolecule`] only once all three succeed.

pub mod atoms;
pub mod bonds;
pub mod header;
pub mod scanner;

use super::{ParseOptions, Section, error::Error};
use crate::model::molecule::ParsedMolecule;

/// Parses `text` with default [`ParseOptions`].
pub fn parse(text: &str) -> Result<ParsedMolecule, Error> {
    parse_with(text, &ParseOptions::default())
}

/// Parses a single-molecule MOL2 document.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<ParsedMolecule, Error> {
    let sections = scanner::scan(text)?;

    let header = header::decode(sections.region(Section::Molecule))?;
    let atoms = atoms::decode(sections.region(Section::Atom), options.duplicate_serials)?;
    let bonds = bonds::decode(sections.region(Section::Bond), options.bond_direction)?;

    tracing::debug!(
        name = %header.name,
        atoms = atoms.len(),
        elements = atoms.element_index().len(),
        bonds = bonds.record_count(),
        "decoded MOL2 sections"
    );

    let molecule = ParsedMolecule::new(header, atoms, bonds);

    if !molecule.counts_match() {
        let declared = molecule.header().counts;
        tracing::warn!(
            declared_atoms = declared.atom_count,
            declared_bonds = declared.bond_count,
            atoms = molecule.atom_count(),
            bonds = molecule.bond_count(),
            "header counts differ from decoded records"
        );
    }

    if options.check_bond_references {
        if let Some(serial) = molecule.dangling_bond_references().first() {
            return Err(Error::dangling_bond_reference(*serial));
        }
    }

    Ok(molecule)
}

/// Whether a record line carries data: not blank and not a `#` comment.
fn is_data_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}
