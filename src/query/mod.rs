//! Read-only lookups over a [`ParsedMolecule`].
//!
//! Each lookup comes in two flavours: a string-keyed one (`get_*`) that
//! validates the kind name and reports [`QueryError::InvalidQueryKind`], and a
//! typed one taking [`HeaderKind`], [`AtomField`] or [`BondField`] directly.

mod error;
mod kind;

pub use error::QueryError;
pub use kind::{AtomField, BondField, HeaderKind};

use crate::model::groups::Groups;
use crate::model::header::{GeneralCounts, MISSING_VALUE};
use crate::model::molecule::ParsedMolecule;
use serde::Serialize;
use std::fmt;

/// Result of a header lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue<'a> {
    Text(&'a str),
    Counts(&'a GeneralCounts),
    /// The file stopped before this header line. Serializes as `null`.
    Missing,
}

impl HeaderValue<'_> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(text) => Some(*text),
            _ => None,
        }
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, HeaderValue::Missing)
    }
}

impl fmt::Display for HeaderValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(text) => f.write_str(text),
            HeaderValue::Counts(c) => write!(
                f,
                "{} {} {} {} {}",
                c.atom_count, c.bond_count, c.substructure_count, c.feature_count, c.set_count
            ),
            HeaderValue::Missing => f.write_str(MISSING_VALUE),
        }
    }
}

/// Result of a per-element atom lookup, in element-index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AtomValues<'a> {
    Text(Vec<&'a str>),
    Coords(Vec<[f64; 3]>),
}

impl AtomValues<'_> {
    pub fn len(&self) -> usize {
        match self {
            AtomValues::Text(values) => values.len(),
            AtomValues::Coords(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn optional(line: &Option<String>) -> HeaderValue<'_> {
    match line.as_deref() {
        Some(text) => HeaderValue::Text(text),
        None => HeaderValue::Missing,
    }
}

impl ParsedMolecule {
    /// Header field by name: `name`, `general`, `type`, `charge`,
    /// `status_bits` or `comment`.
    pub fn get_information(&self, kind: &str) -> Result<HeaderValue<'_>, QueryError> {
        Ok(self.information(kind.parse()?))
    }

    /// Field of every atom of `element`, by name: `atom_name`, `coords`,
    /// `atom_type`, `subset_id`, `subset_name` or `charge`.
    ///
    /// # Examples
    ///
    /// ```
    /// let text = "\
    /// @<TRIPOS>MOLECULE
    /// water
    /// 3 2 0 0 0
    /// @<TRIPOS>ATOM
    /// 1 O1 0.0 0.0 0.0 O.3 1 WAT 0.0
    /// 2 H1 1.0 0.0 0.0 H 1 WAT 0.0
    /// 3 H2 0.0 1.0 0.0 H 1 WAT 0.0
    /// @<TRIPOS>BOND
    /// 1 1 2 1
    /// 2 1 3 1
    /// ";
    /// let molecule = tripos_mol2::parse(text)?;
    /// let names = molecule.get_molecule("H", "atom_name")?;
    /// assert_eq!(names, tripos_mol2::AtomValues::Text(vec!["H1", "H2"]));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get_molecule(&self, element: &str, kind: &str) -> Result<AtomValues<'_>, QueryError> {
        self.atoms_of(element, kind.parse()?)
    }

    /// Bond grouping by name: `atoms_bond` or `bonds_type`.
    pub fn get_bond(&self, kind: &str) -> Result<&Groups, QueryError> {
        Ok(self.bonds(kind.parse()?))
    }

    pub fn information(&self, kind: HeaderKind) -> HeaderValue<'_> {
        let header = self.header();
        match kind {
            HeaderKind::Name => HeaderValue::Text(&header.name),
            HeaderKind::General => HeaderValue::Counts(&header.counts),
            HeaderKind::Type => optional(&header.mol_type),
            HeaderKind::Charge => optional(&header.charge_type),
            HeaderKind::StatusBits => optional(&header.status_bits),
            HeaderKind::Comment => optional(&header.comment),
        }
    }

    pub fn atoms_of(&self, element: &str, field: AtomField) -> Result<AtomValues<'_>, QueryError> {
        let atoms = self
            .atom_table()
            .atoms_of(element)
            .ok_or_else(|| QueryError::UnknownElement(element.to_string()))?;

        Ok(match field {
            AtomField::Coords => AtomValues::Coords(atoms.map(|a| a.coords).collect()),
            AtomField::AtomName => AtomValues::Text(atoms.map(|a| a.name.as_str()).collect()),
            AtomField::AtomType => AtomValues::Text(atoms.map(|a| a.atom_type.as_str()).collect()),
            AtomField::SubsetId => AtomValues::Text(atoms.map(|a| a.subset_id.as_str()).collect()),
            AtomField::SubsetName => {
                AtomValues::Text(atoms.map(|a| a.subset_name.as_str()).collect())
            }
            AtomField::Charge => AtomValues::Text(atoms.map(|a| a.charge.as_str()).collect()),
        })
    }

    pub fn bonds(&self, field: BondField) -> &Groups {
        let bonds = self.bond_table();
        match field {
            BondField::AtomsBond => &bonds.atoms_bond,
            BondField::BondsType => &bonds.bonds_type,
        }
    }
}
