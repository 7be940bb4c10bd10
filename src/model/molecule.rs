use super::header::MoleculeHeader;
use super::table::{AtomTable, BondTable};
use serde::Serialize;
use std::collections::HashSet;

/// A fully decoded single-molecule MOL2 document.
///
/// Built once by [`parse`](crate::parse) and never mutated afterwards, so a
/// shared reference can be read from any number of threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedMolecule {
    header: MoleculeHeader,
    atoms: AtomTable,
    bonds: BondTable,
}

impl ParsedMolecule {
    pub(crate) fn new(header: MoleculeHeader, atoms: AtomTable, bonds: BondTable) -> Self {
        Self {
            header,
            atoms,
            bonds,
        }
    }

    #[inline]
    pub fn header(&self) -> &MoleculeHeader {
        &self.header
    }

    #[inline]
    pub fn atom_table(&self) -> &AtomTable {
        &self.atoms
    }

    #[inline]
    pub fn bond_table(&self) -> &BondTable {
        &self.bonds
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.record_count()
    }

    /// Serials named by the bond section that have no atom record.
    ///
    /// Each serial is reported once, in the order it is first referenced.
    /// An empty result means every bond endpoint resolves.
    pub fn dangling_bond_references(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.bonds
            .referenced_serials()
            .filter(|serial| !self.atoms.contains(serial))
            .filter(|serial| seen.insert(*serial))
            .collect()
    }

    /// Whether the declared header counts match what was decoded.
    pub fn counts_match(&self) -> bool {
        self.header.counts.atom_count == self.atom_count()
            && self.header.counts.bond_count == self.bond_count()
    }
}
