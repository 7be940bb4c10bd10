use serde::Serialize;

/// Text reported for a header line that the file does not provide.
pub const MISSING_VALUE: &str = "Missed or not mentioned Value";

/// The five counts on the second line of a `MOLECULE` section.
///
/// These are what the file *declares*; decoding never checks them against
/// the number of records actually present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GeneralCounts {
    pub atom_count: usize,
    pub bond_count: usize,
    pub substructure_count: usize,
    pub feature_count: usize,
    pub set_count: usize,
}

impl GeneralCounts {
    pub fn new(
        atom_count: usize,
        bond_count: usize,
        substructure_count: usize,
        feature_count: usize,
        set_count: usize,
    ) -> Self {
        Self {
            atom_count,
            bond_count,
            substructure_count,
            feature_count,
            set_count,
        }
    }
}

/// Decoded `@<TRIPOS>MOLECULE` section.
///
/// Lines after the counts line are optional in practice; `None` marks a line
/// the file did not contain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoleculeHeader {
    pub name: String,
    pub counts: GeneralCounts,
    pub mol_type: Option<String>,
    pub charge_type: Option<String>,
    pub status_bits: Option<String>,
    pub comment: Option<String>,
}

impl MoleculeHeader {
    pub fn new(name: impl Into<String>, counts: GeneralCounts) -> Self {
        Self {
            name: name.into(),
            counts,
            mol_type: None,
            charge_type: None,
            status_bits: None,
            comment: None,
        }
    }
}
