use tripos_mol2::{BondDirection, DuplicateSerialPolicy, ParseOptions};

use crate::cli::{self, ParseFlags};

pub fn build_parse_options(flags: &ParseFlags) -> ParseOptions {
    ParseOptions {
        duplicate_serials: flags.duplicates.into(),
        bond_direction: flags.bond_direction.into(),
        check_bond_references: flags.check_bonds,
    }
}

impl From<cli::DuplicatePolicy> for DuplicateSerialPolicy {
    fn from(policy: cli::DuplicatePolicy) -> Self {
        match policy {
            cli::DuplicatePolicy::Overwrite => DuplicateSerialPolicy::Overwrite,
            cli::DuplicatePolicy::Reject => DuplicateSerialPolicy::Reject,
        }
    }
}

impl From<cli::BondDirection> for BondDirection {
    fn from(direction: cli::BondDirection) -> Self {
        match direction {
            cli::BondDirection::Asymmetric => BondDirection::Asymmetric,
            cli::BondDirection::Mirrored => BondDirection::Mirrored,
        }
    }
}
