//! MOL2 decoding and the options that steer it.
//!
//! The decoder works on a complete in-memory text. [`read`] is a thin
//! adapter for callers holding a reader instead; opening files is left to
//! them.

use std::fmt;
use std::io::BufRead;

use crate::model::molecule::ParsedMolecule;

pub mod error;
pub mod mol2;

pub use error::Error;
pub use mol2::{parse, parse_with};

/// The three TRIPOS sections the decoder consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Molecule,
    Atom,
    Bond,
}

impl Section {
    /// Tag name as it appears after `@<TRIPOS>`.
    pub fn tag(self) -> &'static str {
        match self {
            Section::Molecule => "MOLECULE",
            Section::Atom => "ATOM",
            Section::Bond => "BOND",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What to do when two `ATOM` records share a serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateSerialPolicy {
    /// The later record replaces the earlier one.
    #[default]
    Overwrite,
    /// Fail with a malformed-record error.
    Reject,
}

/// Which atoms a bond is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BondDirection {
    /// Only under the first atom of the pair, as written in the file.
    #[default]
    Asymmetric,
    /// Under both atoms, so either endpoint finds the bond.
    Mirrored,
}

/// Decoder settings.
///
/// # Examples
///
/// ```
/// use tripos_mol2::io::{BondDirection, DuplicateSerialPolicy, ParseOptions};
///
/// let strict = ParseOptions {
///     duplicate_serials: DuplicateSerialPolicy::Reject,
///     check_bond_references: true,
///     ..Default::default()
/// };
/// assert_eq!(strict.bond_direction, BondDirection::Asymmetric);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub duplicate_serials: DuplicateSerialPolicy,
    pub bond_direction: BondDirection,
    /// Fail when a bond endpoint has no atom record.
    pub check_bond_references: bool,
}

/// Reads all of `reader` and decodes it.
pub fn read<R: BufRead>(mut reader: R, options: &ParseOptions) -> Result<ParsedMolecule, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_with(&text, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MINIMAL: &str = "\
@<TRIPOS>MOLECULE
CO
2 1 0 0 0
SMALL
NO_CHARGES
@<TRIPOS>ATOM
1 C1 0.0 0.0 0.0 C.2 1 LIG 0.0
2 O1 1.2 0.0 0.0 O.2 1 LIG 0.0
@<TRIPOS>BOND
1 1 2 2
";

    #[test]
    fn read_decodes_from_buffered_reader() {
        let molecule = read(Cursor::new(MINIMAL), &ParseOptions::default()).expect("read mol2");
        assert_eq!(molecule.header().name, "CO");
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.bond_count(), 1);
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x40, 0xff, 0xfe];
        let err = read(Cursor::new(bytes), &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn section_display_uses_tag_name() {
        assert_eq!(Section::Molecule.to_string(), "MOLECULE");
        assert_eq!(Section::Bond.tag(), "BOND");
    }
}
