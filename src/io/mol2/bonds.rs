use super::{is_data_line, scanner::Region};
use crate::io::{BondDirection, Section, error::Error};
use crate::model::table::BondTable;

const BOND_FIELDS: usize = 4;
const SUBSTRUCTURE_TAG: &str = "@<TRIPOS>SUBSTRUCTURE";

/// Decodes the `BOND` payload into the two bond groupings.
///
/// Atom serials and bond types are stored as written; nothing here checks
/// them against the atom table.
pub fn decode(region: Region<'_>, direction: BondDirection) -> Result<BondTable, Error> {
    let mut table = BondTable::new();

    for (ln, raw) in region.numbered().filter(|(_, line)| is_data_line(line)) {
        let parts: Vec<_> = raw.split_whitespace().collect();
        if parts[0] == SUBSTRUCTURE_TAG {
            break;
        }
        if parts.len() < BOND_FIELDS {
            return Err(Error::malformed_record(
                Section::Bond,
                ln,
                format!(
                    "expected at least {BOND_FIELDS} fields, found {}",
                    parts.len()
                ),
            ));
        }

        let (a1, a2, bond_type) = (parts[1], parts[2], parts[3]);
        table.push(a1, a2, bond_type);
        if direction == BondDirection::Mirrored {
            table.push(a2, a1, bond_type);
        }
        table.count_record();
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mol2::scanner;

    fn decode_text(payload: &str, direction: BondDirection) -> Result<BondTable, Error> {
        let text = format!("@<TRIPOS>MOLECULE\nm\n0 0 0 0 0\n@<TRIPOS>ATOM\n@<TRIPOS>BOND\n{payload}");
        let sections = scanner::scan(&text).expect("scan");
        decode(sections.region(Section::Bond), direction)
    }

    #[test]
    fn asymmetric_files_bond_under_first_atom() {
        let table = decode_text("1 1 2 1\n2 1 3 2\n3 2 3 ar\n", BondDirection::Asymmetric).unwrap();

        assert_eq!(table.atoms_bond.get("1").unwrap(), ["2", "3"]);
        assert_eq!(table.bonds_type.get("1").unwrap(), ["1", "2"]);
        assert_eq!(table.atoms_bond.get("2").unwrap(), ["3"]);
        assert!(table.atoms_bond.get("3").is_none());
        assert_eq!(table.record_count(), 3);
    }

    #[test]
    fn mirrored_files_bond_under_both_atoms() {
        let table = decode_text("1 1 2 1\n2 1 3 2\n", BondDirection::Mirrored).unwrap();

        assert_eq!(table.atoms_bond.get("1").unwrap(), ["2", "3"]);
        assert_eq!(table.atoms_bond.get("2").unwrap(), ["1"]);
        assert_eq!(table.atoms_bond.get("3").unwrap(), ["1"]);
        assert_eq!(table.bonds_type.get("3").unwrap(), ["2"]);
        assert_eq!(table.record_count(), 2);
    }

    #[test]
    fn stops_at_substructure_token() {
        let lines = ["1 1 2 1", "@<TRIPOS>SUBSTRUCTURE", "1 LIG 1"];
        let table = decode(Region::new(10, &lines), BondDirection::Asymmetric).unwrap();

        assert_eq!(table.record_count(), 1);
        assert_eq!(table.atoms_bond.len(), 1);
    }

    #[test]
    fn skips_blank_lines_and_ignores_extra_fields() {
        let table = decode_text("\n1 1 2 am BACKBONE\n\n", BondDirection::Asymmetric).unwrap();
        assert_eq!(table.bonds_type.get("1").unwrap(), ["am"]);
    }

    #[test]
    fn short_line_is_malformed() {
        let err = decode_text("1 1 2\n", BondDirection::Asymmetric).unwrap_err();
        match err {
            Error::MalformedRecord {
                section,
                line,
                details,
            } => {
                assert_eq!(section, Section::Bond);
                assert_eq!(line, 6);
                assert!(details.contains("found 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
