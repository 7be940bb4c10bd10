use super::{is_data_line, scanner::Region};
use crate::io::{DuplicateSerialPolicy, Section, error::Error};
use crate::model::{atom::AtomRecord, table::AtomTable};

const ATOM_FIELDS: usize = 9;
const AXES: [&str; 3] = ["x", "y", "z"];

/// Decodes the `ATOM` payload into an atom table and its element index.
pub fn decode(region: Region<'_>, duplicates: DuplicateSerialPolicy) -> Result<AtomTable, Error> {
    let mut table = AtomTable::with_capacity(region.len());

    for (ln, raw) in region.numbered().filter(|(_, line)| is_data_line(line)) {
        let record = parse_atom_line(raw, ln)?;

        if duplicates == DuplicateSerialPolicy::Reject && table.contains(&record.serial) {
            return Err(Error::duplicate_serial(ln, record.serial));
        }

        if let Some(previous) = table.insert(record) {
            tracing::warn!(
                line = ln,
                serial = %previous.serial,
                replaced = %previous.name,
                "duplicate atom serial overwrites earlier record"
            );
        }
    }

    Ok(table)
}

fn parse_atom_line(line: &str, line_no: usize) -> Result<AtomRecord, Error> {
    let parts: Vec<_> = line.split_whitespace().collect();
    if parts.len() < ATOM_FIELDS {
        return Err(Error::malformed_record(
            Section::Atom,
            line_no,
            format!(
                "expected at least {ATOM_FIELDS} fields, found {}",
                parts.len()
            ),
        ));
    }

    let mut coords = [0.0f64; 3];
    for ((value, token), axis) in coords.iter_mut().zip(&parts[2..5]).zip(AXES) {
        *value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                Error::malformed_record(
                    Section::Atom,
                    line_no,
                    format!("invalid {axis} coordinate '{token}'"),
                )
            })?;
    }

    Ok(AtomRecord {
        serial: parts[0].to_string(),
        name: parts[1].to_string(),
        coords,
        atom_type: parts[5].to_string(),
        subset_id: parts[6].to_string(),
        subset_name: parts[7].to_string(),
        charge: parts[8].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mol2::scanner;

    fn decode_text(payload: &str, duplicates: DuplicateSerialPolicy) -> Result<AtomTable, Error> {
        let text = format!("@<TRIPOS>MOLECULE\nm\n0 0 0 0 0\n@<TRIPOS>ATOM\n{payload}@<TRIPOS>BOND\n");
        let sections = scanner::scan(&text).expect("scan");
        decode(sections.region(Section::Atom), duplicates)
    }

    #[test]
    fn decodes_fields_and_element_index() {
        let table = decode_text(
            "1 C1 -0.7 1.2 0.0 C.ar 1 BNZ -0.0620\n\
             2 H1 -1.2 2.1 0.0 H 1 BNZ 0.0620\n\
             3 C2 0.7 1.2 0.0 C.ar 1 BNZ -0.0620\n",
            DuplicateSerialPolicy::Overwrite,
        )
        .unwrap();

        let c1 = table.get("1").unwrap();
        assert_eq!(c1.name, "C1");
        assert_eq!(c1.coords, [-0.7, 1.2, 0.0]);
        assert_eq!(c1.atom_type, "C.ar");
        assert_eq!(c1.subset_id, "1");
        assert_eq!(c1.subset_name, "BNZ");
        assert_eq!(c1.charge, "-0.0620");

        let index = table.element_index();
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["C", "H"]);
        assert_eq!(index.get("C").unwrap(), ["1", "3"]);
    }

    #[test]
    fn extra_fields_blank_and_comment_lines_are_ignored() {
        let table = decode_text(
            "\n# generated\n7 N1 0 0 0 N.am 2 ALA 0.1 BACKBONE extra\n\n",
            DuplicateSerialPolicy::Overwrite,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("7").unwrap().charge, "0.1");
    }

    #[test]
    fn serials_are_opaque_and_need_not_be_contiguous() {
        let table = decode_text(
            "10 O1 0 0 0 O.3 1 WAT 0\nA7 H1 0 0 0 H 1 WAT 0\n",
            DuplicateSerialPolicy::Overwrite,
        )
        .unwrap();
        assert_eq!(table.element_index().get("H").unwrap(), ["A7"]);
        assert!(table.contains("10"));
    }

    #[test]
    fn eight_fields_is_malformed() {
        let err = decode_text("1 O1 0.0 0.0 0.0 O.3 1 WAT\n", DuplicateSerialPolicy::Overwrite)
            .unwrap_err();
        match err {
            Error::MalformedRecord {
                section,
                line,
                details,
            } => {
                assert_eq!(section, Section::Atom);
                assert_eq!(line, 5);
                assert!(details.contains("found 8"), "{details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_coordinate_is_malformed() {
        let err = decode_text("1 O1 0.0 abc 0.0 O.3 1 WAT 0\n", DuplicateSerialPolicy::Overwrite)
            .unwrap_err();
        match err {
            Error::MalformedRecord { details, .. } => assert!(details.contains("y coordinate")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_coordinate_is_malformed() {
        for (payload, axis) in [
            ("1 C1 nan 0.0 0.0 C.3 1 LIG 0.0\n", "x"),
            ("1 C1 0.0 inf 0.0 C.3 1 LIG 0.0\n", "y"),
            ("1 C1 0.0 0.0 -Infinity C.3 1 LIG 0.0\n", "z"),
        ] {
            let err = decode_text(payload, DuplicateSerialPolicy::Overwrite).unwrap_err();
            match err {
                Error::MalformedRecord { line, details, .. } => {
                    assert_eq!(line, 5);
                    assert!(details.contains(&format!("{axis} coordinate")), "{details}");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn duplicate_serial_overwrites_by_default() {
        let table = decode_text(
            "1 C1 0 0 0 C.3 1 LIG 0\n2 O1 0 0 0 O.3 1 LIG 0\n1 N1 1 1 1 N.3 1 LIG 0\n",
            DuplicateSerialPolicy::Overwrite,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1").unwrap().name, "N1");
        assert!(table.element_index().get("C").is_none());
        assert_eq!(table.element_index().get("N").unwrap(), ["1"]);
    }

    #[test]
    fn duplicate_serial_rejected_when_strict() {
        let err = decode_text(
            "1 C1 0 0 0 C.3 1 LIG 0\n1 N1 1 1 1 N.3 1 LIG 0\n",
            DuplicateSerialPolicy::Reject,
        )
        .unwrap_err();
        match err {
            Error::DuplicateSerial { serial, line } => {
                assert_eq!(serial, "1");
                assert_eq!(line, 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
