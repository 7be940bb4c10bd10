use std::io::{self, Write};

use serde::Serialize;
use tripos_mol2::{AtomValues, Groups, HeaderValue};

pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn write_header_value(out: &mut impl Write, value: &HeaderValue<'_>) -> io::Result<()> {
    match value {
        HeaderValue::Counts(c) => {
            writeln!(out, "atom_count          {}", c.atom_count)?;
            writeln!(out, "bond_count          {}", c.bond_count)?;
            writeln!(out, "substructure_count  {}", c.substructure_count)?;
            writeln!(out, "feature_count       {}", c.feature_count)?;
            writeln!(out, "set_count           {}", c.set_count)
        }
        other => writeln!(out, "{other}"),
    }
}

pub fn write_atom_values(out: &mut impl Write, values: &AtomValues<'_>) -> io::Result<()> {
    match values {
        AtomValues::Text(items) => {
            for item in items {
                writeln!(out, "{item}")?;
            }
        }
        AtomValues::Coords(items) => {
            for [x, y, z] in items {
                writeln!(out, "{x:>10.4} {y:>10.4} {z:>10.4}")?;
            }
        }
    }
    Ok(())
}

pub fn write_groups(out: &mut impl Write, groups: &Groups) -> io::Result<()> {
    let key_w = groups.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (key, values) in groups.iter() {
        writeln!(out, "{key:<key_w$}  {}", values.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripos_mol2::GeneralCounts;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to buffer");
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn header_text_and_missing_render_as_one_line() {
        assert_eq!(
            render(|out| write_header_value(out, &HeaderValue::Text("Water"))),
            "Water\n"
        );
        assert_eq!(
            render(|out| write_header_value(out, &HeaderValue::Missing)),
            "Missed or not mentioned Value\n"
        );
    }

    #[test]
    fn header_counts_render_one_per_line() {
        let counts = GeneralCounts::new(3, 2, 0, 0, 0);
        let text = render(|out| write_header_value(out, &HeaderValue::Counts(&counts)));
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("atom_count          3\n"));
    }

    #[test]
    fn coordinates_render_in_fixed_columns() {
        let values = AtomValues::Coords(vec![[0.9572, 0.0, -1.5]]);
        assert_eq!(
            render(|out| write_atom_values(out, &values)),
            "    0.9572     0.0000    -1.5000\n"
        );
    }

    #[test]
    fn groups_render_key_then_values() {
        let mut groups = Groups::new();
        groups.push("1", "2");
        groups.push("1", "3");
        groups.push("10", "11");
        assert_eq!(render(|out| write_groups(out, &groups)), "1   2 3\n10  11\n");
    }

    #[test]
    fn json_output_ends_with_newline() {
        let text = render(|out| write_json(out, &AtomValues::Text(vec!["H1", "H2"])));
        assert_eq!(text, "[\n  \"H1\",\n  \"H2\"\n]\n");
    }
}
