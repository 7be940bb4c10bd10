use std::io::{self, Write};

use serde::Serialize;
use tripos_mol2::{GeneralCounts, HeaderKind, HeaderValue, ParsedMolecule};

use crate::util::text::ellipsize;

const INDENT: &str = "  ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();
const MAX_DISTRIBUTION_ROWS: usize = 15;

/// Everything `mol2q summary` reports about one molecule.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub name: &'a str,
    pub mol_type: HeaderValue<'a>,
    pub charge_type: HeaderValue<'a>,
    pub status_bits: HeaderValue<'a>,
    pub comment: HeaderValue<'a>,
    pub declared: &'a GeneralCounts,
    pub decoded_atoms: usize,
    pub decoded_bonds: usize,
    pub counts_match: bool,
    pub elements: Vec<(&'a str, usize)>,
    pub dangling_references: Vec<&'a str>,
}

impl<'a> Summary<'a> {
    pub fn new(molecule: &'a ParsedMolecule) -> Self {
        let header = molecule.header();
        let mut elements: Vec<_> = molecule
            .atom_table()
            .element_index()
            .iter()
            .map(|(element, serials)| (element, serials.len()))
            .collect();
        // Stable sort keeps first-seen order among equal counts.
        elements.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            name: &header.name,
            mol_type: molecule.information(HeaderKind::Type),
            charge_type: molecule.information(HeaderKind::Charge),
            status_bits: molecule.information(HeaderKind::StatusBits),
            comment: molecule.information(HeaderKind::Comment),
            declared: &header.counts,
            decoded_atoms: molecule.atom_count(),
            decoded_bonds: molecule.bond_count(),
            counts_match: molecule.counts_match(),
            elements,
            dangling_references: molecule.dangling_bond_references(),
        }
    }
}

pub fn print_summary(out: &mut impl Write, summary: &Summary<'_>) -> io::Result<()> {
    let rows = vec![
        ("Name", summary.name.to_string()),
        ("Type", summary.mol_type.to_string()),
        ("Charges", summary.charge_type.to_string()),
        ("Status Bits", summary.status_bits.to_string()),
        ("Comment", summary.comment.to_string()),
    ];
    print_kv_table(out, "Molecule", &rows)?;
    writeln!(out)?;

    print_counts_table(out, summary)?;
    writeln!(out)?;

    let total = summary.decoded_atoms;
    print_distribution_table(out, "Element Distribution", &summary.elements, total)?;

    if !summary.dangling_references.is_empty() {
        writeln!(out)?;
        let rows = vec![(
            "Missing Atoms",
            summary.dangling_references.join(" "),
        )];
        print_kv_table(out, "Unresolved Bond Endpoints", &rows)?;
    }
    Ok(())
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let key_w = 16usize;
    let sep_overhead = 7;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    writeln!(out, "{}┌─ {} ─┐", INDENT, ellipsize(title, SAFE_TABLE_WIDTH - 6))?;
    writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )?;

    for (key, val) in rows {
        writeln!(
            out,
            "{}│ {:<key_w$} │ {:<val_w$} │",
            INDENT,
            ellipsize(key, key_w),
            ellipsize(val, val_w),
        )?;
    }

    writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    )
}

fn print_counts_table(out: &mut impl Write, summary: &Summary<'_>) -> io::Result<()> {
    let declared = summary.declared;
    let rows = [
        ("Atoms", declared.atom_count.to_string(), summary.decoded_atoms.to_string()),
        ("Bonds", declared.bond_count.to_string(), summary.decoded_bonds.to_string()),
        ("Substructures", declared.substructure_count.to_string(), "-".to_string()),
        ("Features", declared.feature_count.to_string(), "-".to_string()),
        ("Sets", declared.set_count.to_string(), "-".to_string()),
    ];

    let title = if summary.counts_match {
        "Counts"
    } else {
        "Counts (header disagrees with records)"
    };
    writeln!(out, "{}┌─ {} ─┐", INDENT, title)?;
    writeln!(out, "{}┌─────────────────┬──────────┬──────────┐", INDENT)?;
    writeln!(out, "{}│ Record          │ Declared │  Decoded │", INDENT)?;
    writeln!(out, "{}├─────────────────┼──────────┼──────────┤", INDENT)?;

    for (record, declared, decoded) in &rows {
        writeln!(out, "{}│ {:<15} │ {:>8} │ {:>8} │", INDENT, record, declared, decoded)?;
    }

    writeln!(out, "{}└─────────────────┴──────────┴──────────┘", INDENT)
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(&str, usize)],
    total: usize,
) -> io::Result<()> {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 10;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    writeln!(out, "{}┌─ {} ─┐", INDENT, ellipsize(title, SAFE_TABLE_WIDTH - 6))?;
    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Element", "Atoms", "Distribution",
    )?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;

    for (name, count) in data.iter().take(MAX_DISTRIBUTION_ROWS) {
        let pct = percent(*count, total);
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            ellipsize(name, name_w),
            count,
            dist_cell,
        )?;
    }

    if data.len() > MAX_DISTRIBUTION_ROWS {
        writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more elements)", data.len() - MAX_DISTRIBUTION_ROWS),
        )?;
    }

    writeln!(out, "{}", rule("└", "┴", "┘"))
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = (((pct / 100.0) * max_width as f64).round() as usize).min(max_width);
    let empty = max_width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
