use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        collector.collect_parse_hints(err);
        collector.collect_query_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_parse_hints(&mut self, err: &Error) {
        use tripos_mol2::ParseError;
        use tripos_mol2::io::Section;

        let Some(parse_err) = err.downcast_ref::<ParseError>() else {
            return;
        };
        self.has_typed_hints = true;

        match parse_err {
            ParseError::Io { source } => self.collect_std_io_hints(source),

            ParseError::MissingSection { section } => {
                self.add(format!("No usable @<TRIPOS>{} tag was found", section.tag()));
                self.add("Sections must appear in order: MOLECULE, ATOM, BOND");
                self.add("Tags are matched on their own line, ignoring case and surrounding spaces");
            }

            ParseError::MalformedHeader { line, .. } => {
                self.add(format!("Check the MOLECULE block near line {line}"));
                self.add("The second header line must hold exactly five integer counts");
                self.add("Example: `3 2 0 0 0` for three atoms and two bonds");
            }

            ParseError::MalformedRecord { section, line, .. } => {
                self.add(format!("Inspect the {section} record at line {line}"));
                match section {
                    Section::Atom => {
                        self.add("ATOM records need: id name x y z type subst_id subst_name charge");
                        self.add("Coordinates must be finite decimal numbers");
                    }
                    Section::Bond => {
                        self.add("BOND records need: id origin_atom target_atom type");
                    }
                    Section::Molecule => {}
                }
            }

            ParseError::DuplicateSerial { serial, line } => {
                self.add(format!("Atom serial '{serial}' is declared again at line {line}"));
                self.add("Use --duplicates overwrite to keep the later record");
            }

            ParseError::DanglingBondReference { serial } => {
                self.add(format!("No ATOM record carries serial '{serial}'"));
                self.add("Drop --check-bonds to accept bonds to undeclared atoms");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &io::Error) {
        use io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::InvalidData => {
                self.add("Input is not valid UTF-8 text");
                self.add("Verify the file is a text MOL2 file and not compressed");
            }
            ErrorKind::UnexpectedEof => {
                self.add("Unexpected end of file encountered");
                self.add("The file may be truncated or incomplete");
            }
            _ => {
                self.add("I/O operation failed");
                self.add("Check the file path and permissions");
            }
        }
    }

    fn collect_query_hints(&mut self, err: &Error) {
        use tripos_mol2::QueryError;

        let Some(query_err) = err.downcast_ref::<QueryError>() else {
            return;
        };
        self.has_typed_hints = true;

        match query_err {
            QueryError::InvalidQueryKind { expected, .. } => {
                self.add(format!("Valid kinds here: {}", expected.join(", ")));
            }
            QueryError::UnknownElement(_) => {
                self.add("Elements are keyed by the first character of the atom name");
                self.add("Run `mol2q summary` to list the elements present");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Provide input via -i/--input or pipe data to stdin");
        } else if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
        } else if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
