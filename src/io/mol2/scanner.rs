use crate::io::{Section, error::Error};
use std::ops::Range;

const TAG_PREFIX: &str = "@<TRIPOS>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeMolecule,
    InHeader,
    InAtoms,
    InBonds,
    Done,
}

/// Payload lines of one section, tag line excluded.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    first_line: usize,
    lines: &'a [&'a str],
}

impl<'a> Region<'a> {
    pub(crate) fn new(first_line: usize, lines: &'a [&'a str]) -> Self {
        Self { first_line, lines }
    }

    /// Lines paired with their 1-based line number in the source text.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a str)> + use<'a> {
        let first = self.first_line;
        let lines = self.lines;
        lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (first + i, *line))
    }

    /// Line number of the first payload line, or of where it would be.
    #[inline]
    pub fn first_line(&self) -> usize {
        self.first_line
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The three regions located in a MOL2 text.
#[derive(Debug)]
pub struct Sections<'a> {
    lines: Vec<&'a str>,
    header: Range<usize>,
    atoms: Range<usize>,
    bonds: Range<usize>,
}

impl<'a> Sections<'a> {
    pub fn region(&self, section: Section) -> Region<'_> {
        let span = match section {
            Section::Molecule => &self.header,
            Section::Atom => &self.atoms,
            Section::Bond => &self.bonds,
        };
        Region::new(span.start + 1, &self.lines[span.clone()])
    }
}

/// Locates the first `MOLECULE`, `ATOM` and `BOND` sections in one forward pass.
///
/// Each region runs from the line after its tag up to the next tag line.
/// Tags before the first `MOLECULE` are ignored; an unrecognised tag between
/// the expected ones closes the current region and the scan skips ahead to
/// the expected tag. A known tag in the wrong place, or a tag that never
/// appears, is reported as a missing section.
pub fn scan(text: &str) -> Result<Sections<'_>, Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    let mut header = 0..0;
    let mut atoms = 0..0;
    let mut bonds = 0..0;

    let mut state = ScanState::BeforeMolecule;
    let mut open: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        let Some(tag) = tag_name(line) else {
            continue;
        };

        state = match state {
            ScanState::BeforeMolecule => {
                if is_tag(tag, Section::Molecule) {
                    open = Some(idx + 1);
                    ScanState::InHeader
                } else {
                    ScanState::BeforeMolecule
                }
            }
            ScanState::InHeader => {
                close(&mut open, idx, &mut header);
                if is_tag(tag, Section::Atom) {
                    open = Some(idx + 1);
                    ScanState::InAtoms
                } else if is_tag(tag, Section::Molecule) || is_tag(tag, Section::Bond) {
                    return Err(Error::missing_section(Section::Atom));
                } else {
                    ScanState::InHeader
                }
            }
            ScanState::InAtoms => {
                close(&mut open, idx, &mut atoms);
                if is_tag(tag, Section::Bond) {
                    open = Some(idx + 1);
                    ScanState::InBonds
                } else if is_tag(tag, Section::Molecule) || is_tag(tag, Section::Atom) {
                    return Err(Error::missing_section(Section::Bond));
                } else {
                    ScanState::InAtoms
                }
            }
            ScanState::InBonds | ScanState::Done => {
                close(&mut open, idx, &mut bonds);
                ScanState::Done
            }
        };

        if state == ScanState::Done {
            break;
        }
    }

    match state {
        ScanState::BeforeMolecule => Err(Error::missing_section(Section::Molecule)),
        ScanState::InHeader => Err(Error::missing_section(Section::Atom)),
        ScanState::InAtoms => Err(Error::missing_section(Section::Bond)),
        ScanState::InBonds | ScanState::Done => {
            close(&mut open, lines.len(), &mut bonds);
            Ok(Sections {
                lines,
                header,
                atoms,
                bonds,
            })
        }
    }
}

/// Name following `@<TRIPOS>` if `line` is a tag line.
fn tag_name(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let prefix = trimmed.get(..TAG_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(TAG_PREFIX) {
        return None;
    }
    Some(
        trimmed[TAG_PREFIX.len()..]
            .split_whitespace()
            .next()
            .unwrap_or_default(),
    )
}

fn is_tag(name: &str, section: Section) -> bool {
    name.eq_ignore_ascii_case(section.tag())
}

fn close(open: &mut Option<usize>, end: usize, span: &mut Range<usize>) {
    if let Some(start) = open.take() {
        *span = start..end;
    }
}
