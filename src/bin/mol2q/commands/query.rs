use std::io::{self, Write};

use anyhow::Result;

use crate::cli::{AtomsArgs, BondsArgs, InfoArgs};
use crate::config::build_parse_options;
use crate::display::{write_atom_values, write_groups, write_header_value, write_json};
use crate::io::load_molecule;

pub fn run_info(args: InfoArgs) -> Result<()> {
    let molecule = load_molecule(&args.io, &build_parse_options(&args.parse))?;
    let value = molecule.get_information(&args.kind)?;

    let mut out = io::stdout().lock();
    if args.io.json {
        write_json(&mut out, &value)?;
    } else {
        write_header_value(&mut out, &value)?;
    }
    out.flush()?;
    Ok(())
}

pub fn run_atoms(args: AtomsArgs) -> Result<()> {
    let molecule = load_molecule(&args.io, &build_parse_options(&args.parse))?;
    let values = molecule.get_molecule(&args.element, &args.kind)?;

    tracing::debug!(element = %args.element, kind = %args.kind, matched = values.len(), "atom query");

    let mut out = io::stdout().lock();
    if args.io.json {
        write_json(&mut out, &values)?;
    } else {
        write_atom_values(&mut out, &values)?;
    }
    out.flush()?;
    Ok(())
}

pub fn run_bonds(args: BondsArgs) -> Result<()> {
    let molecule = load_molecule(&args.io, &build_parse_options(&args.parse))?;
    let groups = molecule.get_bond(&args.kind)?;

    let mut out = io::stdout().lock();
    if args.io.json {
        write_json(&mut out, groups)?;
    } else {
        write_groups(&mut out, groups)?;
    }
    out.flush()?;
    Ok(())
}
