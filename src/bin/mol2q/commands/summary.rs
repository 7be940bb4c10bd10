use std::io::{self, Write};

use anyhow::Result;

use crate::cli::SummaryArgs;
use crate::config::build_parse_options;
use crate::display::{Summary, print_summary, write_json};
use crate::io::load_molecule;

pub fn run_summary(args: SummaryArgs) -> Result<()> {
    let molecule = load_molecule(&args.io, &build_parse_options(&args.parse))?;
    let summary = Summary::new(&molecule);

    let mut out = io::stdout().lock();
    if args.io.json {
        write_json(&mut out, &summary)?;
    } else {
        print_summary(&mut out, &summary)?;
    }
    out.flush()?;
    Ok(())
}
