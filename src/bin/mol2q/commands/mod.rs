mod query;
mod summary;

use query::{run_atoms, run_bonds, run_info};
use summary::run_summary;

use anyhow::Result;

use crate::cli::Command;

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Info(args) => run_info(args),
        Command::Atoms(args) => run_atoms(args),
        Command::Bonds(args) => run_bonds(args),
        Command::Summary(args) => run_summary(args),
    }
}
