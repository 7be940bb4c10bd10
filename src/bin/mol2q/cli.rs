use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "mol2q",
    about = "Query TRIPOS MOL2 molecule files",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a MOLECULE header field
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Print one field of every atom of an element
    #[command(visible_alias = "a")]
    Atoms(AtomsArgs),

    /// Print a bond grouping
    #[command(visible_alias = "b")]
    Bonds(BondsArgs),

    /// Summarize header, element distribution and bond consistency
    #[command(visible_alias = "s")]
    Summary(SummaryArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input MOL2 file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Decoder options shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Parsing")]
pub struct ParseFlags {
    /// Handling of ATOM records that reuse a serial
    #[arg(long, value_name = "POLICY", default_value = "overwrite")]
    pub duplicates: DuplicatePolicy,

    /// Which atoms each bond is filed under
    #[arg(long = "bond-direction", value_name = "MODE", default_value = "asymmetric")]
    pub bond_direction: BondDirection,

    /// Fail if a bond names an atom serial with no ATOM record
    #[arg(long = "check-bonds")]
    pub check_bonds: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Header field: name, general, type, charge, status_bits, comment
    #[arg(value_name = "KIND", default_value = "name")]
    pub kind: String,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub parse: ParseFlags,
}

#[derive(Args)]
pub struct AtomsArgs {
    /// Element symbol (first character of the atom name)
    #[arg(value_name = "ELEMENT")]
    pub element: String,

    /// Atom field: atom_name, coords, atom_type, subset_id, subset_name, charge
    #[arg(value_name = "KIND", default_value = "atom_name")]
    pub kind: String,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub parse: ParseFlags,
}

#[derive(Args)]
pub struct BondsArgs {
    /// Bond grouping: atoms_bond, bonds_type
    #[arg(value_name = "KIND", default_value = "atoms_bond")]
    pub kind: String,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub parse: ParseFlags,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub parse: ParseFlags,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum DuplicatePolicy {
    /// Later record replaces the earlier one
    #[default]
    Overwrite,
    /// Fail on the second record
    Reject,
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum BondDirection {
    /// File each bond under its first atom only
    #[default]
    Asymmetric,
    /// File each bond under both atoms
    Mirrored,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn atoms_command_takes_element_then_kind() {
        let cli = Cli::try_parse_from(["mol2q", "atoms", "C", "coords", "-i", "x.mol2"]).unwrap();
        match cli.command {
            Command::Atoms(args) => {
                assert_eq!(args.element, "C");
                assert_eq!(args.kind, "coords");
                assert_eq!(args.io.input, Some(PathBuf::from("x.mol2")));
            }
            _ => panic!("expected atoms command"),
        }
    }

    #[test]
    fn parse_flags_default_to_lenient_policies() {
        let cli = Cli::try_parse_from(["mol2q", "info"]).unwrap();
        match cli.command {
            Command::Info(args) => {
                assert_eq!(args.kind, "name");
                assert!(matches!(args.parse.duplicates, DuplicatePolicy::Overwrite));
                assert!(matches!(args.parse.bond_direction, BondDirection::Asymmetric));
                assert!(!args.parse.check_bonds);
                assert!(!args.io.json);
            }
            _ => panic!("expected info command"),
        }
    }

    #[test]
    fn aliases_and_strict_flags_parse() {
        let cli = Cli::try_parse_from([
            "mol2q",
            "b",
            "bonds_type",
            "--duplicates",
            "reject",
            "--bond-direction",
            "mirrored",
            "--check-bonds",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Bonds(args) => {
                assert_eq!(args.kind, "bonds_type");
                assert!(matches!(args.parse.duplicates, DuplicatePolicy::Reject));
                assert!(matches!(args.parse.bond_direction, BondDirection::Mirrored));
                assert!(args.parse.check_bonds);
                assert!(args.io.json);
            }
            _ => panic!("expected bonds command"),
        }
    }
}
