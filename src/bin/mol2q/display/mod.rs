mod error;
mod output;
mod tables;

pub use error::print_error;
pub use output::{write_atom_values, write_groups, write_header_value, write_json};
pub use tables::{Summary, print_summary};
