//! Decoded MOL2 data.
//!
//! - [`header`]: The `MOLECULE` section: name, declared counts, and the
//!   optional descriptive lines.
//! - [`atom`]: One `ATOM` record.
//! - [`groups`]: Insertion-ordered string → list mapping used for the
//!   element index and the bond groupings.
//! - [`table`]: Atom table with its element index, and the bond groupings.
//! - [`molecule`]: The immutable aggregate returned by parsing.

pub mod atom;
pub mod groups;
pub mod header;
pub mod molecule;
pub mod table;
