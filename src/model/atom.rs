use serde::Serialize;

/// One record of the `@<TRIPOS>ATOM` section.
///
/// `serial` is the file's own atom identifier and is kept as an opaque
/// string: files are free to number atoms non-contiguously.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomRecord {
    pub serial: String,
    pub name: String,
    pub coords: [f64; 3],
    pub atom_type: String,
    pub subset_id: String,
    pub subset_name: String,
    pub charge: String,
}

impl AtomRecord {
    /// Element symbol used for grouping: the first character of the atom name.
    pub fn element(&self) -> &str {
        self.name
            .char_indices()
            .nth(1)
            .map_or(self.name.as_str(), |(end, _)| &self.name[..end])
    }
}
