use thiserror::Error;

/// Errors from a single lookup on a [`ParsedMolecule`](crate::ParsedMolecule).
///
/// A failed query leaves the molecule untouched and usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The requested kind is not one of the accepted names.
    #[error("invalid query kind '{kind}' (expected one of: {})", expected.join(", "))]
    InvalidQueryKind {
        /// What the caller asked for.
        kind: String,
        /// Every name accepted at that call site.
        expected: &'static [&'static str],
    },

    /// No atom in the molecule has this element symbol.
    #[error("no atoms of element '{0}' in molecule")]
    UnknownElement(String),
}

impl QueryError {
    pub fn invalid_kind(kind: &str, expected: &'static [&'static str]) -> Self {
        Self::InvalidQueryKind {
            kind: kind.to_string(),
            expected,
        }
    }
}
