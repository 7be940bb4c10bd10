use super::Section;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("missing or out-of-order {section} section")]
    MissingSection { section: Section },

    #[error("malformed MOLECULE header: {details} (at line {line})")]
    MalformedHeader { line: usize, details: String },

    #[error("malformed {section} record: {details} (at line {line})")]
    MalformedRecord {
        section: Section,
        line: usize,
        details: String,
    },

    #[error("duplicate ATOM serial '{serial}' (at line {line})")]
    DuplicateSerial { serial: String, line: usize },

    #[error("bond references atom serial '{serial}' which has no ATOM record")]
    DanglingBondReference { serial: String },
}

impl Error {
    pub fn missing_section(section: Section) -> Self {
        Self::MissingSection { section }
    }

    pub fn malformed_header(line: usize, details: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line,
            details: details.into(),
        }
    }

    pub fn malformed_record(section: Section, line: usize, details: impl Into<String>) -> Self {
        Self::MalformedRecord {
            section,
            line,
            details: details.into(),
        }
    }

    pub fn duplicate_serial(line: usize, serial: impl Into<String>) -> Self {
        Self::DuplicateSerial {
            serial: serial.into(),
            line,
        }
    }

    pub fn dangling_bond_reference(serial: impl Into<String>) -> Self {
        Self::DanglingBondReference {
            serial: serial.into(),
        }
    }
}
