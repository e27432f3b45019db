//! Error types for the campus-data crate.
//!
//! Generation failures are fatal for a seed run: the caller is expected to
//! abort and restart with a different seed or configuration. File output
//! failures are reported separately so callers can decide whether to treat
//! them as best-effort.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while generating seed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A freshly composed student representative ID is already taken.
    #[error("student representative ID '{representative_id}' is already assigned")]
    DuplicateStudentRepresentativeId {
        /// The colliding representative ID.
        representative_id: String,
    },

    /// A (major, academic year) group ran out of four-digit sequence numbers.
    #[error(
        "student sequence exhausted for major '{major_representative_id}' in year {gregorian_year}"
    )]
    StudentSequenceExhausted {
        /// Representative ID of the major.
        major_representative_id: String,
        /// Gregorian admission year.
        gregorian_year: i32,
    },

    /// A curriculum ran out of two-digit major representative IDs.
    #[error("major representative IDs exhausted for curriculum '{curriculum_id}'")]
    MajorSequenceExhausted {
        /// Identifier of the curriculum.
        curriculum_id: String,
    },

    /// No category carries the global announcement representative ID.
    #[error("forum category '{representative_id}' is required for global announcements")]
    MissingGlobalAnnouncementCategory {
        /// Representative ID that was searched for.
        representative_id: String,
    },

    /// A generator needs parent records that were not supplied.
    #[error("cannot generate {table}: no {parent} records available")]
    MissingParentRecords {
        /// Table being generated.
        table: &'static str,
        /// Parent collection that was empty.
        parent: &'static str,
    },

    /// A coordinate string could not be parsed.
    #[error("invalid coordinate '{value}': {message}")]
    InvalidCoordinate {
        /// Raw coordinate input.
        value: String,
        /// Parser error message.
        message: String,
    },

    /// A table could not be rendered to JSON.
    #[error("failed to serialise table '{table}': {message}")]
    Serialization {
        /// Table that failed to serialise.
        table: &'static str,
        /// Serializer error message.
        message: String,
    },
}

/// An integer column held a value outside its enum's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} value {value}")]
pub struct UnknownDiscriminant {
    /// Name of the enum.
    pub kind: &'static str,
    /// Rejected value.
    pub value: i32,
}

/// Errors raised while writing table documents to disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The output directory could not be created or opened.
    #[error("failed to open output directory '{path}': {message}")]
    Directory {
        /// Directory path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The document could not be written.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// Target file path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
