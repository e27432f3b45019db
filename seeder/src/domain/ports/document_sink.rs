//! Port abstraction for writing table documents.

use async_trait::async_trait;
use camino::Utf8PathBuf;
use campus_data::TableBatch;

use super::define_port_error;

define_port_error! {
    /// Errors raised by document sink adapters.
    pub enum DocumentSinkError {
        /// The document could not be written.
        Write { table: String, message: String } => "writing {table} document failed: {message}",
    }
}

/// Port for persisting a table's JSON document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Write the document for `batch`, returning where it was written.
    async fn write_document(&self, batch: &TableBatch) -> Result<Utf8PathBuf, DocumentSinkError>;
}
