//! Filesystem-backed document sink writing `<dir>/<table>.json`.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use campus_data::{DEFAULT_OUTPUT_DIR, TableBatch, write_table_document};

use crate::domain::ports::{DocumentSink, DocumentSinkError};

/// Writes table documents into one output directory.
///
/// Writes are blocking and run on Tokio's blocking pool so that many tables
/// can be written concurrently.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    output_dir: Utf8PathBuf,
}

impl JsonFileSink {
    /// Create a sink writing into `output_dir`, created on first write.
    pub fn new(output_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory documents are written to.
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }
}

impl Default for JsonFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

#[async_trait]
impl DocumentSink for JsonFileSink {
    async fn write_document(&self, batch: &TableBatch) -> Result<Utf8PathBuf, DocumentSinkError> {
        let table = batch.table_name();
        let output_dir = self.output_dir.clone();
        let owned = batch.clone();
        tokio::task::spawn_blocking(move || write_table_document(&output_dir, &owned))
            .await
            .map_err(|err| DocumentSinkError::write(table, err.to_string()))?
            .map_err(|err| DocumentSinkError::write(table, err.to_string()))
    }
}
