//! Seeding orchestration.
//!
//! Generates the dataset, writes every table document concurrently, then
//! inserts tables one by one in foreign-key order. Document failures are
//! logged and skipped; the first insert failure aborts the run.

use std::sync::Arc;

use campus_data::{GenerationConfig, GenerationError, TableBatch, generate_dataset};
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::ports::{DocumentSink, TableSink, TableSinkError};

/// Summary of a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedingOutcome {
    /// Number of tables generated.
    pub tables: usize,
    /// Table documents written successfully.
    pub documents_written: usize,
    /// Table documents that failed to write.
    pub documents_failed: usize,
    /// Rows inserted across every table.
    pub rows_inserted: usize,
}

/// Errors that abort a seeding run.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Dataset generation failed.
    #[error("seed data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Inserting a table failed.
    #[error("seed data persistence failed: {0}")]
    Persistence(#[from] TableSinkError),
}

/// Service that generates seed data and hands it to the configured sinks.
///
/// Either sink may be absent, in which case that output is skipped.
#[derive(Clone)]
pub struct SeedingService {
    documents: Option<Arc<dyn DocumentSink>>,
    tables: Option<Arc<dyn TableSink>>,
    clock: Arc<dyn Clock>,
}

impl SeedingService {
    /// Create a service with no sinks.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            documents: None,
            tables: None,
            clock,
        }
    }

    /// Write table documents through `sink`.
    pub fn with_document_sink(mut self, sink: Arc<dyn DocumentSink>) -> Self {
        self.documents = Some(sink);
        self
    }

    /// Insert tables through `sink`.
    pub fn with_table_sink(mut self, sink: Arc<dyn TableSink>) -> Self {
        self.tables = Some(sink);
        self
    }

    /// Reference time for generation: `explicit` when given, otherwise now.
    pub fn reference_time(&self, explicit: Option<DateTime<Utc>>) -> DateTime<Utc> {
        explicit.unwrap_or_else(|| self.clock.utc())
    }

    /// Generate the dataset for `config` and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`SeedingError::Generation`] when generation fails and
    /// [`SeedingError::Persistence`] on the first failed insert.
    pub async fn seed(&self, config: &GenerationConfig) -> Result<SeedingOutcome, SeedingError> {
        let dataset = generate_dataset(config)?;
        info!(
            seed = config.seed(),
            reference_time = %config.reference_time(),
            users = dataset.users.len(),
            students = dataset.students.len(),
            forum_posts = dataset.forum_posts.len(),
            "seed data generated"
        );
        let batches = dataset.batches()?;
        self.apply(&batches).await
    }

    /// Persist already generated `batches`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedingError::Persistence`] on the first failed insert.
    pub async fn apply(&self, batches: &[TableBatch]) -> Result<SeedingOutcome, SeedingError> {
        let mut outcome = SeedingOutcome {
            tables: batches.len(),
            ..SeedingOutcome::default()
        };

        match &self.documents {
            Some(sink) => {
                let (written, failed) = write_documents(sink.as_ref(), batches).await;
                outcome.documents_written = written;
                outcome.documents_failed = failed;
            }
            None => info!(reason = "disabled", "table documents skipped"),
        }

        match &self.tables {
            Some(sink) => outcome.rows_inserted = insert_tables(sink.as_ref(), batches).await?,
            None => info!(reason = "disabled", "database inserts skipped"),
        }

        Ok(outcome)
    }
}

async fn write_documents(sink: &dyn DocumentSink, batches: &[TableBatch]) -> (usize, usize) {
    let results = join_all(batches.iter().map(|batch| sink.write_document(batch))).await;

    let mut written = 0;
    let mut failed = 0;
    for (batch, result) in batches.iter().zip(results) {
        match result {
            Ok(path) => {
                written += 1;
                debug!(table = batch.table_name(), path = %path, "table document written");
            }
            Err(err) => {
                failed += 1;
                warn!(table = batch.table_name(), error = %err, "table document not written");
            }
        }
    }
    (written, failed)
}

async fn insert_tables(sink: &dyn TableSink, batches: &[TableBatch]) -> Result<usize, TableSinkError> {
    let mut total = 0;
    for batch in batches {
        let inserted = sink.insert_batch(batch).await?;
        info!(table = batch.table_name(), rows = inserted, "table inserted");
        total += inserted;
    }
    Ok(total)
}
