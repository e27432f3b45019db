//! Port abstraction for inserting generated tables into a relational store.

use async_trait::async_trait;
use campus_data::TableBatch;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by table sink adapters.
    pub enum TableSinkError {
        /// A connection could not be established or checked out.
        Connection { message: String } => "table sink connection failed: {message}",
        /// A row was rejected by the store.
        Query { table: String, message: String } => "insert into {table} failed: {message}",
        /// A row does not have one value per schema column.
        RowShape { table: String, expected: usize, actual: usize } =>
            "row for {table} has {actual} values but the table has {expected} columns",
    }
}

/// Port for inserting one table's rows.
///
/// Implementations insert rows one at a time in batch order and stop at the
/// first failure. Rows already inserted are not rolled back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableSink: Send + Sync {
    /// Insert every row of `batch`, returning the number of rows inserted.
    async fn insert_batch(&self, batch: &TableBatch) -> Result<usize, TableSinkError>;
}
