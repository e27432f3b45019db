//! PostgreSQL-backed table sink.
//!
//! Each row becomes one parameterised `INSERT` built from the table's schema
//! descriptor. Rows run sequentially on a single pooled connection with no
//! batching and no surrounding transaction.

use campus_data::TableBatch;
use campus_data::schema::SqlValue;
use diesel::pg::Pg;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_query;
use diesel::sql_types::{Bool, Double, Integer, Nullable, Text, Time, Timestamptz};
use diesel_async::RunQueryDsl;
use tracing::{debug, info};

use crate::domain::ports::{TableSink, TableSinkError};

use super::pool::{DbPool, PoolError};

/// Diesel-backed implementation of the table sink port.
#[derive(Clone)]
pub struct DieselTableSink {
    pool: DbPool,
}

impl DieselTableSink {
    /// Create a new sink with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TableSinkError {
    TableSinkError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error, table: &str) -> TableSinkError {
    let message = error.to_string();
    debug!(%message, table, "diesel insert failed");
    TableSinkError::query(table, message)
}

/// Render row values for the statement log, e.g. `[abc, 3, null]`.
pub(crate) fn render_values(row: &[SqlValue]) -> String {
    let rendered: Vec<String> = row.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

fn bind_value<'f>(
    query: BoxedSqlQuery<'f, Pg, SqlQuery>,
    value: &SqlValue,
) -> BoxedSqlQuery<'f, Pg, SqlQuery> {
    match value {
        SqlValue::Text(text) => query.bind::<Text, _>(text.clone()),
        SqlValue::Integer(number) => query.bind::<Integer, _>(*number),
        SqlValue::Double(number) => query.bind::<Double, _>(*number),
        SqlValue::Boolean(flag) => query.bind::<Bool, _>(*flag),
        SqlValue::Timestamp(at) => query.bind::<Timestamptz, _>(*at),
        SqlValue::NullableTimestamp(at) => query.bind::<Nullable<Timestamptz>, _>(*at),
        // Sent as text; the placeholder carries a `::point` cast.
        SqlValue::Point(point) => query.bind::<Text, _>(point.to_pg_literal()),
        SqlValue::Time(time) => query.bind::<Time, _>(*time),
    }
}

#[async_trait::async_trait]
impl TableSink for DieselTableSink {
    async fn insert_batch(&self, batch: &TableBatch) -> Result<usize, TableSinkError> {
        let table = batch.table_name();
        let expected = batch.schema().columns.len();
        if let Some(row) = batch.rows().iter().find(|row| row.len() != expected) {
            return Err(TableSinkError::row_shape(table, expected, row.len()));
        }
        if batch.rows().is_empty() {
            return Ok(0);
        }

        let statement = batch.schema().insert_statement();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        for row in batch.rows() {
            info!(
                table,
                statement = %statement,
                values = %render_values(row),
                "inserting row"
            );
            row.iter()
                .fold(sql_query(statement.as_str()).into_boxed::<Pg>(), bind_value)
                .execute(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, table))?;
        }

        Ok(batch.rows().len())
    }
}
