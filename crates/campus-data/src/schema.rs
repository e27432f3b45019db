//! Table schema descriptors shared by the JSON writer and the SQL inserter.
//!
//! Each record type names its destination table and its ordered columns via
//! [`TableRecord`]. Column order is the order of JSON keys and of `INSERT`
//! placeholders, so both persistence adapters agree without reflection.

use std::fmt;

use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::GenerationError;
use crate::geo::Point;

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// `text` or `varchar`.
    Text,
    /// `integer`.
    Integer,
    /// `double precision`.
    Double,
    /// `boolean`.
    Boolean,
    /// `timestamptz`.
    Timestamp,
    /// Nullable `timestamptz`.
    NullableTimestamp,
    /// Postgres `point`.
    Point,
    /// `time` without time zone.
    Time,
}

impl ColumnKind {
    /// Cast appended to the placeholder, if the column needs one.
    #[must_use]
    pub const fn placeholder_cast(self) -> &'static str {
        match self {
            Self::Point => "::point",
            _ => "",
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name, identical to the JSON key.
    pub name: &'static str,
    /// Storage type.
    pub kind: ColumnKind,
}

impl Column {
    /// Construct a column descriptor.
    #[must_use]
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind }
    }
}

/// Destination table and its ordered columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name.
    pub name: &'static str,
    /// Columns in insert order.
    pub columns: &'static [Column],
}

impl TableSchema {
    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name)
    }

    /// Parameterised single-row insert statement for this table.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_data::schema::{Column, ColumnKind, TableSchema};
    ///
    /// static COLUMNS: [Column; 2] = [
    ///     Column::new("building_id", ColumnKind::Text),
    ///     Column::new("building_coordinates", ColumnKind::Point),
    /// ];
    /// let schema = TableSchema { name: "buildings", columns: &COLUMNS };
    ///
    /// assert_eq!(
    ///     schema.insert_statement(),
    ///     r#"INSERT INTO "buildings" (building_id, building_coordinates) VALUES ($1, $2::point)"#
    /// );
    /// ```
    #[must_use]
    pub fn insert_statement(&self) -> String {
        let columns = self.column_names().collect::<Vec<_>>().join(", ");
        let placeholders = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("${}{}", index + 1, column.kind.placeholder_cast()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO \"{}\" ({columns}) VALUES ({placeholders})",
            self.name
        )
    }
}

/// A single column value ready to bind.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i32),
    /// Floating point value.
    Double(f64),
    /// Boolean value.
    Boolean(bool),
    /// Timestamp value.
    Timestamp(DateTime<Utc>),
    /// Optional timestamp value.
    NullableTimestamp(Option<DateTime<Utc>>),
    /// Point value.
    Point(Point),
    /// Time-of-day value.
    Time(NaiveTime),
}

impl SqlValue {
    /// Column kind this value binds as.
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        match self {
            Self::Text(_) => ColumnKind::Text,
            Self::Integer(_) => ColumnKind::Integer,
            Self::Double(_) => ColumnKind::Double,
            Self::Boolean(_) => ColumnKind::Boolean,
            Self::Timestamp(_) => ColumnKind::Timestamp,
            Self::NullableTimestamp(_) => ColumnKind::NullableTimestamp,
            Self::Point(_) => ColumnKind::Point,
            Self::Time(_) => ColumnKind::Time,
        }
    }
}

/// Conversion of a record field into a bindable value.
pub trait ToSqlValue {
    /// The field as a [`SqlValue`].
    fn to_sql_value(&self) -> SqlValue;
}

impl ToSqlValue for String {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Integer(*self)
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Double(*self)
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Boolean(*self)
    }
}

impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Timestamp(*self)
    }
}

impl ToSqlValue for Option<DateTime<Utc>> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::NullableTimestamp(*self)
    }
}

impl ToSqlValue for Point {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Point(*self)
    }
}

impl ToSqlValue for NaiveTime {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Time(*self)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Timestamp(value) | Self::NullableTimestamp(Some(value)) => {
                f.write_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::NullableTimestamp(None) => f.write_str("null"),
            Self::Point(point) => f.write_str(&point.to_pg_literal()),
            Self::Time(value) => write!(f, "{}", value.format("%H:%M:%S")),
        }
    }
}

/// A generated record that maps onto one table row.
///
/// Implementors serialise to a JSON object whose keys follow
/// [`TableRecord::schema`] column order, and [`TableRecord::row`] yields the
/// same values in the same order.
pub trait TableRecord: Serialize {
    /// Destination table.
    fn schema() -> &'static TableSchema;

    /// Column values in schema order.
    fn row(&self) -> Vec<SqlValue>;
}

/// Every record of one table, as bindable rows and as a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBatch {
    schema: &'static TableSchema,
    rows: Vec<Vec<SqlValue>>,
    document: String,
}

impl TableBatch {
    /// Render `records` into a batch.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Serialization`] when the records cannot be
    /// rendered to JSON.
    pub fn from_records<T: TableRecord>(records: &[T]) -> Result<Self, GenerationError> {
        let schema = T::schema();
        let document =
            serde_json::to_string_pretty(records).map_err(|err| GenerationError::Serialization {
                table: schema.name,
                message: err.to_string(),
            })?;
        Ok(Self {
            schema,
            rows: records.iter().map(TableRecord::row).collect(),
            document,
        })
    }

    /// Destination table.
    #[must_use]
    pub const fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Table name.
    #[must_use]
    pub const fn table_name(&self) -> &'static str {
        self.schema.name
    }

    /// Rows in generation order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<SqlValue>] {
        &self.rows
    }

    /// Pretty-printed JSON array of the records.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// File name the document is written to.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.schema.name)
    }
}
