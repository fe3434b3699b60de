//! Record-to-SQL argument mapping.
//!
//! Instead of runtime reflection, each persisted record registers its
//! fields explicitly through [`SqlRecord::sql_fields`], in declaration
//! order. `to_sql_args` turns the registration into the ordered
//! column/value list the repositories bind into parameterized statements.

use crate::error::{Result, StorageError};
use crate::sql::to_snake_case;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A SQL-bindable value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::Real(f64::from(v))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Text(format_timestamp(v))
    }
}

/// An absent optional timestamp maps to an explicit null marker, never to
/// a missing column.
impl From<Option<DateTime<Utc>>> for SqlValue {
    fn from(v: Option<DateTime<Utc>>) -> Self {
        match v {
            Some(t) => t.into(),
            None => Self::Null,
        }
    }
}

/// Timestamps are stored as RFC3339 text with nanosecond precision.
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored RFC3339 timestamp back into `DateTime<Utc>`.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StorageError::mapping(format!("bad timestamp `{raw}`: {e}")))
}

/// One registered field of a persisted record.
#[derive(Debug, Clone)]
pub struct SqlField {
    name: &'static str,
    column: Option<&'static str>,
    value: Option<SqlValue>,
}

impl SqlField {
    /// A field persisted under its snake-cased name.
    pub fn new(name: &'static str, value: impl Into<SqlValue>) -> Self {
        Self {
            name,
            column: None,
            value: Some(value.into()),
        }
    }

    /// A field persisted under an explicit column name.
    pub fn with_column(
        name: &'static str,
        column: &'static str,
        value: impl Into<SqlValue>,
    ) -> Self {
        Self {
            name,
            column: Some(column),
            value: Some(value.into()),
        }
    }

    /// A field excluded from persistence (covers ignored scalars and
    /// ignored embedded records alike).
    pub fn skip(name: &'static str) -> Self {
        Self {
            name,
            column: None,
            value: None,
        }
    }

    fn column_name(&self) -> String {
        match self.column {
            Some(column) => column.to_string(),
            None => to_snake_case(self.name),
        }
    }
}

/// A record that can be mapped to SQL arguments.
pub trait SqlRecord {
    /// The record's fields, in declaration order.
    fn sql_fields(&self) -> Vec<SqlField>;
}

/// Ordered column/value pairs, in field declaration order.
pub type SqlArgs = Vec<(String, SqlValue)>;

/// Map a record to its ordered SQL argument list.
///
/// Skipped fields contribute nothing; two fields resolving to the same
/// column are a mapping error rather than a silent overwrite.
pub fn to_sql_args(record: &dyn SqlRecord) -> Result<SqlArgs> {
    let fields = record.sql_fields();
    let mut args = SqlArgs::with_capacity(fields.len());

    for field in fields {
        let column = field.column_name();
        let Some(value) = field.value else {
            continue;
        };
        if args.iter().any(|(existing, _)| *existing == column) {
            return Err(StorageError::mapping(format!(
                "field `{}` maps to duplicate column `{column}`",
                field.name
            )));
        }
        args.push((column, value));
    }

    Ok(args)
}

/// Parameterized INSERT for the given argument list.
pub fn insert_sql(table: &str, args: &SqlArgs) -> String {
    let columns: Vec<&str> = args.iter().map(|(c, _)| c.as_str()).collect();
    let placeholders = vec!["?"; args.len()];
    format!(
        "insert into {table} ({}) values ({})",
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Parameterized UPDATE for the given argument list, keyed on one column.
/// Bind the non-key values in order, then the key value.
pub fn update_sql(table: &str, args: &SqlArgs, key_column: &str) -> String {
    let sets: Vec<String> = args
        .iter()
        .filter(|(c, _)| c != key_column)
        .map(|(c, _)| format!("{c} = ?"))
        .collect();
    format!(
        "update {table} set {} where {key_column} = ?",
        sets.join(", ")
    )
}

/// Bind one mapped value onto a query.
pub fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(None::<String>),
        SqlValue::Integer(i) => query.bind(*i),
        SqlValue::Real(r) => query.bind(*r),
        SqlValue::Text(t) => query.bind(t.clone()),
    }
}
