//! Reusable query predicate fragments.

use crate::error::Result;
use crate::sql::SqlValue;
use sqlx::sqlite::{Sqlite, SqlitePool};

/// A composable piece of a query: predicate text plus its positional
/// arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    sql: String,
    args: Vec<SqlValue>,
}

impl SqlFragment {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.args)
    }
}

/// Build an EXISTS subquery predicate over `table`.
///
/// The table name is inserted verbatim and must come from the caller's
/// own schema, never from user input. Conditions are equality pairs,
/// joined with `and` in registration order.
pub fn exists<I, V>(table: &str, conditions: I) -> SqlFragment
where
    I: IntoIterator<Item = (&'static str, V)>,
    V: Into<SqlValue>,
{
    let mut predicates = Vec::new();
    let mut args = Vec::new();
    for (column, value) in conditions {
        predicates.push(format!("{column} = ?"));
        args.push(value.into());
    }

    let sql = if predicates.is_empty() {
        format!("exists (select 1 from {table})")
    } else {
        format!(
            "exists (select 1 from {table} where {})",
            predicates.join(" and ")
        )
    };

    SqlFragment { sql, args }
}

/// Evaluate a boolean predicate fragment against the pool.
pub async fn check(pool: &SqlitePool, fragment: &SqlFragment) -> Result<bool> {
    let sql = format!("select {}", fragment.sql());
    let mut query = sqlx::query_scalar::<Sqlite, i64>(&sql);
    for arg in fragment.args() {
        query = match arg {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Integer(i) => query.bind(*i),
            SqlValue::Real(r) => query.bind(*r),
            SqlValue::Text(t) => query.bind(t.clone()),
        };
    }
    Ok(query.fetch_one(pool).await? != 0)
}
