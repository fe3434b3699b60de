//! SQL mapping helpers.
//!
//! Everything in here is a pure transformation: records become ordered
//! column/value argument lists, predicates become parameterized fragments.
//! The repositories own the actual execution.

mod fragment;
mod record;
mod records;
mod snake_case;

pub use fragment::{check, exists, SqlFragment};
pub use record::{
    bind_value, format_timestamp, insert_sql, parse_timestamp, to_sql_args, update_sql, SqlArgs,
    SqlField, SqlRecord, SqlValue,
};
pub use snake_case::to_snake_case;
