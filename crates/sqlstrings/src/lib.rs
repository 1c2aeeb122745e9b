//! # sqlstrings
//!
//! Postgres-flavored SQL statement strings from structured inputs.
//!
//! ## Features
//!
//! - **Typed literals**: values are a tagged [`Value`] enum, rendered with
//!   documented quoting rules (see [`value`])
//! - **Checked names**: table, column and procedure names are parsed as
//!   identifiers before interpolation
//! - **Fail fast**: empty mappings, mismatched rows and conflicting flags are
//!   errors, not malformed SQL
//! - **Pure**: no connection, no I/O; every call returns a `String`
//!
//! ## Example
//!
//! ```
//! use sqlstrings::{create_table, drop_table, procedure_call, DropBehavior, Row};
//!
//! let sql = create_table("contacts", &[("id", "text PRIMARY KEY"), ("name", "text")])?;
//! assert_eq!(sql, "CREATE TABLE contacts (id text PRIMARY KEY,\n\tname text\n);");
//!
//! let args = Row::new().set("id", "c1").set("name", "Ann");
//! assert_eq!(procedure_call("add_contact", &args)?, "CALL add_contact('c1', 'Ann');");
//!
//! let sql = drop_table(&["contacts"], true, DropBehavior::Cascade)?;
//! assert_eq!(sql, "DROP TABLE IF EXISTS contacts CASCADE;");
//! # Ok::<(), sqlstrings::SqlError>(())
//! ```

pub mod config;
pub mod error;
pub mod ident;
mod log;
pub mod prelude;
pub mod row;
pub mod stmt;
pub mod value;

pub use config::BuilderConfig;
pub use error::{SqlError, SqlResult};
pub use ident::{Ident, IdentPart};
pub use row::Row;
pub use stmt::{
    DropBehavior, Select, SqlBuilder, create_table, drop_table, insert, insert_row,
    procedure_call, select, update,
};
pub use value::{Value, parse_literal, write_val};
