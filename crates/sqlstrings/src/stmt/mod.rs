//! Statement builders.
//!
//! Every operation is a pure function from structured input to a SQL string
//! terminated with `;`. The free functions use [`BuilderConfig::default`];
//! construct a [`SqlBuilder`] to change identifier checks or logging.
//!
//! # Usage
//!
//! ```
//! use sqlstrings::{insert, select, update, Row};
//!
//! let row = Row::new().set("name", "alice").set("age", 30);
//! assert_eq!(
//!     insert("users", &[row])?,
//!     "INSERT INTO users\n\tusers(name, age)\nVALUES\n\t('alice', 30);"
//! );
//!
//! let sql = update("users", &Row::new().set("age", 31), Some("id = 7"))?;
//! assert_eq!(sql, "UPDATE users\nSET age = 31\nWHERE id = 7;");
//!
//! let sql = select(&["name"], "users").filter("age > 18").limit(10).build()?;
//! assert_eq!(sql, "SELECT name\nFROM users\nWHERE age > 18\nLIMIT 10;");
//! # Ok::<(), sqlstrings::SqlError>(())
//! ```

mod call;
mod create_table;
mod drop_table;
mod insert;
mod select;
mod update;

pub use drop_table::DropBehavior;
pub use select::Select;

use crate::config::BuilderConfig;
use crate::error::SqlResult;
use crate::ident::render_name;
use crate::log;
use crate::row::Row;

/// Statement builder carrying a [`BuilderConfig`].
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    config: BuilderConfig,
}

impl SqlBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Render a table/column/procedure name according to the config.
    fn name(&self, name: &str) -> SqlResult<String> {
        render_name(name, self.config.check_identifiers)
    }

    /// Log the outcome of building a `kind` statement.
    fn finish(&self, kind: &'static str, built: SqlResult<String>) -> SqlResult<String> {
        match built {
            Ok(sql) => {
                log::statement(&self.config, kind, &sql);
                Ok(sql)
            }
            Err(err) => Err(log::rejected(&self.config, kind, err)),
        }
    }
}

/// Treat blank clause fragments as absent.
fn clause(fragment: Option<&str>) -> Option<&str> {
    fragment.map(str::trim).filter(|s| !s.is_empty())
}

/// Build a multi-row `INSERT`. See [`SqlBuilder::insert`].
pub fn insert(table: &str, rows: &[Row]) -> SqlResult<String> {
    SqlBuilder::default().insert(table, rows)
}

/// Build a single-row `INSERT`. See [`SqlBuilder::insert_row`].
pub fn insert_row(table: &str, row: &Row) -> SqlResult<String> {
    SqlBuilder::default().insert_row(table, row)
}

/// Build an `UPDATE`. See [`SqlBuilder::update`].
pub fn update(table: &str, assignments: &Row, filter: Option<&str>) -> SqlResult<String> {
    SqlBuilder::default().update(table, assignments, filter)
}

/// Build a `CREATE TABLE`. See [`SqlBuilder::create_table`].
pub fn create_table(table: &str, columns: &[(&str, &str)]) -> SqlResult<String> {
    SqlBuilder::default().create_table(table, columns)
}

/// Build a procedure `CALL`. See [`SqlBuilder::procedure_call`].
pub fn procedure_call(name: &str, args: &Row) -> SqlResult<String> {
    SqlBuilder::default().procedure_call(name, args)
}

/// Build a `DROP TABLE`. See [`SqlBuilder::drop_table`].
pub fn drop_table(names: &[&str], if_exists: bool, behavior: DropBehavior) -> SqlResult<String> {
    SqlBuilder::default().drop_table(names, if_exists, behavior)
}

/// Start a `SELECT`. See [`Select`].
pub fn select(columns: &[&str], from: &str) -> Select {
    SqlBuilder::default().select(columns, from)
}

#[cfg(test)]
mod tests;
