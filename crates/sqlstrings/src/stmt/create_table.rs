//! CREATE TABLE statements.

use super::SqlBuilder;
use crate::error::{SqlError, SqlResult};

impl SqlBuilder {
    /// Build a `CREATE TABLE` from ordered `(column, type)` pairs.
    ///
    /// Type text is used verbatim, so it may carry constraints
    /// (`"bigint PRIMARY KEY"`, `"text NOT NULL DEFAULT ''"`).
    pub fn create_table(&self, table: &str, columns: &[(&str, &str)]) -> SqlResult<String> {
        self.finish("create_table", self.build_create_table(table, columns))
    }

    fn build_create_table(&self, table: &str, columns: &[(&str, &str)]) -> SqlResult<String> {
        if columns.is_empty() {
            return Err(SqlError::validation("CREATE TABLE requires at least one column"));
        }

        let mut defs = Vec::with_capacity(columns.len());
        for (i, (name, ty)) in columns.iter().enumerate() {
            if columns[..i].iter().any(|(prev, _)| prev == name) {
                return Err(SqlError::validation(format!(
                    "CREATE TABLE column '{name}' defined twice"
                )));
            }
            let ty = ty.trim();
            if ty.is_empty() {
                return Err(SqlError::validation(format!(
                    "CREATE TABLE column '{name}' has no type"
                )));
            }
            defs.push(format!("{} {ty}", self.name(name)?));
        }

        Ok(format!(
            "CREATE TABLE {} ({}\n);",
            self.name(table)?,
            defs.join(",\n\t")
        ))
    }
}
