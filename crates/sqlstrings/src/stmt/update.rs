//! UPDATE statements.

use super::{SqlBuilder, clause};
use crate::error::{SqlError, SqlResult};
use crate::row::Row;

impl SqlBuilder {
    /// Build an `UPDATE` setting each column of `assignments`.
    ///
    /// `filter` is a raw WHERE condition; `None` (or a blank string) updates
    /// every row.
    pub fn update(
        &self,
        table: &str,
        assignments: &Row,
        filter: Option<&str>,
    ) -> SqlResult<String> {
        self.finish("update", self.build_update(table, assignments, filter))
    }

    fn build_update(
        &self,
        table: &str,
        assignments: &Row,
        filter: Option<&str>,
    ) -> SqlResult<String> {
        if assignments.is_empty() {
            return Err(SqlError::validation("UPDATE requires at least one SET column"));
        }

        let mut sql = format!("UPDATE {}\nSET ", self.name(table)?);
        for (i, (column, value)) in assignments.iter().enumerate() {
            if i > 0 {
                sql.push_str(",\n    ");
            }
            sql.push_str(&self.name(column)?);
            sql.push_str(" = ");
            value.write_literal(&mut sql)?;
        }

        if let Some(filter) = clause(filter) {
            sql.push_str("\nWHERE ");
            sql.push_str(filter);
        }
        sql.push(';');
        Ok(sql)
    }
}
