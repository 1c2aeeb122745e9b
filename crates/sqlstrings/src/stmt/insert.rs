//! INSERT statements.

use super::SqlBuilder;
use crate::error::{SqlError, SqlResult};
use crate::row::Row;

impl SqlBuilder {
    /// Build an `INSERT` for one or more rows.
    ///
    /// Every row must have the same column set as the first row; values are
    /// written in the first row's column order. Layout:
    ///
    /// ```text
    /// INSERT INTO t
    ///     t(a, b)
    /// VALUES
    ///     (1, 'x'),
    ///     (2, 'y');
    /// ```
    ///
    /// (indentation is a tab; row groups are joined with `", \n\t"`).
    pub fn insert(&self, table: &str, rows: &[Row]) -> SqlResult<String> {
        self.finish("insert", self.build_insert(table, rows))
    }

    /// Build an `INSERT` for a single row.
    pub fn insert_row(&self, table: &str, row: &Row) -> SqlResult<String> {
        self.insert(table, std::slice::from_ref(row))
    }

    fn build_insert(&self, table: &str, rows: &[Row]) -> SqlResult<String> {
        let first = rows
            .first()
            .ok_or_else(|| SqlError::validation("INSERT requires at least one row"))?;
        if first.is_empty() {
            return Err(SqlError::validation("INSERT requires at least one column"));
        }

        let table = self.name(table)?;
        let columns: Vec<&str> = first.columns().collect();
        let column_sql = columns
            .iter()
            .map(|c| self.name(c))
            .collect::<SqlResult<Vec<_>>>()?
            .join(", ");

        let mut groups = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(shape_mismatch(i, row, &columns));
            }
            let mut group = String::from("(");
            for (j, column) in columns.iter().enumerate() {
                let value = row.get(column).ok_or_else(|| shape_mismatch(i, row, &columns))?;
                if j > 0 {
                    group.push_str(", ");
                }
                value.write_literal(&mut group)?;
            }
            group.push(')');
            groups.push(group);
        }

        Ok(format!(
            "INSERT INTO {table}\n\t{table}({column_sql})\nVALUES\n\t{};",
            groups.join(", \n\t")
        ))
    }
}

fn shape_mismatch(index: usize, row: &Row, expected: &[&str]) -> SqlError {
    SqlError::validation(format!(
        "INSERT row {index} has columns [{}], expected [{}]",
        row.columns().collect::<Vec<_>>().join(", "),
        expected.join(", ")
    ))
}
