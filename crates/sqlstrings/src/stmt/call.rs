//! CALL statements.

use super::SqlBuilder;
use crate::error::SqlResult;
use crate::row::Row;

impl SqlBuilder {
    /// Build a procedure `CALL`.
    ///
    /// Argument names are ignored; values are passed positionally in the
    /// row's order. An empty row gives `CALL name();`.
    pub fn procedure_call(&self, name: &str, args: &Row) -> SqlResult<String> {
        self.finish("call", self.build_call(name, args))
    }

    fn build_call(&self, name: &str, args: &Row) -> SqlResult<String> {
        let mut sql = format!("CALL {}(", self.name(name)?);
        for (i, value) in args.values().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            value.write_literal(&mut sql)?;
        }
        sql.push_str(");");
        Ok(sql)
    }
}
