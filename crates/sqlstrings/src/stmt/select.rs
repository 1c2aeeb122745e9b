//! SELECT statements.

use std::fmt::Write as _;

use super::{SqlBuilder, clause};
use crate::config::BuilderConfig;
use crate::error::{SqlError, SqlResult};
use crate::log;

/// SELECT statement builder.
///
/// Column lists, the FROM expression and the WHERE/HAVING conditions are raw
/// SQL fragments and are not checked. Clauses are always emitted in grammar
/// order: SELECT, FROM, WHERE, GROUP BY, HAVING, ORDER BY, LIMIT, OFFSET,
/// FETCH.
#[derive(Debug, Clone)]
pub struct Select {
    config: BuilderConfig,
    columns: Vec<String>,
    from: String,
    distinct: bool,
    filter: Option<String>,
    group_by: Vec<String>,
    having: Option<String>,
    order_by: Vec<String>,
    order_desc: bool,
    limit: Option<u64>,
    offset: Option<u64>,
    fetch: Option<u64>,
}

impl SqlBuilder {
    /// Start a `SELECT` of `columns` from `from`.
    pub fn select(&self, columns: &[&str], from: &str) -> Select {
        Select {
            config: self.config.clone(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            from: from.to_string(),
            distinct: false,
            filter: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
            order_desc: false,
            limit: None,
            offset: None,
            fetch: None,
        }
    }
}

impl Select {
    /// `SELECT DISTINCT`.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Set the WHERE condition.
    pub fn filter(mut self, condition: &str) -> Self {
        self.filter = Some(condition.to_string());
        self
    }

    /// Set the GROUP BY columns.
    pub fn group_by(mut self, columns: &[&str]) -> Self {
        self.group_by = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Set the HAVING condition.
    pub fn having(mut self, condition: &str) -> Self {
        self.having = Some(condition.to_string());
        self
    }

    /// Set the ORDER BY columns.
    pub fn order_by(mut self, columns: &[&str]) -> Self {
        self.order_by = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Order descending. Has no effect without [`order_by`](Self::order_by)
    /// columns.
    pub fn order_desc(mut self, desc: bool) -> Self {
        self.order_desc = desc;
        self
    }

    /// Set LIMIT. Cannot be combined with [`fetch`](Self::fetch).
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set OFFSET (`OFFSET n ROWS`).
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Set FETCH (`FETCH FIRST n ROWS ONLY`). Cannot be combined with
    /// [`limit`](Self::limit).
    pub fn fetch(mut self, n: u64) -> Self {
        self.fetch = Some(n);
        self
    }

    /// Build the SQL string.
    pub fn build(&self) -> SqlResult<String> {
        match self.build_select() {
            Ok(sql) => {
                log::statement(&self.config, "select", &sql);
                Ok(sql)
            }
            Err(err) => Err(log::rejected(&self.config, "select", err)),
        }
    }

    fn build_select(&self) -> SqlResult<String> {
        let columns = non_blank(&self.columns);
        if columns.is_empty() {
            return Err(SqlError::validation("SELECT requires at least one column"));
        }
        let from = self.from.trim();
        if from.is_empty() {
            return Err(SqlError::validation("SELECT requires a FROM expression"));
        }
        // Postgres treats FETCH FIRST as a second LIMIT clause.
        if self.limit.is_some() && self.fetch.is_some() {
            return Err(SqlError::validation("SELECT cannot combine LIMIT and FETCH"));
        }

        let mut sql = String::from("SELECT ");
        if self.distinct {
            sql.push_str("DISTINCT ");
        }
        sql.push_str(&columns.join(", "));

        sql.push_str("\nFROM ");
        sql.push_str(from);

        if let Some(filter) = clause(self.filter.as_deref()) {
            sql.push_str("\nWHERE ");
            sql.push_str(filter);
        }

        let group_by = non_blank(&self.group_by);
        if !group_by.is_empty() {
            sql.push_str("\nGROUP BY ");
            sql.push_str(&group_by.join(", "));
        }

        if let Some(having) = clause(self.having.as_deref()) {
            sql.push_str("\nHAVING ");
            sql.push_str(having);
        }

        let order_by = non_blank(&self.order_by);
        if !order_by.is_empty() {
            sql.push_str("\nORDER BY ");
            sql.push_str(&order_by.join(", "));
            if self.order_desc {
                sql.push_str(" DESC");
            }
        } else if self.order_desc && self.config.logging_enabled {
            tracing::warn!(
                target: log::TARGET,
                "order_desc set without order_by columns; ORDER BY omitted"
            );
        }

        // Writing to a String cannot fail.
        if let Some(n) = self.limit {
            let _ = write!(sql, "\nLIMIT {n}");
        }
        if let Some(n) = self.offset {
            let _ = write!(sql, "\nOFFSET {n} ROWS");
        }
        if let Some(n) = self.fetch {
            let _ = write!(sql, "\nFETCH FIRST {n} ROWS ONLY");
        }

        sql.push(';');
        Ok(sql)
    }
}

fn non_blank(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}
