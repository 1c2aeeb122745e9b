//! DROP TABLE statements.

use super::SqlBuilder;
use crate::error::{SqlError, SqlResult};

/// What happens to objects depending on a dropped table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropBehavior {
    /// No clause; the server default (RESTRICT) applies.
    #[default]
    None,
    /// `CASCADE`
    Cascade,
    /// `RESTRICT`
    Restrict,
}

impl DropBehavior {
    /// Convert a pair of flags. Both set is rejected.
    pub fn from_flags(cascade: bool, restrict: bool) -> SqlResult<Self> {
        match (cascade, restrict) {
            (true, true) => Err(SqlError::validation(
                "DROP TABLE cannot be both CASCADE and RESTRICT",
            )),
            (true, false) => Ok(Self::Cascade),
            (false, true) => Ok(Self::Restrict),
            (false, false) => Ok(Self::None),
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Cascade => " CASCADE",
            Self::Restrict => " RESTRICT",
        }
    }
}

impl SqlBuilder {
    /// Build a `DROP TABLE` for one or more tables.
    pub fn drop_table(
        &self,
        names: &[&str],
        if_exists: bool,
        behavior: DropBehavior,
    ) -> SqlResult<String> {
        self.finish("drop_table", self.build_drop_table(names, if_exists, behavior))
    }

    fn build_drop_table(
        &self,
        names: &[&str],
        if_exists: bool,
        behavior: DropBehavior,
    ) -> SqlResult<String> {
        if names.is_empty() {
            return Err(SqlError::validation("DROP TABLE requires at least one table"));
        }
        let names = names
            .iter()
            .map(|n| self.name(n))
            .collect::<SqlResult<Vec<_>>>()?;

        Ok(format!(
            "DROP TABLE {}{}{};",
            if if_exists { "IF EXISTS " } else { "" },
            names.join(", "),
            behavior.as_sql()
        ))
    }
}
