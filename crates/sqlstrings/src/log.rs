//! `tracing` output for built statements.

use tracing::Level;

use crate::config::BuilderConfig;
use crate::error::SqlError;

pub(crate) const TARGET: &str = "sqlstrings.sql";

/// Truncate to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn display_sql<'a>(config: &BuilderConfig, sql: &'a str) -> std::borrow::Cow<'a, str> {
    match config.max_log_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)).into(),
        _ => sql.into(),
    }
}

/// Emit a built statement at the configured level.
pub(crate) fn statement(config: &BuilderConfig, kind: &'static str, sql: &str) {
    if !config.logging_enabled {
        return;
    }

    macro_rules! emit_at_level {
        ($level:expr, $($field:tt)*) => {
            match $level {
                Level::ERROR => tracing::error!($($field)*),
                Level::WARN  => tracing::warn!($($field)*),
                Level::INFO  => tracing::info!($($field)*),
                Level::DEBUG => tracing::debug!($($field)*),
                Level::TRACE => tracing::trace!($($field)*),
            }
        };
    }

    let sql = display_sql(config, sql);
    emit_at_level!(
        config.log_level,
        target: TARGET,
        kind,
        sql = %sql,
        "built statement"
    );
}

/// Record a rejected input and hand the error back.
pub(crate) fn rejected(config: &BuilderConfig, kind: &'static str, err: SqlError) -> SqlError {
    if config.logging_enabled {
        tracing::debug!(target: TARGET, kind, error = %err, "statement rejected");
    }
    err
}
