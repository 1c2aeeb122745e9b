//! Convenient imports for typical `sqlstrings` usage.
//!
//! ```
//! use sqlstrings::prelude::*;
//! ```

pub use crate::{
    BuilderConfig, DropBehavior, Row, SqlBuilder, SqlError, SqlResult, Value, create_table,
    drop_table, insert, insert_row, procedure_call, select, update,
};
