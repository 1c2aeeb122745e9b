use super::*;
use crate::error::SqlError;
use crate::value::Value;

fn row<const N: usize>(entries: [(&str, Value); N]) -> Row {
    Row::from(entries)
}

// ==================== INSERT ====================

#[test]
fn test_insert_single_row() {
    let sql = insert("t", &[row([("a", 1.into()), ("b", "x".into())])]).unwrap();
    assert_eq!(sql, "INSERT INTO t\n\tt(a, b)\nVALUES\n\t(1, 'x');");
}

#[test]
fn test_insert_row_shorthand() {
    let r = Row::new().set("id", 1).set("note", None::<&str>);
    assert_eq!(
        insert_row("notes", &r).unwrap(),
        "INSERT INTO notes\n\tnotes(id, note)\nVALUES\n\t(1, NULL);"
    );
}

#[test]
fn test_insert_multi_row() {
    let rows = [row([("a", 1.into())]), row([("a", 2.into())])];
    let sql = insert("t", &rows).unwrap();
    assert!(sql.contains("(1), \n\t(2)"));
    assert_eq!(sql, "INSERT INTO t\n\tt(a)\nVALUES\n\t(1), \n\t(2);");
}

#[test]
fn test_insert_reorders_to_first_row_columns() {
    let rows = [
        Row::new().set("a", 1).set("b", "x"),
        Row::new().set("b", "y").set("a", 2),
    ];
    let sql = insert("t", &rows).unwrap();
    assert!(sql.ends_with("(1, 'x'), \n\t(2, 'y');"));
}

#[test]
fn test_insert_escapes_values() {
    let r = Row::new().set("name", "O'Brien");
    assert!(insert_row("people", &r).unwrap().ends_with("('O''Brien');"));
}

#[test]
fn test_insert_rejects_empty_input() {
    assert!(insert("t", &[]).unwrap_err().is_validation());
    assert!(insert("t", &[Row::new()]).unwrap_err().is_validation());
}

#[test]
fn test_insert_rejects_heterogeneous_rows() {
    let missing = [Row::new().set("a", 1).set("b", 2), Row::new().set("a", 3)];
    assert!(insert("t", &missing).unwrap_err().is_validation());

    let renamed = [Row::new().set("a", 1), Row::new().set("c", 3)];
    let err = insert("t", &renamed).unwrap_err();
    assert_eq!(
        err,
        SqlError::Validation("INSERT row 1 has columns [c], expected [a]".into())
    );

    let extra = [Row::new().set("a", 1), Row::new().set("a", 2).set("b", 3)];
    assert!(insert("t", &extra).unwrap_err().is_validation());
}

#[test]
fn test_insert_rejects_bad_identifiers() {
    let r = Row::new().set("a", 1);
    assert!(insert_row("t; DROP TABLE x", &r).unwrap_err().is_invalid_identifier());

    let r = Row::new().set("a) VALUES (1); --", 1);
    assert!(insert_row("t", &r).unwrap_err().is_invalid_identifier());
}

#[test]
fn test_insert_quoted_and_dotted_identifiers() {
    let r = Row::new().set(r#""Order Id""#, 1);
    assert_eq!(
        insert_row("public.orders", &r).unwrap(),
        "INSERT INTO public.orders\n\tpublic.orders(\"Order Id\")\nVALUES\n\t(1);"
    );
}

#[test]
fn test_insert_raw_value() {
    let r = Row::new().set("id", 1).set("created_at", Value::raw("now()"));
    assert!(insert_row("t", &r).unwrap().ends_with("(1, now());"));
}

// ==================== UPDATE ====================

#[test]
fn test_update_with_where() {
    let sql = update("t", &row([("a", 1.into())]), Some("id=5")).unwrap();
    assert!(sql.contains("SET a = 1"));
    assert!(sql.ends_with("WHERE id=5;"));
    assert_eq!(sql, "UPDATE t\nSET a = 1\nWHERE id=5;");
}

#[test]
fn test_update_multiple_columns_without_where() {
    let r = Row::new().set("a", 1).set("b", "two").set("c", Value::Null);
    assert_eq!(
        update("t", &r, None).unwrap(),
        "UPDATE t\nSET a = 1,\n    b = 'two',\n    c = NULL;"
    );
}

#[test]
fn test_update_blank_where_is_omitted() {
    let sql = update("t", &Row::new().set("a", true), Some("   ")).unwrap();
    assert_eq!(sql, "UPDATE t\nSET a = TRUE;");
}

#[test]
fn test_update_rejects_empty_assignments() {
    assert!(update("t", &Row::new(), Some("id = 1")).unwrap_err().is_validation());
}

// ==================== CREATE TABLE ====================

#[test]
fn test_create_table() {
    let sql = create_table("users", &[("id", "bigint PRIMARY KEY"), ("name", "text NOT NULL")])
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE users (id bigint PRIMARY KEY,\n\tname text NOT NULL\n);"
    );
}

#[test]
fn test_create_table_rejects_bad_definitions() {
    assert!(create_table("t", &[]).unwrap_err().is_validation());
    assert!(create_table("t", &[("a", " ")]).unwrap_err().is_validation());
    assert!(create_table("t", &[("a", "int"), ("a", "text")])
        .unwrap_err()
        .is_validation());
    assert!(create_table("t", &[("bad name", "int")])
        .unwrap_err()
        .is_invalid_identifier());
}

// ==================== CALL ====================

#[test]
fn test_procedure_call_discards_names() {
    let args = Row::new().set("contact_id", "id1").set("age", 30).set("vip", false);
    assert_eq!(
        procedure_call("add_contact", &args).unwrap(),
        "CALL add_contact('id1', 30, FALSE);"
    );
}

#[test]
fn test_procedure_call_without_args() {
    assert_eq!(procedure_call("refresh_stats", &Row::new()).unwrap(), "CALL refresh_stats();");
}

// ==================== DROP TABLE ====================

#[test]
fn test_drop_table_if_exists() {
    assert_eq!(
        drop_table(&["t1", "t2"], true, DropBehavior::None).unwrap(),
        "DROP TABLE IF EXISTS t1, t2;"
    );
}

#[test]
fn test_drop_table_behaviors() {
    assert_eq!(drop_table(&["t"], false, DropBehavior::None).unwrap(), "DROP TABLE t;");
    assert_eq!(
        drop_table(&["t"], false, DropBehavior::Cascade).unwrap(),
        "DROP TABLE t CASCADE;"
    );
    assert_eq!(
        drop_table(&["t"], true, DropBehavior::Restrict).unwrap(),
        "DROP TABLE IF EXISTS t RESTRICT;"
    );
}

#[test]
fn test_drop_behavior_from_flags() {
    assert_eq!(DropBehavior::from_flags(false, false).unwrap(), DropBehavior::None);
    assert_eq!(DropBehavior::from_flags(true, false).unwrap(), DropBehavior::Cascade);
    assert_eq!(DropBehavior::from_flags(false, true).unwrap(), DropBehavior::Restrict);
    assert!(DropBehavior::from_flags(true, true).unwrap_err().is_validation());
}

#[test]
fn test_drop_table_rejects_empty_list() {
    assert!(drop_table(&[], false, DropBehavior::None).unwrap_err().is_validation());
}

// ==================== SELECT ====================

#[test]
fn test_select_basic() {
    assert_eq!(select(&["a"], "t").build().unwrap(), "SELECT a\nFROM t;");
}

#[test]
fn test_select_all_clauses_in_grammar_order() {
    let sql = select(&["dept", "COUNT(*) AS n"], "employees e")
        .distinct(true)
        .filter("e.active")
        .group_by(&["dept"])
        .having("COUNT(*) > 5")
        .order_by(&["n", "dept"])
        .order_desc(true)
        .offset(20)
        .fetch(5)
        .build()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT DISTINCT dept, COUNT(*) AS n\n\
         FROM employees e\n\
         WHERE e.active\n\
         GROUP BY dept\n\
         HAVING COUNT(*) > 5\n\
         ORDER BY n, dept DESC\n\
         OFFSET 20 ROWS\n\
         FETCH FIRST 5 ROWS ONLY;"
    );
}

#[test]
fn test_select_limit_and_offset() {
    let sql = select(&["a"], "t").limit(10).offset(5).build().unwrap();
    assert_eq!(sql, "SELECT a\nFROM t\nLIMIT 10\nOFFSET 5 ROWS;");
}

#[test]
fn test_select_rejects_limit_with_fetch() {
    let err = select(&["a"], "t").limit(10).fetch(5).build().unwrap_err();
    assert_eq!(
        err,
        SqlError::Validation("SELECT cannot combine LIMIT and FETCH".into())
    );
}

#[test]
fn test_select_order_desc_without_columns_is_omitted() {
    let sql = select(&["a"], "t").order_desc(true).build().unwrap();
    assert!(!sql.contains("ORDER BY"));
    assert!(!sql.contains("DESC"));
    assert_eq!(sql, "SELECT a\nFROM t;");
}

#[test]
fn test_select_ascending_order() {
    let sql = select(&["name", "age"], "people").order_by(&["age"]).build().unwrap();
    assert_eq!(sql, "SELECT name, age\nFROM people\nORDER BY age;");
}

#[test]
fn test_select_skips_blank_fragments() {
    let sql = select(&["a", " "], "t")
        .filter("")
        .having("  ")
        .group_by(&[""])
        .build()
        .unwrap();
    assert_eq!(sql, "SELECT a\nFROM t;");
}

#[test]
fn test_select_rejects_missing_parts() {
    assert!(select(&[], "t").build().unwrap_err().is_validation());
    assert!(select(&[""], "t").build().unwrap_err().is_validation());
    assert!(select(&["a"], " ").build().unwrap_err().is_validation());
}

// ==================== SqlBuilder config ====================

#[test]
fn test_unchecked_identifiers_pass_through() {
    let builder = SqlBuilder::new(
        BuilderConfig::new()
            .with_identifier_checks(false)
            .disable_logging(),
    );
    let r = Row::new().set("Weird Col", 1);
    assert_eq!(
        builder.insert_row("My Table", &r).unwrap(),
        "INSERT INTO My Table\n\tMy Table(Weird Col)\nVALUES\n\t(1);"
    );
    assert!(builder.drop_table(&[""], false, DropBehavior::None).is_err());
}

#[test]
fn test_builder_select_carries_config() {
    let builder = SqlBuilder::new(BuilderConfig::new().disable_logging());
    assert!(!builder.config().logging_enabled);
    let sql = builder.select(&["*"], "t").limit(1).build().unwrap();
    assert_eq!(sql, "SELECT *\nFROM t\nLIMIT 1;");
}

#[test]
fn test_value_errors_propagate() {
    let r = Row::new().set("a", "nul\0byte");
    assert!(insert_row("t", &r).unwrap_err().is_validation());
    assert!(update("t", &r, None).unwrap_err().is_validation());
    assert!(procedure_call("p", &r).unwrap_err().is_validation());
}

// ==================== Logging ====================

mod warn_capture {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Metadata, Subscriber, span};

    /// Counts WARN events on the statement target.
    #[derive(Clone, Default)]
    pub(super) struct WarnCounter(Arc<AtomicUsize>);

    impl WarnCounter {
        pub(super) fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Subscriber for WarnCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            let meta = event.metadata();
            if *meta.level() == Level::WARN && meta.target() == crate::log::TARGET {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }
}

use warn_capture::WarnCounter;

fn warnings_while(f: impl FnOnce()) -> usize {
    let counter = WarnCounter::default();
    tracing::subscriber::with_default(counter.clone(), f);
    counter.count()
}

#[test]
fn test_order_desc_without_columns_warns() {
    let warned = warnings_while(|| {
        select(&["a"], "t").order_desc(true).build().unwrap();
    });
    assert_eq!(warned, 1);
}

#[test]
fn test_order_desc_with_columns_does_not_warn() {
    let warned = warnings_while(|| {
        select(&["a"], "t").order_by(&["a"]).order_desc(true).build().unwrap();
    });
    assert_eq!(warned, 0);
}

#[test]
fn test_disabled_logging_suppresses_warning() {
    let builder = SqlBuilder::new(BuilderConfig::new().disable_logging());
    let warned = warnings_while(|| {
        builder.select(&["a"], "t").order_desc(true).build().unwrap();
    });
    assert_eq!(warned, 0);
}
