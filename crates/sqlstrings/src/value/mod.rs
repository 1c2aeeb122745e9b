//! SQL literal rendering for typed values.
//!
//! Every value interpolated into a statement goes through [`Value`]. Callers
//! pick the variant explicitly, so formatting never has to guess a type.
//!
//! | Variant | Literal |
//! |---|---|
//! | `Null` | `NULL` |
//! | `Bool` | `TRUE` / `FALSE` |
//! | `Int` | `42`, `-7` |
//! | `Float` | `1.0`, `2.5e-7`, `'NaN'::float8` |
//! | `Text` | `'it''s'` |
//! | `Bytes` | `'\x00ff'::bytea` |
//! | `Date` | `DATE '2024-01-31'` |
//! | `Timestamp` | `TIMESTAMP '2024-01-31 08:30:00'` |
//! | `TimestampTz` | `TIMESTAMPTZ '2024-01-31 08:30:00+00:00'` |
//! | `Uuid` | `'…'::uuid` |
//! | `Json` | `'{"a":1}'::jsonb` |
//! | `Raw` | inserted verbatim |
//!
//! Text uses standard-conforming strings: the only escape is doubling `'`.
//! Backslashes are ordinary characters. NUL cannot be stored in Postgres text
//! or jsonb and is rejected in both.
//!
//! Dates use Postgres year numbering: there is no year 0, so chrono year `0`
//! is written `0001-… BC` and year `-44` is `0045-… BC` (the ` BC` suffix goes
//! after the time and offset). Years past 9999 are written with more digits
//! and no sign, e.g. `DATE '10000-03-15'`.

mod parse;

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::error::{SqlError, SqlResult};

pub use parse::parse_literal;

pub(crate) const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// A value to be rendered as a SQL literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
    /// Trusted SQL expression, e.g. `now()` or `DEFAULT`.
    Raw(String),
}

impl Value {
    /// A raw SQL expression inserted without quoting.
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    /// Map a JSON value onto the closest variant.
    ///
    /// Scalars become `Null`/`Bool`/`Int`/`Float`/`Text`; arrays and objects
    /// stay `Json`. Use `Value::Json(..)` directly to keep a scalar as jsonb.
    pub fn from_json(json: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match json {
            J::Null => Self::Null,
            J::Bool(b) => Self::Bool(b),
            J::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Json(J::Number(n)), Self::Float),
            },
            J::String(s) => Self::Text(s),
            other => Self::Json(other),
        }
    }

    /// Short name of the variant, used in log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::TimestampTz(_) => "timestamptz",
            Self::Uuid(_) => "uuid",
            Self::Json(_) => "json",
            Self::Raw(_) => "raw",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Render the value as a SQL literal.
    pub fn to_literal(&self) -> SqlResult<String> {
        let mut out = String::new();
        self.write_literal(&mut out)?;
        Ok(out)
    }

    /// Append the SQL literal for this value to `out`.
    ///
    /// On error nothing is appended.
    pub fn write_literal(&self, out: &mut String) -> SqlResult<()> {
        match self {
            Self::Null => out.push_str("NULL"),
            Self::Bool(true) => out.push_str("TRUE"),
            Self::Bool(false) => out.push_str("FALSE"),
            Self::Int(i) => {
                let _ = write!(out, "{i}");
            }
            Self::Float(f) => write_float(*f, out),
            Self::Text(s) => {
                if s.contains('\0') {
                    return Err(SqlError::validation(
                        "text value cannot contain NUL character",
                    ));
                }
                write_quoted(s, out);
            }
            Self::Bytes(bytes) => {
                out.reserve(bytes.len() * 2 + 12);
                out.push_str("'\\x");
                for b in bytes {
                    let _ = write!(out, "{b:02x}");
                }
                out.push_str("'::bytea");
            }
            Self::Date(d) => {
                out.push_str("DATE '");
                let bc = write_date(*d, out);
                finish_era(bc, out);
            }
            Self::Timestamp(ts) => {
                out.push_str("TIMESTAMP '");
                let bc = write_date(ts.date(), out);
                let _ = write!(out, " {}", ts.time().format(TIME_FORMAT));
                finish_era(bc, out);
            }
            Self::TimestampTz(ts) => {
                let naive = ts.naive_utc();
                out.push_str("TIMESTAMPTZ '");
                let bc = write_date(naive.date(), out);
                let _ = write!(out, " {}+00:00", naive.time().format(TIME_FORMAT));
                finish_era(bc, out);
            }
            Self::Uuid(u) => {
                let _ = write!(out, "'{}'::uuid", u.hyphenated());
            }
            Self::Json(j) => {
                if json_has_nul(j) {
                    return Err(SqlError::validation(
                        "json value cannot contain NUL character",
                    ));
                }
                write_quoted(&j.to_string(), out);
                out.push_str("::jsonb");
            }
            Self::Raw(expr) => out.push_str(expr),
        }
        Ok(())
    }
}

/// Render `value` as a SQL literal.
pub fn write_val(value: &Value) -> SqlResult<String> {
    value.to_literal()
}

/// Write `YYYY-MM-DD` with the Postgres year numbering and report whether
/// the date is BC. Year 0 is 1 BC; years past 9999 get more digits, no sign.
fn write_date(d: NaiveDate, out: &mut String) -> bool {
    let year = d.year();
    let (shown, bc) = if year <= 0 {
        (1 - i64::from(year), true)
    } else {
        (i64::from(year), false)
    };
    let _ = write!(out, "{shown:04}-{:02}-{:02}", d.month(), d.day());
    bc
}

fn finish_era(bc: bool, out: &mut String) {
    if bc {
        out.push_str(" BC");
    }
    out.push('\'');
}

fn json_has_nul(j: &serde_json::Value) -> bool {
    use serde_json::Value as J;
    match j {
        J::String(s) => s.contains('\0'),
        J::Array(items) => items.iter().any(json_has_nul),
        J::Object(map) => map.iter().any(|(k, v)| k.contains('\0') || json_has_nul(v)),
        J::Null | J::Bool(_) | J::Number(_) => false,
    }
}

fn write_quoted(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
}

// Debug formatting is the shortest round-trip form and always keeps a '.' or
// an exponent, so the literal never reads back as an integer.
fn write_float(f: f64, out: &mut String) {
    if f.is_nan() {
        out.push_str("'NaN'::float8");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 {
            "'Infinity'::float8"
        } else {
            "'-Infinity'::float8"
        });
    } else {
        let _ = write!(out, "{f:?}");
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::TimestampTz(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
