//! Reading literals back into [`Value`]s.
//!
//! Accepts exactly the literal forms produced by [`Value::write_literal`]
//! (raw expressions excluded). Keywords are case-insensitive.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use super::{TIME_FORMAT, Value};
use crate::error::{SqlError, SqlResult};

/// Parse a SQL literal into a [`Value`].
///
/// # Example
/// ```
/// use sqlstrings::{parse_literal, Value};
///
/// assert_eq!(parse_literal("'it''s'")?, Value::Text("it's".into()));
/// assert_eq!(parse_literal("NULL")?, Value::Null);
/// # Ok::<(), sqlstrings::SqlError>(())
/// ```
pub fn parse_literal(input: &str) -> SqlResult<Value> {
    let s = input.trim();
    if s.is_empty() {
        return Err(SqlError::literal("empty literal"));
    }

    if s.starts_with('\'') {
        let (body, rest) = read_quoted(s)?;
        return parse_cast(body, rest.trim_start());
    }

    if let Some((keyword, rest)) = split_keyword(s) {
        match keyword.to_ascii_uppercase().as_str() {
            "NULL" if rest.is_empty() => return Ok(Value::Null),
            "TRUE" if rest.is_empty() => return Ok(Value::Bool(true)),
            "FALSE" if rest.is_empty() => return Ok(Value::Bool(false)),
            "DATE" => {
                let body = read_whole_quoted(rest)?;
                let (date, bc) = split_era(&body);
                return parse_date(date, bc).map(Value::Date);
            }
            "TIMESTAMP" => {
                let body = read_whole_quoted(rest)?;
                let (stamp, bc) = split_era(&body);
                let (date, time) = split_date_time(stamp)?;
                let ts = parse_date(date, bc)?.and_time(parse_time(time)?);
                return Ok(Value::Timestamp(ts));
            }
            "TIMESTAMPTZ" => {
                let body = read_whole_quoted(rest)?;
                let (stamp, bc) = split_era(&body);
                let (date, time) = split_date_time(stamp)?;
                let (time, offset) = split_offset(time)?;
                let local = parse_date(date, bc)?.and_time(parse_time(time)?);
                return utc_from_local(local, offset).map(Value::TimestampTz);
            }
            _ => {}
        }
        return Err(SqlError::literal(format!("unrecognized literal: {s}")));
    }

    parse_number(s)
}

fn parse_number(s: &str) -> SqlResult<Value> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(SqlError::literal(format!("unrecognized literal: {s}")));
    }
    if digits.contains(['.', 'e', 'E']) {
        s.parse::<f64>()
            .map(Value::Float)
            .map_err(|e| SqlError::literal(format!("bad float '{s}': {e}")))
    } else {
        s.parse::<i64>()
            .map(Value::Int)
            .map_err(|e| SqlError::literal(format!("bad integer '{s}': {e}")))
    }
}

/// Split a leading alphabetic keyword from the rest of `s`.
fn split_keyword(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((&s[..end], s[end..].trim_start()))
}

/// Read a `'...'` string at the start of `s`, returning its unescaped body and
/// the remaining input.
fn read_quoted(s: &str) -> SqlResult<(String, &str)> {
    let mut chars = s.char_indices().peekable();
    match chars.next() {
        Some((_, '\'')) => {}
        _ => return Err(SqlError::literal(format!("expected quoted string: {s}"))),
    }

    let mut body = String::new();
    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            if matches!(chars.peek(), Some((_, '\''))) {
                chars.next();
                body.push('\'');
            } else {
                return Ok((body, &s[i + 1..]));
            }
        } else {
            body.push(c);
        }
    }
    Err(SqlError::literal(format!("unterminated string: {s}")))
}

fn read_whole_quoted(s: &str) -> SqlResult<String> {
    let (body, rest) = read_quoted(s)?;
    if !rest.trim().is_empty() {
        return Err(SqlError::literal(format!("trailing input after string: {rest}")));
    }
    Ok(body)
}

fn parse_cast(body: String, rest: &str) -> SqlResult<Value> {
    if rest.is_empty() {
        return Ok(Value::Text(body));
    }
    let cast = rest
        .strip_prefix("::")
        .ok_or_else(|| SqlError::literal(format!("trailing input after string: {rest}")))?
        .trim();

    match cast.to_ascii_lowercase().as_str() {
        "float8" | "double precision" => match body.as_str() {
            "NaN" => Ok(Value::Float(f64::NAN)),
            "Infinity" => Ok(Value::Float(f64::INFINITY)),
            "-Infinity" => Ok(Value::Float(f64::NEG_INFINITY)),
            other => other
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| SqlError::literal(format!("bad float '{other}': {e}"))),
        },
        "bytea" => decode_hex(&body).map(Value::Bytes),
        "uuid" => Uuid::parse_str(&body)
            .map(Value::Uuid)
            .map_err(|e| SqlError::literal(format!("bad uuid '{body}': {e}"))),
        "json" | "jsonb" => serde_json::from_str(&body)
            .map(Value::Json)
            .map_err(|e| SqlError::literal(format!("bad json: {e}"))),
        "text" => Ok(Value::Text(body)),
        other => Err(SqlError::literal(format!("unsupported cast '::{other}'"))),
    }
}

/// Strip a trailing ` BC` era marker.
fn split_era(body: &str) -> (&str, bool) {
    match body.strip_suffix(" BC") {
        Some(rest) => (rest, true),
        None => (body, false),
    }
}

fn split_date_time(stamp: &str) -> SqlResult<(&str, &str)> {
    stamp
        .split_once(' ')
        .ok_or_else(|| SqlError::literal(format!("bad timestamp '{stamp}'")))
}

/// Read `YYYY-MM-DD` (year may have more than four digits) in Postgres year
/// numbering: BC year 1 is chrono year 0.
fn parse_date(date: &str, bc: bool) -> SqlResult<NaiveDate> {
    let bad = || SqlError::literal(format!("bad date '{date}'"));
    let number = |part: &str| -> Option<u32> {
        if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok()
        } else {
            None
        }
    };

    let mut parts = date.splitn(3, '-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (
            number(y).ok_or_else(bad)?,
            number(m).ok_or_else(bad)?,
            number(d).ok_or_else(bad)?,
        ),
        _ => return Err(bad()),
    };
    if year == 0 {
        return Err(SqlError::literal(format!("year 0 does not exist: '{date}'")));
    }
    let year = i32::try_from(year).map_err(|_| bad())?;
    let year = if bc { 1 - year } else { year };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)
}

fn parse_time(time: &str) -> SqlResult<NaiveTime> {
    NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|e| SqlError::literal(format!("bad time '{time}': {e}")))
}

/// Split `HH:MM:SS[.f]±HH:MM` into time and offset.
fn split_offset(time: &str) -> SqlResult<(&str, FixedOffset)> {
    let bad = || SqlError::literal(format!("bad time zone offset in '{time}'"));
    let at = time.rfind(['+', '-']).ok_or_else(bad)?;
    let (clock, offset) = time.split_at(at);
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let (hours, minutes) = offset[1..].split_once(':').ok_or_else(bad)?;
    let hours: i32 = hours.parse().map_err(|_| bad())?;
    let minutes: i32 = minutes.parse().map_err(|_| bad())?;
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(bad)?;
    Ok((clock, offset))
}

fn utc_from_local(local: NaiveDateTime, offset: FixedOffset) -> SqlResult<chrono::DateTime<Utc>> {
    local
        .and_local_timezone(offset)
        .single()
        .map(|ts| ts.with_timezone(&Utc))
        .ok_or_else(|| SqlError::literal(format!("timestamp out of range: {local}")))
}

fn decode_hex(body: &str) -> SqlResult<Vec<u8>> {
    let hex = body
        .strip_prefix("\\x")
        .ok_or_else(|| SqlError::literal("bytea literal must start with \\x"))?;
    if hex.len() % 2 != 0 {
        return Err(SqlError::literal("bytea hex has odd length"));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .filter(|pair| pair.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| SqlError::literal(format!("bad bytea hex: {hex}")))
        })
        .collect()
}
