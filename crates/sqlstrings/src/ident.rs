//! SQL identifier checks.
//!
//! Table, column and procedure names are interpolated into statements as-is,
//! so they are parsed as Postgres identifiers first:
//!
//! - Unquoted parts are validated against: `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL and escape `"` as `""`
//! - Parts may be dotted: `public.users`, `public."UserTable"`
//!
//! # Example
//! ```
//! use sqlstrings::Ident;
//!
//! let t = Ident::parse("public.users")?;
//! assert_eq!(t.to_sql(), "public.users");
//! assert!(Ident::parse("users; DROP TABLE x").is_err());
//! # Ok::<(), sqlstrings::SqlError>(())
//! ```

use std::fmt;

use crate::error::{SqlError, SqlResult};

/// A part of a SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentPart {
    /// Unquoted identifier: must match `[A-Za-z_][A-Za-z0-9_$]*`.
    Unquoted(String),
    /// Quoted identifier: allows any characters except NUL.
    Quoted(String),
}

/// A SQL identifier (schema, table, column or procedure name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub parts: Vec<IdentPart>,
}

impl Ident {
    /// Create a single quoted identifier from arbitrary text.
    pub fn quoted(name: &str) -> SqlResult<Self> {
        if name.is_empty() {
            return Err(SqlError::invalid_identifier(name, "empty quoted identifier"));
        }
        if name.contains('\0') {
            return Err(SqlError::invalid_identifier(name, "contains NUL character"));
        }
        Ok(Self {
            parts: vec![IdentPart::Quoted(name.to_string())],
        })
    }

    /// Parse an identifier string, supporting dotted and quoted forms.
    pub fn parse(s: &str) -> SqlResult<Self> {
        let fail = |reason: String| SqlError::invalid_identifier(s, reason);

        if s.is_empty() {
            return Err(fail("identifier cannot be empty".into()));
        }
        if s.contains('\0') {
            return Err(fail("contains NUL character".into()));
        }

        let mut parts = Vec::new();
        let mut chars = s.chars().peekable();

        while chars.peek().is_some() {
            if !parts.is_empty() {
                match chars.next() {
                    Some('.') => {
                        if chars.peek().is_none() {
                            return Err(fail("trailing '.'".into()));
                        }
                    }
                    Some(c) => {
                        return Err(fail(format!("expected '.' between parts, got '{c}'")));
                    }
                    None => break,
                }
            }

            if chars.peek() == Some(&'"') {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('"') => {
                            if chars.peek() == Some(&'"') {
                                chars.next();
                                name.push('"');
                            } else {
                                break;
                            }
                        }
                        Some(c) => name.push(c),
                        None => return Err(fail("unclosed quoted identifier".into())),
                    }
                }
                if name.is_empty() {
                    return Err(fail("empty quoted identifier".into()));
                }
                parts.push(IdentPart::Quoted(name));
                continue;
            }

            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let ok = if name.is_empty() {
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !ok {
                    return Err(fail(format!("invalid character '{c}'")));
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(fail("empty identifier segment".into()));
            }
            parts.push(IdentPart::Unquoted(name));
        }

        Ok(Self { parts })
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            match part {
                IdentPart::Unquoted(s) => out.push_str(s),
                IdentPart::Quoted(s) => {
                    out.push('"');
                    out.push_str(&s.replace('"', "\"\""));
                    out.push('"');
                }
            }
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Render `name` for interpolation, parsing it first when `check` is set.
pub(crate) fn render_name(name: &str, check: bool) -> SqlResult<String> {
    if check {
        Ok(Ident::parse(name)?.to_sql())
    } else if name.is_empty() {
        Err(SqlError::invalid_identifier(name, "identifier cannot be empty"))
    } else {
        Ok(name.to_string())
    }
}
