//! Type conversion utilities for PostgreSQL AGE backend.
//!
//! Handles conversion between:
//! - agtype text output ↔ `serde_json::Value`
//! - property values ↔ Neo4j-style property type names

use serde_json::Value;

use crate::db::DbError;

/// Parse the text form of an agtype value.
///
/// agtype prints almost-JSON: values may carry `::vertex`, `::edge` or
/// `::numeric` annotations and floats may be `NaN`/`Infinity`. Annotations are
/// dropped and non-finite floats become `0.0` so they still read as floats.
pub fn parse_agtype(column: &str, text: &str) -> Result<Value, DbError> {
    let json = strip_agtype_extensions(text);
    serde_json::from_str(&json).map_err(|e| DbError::InvalidValue {
        column: column.to_string(),
        message: format!("{} (value: {})", e, text),
    })
}

fn strip_agtype_extensions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                while chars.peek().is_some_and(|c| c.is_ascii_alphanumeric() || *c == '_') {
                    chars.next();
                }
            }
            c if c.is_ascii_alphabetic() => {
                let mut word = String::from(c);
                while let Some(next) = chars.peek().copied().filter(char::is_ascii_alphanumeric) {
                    word.push(next);
                    chars.next();
                }
                match word.as_str() {
                    "NaN" | "Infinity" => out.push_str("0.0"),
                    _ => out.push_str(&word),
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Extract a string column, failing on anything else.
pub fn expect_string(column: &str, value: Value) -> Result<String, DbError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(DbError::InvalidValue {
            column: column.to_string(),
            message: format!("expected a string, got {}", other),
        }),
    }
}

/// Name the type of a property value the way Neo4j's schema procedures do.
pub fn property_type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "String",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Double",
        Value::Number(_) => "Long",
        Value::Array(items) => array_type_name(items),
        Value::Object(_) => "Map",
        Value::Null => "Null",
    }
}

fn array_type_name(items: &[Value]) -> &'static str {
    let mut element_types = items.iter().map(property_type_name);
    let Some(first) = element_types.next() else {
        return "List";
    };
    if element_types.any(|t| t != first) {
        return "List";
    }
    match first {
        "String" => "StringArray",
        "Long" => "LongArray",
        "Double" => "DoubleArray",
        "Boolean" => "BooleanArray",
        _ => "List",
    }
}

/// Quote a string as a SQL literal.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
