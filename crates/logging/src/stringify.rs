//! crates/logging/src/stringify.rs
//! Compact text rendering for message parts and attached values.
//!
//! Strings render verbatim, numbers in decimal, `null` for null values and
//! `undefined` for values that are missing altogether. Arrays render as
//! `[a,b]` and objects as `{k:v}`, each element stringified recursively.
//! Object fields whose name starts with [`PRIVATE_PREFIX`] are dropped at
//! every depth before rendering.

use std::fmt::Write as _;

use serde_json::Value;

/// Field-name prefix marking internal fields that are stripped when rendering.
pub const PRIVATE_PREFIX: char = '_';

/// Token rendered for a value that was never provided.
pub const UNDEFINED: &str = "undefined";

/// Renders `value` as compact text.
///
/// # Examples
///
/// ```
/// use logging::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!("plain")), "plain");
/// assert_eq!(stringify(&json!(42)), "42");
/// assert_eq!(stringify(&json!({"a": 1, "_cache": 2})), "{a:1}");
/// assert_eq!(stringify(&json!([1, "two", null])), "[1,two,null]");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Renders an optional value, using [`UNDEFINED`] when it is absent.
#[must_use]
pub fn stringify_optional(value: Option<&Value>) -> String {
    value.map_or_else(|| UNDEFINED.to_owned(), stringify)
}

/// Renders each value and joins the results with a single space.
#[must_use]
pub fn stringify_all<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut out = String::new();
    for (index, value) in values.into_iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        write_value(&mut out, value);
    }
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(flag) => {
            let _ = write!(out, "{flag}");
        }
        Value::Number(number) => {
            let _ = write!(out, "{number}");
        }
        Value::String(text) => out.push_str(text),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            let visible = fields
                .iter()
                .filter(|(name, _)| !name.starts_with(PRIVATE_PREFIX));
            for (index, (name, field)) in visible.enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_key(out, name);
                out.push(':');
                write_value(out, field);
            }
            out.push('}');
        }
    }
}

fn write_key(out: &mut String, key: &str) {
    if needs_quoting(key) {
        // Value::String always serializes; the fallback keeps the raw key.
        match serde_json::to_string(key) {
            Ok(quoted) => out.push_str(&quoted),
            Err(_) => out.push_str(key),
        }
    } else {
        out.push_str(key);
    }
}

fn needs_quoting(key: &str) -> bool {
    key.is_empty()
        || key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '[' | ']' | ':' | ',' | '"'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_pass_through_verbatim() {
        assert_eq!(stringify(&json!("a \"quoted\" word")), "a \"quoted\" word");
    }

    #[test]
    fn numbers_render_in_decimal() {
        assert_eq!(stringify(&json!(-7)), "-7");
        assert_eq!(stringify(&json!(2.5)), "2.5");
    }

    #[test]
    fn null_and_missing_render_as_tokens() {
        assert_eq!(stringify(&Value::Null), "null");
        assert_eq!(stringify_optional(None), "undefined");
        assert_eq!(stringify_optional(Some(&json!(1))), "1");
    }

    #[test]
    fn nested_objects_render_compactly() {
        let value = json!({"outer": {"inner": [true, false]}});
        assert_eq!(stringify(&value), "{outer:{inner:[true,false]}}");
    }

    #[test]
    fn private_fields_are_stripped_recursively() {
        let value = json!({"name": "job", "_id": 9, "child": {"_secret": 1, "ok": 2}});
        assert_eq!(stringify(&value), "{child:{ok:2},name:job}");
    }

    #[test]
    fn awkward_keys_are_quoted() {
        let value = json!({"two words": 1, "": 2, "a:b": 3});
        assert_eq!(stringify(&value), "{\"\":2,\"a:b\":3,\"two words\":1}");
    }

    #[test]
    fn stringify_all_joins_with_spaces() {
        let values = [json!("count"), json!(3), json!({"k": "v"})];
        assert_eq!(stringify_all(&values), "count 3 {k:v}");
    }

    #[test]
    fn stringify_all_of_nothing_is_empty() {
        assert_eq!(stringify_all(&[]), "");
    }
}
