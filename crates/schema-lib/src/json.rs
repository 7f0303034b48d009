//! JSON rendering helpers used by explanation messages.
//!
//! Explanations echo the offending value back to the reader. The rendering
//! here mirrors `JSON.stringify(value, null, indent)`: compact output when the
//! indent is empty, pretty output using the indent as the per-level unit
//! otherwise. A missing value (`None`) stands for `undefined` and renders as
//! the bare word `undefined`.

use serde_json::Value;

/// Longest indent unit honoured when pretty-printing.
const MAX_INDENT_CHARS: usize = 10;

/// Render `value` as JSON, using `indent` as the indentation unit.
pub fn stringify(value: Option<&Value>, indent: &str) -> String {
    let Some(value) = value else {
        return "undefined".to_string();
    };
    let indent: String = indent.chars().take(MAX_INDENT_CHARS).collect();
    let mut out = String::new();
    write_value(&mut out, value, &indent, 0);
    out
}

/// Render a string as a quoted JSON string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_string(&mut out, s);
    out
}

/// Render a number the way JavaScript prints it inside JSON.
///
/// Uses the shortest round-tripping digits, switching to exponent notation
/// outside `1e-6 <= |n| < 1e21`. Non-finite values become `null`.
pub fn number_to_string(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }
    if n == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    ryu_js::Buffer::new().format_finite(n).to_string()
}

/// The `typeof` tag of a value.
///
/// `null`, arrays and objects all report `"object"`; a missing value reports
/// `"undefined"`.
pub fn type_of(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null | Value::Array(_) | Value::Object(_)) => "object",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
    }
}

fn write_value(out: &mut String, value: &Value, indent: &str, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            // Integers beyond 2^53 print as their nearest double.
            out.push_str(&number_to_string(n.as_f64().unwrap_or(f64::NAN)));
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_newline(out, indent, depth + 1);
                write_value(out, item, indent, depth + 1);
            }
            write_newline(out, indent, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_newline(out, indent, depth + 1);
                write_string(out, key);
                out.push(':');
                if !indent.is_empty() {
                    out.push(' ');
                }
                write_value(out, item, indent, depth + 1);
            }
            write_newline(out, indent, depth);
            out.push('}');
        }
    }
}

fn write_newline(out: &mut String, indent: &str, depth: usize) {
    if indent.is_empty() {
        return;
    }
    out.push('\n');
    for _ in 0..depth {
        out.push_str(indent);
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
