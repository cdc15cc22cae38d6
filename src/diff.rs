/// Structural diff rendering for equality failures.
///
/// [`paths`] walks two values in lockstep and lists every place they
/// differ; [`lines`] renders a line diff of their pretty-printed forms
/// through `pretty_assertions`.
use std::fmt::Display;
use std::sync::OnceLock;

use pretty_assertions::Comparison;
use regex::Regex;

use crate::config::{Config, DiffStyle};
use crate::value::Value;

const MISSING: &str = "(missing)";

/// Path-level discrepancies between `expected` and `actual`.
///
/// Each line reads `<path>: <expected> != <actual>`; the path is omitted at
/// the root. Kind mismatches name both kinds.
pub fn paths(expected: &Value, actual: &Value) -> Vec<String> {
    let mut out = Vec::new();
    walk("", expected, actual, &mut out);
    out
}

fn walk(path: &str, expected: &Value, actual: &Value, out: &mut Vec<String>) {
    if expected == actual {
        return;
    }

    match (expected, actual) {
        (Value::Seq(a), Value::Seq(b)) => walk_items(path, a, b, out, |p, x, y, out| {
            walk(p, x, y, out)
        }),
        (Value::Bytes(a), Value::Bytes(b)) => walk_items(path, a, b, out, |p, x, y, out| {
            out.push(line(p, x, y))
        }),
        (Value::Map(a), Value::Map(b)) => {
            for (key, value) in a {
                let entry = format!("{path}[{key}]");
                match actual.get(key) {
                    Some(other) => walk(&entry, value, other, out),
                    None => out.push(line(&entry, value, MISSING)),
                }
            }
            for (key, value) in b {
                if expected.get(key).is_none() {
                    out.push(line(&format!("{path}[{key}]"), MISSING, value));
                }
            }
        }
        (
            Value::Struct {
                name: a_name,
                fields: a_fields,
            },
            Value::Struct {
                name: b_name,
                fields: b_fields,
            },
        ) if a_name == b_name => {
            for (field, value) in a_fields {
                let entry = format!("{path}.{field}");
                match actual.field(field) {
                    Some(other) => walk(&entry, value, other, out),
                    None => out.push(line(&entry, value, MISSING)),
                }
            }
            for (field, value) in b_fields {
                if expected.field(field).is_none() {
                    out.push(line(&format!("{path}.{field}"), MISSING, value));
                }
            }
        }
        (
            Value::Variant {
                name: a_name,
                variant: a_variant,
                payload: a_payload,
            },
            Value::Variant {
                name: b_name,
                variant: b_variant,
                payload: b_payload,
            },
        ) if a_name == b_name && a_variant == b_variant => {
            walk(path, a_payload, b_payload, out)
        }
        _ if expected.kind() != actual.kind() => out.push(line(
            path,
            format_args!("{expected} ({})", expected.kind()),
            format_args!("{actual} ({})", actual.kind()),
        )),
        _ => out.push(line(path, expected, actual)),
    }
}

fn walk_items<T, F>(path: &str, expected: &[T], actual: &[T], out: &mut Vec<String>, mut each: F)
where
    T: Display,
    F: FnMut(&str, &T, &T, &mut Vec<String>),
{
    for index in 0..expected.len().max(actual.len()) {
        let entry = format!("{path}[{index}]");
        match (expected.get(index), actual.get(index)) {
            (Some(a), Some(b)) => each(&entry, a, b, out),
            (Some(a), None) => out.push(line(&entry, a, MISSING)),
            (None, Some(b)) => out.push(line(&entry, MISSING, b)),
            (None, None) => {}
        }
    }
}

fn line(path: &str, expected: impl Display, actual: impl Display) -> String {
    if path.is_empty() {
        format!("{expected} != {actual}")
    } else {
        format!("{path}: {expected} != {actual}")
    }
}

/// Line diff of the pretty-printed values, without terminal colors.
pub fn lines(expected: &Value, actual: &Value) -> Vec<String> {
    let colored = Comparison::new(expected, actual).to_string();
    strip_sgr(&colored)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn strip_sgr(text: &str) -> String {
    static SGR: OnceLock<Regex> = OnceLock::new();
    let pattern = SGR.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR regex is valid"));
    pattern.replace_all(text, "").into_owned()
}

/// Renders the diff in the configured style, truncated to
/// `config.max_diff_lines`.
pub fn render(config: &Config, expected: &Value, actual: &Value) -> Vec<String> {
    let mut rendered = match config.diff_style {
        DiffStyle::Paths => paths(expected, actual),
        DiffStyle::Lines => lines(expected, actual),
    };

    let limit = config.max_diff_lines;
    if limit > 0 && rendered.len() > limit {
        let hidden = rendered.len() - limit;
        rendered.truncate(limit);
        rendered.push(format!("... {hidden} more"));
    }
    rendered
}
