/// Equality notions shared by every equality assertion.
use std::fmt::Display;

use crate::normalize::normalize;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compare inspected values as-is; kinds must match exactly.
    Strict,
    /// Normalize both sides before comparing.
    Normalized,
}

/// Recursive structural equality. Maps compare as key/value sets.
pub fn deep_equal(expected: &Value, actual: &Value) -> bool {
    expected == actual
}

/// Prepares an operand for comparison under `mode`.
pub fn prepare(value: Value, mode: Mode) -> Value {
    match mode {
        Mode::Strict => value,
        Mode::Normalized => normalize(value),
    }
}

/// Default human-readable rendering used by the sprint assertions.
pub fn sprint<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

pub fn sprint_equal<E, A>(expected: &E, actual: &A) -> bool
where
    E: Display + ?Sized,
    A: Display + ?Sized,
{
    sprint(expected) == sprint(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::inspect;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Account {
        id: u32,
        tags: Vec<String>,
    }

    fn account(id: u32, tags: &[&str]) -> Value {
        inspect(&Account {
            id,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .unwrap()
    }

    #[test]
    fn test_deep_equal_composites() {
        assert!(deep_equal(&account(1, &["a", "b"]), &account(1, &["a", "b"])));
        assert!(!deep_equal(&account(1, &["a", "b"]), &account(1, &["a"])));
        assert!(!deep_equal(&account(1, &["a"]), &account(2, &["a"])));
    }

    #[test]
    fn test_deep_equal_is_symmetric() {
        let pairs = [
            (account(1, &["a"]), account(1, &["a"])),
            (account(1, &["a"]), account(1, &["b"])),
            (Value::I64(1), Value::Str("1".into())),
        ];
        for (a, b) in &pairs {
            assert_eq!(deep_equal(a, b), deep_equal(b, a));
        }
    }

    #[test]
    fn test_prepare_strict_keeps_kinds() {
        let a = prepare(inspect(&7u8).unwrap(), Mode::Strict);
        let b = prepare(inspect(&7i64).unwrap(), Mode::Strict);
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_prepare_normalized_unifies_widths() {
        let a = prepare(inspect(&7u8).unwrap(), Mode::Normalized);
        let b = prepare(inspect(&7i64).unwrap(), Mode::Normalized);
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn test_sprint_equal_across_types() {
        assert!(sprint_equal(&7, "7"));
        assert!(sprint_equal(&1.5f32, &1.5f64));
        assert!(!sprint_equal(&7, "07"));
    }
}
