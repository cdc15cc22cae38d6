//! Assertion entry points.
//!
//! Every function takes the reporter first, then the operand(s), then a
//! message (`()` for none). Functions prefixed `must_` stop the test on
//! failure; the others record the failure and let the test continue.
//! Failures are reported at the caller's location.
use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::compare::{deep_equal, prepare, sprint, Mode};
use crate::normalize::normalize;
use crate::report::{Caller, Check, Failure, Fatality, Message};
use crate::reporter::{FatalStop, Reporter};
use crate::value::{inspect, Value};

/// Rendering of panic payloads that are neither strings nor integers.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Fails when `value` is false.
#[track_caller]
pub fn is_true<R>(t: &R, value: bool, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
{
    let check = Check::new("is_true", Caller::here(), Fatality::Continue, message);
    truth(t, check, value);
}

/// Stops the test when `value` is false.
#[track_caller]
pub fn must_true<R>(t: &R, value: bool, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
{
    let check = Check::new("must_true", Caller::here(), Fatality::Stop, message);
    truth(t, check, value);
}

fn truth<R: Reporter + ?Sized>(t: &R, check: Check, value: bool) {
    check.conclude(t, value, |_| Failure::new("value is not true"));
}

/// Fails unless `value` is nil (`None` or `()`).
#[track_caller]
pub fn nil<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("nil", Caller::here(), Fatality::Continue, message);
    nilness(t, check, true, value);
}

#[track_caller]
pub fn must_nil<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("must_nil", Caller::here(), Fatality::Stop, message);
    nilness(t, check, true, value);
}

/// Fails when `value` is nil.
#[track_caller]
pub fn not_nil<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("not_nil", Caller::here(), Fatality::Continue, message);
    nilness(t, check, false, value);
}

#[track_caller]
pub fn must_not_nil<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("must_not_nil", Caller::here(), Fatality::Stop, message);
    nilness(t, check, false, value);
}

fn nilness<R, T>(t: &R, check: Check, expect_nil: bool, value: &T)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let Some(value) = inspect_operand(t, &check, value) else {
        return;
    };
    check.conclude(t, value.is_nil() == expect_nil, |_| {
        if expect_nil {
            Failure::new(format!("value is not nil: {value}"))
        } else {
            Failure::new("value is nil")
        }
    });
}

/// Fails unless `expected` and `actual` are deeply equal with identical
/// kinds, so `7i32` and `7i64` differ. See [`equals`] for the normalizing
/// comparison.
///
/// Serialization carries no element type for an empty sequence, so two
/// empty sequences are always equal here: `Vec::<u8>::new()` equals
/// `Vec::<String>::new()`.
#[track_caller]
pub fn equal<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new("equal", Caller::here(), Fatality::Continue, message);
    inspected_equality(t, check, true, Mode::Strict, expected, actual);
}

#[track_caller]
pub fn not_equal<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new("not_equal", Caller::here(), Fatality::Continue, message);
    inspected_equality(t, check, false, Mode::Strict, expected, actual);
}

#[track_caller]
pub fn must_equal_strict<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new("must_equal_strict", Caller::here(), Fatality::Stop, message);
    inspected_equality(t, check, true, Mode::Strict, expected, actual);
}

#[track_caller]
pub fn must_not_equal_strict<R, E, A>(
    t: &R,
    expected: &E,
    actual: &A,
    message: impl Into<Message>,
) where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new(
        "must_not_equal_strict",
        Caller::here(),
        Fatality::Stop,
        message,
    );
    inspected_equality(t, check, false, Mode::Strict, expected, actual);
}

/// Fails unless `expected` and `actual` are equal after normalization:
/// integers of any width compare by value, `f32` widens to `f64`, a `Vec<u8>`
/// compares as bytes.
#[track_caller]
pub fn equals<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new("equals", Caller::here(), Fatality::Continue, message);
    inspected_equality(t, check, true, Mode::Normalized, expected, actual);
}

/// Like [`equals`], but stops the test on failure.
#[track_caller]
pub fn must_equal<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new("must_equal", Caller::here(), Fatality::Stop, message);
    inspected_equality(t, check, true, Mode::Normalized, expected, actual);
}

#[track_caller]
pub fn not_equals<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new("not_equals", Caller::here(), Fatality::Continue, message);
    inspected_equality(t, check, false, Mode::Normalized, expected, actual);
}

#[track_caller]
pub fn must_not_equal<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let check = Check::new("must_not_equal", Caller::here(), Fatality::Stop, message);
    inspected_equality(t, check, false, Mode::Normalized, expected, actual);
}

/// Fails unless both values render to the same text, so `7` equals `"7"`.
#[track_caller]
pub fn equal_sprint<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Display + ?Sized,
    A: Display + ?Sized,
{
    let check = Check::new("equal_sprint", Caller::here(), Fatality::Continue, message);
    sprint_equality(t, check, true, expected, actual);
}

#[track_caller]
pub fn must_equal_sprint<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Display + ?Sized,
    A: Display + ?Sized,
{
    let check = Check::new("must_equal_sprint", Caller::here(), Fatality::Stop, message);
    sprint_equality(t, check, true, expected, actual);
}

#[track_caller]
pub fn not_equal_sprint<R, E, A>(t: &R, expected: &E, actual: &A, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Display + ?Sized,
    A: Display + ?Sized,
{
    let check = Check::new("not_equal_sprint", Caller::here(), Fatality::Continue, message);
    sprint_equality(t, check, false, expected, actual);
}

#[track_caller]
pub fn must_not_equal_sprint<R, E, A>(
    t: &R,
    expected: &E,
    actual: &A,
    message: impl Into<Message>,
) where
    R: Reporter + ?Sized,
    E: Display + ?Sized,
    A: Display + ?Sized,
{
    let check = Check::new(
        "must_not_equal_sprint",
        Caller::here(),
        Fatality::Stop,
        message,
    );
    sprint_equality(t, check, false, expected, actual);
}

fn inspected_equality<R, E, A>(
    t: &R,
    check: Check,
    expect_equal: bool,
    mode: Mode,
    expected: &E,
    actual: &A,
) where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let Some(expected) = inspect_operand(t, &check, expected) else {
        return;
    };
    let Some(actual) = inspect_operand(t, &check, actual) else {
        return;
    };
    equality(
        t,
        check,
        expect_equal,
        prepare(expected, mode),
        prepare(actual, mode),
    );
}

fn sprint_equality<R, E, A>(t: &R, check: Check, expect_equal: bool, expected: &E, actual: &A)
where
    R: Reporter + ?Sized,
    E: Display + ?Sized,
    A: Display + ?Sized,
{
    equality(
        t,
        check,
        expect_equal,
        Value::Str(sprint(expected)),
        Value::Str(sprint(actual)),
    );
}

fn equality<R>(t: &R, check: Check, expect_equal: bool, expected: Value, actual: Value)
where
    R: Reporter + ?Sized,
{
    let passed = deep_equal(&expected, &actual) == expect_equal;
    check.conclude(t, passed, |config| {
        if expect_equal {
            Failure::comparison("Values not equal", &expected, &actual, config)
        } else {
            Failure::new("Values equal")
                .with_detail(format!("Expected: {expected}"))
                .with_detail(format!("Actual: {actual}"))
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Measure {
    Value,
    Length,
}

impl Measure {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Length => "Length",
        }
    }
}

/// Fails unless the numeric `value` is zero. Integers, floats and
/// [`Complex`](crate::Complex) are numeric; anything else fails.
#[track_caller]
pub fn zero<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("zero", Caller::here(), Fatality::Continue, message);
    zeroness(t, check, true, Measure::Value, value);
}

#[track_caller]
pub fn must_zero<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("must_zero", Caller::here(), Fatality::Stop, message);
    zeroness(t, check, true, Measure::Value, value);
}

#[track_caller]
pub fn not_zero<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("not_zero", Caller::here(), Fatality::Continue, message);
    zeroness(t, check, false, Measure::Value, value);
}

#[track_caller]
pub fn must_not_zero<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("must_not_zero", Caller::here(), Fatality::Stop, message);
    zeroness(t, check, false, Measure::Value, value);
}

/// Fails unless the container is empty. Strings (by bytes), byte buffers,
/// sequences, maps and nil have a length; anything else fails.
#[track_caller]
pub fn zero_len<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("zero_len", Caller::here(), Fatality::Continue, message);
    zeroness(t, check, true, Measure::Length, value);
}

#[track_caller]
pub fn must_zero_len<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("must_zero_len", Caller::here(), Fatality::Stop, message);
    zeroness(t, check, true, Measure::Length, value);
}

/// Fails when the container is empty.
#[track_caller]
pub fn positive_len<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("positive_len", Caller::here(), Fatality::Continue, message);
    zeroness(t, check, false, Measure::Length, value);
}

#[track_caller]
pub fn must_positive_len<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("must_positive_len", Caller::here(), Fatality::Stop, message);
    zeroness(t, check, false, Measure::Length, value);
}

fn zeroness<R, T>(t: &R, check: Check, expect_zero: bool, measure: Measure, value: &T)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let Some(value) = inspect_operand(t, &check, value) else {
        return;
    };
    let value = normalize(value);

    let (is_zero, shown) = match measure {
        Measure::Value => match numeric_is_zero(&value) {
            Some(is_zero) => (is_zero, value.to_string()),
            None => {
                let failure = Failure::new(format!("Value is not numeric: {}", value.kind()));
                return check.fail(t, failure);
            }
        },
        Measure::Length => match value.len() {
            Some(len) => (len == 0, len.to_string()),
            None => return check.fail(t, no_length(&value)),
        },
    };

    let name = measure.as_str();
    check.conclude(t, is_zero == expect_zero, |_| {
        if expect_zero {
            Failure::new(format!("{name} is not zero: {shown}"))
        } else {
            Failure::new(format!("{name} is zero."))
        }
    });
}

fn numeric_is_zero(value: &Value) -> Option<bool> {
    match value {
        Value::I64(v) => Some(*v == 0),
        Value::I128(v) => Some(*v == 0),
        Value::U128(v) => Some(*v == 0),
        Value::F64(v) => Some(*v == 0.0),
        Value::Complex(c) => Some(c.is_zero()),
        _ => None,
    }
}

fn no_length(value: &Value) -> Failure {
    Failure::new(format!("Value has no length: {}", value.kind()))
}

/// Fails unless the container holds exactly one element.
#[track_caller]
pub fn one_len<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("one_len", Caller::here(), Fatality::Continue, message);
    one_length(t, check, value);
}

#[track_caller]
pub fn must_one_len<R, T>(t: &R, value: &T, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let check = Check::new("must_one_len", Caller::here(), Fatality::Stop, message);
    one_length(t, check, value);
}

fn one_length<R, T>(t: &R, check: Check, value: &T)
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    let Some(value) = inspect_operand(t, &check, value) else {
        return;
    };
    let value = normalize(value);
    match value.len() {
        Some(len) => check.conclude(t, len == 1, |_| {
            Failure::new(format!("Length is not one: {len}"))
        }),
        None => check.fail(t, no_length(&value)),
    }
}

/// Runs `operation` and fails unless it panics with a payload equal to
/// `expected` after normalization.
///
/// String payloads (`panic!("boom")`, `panic!("{x}")`) compare as strings,
/// integer and [`Value`] payloads as themselves. If the operation returns
/// normally the captured value is nil: the check passes only when
/// `expected` is nil, and otherwise fails with `operation did not panic`.
#[track_caller]
pub fn panics<R, E, F>(t: &R, expected: &E, operation: F, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    F: FnOnce(),
{
    let check = Check::new("panics", Caller::here(), Fatality::Continue, message);
    panic_equality(t, check, expected, operation);
}

#[track_caller]
pub fn must_panic<R, E, F>(t: &R, expected: &E, operation: F, message: impl Into<Message>)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    F: FnOnce(),
{
    let check = Check::new("must_panic", Caller::here(), Fatality::Stop, message);
    panic_equality(t, check, expected, operation);
}

fn panic_equality<R, E, F>(t: &R, check: Check, expected: &E, operation: F)
where
    R: Reporter + ?Sized,
    E: Serialize + ?Sized,
    F: FnOnce(),
{
    let Some(expected) = inspect_operand(t, &check, expected) else {
        return;
    };
    let expected = normalize(expected);

    let captured = match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(()) => None,
        // A fatal failure inside the operation belongs to the caller.
        Err(payload) if payload.is::<FatalStop>() || t.is_stopping() => {
            panic::resume_unwind(payload)
        }
        Err(payload) => Some(normalize(panic_value(&*payload))),
    };

    match captured {
        None => check.conclude(t, expected.is_nil(), |_| {
            Failure::new("operation did not panic")
                .with_detail(format!("Expected: {expected}"))
                .with_detail("Actual: nil")
        }),
        Some(actual) => check.conclude(t, deep_equal(&expected, &actual), |config| {
            Failure::comparison("panic value mismatch", &expected, &actual, config)
        }),
    }
}

/// Converts a panic payload into a comparable [`Value`].
pub fn panic_value(payload: &(dyn Any + Send)) -> Value {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Value::Str((*message).to_owned())
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Value::Str(message.clone())
    } else if let Some(value) = payload.downcast_ref::<Value>() {
        value.clone()
    } else if let Some(v) = payload.downcast_ref::<i32>() {
        Value::I32(*v)
    } else if let Some(v) = payload.downcast_ref::<i64>() {
        Value::I64(*v)
    } else if let Some(v) = payload.downcast_ref::<u32>() {
        Value::U32(*v)
    } else if let Some(v) = payload.downcast_ref::<u64>() {
        Value::U64(*v)
    } else if let Some(v) = payload.downcast_ref::<usize>() {
        Value::U64(*v as u64)
    } else {
        Value::Str(OPAQUE_PAYLOAD.to_owned())
    }
}

fn inspect_operand<R, T>(t: &R, check: &Check, value: &T) -> Option<Value>
where
    R: Reporter + ?Sized,
    T: Serialize + ?Sized,
{
    match inspect(value) {
        Ok(value) => Some(value),
        Err(e) => {
            let failure = Failure::new(format!("value could not be inspected: {e}"));
            check.clone().fail(t, failure);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::panic_any;

    #[test]
    fn test_panic_value_strings() {
        let captured = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_value(&*captured), Value::Str("boom".into()));

        let n = 3;
        let captured = panic::catch_unwind(move || panic!("boom {n}")).unwrap_err();
        assert_eq!(panic_value(&*captured), Value::Str("boom 3".into()));
    }

    #[test]
    fn test_panic_value_integers_and_values() {
        let captured = panic::catch_unwind(|| panic_any(42usize)).unwrap_err();
        assert_eq!(panic_value(&*captured), Value::U64(42));

        let captured = panic::catch_unwind(|| panic_any(Value::Bool(true))).unwrap_err();
        assert_eq!(panic_value(&*captured), Value::Bool(true));
    }

    #[test]
    fn test_panic_value_opaque() {
        let captured = panic::catch_unwind(|| panic_any(vec![1u8])).unwrap_err();
        assert_eq!(panic_value(&*captured), Value::Str(OPAQUE_PAYLOAD.into()));
    }

    #[test]
    fn test_numeric_is_zero() {
        assert_eq!(numeric_is_zero(&Value::I64(0)), Some(true));
        assert_eq!(numeric_is_zero(&Value::F64(0.5)), Some(false));
        assert_eq!(numeric_is_zero(&Value::Str("0".into())), None);
    }

    #[test]
    fn test_measure_names() {
        assert_eq!(Measure::Value.as_str(), "Value");
        assert_eq!(Measure::Length.as_str(), "Length");
    }
}
