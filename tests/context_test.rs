mod fixtures;

use assay::{
    assert_equal_sprint, assert_equals, assert_nil, assert_one_len, assert_panics,
    assert_true, assert_zero_len, equals, must_equal, must_not_nil, must_zero, one_len, panics,
    Config, DiffStyle, Recorder, TestContext,
};
use fixtures::order;
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

fn context(name: &str) -> TestContext {
    TestContext::with_config(name, Config::default())
}

#[test]
fn test_passing_assertions_leave_context_clean() {
    let t = context("clean");
    equals(&t, &order(3, &[1, 2]), &order(3, &[1, 2]), ());
    one_len(&t, &vec!["only"], ());
    must_not_nil(&t, &Some("here"), ());
    assert!(!t.failed());
    assert!(t.lines().is_empty());
    t.finish();
}

#[test]
#[should_panic(expected = "Values not equal")]
fn test_fatal_equality_panics_the_test() {
    let t = context("fatal");
    must_equal(&t, &"boom", &"bang", ());
}

#[test]
#[should_panic(expected = "Value is not zero: 4")]
fn test_fatal_zero_panics_the_test() {
    let t = context("zero");
    must_zero(&t, &4u16, ());
}

#[test]
#[should_panic(expected = "drop: 2 assertion(s) failed")]
fn test_non_fatal_failures_surface_on_drop() {
    let t = context("drop");
    equals(&t, &1, &2, ());
    equals(&t, &3, &4, ());
}

#[test]
fn test_fatal_failure_inside_panic_check_stops_the_test() {
    let ran_after = Cell::new(false);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let t = context("nested");
        panics(&t, &"boom", || must_equal(&t, &1, &2, ()), ());
        ran_after.set(true);
    }));

    let payload = result.unwrap_err();
    let report = payload.downcast_ref::<String>().cloned().unwrap_or_default();
    assert!(report.starts_with("nested: 1 assertion(s) failed"), "{report}");
    assert!(report.contains("Values not equal"));
    assert!(!report.contains("panic value mismatch"));
    assert!(!ran_after.get());
}

#[test]
fn test_failure_report_names_this_file() {
    let outcome = Recorder::new().capture(|t| equals(t, &1, &2, ()));
    let caller = outcome.caller().unwrap_or_default();
    assert!(caller.starts_with("tests"), "{caller}");
    assert!(caller.contains("context_test.rs:"), "{caller}");
}

#[test]
fn test_lines_diff_style() {
    let config = Config {
        diff_style: DiffStyle::Lines,
        max_diff_lines: 0,
        ..Config::default()
    };
    let outcome = Recorder::with_config(config).capture(|t| {
        equals(t, &order(1, &[5]), &order(1, &[6]), ());
    });
    assert!(outcome.failed);
    assert!(outcome.lines.iter().all(|l| !l.contains('\u{1b}')));
    assert!(outcome.lines.iter().any(|l| l.starts_with("! ") && l.contains('5')));
    assert!(outcome.lines.iter().any(|l| l.starts_with("! ") && l.contains('6')));
}

#[test]
fn test_diff_truncation() {
    let config = Config {
        diff_style: DiffStyle::Paths,
        max_diff_lines: 1,
        ..Config::default()
    };
    let outcome = Recorder::with_config(config).capture(|t| {
        equals(t, &vec![1, 2, 3], &vec![4, 5, 6], ());
    });
    let diff: Vec<&str> = outcome
        .lines
        .iter()
        .filter(|l| l.starts_with("! "))
        .map(String::as_str)
        .collect();
    assert_eq!(diff, vec!["! [0]: 1 != 4", "! ... 2 more"]);
}

#[test]
fn test_macros_pass() {
    let outcome = Recorder::new().capture(|t| {
        assert_true!(t, 1 < 2);
        assert_nil!(t, None::<u8>);
        assert_equals!(t, 7u8, 7i64);
        assert_equal_sprint!(t, 7, "7");
        assert_zero_len!(t, String::new());
        assert_one_len!(t, vec![0]);
        assert_panics!(t, "boom", { panic!("boom") });
    });
    assert!(outcome.passed(), "{:?}", outcome.lines);
}

#[test]
fn test_macro_message_is_formatted() {
    let outcome = Recorder::new().capture(|t| {
        let id = 42;
        assert_true!(t, false, "order {id} should be open");
    });
    assert_eq!(&outcome.lines[1..], &["value is not true", "order 42 should be open"]);
}

#[test]
fn test_macro_reports_macro_call_site() {
    let outcome = Recorder::new().capture(|t| {
        assert_equals!(t, 1, 2);
    });
    assert!(outcome.caller().unwrap_or_default().contains("context_test.rs"));
}
