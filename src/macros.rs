//! Macro forms of the assertions.
//!
//! Each macro takes the reporter and operands like the function it wraps,
//! plus an optional trailing format string and arguments for the message:
//!
//! ```
//! use assay::{assert_equals, Recorder};
//!
//! let outcome = Recorder::new().capture(|t| {
//!     let id = 7;
//!     assert_equals!(t, 1, 2, "lookup of {id}");
//! });
//! assert!(outcome.contains("lookup of 7"));
//! ```

#[macro_export]
macro_rules! assert_true {
    ($t:expr, $value:expr $(,)?) => {
        $crate::is_true(&$t, $value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::is_true(&$t, $value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_true {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_true(&$t, $value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_true(&$t, $value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_nil {
    ($t:expr, $value:expr $(,)?) => {
        $crate::nil(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::nil(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_nil {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_nil(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_nil(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_not_nil {
    ($t:expr, $value:expr $(,)?) => {
        $crate::not_nil(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::not_nil(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_not_nil {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_not_nil(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_not_nil(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_equal {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::equal(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::equal(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_not_equal {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::not_equal(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::not_equal(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_equal_strict {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::must_equal_strict(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::must_equal_strict(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_not_equal_strict {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::must_not_equal_strict(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::must_not_equal_strict(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_equals {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::equals(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::equals(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_not_equals {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::not_equals(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::not_equals(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_equal {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::must_equal(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::must_equal(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_not_equal {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::must_not_equal(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::must_not_equal(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_equal_sprint {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::equal_sprint(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::equal_sprint(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_not_equal_sprint {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::not_equal_sprint(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::not_equal_sprint(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_equal_sprint {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::must_equal_sprint(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::must_equal_sprint(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_not_equal_sprint {
    ($t:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::must_not_equal_sprint(&$t, &$expected, &$actual, ())
    };
    ($t:expr, $expected:expr, $actual:expr, $($arg:tt)+) => {
        $crate::must_not_equal_sprint(&$t, &$expected, &$actual, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_zero {
    ($t:expr, $value:expr $(,)?) => {
        $crate::zero(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::zero(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_not_zero {
    ($t:expr, $value:expr $(,)?) => {
        $crate::not_zero(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::not_zero(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_zero {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_zero(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_zero(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_not_zero {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_not_zero(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_not_zero(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_zero_len {
    ($t:expr, $value:expr $(,)?) => {
        $crate::zero_len(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::zero_len(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_positive_len {
    ($t:expr, $value:expr $(,)?) => {
        $crate::positive_len(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::positive_len(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_zero_len {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_zero_len(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_zero_len(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_positive_len {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_positive_len(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_positive_len(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! assert_one_len {
    ($t:expr, $value:expr $(,)?) => {
        $crate::one_len(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::one_len(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_one_len {
    ($t:expr, $value:expr $(,)?) => {
        $crate::must_one_len(&$t, &$value, ())
    };
    ($t:expr, $value:expr, $($arg:tt)+) => {
        $crate::must_one_len(&$t, &$value, ::core::format_args!($($arg)+))
    };
}

/// Runs the block and checks that it panics with `expected`.
#[macro_export]
macro_rules! assert_panics {
    ($t:expr, $expected:expr, $body:block $(,)?) => {
        $crate::panics(&$t, &$expected, || $body, ())
    };
    ($t:expr, $expected:expr, $body:block, $($arg:tt)+) => {
        $crate::panics(&$t, &$expected, || $body, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! must_panic {
    ($t:expr, $expected:expr, $body:block $(,)?) => {
        $crate::must_panic(&$t, &$expected, || $body, ())
    };
    ($t:expr, $expected:expr, $body:block, $($arg:tt)+) => {
        $crate::must_panic(&$t, &$expected, || $body, ::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::Recorder;

    #[test]
    fn test_macro_without_message() {
        let outcome = Recorder::new().capture(|t| {
            assert_equals!(t, 7u8, 7i64);
            assert_true!(t, 1 + 1 == 2);
            assert_one_len!(t, vec!["x"]);
        });
        assert!(outcome.passed());
    }

    #[test]
    fn test_macro_with_formatted_message() {
        let outcome = Recorder::new().capture(|t| {
            let attempts = 3;
            assert_true!(t, false, "gave up after {attempts} attempts");
        });
        assert!(outcome.failed);
        assert!(outcome.contains("gave up after 3 attempts"));
    }

    #[test]
    fn test_macro_reports_invocation_site() {
        let outcome = Recorder::new().capture(|t| {
            must_zero_len!(t, vec![1, 2, 3]);
        });
        assert!(outcome.stopped);
        assert!(outcome.caller().unwrap().contains("macros.rs"));
    }

    #[test]
    fn test_panic_macros() {
        let outcome = Recorder::new().capture(|t| {
            assert_panics!(t, "boom", { panic!("boom") });
            must_panic!(t, "bang", { panic!("bang") }, "second panic");
        });
        assert!(outcome.passed());
    }
}
