use std::cell::{Cell, RefCell};
use std::thread;

use tracing::{trace, warn};

use super::Reporter;
use crate::config::Config;

/// Reporter for ordinary `#[test]` functions.
///
/// Log lines are buffered. A fatal failure panics with the buffered report,
/// which is how a Rust test stops. Non-fatal failures are collected and
/// reported when the context is dropped at the end of the test.
///
/// ```should_panic
/// use assay::{equals, TestContext};
///
/// let t = TestContext::new();
/// equals(&t, &1, &2, "first");
/// equals(&t, &3, &4, "second");
/// // dropping `t` panics with both failures
/// ```
#[derive(Debug)]
pub struct TestContext {
    name: String,
    config: Config,
    lines: RefCell<Vec<String>>,
    failures: Cell<usize>,
    stopping: Cell<bool>,
}

impl TestContext {
    /// Context named after the current test thread, with config from
    /// [`Config::load`]. An invalid config falls back to defaults.
    pub fn new() -> Self {
        let name = thread::current().name().unwrap_or("test").to_owned();
        Self::named(name)
    }

    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let config = Config::load().unwrap_or_else(|e| {
            warn!(test = %name, error = %e, "invalid assay config, using defaults");
            Config::default()
        });
        Self::with_config(name, config)
    }

    pub fn with_config(name: impl Into<String>, config: Config) -> Self {
        Self {
            name: name.into(),
            config,
            lines: RefCell::new(Vec::new()),
            failures: Cell::new(0),
            stopping: Cell::new(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn failed(&self) -> bool {
        self.failures.get() > 0
    }

    pub fn failure_count(&self) -> usize {
        self.failures.get()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Ends the test, panicking with the report if anything failed.
    pub fn finish(self) {
        drop(self)
    }

    fn render(&self) -> String {
        let mut report = format!(
            "{}: {} assertion(s) failed",
            self.name,
            self.failures.get()
        );
        for line in self.lines.borrow().iter() {
            report.push_str("\n    ");
            report.push_str(line);
        }
        report
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TestContext {
    fn log(&self, line: &str) {
        trace!(test = %self.name, line, "log");
        self.lines.borrow_mut().push(line.to_owned());
    }

    fn fail(&self) {
        self.failures.set(self.failures.get() + 1);
    }

    fn fail_now(&self) -> ! {
        self.fail();
        self.stopping.set(true);
        panic!("{}", self.render())
    }

    fn config(&self) -> Config {
        self.config
    }

    fn is_stopping(&self) -> bool {
        self.stopping.get()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if self.failed() && !thread::panicking() {
            panic!("{}", self.render());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
        payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn test_named_context() {
        let t = TestContext::with_config("login_flow", Config::default());
        assert_eq!(t.name(), "login_flow");
        assert_eq!(t.failure_count(), 0);
    }

    #[test]
    fn test_passing_context_drops_quietly() {
        let t = TestContext::with_config("quiet", Config::default());
        t.log("informational");
        assert!(!t.failed());
        t.finish();
    }

    #[test]
    fn test_fail_now_panics_with_report() {
        let t = TestContext::with_config("stopper", Config::default());
        // Moved in so it drops while unwinding, like in a real test.
        let result = panic::catch_unwind(AssertUnwindSafe(move || {
            t.log("Caller: a.rs:1");
            t.fail_now()
        }));
        let message = panic_message(result.unwrap_err());
        assert!(message.starts_with("stopper: 1 assertion(s) failed"));
        assert!(message.contains("Caller: a.rs:1"));
    }

    #[test]
    fn test_non_fatal_failures_panic_on_drop() {
        let result = panic::catch_unwind(|| {
            let t = TestContext::with_config("collector", Config::default());
            t.log("first");
            t.fail();
            t.log("second");
            t.fail();
            assert_eq!(t.failure_count(), 2);
        });
        let message = panic_message(result.unwrap_err());
        assert!(message.starts_with("collector: 2 assertion(s) failed"));
        assert!(message.contains("first"));
        assert!(message.contains("second"));
    }
}
