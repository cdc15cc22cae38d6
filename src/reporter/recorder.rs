use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use super::{FatalStop, Reporter};
use crate::config::Config;

/// Reporter that captures what assertions do instead of failing the
/// surrounding test. Used to test assertions themselves.
///
/// ```
/// use assay::{must_equal, Recorder};
///
/// let outcome = Recorder::new().capture(|t| {
///     must_equal(t, &1, &2, ());
///     unreachable!();
/// });
/// assert!(outcome.stopped);
/// assert!(outcome.contains("Values not equal"));
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    config: Config,
    lines: RefCell<Vec<String>>,
    failed: Cell<bool>,
    stopped: Cell<bool>,
}

/// What a [`Recorder`] observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub failed: bool,
    /// A fatal failure cut the captured closure short.
    pub stopped: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Runs `f` against this recorder. A fatal failure unwinds out of `f`
    /// and is absorbed here; any other panic propagates.
    pub fn capture<F>(self, f: F) -> Outcome
    where
        F: FnOnce(&Recorder),
    {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| f(&self))) {
            if !payload.is::<FatalStop>() {
                panic::resume_unwind(payload);
            }
        }
        self.into_outcome()
    }

    pub fn into_outcome(self) -> Outcome {
        Outcome {
            lines: self.lines.into_inner(),
            failed: self.failed.get(),
            stopped: self.stopped.get(),
        }
    }
}

impl Reporter for Recorder {
    fn log(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }

    fn fail(&self) {
        self.failed.set(true);
    }

    fn fail_now(&self) -> ! {
        self.failed.set(true);
        self.stopped.set(true);
        // resume_unwind skips the panic hook, so nothing is printed.
        panic::resume_unwind(Box::new(FatalStop))
    }

    fn config(&self) -> Config {
        self.config
    }

    fn is_stopping(&self) -> bool {
        self.stopped.get()
    }
}

impl Outcome {
    pub fn passed(&self) -> bool {
        !self.failed
    }

    /// Whether any logged line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// The `Caller: file:line` line of the first failure.
    pub fn caller(&self) -> Option<&str> {
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix("Caller: "))
    }
}
