/// Reporting sinks assertions write to.
mod context;
mod recorder;

pub use context::TestContext;
pub use recorder::{Outcome, Recorder};

use crate::config::Config;

/// The test framework surface an assertion needs: append a log line,
/// record a failure and keep going, or record a failure and stop the test.
pub trait Reporter {
    fn log(&self, line: &str);

    /// Marks the test failed; execution continues.
    fn fail(&self);

    /// Marks the test failed and stops it. Never returns.
    fn fail_now(&self) -> !;

    /// Rendering options for failure reports.
    fn config(&self) -> Config {
        Config::default()
    }

    /// True once `fail_now` has begun unwinding. Panic capture re-raises
    /// instead of comparing while this holds.
    fn is_stopping(&self) -> bool {
        false
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn log(&self, line: &str) {
        (**self).log(line)
    }

    fn fail(&self) {
        (**self).fail()
    }

    fn fail_now(&self) -> ! {
        (**self).fail_now()
    }

    fn config(&self) -> Config {
        (**self).config()
    }

    fn is_stopping(&self) -> bool {
        (**self).is_stopping()
    }
}

/// Unwind payload of [`Recorder::fail_now`]; panic capture re-raises it.
#[derive(Debug)]
pub(crate) struct FatalStop;
