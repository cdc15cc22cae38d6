/// Failure reporting shared by every assertion.
///
/// A [`Check`] carries what is known before evaluation: the check's name,
/// the test's call site, the fatality and the caller's message. It either
/// passes silently or writes a report to the [`Reporter`] and fails the
/// test, stopping it when fatal.
use std::fmt;
use std::panic::Location;

use tracing::{debug, trace};

use crate::config::Config;
use crate::diff;
use crate::reporter::Reporter;
use crate::value::Value;

/// Source location of the assertion call in the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    /// Call site of the outermost `#[track_caller]` frame.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Optional caller-supplied text attached to a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message(Option<String>);

impl Message {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<()> for Message {
    fn from(_: ()) -> Self {
        Self::none()
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self(Some(text.to_owned()))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(Some(text))
    }
}

impl From<Option<String>> for Message {
    fn from(text: Option<String>) -> Self {
        Self(text)
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self(Some(args.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fatality {
    /// Record the failure and keep running the test.
    Continue,
    /// Record the failure and stop the test.
    Stop,
}

impl Fatality {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// What gets logged when a check fails, after the caller line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub description: String,
    pub details: Vec<String>,
}

impl Failure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Failure for an equality-family check: both operands followed by the
    /// rendered diff.
    pub fn comparison(
        description: impl Into<String>,
        expected: &Value,
        actual: &Value,
        config: &Config,
    ) -> Self {
        let mut failure = Self::new(description)
            .with_detail(format!("Expected: {expected}"))
            .with_detail(format!("Actual: {actual}"));
        failure.details.extend(
            diff::render(config, expected, actual)
                .into_iter()
                .map(|line| format!("! {line}")),
        );
        failure
    }
}

#[derive(Debug, Clone)]
pub struct Check {
    name: &'static str,
    caller: Caller,
    fatality: Fatality,
    message: Message,
}

impl Check {
    pub fn new(
        name: &'static str,
        caller: Caller,
        fatality: Fatality,
        message: impl Into<Message>,
    ) -> Self {
        Self {
            name,
            caller,
            fatality,
            message: message.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn caller(&self) -> Caller {
        self.caller
    }

    pub fn fatality(&self) -> Fatality {
        self.fatality
    }

    /// Passes when `passed`, otherwise fails with the report built by
    /// `failure`.
    pub fn conclude<R, F>(self, t: &R, passed: bool, failure: F)
    where
        R: Reporter + ?Sized,
        F: FnOnce(&Config) -> Failure,
    {
        if passed {
            trace!(check = self.name, caller = %self.caller, "assertion passed");
            return;
        }
        let failure = failure(&t.config());
        self.fail(t, failure);
    }

    pub fn fail<R>(self, t: &R, failure: Failure)
    where
        R: Reporter + ?Sized,
    {
        debug!(
            check = self.name,
            caller = %self.caller,
            fatal = self.fatality.is_fatal(),
            description = %failure.description,
            "assertion failed"
        );

        t.log(&format!("Caller: {}", self.caller));
        t.log(&failure.description);
        if let Some(message) = self.message.as_str() {
            t.log(message);
        }
        for detail in &failure.details {
            t.log(detail);
        }

        match self.fatality {
            Fatality::Stop => t.fail_now(),
            Fatality::Continue => t.fail(),
        }
    }
}
