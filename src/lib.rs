//! Assay
//!
//! Assertion helpers for Rust tests: normalized equality, nilness, zero and
//! length checks, with `must_*` variants that stop the test and plain
//! variants that record the failure and keep going. Operands are inspected
//! through `serde::Serialize`, so any serializable type can be compared
//! structurally and failures come with a path-level diff.
//!
//! ```
//! use assay::{equals, must_one_len, Recorder};
//!
//! let outcome = Recorder::new().capture(|t| {
//!     equals(t, &42u8, &42i64, ());
//!     must_one_len(t, &vec!["only"], "one result expected");
//! });
//! assert!(outcome.passed());
//! ```
pub mod assert;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
mod macros;
pub mod normalize;
pub mod report;
pub mod reporter;
pub mod value;

pub use assert::*;
pub use config::{Config, DiffStyle};
pub use error::{Error, Result};
pub use report::{Caller, Check, Failure, Fatality, Message};
pub use reporter::{Outcome, Recorder, Reporter, TestContext};
pub use value::{inspect, Complex, Kind, Value};
