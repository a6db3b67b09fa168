//! Diagnostics for RoboScript programs.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a severity (only errors block execution and emission)
//! - a message saying what went wrong
//! - the offending tree node and its span
//! - optionally, the node property at fault (`"unit"`, `"direction"`, ...)
//!
//! The validator produces them in bulk; the evaluator converts its fatal
//! error into one so the driver renders everything the same way.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{count, has_errors, Diagnostic, Severity};
pub use error_code::ErrorCode;
