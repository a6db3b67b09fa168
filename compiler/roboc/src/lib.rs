//! RoboScript driver.
//!
//! Reads program trees serialized as JSON by an external front end and runs
//! them through the toolchain:
//!
//! ```text
//! tree.json ──► load_program ──► validate ──┬──► evaluate ──► Scene
//!                                           └──► emit ──────► sketch.ino
//! ```
//!
//! Diagnostics are rendered with the terminal emitter. A tree that fails
//! validation is never evaluated or emitted.

pub mod cli;
pub mod commands;
mod errors;
pub mod tracing_setup;

pub use errors::CliError;
