//! Use case orchestration for approvalguard.
//!
//! This crate provides the application layer: use cases that coordinate the GitHub source,
//! the domain engine, and the renderers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and process exit.

#![forbid(unsafe_code)]

mod check;
mod render;
mod sink;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use render::{append_text, serialize_report, write_report};
pub use sink::{ActionsLog, LogSink, MemorySink};
