//! Rendering utilities for CI surfaces (log lines, GitHub workflow commands, Markdown).

#![forbid(unsafe_code)]

mod gha;
mod log;
mod markdown;

#[cfg(test)]
mod test_support;

pub use gha::{escape_data, render_error_command, render_github_annotations};
pub use log::render_log_lines;
pub use markdown::render_markdown;
