//! Pure requirement evaluation (no IO).
//!
//! Input: changed files and the approved review count, fetched elsewhere.
//! Output: a verdict plus per-requirement results.

#![forbid(unsafe_code)]

pub mod matcher;
pub mod model;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use matcher::PatternSet;
pub use model::{PullRequestModel, Requirement, count_approved};
pub use report::DomainReport;
