use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repo-relative path of a changed file, as globs are matched against it.
///
/// Normalization is deterministic:
/// - always forward slashes (`/`)
/// - no leading `./` or `/`
///
/// GitHub already reports `filename` in this shape; normalizing here keeps locally
/// supplied paths (tests, `git diff` output) matching the same globs.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().trim().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        Self(v.trim_start_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoPath {
    fn from(value: &str) -> Self {
        RepoPath::new(value)
    }
}

impl From<String> for RepoPath {
    fn from(value: String) -> Self {
        RepoPath::new(value)
    }
}
