use approvalguard_types::RepoPath;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// A compiled set of glob patterns; a path matches the set if it matches any pattern.
///
/// Patterns use gitignore-like separator semantics: `*` and `?` never cross a `/`,
/// `**` spans any number of directories. Matching is case-sensitive and dotfiles get
/// no special treatment, so `**/*` matches `.github/workflows/ci.yml`.
#[derive(Clone, Debug)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            let glob = GlobBuilder::new(pattern).literal_separator(true).build()?;
            builder.add(glob);
        }

        Ok(Self {
            patterns,
            set: builder.build()?,
        })
    }

    pub fn is_match(&self, path: &RepoPath) -> bool {
        self.set.is_match(path.as_str())
    }

    /// The patterns in their configured order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
