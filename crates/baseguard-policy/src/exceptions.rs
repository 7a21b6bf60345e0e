//! Allow-list matching for configured exceptions.

use baseguard_core::config::Exception;
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::warn;

/// Matches occurrences against one category's allow-list.
///
/// Globs are compiled once at construction. A pattern that fails to compile
/// is logged and dropped from its entry; the rest of that entry's patterns
/// still match. An entry whose patterns all failed can no longer match any
/// file, which means it exempts nothing rather than everything.
pub struct ExceptionMatcher {
    entries: Vec<CompiledException>,
}

struct CompiledException {
    feature: Option<String>,
    /// `None` when the entry gave no file patterns, so the file check is
    /// skipped. `Some` with an empty set matches no file.
    files: Option<GlobSet>,
}

impl ExceptionMatcher {
    pub fn new(exceptions: &[Exception]) -> Self {
        let entries = exceptions.iter().map(CompiledException::compile).collect();
        Self { entries }
    }

    /// Whether an occurrence of `feature_id` in `file` is exempt.
    /// Entries are OR'd; the first match wins.
    pub fn is_exempt(&self, feature_id: &str, file: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.matches(feature_id, file))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CompiledException {
    fn compile(exception: &Exception) -> Self {
        let files = if exception.files.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in &exception.files {
                match Glob::new(pattern) {
                    Ok(glob) => {
                        builder.add(glob);
                    }
                    Err(error) => {
                        warn!(pattern = %pattern, %error, "dropping malformed exception glob");
                    }
                }
            }
            match builder.build() {
                Ok(set) => Some(set),
                Err(error) => {
                    warn!(%error, "exception glob set failed to build; entry matches no file");
                    Some(GlobSet::empty())
                }
            }
        };
        Self {
            feature: exception.feature.clone(),
            files,
        }
    }

    /// Populated fields are AND'd: a missing field always matches.
    fn matches(&self, feature_id: &str, file: &str) -> bool {
        if let Some(feature) = &self.feature {
            if feature != feature_id {
                return false;
            }
        }
        if let Some(files) = &self.files {
            if !files.is_match(file) {
                return false;
            }
        }
        true
    }
}
