use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::fs::FileSystem;

pub const GITIGNORE_FILE: &str = ".gitignore";

/// Raw glob lines from a `.gitignore` file, in file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GitignorePatterns {
    patterns: Vec<String>,
}

impl GitignorePatterns {
    /// Keeps every trimmed line that is neither blank nor a `#` comment.
    /// Nothing else is interpreted: `!`, trailing `/` and inline `#` stay part of the pattern.
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();

        Self { patterns }
    }

    /// Loads `<root>/.gitignore`. A missing file yields an empty set.
    pub async fn load<F: FileSystem>(fs: &F, root: &Path) -> anyhow::Result<Self> {
        let path = root.join(GITIGNORE_FILE);
        let text = fs
            .read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        let patterns = match text {
            Some(text) => Self::parse(&text),
            None => {
                debug!(path = %path.display(), "no gitignore file");
                Self::default()
            }
        };
        if !patterns.is_empty() {
            debug!(count = patterns.len(), "loaded gitignore patterns");
        }
        Ok(patterns)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
