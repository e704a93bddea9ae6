use std::collections::HashSet;
use std::path::{MAIN_SEPARATOR, Path};

use anyhow::Context;
use regex::{Regex, RegexSet};
use tracing::{trace, warn};

use super::gitignore::GitignorePatterns;

/// Pre-compiled shell-glob patterns matched against whole path strings.
/// Separates exact-match patterns from glob patterns for optimal performance.
pub struct CompiledPatterns {
    /// Patterns without wildcards - use fast exact matching
    exact_matches: HashSet<String>,
    /// Compiled regex set for glob patterns with wildcards
    regex_set: Option<RegexSet>,
}

impl CompiledPatterns {
    /// Compile glob patterns into efficient matchers.
    /// Patterns whose translation is not a valid regex are skipped with a warning.
    pub fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Self> {
        let mut exact_matches = HashSet::new();
        let mut regex_patterns = Vec::new();

        for pattern in patterns {
            if !has_wildcard(pattern) {
                exact_matches.insert(pattern.to_owned());
                continue;
            }

            let regex_str = glob_to_regex(pattern);
            match Regex::new(&regex_str) {
                Ok(_) => regex_patterns.push(regex_str),
                Err(err) => warn!(pattern, error = %err, "skipping unusable ignore pattern"),
            }
        }

        let regex_set = if regex_patterns.is_empty() {
            None
        } else {
            Some(RegexSet::new(&regex_patterns).context("failed to compile ignore patterns")?)
        };

        Ok(Self {
            exact_matches,
            regex_set,
        })
    }

    /// Check if a path string matches any of the compiled patterns.
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        if self.exact_matches.contains(path) {
            return true;
        }

        if let Some(ref regex_set) = self.regex_set {
            return regex_set.is_match(path);
        }

        false
    }
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Convert a shell glob to an anchored regex string.
///
/// `*` matches any run of characters (path separators included), `?` exactly one,
/// `[...]` is a character class and `[!...]` its negation. A `[` with no closing
/// `]` is taken literally.
fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex_pattern = String::with_capacity(pattern.len() * 2 + 6);
    regex_pattern.push_str("(?s)^");

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                regex_pattern.push_str(".*");
            }
            '?' => regex_pattern.push('.'),
            '[' => {
                let mut end = i;
                if end < chars.len() && chars[end] == '!' {
                    end += 1;
                }
                if end < chars.len() && chars[end] == ']' {
                    end += 1;
                }
                while end < chars.len() && chars[end] != ']' {
                    end += 1;
                }

                if end >= chars.len() {
                    regex_pattern.push_str(r"\[");
                    continue;
                }

                push_class(&mut regex_pattern, &chars[i..end]);
                i = end + 1;
            }
            _ => regex_pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    regex_pattern.push('$');
    regex_pattern
}

fn push_class(regex_pattern: &mut String, body: &[char]) {
    regex_pattern.push('[');
    let body = match body.split_first() {
        Some(('!', rest)) => {
            regex_pattern.push('^');
            rest
        }
        _ => body,
    };
    for &c in body {
        match c {
            // `-` stays bare so ranges keep working
            '\\' | '[' | ']' | '^' | '&' | '~' => {
                regex_pattern.push('\\');
                regex_pattern.push(c);
            }
            _ => regex_pattern.push(c),
        }
    }
    regex_pattern.push(']');
}

/// The exclusion rules for one scan: hidden names, ignored directory names,
/// ignored suffixes and gitignore globs.
pub struct IgnoreRules {
    ignore_dirs: Vec<String>,
    ignore_exts: Vec<String>,
    gitignore: CompiledPatterns,
}

impl IgnoreRules {
    pub fn new(
        ignore_dirs: &[String],
        ignore_exts: &[String],
        gitignore: &GitignorePatterns,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            ignore_dirs: ignore_dirs.to_vec(),
            ignore_exts: ignore_exts.to_vec(),
            gitignore: CompiledPatterns::new(gitignore.iter())?,
        })
    }

    /// Returns true if `path` is excluded by any rule.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let is_hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        if is_hidden {
            trace!(path = %path.display(), "hidden");
            return true;
        }

        let path_str = path.to_string_lossy();

        if path_str
            .split(MAIN_SEPARATOR)
            .any(|segment| self.ignore_dirs.iter().any(|dir| dir == segment))
        {
            trace!(path = %path_str, "ignored directory segment");
            return true;
        }

        if self.ignore_exts.iter().any(|ext| path_str.ends_with(ext.as_str())) {
            trace!(path = %path_str, "ignored extension");
            return true;
        }

        if self.gitignore.matches(&path_str) {
            trace!(path = %path_str, "gitignore pattern");
            return true;
        }

        false
    }
}
