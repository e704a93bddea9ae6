use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "/";
pub const DEFAULT_OUTPUT: &str = "project_structure";
pub const OUTPUT_SUFFIX: &str = ".md";

/// Settings for one run, built once from the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanConfig {
    pub source: PathBuf,
    /// Destination file, already carrying the `.md` suffix.
    pub output: PathBuf,
    pub ignore_dirs: Vec<String>,
    /// Suffixes, each starting with `.`.
    pub ignore_exts: Vec<String>,
}

impl ScanConfig {
    pub fn new(source: impl Into<PathBuf>, output: &str, ignore_dirs: &str, ignore_exts: &str) -> Self {
        Self {
            source: source.into(),
            output: output_path(output),
            ignore_dirs: split_list(ignore_dirs),
            ignore_exts: split_list(ignore_exts)
                .into_iter()
                .map(|ext| normalize_extension(&ext))
                .collect(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_OUTPUT, "", "")
    }
}

/// Splits a comma-separated flag value and trims each entry. An empty value
/// yields no entries; empty entries inside a non-empty value are kept.
fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|item| item.trim().to_owned()).collect()
}

fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_owned()
    } else {
        format!(".{ext}")
    }
}

fn output_path(raw: &str) -> PathBuf {
    if raw.ends_with(OUTPUT_SUFFIX) {
        PathBuf::from(raw)
    } else {
        PathBuf::from(format!("{raw}{OUTPUT_SUFFIX}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.source, PathBuf::from("/"));
        assert_eq!(config.output, PathBuf::from("project_structure.md"));
        assert!(config.ignore_dirs.is_empty());
        assert!(config.ignore_exts.is_empty());
    }

    #[test]
    fn output_suffix_added_once() {
        assert_eq!(output_path("tree"), PathBuf::from("tree.md"));
        assert_eq!(output_path("docs/tree.md"), PathBuf::from("docs/tree.md"));
        assert_eq!(output_path("tree.txt"), PathBuf::from("tree.txt.md"));
    }

    #[test]
    fn lists_are_trimmed() {
        let config = ScanConfig::new(".", "out", " node_modules , target", "");
        assert_eq!(config.ignore_dirs, vec!["node_modules", "target"]);
    }

    #[test]
    fn empty_list_items_are_kept() {
        let config = ScanConfig::new("/p", "out", "a,,b", "log,");
        assert_eq!(config.ignore_dirs, vec!["a", "", "b"]);
        assert_eq!(config.ignore_exts, vec![".log", "."]);
    }

    #[test]
    fn extensions_get_a_leading_dot() {
        let config = ScanConfig::new(".", "out", "", "log, .tmp ,bak");
        assert_eq!(config.ignore_exts, vec![".log", ".tmp", ".bak"]);
    }
}
