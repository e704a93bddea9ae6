/// Rendered tree lines: the root display name followed by one line per
/// visible entry, in traversal order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectStructure {
    lines: Vec<String>,
}

impl ProjectStructure {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            lines: vec![root_name.into()],
        }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of entries below the root.
    pub fn entry_count(&self) -> usize {
        self.lines.len() - 1
    }
}
