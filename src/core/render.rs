use crate::models::ProjectStructure;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// One tree line. Files carry a `- ` marker before their name, directories don't.
pub fn entry_line(prefix: &str, is_last: bool, name: &str, is_dir: bool) -> String {
    let connector = connector(is_last);
    if is_dir {
        format!("{prefix}{connector}{name}")
    } else {
        format!("{prefix}{connector}- {name}")
    }
}

/// Prefix handed to the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
    format!("{prefix}{indent}")
}

/// Joins the lines with `\n`, without a trailing newline.
pub fn render_to_string(structure: &ProjectStructure) -> String {
    structure.lines().join("\n")
}
