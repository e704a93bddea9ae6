use std::path::{Component, Path, PathBuf};

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use app::{Generated, generate};
pub use config::ScanConfig;
pub use error::GenerateError;

/// Name printed on the first line of the tree: the base name of the
/// absolute form of `root_path`, resolved against `cwd` when relative.
/// The filesystem root has no base name and is shown as-is.
pub fn root_display_name(root_path: &Path, cwd: &Path) -> String {
    let absolute = if root_path.is_absolute() {
        normalize(root_path)
    } else {
        normalize(&cwd.join(root_path))
    };

    absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| absolute.as_os_str().to_string_lossy().into_owned())
}

/// Lexically resolves `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
