use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::core::render::render_to_string;
use crate::core::{GitignorePatterns, IgnoreRules, walk_dir};
use crate::error::GenerateError;
use crate::fs::FileSystem;
use crate::root_display_name;

/// Outcome of a successful run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generated {
    pub output: PathBuf,
    /// Visible entries below the root.
    pub entries: usize,
}

/// Scan `config.source` and write the rendered tree to `config.output`.
///
/// `cwd` resolves relative source paths for the root display name.
pub async fn generate<F: FileSystem>(
    fs: &F,
    config: &ScanConfig,
    cwd: &Path,
) -> Result<Generated, GenerateError> {
    if !fs.exists(&config.source).await {
        return Err(GenerateError::SourceNotFound {
            path: config.source.clone(),
        });
    }

    let gitignore = GitignorePatterns::load(fs, &config.source).await?;
    let rules = IgnoreRules::new(&config.ignore_dirs, &config.ignore_exts, &gitignore)?;

    let root_name = root_display_name(&config.source, cwd);
    debug!(
        source = %config.source.display(),
        root = %root_name,
        ignore_dirs = ?config.ignore_dirs,
        ignore_exts = ?config.ignore_exts,
        "scanning"
    );

    let structure = walk_dir(fs, &config.source, &root_name, &rules).await?;
    let text = render_to_string(&structure);

    fs.write(&config.output, &text)
        .await
        .map_err(|source| GenerateError::OutputWrite {
            path: config.output.clone(),
            source,
        })?;

    info!(
        output = %config.output.display(),
        entries = structure.entry_count(),
        "wrote project structure"
    );

    Ok(Generated {
        output: config.output.clone(),
        entries: structure.entry_count(),
    })
}
