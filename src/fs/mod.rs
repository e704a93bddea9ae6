mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Reads a text file, decoding invalid UTF-8 lossily.
    /// Returns `Ok(None)` when the file does not exist.
    async fn read_to_string(&self, path: &Path) -> Result<Option<String>>;

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}
