use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || -> Result<Vec<FsEntry>> {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                // Symlinks are classified by their target; dangling ones end up as Other.
                let kind = match std::fs::metadata(&path) {
                    Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
                    Ok(metadata) if metadata.is_file() => EntryKind::File,
                    _ => EntryKind::Other,
                };

                entries.push(FsEntry {
                    path,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
