use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::FsEntry;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    files: HashMap<PathBuf, String>,
    unwritable: Vec<PathBuf>,
    writes: Vec<(PathBuf, String)>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(path.into(), contents.into());
    }

    pub fn deny_write(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.unwritable.push(path.into());
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }

    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.writes.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.responses.contains_key(path) || inner.files.contains_key(path)
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        let inner = self.inner.lock().expect("mock fs lock");
        Ok(inner.files.get(path).cloned())
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        if inner.unwritable.iter().any(|denied| denied == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            ));
        }
        inner.writes.push((path.to_path_buf(), contents.to_owned()));
        inner.files.insert(path.to_path_buf(), contents.to_owned());
        Ok(())
    }
}
