use crate::core::Storage;
use std::path::{Path, PathBuf};

/// Filesystem storage. Relative paths resolve against `base_path`; absolute
/// paths are used unchanged.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(path)).await
    }

    // The destination directory is not created; an unwritable path is an error.
    async fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(self.resolve(path), data).await
    }
}
