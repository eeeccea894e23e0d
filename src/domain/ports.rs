use crate::domain::model::{ContactLog, RenderedPage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Byte-level file access. Errors stay as `io::Error` so callers can attach
/// the path and role of the file to the failure.
pub trait Storage: Send + Sync {
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = std::io::Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn csv_path(&self) -> &Path;
    fn config_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ContactLog>;
    async fn transform(&self, log: ContactLog) -> Result<RenderedPage>;
    async fn load(&self, page: RenderedPage) -> Result<PathBuf>;
}
