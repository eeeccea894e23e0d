use crate::config::profile::ProfileFormat;
use crate::core::render::render_page;
use crate::core::{
    ConfigProvider, ContactLog, LogTable, Pipeline, RenderedPage, StationProfile, Storage,
};
use crate::utils::error::{ContactLogError, Result};
use chrono::Datelike;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Station profile + CSV log → one HTML page.
pub struct ContactLogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ContactLogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn load_profile(&self) -> Result<StationProfile> {
        let path = self.config.config_path();
        tracing::debug!("Loading station profile from {}", path.display());

        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|source| ContactLogError::ConfigReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let format = ProfileFormat::from_path(path);
        let profile = StationProfile::from_bytes(&bytes, format).map_err(|source| {
            ContactLogError::ConfigParseError {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!("Loaded {} profile fields ({:?})", profile.len(), format);
        Ok(profile)
    }

    async fn read_log(&self) -> Result<LogTable> {
        let path = self.config.csv_path();
        tracing::debug!("Reading contact log from {}", path.display());

        let bytes = self.storage.read_file(path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ContactLogError::CsvNotFoundError {
                    path: path.to_path_buf(),
                }
            } else {
                ContactLogError::CsvReadError {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        LogTable::from_csv_bytes(&bytes).map_err(|source| ContactLogError::CsvParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ContactLogPipeline<S, C> {
    async fn extract(&self) -> Result<ContactLog> {
        let profile = self.load_profile().await?;
        let table = self.read_log().await?;
        if profile.get("callsign").is_none() {
            tracing::warn!("Station profile has no callsign; the page header will be blank");
        }
        Ok(ContactLog { profile, table })
    }

    async fn transform(&self, log: ContactLog) -> Result<RenderedPage> {
        let year = chrono::Local::now().year();
        let html = render_page(&log.profile, &log.table, year);
        tracing::debug!("Rendered {} bytes of HTML", html.len());
        Ok(RenderedPage {
            html,
            row_count: log.table.len(),
        })
    }

    async fn load(&self, page: RenderedPage) -> Result<PathBuf> {
        let path = self.config.output_path();
        self.storage
            .write_file(path, page.html.as_bytes())
            .await
            .map_err(|source| ContactLogError::OutputWriteError {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Wrote {} rows to {}", page.row_count, path.display());
        Ok(path.to_path_buf())
    }
}
