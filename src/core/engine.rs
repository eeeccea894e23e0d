use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::PathBuf;

pub struct LogPageEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> LogPageEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order and returns the written path.
    pub async fn run(&self) -> Result<PathBuf> {
        tracing::info!("Starting contact log generation");

        let log = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} records with {} columns",
            log.table.len(),
            log.table.headers().len()
        );
        self.monitor.log_stats("Extract");

        let page = self.pipeline.transform(log).await?;
        tracing::info!("Rendered page with {} rows", page.row_count);
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(page).await?;
        tracing::info!("Output saved to: {}", output_path.display());
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
