use clap::Parser;
use contact_log::utils::{logger, validation::Validate};
use contact_log::{CliConfig, ContactLogPipeline, LocalStorage, LogPageEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting contact-log CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證參數
    if let Err(e) = config.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = ContactLogPipeline::new(LocalStorage::default(), config);
    let engine = LogPageEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("Successfully generated {}", output_path.display());
        }
        Err(e) => {
            tracing::error!("❌ Generation failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
