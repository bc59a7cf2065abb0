use clap::Parser;
use manifest_prune::utils::error::ErrorSeverity;
use manifest_prune::utils::{logger, validation::Validate};
use manifest_prune::core::remover::render_plan;
use manifest_prune::{CliConfig, LocalStorage, ManifestPipeline, PruneEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting manifest-prune");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證指令
    if let Err(e) = config.resolve_directives().and_then(|_| config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ManifestPipeline::new(storage, config);
    let engine = PruneEngine::new(pipeline);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match engine.plan().await.and_then(|reports| render_plan(&reports)) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(e),
        }
        return Ok(());
    }

    match engine.run().await {
        Ok((result, Some(path))) => {
            tracing::info!(
                "✅ Removed {} keys, output saved to: {}",
                result.removed_count(),
                path
            );
        }
        Ok((result, None)) => {
            // 沒有指定輸出檔時直接寫到 stdout
            print!("{}", result.manifest);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: manifest_prune::PruneError) -> ! {
    tracing::error!(
        "❌ Pruning failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
