use clap::Parser;
use roman_batch::utils::{logger, validation::Validate};
use roman_batch::{BatchEngine, BatchPipeline, CliConfig, LocalStorage, NumeralConverter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roman-batch CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.is_interactive() {
        let converter = NumeralConverter::new(config.mode);
        let mut failed = 0;
        for number in &config.numbers {
            match converter.convert(*number) {
                Ok(numeral) => println!("{}\t{}", number, numeral),
                Err(e) => {
                    failed += 1;
                    eprintln!("❌ {}", e.user_friendly_message());
                }
            }
        }
        if failed > 0 {
            tracing::debug!("{} value(s) could not be converted", failed);
            std::process::exit(1);
        }
        return Ok(());
    }

    let storage = LocalStorage::default();
    let engine = BatchEngine::new(BatchPipeline::new(storage, config));

    match engine.run().await {
        Ok(report) => {
            println!(
                "✅ Converted {}/{} values ({} failed)",
                report.summary.converted, report.summary.total, report.summary.failed
            );
            for output in &report.outputs {
                println!("📁 {}", output);
            }
        }
        Err(e) => e.report_and_exit(),
    }

    Ok(())
}
