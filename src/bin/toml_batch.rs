use clap::Parser;
use roman_batch::core::ConfigProvider;
use roman_batch::utils::{logger, validation::Validate};
use roman_batch::{BatchEngine, BatchPipeline, ConversionMode, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-batch")]
#[command(about = "Batch Roman numeral conversion driven by a TOML job file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "roman-batch.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override conversion mode from config
    #[arg(long, value_enum)]
    mode: Option<ConversionMode>,

    /// Dry run - convert and report without writing any output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based batch conversion");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 套用命令列覆蓋設定
    if let Some(mode) = args.mode {
        config.convert.mode = mode;
        tracing::info!("🔧 Conversion mode overridden to: {}", mode);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    let engine = BatchEngine::new(BatchPipeline::new(LocalStorage::default(), config));

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output files will be written");
        let result = match engine.preview().await {
            Ok(result) => result,
            Err(e) => {
                e.report_and_exit();
                return Ok(());
            }
        };
        for record in &result.records {
            match (&record.numeral, &record.error) {
                (Some(numeral), _) => println!("{:>5}  {}\t{}", record.line, record.input, numeral),
                (None, error) => println!(
                    "{:>5}  {}\t(error: {})",
                    record.line,
                    record.input,
                    error.as_deref().unwrap_or("unknown")
                ),
            }
        }
        println!(
            "🔍 Would convert {}/{} values",
            result.summary.converted, result.summary.total
        );
        return Ok(());
    }

    match engine.run().await {
        Ok(report) => {
            println!("✅ Job '{}' completed", report.summary.job);
            for output in &report.outputs {
                println!("📁 Output saved to: {}", output);
            }
        }
        Err(e) => e.report_and_exit(),
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        println!("   {}", description);
    }
    match config.input_path() {
        Some(input) => println!("📥 Input: {}", input),
        None => println!("📥 Values: {:?}", config.inline_values()),
    }
    println!("🔢 Mode: {}", config.mode());
    println!("📤 Output: {} {:?}", config.output_path(), config.output_formats());
    if let Some(archive) = config.archive_name() {
        println!("📦 Archive: {}", archive);
    }
}
