use anyhow::Context;
use clap::Parser;
use di_analyzer::utils::logger;
use di_analyzer::{AnalysisEngine, AnalyzerError, CliConfig, ManifestFile};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting di-analyzer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<AnalyzerError>() {
            Some(err) => {
                tracing::error!(
                    "❌ Analysis failed: {:#} (Category: {:?})",
                    e,
                    err.category()
                );
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = cli.resolve().context("invalid configuration")?;

    if !config.filter.lifetimes.is_empty() {
        let lifetimes: Vec<String> = config.filter.lifetimes.iter().map(ToString::to_string).collect();
        tracing::info!("🔧 Restricting to lifetimes: {}", lifetimes.join(", "));
    }

    let filter = config.filter.compile()?;
    let source = ManifestFile::new(&config.manifest);
    let engine = AnalysisEngine::new(source, filter, config.report.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = engine
        .run(&mut out)
        .with_context(|| format!("failed to analyze {}", config.manifest))?;

    tracing::info!(
        "✅ Analyzed {} of {} registrations",
        summary.analyzed,
        summary.registrations
    );
    Ok(())
}
