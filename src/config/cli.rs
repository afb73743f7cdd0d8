use crate::config::filter::FilterConfig;
use crate::config::toml_config::AnalyzerSettings;
use crate::config::AnalysisConfig;
use crate::core::report::{ReportFormat, ReportSettings};
use crate::core::Lifetime;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "di-analyzer")]
#[command(version)]
#[command(about = "Rank dependency-injection registrations by their total dependency count")]
pub struct CliConfig {
    /// Registration manifest exported by the host (.toml or .json)
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Analyzer settings file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only analyze service types matching this regex (repeatable)
    #[arg(long)]
    pub include: Vec<String>,

    /// Skip service types matching this regex (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Only analyze registrations with this lifetime (repeatable)
    #[arg(long, value_enum)]
    pub lifetime: Vec<Lifetime>,

    /// Skip registrations without an implementation type
    #[arg(long)]
    pub require_implementation: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Print only the first N services
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Combines the settings file (if any) with command-line flags; flags win.
    pub fn resolve(&self) -> Result<AnalysisConfig> {
        let settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path);
                let settings = AnalyzerSettings::from_file(path)?;
                settings.validate()?;
                settings
            }
            None => AnalyzerSettings::default(),
        };
        self.resolve_with(settings)
    }

    pub fn resolve_with(&self, settings: AnalyzerSettings) -> Result<AnalysisConfig> {
        let manifest = self
            .manifest
            .clone()
            .or_else(|| settings.manifest().map(str::to_string));
        let manifest = validate_required_field("manifest", &manifest)?.clone();

        let mut filter = settings.filter.clone().unwrap_or_default();
        filter.merge(FilterConfig {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            lifetimes: self.lifetime.clone(),
            require_implementation: self.require_implementation,
        });

        let report = ReportSettings {
            format: self
                .format
                .or(settings.report_format())
                .unwrap_or_default(),
            limit: self.limit.or(settings.report_limit()),
        };

        let config = AnalysisConfig {
            manifest,
            filter,
            report,
        };
        config.validate()?;
        Ok(config)
    }
}
