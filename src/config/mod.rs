#[cfg(feature = "cli")]
pub mod cli;
pub mod filter;
pub mod toml_config;

use crate::core::report::ReportSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use filter::FilterConfig;

/// Fully resolved settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub manifest: String,
    pub filter: FilterConfig,
    pub report: ReportSettings,
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Result<()> {
        validate_path("manifest", &self.manifest)?;
        if let Some(limit) = self.report.limit {
            validate_positive_number("limit", limit, 1)?;
        }
        self.filter.validate()
    }
}
