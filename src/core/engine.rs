use crate::core::analyzer::Analyzer;
use crate::core::report::{self, ReportSettings};
use crate::domain::ports::{RegistrationFilter, RegistrationSource};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub registrations: usize,
    pub analyzed: usize,
    pub edges: usize,
}

/// Load -> filter/wire -> render.
pub struct AnalysisEngine<S: RegistrationSource, F: RegistrationFilter> {
    source: S,
    filter: F,
    settings: ReportSettings,
}

impl<S: RegistrationSource, F: RegistrationFilter> AnalysisEngine<S, F> {
    pub fn new(source: S, filter: F, settings: ReportSettings) -> Self {
        Self {
            source,
            filter,
            settings,
        }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<AnalysisSummary> {
        tracing::info!("Loading registrations from {}", self.source.describe());
        let registrations = self.source.load()?;
        tracing::info!("Loaded {} registrations", registrations.len());

        let tree = Analyzer::check_dependencies(&registrations, &self.filter);
        let summary = AnalysisSummary {
            registrations: registrations.len(),
            analyzed: tree.len(),
            edges: tree.edge_count(),
        };
        tracing::info!(
            "Analyzing {} services ({} dependency edges)",
            summary.analyzed,
            summary.edges
        );

        tracing::debug!("Rendering {} report", self.settings.format);
        report::render(&tree, &self.settings, out)?;

        Ok(summary)
    }
}
