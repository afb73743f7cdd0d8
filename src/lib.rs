pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{manifest_file::ManifestFile, memory::InMemorySource};
pub use crate::config::{filter::FilterConfig, AnalysisConfig};
pub use crate::core::{
    analyzer::Analyzer,
    engine::{AnalysisEngine, AnalysisSummary},
    report::{ReportFormat, ReportSettings},
    service::{Service, ServiceId, ServiceRef},
    tree::ServiceTree,
};
pub use crate::domain::model::{Lifetime, Manifest, Registration};
pub use crate::domain::ports::{RegistrationFilter, RegistrationSource};
pub use crate::utils::error::{AnalyzerError, Result};
