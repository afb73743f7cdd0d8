use crate::config::filter::FilterConfig;
use crate::core::report::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

/// Analyzer settings file, e.g. `di-analyzer.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerSettings {
    pub input: Option<InputConfig>,
    pub filter: Option<FilterConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub manifest: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<ReportFormat>,
    pub limit: Option<usize>,
}

impl AnalyzerSettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SERVICES_MANIFEST})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn manifest(&self) -> Option<&str> {
        self.input.as_ref().and_then(|input| input.manifest.as_deref())
    }

    pub fn report_format(&self) -> Option<ReportFormat> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn report_limit(&self) -> Option<usize> {
        self.report.as_ref().and_then(|report| report.limit)
    }
}

impl Validate for AnalyzerSettings {
    fn validate(&self) -> Result<()> {
        if let Some(manifest) = self.manifest() {
            validate_path("input.manifest", manifest)?;
        }
        if let Some(limit) = self.report_limit() {
            validate_positive_number("report.limit", limit, 1)?;
        }
        if let Some(filter) = &self.filter {
            filter.validate()?;
        }
        Ok(())
    }
}
