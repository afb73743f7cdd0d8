use crate::core::{Manifest, Registration, RegistrationSource};
use crate::utils::error::{AnalyzerError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(ManifestFormat::Toml),
            Some("json") => Ok(ManifestFormat::Json),
            _ => Err(AnalyzerError::UnsupportedManifestFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Manifest> {
    let manifest = match format {
        ManifestFormat::Toml => toml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
    };
    Ok(manifest)
}

/// Registration manifest exported by the host, read from disk.
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistrationSource for ManifestFile {
    fn load(&self) -> Result<Vec<Registration>> {
        let format = ManifestFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path)?;
        tracing::debug!("Parsing {:?} manifest ({} bytes)", format, content.len());

        let manifest = parse_manifest(&content, format)?;
        Ok(manifest.registrations)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
