use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration lifetime as declared in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    #[serde(alias = "Singleton")]
    Singleton,
    #[serde(alias = "Scoped")]
    Scoped,
    #[serde(alias = "Transient")]
    Transient,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lifetime::Singleton => "singleton",
            Lifetime::Scoped => "scoped",
            Lifetime::Transient => "transient",
        };
        f.write_str(name)
    }
}

/// One container registration, with its constructor signatures extracted
/// ahead of time by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registration {
    #[serde(default, alias = "serviceType")]
    pub service_type: Option<String>,
    #[serde(default, alias = "implementationType")]
    pub implementation_type: Option<String>,
    #[serde(default)]
    pub lifetime: Option<Lifetime>,
    /// Parameter type names of each public constructor.
    #[serde(default)]
    pub constructors: Vec<Vec<String>>,
}

impl Registration {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: Some(service_type.into()),
            ..Self::default()
        }
    }

    pub fn implemented_by(mut self, implementation_type: impl Into<String>) -> Self {
        self.implementation_type = Some(implementation_type.into());
        self
    }

    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    pub fn with_constructor<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constructors
            .push(parameters.into_iter().map(Into::into).collect());
        self
    }
}

/// Top-level shape of a registration manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub registrations: Vec<Registration>,
}
