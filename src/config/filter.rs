use crate::core::{Lifetime, Registration, RegistrationFilter};
use crate::utils::error::Result;
use crate::utils::validation::{compile_patterns, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which registrations take part in the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Service type names must match one of these, when any are given.
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub lifetimes: Vec<Lifetime>,
    #[serde(default)]
    pub require_implementation: bool,
}

impl FilterConfig {
    /// Appends another filter's rules to this one.
    pub fn merge(&mut self, other: FilterConfig) {
        self.include.extend(other.include);
        self.exclude.extend(other.exclude);
        self.lifetimes.extend(other.lifetimes);
        self.require_implementation |= other.require_implementation;
    }

    pub fn compile(&self) -> Result<RegistrationMatcher> {
        Ok(RegistrationMatcher {
            include: compile_patterns(&self.include)?,
            exclude: compile_patterns(&self.exclude)?,
            lifetimes: self.lifetimes.clone(),
            require_implementation: self.require_implementation,
        })
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> Result<()> {
        self.compile().map(|_| ())
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationMatcher {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
    lifetimes: Vec<Lifetime>,
    require_implementation: bool,
}

impl RegistrationFilter for RegistrationMatcher {
    fn accepts(&self, registration: &Registration) -> bool {
        if self.require_implementation && registration.implementation_type.is_none() {
            return false;
        }

        if !self.lifetimes.is_empty()
            && !registration
                .lifetime
                .is_some_and(|lifetime| self.lifetimes.contains(&lifetime))
        {
            return false;
        }

        let service_type = registration.service_type.as_deref();

        if !self.include.is_empty()
            && !service_type.is_some_and(|name| self.include.iter().any(|re| re.is_match(name)))
        {
            return false;
        }

        !service_type.is_some_and(|name| self.exclude.iter().any(|re| re.is_match(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(config: FilterConfig) -> RegistrationMatcher {
        config.compile().unwrap()
    }

    #[test]
    fn test_default_accepts_everything() {
        let matcher = matcher(FilterConfig::default());
        assert!(matcher.accepts(&Registration::new("Shop.IRepo")));
        assert!(matcher.accepts(&Registration::default()));
    }

    #[test]
    fn test_exclude_framework_registrations() {
        let matcher = matcher(FilterConfig {
            exclude: vec![r"^Microsoft\.".to_string(), r"^System\.".to_string()],
            ..FilterConfig::default()
        });

        assert!(!matcher.accepts(&Registration::new("Microsoft.Extensions.Options.IOptions`1")));
        assert!(!matcher.accepts(&Registration::new("System.IServiceProvider")));
        assert!(matcher.accepts(&Registration::new("Shop.IRepo")));
        assert!(matcher.accepts(&Registration::default()));
    }

    #[test]
    fn test_include_requires_a_match() {
        let matcher = matcher(FilterConfig {
            include: vec![r"^Shop\.".to_string()],
            ..FilterConfig::default()
        });

        assert!(matcher.accepts(&Registration::new("Shop.IRepo")));
        assert!(!matcher.accepts(&Registration::new("Billing.IInvoices")));
        assert!(!matcher.accepts(&Registration::default()));
    }

    #[test]
    fn test_lifetime_and_implementation_rules() {
        let matcher = matcher(FilterConfig {
            lifetimes: vec![Lifetime::Scoped, Lifetime::Transient],
            require_implementation: true,
            ..FilterConfig::default()
        });

        let scoped = Registration::new("IRepo")
            .implemented_by("Repo")
            .with_lifetime(Lifetime::Scoped);
        assert!(matcher.accepts(&scoped));
        assert!(!matcher.accepts(&scoped.clone().with_lifetime(Lifetime::Singleton)));
        assert!(!matcher.accepts(&Registration::new("IRepo").with_lifetime(Lifetime::Scoped)));
        assert!(!matcher.accepts(&Registration::new("IRepo").implemented_by("Repo")));
    }

    #[test]
    fn test_merge_appends_rules() {
        let mut base = FilterConfig {
            exclude: vec!["^System\\.".to_string()],
            ..FilterConfig::default()
        };
        base.merge(FilterConfig {
            exclude: vec!["^Microsoft\\.".to_string()],
            require_implementation: true,
            ..FilterConfig::default()
        });

        assert_eq!(base.exclude.len(), 2);
        assert!(base.require_implementation);
    }

    #[test]
    fn test_invalid_pattern_fails_validation() {
        let config = FilterConfig {
            include: vec!["(".to_string()],
            ..FilterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
