use crate::core::{Registration, RegistrationSource};
use crate::utils::error::Result;

/// Registrations already held in memory, e.g. built by an embedding host.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    registrations: Vec<Registration>,
}

impl InMemorySource {
    pub fn new(registrations: Vec<Registration>) -> Self {
        Self { registrations }
    }
}

impl RegistrationSource for InMemorySource {
    fn load(&self) -> Result<Vec<Registration>> {
        Ok(self.registrations.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} registrations)", self.registrations.len())
    }
}
