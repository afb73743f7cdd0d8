use crate::domain::model::Registration;
use crate::utils::error::Result;

/// Where registrations come from (a manifest file, an in-memory list, ...).
pub trait RegistrationSource {
    fn load(&self) -> Result<Vec<Registration>>;
    fn describe(&self) -> String;
}

/// Selects which registrations take part in an analysis run.
pub trait RegistrationFilter {
    fn accepts(&self, registration: &Registration) -> bool;
}

impl<F> RegistrationFilter for F
where
    F: Fn(&Registration) -> bool,
{
    fn accepts(&self, registration: &Registration) -> bool {
        self(registration)
    }
}
