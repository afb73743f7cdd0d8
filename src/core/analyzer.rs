use crate::core::service::Service;
use crate::core::tree::ServiceTree;
use crate::domain::model::Registration;
use crate::domain::ports::RegistrationFilter;

/// Entry point: filter the registrations and build their dependency tree.
pub struct Analyzer;

impl Analyzer {
    pub fn check_dependencies<F>(registrations: &[Registration], filter: &F) -> ServiceTree
    where
        F: RegistrationFilter + ?Sized,
    {
        let services = Self::create_services(registrations, filter);
        tracing::debug!(
            "{} of {} registrations passed the filter",
            services.len(),
            registrations.len()
        );

        ServiceTree::new(services)
    }

    fn create_services<F>(registrations: &[Registration], filter: &F) -> Vec<Service>
    where
        F: RegistrationFilter + ?Sized,
    {
        registrations
            .iter()
            .filter(|registration| filter.accepts(registration))
            .map(Service::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registrations() -> Vec<Registration> {
        vec![
            Registration::new("Microsoft.Extensions.Logging.ILoggerFactory")
                .implemented_by("Microsoft.Extensions.Logging.LoggerFactory"),
            Registration::new("Shop.IRepo").implemented_by("Shop.Repo"),
            Registration::new("Shop.IService")
                .implemented_by("Shop.Service")
                .with_constructor(["Shop.IRepo", "Microsoft.Extensions.Logging.ILoggerFactory"]),
        ]
    }

    #[test]
    fn test_accept_all_keeps_every_registration() {
        let registrations = registrations();
        let tree = Analyzer::check_dependencies(&registrations, &|_: &Registration| true);
        assert_eq!(tree.len(), registrations.len());
        assert_eq!(tree.find("IService").unwrap().total_child_count(), 2);
    }

    #[test]
    fn test_filtered_out_services_are_not_matched() {
        let registrations = registrations();
        let own_services = |registration: &Registration| {
            registration
                .service_type
                .as_deref()
                .is_some_and(|name| name.starts_with("Shop."))
        };

        let tree = Analyzer::check_dependencies(&registrations, &own_services);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.find("IService").unwrap().total_child_count(), 1);
        assert!(tree.find("ILoggerFactory").is_none());
    }
}
