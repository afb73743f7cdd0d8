use crate::domain::model::{Lifetime, Registration};
use crate::utils::type_name::simple_name;
use std::borrow::Cow;
use std::io::{self, Write};

/// Position of a service inside its [`ServiceTree`](crate::core::tree::ServiceTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(pub(crate) usize);

impl ServiceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One registration taking part in an analysis, plus the services its
/// constructors were matched against.
#[derive(Debug, Clone)]
pub struct Service {
    name: Option<String>,
    service_type: Option<String>,
    implementation_type: Option<String>,
    lifetime: Option<Lifetime>,
    constructors: Vec<Vec<String>>,
    children: Vec<ServiceId>,
}

impl Service {
    pub fn new(registration: &Registration) -> Self {
        Self {
            name: registration
                .service_type
                .as_deref()
                .and_then(simple_name)
                .map(Cow::into_owned),
            service_type: registration.service_type.clone(),
            implementation_type: registration.implementation_type.clone(),
            lifetime: registration.lifetime,
            constructors: registration.constructors.clone(),
            children: Vec::new(),
        }
    }

    /// Simple name of the declared service type.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn service_type(&self) -> Option<&str> {
        self.service_type.as_deref()
    }

    pub fn implementation_type(&self) -> Option<&str> {
        self.implementation_type.as_deref()
    }

    pub fn lifetime(&self) -> Option<Lifetime> {
        self.lifetime
    }

    pub fn children(&self) -> &[ServiceId] {
        &self.children
    }

    /// Appends without deduplication.
    pub fn add_children<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = ServiceId>,
    {
        self.children.extend(children);
    }

    /// Simple names of every parameter of every constructor that takes at least one.
    pub fn parameter_type_names(&self) -> Vec<Cow<'_, str>> {
        self.constructors
            .iter()
            .filter(|parameters| !parameters.is_empty())
            .flat_map(|parameters| parameters.iter())
            .filter_map(|parameter| simple_name(parameter))
            .collect()
    }
}

impl From<&Registration> for Service {
    fn from(registration: &Registration) -> Self {
        Service::new(registration)
    }
}

/// A service seen through the tree that owns it, so children can be followed.
#[derive(Debug, Clone, Copy)]
pub struct ServiceRef<'a> {
    services: &'a [Service],
    id: ServiceId,
}

impl<'a> ServiceRef<'a> {
    pub(crate) fn new(services: &'a [Service], id: ServiceId) -> Self {
        Self { services, id }
    }

    pub fn id(&self) -> ServiceId {
        self.id
    }

    pub fn service(&self) -> &'a Service {
        &self.services[self.id.0]
    }

    pub fn name(&self) -> Option<&'a str> {
        self.service().name()
    }

    pub fn children(&self) -> impl Iterator<Item = ServiceRef<'a>> + 'a {
        let services = self.services;
        self.service()
            .children
            .iter()
            .map(move |&id| ServiceRef::new(services, id))
    }

    /// Size of the whole subtree below this service. Recomputed on every call;
    /// a cyclic graph never returns.
    pub fn total_child_count(&self) -> usize {
        let own_child_count = self.service().children.len();
        let grand_child_count: usize = self.children().map(|child| child.total_child_count()).sum();

        own_child_count + grand_child_count
    }

    /// Writes `"<name>: <count> children"`.
    pub fn present_summary<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}: {} children",
            self.name().unwrap_or_default(),
            self.total_child_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(service_type: &str) -> Service {
        Service::new(&Registration::new(service_type))
    }

    #[test]
    fn test_name_is_simple_type_name() {
        assert_eq!(service("Shop.Orders.IOrderService").name(), Some("IOrderService"));
    }

    #[test]
    fn test_captures_registration() {
        let registration = Registration::new("Shop.IRepo")
            .implemented_by("Shop.Repo")
            .with_lifetime(Lifetime::Scoped);
        let service = Service::from(&registration);

        assert_eq!(service.service_type(), Some("Shop.IRepo"));
        assert_eq!(service.implementation_type(), Some("Shop.Repo"));
        assert_eq!(service.lifetime(), Some(Lifetime::Scoped));
        assert!(service.children().is_empty());
    }

    #[test]
    fn test_generic_service_name_uses_arity() {
        assert_eq!(service("Shop.IHandler<Shop.Order>").name(), Some("IHandler`1"));
    }

    #[test]
    fn test_name_absent_without_service_type() {
        let unnamed = Service::new(&Registration::default());
        assert_eq!(unnamed.name(), None);
    }

    #[test]
    fn test_add_children_appends_duplicates() {
        let mut parent = service("IParent");
        parent.add_children([ServiceId(1), ServiceId(2)]);
        parent.add_children([ServiceId(1)]);
        assert_eq!(parent.children(), &[ServiceId(1), ServiceId(2), ServiceId(1)]);
    }

    #[test]
    fn test_parameter_names_skip_parameterless_constructors() {
        let registration = Registration::new("IOrderService")
            .implemented_by("OrderService")
            .with_constructor(Vec::<String>::new())
            .with_constructor(["Shop.IRepo", "Shop.ILogger"])
            .with_constructor(["Shop.IRepo"]);
        let service = Service::new(&registration);

        assert_eq!(service.parameter_type_names(), vec!["IRepo", "ILogger", "IRepo"]);
    }

    #[test]
    fn test_total_child_count_sums_subtree() {
        // 0 -> 1 -> 2, 0 -> 2
        let mut services = vec![service("IA"), service("IB"), service("IC")];
        services[0].add_children([ServiceId(1), ServiceId(2)]);
        services[1].add_children([ServiceId(2)]);

        let root = ServiceRef::new(&services, ServiceId(0));
        assert_eq!(root.total_child_count(), 3);
        assert_eq!(ServiceRef::new(&services, ServiceId(1)).total_child_count(), 1);
        assert_eq!(ServiceRef::new(&services, ServiceId(2)).total_child_count(), 0);
    }

    #[test]
    fn test_present_summary_line() {
        let mut services = vec![service("Shop.IA"), service("Shop.IB")];
        services[0].add_children([ServiceId(1)]);

        let mut out = Vec::new();
        ServiceRef::new(&services, ServiceId(0))
            .present_summary(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "IA: 1 children\n");
    }

    #[test]
    fn test_present_summary_without_name() {
        let services = vec![Service::new(&Registration::default())];
        let mut out = Vec::new();
        ServiceRef::new(&services, ServiceId(0))
            .present_summary(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ": 0 children\n");
    }
}
