use crate::core::service::{Service, ServiceId, ServiceRef};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::io::{self, Write};

pub const START_BANNER: &str = "---------------Services---------------";
pub const END_BANNER: &str = "--------------------------------------";

/// The services of one analysis run, wired parent -> child by constructor
/// parameter names.
#[derive(Debug, Clone)]
pub struct ServiceTree {
    services: Vec<Service>,
}

impl ServiceTree {
    pub fn new(services: Vec<Service>) -> Self {
        let mut tree = Self { services };
        tree.connect_children();
        tree
    }

    fn connect_children(&mut self) {
        let wiring: Vec<(usize, Vec<ServiceId>)> = self
            .services
            .iter()
            .enumerate()
            .filter(|(_, service)| service.implementation_type().is_some())
            .map(|(index, service)| (index, self.matching_children(service)))
            .collect();

        let mut edges = 0;
        for (index, children) in wiring {
            tracing::debug!(
                "{} -> {} children",
                self.services[index].name().unwrap_or("<unnamed>"),
                children.len()
            );
            edges += children.len();
            self.services[index].add_children(children);
        }

        tracing::debug!("Wired {} edges across {} services", edges, self.services.len());
    }

    /// Every service whose name equals one of the parameter type names, in
    /// tree order. A service is matched at most once however often its name
    /// appears among the parameters.
    fn matching_children(&self, service: &Service) -> Vec<ServiceId> {
        let parameter_names: HashSet<_> = service.parameter_type_names().into_iter().collect();

        self.services
            .iter()
            .enumerate()
            .filter(|(_, candidate)| {
                candidate
                    .name()
                    .is_some_and(|name| parameter_names.contains(name))
            })
            .map(|(index, _)| ServiceId(index))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn get(&self, id: ServiceId) -> Option<ServiceRef<'_>> {
        (id.0 < self.services.len()).then(|| ServiceRef::new(&self.services, id))
    }

    /// First service carrying the given simple name.
    pub fn find(&self, name: &str) -> Option<ServiceRef<'_>> {
        self.services()
            .find(|service| service.name() == Some(name))
    }

    pub fn services(&self) -> impl Iterator<Item = ServiceRef<'_>> + '_ {
        (0..self.services.len()).map(move |index| ServiceRef::new(&self.services, ServiceId(index)))
    }

    pub fn edge_count(&self) -> usize {
        self.services.iter().map(|service| service.children().len()).sum()
    }

    /// Services by descending total child count; ties keep tree order.
    pub fn ordered_by_total_child_count(&self) -> Vec<ServiceRef<'_>> {
        let mut ranked: Vec<(usize, ServiceRef<'_>)> = self
            .services()
            .map(|service| (service.total_child_count(), service))
            .collect();
        // sort_by_key is stable
        ranked.sort_by_key(|(count, _)| Reverse(*count));
        ranked.into_iter().map(|(_, service)| service).collect()
    }

    pub fn print_by_total_child_count<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.print_top_by_total_child_count(out, None)
    }

    /// Same as [`print_by_total_child_count`](Self::print_by_total_child_count),
    /// stopping after `limit` services when given.
    pub fn print_top_by_total_child_count<W: Write + ?Sized>(
        &self,
        out: &mut W,
        limit: Option<usize>,
    ) -> io::Result<()> {
        writeln!(out, "{}", START_BANNER)?;
        for service in self
            .ordered_by_total_child_count()
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
        {
            service.present_summary(out)?;
        }
        writeln!(out, "{}", END_BANNER)?;
        Ok(())
    }
}
