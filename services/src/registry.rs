// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Registry of service descriptors. Built once, then shared read-only.

use ordermap::OrderMap;
use tracing::{debug, info};

use topology::Node;

use crate::descriptor::ServiceDescriptor;
use crate::errors::ServiceError;
use crate::frr::builtin_services;

#[derive(Clone, Debug, Default)]
/// All registered services, in registration order
pub struct ServiceRegistry {
    services: OrderMap<String, ServiceDescriptor>,
}

/// Registration and lookups
impl ServiceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with all the FRR services
    pub fn frr() -> Result<Self, ServiceError> {
        let mut registry = Self::new();
        for service in builtin_services() {
            registry.register(service)?;
        }
        info!("Service registry initialized with {} services", registry.len());
        Ok(registry)
    }

    pub fn register(&mut self, descriptor: ServiceDescriptor) -> Result<(), ServiceError> {
        if self.services.contains_key(&descriptor.name) {
            return Err(ServiceError::DuplicateService(descriptor.name));
        }
        debug!("Registering service {}", descriptor.name);
        self.services.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }
    pub fn get(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.get(name)
    }
    pub fn lookup(&self, name: &str) -> Result<&ServiceDescriptor, ServiceError> {
        self.get(name)
            .ok_or_else(|| ServiceError::UnknownService(name.to_owned()))
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }
    pub fn services(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.values()
    }
    pub fn len(&self) -> usize {
        self.services.len()
    }
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Per-node queries
impl ServiceRegistry {
    /// The services active on a node, in the node's order. A service listed
    /// twice is only returned once.
    pub fn resolve(&self, node: &Node) -> Result<Vec<&ServiceDescriptor>, ServiceError> {
        let mut active: Vec<&ServiceDescriptor> = Vec::with_capacity(node.services.len());
        for name in &node.services {
            let service = self.lookup(name)?;
            if !active.iter().any(|s| s.name == service.name) {
                active.push(service);
            }
        }
        Ok(active)
    }

    /// The services among `active` whose config folds into that of `owner`
    pub fn dependents_of<'a>(
        owner: &str,
        active: &[&'a ServiceDescriptor],
    ) -> Vec<&'a ServiceDescriptor> {
        active
            .iter()
            .copied()
            .filter(|service| service.depends_on(owner))
            .collect()
    }

    /// The active services of a node ordered so that each one comes after its
    /// dependencies. Among services that are ready at the same time the node's
    /// order wins, so the result is the same for the same node.
    pub fn startup_order(&self, node: &Node) -> Result<Vec<&ServiceDescriptor>, ServiceError> {
        let mut pending = self.resolve(node)?;
        for service in &pending {
            if let Some(missing) = service
                .dependencies
                .iter()
                .find(|dep| !pending.iter().any(|s| &s.name == *dep))
            {
                return Err(ServiceError::MissingDependency {
                    service: service.name.clone(),
                    dependency: missing.clone(),
                });
            }
        }

        let mut ordered: Vec<&ServiceDescriptor> = Vec::with_capacity(pending.len());
        while !pending.is_empty() {
            let ready = pending.iter().position(|service| {
                service
                    .dependencies
                    .iter()
                    .all(|dep| ordered.iter().any(|s| &s.name == dep))
            });
            let Some(index) = ready else {
                return Err(ServiceError::DependencyCycle(
                    pending.iter().map(|s| s.name.clone()).collect(),
                ));
            };
            ordered.push(pending.remove(index));
        }
        debug!(
            "Startup order for node {}: {}",
            node.id,
            ordered
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(ordered)
    }

    /// Reverse of [`ServiceRegistry::startup_order`]
    pub fn shutdown_order(&self, node: &Node) -> Result<Vec<&ServiceDescriptor>, ServiceError> {
        let mut order = self.startup_order(node)?;
        order.reverse();
        Ok(order)
    }
}
