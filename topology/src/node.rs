// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Topology model: nodes

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

use crate::errors::TopologyError;
use crate::interface::Interface;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable identifier of a node within a session
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}
impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// An emulated node: its interfaces in declaration order and the names of the
/// services active on it, in the order they were selected.
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl Node {
    pub fn new(id: NodeId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            interfaces: vec![],
            services: vec![],
        }
    }
    #[must_use]
    pub fn add_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }
    #[must_use]
    pub fn add_service(mut self, service: &str) -> Self {
        self.services.push(service.to_owned());
        self
    }
    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.iter()
    }
    /// Interfaces that routing daemons may use, i.e. all but control interfaces
    pub fn routed_interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.iter().filter(|iface| !iface.is_control())
    }
    pub fn get_interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|iface| iface.name == name)
    }
    pub fn has_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }
    pub fn validate(&self) -> Result<(), TopologyError> {
        let mut names = BTreeSet::new();
        for iface in &self.interfaces {
            if !names.insert(iface.name.as_str()) {
                return Err(TopologyError::DuplicateInterface(
                    self.id,
                    iface.name.clone(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Role;

    #[test]
    fn test_node_interfaces() {
        let node = Node::new(NodeId::new(1), "n1")
            .add_interface(Interface::new("ctrl0").set_role(Role::Control))
            .add_interface(Interface::new("eth0"))
            .add_interface(Interface::new("eth1"))
            .add_service("FRRzebra");

        let routed: Vec<_> = node.routed_interfaces().map(|i| i.name.as_str()).collect();
        assert_eq!(routed, vec!["eth0", "eth1"]);
        assert!(node.get_interface("eth1").is_some());
        assert!(node.get_interface("eth2").is_none());
        assert!(node.has_service("FRRzebra"));
        assert!(node.validate().is_ok());
    }

    #[test]
    fn test_node_duplicate_interface() {
        let node = Node::new(NodeId::new(7), "n7")
            .add_interface(Interface::new("eth0"))
            .add_interface(Interface::new("eth0"));
        assert_eq!(
            node.validate(),
            Err(TopologyError::DuplicateInterface(
                NodeId::new(7),
                "eth0".to_string()
            ))
        );
    }
}
