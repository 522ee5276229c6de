// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! A snapshot of the session topology, with the queries config generators need

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::errors::TopologyError;
use crate::interface::{Interface, InterfaceRef};
use crate::network::{LinkType, Network, NetworkId};
use crate::node::{Node, NodeId};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "TopologySpec")]
/// Nodes and networks of a session. Network membership is indexed as nodes
/// are added, so that member order follows node insertion order and then
/// interface declaration order.
pub struct Topology {
    nodes: BTreeMap<NodeId, Node>,
    networks: BTreeMap<NetworkId, Network>,
    members: BTreeMap<NetworkId, Vec<InterfaceRef>>,
}

/// Serialized form of a [`Topology`]: networks first, since nodes refer to them
#[derive(Deserialize)]
struct TopologySpec {
    #[serde(default)]
    networks: Vec<Network>,
    #[serde(default)]
    nodes: Vec<Node>,
}

impl TryFrom<TopologySpec> for Topology {
    type Error = TopologyError;
    fn try_from(spec: TopologySpec) -> Result<Self, Self::Error> {
        let mut topology = Topology::new();
        for network in spec.networks {
            topology.add_network(network)?;
        }
        for node in spec.nodes {
            topology.add_node(node)?;
        }
        Ok(topology)
    }
}

/// Builder methods
impl Topology {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_network(&mut self, network: Network) -> Result<(), TopologyError> {
        if self.networks.contains_key(&network.id) {
            return Err(TopologyError::DuplicateNetwork(network.id));
        }
        debug!("Adding network {} ({})", network.id, network.link_type);
        self.members.insert(network.id, vec![]);
        self.networks.insert(network.id, network);
        Ok(())
    }
    pub fn add_node(&mut self, node: Node) -> Result<(), TopologyError> {
        if self.nodes.contains_key(&node.id) {
            return Err(TopologyError::DuplicateNode(node.id));
        }
        node.validate()?;
        for iface in node.interfaces() {
            if let Some(netid) = iface.network
                && !self.networks.contains_key(&netid)
            {
                return Err(TopologyError::NoSuchNetwork(iface.name.clone(), netid));
            }
        }
        for iface in node.interfaces() {
            if let Some(netid) = iface.network {
                self.members
                    .entry(netid)
                    .or_default()
                    .push(InterfaceRef::new(node.id, &iface.name));
            }
        }
        debug!(
            "Adding node {} '{}' with {} interfaces",
            node.id,
            node.name,
            node.interfaces.len()
        );
        self.nodes.insert(node.id, node);
        Ok(())
    }
}

/// Lookups
impl Topology {
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }
    pub fn node(&self, id: NodeId) -> Result<&Node, TopologyError> {
        self.get_node(id).ok_or(TopologyError::NoSuchNode(id))
    }
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }
    pub fn get_network(&self, id: NetworkId) -> Option<&Network> {
        self.networks.get(&id)
    }
    pub fn networks(&self) -> impl Iterator<Item = &Network> {
        self.networks.values()
    }
    pub fn interface(&self, iref: &InterfaceRef) -> Result<&Interface, TopologyError> {
        self.node(iref.node)?
            .get_interface(&iref.interface)
            .ok_or_else(|| TopologyError::NoSuchInterface(iref.node, iref.interface.clone()))
    }

    /// The network an interface is attached to, if any
    pub fn network_of(&self, iface: &Interface) -> Option<&Network> {
        iface.network.and_then(|id| self.get_network(id))
    }

    /// The link type of the network an interface is attached to, if any
    pub fn link_type(&self, iface: &Interface) -> Option<LinkType> {
        self.network_of(iface).map(|network| network.link_type)
    }

    /// All interfaces attached to the same network as `iface`, `iface` included.
    /// Unattached interfaces have no members.
    pub fn network_members(&self, iface: &Interface) -> impl Iterator<Item = &Interface> {
        iface
            .network
            .and_then(|id| self.members.get(&id))
            .into_iter()
            .flatten()
            .filter_map(|iref| match self.interface(iref) {
                Ok(peer) => Some(peer),
                Err(e) => {
                    warn!("Skipping network member {iref}: {e}");
                    None
                }
            })
    }
}
