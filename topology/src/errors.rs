// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Errors when building a topology

use crate::network::NetworkId;
use crate::node::NodeId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("A node with id {0} already exists")]
    DuplicateNode(NodeId),
    #[error("A network with id {0} already exists")]
    DuplicateNetwork(NetworkId),
    #[error("Node {0} has more than one interface named '{1}'")]
    DuplicateInterface(NodeId, String),
    #[error("No node with id {0}")]
    NoSuchNode(NodeId),
    #[error("Node {0} has no interface named '{1}'")]
    NoSuchInterface(NodeId, String),
    #[error("Interface '{0}' refers to non-existent network {1}")]
    NoSuchNetwork(String, NetworkId),
    #[error("MTU out of range [68, 65535]: {0}")]
    BadMtu(u16),
}
