// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Contract between the config assembler and the services that contribute
//! fragments to a file owned by another service.

use topology::{Interface, Node, Topology};

use crate::builder::ConfigBuilder;
use crate::errors::ServiceError;
use crate::options::FrrOptions;

/// What a fragment generator may look at: one node, the topology it lives in
/// and the session options. Read-only.
#[derive(Clone, Copy, Debug)]
pub struct NodeContext<'a> {
    pub topology: &'a Topology,
    pub node: &'a Node,
    pub options: &'a FrrOptions,
}

impl<'a> NodeContext<'a> {
    pub fn new(topology: &'a Topology, node: &'a Node, options: &'a FrrOptions) -> Self {
        Self {
            topology,
            node,
            options,
        }
    }
}

/// A service contributing to a shared config file. By default a service
/// contributes nothing.
pub trait FragmentContributor {
    /// Node-wide stanza, appended after all interface blocks
    fn node_fragment(&self, _ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        Ok(ConfigBuilder::new())
    }
    /// Lines added inside the block of a non-control interface
    fn interface_fragment(&self, _ctx: &NodeContext<'_>, _iface: &Interface) -> ConfigBuilder {
        ConfigBuilder::new()
    }
}
