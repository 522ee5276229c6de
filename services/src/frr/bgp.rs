// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! BGP fragment. Peers are not known to the topology, so the generated block
//! is a stub meant to be completed by the user.

use crate::builder::{ConfigBuilder, MARKER};
use crate::errors::ServiceError;
use crate::fragment::{FragmentContributor, NodeContext};
use crate::frr::router_id;

pub struct Bgp;

impl FragmentContributor for Bgp {
    fn node_fragment(&self, ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        let mut config = ConfigBuilder::new();
        config += MARKER;
        config += "! BGP configuration";
        config += MARKER;
        config += "! You should configure the AS number below,";
        config += "! along with this router's peers.";
        config += MARKER;
        config += format!("router bgp {}", ctx.node.id);
        config += format!("  bgp router-id {}", router_id(ctx.node));
        config += "  redistribute connected";
        config += "! neighbor 1.2.3.4 remote-as 555";
        config += MARKER;
        Ok(config)
    }
}
