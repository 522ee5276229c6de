// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Babel fragments. Interfaces on wireless networks disable split horizon.

use topology::{Interface, LinkType};

use crate::builder::ConfigBuilder;
use crate::errors::ServiceError;
use crate::fragment::{FragmentContributor, NodeContext};

pub struct Babel;

impl FragmentContributor for Babel {
    fn node_fragment(&self, ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        let mut config = ConfigBuilder::new();
        config += "router babel";
        for iface in ctx.node.routed_interfaces() {
            config += format!("  network {}", iface.name);
        }
        config += "  redistribute static";
        config += "  redistribute ipv4 connected";
        Ok(config)
    }
    fn interface_fragment(&self, ctx: &NodeContext<'_>, iface: &Interface) -> ConfigBuilder {
        let mut config = ConfigBuilder::new();
        if ctx.topology.link_type(iface) == Some(LinkType::Wireless) {
            config += "  babel wireless";
            config += "  no babel split-horizon";
        } else {
            config += "  babel wired";
            config += "  babel split-horizon";
        }
        config
    }
}
