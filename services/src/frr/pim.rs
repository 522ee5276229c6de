// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! PIM multicast routing fragments

use topology::Interface;

use crate::builder::{ConfigBuilder, MARKER};
use crate::errors::ServiceError;
use crate::fragment::{FragmentContributor, NodeContext};

/// Candidate interface used when a node only has loopbacks
const DEFAULT_CANDIDATE: &str = "eth0";

pub struct Pim;

impl FragmentContributor for Pim {
    fn node_fragment(&self, ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        let candidate = ctx
            .node
            .interfaces()
            .find(|iface| !iface.is_loopback())
            .map_or(DEFAULT_CANDIDATE, |iface| iface.name.as_str());

        let mut config = ConfigBuilder::new();
        config += "router mfea";
        config += MARKER;
        config += "router igmp";
        config += MARKER;
        config += "router pim";
        config += "  !ip pim rp-address 10.0.0.1";
        config += format!("  ip pim bsr-candidate {candidate}");
        config += format!("  ip pim rp-candidate {candidate}");
        config += "  !ip pim spt-threshold interval 10 bytes 80000";
        Ok(config)
    }
    fn interface_fragment(&self, _ctx: &NodeContext<'_>, _iface: &Interface) -> ConfigBuilder {
        let mut config = ConfigBuilder::new();
        config += "  ip mfea";
        config += "  ip igmp";
        config += "  ip pim";
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FrrOptions;
    use pretty_assertions::assert_eq;
    use topology::{Node, NodeId, Role, Topology};

    fn render_for(node: Node) -> String {
        let options = FrrOptions::default();
        let mut topology = Topology::new();
        let id = node.id;
        topology.add_node(node).expect("Should succeed");
        let node = topology.node(id).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);
        Pim.node_fragment(&ctx).expect("Should render").to_string()
    }

    #[test]
    fn test_pim_candidate() {
        let node = Node::new(NodeId::new(1), "n1")
            .add_interface(Interface::new("lo").set_role(Role::Loopback))
            .add_interface(Interface::new("eth3"))
            .add_interface(Interface::new("eth4"));
        assert_eq!(
            render_for(node),
            "router mfea\n!\nrouter igmp\n!\nrouter pim\n  !ip pim rp-address 10.0.0.1\n  ip pim bsr-candidate eth3\n  ip pim rp-candidate eth3\n  !ip pim spt-threshold interval 10 bytes 80000\n"
        );

        let only_loopback = Node::new(NodeId::new(2), "n2")
            .add_interface(Interface::new("lo").set_role(Role::Loopback));
        let rendered = render_for(only_loopback);
        assert!(rendered.contains("  ip pim bsr-candidate eth0\n"));
    }

    #[test]
    fn test_pim_interface_directives() {
        let options = FrrOptions::default();
        let topology = Topology::new();
        let node = Node::new(NodeId::new(1), "n1").add_interface(Interface::new("eth0"));
        let ctx = NodeContext::new(&topology, &node, &options);
        let eth0 = node.get_interface("eth0").expect("Should exist");
        assert_eq!(
            Pim.interface_fragment(&ctx, eth0).to_string(),
            "  ip mfea\n  ip igmp\n  ip pim\n"
        );
    }
}
