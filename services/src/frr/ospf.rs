// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! OSPFv2 and OSPFv3 fragments

use topology::{Interface, Mtu, Topology};

use crate::address::{AddressFamily, addresses_of_family, ipv4_network};
use crate::builder::{ConfigBuilder, MARKER};
use crate::errors::ServiceError;
use crate::fragment::{FragmentContributor, NodeContext};
use crate::frr::router_id;

/// OSPFv2: IPv4 routing for wired networks
pub struct Ospfv2;

/// OSPFv3: IPv6 routing for wired networks
pub struct Ospfv3;

/// True if OSPF should not check MTUs on this interface: its MTU is not the
/// ethernet default (e.g. a GRE tap with no view of its peers) or differs from
/// the MTU of some interface on the same network.
fn mtu_mismatch(topology: &Topology, iface: &Interface) -> bool {
    iface.mtu != Mtu::ETHERNET || topology.network_members(iface).any(|peer| peer.mtu != iface.mtu)
}

/// The smallest MTU among the interfaces on the network of `iface`
fn min_network_mtu(topology: &Topology, iface: &Interface) -> Mtu {
    topology
        .network_members(iface)
        .map(|peer| peer.mtu)
        .fold(iface.mtu, std::cmp::min)
}

fn ptp_hint(ctx: &NodeContext<'_>, iface: &Interface) -> bool {
    ctx.options.ospf_ptp_hint
        && ctx
            .topology
            .network_of(iface)
            .is_some_and(topology::Network::is_point_to_point)
}

impl FragmentContributor for Ospfv2 {
    fn node_fragment(&self, ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        let mut config = ConfigBuilder::new();
        config += "router ospf";
        config += format!("  router-id {}", router_id(ctx.node));
        for iface in ctx.node.routed_interfaces() {
            for address in addresses_of_family(&iface.addresses, AddressFamily::V4) {
                config += format!("  network {} area 0", ipv4_network(address)?);
            }
        }
        config += MARKER;
        Ok(config)
    }
    fn interface_fragment(&self, ctx: &NodeContext<'_>, iface: &Interface) -> ConfigBuilder {
        let mut config = ConfigBuilder::new();
        if mtu_mismatch(ctx.topology, iface) {
            config += "  ip ospf mtu-ignore";
        }
        if ptp_hint(ctx, iface) {
            config += "  ip ospf network point-to-point";
        }
        config
    }
}

impl FragmentContributor for Ospfv3 {
    fn node_fragment(&self, ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        let mut config = ConfigBuilder::new();
        config += "router ospf6";
        config += format!("  router-id {}", router_id(ctx.node));
        for iface in ctx.node.routed_interfaces() {
            config += format!("  interface {} area 0.0.0.0", iface.name);
        }
        config += MARKER;
        Ok(config)
    }
    fn interface_fragment(&self, ctx: &NodeContext<'_>, iface: &Interface) -> ConfigBuilder {
        let mut config = ConfigBuilder::new();
        let min_mtu = min_network_mtu(ctx.topology, iface);
        if min_mtu < iface.mtu {
            config += format!("  ipv6 ospf6 ifmtu {min_mtu}");
        }
        if ptp_hint(ctx, iface) {
            config += "  ipv6 ospf6 network point-to-point";
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frr::fixtures::{lan_pair, mtu};
    use crate::options::{FrrOptions, FrrOptionsBuilder};
    use pretty_assertions::assert_eq;
    use topology::{Interface, LinkType, Network, NetworkId, Node, NodeId, Role};

    #[test]
    fn test_ospfv2_mtu_ignore() {
        let options = FrrOptions::default();

        // 1400 facing 1500
        let topology = lan_pair(mtu(1400), mtu(1500), LinkType::Broadcast);
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);
        let eth0 = node.get_interface("eth0").expect("Should exist");
        assert_eq!(
            Ospfv2.interface_fragment(&ctx, eth0).to_string(),
            "  ip ospf mtu-ignore\n"
        );

        // 1500 facing 1500
        let topology = lan_pair(mtu(1500), mtu(1500), LinkType::Broadcast);
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);
        let eth0 = node.get_interface("eth0").expect("Should exist");
        assert!(Ospfv2.interface_fragment(&ctx, eth0).is_empty());

        // 1500 facing 9000: the peer differs
        let topology = lan_pair(mtu(1500), mtu(9000), LinkType::Broadcast);
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);
        let eth0 = node.get_interface("eth0").expect("Should exist");
        assert_eq!(
            Ospfv2.interface_fragment(&ctx, eth0).to_string(),
            "  ip ospf mtu-ignore\n"
        );
    }

    #[test]
    fn test_ospfv2_unattached_interface() {
        let options = FrrOptions::default();
        let mut topology = Topology::new();
        let node = Node::new(NodeId::new(1), "n1")
            .add_interface(Interface::new("eth0").add_address("10.0.0.1/24"))
            .add_interface(
                Interface::new("gt0")
                    .set_mtu(mtu(1458))
                    .add_address("10.9.0.1/30"),
            );
        topology.add_node(node).expect("Should succeed");
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);

        let eth0 = node.get_interface("eth0").expect("Should exist");
        assert!(Ospfv2.interface_fragment(&ctx, eth0).is_empty());
        let gt0 = node.get_interface("gt0").expect("Should exist");
        assert!(!Ospfv2.interface_fragment(&ctx, gt0).is_empty());
    }

    #[test]
    fn test_ospfv2_router_block() {
        let options = FrrOptions::default();
        let mut topology = Topology::new();
        let node = Node::new(NodeId::new(1), "n1")
            .add_interface(
                Interface::new("ctrl0")
                    .set_role(Role::Control)
                    .add_address("172.16.0.1/24"),
            )
            .add_interface(
                Interface::new("eth0")
                    .add_address("10.0.0.2/24")
                    .add_address("2001:db8::2/64"),
            )
            .add_interface(Interface::new("eth1").add_address("10.0.1.2/24"));
        topology.add_node(node).expect("Should succeed");
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);

        let rendered = Ospfv2.node_fragment(&ctx).expect("Should render").to_string();
        assert_eq!(
            rendered,
            "router ospf\n  router-id 10.0.0.2\n  network 10.0.0.0/24 area 0\n  network 10.0.1.0/24 area 0\n!\n"
        );
        assert!(!rendered.contains("172.16.0"));
    }

    #[test]
    fn test_ospfv2_bad_address() {
        let options = FrrOptions::default();
        let mut topology = Topology::new();
        let node = Node::new(NodeId::new(1), "n1")
            .add_interface(Interface::new("eth0").add_address("10.0.0/24"));
        topology.add_node(node).expect("Should succeed");
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);
        assert_eq!(
            Ospfv2.node_fragment(&ctx),
            Err(ServiceError::InvalidAddress("10.0.0/24".to_string()))
        );
    }

    #[test]
    fn test_ospfv3() {
        let options = FrrOptions::default();
        let topology = lan_pair(mtu(9000), mtu(1500), LinkType::Broadcast);
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);
        let eth0 = node.get_interface("eth0").expect("Should exist");
        assert_eq!(
            Ospfv3.interface_fragment(&ctx, eth0).to_string(),
            "  ipv6 ospf6 ifmtu 1500\n"
        );
        assert_eq!(
            Ospfv3.node_fragment(&ctx).expect("Should render").to_string(),
            "router ospf6\n  router-id 10.0.0.1\n  interface eth0 area 0.0.0.0\n!\n"
        );

        // the peer with the smaller mtu needs no directive
        let peer = topology.node(NodeId::new(2)).expect("Should exist");
        let ctx = NodeContext::new(&topology, peer, &options);
        let eth0 = peer.get_interface("eth0").expect("Should exist");
        assert!(Ospfv3.interface_fragment(&ctx, eth0).is_empty());
    }

    #[test]
    fn test_ptp_hint() {
        let topology = lan_pair(mtu(1500), mtu(1500), LinkType::PointToPoint);
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let eth0 = node.get_interface("eth0").expect("Should exist");

        let options = FrrOptions::default();
        let ctx = NodeContext::new(&topology, node, &options);
        assert!(Ospfv2.interface_fragment(&ctx, eth0).is_empty());
        assert!(Ospfv3.interface_fragment(&ctx, eth0).is_empty());

        let options = FrrOptionsBuilder::default()
            .ospf_ptp_hint(true)
            .build()
            .expect("Should build");
        let ctx = NodeContext::new(&topology, node, &options);
        assert_eq!(
            Ospfv2.interface_fragment(&ctx, eth0).to_string(),
            "  ip ospf network point-to-point\n"
        );
        assert_eq!(
            Ospfv3.interface_fragment(&ctx, eth0).to_string(),
            "  ipv6 ospf6 network point-to-point\n"
        );

        // not a p2p link
        let mut topology = Topology::new();
        topology
            .add_network(Network::new(NetworkId::new(1), "lan", LinkType::Broadcast))
            .expect("Should succeed");
        let node = Node::new(NodeId::new(1), "n1")
            .add_interface(Interface::new("eth0").set_network(NetworkId::new(1)));
        topology.add_node(node).expect("Should succeed");
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        let ctx = NodeContext::new(&topology, node, &options);
        let eth0 = node.get_interface("eth0").expect("Should exist");
        assert!(Ospfv2.interface_fragment(&ctx, eth0).is_empty());
    }
}
