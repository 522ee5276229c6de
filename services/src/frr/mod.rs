// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The FRRouting service family: zebra owns the unified frr.conf and every
//! routing daemon service folds its fragments into it.

pub mod babel;
pub mod bgp;
pub mod ospf;
pub mod pim;
pub mod rip;
pub mod zebra;

use strum::Display;
use topology::{Interface, Node};

use crate::address::host_part;
use crate::builder::ConfigBuilder;
use crate::descriptor::ServiceDescriptor;
use crate::errors::ServiceError;
use crate::fragment::{FragmentContributor, NodeContext};

use babel::Babel;
use bgp::Bgp;
use ospf::{Ospfv2, Ospfv3};
use pim::Pim;
use rip::{Rip, Ripng};
use zebra::Zebra;

/// Unified config, loaded by every FRR daemon
pub const FRR_CONF: &str = "/usr/local/etc/frr/frr.conf";
pub const FRR_BOOT: &str = "frrboot.sh";
pub const FRR_VTYSH: &str = "/usr/local/etc/frr/vtysh.conf";
pub const FRR_DAEMONS: &str = "/usr/local/etc/frr/daemons";

pub const FRR_GROUP: &str = "FRR";
pub const ZEBRA: &str = "FRRzebra";
pub const OSPFV2: &str = "FRROSPFv2";
pub const OSPFV3: &str = "FRROSPFv3";
pub const BGP: &str = "FRRBGP";
pub const RIP: &str = "FRRRIP";
pub const RIPNG: &str = "FRRRIPNG";
pub const BABEL: &str = "FRRBabel";
pub const PIM: &str = "FRRpimd";

const DAEMON_META: &str = "The config file for this service can be found in the Zebra service.";

/// Router-id used when a node has no IPv4 address outside control interfaces
pub const DEFAULT_ROUTER_ID: &str = "0.0.0.0";

/// The closed set of FRR services that know how to render fragments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ServiceKind {
    Zebra,
    Ospfv2,
    Ospfv3,
    Bgp,
    Rip,
    Ripng,
    Babel,
    Pim,
}

impl FragmentContributor for ServiceKind {
    fn node_fragment(&self, ctx: &NodeContext<'_>) -> Result<ConfigBuilder, ServiceError> {
        match self {
            ServiceKind::Zebra => Zebra.node_fragment(ctx),
            ServiceKind::Ospfv2 => Ospfv2.node_fragment(ctx),
            ServiceKind::Ospfv3 => Ospfv3.node_fragment(ctx),
            ServiceKind::Bgp => Bgp.node_fragment(ctx),
            ServiceKind::Rip => Rip.node_fragment(ctx),
            ServiceKind::Ripng => Ripng.node_fragment(ctx),
            ServiceKind::Babel => Babel.node_fragment(ctx),
            ServiceKind::Pim => Pim.node_fragment(ctx),
        }
    }
    fn interface_fragment(&self, ctx: &NodeContext<'_>, iface: &Interface) -> ConfigBuilder {
        match self {
            ServiceKind::Zebra => Zebra.interface_fragment(ctx, iface),
            ServiceKind::Ospfv2 => Ospfv2.interface_fragment(ctx, iface),
            ServiceKind::Ospfv3 => Ospfv3.interface_fragment(ctx, iface),
            ServiceKind::Bgp => Bgp.interface_fragment(ctx, iface),
            ServiceKind::Rip => Rip.interface_fragment(ctx, iface),
            ServiceKind::Ripng => Ripng.interface_fragment(ctx, iface),
            ServiceKind::Babel => Babel.interface_fragment(ctx, iface),
            ServiceKind::Pim => Pim.interface_fragment(ctx, iface),
        }
    }
}

/// The router-id of a node: the first IPv4 address found on a non-control
/// interface, in interface order.
pub fn router_id(node: &Node) -> &str {
    node.routed_interfaces()
        .flat_map(|iface| iface.addresses.iter())
        .find(|address| address.contains('.'))
        .map_or(DEFAULT_ROUTER_ID, |address| host_part(address))
}

fn daemon_service(name: &str, kind: ServiceKind, daemon: &str) -> ServiceDescriptor {
    ServiceDescriptor::new(name, kind)
        .set_group(FRR_GROUP)
        .add_dependency(ZEBRA)
        .add_shutdown(&format!("killall {daemon}"))
        .add_validate(&format!("pidof {daemon}"))
        .set_meta(DAEMON_META)
}

/// Descriptors of all FRR services, zebra first
#[must_use]
pub fn builtin_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor::new(ZEBRA, ServiceKind::Zebra)
            .set_group(FRR_GROUP)
            .add_dir("/usr/local/etc/frr")
            .add_dir("/var/run/frr")
            .add_dir("/var/log/frr")
            .add_file(FRR_CONF)
            .add_file(FRR_BOOT)
            .add_file(FRR_VTYSH)
            .add_file(FRR_DAEMONS)
            .add_startup(&format!("sh {{{{{FRR_BOOT}}}}} zebra"))
            .add_shutdown("killall zebra")
            .add_validate("pidof zebra"),
        daemon_service(OSPFV2, ServiceKind::Ospfv2, "ospfd").set_ipv4_routing(true),
        daemon_service(OSPFV3, ServiceKind::Ospfv3, "ospf6d")
            .set_ipv4_routing(true)
            .set_ipv6_routing(true),
        daemon_service(BGP, ServiceKind::Bgp, "bgpd")
            .set_custom_needed(true)
            .set_ipv4_routing(true)
            .set_ipv6_routing(true),
        daemon_service(RIP, ServiceKind::Rip, "ripd").set_ipv4_routing(true),
        daemon_service(RIPNG, ServiceKind::Ripng, "ripngd").set_ipv6_routing(true),
        daemon_service(BABEL, ServiceKind::Babel, "babeld").set_ipv6_routing(true),
        daemon_service(PIM, ServiceKind::Pim, "pimd").set_ipv4_routing(true),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use topology::{NodeId, Role};

    #[test]
    fn test_router_id() {
        let node = Node::new(NodeId::new(1), "n1")
            .add_interface(
                Interface::new("ctrl0")
                    .set_role(Role::Control)
                    .add_address("10.0.0.1/24"),
            )
            .add_interface(Interface::new("eth0").add_address("10.0.0.2/24"));
        assert_eq!(router_id(&node), "10.0.0.2");

        let only_control = Node::new(NodeId::new(2), "n2").add_interface(
            Interface::new("ctrl0")
                .set_role(Role::Control)
                .add_address("10.0.0.1/24"),
        );
        assert_eq!(router_id(&only_control), DEFAULT_ROUTER_ID);

        let v6_first = Node::new(NodeId::new(3), "n3")
            .add_interface(Interface::new("eth0").add_address("2001:db8::1/64"))
            .add_interface(Interface::new("eth1").add_address("192.168.1.1/24"));
        assert_eq!(router_id(&v6_first), "192.168.1.1");
    }

    #[test]
    fn test_builtin_services() {
        let services = builtin_services();
        assert_eq!(services.len(), 8);
        let zebra = &services[0];
        assert_eq!(zebra.name, ZEBRA);
        assert_eq!(zebra.commands.startup, vec!["sh {{frrboot.sh}} zebra"]);
        assert!(zebra.dependencies.is_empty());
        for daemon in &services[1..] {
            assert!(daemon.depends_on(ZEBRA));
            assert!(daemon.files.is_empty());
        }
        let bgp = services.iter().find(|s| s.name == BGP).expect("Should exist");
        assert!(bgp.custom_needed);
        assert!(bgp.ipv4_routing && bgp.ipv6_routing);
    }
}
