// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Config assembler: produces the files owned by a service of a node, folding
//! in the fragments of the services that depend on it.

use tracing::{debug, trace};

use topology::{Interface, Node, NodeId, Topology};

use crate::address::{AddressFamily, address_statement, addresses_of_family};
use crate::builder::{ConfigBuilder, MARKER};
use crate::descriptor::ServiceDescriptor;
use crate::errors::ServiceError;
use crate::fragment::{FragmentContributor, NodeContext};
use crate::frr::ServiceKind;
use crate::frr::zebra::{self, ZebraFile};
use crate::options::FrrOptions;
use crate::registry::ServiceRegistry;

/// Generates config files. Holds no state of its own: the same inputs always
/// produce the same text, and distinct nodes can be rendered concurrently.
#[derive(Clone, Copy, Debug)]
pub struct ConfigAssembler<'a> {
    registry: &'a ServiceRegistry,
    options: &'a FrrOptions,
}

fn address_lines<'a>(
    addresses: impl Iterator<Item = &'a str>,
) -> Result<ConfigBuilder, ServiceError> {
    let mut config = ConfigBuilder::new();
    for address in addresses {
        config += format!("  {}", address_statement(address)?);
    }
    Ok(config)
}

impl<'a> ConfigAssembler<'a> {
    pub fn new(registry: &'a ServiceRegistry, options: &'a FrrOptions) -> Self {
        Self { registry, options }
    }

    /// Text of file `filename` of service `service` for `node`
    pub fn generate(
        &self,
        topology: &Topology,
        node: &Node,
        service: &str,
        filename: &str,
    ) -> Result<String, ServiceError> {
        debug!("Generating {filename} of {service} for node {}", node.id);
        let owner = self.registry.lookup(service)?;
        if !owner.owns(filename) {
            return Err(ServiceError::unknown_file(service, filename));
        }
        let ctx = NodeContext::new(topology, node, self.options);
        let text = match owner.kind {
            ServiceKind::Zebra => match ZebraFile::from_filename(filename) {
                Some(ZebraFile::Integrated) => self.integrated_config(&ctx, owner)?.to_string(),
                Some(ZebraFile::BootScript) => zebra::boot_script(self.options),
                Some(ZebraFile::Vtysh) => zebra::vtysh_conf(),
                Some(ZebraFile::Daemons) => zebra::daemons(),
                None => return Err(ServiceError::unknown_file(service, filename)),
            },
            _ => return Err(ServiceError::unknown_file(service, filename)),
        };
        Ok(text)
    }

    /// Same as [`ConfigAssembler::generate`], for the node with the given id
    pub fn generate_for(
        &self,
        topology: &Topology,
        node: NodeId,
        service: &str,
        filename: &str,
    ) -> Result<String, ServiceError> {
        let node = topology.node(node)?;
        self.generate(topology, node, service, filename)
    }

    /// All files of a service for `node`, in the order the service declares them.
    /// Fails as a whole if any file fails.
    pub fn generate_all(
        &self,
        topology: &Topology,
        node: &Node,
        service: &str,
    ) -> Result<Vec<(String, String)>, ServiceError> {
        let owner = self.registry.lookup(service)?;
        owner
            .files
            .iter()
            .map(|f| Ok((f.clone(), self.generate(topology, node, service, f)?)))
            .collect()
    }

    /// Block of one interface in the unified config
    fn interface_block(
        ctx: &NodeContext<'_>,
        iface: &Interface,
        dependents: &[&ServiceDescriptor],
    ) -> Result<ConfigBuilder, ServiceError> {
        let mut config = ConfigBuilder::new();
        config += format!("interface {}", iface.name);

        // control interfaces get their addresses but no routing
        if iface.is_control() {
            config += address_lines(iface.addresses.iter().map(String::as_str))?;
            return Ok(config);
        }

        let mut cfg_v4 = ConfigBuilder::new();
        let mut cfg_v6 = ConfigBuilder::new();
        let mut want_v4 = false;
        let mut want_v6 = false;
        for service in dependents {
            let fragment = service.kind.interface_fragment(ctx, iface);
            trace!(
                "{} contributes {} lines to interface {}",
                service.name,
                fragment.len(),
                iface.name
            );
            want_v4 |= service.ipv4_routing;
            if service.ipv6_routing {
                want_v6 = true;
                cfg_v6 += fragment;
            } else {
                cfg_v4 += fragment;
            }
        }
        if want_v4 {
            config += address_lines(addresses_of_family(&iface.addresses, AddressFamily::V4))?;
            config += cfg_v4;
        }
        if want_v6 {
            config += address_lines(addresses_of_family(&iface.addresses, AddressFamily::V6))?;
            config += cfg_v6;
        }
        config += MARKER;
        Ok(config)
    }

    /// The unified config owned by `owner`: one block per interface, then the
    /// node-wide stanzas of each dependent service
    fn integrated_config(
        &self,
        ctx: &NodeContext<'_>,
        owner: &ServiceDescriptor,
    ) -> Result<ConfigBuilder, ServiceError> {
        let active = self.registry.resolve(ctx.node)?;
        let dependents = ServiceRegistry::dependents_of(&owner.name, &active);

        // reject malformed addresses, even those no block would show
        for iface in ctx.node.interfaces() {
            for address in &iface.addresses {
                AddressFamily::of(address)?;
            }
        }

        let mut config = ConfigBuilder::new();
        for iface in ctx.node.interfaces() {
            config += Self::interface_block(ctx, iface, &dependents)?;
        }
        for service in &dependents {
            let fragment = service.kind.node_fragment(ctx)?;
            trace!("{} contributes {} node lines", service.name, fragment.len());
            config += fragment;
        }
        debug!(
            "Unified config of {} for node {} has {} lines",
            owner.name,
            ctx.node.id,
            config.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frr::fixtures::{lan_pair, mtu};
    use crate::frr::{BABEL, FRR_BOOT, FRR_CONF, FRR_DAEMONS, FRR_VTYSH, OSPFV2, OSPFV3, ZEBRA};
    use pretty_assertions::assert_eq;
    use topology::{LinkType, Role};
    use tracing_test::traced_test;

    fn single_node(node: Node) -> Topology {
        let mut topology = Topology::new();
        topology.add_node(node).expect("Should succeed");
        topology
    }

    #[test]
    fn test_no_dependents() {
        let registry = ServiceRegistry::frr().expect("Should build");
        let options = FrrOptions::default();
        let assembler = ConfigAssembler::new(&registry, &options);
        let topology = single_node(
            Node::new(NodeId::new(1), "n1")
                .add_interface(
                    Interface::new("ctrl0")
                        .set_role(Role::Control)
                        .add_address("172.16.0.1/24"),
                )
                .add_interface(Interface::new("eth0").add_address("10.0.0.1/24"))
                .add_service(ZEBRA),
        );
        let text = assembler
            .generate_for(&topology, NodeId::new(1), ZEBRA, FRR_CONF)
            .expect("Should generate");
        assert_eq!(
            text,
            "interface ctrl0\n  ip address 172.16.0.1/24\ninterface eth0\n!\n"
        );
    }

    #[traced_test]
    #[test]
    fn test_dual_stack_buffers() {
        let registry = ServiceRegistry::frr().expect("Should build");
        let options = FrrOptions::default();
        let assembler = ConfigAssembler::new(&registry, &options);
        let topology = lan_pair(mtu(1400), mtu(1500), LinkType::Wireless);
        let mut node = topology.node(NodeId::new(1)).expect("Should exist").clone();
        node.interfaces[0].addresses.push("2001:db8::1/64".to_string());
        node.services = vec![ZEBRA.into(), OSPFV2.into(), BABEL.into()];

        let text = assembler
            .generate(&topology, &node, ZEBRA, FRR_CONF)
            .expect("Should generate");
        assert_eq!(
            text,
            "interface eth0\n  ip address 10.0.0.1/24\n  ip ospf mtu-ignore\n  ipv6 address 2001:db8::1/64\n  babel wireless\n  no babel split-horizon\n!\n\
router ospf\n  router-id 10.0.0.1\n  network 10.0.0.0/24 area 0\n!\n\
router babel\n  network eth0\n  redistribute static\n  redistribute ipv4 connected\n"
        );
        assert!(logs_contain("Generating /usr/local/etc/frr/frr.conf of FRRzebra for node 1"));
    }

    #[test]
    fn test_ipv6_takes_precedence() {
        // OSPFv3 wants both families: its fragment goes after the IPv6 addresses
        let registry = ServiceRegistry::frr().expect("Should build");
        let options = FrrOptions::default();
        let assembler = ConfigAssembler::new(&registry, &options);
        let topology = lan_pair(mtu(9000), mtu(1500), LinkType::Broadcast);
        let mut node = topology.node(NodeId::new(1)).expect("Should exist").clone();
        node.interfaces[0].addresses.push("2001:db8::1/64".to_string());
        node.services = vec![ZEBRA.into(), OSPFV3.into()];

        let text = assembler
            .generate(&topology, &node, ZEBRA, FRR_CONF)
            .expect("Should generate");
        assert_eq!(
            text,
            "interface eth0\n  ip address 10.0.0.1/24\n  ipv6 address 2001:db8::1/64\n  ipv6 ospf6 ifmtu 1500\n!\n\
router ospf6\n  router-id 10.0.0.1\n  interface eth0 area 0.0.0.0\n!\n"
        );
    }

    #[test]
    fn test_unknown_files() {
        let registry = ServiceRegistry::frr().expect("Should build");
        let options = FrrOptions::default();
        let assembler = ConfigAssembler::new(&registry, &options);
        let topology = lan_pair(mtu(1500), mtu(1500), LinkType::Broadcast);
        let node = topology.node(NodeId::new(1)).expect("Should exist");

        assert_eq!(
            assembler.generate(&topology, node, ZEBRA, "/etc/frr/frr.conf"),
            Err(ServiceError::UnknownConfigFile {
                service: ZEBRA.to_string(),
                filename: "/etc/frr/frr.conf".to_string()
            })
        );
        // daemon services own no file
        assert!(matches!(
            assembler.generate(&topology, node, OSPFV2, FRR_CONF),
            Err(ServiceError::UnknownConfigFile { .. })
        ));
        assert_eq!(
            assembler.generate(&topology, node, "FRRisis", FRR_CONF),
            Err(ServiceError::UnknownService("FRRisis".to_string()))
        );
    }

    #[test]
    fn test_file_owned_without_generator() {
        let mut registry = ServiceRegistry::new();
        registry
            .register(ServiceDescriptor::new("custom", ServiceKind::Rip).add_file("custom.conf"))
            .expect("Should register");
        let options = FrrOptions::default();
        let assembler = ConfigAssembler::new(&registry, &options);
        let topology = lan_pair(mtu(1500), mtu(1500), LinkType::Broadcast);
        let node = topology.node(NodeId::new(1)).expect("Should exist");
        assert!(matches!(
            assembler.generate(&topology, node, "custom", "custom.conf"),
            Err(ServiceError::UnknownConfigFile { .. })
        ));
    }

    #[test]
    fn test_invalid_address_yields_no_text() {
        let registry = ServiceRegistry::frr().expect("Should build");
        let options = FrrOptions::default();
        let assembler = ConfigAssembler::new(&registry, &options);
        let topology = single_node(
            Node::new(NodeId::new(1), "n1")
                .add_interface(Interface::new("eth0").add_address("10.0.0.1/24"))
                .add_interface(Interface::new("eth1").add_address("fe80%eth1"))
                .add_service(ZEBRA)
                .add_service(OSPFV2),
        );
        assert_eq!(
            assembler.generate_for(&topology, NodeId::new(1), ZEBRA, FRR_CONF),
            Err(ServiceError::InvalidAddress("fe80%eth1".to_string()))
        );
    }

    #[test]
    fn test_generate_all_and_idempotence() {
        let registry = ServiceRegistry::frr().expect("Should build");
        let options = FrrOptions::default();
        let assembler = ConfigAssembler::new(&registry, &options);
        let mut topology = lan_pair(mtu(1500), mtu(1500), LinkType::Broadcast);
        let node = topology
            .node(NodeId::new(1))
            .expect("Should exist")
            .clone()
            .add_service(ZEBRA)
            .add_service(OSPFV2);
        let node = Node { id: NodeId::new(3), ..node };
        topology.add_node(node.clone()).expect("Should succeed");

        let first = assembler
            .generate_all(&topology, &node, ZEBRA)
            .expect("Should generate");
        let second = assembler
            .generate_all(&topology, &node, ZEBRA)
            .expect("Should generate");
        assert_eq!(first, second);
        let files: Vec<_> = first.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(files, vec![FRR_CONF, FRR_BOOT, FRR_VTYSH, FRR_DAEMONS]);
    }
}
