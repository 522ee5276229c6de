// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Topology model: interfaces

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::{Display as StrumDisplay, EnumString};

use crate::errors::TopologyError;
use crate::network::NetworkId;
use crate::node::NodeId;

/// What an interface is used for. Control interfaces carry management traffic
/// and are never configured for routing.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Data,
    Control,
    Loopback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
/// An interface MTU, in [68, 65535]
pub struct Mtu(u16);

impl Mtu {
    pub const MIN: u16 = 68;
    pub const ETHERNET: Mtu = Mtu(1500);

    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}
impl Default for Mtu {
    fn default() -> Self {
        Self::ETHERNET
    }
}
impl TryFrom<u16> for Mtu {
    type Error = TopologyError;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            return Err(TopologyError::BadMtu(value));
        }
        Ok(Self(value))
    }
}
impl From<Mtu> for u16 {
    fn from(mtu: Mtu) -> u16 {
        mtu.0
    }
}
impl Display for Mtu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A network interface of an emulated node. Addresses are kept as the strings
/// the session supplied (prefix notation); they are validated when rendered.
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub mtu: Mtu,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub network: Option<NetworkId>,
}

impl Interface {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            mtu: Mtu::default(),
            addresses: vec![],
            role: Role::default(),
            network: None,
        }
    }
    #[must_use]
    pub fn set_mtu(mut self, mtu: Mtu) -> Self {
        self.mtu = mtu;
        self
    }
    #[must_use]
    pub fn add_address(mut self, address: &str) -> Self {
        self.addresses.push(address.to_owned());
        self
    }
    #[must_use]
    pub fn set_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
    #[must_use]
    pub fn set_network(mut self, network: NetworkId) -> Self {
        self.network = Some(network);
        self
    }
    pub fn is_control(&self) -> bool {
        self.role == Role::Control
    }
    pub fn is_loopback(&self) -> bool {
        self.role == Role::Loopback
    }
}

/// Refers to interface `interface` of node `node`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterfaceRef {
    pub node: NodeId,
    pub interface: String,
}
impl InterfaceRef {
    pub fn new(node: NodeId, interface: &str) -> Self {
        Self {
            node,
            interface: interface.to_owned(),
        }
    }
}
impl Display for InterfaceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.node, self.interface)
    }
}
