// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Topology model: networks

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::{Display as StrumDisplay, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(u32);

impl NetworkId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}
impl Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The link layer of a network
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LinkType {
    /// switch, hub or any other shared wired segment
    #[default]
    Broadcast,
    PointToPoint,
    Wireless,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// A network interfaces attach to. Membership is derived from the interfaces'
/// network references and indexed by the [`crate::Topology`].
pub struct Network {
    pub id: NetworkId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link_type: LinkType,
}

impl Network {
    pub fn new(id: NetworkId, name: &str, link_type: LinkType) -> Self {
        Self {
            id,
            name: name.to_owned(),
            link_type,
        }
    }
    pub fn is_wireless(&self) -> bool {
        self.link_type == LinkType::Wireless
    }
    pub fn is_point_to_point(&self) -> bool {
        self.link_type == LinkType::PointToPoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_link_type_names() {
        assert_eq!(LinkType::from_str("point-to-point"), Ok(LinkType::PointToPoint));
        assert_eq!(LinkType::Wireless.to_string(), "wireless");
        assert_eq!(LinkType::default(), LinkType::Broadcast);
    }
}
