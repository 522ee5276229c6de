// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Interface addresses as zebra statements

use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::errors::ServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Classify an address string in prefix notation. Dotted forms are IPv4,
    /// colon forms IPv6; the dotted check comes first.
    pub fn of(address: &str) -> Result<Self, ServiceError> {
        if address.contains('.') {
            Ok(AddressFamily::V4)
        } else if address.contains(':') {
            Ok(AddressFamily::V6)
        } else {
            Err(ServiceError::InvalidAddress(address.to_owned()))
        }
    }
    fn address_type_str(self) -> &'static str {
        match self {
            AddressFamily::V4 => "ip",
            AddressFamily::V6 => "ipv6",
        }
    }
}

/// The zebra statement assigning `address` to an interface
pub fn address_statement(address: &str) -> Result<String, ServiceError> {
    let family = AddressFamily::of(address)?;
    Ok(format!("{} address {address}", family.address_type_str()))
}

/// The addresses of `addresses` in the given family, in their original order
pub fn addresses_of_family<'a>(
    addresses: &'a [String],
    family: AddressFamily,
) -> impl Iterator<Item = &'a str> {
    addresses
        .iter()
        .map(String::as_str)
        .filter(move |a| AddressFamily::of(a).is_ok_and(|f| f == family))
}

/// The host part of an address in prefix notation
pub fn host_part(address: &str) -> &str {
    address.split('/').next().unwrap_or(address)
}

/// The IPv4 network an interface address belongs to, e.g. 10.0.0.0/24 for 10.0.0.1/24.
/// An address without prefix length is a host route.
pub fn ipv4_network(address: &str) -> Result<Ipv4Net, ServiceError> {
    let invalid = || ServiceError::InvalidAddress(address.to_owned());
    let net = if address.contains('/') {
        Ipv4Net::from_str(address).map_err(|_| invalid())?
    } else {
        let host = Ipv4Addr::from_str(address).map_err(|_| invalid())?;
        Ipv4Net::new(host, 32).map_err(|_| invalid())?
    };
    Ok(net.trunc())
}
