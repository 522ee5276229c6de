// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Read-only model of an emulated topology: nodes, their interfaces and the
//! networks interfaces attach to. The session owns and mutates this model;
//! config generators only query it.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod errors;
pub mod interface;
pub mod network;
pub mod node;
pub mod topology;

pub use errors::TopologyError; // re-export
pub use interface::{Interface, InterfaceRef, Mtu, Role}; // re-export
pub use network::{LinkType, Network, NetworkId}; // re-export
pub use node::{Node, NodeId}; // re-export
pub use topology::Topology; // re-export

use tracectl::trace_target;
trace_target!("topology", LevelFilter::INFO, &["frrsvc"]);
