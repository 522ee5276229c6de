// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Service descriptors, the registry resolving them per node, and the config
//! assembler folding the fragments of dependent services into the files of
//! the service they depend on. The FRRouting family lives in [`frr`].

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
#![allow(clippy::module_name_repetitions)]

pub mod address;
pub mod assembler;
pub mod builder;
pub mod descriptor;
pub mod errors;
pub mod fragment;
pub mod frr;
pub mod lifecycle;
pub mod options;
pub mod registry;

pub use assembler::ConfigAssembler; // re-export
pub use builder::ConfigBuilder; // re-export
pub use descriptor::{LifecycleCommands, ServiceDescriptor}; // re-export
pub use errors::ServiceError; // re-export
pub use fragment::{FragmentContributor, NodeContext}; // re-export
pub use frr::ServiceKind; // re-export
pub use lifecycle::{FileLayout, LifecyclePlan}; // re-export
pub use options::{FrrOptions, FrrOptionsBuilder}; // re-export
pub use registry::ServiceRegistry; // re-export

use tracectl::trace_target;
trace_target!("services", LevelFilter::INFO, &["frrsvc"]);
