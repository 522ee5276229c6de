// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Crate to declare tracing targets across the workspace and to set up the
//! tracing subscriber from a `target=level` configuration string.

pub mod control;
pub mod display;
pub mod targets;

// re-exports
pub use control::{TargetDb, TraceCtlError, TracingConfig, init};
pub use tracing_subscriber::filter::LevelFilter;
