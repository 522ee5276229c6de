// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::path::PathBuf;
use thiserror::Error;

use services::ServiceError;
use topology::TopologyError;
use tracectl::TraceCtlError;

#[derive(Debug, Error)]
pub(crate) enum FrrgenError {
    #[error("Failed to read scenario {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Invalid scenario {}: {}", .0.display(), .1)]
    Yaml(PathBuf, #[source] serde_yaml_ng::Error),
    #[error("Missing argument --{0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Topology(#[from] TopologyError),
    #[error("Tracing setup failed: {0}")]
    Tracing(#[from] TraceCtlError),
}
