// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The errors returned when registering services or generating their files.
//! None of them is retried here: the caller decides what to do with a failed
//! node/service pair.

use thiserror::Error;
use topology::TopologyError;

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("File '{filename}' is not a known configuration of service {service}")]
    UnknownConfigFile { service: String, filename: String },
    #[error("Invalid address: '{0}'")]
    InvalidAddress(String),
    #[error("A service named '{0}' is already registered")]
    DuplicateService(String),
    #[error("No service named '{0}' is registered")]
    UnknownService(String),
    #[error("Service {service} depends on {dependency}, which is not active")]
    MissingDependency { service: String, dependency: String },
    #[error("Services have cyclic dependencies: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

impl ServiceError {
    pub(crate) fn unknown_file(service: &str, filename: &str) -> Self {
        Self::UnknownConfigFile {
            service: service.to_owned(),
            filename: filename.to_owned(),
        }
    }
}
