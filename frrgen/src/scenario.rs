// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Scenario files: the session options and the topology to generate files for

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use services::FrrOptions;
use topology::Topology;

use crate::errors::FrrgenError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scenario {
    #[serde(default)]
    pub options: FrrOptions,
    pub topology: Topology,
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, FrrgenError> {
        debug!("Loading scenario from {}", path.display());
        let text =
            std::fs::read_to_string(path).map_err(|e| FrrgenError::Io(path.to_path_buf(), e))?;
        let scenario =
            Self::from_yaml(&text).map_err(|e| FrrgenError::Yaml(path.to_path_buf(), e))?;
        debug!(
            "Scenario has {} nodes and {} networks",
            scenario.topology.nodes().count(),
            scenario.topology.networks().count()
        );
        Ok(scenario)
    }
}
