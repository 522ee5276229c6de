// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Lifecycle command rendering. Commands are only rendered here; running them
//! is up to the process supervisor of the session.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use topology::Node;

use crate::descriptor::ServiceDescriptor;
use crate::errors::ServiceError;
use crate::registry::ServiceRegistry;

const PLACEHOLDER_OPEN: &str = "{{";
const PLACEHOLDER_CLOSE: &str = "}}";

#[derive(Clone, Debug, PartialEq)]
/// Where the files of a node live. Relative file names are relative to the node directory.
pub struct FileLayout {
    node_dir: PathBuf,
}

impl FileLayout {
    pub fn new(node_dir: impl Into<PathBuf>) -> Self {
        Self {
            node_dir: node_dir.into(),
        }
    }
    #[must_use]
    pub fn node_dir(&self) -> &Path {
        &self.node_dir
    }
    #[must_use]
    pub fn path_of(&self, filename: &str) -> PathBuf {
        let path = Path::new(filename);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.node_dir.join(path)
        }
    }
}

/// Substitute every `{{filename}}` in `template` with the path of that file,
/// which must be owned by `service`. An unterminated `{{` is kept verbatim.
pub fn render_command(
    service: &ServiceDescriptor,
    template: &str,
    layout: &FileLayout,
) -> Result<String, ServiceError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        let after = &rest[start + PLACEHOLDER_OPEN.len()..];
        let Some(end) = after.find(PLACEHOLDER_CLOSE) else {
            break;
        };
        let filename = after[..end].trim();
        if !service.owns(filename) {
            return Err(ServiceError::unknown_file(&service.name, filename));
        }
        out += &rest[..start];
        out += &*layout.path_of(filename).to_string_lossy();
        rest = &after[end + PLACEHOLDER_CLOSE.len()..];
    }
    out += rest;
    Ok(out)
}

fn render_all(
    service: &ServiceDescriptor,
    templates: &[String],
    layout: &FileLayout,
) -> Result<Vec<String>, ServiceError> {
    templates
        .iter()
        .map(|t| render_command(service, t, layout))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Rendered commands of one service
pub struct ServiceCommands {
    pub service: String,
    pub commands: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
/// What the process supervisor runs for a node: startup commands in dependency
/// order, shutdown commands in reverse order, and validation commands.
pub struct LifecyclePlan {
    pub startup: Vec<ServiceCommands>,
    pub shutdown: Vec<ServiceCommands>,
    pub validate: Vec<ServiceCommands>,
}

impl LifecyclePlan {
    pub fn new(
        registry: &ServiceRegistry,
        node: &Node,
        layout: &FileLayout,
    ) -> Result<Self, ServiceError> {
        let order = registry.startup_order(node)?;
        let mut plan = LifecyclePlan::default();
        for service in &order {
            plan.startup.push(ServiceCommands {
                service: service.name.clone(),
                commands: render_all(service, &service.commands.startup, layout)?,
            });
            plan.validate.push(ServiceCommands {
                service: service.name.clone(),
                commands: render_all(service, &service.commands.validate, layout)?,
            });
        }
        for service in order.iter().rev() {
            plan.shutdown.push(ServiceCommands {
                service: service.name.clone(),
                commands: render_all(service, &service.commands.shutdown, layout)?,
            });
        }
        Ok(plan)
    }
}

fn fmt_phase(
    f: &mut std::fmt::Formatter<'_>,
    phase: &str,
    entries: &[ServiceCommands],
) -> std::fmt::Result {
    writeln!(f, "{phase}:")?;
    for entry in entries.iter().filter(|e| !e.commands.is_empty()) {
        for command in &entry.commands {
            writeln!(f, "  {:<12} {command}", entry.service)?;
        }
    }
    Ok(())
}

impl Display for LifecyclePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_phase(f, "startup", &self.startup)?;
        fmt_phase(f, "validate", &self.validate)?;
        fmt_phase(f, "shutdown", &self.shutdown)
    }
}
