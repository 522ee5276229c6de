// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Tracing setup: target database and subscriber initialization.

use ordermap::OrderMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use crate::targets::TRACING_TARGETS;
use crate::trace_target;

trace_target!("tracectl", LevelFilter::INFO, &[]);

/// Default level for events whose target was not declared
pub const DEFAULT_LOGLEVEL: LevelFilter = LevelFilter::INFO;

#[derive(Debug, Error, PartialEq)]
pub enum TraceCtlError {
    #[error("Invalid syntax '{0}': it should be tag=loglevel")]
    InvalidSyntax(String),
    #[error("Invalid level '{0}'")]
    InvalidLevel(String),
    #[error("Unknown tracing tag '{0}'")]
    UnknownTag(String),
    #[error("Bad filter directive: {0}")]
    BadDirective(String),
    #[error("Tracing subscriber could not be installed: {0}")]
    InitFailure(String),
}

#[derive(Debug, Clone)]
pub struct TargetCfg {
    pub(crate) target: &'static str,
    pub(crate) name: &'static str,
    pub(crate) level: LevelFilter,
    pub(crate) tags: Vec<&'static str>,
}
impl TargetCfg {
    fn new(
        target: &'static str,
        name: &'static str,
        level: LevelFilter,
        tags: &'static [&'static str],
    ) -> Self {
        // a target can always be addressed by its name
        let mut tags = tags.to_vec();
        if !tags.contains(&name) {
            tags.push(name);
        }
        Self {
            target,
            name,
            level,
            tags,
        }
    }
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
    #[must_use]
    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

/// The set of tracing targets linked into the binary, with their current levels
#[derive(Debug)]
pub struct TargetDb {
    pub(crate) level: LevelFilter,
    pub(crate) targets: OrderMap<&'static str, TargetCfg>,
}

impl TargetDb {
    #[must_use]
    pub fn new(level: LevelFilter) -> Self {
        let mut targets = OrderMap::new();
        // load link-time-learnt targets
        for t in TRACING_TARGETS {
            targets.insert(t.target, TargetCfg::new(t.target, t.name, t.level, t.tags));
        }
        Self { level, targets }
    }
    #[must_use]
    pub fn default_level(&self) -> LevelFilter {
        self.level
    }
    pub fn targets(&self) -> impl Iterator<Item = &TargetCfg> {
        self.targets.values()
    }
    #[must_use]
    pub fn get_target_by_name(&self, name: &str) -> Option<&TargetCfg> {
        self.targets.values().find(|t| t.name == name)
    }

    /// Set the level of all targets having the given tag. Returns the number of targets matched.
    pub fn set_tag_level(&mut self, tag: &str, level: LevelFilter) -> usize {
        let mut matched = 0;
        for target in self.targets.values_mut() {
            if target.tags.contains(&tag) {
                target.level = level;
                matched += 1;
            }
        }
        matched
    }

    /// Apply a [`TracingConfig`]. `default` sets the level of undeclared targets
    /// and `all` sets every declared target; other keys are tags.
    pub fn apply(&mut self, config: &TracingConfig) -> Result<(), TraceCtlError> {
        for (tag, level) in &config.tags {
            match tag.as_str() {
                "default" => self.level = *level,
                "all" => {
                    self.targets.values_mut().for_each(|t| t.level = *level);
                }
                _ => {
                    if self.set_tag_level(tag, *level) == 0 {
                        return Err(TraceCtlError::UnknownTag(tag.clone()));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn env_filter(&self) -> Result<EnvFilter, TraceCtlError> {
        let mut filter = EnvFilter::new(self.level.to_string());
        for target in self.targets.values() {
            let directive = format!("{}={}", target.target, target.level)
                .parse()
                .map_err(|e| TraceCtlError::BadDirective(format!("{e}")))?;
            filter = filter.add_directive(directive);
        }
        Ok(filter)
    }

    /// A config string that would reproduce the current levels
    #[must_use]
    pub fn as_config_string(&self) -> String {
        let mut out = format!("default={}", self.level);
        for target in self.targets.values() {
            out += format!(",{}={}", target.name, target.level).as_str();
        }
        out
    }
}

/// Ordered `tag=level` pairs, as parsed from a comma-separated string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TracingConfig {
    pub tags: OrderMap<String, LevelFilter>,
}

impl FromStr for TracingConfig {
    type Err = TraceCtlError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tags = OrderMap::new();
        for item in input.split(',').map(str::trim).filter(|i| !i.is_empty()) {
            let Some((tag, level)) = item.split_once('=') else {
                return Err(TraceCtlError::InvalidSyntax(item.to_string()));
            };
            let level = LevelFilter::from_str(level.trim())
                .map_err(|_| TraceCtlError::InvalidLevel(level.trim().to_string()))?;
            tags.insert(tag.trim().to_string(), level);
        }
        Ok(Self { tags })
    }
}

/// Install a global subscriber filtering on the declared targets, after applying `config`.
/// Returns the target database that was used to build the filter.
pub fn init(config: Option<&TracingConfig>) -> Result<TargetDb, TraceCtlError> {
    let mut db = TargetDb::new(DEFAULT_LOGLEVEL);
    if let Some(config) = config {
        db.apply(config)?;
    }
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(db.env_filter()?)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TraceCtlError::InitFailure(e.to_string()))?;

    debug!("Tracing initialized: {}", db.as_config_string());
    Ok(db)
}
