// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Ordered line buffer used to build config files

use std::fmt::Display;
use std::ops::AddAssign;

/// Block terminator in FRR configs
pub const MARKER: &str = "!";

#[derive(Clone, Debug, Default, PartialEq)]
/// Object to ease building config files. Lines are kept in insertion order and
/// only joined when the builder is displayed, each line followed by a newline.
pub struct ConfigBuilder {
    lines: Vec<String>,
}

/// Impl Display for [`ConfigBuilder`]. This provides `to_string()`.
impl Display for ConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in &self.lines {
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Main operations on a [`ConfigBuilder`]
impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Vec::with_capacity(8),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
    fn append(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
    fn merge(&mut self, other: &mut Self) {
        self.lines.append(&mut other.lines);
    }
}

/// Make it very easy to add config lines to a [`ConfigBuilder`]
impl AddAssign<Self> for ConfigBuilder {
    fn add_assign(&mut self, mut rhs: Self) {
        self.merge(&mut rhs);
    }
}
impl AddAssign<String> for ConfigBuilder {
    fn add_assign(&mut self, rhs: String) {
        self.append(&rhs);
    }
}
impl AddAssign<&str> for ConfigBuilder {
    fn add_assign(&mut self, rhs: &str) {
        self.append(rhs);
    }
}
