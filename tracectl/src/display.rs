// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Display implementations

use crate::control::{TargetCfg, TargetDb};
use std::fmt::Display;

macro_rules! TARGET_FMT {
    () => {
        "{:>40} │ {:>8} │ {}"
    };
}

impl Display for TargetCfg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            format_args!(TARGET_FMT!(), self.target, self.level, self.tags.join(","))
        )
    }
}
impl Display for TargetDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "default level: {}", self.level)?;
        writeln!(
            f,
            "{}",
            format_args!(TARGET_FMT!(), "TARGET", "LEVEL", "TAGS")
        )?;
        for target in self.targets.values() {
            writeln!(f, "{target}")?;
        }
        Ok(())
    }
}
